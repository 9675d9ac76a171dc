use nalgebra::{Matrix3, Vector3};

use crate::auxiliary::geometry::Tolerance;
use crate::symmetry::operation_set::OperationSet;
use crate::symmetry::symmetry_operation::SymmetryOperation;
use crate::symmetry::SymmetryError;

fn screw_41() -> SymmetryOperation {
    SymmetryOperation::new(
        Matrix3::new(0, -1, 0, 1, 0, 0, 0, 0, 1),
        Vector3::new(0.0, 0.0, 0.25),
    )
}

#[test]
fn test_operation_set_group_validation() {
    let basis = Matrix3::from_diagonal(&Vector3::new(4.0, 4.0, 6.0));
    let tol = Tolerance::new(1e-5);

    let s = screw_41();
    let s2 = s.compose(&s);
    let s3 = s2.compose(&s);
    let group = OperationSet::new(vec![SymmetryOperation::identity(), s.clone(), s2, s3]);
    assert!(group.validate_group(&basis, &tol).is_ok());
    assert_eq!(group.rotations().len(), 4);
    assert_eq!(group.pure_translations(), vec![Vector3::zeros()]);

    let wrapped = group
        .iter()
        .map(SymmetryOperation::wrapped)
        .collect::<Vec<_>>();
    let wrapped = OperationSet::new(wrapped);
    assert!(wrapped.validate_group(&basis, &tol).is_ok());

    let not_closed = OperationSet::new(vec![SymmetryOperation::identity(), s.clone()]);
    assert!(matches!(
        not_closed.validate_group(&basis, &tol),
        Err(SymmetryError::InternalInconsistency(_))
    ));

    let no_identity = OperationSet::new(vec![s.compose(&s)]);
    assert!(matches!(
        no_identity.validate_group(&basis, &tol),
        Err(SymmetryError::InternalInconsistency(_))
    ));
}

#[test]
fn test_operation_set_find() {
    let basis = Matrix3::from_diagonal(&Vector3::new(4.0, 4.0, 6.0));
    let tol = Tolerance::new(1e-5);
    let group = OperationSet::new(vec![SymmetryOperation::identity(), screw_41()]);
    let shifted = SymmetryOperation::new(screw_41().rotation, Vector3::new(1.0, -1.0, 1.25));
    assert_eq!(group.find(&shifted, &basis, &tol), Some(1));
    let off = SymmetryOperation::new(screw_41().rotation, Vector3::new(0.0, 0.0, 0.5));
    assert_eq!(group.find(&off, &basis, &tol), None);
    assert_eq!(group.len(), 2);
    assert!(!group.is_empty());
}
