use crate::auxiliary::cell::Cell;
use crate::auxiliary::geometry::Tolerance;
use crate::permutation::Permutation;
use crate::symmetry::spin::{get_operations_with_collinear_spin, orbit_representatives};
use crate::symmetry::SymmetryError;

fn bcc_conventional() -> Cell {
    Cell::from_arrays(
        [[2.87, 0.0, 0.0], [0.0, 2.87, 0.0], [0.0, 0.0, 2.87]],
        &[[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]],
        &[26, 26],
    )
    .unwrap()
}

#[test]
fn test_ferromagnetic_bcc() {
    let tol = Tolerance::new(1e-5);
    let spin = get_operations_with_collinear_spin(&bcc_conventional(), &[2.2, 2.2], &tol).unwrap();
    assert_eq!(spin.operations.len(), 96);
    assert_eq!(spin.n_spin_flipping(), 0);
    assert_eq!(spin.equivalent_atoms, vec![0, 0]);
}

#[test]
fn test_antiferromagnetic_bcc() {
    let tol = Tolerance::new(1e-5);
    let spin =
        get_operations_with_collinear_spin(&bcc_conventional(), &[1.0, -1.0], &tol).unwrap();
    assert_eq!(spin.operations.len(), 96);
    assert_eq!(spin.n_spin_flipping(), 48);
    assert_eq!(spin.spin_preserving_operations().count(), 48);
    assert!(spin
        .spin_preserving_operations()
        .all(|op| op.translation.norm() < 1e-8));
    assert_eq!(spin.equivalent_atoms, vec![0, 0]);
}

#[test]
fn test_unequal_moments_break_symmetry() {
    let tol = Tolerance::new(1e-5);
    let spin = get_operations_with_collinear_spin(&bcc_conventional(), &[1.0, 0.5], &tol).unwrap();
    assert_eq!(spin.operations.len(), 48);
    assert_eq!(spin.equivalent_atoms, vec![0, 1]);

    assert!(matches!(
        get_operations_with_collinear_spin(&bcc_conventional(), &[1.0], &tol),
        Err(SymmetryError::InvalidCell(_))
    ));
}

#[test]
fn test_orbit_representatives() {
    let perms = [
        Permutation::from_image(&[1, 0, 2, 3]).unwrap(),
        Permutation::from_image(&[0, 1, 3, 2]).unwrap(),
    ];
    assert_eq!(orbit_representatives(4, &perms), vec![0, 0, 2, 2]);
    assert_eq!(orbit_representatives(3, &[]), vec![0, 1, 2]);
}
