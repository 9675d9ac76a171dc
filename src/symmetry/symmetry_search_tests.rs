use approx::assert_relative_eq;
use nalgebra::{Matrix3, Vector3};

use crate::auxiliary::cell::Cell;
use crate::auxiliary::geometry::Tolerance;
use crate::symmetry::symmetry_operation::SymmetryOperation;
use crate::symmetry::symmetry_search::{
    expand_operations, induced_permutation, match_operation, search_pure_translations,
    search_symmetry,
};

fn cubic(a: f64, positions: &[[f64; 3]], types: &[usize]) -> Cell {
    Cell::from_arrays([[a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a]], positions, types).unwrap()
}

#[test]
fn test_match_operation_cscl() {
    let cell = cubic(4.0, &[[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]], &[1, 2]);
    let tol = Tolerance::new(1e-5);

    let inversion = -Matrix3::<i32>::identity();
    let m = match_operation(&cell, &inversion, &Vector3::zeros(), &tol).unwrap();
    assert!(m.permutation.is_identity());
    assert!(m.max_residual < 1e-10);

    // Swapping species is never a symmetry.
    assert!(
        match_operation(&cell, &Matrix3::identity(), &Vector3::new(0.5, 0.5, 0.5), &tol).is_none()
    );

    let slightly_off = Vector3::new(1e-7, 0.0, 0.0);
    let m = match_operation(&cell, &Matrix3::identity(), &slightly_off, &tol).unwrap();
    assert_relative_eq!(m.refined_translation, Vector3::zeros(), epsilon = 1e-12);
}

#[test]
fn test_match_operation_takes_nearest_free_atom() {
    // Two close atoms of one species, listed so that the image of the second lies nearest the
    // first atom, which the image of the first has already claimed.
    let cell = cubic(4.0, &[[0.102, 0.0, 0.0], [0.1, 0.0, 0.0]], &[1, 1]);
    let tol = Tolerance::new(1e-2);
    let shift = Vector3::new(0.0015, 0.0, 0.0);
    let m = match_operation(&cell, &Matrix3::identity(), &shift, &tol).unwrap();
    assert!(m.permutation.is_identity());
    assert_relative_eq!(m.max_residual, 0.006, epsilon = 1e-9);
    assert_relative_eq!(m.refined_translation, Vector3::zeros(), epsilon = 1e-12);
}

#[test]
fn test_induced_permutation() {
    let cell = cubic(
        4.0,
        &[[0.1, 0.0, 0.0], [0.9, 0.0, 0.0]],
        &[1, 1],
    );
    let tol = Tolerance::new(1e-5);
    let inversion = SymmetryOperation::new(-Matrix3::identity(), Vector3::zeros());
    let perm = induced_permutation(&cell, &inversion, &tol).unwrap();
    assert_eq!(perm.image(), &[1, 0]);

    let shift = SymmetryOperation::pure_translation(Vector3::new(0.3, 0.0, 0.0));
    assert!(induced_permutation(&cell, &shift, &tol).is_none());
}

#[test]
fn test_pure_translations_bcc() {
    let cell = cubic(3.0, &[[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]], &[1, 1]);
    let translations = search_pure_translations(&cell, &Tolerance::new(1e-5)).unwrap();
    assert_eq!(translations.len(), 2);
    assert_eq!(translations[0], Vector3::zeros());
    assert_relative_eq!(translations[1], Vector3::new(0.5, 0.5, 0.5), epsilon = 1e-10);
}

#[test]
fn test_expand_operations() {
    let ops = vec![
        SymmetryOperation::identity(),
        SymmetryOperation::new(-Matrix3::identity(), Vector3::zeros()),
    ];
    let translations = vec![Vector3::zeros(), Vector3::new(0.5, 0.5, 0.5)];
    let expanded = expand_operations(&ops, &Matrix3::identity(), &translations);
    assert_eq!(expanded.len(), 4);
    assert_relative_eq!(
        expanded[3].translation,
        Vector3::new(0.5, 0.5, 0.5),
        epsilon = 1e-12
    );
}

#[test]
fn test_search_symmetry_simple_cubic() {
    let cell = cubic(4.0, &[[0.0, 0.0, 0.0]], &[1]);
    let result = search_symmetry(&cell, &Tolerance::new(1e-5)).unwrap();
    assert_eq!(result.operations.len(), 48);
    assert_eq!(result.primitive_operations.len(), 48);
    assert_eq!(result.pure_translations.len(), 1);
    assert_eq!(result.operations.operations()[0], SymmetryOperation::identity());
}

#[test]
fn test_search_symmetry_bcc() {
    let cell = cubic(3.0, &[[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]], &[1, 1]);
    let result = search_symmetry(&cell, &Tolerance::new(1e-5)).unwrap();
    assert_eq!(result.pure_translations.len(), 2);
    assert_eq!(result.primitive.cell.n_atoms(), 1);
    assert_eq!(result.primitive_operations.len(), 48);
    assert_eq!(result.operations.len(), 96);
    assert_eq!(result.operations.rotations().len(), 48);
}

#[test]
fn test_search_symmetry_broken_by_second_species() {
    let cell = cubic(4.0, &[[0.0, 0.0, 0.0], [0.5, 0.0, 0.0]], &[1, 2]);
    let result = search_symmetry(&cell, &Tolerance::new(1e-5)).unwrap();
    assert_eq!(result.operations.len(), 16);
    assert!(result
        .primitive_permutations
        .iter()
        .all(|perm| perm.rank() == 2));
}
