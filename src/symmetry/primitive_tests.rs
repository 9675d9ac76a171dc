use approx::assert_relative_eq;
use nalgebra::Vector3;

use crate::auxiliary::cell::Cell;
use crate::auxiliary::geometry::Tolerance;
use crate::symmetry::primitive::find_primitive_cell;
use crate::symmetry::symmetry_search::search_pure_translations;
use crate::symmetry::SymmetryError;

#[test]
fn test_primitive_cell_fcc() {
    let a = 4.0;
    let cell = Cell::from_arrays(
        [[a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a]],
        &[
            [0.0, 0.0, 0.0],
            [0.0, 0.5, 0.5],
            [0.5, 0.0, 0.5],
            [0.5, 0.5, 0.0],
        ],
        &[1, 1, 1, 1],
    )
    .unwrap();
    let tol = Tolerance::new(1e-5);
    let translations = search_pure_translations(&cell, &tol).unwrap();
    assert_eq!(translations.len(), 4);

    let primitive = find_primitive_cell(&cell, &translations, &tol).unwrap();
    assert_eq!(primitive.n_translations, 4);
    assert_eq!(primitive.cell.n_atoms(), 1);
    assert_eq!(primitive.mapping_to_primitive, vec![0, 0, 0, 0]);
    assert_relative_eq!(
        primitive.cell.lattice().volume() * 4.0,
        cell.lattice().volume(),
        epsilon = 1e-8
    );
    assert!(primitive.cell.lattice().determinant() > 0.0);
    for length in primitive.cell.lattice().lengths() {
        assert_relative_eq!(length, a / 2.0_f64.sqrt(), epsilon = 1e-8);
    }
    assert_relative_eq!(
        primitive.transformation.determinant().abs(),
        0.25,
        epsilon = 1e-12
    );
}

#[test]
fn test_primitive_cell_averages_noisy_positions() {
    let cell = Cell::from_arrays(
        [[3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 3.0]],
        &[
            [0.0, 0.0, 0.0],
            [0.5 + 2e-6, 0.5, 0.5],
            [0.25, 0.25, 0.25],
            [0.75, 0.75, 0.75 - 2e-6],
        ],
        &[1, 1, 2, 2],
    )
    .unwrap();
    let tol = Tolerance::new(1e-4);
    let translations = search_pure_translations(&cell, &tol).unwrap();
    let primitive = find_primitive_cell(&cell, &translations, &tol).unwrap();
    assert_eq!(primitive.cell.n_atoms(), 2);
    assert_eq!(primitive.mapping_to_primitive, vec![0, 0, 1, 1]);
    assert_eq!(primitive.cell.types(), &[1, 2]);

    // Both sites map back onto their input atoms.
    let diff = primitive.transformation * primitive.cell.positions()[1]
        - cell.positions()[2];
    let residual = diff.map(|x| x - x.round());
    assert!((cell.lattice().basis() * residual).norm() < 1e-4);
}

#[test]
fn test_primitive_cell_of_primitive_input() {
    let cell = Cell::from_arrays(
        [[3.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 5.0]],
        &[[0.1, 0.2, 0.3]],
        &[7],
    )
    .unwrap();
    let tol = Tolerance::new(1e-5);
    let primitive = find_primitive_cell(&cell, &[Vector3::zeros()], &tol).unwrap();
    assert_eq!(primitive.n_translations, 1);
    assert_relative_eq!(
        primitive.cell.lattice().volume(),
        cell.lattice().volume(),
        epsilon = 1e-8
    );
}

#[test]
fn test_primitive_cell_rejects_inconsistent_translations() {
    let cell = Cell::from_arrays(
        [[3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 3.0]],
        &[[0.0, 0.0, 0.0], [0.5, 0.5, 0.5], [0.1, 0.1, 0.1]],
        &[1, 1, 1],
    )
    .unwrap();
    let tol = Tolerance::new(1e-5);
    let bogus = [Vector3::zeros(), Vector3::new(0.5, 0.5, 0.5)];
    assert!(matches!(
        find_primitive_cell(&cell, &bogus, &tol),
        Err(SymmetryError::InternalInconsistency(_))
    ));
}
