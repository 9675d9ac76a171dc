use approx::assert_relative_eq;
use nalgebra::{Matrix3, Vector3};

use crate::auxiliary::cell::{Cell, Lattice};
use crate::symmetry::SymmetryError;

#[test]
fn test_lattice_parameters() {
    let lattice = Lattice::from_parameters([3.0, 4.0, 5.0], [80.0, 95.0, 105.0]);
    let [a, b, c] = lattice.lengths();
    assert_relative_eq!(a, 3.0, epsilon = 1e-10);
    assert_relative_eq!(b, 4.0, epsilon = 1e-10);
    assert_relative_eq!(c, 5.0, epsilon = 1e-10);
    let [alpha, beta, gamma] = lattice.angles();
    assert_relative_eq!(alpha, 80.0, epsilon = 1e-8);
    assert_relative_eq!(beta, 95.0, epsilon = 1e-8);
    assert_relative_eq!(gamma, 105.0, epsilon = 1e-8);
    assert!(lattice.determinant() > 0.0);

    // Row-wise construction puts the vectors in columns.
    let lattice = Lattice::new([[1.0, 2.0, 3.0], [0.0, 4.0, 0.0], [0.0, 0.0, 5.0]]);
    assert_relative_eq!(lattice.vector(0), Vector3::new(1.0, 2.0, 3.0));
    assert_relative_eq!(
        lattice.to_cartesian(&Vector3::new(1.0, 1.0, 0.0)),
        Vector3::new(1.0, 6.0, 3.0)
    );
    let frac = lattice
        .to_fractional(&Vector3::new(1.0, 6.0, 3.0))
        .unwrap();
    assert_relative_eq!(frac, Vector3::new(1.0, 1.0, 0.0), epsilon = 1e-12);
}

#[test]
fn test_degenerate_lattice() {
    let lattice = Lattice::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]]);
    assert!(matches!(
        lattice.validate(),
        Err(SymmetryError::DegenerateLattice(_))
    ));
    let res = Cell::from_arrays(
        [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
        &[[0.0, 0.0, 0.0]],
        &[1],
    );
    assert!(matches!(res, Err(SymmetryError::DegenerateLattice(_))));
}

#[test]
fn test_invalid_cell() {
    let cubic = [[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]];
    assert!(matches!(
        Cell::from_arrays(cubic, &[[0.0, 0.0, 0.0]], &[1, 2]),
        Err(SymmetryError::InvalidCell(_))
    ));
    assert!(matches!(
        Cell::from_arrays(cubic, &[], &[]),
        Err(SymmetryError::InvalidCell(_))
    ));
    assert!(matches!(
        Cell::from_arrays(cubic, &[[f64::NAN, 0.0, 0.0]], &[1]),
        Err(SymmetryError::InvalidCell(_))
    ));
}

#[test]
fn test_cell_species_and_basis_change() {
    let cell = Cell::from_arrays(
        [[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]],
        &[[0.0, 0.0, 0.0], [0.5, 0.5, 0.5], [1.25, -0.5, 0.0]],
        &[3, 1, 3],
    )
    .unwrap();
    assert_eq!(cell.n_atoms(), 3);
    assert_eq!(cell.species_counts()[&3], 2);
    assert_eq!(cell.least_populated_species(), 1);
    assert_relative_eq!(cell.wrapped().positions()[2], Vector3::new(0.25, 0.5, 0.0));

    let m = Matrix3::new(1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
    let transformed = cell.change_basis(&m).unwrap();
    assert_relative_eq!(transformed.lattice().volume(), 64.0, epsilon = 1e-10);
    for (old, new) in cell.positions().iter().zip(transformed.positions()) {
        let old_cart = cell.lattice().to_cartesian(old);
        let new_cart = transformed.lattice().to_cartesian(new);
        let diff = cell.lattice().to_fractional(&(old_cart - new_cart)).unwrap();
        assert_relative_eq!(diff, diff.map(f64::round), epsilon = 1e-10);
    }
}
