use std::collections::HashSet;

use approx::assert_relative_eq;
use nalgebra::{Matrix3, Vector3};

use crate::auxiliary::cell::{Cell, Lattice};
use crate::auxiliary::geometry::{
    cartesian_residual, det_i32, positions_coincide, wrap_fractional, Tolerance,
};
use crate::database::records_for_number;
use crate::symmetry::point_group::CrystalSystem;
use crate::symmetry::space_group::{match_space_group, setting_trials, SpaceGroupMatch};
use crate::symmetry::symmetry_operation::SymmetryOperation;
use crate::symmetry::symmetry_search::search_symmetry;
use crate::symmetry::SymmetryError;

fn generic_lattice(crystal_system: CrystalSystem) -> Lattice {
    match crystal_system {
        CrystalSystem::Triclinic => {
            Lattice::from_parameters([4.1, 5.3, 6.2], [81.0, 96.0, 104.0])
        }
        CrystalSystem::Monoclinic => {
            Lattice::from_parameters([5.1, 6.3, 7.4], [90.0, 104.0, 90.0])
        }
        CrystalSystem::Orthorhombic => {
            Lattice::from_parameters([4.3, 5.7, 6.9], [90.0, 90.0, 90.0])
        }
        CrystalSystem::Tetragonal => {
            Lattice::from_parameters([4.5, 4.5, 6.7], [90.0, 90.0, 90.0])
        }
        CrystalSystem::Trigonal | CrystalSystem::Hexagonal => {
            Lattice::from_parameters([4.2, 4.2, 7.3], [90.0, 90.0, 120.0])
        }
        CrystalSystem::Cubic => Lattice::from_parameters([5.4, 5.4, 5.4], [90.0, 90.0, 90.0]),
    }
}

/// Builds the conventional cell of the first setting of a space-group type by expanding one
/// general-position orbit per seed, each seed with its own species.
fn cell_of_space_group(number: usize, seeds: &[[f64; 3]]) -> Cell {
    let record = records_for_number(number)[0];
    let lattice = generic_lattice(record.crystal_system());
    let tol = Tolerance::new(1e-5);
    let mut positions: Vec<Vector3<f64>> = vec![];
    let mut types = vec![];
    for (species, seed) in seeds.iter().enumerate() {
        for op in &record.operations {
            let pos = wrap_fractional(&op.to_operation().apply(&Vector3::from(*seed)));
            let seen = positions
                .iter()
                .zip(types.iter())
                .any(|(p, t)| *t == species && positions_coincide(lattice.basis(), p, &pos, &tol));
            if !seen {
                positions.push(pos);
                types.push(species);
            }
        }
    }
    Cell::new(lattice, positions, types).unwrap()
}

fn identify(cell: &Cell) -> SpaceGroupMatch {
    let tol = Tolerance::new(1e-5);
    let result = search_symmetry(cell, &tol).unwrap();
    let m = match_space_group(
        result.primitive.cell.lattice(),
        &result.primitive_operations,
        &tol,
    )
    .unwrap();
    let basis = result.primitive.cell.lattice().basis();
    for op in &result.primitive_operations {
        let exact = m.exact_primitive_operation(&op.rotation).unwrap();
        assert!(cartesian_residual(basis, &(exact.translation - op.translation)) < 1e-4);
    }
    m
}

#[test]
fn test_setting_trials() {
    let monoclinic = setting_trials(CrystalSystem::Monoclinic);
    assert_eq!(monoclinic.len(), 20);
    assert_eq!(monoclinic[0], nalgebra::Matrix3::identity());
    assert_eq!(monoclinic.iter().collect::<HashSet<_>>().len(), 20);
    assert!(monoclinic.iter().all(|q| det_i32(q) == 1 && q[(1, 1)] == 1));

    let orthorhombic = setting_trials(CrystalSystem::Orthorhombic);
    assert_eq!(orthorhombic.iter().collect::<HashSet<_>>().len(), 6);
    assert!(orthorhombic.iter().all(|q| det_i32(q) == 1));

    assert_eq!(setting_trials(CrystalSystem::Cubic).len(), 2);
    assert_eq!(setting_trials(CrystalSystem::Hexagonal).len(), 1);
}

#[test]
fn test_match_cubic_lattices() {
    let a = 3.5;
    let simple = Cell::from_arrays(
        [[a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a]],
        &[[0.0, 0.0, 0.0]],
        &[1],
    )
    .unwrap();
    let m = identify(&simple);
    assert_eq!(m.number(), 221);
    assert_eq!(det_i32(&m.transformation), 1);

    let bcc = Cell::from_arrays(
        [[-a / 2.0, a / 2.0, a / 2.0], [a / 2.0, -a / 2.0, a / 2.0], [a / 2.0, a / 2.0, -a / 2.0]],
        &[[0.0, 0.0, 0.0]],
        &[1],
    )
    .unwrap();
    let m = identify(&bcc);
    assert_eq!(m.number(), 229);
    assert_eq!(det_i32(&m.transformation), 2);

    let fcc = Cell::from_arrays(
        [[0.0, a / 2.0, a / 2.0], [a / 2.0, 0.0, a / 2.0], [a / 2.0, a / 2.0, 0.0]],
        &[[0.0, 0.0, 0.0]],
        &[1],
    )
    .unwrap();
    let m = identify(&fcc);
    assert_eq!(m.number(), 225);
    assert_eq!(m.record.centring_symbol(), 'F');
    assert_eq!(det_i32(&m.transformation), 4);
}

#[test]
fn test_match_origin_shift() {
    let a = 4.1;
    let cscl = Cell::from_arrays(
        [[a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a]],
        &[[0.1, 0.1, 0.1], [0.6, 0.6, 0.6]],
        &[1, 2],
    )
    .unwrap();
    let m = identify(&cscl);
    assert_eq!(m.number(), 221);
    assert_relative_eq!(m.origin_shift, Vector3::new(-0.1, -0.1, -0.1), epsilon = 1e-8);
}

#[test]
fn test_match_centrosymmetric_space_groups() {
    let seeds = [[0.1234, 0.2871, 0.3619]];
    for number in [
        2, 14, 15, 62, 63, 70, 88, 139, 142, 148, 167, 176, 194, 205, 227, 230,
    ] {
        let cell = cell_of_space_group(number, &seeds);
        let m = identify(&cell);
        assert_eq!(m.number(), number);
        assert_eq!(
            det_i32(&m.transformation) as usize,
            m.record.centring().len(),
            "{}",
            m.record
        );
    }
}

#[test]
fn test_match_noncentrosymmetric_space_groups() {
    let seeds = [[0.1234, 0.2871, 0.3619], [0.3417, 0.0823, 0.7158]];
    for number in [4, 9, 19, 33, 43, 76, 122, 144, 161, 173, 198, 212, 220] {
        let cell = cell_of_space_group(number, &seeds);
        let m = identify(&cell);
        assert_eq!(m.number(), number);
        assert!(!m.point_group.is_centrosymmetric());
    }
}

#[test]
fn test_match_rejects_inconsistent_screw() {
    // A twofold rotation paired with a quarter translation along its axis squares to a
    // half translation, which no primitive monoclinic setting contains.
    let lattice = generic_lattice(CrystalSystem::Monoclinic);
    let operations = [
        SymmetryOperation::new(Matrix3::identity(), Vector3::zeros()),
        SymmetryOperation::new(
            Matrix3::from_diagonal(&Vector3::new(-1, 1, -1)),
            Vector3::new(0.0, 0.25, 0.0),
        ),
    ];
    assert!(matches!(
        match_space_group(&lattice, &operations, &Tolerance::new(1e-5)),
        Err(SymmetryError::UnrecognizedSymmetry(_))
    ));
}
