use approx::assert_relative_eq;
use itertools::Itertools;
use nalgebra::{Matrix3, Rotation3, Vector3};
use proptest::prelude::*;

use crystsym::auxiliary::cell::{Cell, Lattice};
use crystsym::auxiliary::geometry::Tolerance;
use crystsym::symmetry::dataset::{find_primitive, get_symmetry_dataset, refine_cell};
use crystsym::symmetry::SymmetryError;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn cell(lattice: Lattice, positions: &[[f64; 3]], types: &[usize]) -> Cell {
    Cell::new(
        lattice,
        positions.iter().map(|p| Vector3::from(*p)).collect_vec(),
        types.to_vec(),
    )
    .unwrap()
}

fn nacl_primitive() -> Cell {
    cell(
        Lattice::new([[0.0, 2.82, 2.82], [2.82, 0.0, 2.82], [2.82, 2.82, 0.0]]),
        &[[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]],
        &[11, 17],
    )
}

fn diamond() -> Cell {
    cell(
        Lattice::new([[3.567, 0.0, 0.0], [0.0, 3.567, 0.0], [0.0, 0.0, 3.567]]),
        &[
            [0.0, 0.0, 0.0],
            [0.0, 0.5, 0.5],
            [0.5, 0.0, 0.5],
            [0.5, 0.5, 0.0],
            [0.25, 0.25, 0.25],
            [0.25, 0.75, 0.75],
            [0.75, 0.25, 0.75],
            [0.75, 0.75, 0.25],
        ],
        &[6; 8],
    )
}

fn rutile() -> Cell {
    let u = 0.3048;
    cell(
        Lattice::new([[4.594, 0.0, 0.0], [0.0, 4.594, 0.0], [0.0, 0.0, 2.959]]),
        &[
            [0.0, 0.0, 0.0],
            [0.5, 0.5, 0.5],
            [u, u, 0.0],
            [1.0 - u, 1.0 - u, 0.0],
            [0.5 + u, 0.5 - u, 0.5],
            [0.5 - u, 0.5 + u, 0.5],
        ],
        &[22, 22, 8, 8, 8, 8],
    )
}

fn wurtzite() -> Cell {
    let u = 0.382;
    cell(
        Lattice::from_parameters([3.25, 3.25, 5.207], [90.0, 90.0, 120.0]),
        &[
            [1.0 / 3.0, 2.0 / 3.0, 0.0],
            [2.0 / 3.0, 1.0 / 3.0, 0.5],
            [1.0 / 3.0, 2.0 / 3.0, u],
            [2.0 / 3.0, 1.0 / 3.0, 0.5 + u],
        ],
        &[30, 30, 8, 8],
    )
}

fn monoclinic_p21c() -> Cell {
    let (x, y, z) = (0.13, 0.27, 0.36);
    cell(
        Lattice::from_parameters([5.1, 6.3, 7.2], [90.0, 101.5, 90.0]),
        &[
            [x, y, z],
            [-x, y + 0.5, -z + 0.5],
            [-x, -y, -z],
            [x, -y + 0.5, z + 0.5],
        ],
        &[1; 4],
    )
}

fn c2m() -> Cell {
    let (x, z) = (0.21, 0.33);
    cell(
        Lattice::from_parameters([5.5, 3.9, 6.1], [90.0, 104.0, 90.0]),
        &[
            [0.0, 0.0, 0.0],
            [0.5, 0.5, 0.0],
            [x, 0.0, z],
            [x + 0.5, 0.5, z],
            [-x, 0.0, -z],
            [0.5 - x, 0.5, -z],
        ],
        &[1, 1, 2, 2, 2, 2],
    )
}

fn p21m() -> Cell {
    let (x, z) = (0.17, 0.62);
    let (u, v, w) = (0.31, 0.08, 0.24);
    cell(
        Lattice::from_parameters([4.8, 3.7, 6.6], [90.0, 103.0, 90.0]),
        &[
            [x, 0.25, z],
            [-x, 0.75, -z],
            [u, v, w],
            [-u, v + 0.5, -w],
            [-u, -v, -w],
            [u, 0.5 - v, w],
        ],
        &[1, 1, 2, 2, 2, 2],
    )
}

/// Checks that two cells share their lattice and, modulo lattice translations, their atoms.
fn assert_same_cell(first: &Cell, second: &Cell) {
    assert_relative_eq!(
        first.lattice().basis(),
        second.lattice().basis(),
        epsilon = 1e-8
    );
    assert_eq!(first.n_atoms(), second.n_atoms());
    for (pos, t) in second.positions().iter().zip(second.types()) {
        assert!(
            first
                .positions()
                .iter()
                .zip(first.types())
                .any(|(p, u)| u == t && (pos - p).map(|x| x - x.round()).norm() < 1e-8),
            "atom of type {t} at {pos:?} not found"
        );
    }
}

#[test]
fn test_nacl_primitive() {
    init_logger();
    let dataset = get_symmetry_dataset(&nacl_primitive(), &Tolerance::new(1e-5)).unwrap();
    assert_eq!(dataset.number, 225);
    assert_eq!(dataset.international, "Fm-3m");
    assert_eq!(dataset.n_operations(), 48);
    assert_eq!(dataset.equivalent_atoms, vec![0, 1]);
    assert_eq!(dataset.multiplicities, vec![4, 4]);
    assert_ne!(dataset.wyckoffs[0], dataset.wyckoffs[1]);
    assert_eq!(dataset.primitive.n_atoms(), 2);
    assert_eq!(dataset.standardized.n_atoms(), 8);
    assert_relative_eq!(
        dataset.standardized.lattice().volume(),
        4.0 * nacl_primitive().lattice().volume(),
        epsilon = 1e-8
    );
}

#[test]
fn test_diamond() {
    init_logger();
    let dataset = get_symmetry_dataset(&diamond(), &Tolerance::new(1e-5)).unwrap();
    assert_eq!(dataset.number, 227);
    assert_eq!(dataset.bravais_lattice, "cF");
    assert_eq!(dataset.n_operations(), 192);
    assert!(dataset.equivalent_atoms.iter().all(|&i| i == 0));
    assert!(dataset.wyckoffs.iter().all_equal());
    assert!(dataset.multiplicities.iter().all(|&m| m == 8));
    assert!(dataset.site_symmetry_symbols.iter().all(|s| s == "-43m"));
    assert_eq!(dataset.primitive.n_atoms(), 2);
}

#[test]
fn test_rutile() {
    init_logger();
    let dataset = get_symmetry_dataset(&rutile(), &Tolerance::new(1e-5)).unwrap();
    assert_eq!(dataset.number, 136);
    assert_eq!(dataset.international, "P4_2/mnm");
    assert_eq!(dataset.bravais_lattice, "tP");
    assert_eq!(dataset.n_operations(), 16);
    assert_eq!(dataset.equivalent_atoms, vec![0, 0, 2, 2, 2, 2]);
    assert_eq!(dataset.multiplicities, vec![2, 2, 4, 4, 4, 4]);
    assert_eq!(dataset.site_symmetry_symbols[0], "mmm");
    assert_eq!(dataset.site_symmetry_symbols[2], "mm2");
}

#[test]
fn test_wurtzite() {
    init_logger();
    let dataset = get_symmetry_dataset(&wurtzite(), &Tolerance::new(1e-5)).unwrap();
    assert_eq!(dataset.number, 186);
    assert_eq!(dataset.international, "P6_3mc");
    assert_eq!(dataset.bravais_lattice, "hP");
    assert_eq!(dataset.n_operations(), 12);
    assert_eq!(dataset.equivalent_atoms, vec![0, 0, 2, 2]);
    assert_eq!(dataset.multiplicities, vec![2, 2, 2, 2]);
    assert!(dataset.site_symmetry_symbols.iter().all(|s| s == "3m"));
}

#[test]
fn test_monoclinic_p21c() {
    init_logger();
    let dataset = get_symmetry_dataset(&monoclinic_p21c(), &Tolerance::new(1e-5)).unwrap();
    assert_eq!(dataset.number, 14);
    assert_eq!(dataset.bravais_lattice, "mP");
    assert_eq!(dataset.n_operations(), 4);
    assert_eq!(dataset.equivalent_atoms, vec![0, 0, 0, 0]);
    assert_eq!(dataset.multiplicities, vec![4, 4, 4, 4]);
    assert_eq!(dataset.site_symmetry_orders, vec![1, 1, 1, 1]);
}

#[test]
fn test_base_centred_orthorhombic() {
    init_logger();
    let cmmm = cell(
        Lattice::new([[3.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, 4.0]]),
        &[[0.0, 0.0, 0.0], [0.5, 0.5, 0.0]],
        &[1, 1],
    );
    let dataset = get_symmetry_dataset(&cmmm, &Tolerance::new(1e-5)).unwrap();
    assert_eq!(dataset.number, 65);
    assert_eq!(dataset.bravais_lattice, "oC");
    assert_eq!(dataset.n_operations(), 16);
    assert_eq!(dataset.primitive.n_atoms(), 1);
    assert_eq!(dataset.mapping_to_primitive, vec![0, 0]);

    let primitive = find_primitive(&cmmm, &Tolerance::new(1e-5)).unwrap();
    assert_eq!(primitive.n_atoms(), 1);
    assert_relative_eq!(primitive.lattice().volume(), 30.0, epsilon = 1e-8);
}

#[test]
fn test_triclinic() {
    init_logger();
    let lattice = Lattice::from_parameters([3.3, 4.1, 5.2], [81.0, 94.0, 103.0]);
    let p1 = cell(
        lattice.clone(),
        &[[0.0, 0.0, 0.0], [0.21, 0.34, 0.45]],
        &[1, 2],
    );
    let dataset = get_symmetry_dataset(&p1, &Tolerance::new(1e-5)).unwrap();
    assert_eq!(dataset.number, 1);
    assert_eq!(dataset.n_operations(), 1);
    assert_eq!(dataset.bravais_lattice, "aP");
    assert_eq!(dataset.equivalent_atoms, vec![0, 1]);

    let p_1 = cell(lattice, &[[0.21, 0.34, 0.45], [-0.21, -0.34, -0.45]], &[1, 1]);
    let dataset = get_symmetry_dataset(&p_1, &Tolerance::new(1e-5)).unwrap();
    assert_eq!(dataset.number, 2);
    assert_eq!(dataset.n_operations(), 2);
    assert_eq!(dataset.equivalent_atoms, vec![0, 0]);
    assert_eq!(dataset.multiplicities, vec![2, 2]);
}

#[test]
fn test_invalid_cells() {
    init_logger();
    let flat = Lattice::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]]);
    assert!(matches!(
        Cell::new(flat, vec![Vector3::zeros()], vec![1]),
        Err(SymmetryError::DegenerateLattice(_))
    ));

    let cubic = Lattice::new([[3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 3.0]]);
    assert!(matches!(
        Cell::new(cubic.clone(), vec![Vector3::zeros()], vec![1, 2]),
        Err(SymmetryError::InvalidCell(_))
    ));
    assert!(matches!(
        Cell::new(cubic, vec![], vec![]),
        Err(SymmetryError::InvalidCell(_))
    ));
}

#[test]
fn test_refined_cell_recovers_symmetry_at_tight_tolerance() {
    init_logger();
    let noisy = cell(
        Lattice::new([[4.594, 0.0002, 0.0], [0.0, 4.5938, 0.0], [0.0, 0.0, 2.9591]]),
        &[
            [0.0001, 0.0, 0.0],
            [0.5, 0.49995, 0.5],
            [0.3049, 0.3047, 0.0],
            [0.6952, 0.6951, 0.0001],
            [0.8048, 0.1952, 0.5],
            [0.1953, 0.8049, 0.49995],
        ],
        &[22, 22, 8, 8, 8, 8],
    );
    let loose = Tolerance::new(2e-3);
    assert_eq!(get_symmetry_dataset(&noisy, &loose).unwrap().number, 136);
    let refined = refine_cell(&noisy, &loose).unwrap();
    let dataset = get_symmetry_dataset(&refined, &Tolerance::new(1e-8)).unwrap();
    assert_eq!(dataset.number, 136);
    assert_eq!(dataset.n_operations(), 16);
}

#[test]
fn test_refine_cell_is_idempotent() {
    init_logger();
    let tol = Tolerance::new(1e-5);
    let shifted = {
        let reference = rutile();
        let shift = Vector3::new(0.17, 0.41, 0.08);
        Cell::new(
            reference.lattice().clone(),
            reference.positions().iter().map(|p| p + shift).collect_vec(),
            reference.types().to_vec(),
        )
        .unwrap()
    };
    for (structure, number) in [
        (monoclinic_p21c(), 14),
        (p21m(), 11),
        (c2m(), 12),
        (wurtzite(), 186),
        (rutile(), 136),
        (shifted, 136),
    ] {
        let refined = refine_cell(&structure, &tol).unwrap();
        let again = refine_cell(&refined, &tol).unwrap();
        assert_same_cell(&refined, &again);

        let dataset = get_symmetry_dataset(&refined, &tol).unwrap();
        assert_eq!(dataset.number, number);
        assert_relative_eq!(
            dataset.transformation_matrix,
            Matrix3::identity(),
            epsilon = 1e-8
        );
        assert_relative_eq!(
            dataset.origin_shift.map(|x| x - x.round()).norm(),
            0.0,
            epsilon = 1e-8
        );
    }
}

#[test]
fn test_refine_cell_keeps_obtuse_monoclinic_angle() {
    init_logger();
    let tol = Tolerance::new(1e-5);
    for structure in [monoclinic_p21c(), p21m(), c2m()] {
        let refined = refine_cell(&structure, &tol).unwrap();
        let [alpha, beta, gamma] = refined.lattice().angles();
        assert_relative_eq!(alpha, 90.0, epsilon = 1e-8);
        assert!(beta > 90.0);
        assert_relative_eq!(gamma, 90.0, epsilon = 1e-8);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_rigid_motions_preserve_space_group(
        alpha in -3.1f64..3.1,
        beta in -1.5f64..1.5,
        gamma in -3.1f64..3.1,
        shift in prop::array::uniform3(0.0f64..1.0),
        offset in 0usize..6,
    ) {
        let reference = rutile();
        let rotation = Rotation3::from_euler_angles(alpha, beta, gamma).into_inner();
        let shift = Vector3::from(shift);
        let order = (0..reference.n_atoms())
            .map(|i| (i + offset) % reference.n_atoms())
            .collect_vec();
        let moved = Cell::new(
            Lattice::from_basis(rotation * reference.lattice().basis()),
            order
                .iter()
                .map(|&i| reference.positions()[i] + shift)
                .collect_vec(),
            order.iter().map(|&i| reference.types()[i]).collect_vec(),
        )
        .unwrap();

        let tol = Tolerance::new(1e-5);
        let expected = get_symmetry_dataset(&reference, &tol).unwrap();
        let dataset = get_symmetry_dataset(&moved, &tol).unwrap();
        prop_assert_eq!(dataset.number, expected.number);
        prop_assert_eq!(dataset.n_operations(), expected.n_operations());
        prop_assert_eq!(
            dataset.multiplicities.iter().sorted().collect_vec(),
            expected.multiplicities.iter().sorted().collect_vec()
        );
        for (k, &i) in order.iter().enumerate() {
            for (l, &j) in order.iter().enumerate() {
                prop_assert_eq!(
                    dataset.equivalent_atoms[k] == dataset.equivalent_atoms[l],
                    expected.equivalent_atoms[i] == expected.equivalent_atoms[j]
                );
            }
        }
        let r = dataset.std_rotation_matrix;
        prop_assert!((r * r.transpose() - nalgebra::Matrix3::identity()).norm() < 1e-8);
    }
}
