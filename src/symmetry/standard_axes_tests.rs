use approx::assert_relative_eq;
use nalgebra::{Matrix3, Vector3};

use crate::auxiliary::cell::Lattice;
use crate::auxiliary::geometry::{det_i32, to_f64_matrix, Tolerance};
use crate::lattice::lattice_point_group;
use crate::symmetry::point_group::identify_point_group;
use crate::symmetry::standard_axes::{
    centring_translations, find_standard_axes, rotation_axis, StandardAxes,
};

fn axes_of(lattice: &Lattice) -> StandardAxes {
    let tol = Tolerance::new(1e-5);
    let rotations = lattice_point_group(lattice, &tol).unwrap();
    let pg = identify_point_group(&rotations).unwrap();
    find_standard_axes(lattice, &rotations, pg, &tol).unwrap()
}

fn conventional(lattice: &Lattice, axes: &StandardAxes) -> Lattice {
    lattice.transformed(&to_f64_matrix(&axes.transformation))
}

#[test]
fn test_rotation_axis() {
    let c4_z = Matrix3::new(0, -1, 0, 1, 0, 0, 0, 0, 1);
    assert_eq!(rotation_axis(&c4_z), Some(Vector3::new(0, 0, 1)));
    let c3_111 = Matrix3::new(0, 0, 1, 1, 0, 0, 0, 1, 0);
    assert_eq!(rotation_axis(&c3_111), Some(Vector3::new(1, 1, 1)));
    let c2_110 = Matrix3::new(0, 1, 0, 1, 0, 0, 0, 0, -1);
    assert_eq!(rotation_axis(&c2_110), Some(Vector3::new(1, 1, 0)));
}

#[test]
fn test_centring_translations() {
    assert_eq!(
        centring_translations(&Matrix3::identity()),
        Some(vec![Vector3::zeros()])
    );
    let c_centring = Matrix3::new(1, 1, 0, -1, 1, 0, 0, 0, 1);
    assert_eq!(
        centring_translations(&c_centring),
        Some(vec![Vector3::zeros(), Vector3::new(12, 12, 0)])
    );
    let face_centring = Matrix3::new(-1, 1, 1, 1, -1, 1, 1, 1, -1);
    assert_eq!(centring_translations(&face_centring).unwrap().len(), 4);
    assert!(centring_translations(&Matrix3::from_diagonal(&Vector3::new(5, 1, 1))).is_none());
}

#[test]
fn test_standard_axes_fcc() {
    let a = 4.0;
    let lattice = Lattice::new([
        [0.0, a / 2.0, a / 2.0],
        [a / 2.0, 0.0, a / 2.0],
        [a / 2.0, a / 2.0, 0.0],
    ]);
    let axes = axes_of(&lattice);
    assert_eq!(det_i32(&axes.transformation), 4);
    assert_eq!(
        axes.centring,
        vec![
            Vector3::zeros(),
            Vector3::new(0, 12, 12),
            Vector3::new(12, 0, 12),
            Vector3::new(12, 12, 0)
        ]
    );
    let conv = conventional(&lattice, &axes);
    for length in conv.lengths() {
        assert_relative_eq!(length, a, epsilon = 1e-10);
    }
    for angle in conv.angles() {
        assert_relative_eq!(angle, 90.0, epsilon = 1e-8);
    }
}

#[test]
fn test_standard_axes_body_centred_tetragonal() {
    let (a, c) = (3.0, 5.0);
    let lattice = Lattice::new([
        [-a / 2.0, a / 2.0, c / 2.0],
        [a / 2.0, -a / 2.0, c / 2.0],
        [a / 2.0, a / 2.0, -c / 2.0],
    ]);
    let axes = axes_of(&lattice);
    assert_eq!(det_i32(&axes.transformation), 2);
    assert_eq!(axes.centring[1], Vector3::new(12, 12, 12));
    let conv = conventional(&lattice, &axes);
    let lengths = conv.lengths();
    assert_relative_eq!(lengths[0], a, epsilon = 1e-10);
    assert_relative_eq!(lengths[1], a, epsilon = 1e-10);
    assert_relative_eq!(lengths[2], c, epsilon = 1e-10);
}

#[test]
fn test_standard_axes_rhombohedral_obverse() {
    let lattice = Lattice::from_parameters([5.0, 5.0, 5.0], [70.0, 70.0, 70.0]);
    let axes = axes_of(&lattice);
    assert_eq!(det_i32(&axes.transformation), 3);
    assert_eq!(
        axes.centring,
        vec![
            Vector3::zeros(),
            Vector3::new(8, 16, 16),
            Vector3::new(16, 8, 8)
        ]
    );
    let conv = conventional(&lattice, &axes);
    assert_relative_eq!(conv.angles()[2], 120.0, epsilon = 1e-8);
    assert!(conv.determinant() > 0.0);
}

#[test]
fn test_standard_axes_monoclinic_and_hexagonal() {
    let lattice = Lattice::from_parameters([5.0, 6.0, 7.0], [90.0, 100.0, 90.0]);
    let axes = axes_of(&lattice);
    assert_eq!(det_i32(&axes.transformation), 1);
    let conv = conventional(&lattice, &axes);
    assert_relative_eq!(conv.lengths()[1], 6.0, epsilon = 1e-10);
    assert_relative_eq!(conv.angles()[0], 90.0, epsilon = 1e-8);
    assert_relative_eq!(conv.angles()[2], 90.0, epsilon = 1e-8);

    let lattice = Lattice::from_parameters([3.0, 3.0, 5.0], [90.0, 90.0, 120.0]);
    let axes = axes_of(&lattice);
    let conv = conventional(&lattice, &axes);
    assert_eq!(axes.centring.len(), 1);
    assert_relative_eq!(conv.lengths()[2], 5.0, epsilon = 1e-10);
    assert_relative_eq!(conv.angles()[2], 120.0, epsilon = 1e-8);
}
