use nalgebra::Matrix3;

use crate::auxiliary::cell::Lattice;
use crate::auxiliary::geometry::{det_i32, metric_preserved, Tolerance};
use crate::lattice::lattice_point_group;

#[test]
fn test_lattice_point_group_orders() {
    let tol = Tolerance::new(1e-5);
    let cases = [
        (Lattice::from_parameters([4.0, 4.0, 4.0], [90.0, 90.0, 90.0]), 48),
        (Lattice::new([[0.0, 2.0, 2.0], [2.0, 0.0, 2.0], [2.0, 2.0, 0.0]]), 48),
        (Lattice::new([[-2.0, 2.0, 2.0], [2.0, -2.0, 2.0], [2.0, 2.0, -2.0]]), 48),
        (Lattice::from_parameters([4.0, 4.0, 6.0], [90.0, 90.0, 90.0]), 16),
        (Lattice::from_parameters([3.0, 3.0, 5.0], [90.0, 90.0, 120.0]), 24),
        (Lattice::from_parameters([5.0, 5.0, 5.0], [70.0, 70.0, 70.0]), 12),
        (Lattice::from_parameters([3.0, 4.0, 5.0], [90.0, 90.0, 90.0]), 8),
        (Lattice::from_parameters([3.0, 4.0, 5.0], [90.0, 100.0, 90.0]), 4),
        (Lattice::from_parameters([3.1, 4.7, 5.3], [77.0, 84.0, 101.0]), 2),
    ];
    for (lattice, order) in cases {
        let rotations = lattice_point_group(&lattice, &tol).unwrap();
        assert_eq!(rotations.len(), order, "{lattice}");
        assert_eq!(rotations[0], Matrix3::identity());
        for w in &rotations {
            assert_eq!(det_i32(w).abs(), 1);
            assert!(metric_preserved(lattice.basis(), w, &tol.scaled(10.0)));
        }
    }
}

#[test]
fn test_lattice_point_group_skewed_basis() {
    let tol = Tolerance::new(1e-5);
    let cubic = Lattice::from_parameters([4.0, 4.0, 4.0], [90.0, 90.0, 90.0]);
    let skewed = cubic.transformed_integer(&Matrix3::new(1, 1, 0, 0, 1, 1, 0, 0, 1));
    let rotations = lattice_point_group(&skewed, &tol).unwrap();
    assert_eq!(rotations.len(), 48);
    assert!(rotations.contains(&-Matrix3::identity()));
}

#[test]
fn test_lattice_point_group_tolerance() {
    // A slightly distorted cubic lattice is recognised only with a loose tolerance.
    let distorted = Lattice::from_parameters([4.0, 4.0, 4.0005], [90.0, 90.0, 90.0]);
    let tight = lattice_point_group(&distorted, &Tolerance::new(1e-5)).unwrap();
    let loose = lattice_point_group(&distorted, &Tolerance::new(1e-2)).unwrap();
    assert_eq!(tight.len(), 16);
    assert_eq!(loose.len(), 48);
}
