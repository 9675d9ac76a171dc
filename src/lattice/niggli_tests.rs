use approx::assert_relative_eq;
use nalgebra::Matrix3;

use crate::auxiliary::cell::Lattice;
use crate::auxiliary::geometry::{det_i32, to_f64_matrix, Tolerance};
use crate::lattice::niggli::{is_niggli_reduced, niggli_reduce};
use crate::symmetry::SymmetryError;

fn skew(lattice: &Lattice, m: &Matrix3<i32>) -> Lattice {
    lattice.transformed_integer(m)
}

#[test]
fn test_niggli_skewed_cubic() {
    let tol = Tolerance::new(1e-5);
    let cubic = Lattice::new([[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]]);
    let skewed = skew(&cubic, &Matrix3::new(1, 1, 0, 0, 1, 1, 0, 0, 1));
    assert!(!is_niggli_reduced(&skewed, &tol));

    let (reduced, m) = niggli_reduce(&skewed, &tol).unwrap();
    assert_eq!(det_i32(&m).abs(), 1);
    assert_relative_eq!(
        skewed.basis() * to_f64_matrix(&m),
        *reduced.basis(),
        epsilon = 1e-10
    );
    for length in reduced.lengths() {
        assert_relative_eq!(length, 4.0, epsilon = 1e-8);
    }
    for angle in reduced.angles() {
        assert_relative_eq!(angle, 90.0, epsilon = 1e-6);
    }
    assert!(is_niggli_reduced(&reduced, &tol));
}

#[test]
fn test_niggli_face_centred_cubic() {
    let tol = Tolerance::new(1e-5);
    let fcc = Lattice::new([[0.0, 2.0, 2.0], [2.0, 0.0, 2.0], [2.0, 2.0, 0.0]]);
    let skewed = skew(&fcc, &Matrix3::new(1, 2, -1, 0, 1, 3, 0, 0, 1));
    let (reduced, _) = niggli_reduce(&skewed, &tol).unwrap();
    for length in reduced.lengths() {
        assert_relative_eq!(length, 8.0_f64.sqrt(), epsilon = 1e-8);
    }
    for angle in reduced.angles() {
        assert_relative_eq!(angle, 60.0, epsilon = 1e-6);
    }
    assert_relative_eq!(reduced.volume(), fcc.volume(), epsilon = 1e-8);
}

#[test]
fn test_niggli_body_centred_cubic() {
    let tol = Tolerance::new(1e-5);
    let bcc = Lattice::new([[-2.0, 2.0, 2.0], [2.0, -2.0, 2.0], [2.0, 2.0, -2.0]]);
    let skewed = skew(&bcc, &Matrix3::new(1, 0, 0, -2, 1, 0, 1, 1, 1));
    let (reduced, _) = niggli_reduce(&skewed, &tol).unwrap();
    for length in reduced.lengths() {
        assert_relative_eq!(length, 12.0_f64.sqrt(), epsilon = 1e-8);
    }
}

#[test]
fn test_niggli_conditions_triclinic() {
    let tol = Tolerance::new(1e-5);
    let triclinic = Lattice::from_parameters([3.1, 4.7, 5.3], [77.0, 84.0, 101.0]);
    let skewed = skew(&triclinic, &Matrix3::new(2, 1, 0, 1, 1, 0, 3, -1, 1));
    let (reduced, m) = niggli_reduce(&skewed, &tol).unwrap();
    assert_eq!(det_i32(&m), 1);
    let g = reduced.metric();
    let (a, b, c) = (g[(0, 0)], g[(1, 1)], g[(2, 2)]);
    let (xi, eta, zeta) = (2.0 * g[(1, 2)], 2.0 * g[(0, 2)], 2.0 * g[(0, 1)]);
    let eps = 1e-6;
    assert!(a <= b + eps && b <= c + eps);
    assert!(xi.abs() <= b + eps && eta.abs() <= a + eps && zeta.abs() <= a + eps);
    assert!((xi > 0.0 && eta > 0.0 && zeta > 0.0) || (xi <= eps && eta <= eps && zeta <= eps));
    assert!(xi + eta + zeta + a + b >= -eps);
    assert_relative_eq!(reduced.volume(), triclinic.volume(), epsilon = 1e-8);
}

#[test]
fn test_niggli_degenerate() {
    let tol = Tolerance::new(1e-5);
    let flat = Lattice::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [2.0, 3.0, 0.0]]);
    assert!(matches!(
        niggli_reduce(&flat, &tol),
        Err(SymmetryError::DegenerateLattice(_))
    ));
}

#[test]
fn test_niggli_fails_without_convergence() {
    // A negative threshold makes the swap of equal axes applicable forever.
    let cubic = Lattice::new([[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]]);
    assert!(matches!(
        niggli_reduce(&cubic, &Tolerance::new(-1e-5)),
        Err(SymmetryError::ReductionFailed {
            algorithm: "Niggli",
            ..
        })
    ));
}
