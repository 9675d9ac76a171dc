use approx::assert_relative_eq;
use nalgebra::{DMatrix, DVector, Matrix3, Vector3};

use crate::auxiliary::geometry::{
    angles_equal, conjugate_integer_matrix, det_i32, diagonalise_integer_matrix,
    inverse_unimodular, is_lattice_vector, lengths_equal, metric_preserved,
    positions_coincide, primitive_integer_vector, solve_modular_congruence, wrap_centred,
    wrap_fractional, Tolerance,
};

#[test]
fn test_tolerance_builder() {
    let tol = Tolerance::builder().build().unwrap();
    assert_eq!(tol, Tolerance::new(1e-5));

    let tol = Tolerance::builder()
        .symprec(1e-3)
        .angle_tolerance(Some(1.0))
        .build()
        .unwrap();
    assert_eq!(tol, Tolerance::with_angle_tolerance(1e-3, 1.0));
    assert_relative_eq!(tol.scaled(3.0).symprec, 3e-3);
}

#[test]
fn test_lengths_and_angles_equal() {
    let tol = Tolerance::new(1e-3);
    assert!(lengths_equal(4.0, 4.0005, &tol));
    assert!(!lengths_equal(4.0, 4.002, &tol));

    let x = Vector3::new(4.0, 0.0, 0.0);
    let y = Vector3::new(0.0, 4.0, 0.0);
    let y_tilted = Vector3::new(0.0001, 4.0, 0.0);
    let y_skewed = Vector3::new(0.5, 4.0, 0.0);
    assert!(angles_equal((&x, &y), (&x, &y_tilted), &tol));
    assert!(!angles_equal((&x, &y), (&x, &y_skewed), &tol));

    let tol_ang = Tolerance::with_angle_tolerance(1e-3, 10.0);
    assert!(angles_equal((&x, &y), (&x, &y_skewed), &tol_ang));
}

#[test]
fn test_metric_preserved() {
    let tol = Tolerance::new(1e-5);
    let cubic = Matrix3::from_diagonal(&Vector3::new(4.0, 4.0, 4.0));
    let tetragonal = Matrix3::from_diagonal(&Vector3::new(4.0, 4.0, 5.0));
    let c4_z = Matrix3::new(0, -1, 0, 1, 0, 0, 0, 0, 1);
    let c4_x = Matrix3::new(1, 0, 0, 0, 0, -1, 0, 1, 0);
    assert!(metric_preserved(&cubic, &c4_z, &tol));
    assert!(metric_preserved(&cubic, &c4_x, &tol));
    assert!(metric_preserved(&tetragonal, &c4_z, &tol));
    assert!(!metric_preserved(&tetragonal, &c4_x, &tol));
}

#[test]
fn test_positions_coincide_across_boundary() {
    let tol = Tolerance::new(1e-4);
    let basis = Matrix3::from_diagonal(&Vector3::new(4.0, 4.0, 4.0));
    let a = Vector3::new(0.99999, 0.5, 0.0);
    let b = Vector3::new(0.00001, 0.5, 1.0);
    assert!(positions_coincide(&basis, &a, &b, &tol));
    assert!(!positions_coincide(
        &basis,
        &a,
        &Vector3::new(0.1, 0.5, 0.0),
        &tol
    ));
    assert!(is_lattice_vector(&basis, &Vector3::new(1.0, -2.0, 3.0), &tol));
    assert!(!is_lattice_vector(&basis, &Vector3::new(0.5, 0.0, 0.0), &tol));
}

#[test]
fn test_wrapping() {
    let v = Vector3::new(-0.25, 1.75, 3.0);
    assert_relative_eq!(wrap_fractional(&v), Vector3::new(0.75, 0.75, 0.0));
    assert_relative_eq!(wrap_centred(&v), Vector3::new(-0.25, -0.25, 0.0));
    assert_relative_eq!(
        wrap_fractional(&Vector3::new(-1e-14, 0.0, 0.0)),
        Vector3::zeros()
    );
}

#[test]
fn test_integer_matrix_utilities() {
    let m = Matrix3::new(1, 1, 0, 0, 1, 1, 0, 0, 1);
    assert_eq!(det_i32(&m), 1);
    let m_inv = inverse_unimodular(&m).unwrap();
    assert_eq!(m * m_inv, Matrix3::identity());

    let singular = Matrix3::new(1, 2, 3, 2, 4, 6, 0, 0, 1);
    assert_eq!(det_i32(&singular), 0);
    assert!(inverse_unimodular(&singular).is_none());

    // A fourfold rotation stays integral in a body-centred basis but not in a doubled one.
    let p = Matrix3::new(1, 0, 1, 0, 1, 1, 0, 0, 2);
    let c4_z = Matrix3::new(0, -1, 0, 1, 0, 0, 0, 0, 1);
    assert!(conjugate_integer_matrix(&c4_z, &p).is_some());
    let q = Matrix3::new(2, 0, 0, 0, 1, 0, 0, 0, 1);
    assert!(conjugate_integer_matrix(&c4_z, &q).is_none());

    assert_eq!(
        primitive_integer_vector(&Vector3::new(0, -2, 4)),
        Vector3::new(0, 1, -2)
    );
}

#[test]
fn test_diagonalise_integer_matrix() {
    let a = DMatrix::from_row_slice(4, 3, &[2, 4, 4, -6, 6, 12, 10, -4, -16, 1, 0, 0]);
    let (u, d, v) = diagonalise_integer_matrix(&a);
    assert_eq!(&u * &a * &v, d);
    for i in 0..4 {
        for j in 0..3 {
            if i != j {
                assert_eq!(d[(i, j)], 0);
            }
        }
    }
    assert!((0..3).all(|i| d[(i, i)] >= 0));
}

#[test]
fn test_solve_modular_congruence() {
    // Inversion: 2u = 0 (mod 1) has eight solutions in the unit cell.
    let a = DMatrix::from_row_slice(3, 3, &[2, 0, 0, 0, 2, 0, 0, 0, 2]);
    let sols = solve_modular_congruence(&a, &DVector::zeros(3), 1e-6);
    assert_eq!(sols.len(), 8);

    // Twofold rotation about z with a shifted image: u_x and u_y are fixed, u_z is free.
    let a = DMatrix::from_row_slice(3, 3, &[2, 0, 0, 0, 2, 0, 0, 0, 0]);
    let b = DVector::from_vec(vec![0.5, 0.0, 0.0]);
    let sols = solve_modular_congruence(&a, &b, 1e-6);
    assert_eq!(sols.len(), 4);
    for sol in &sols {
        let residual = (&a.map(|x| x as f64) * DVector::from_column_slice(sol.as_slice())) - &b;
        assert!(residual.iter().all(|x| (x - x.round()).abs() < 1e-10));
        assert_relative_eq!(sol[2], 0.0);
    }

    // Inconsistent: the free direction demands an integral right-hand side.
    let b = DVector::from_vec(vec![0.0, 0.0, 0.5]);
    assert!(solve_modular_congruence(&a, &b, 1e-6).is_empty());
}
