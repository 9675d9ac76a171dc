//! Niggli reduction following the algorithm of Křivý and Gruber (1976).

use nalgebra::Matrix3;

use crate::auxiliary::cell::Lattice;
use crate::auxiliary::geometry::{to_f64_matrix, Tolerance};
use crate::lattice::{metric_epsilon, REDUCTION_MAX_ITERATIONS};
use crate::symmetry::SymmetryError;

#[cfg(test)]
#[path = "niggli_tests.rs"]
mod niggli_tests;

/// The scalar parameters of a lattice used in the Niggli conditions.
struct NiggliParameters {
    a: f64,
    b: f64,
    c: f64,
    xi: f64,
    eta: f64,
    zeta: f64,
    l: i32,
    m: i32,
    n: i32,
}

impl NiggliParameters {
    fn new(basis: &Matrix3<f64>, eps: f64) -> Self {
        let g = basis.transpose() * basis;
        let sign = |x: f64| {
            if x > eps {
                1
            } else if x < -eps {
                -1
            } else {
                0
            }
        };
        let (xi, eta, zeta) = (2.0 * g[(1, 2)], 2.0 * g[(0, 2)], 2.0 * g[(0, 1)]);
        Self {
            a: g[(0, 0)],
            b: g[(1, 1)],
            c: g[(2, 2)],
            xi,
            eta,
            zeta,
            l: sign(xi),
            m: sign(eta),
            n: sign(zeta),
        }
    }
}

/// Returns the first applicable Křivý–Gruber step as an integer basis transformation, or `None`
/// if the basis is already Niggli-reduced.
fn niggli_step(basis: &Matrix3<f64>, eps: f64) -> Option<Matrix3<i32>> {
    let p = NiggliParameters::new(basis, eps);

    // A1
    if p.a > p.b + eps || ((p.a - p.b).abs() < eps && p.xi.abs() > p.eta.abs() + eps) {
        return Some(Matrix3::new(0, -1, 0, -1, 0, 0, 0, 0, -1));
    }

    // A2
    if p.b > p.c + eps || ((p.b - p.c).abs() < eps && p.eta.abs() > p.zeta.abs() + eps) {
        return Some(Matrix3::new(-1, 0, 0, 0, 0, -1, 0, -1, 0));
    }

    // A3 and A4
    if p.l * p.m * p.n == 1 {
        let w = Matrix3::from_diagonal(&nalgebra::Vector3::new(p.l, p.m, p.n));
        if w != Matrix3::identity() {
            return Some(w);
        }
    } else {
        let flip = |s: i32| if s == 1 { -1 } else { 1 };
        let (mut i, mut j, mut k) = (flip(p.l), flip(p.m), flip(p.n));
        if i * j * k == -1 {
            if p.l == 0 {
                i = -1;
            } else if p.m == 0 {
                j = -1;
            } else if p.n == 0 {
                k = -1;
            }
        }
        let w = Matrix3::from_diagonal(&nalgebra::Vector3::new(i, j, k));
        if i * j * k == 1 && w != Matrix3::identity() {
            return Some(w);
        }
    }

    let signum = |x: f64| if x > 0.0 { 1 } else { -1 };

    // A5
    if p.xi.abs() > p.b + eps
        || ((p.b - p.xi).abs() < eps && 2.0 * p.eta < p.zeta - eps)
        || ((p.b + p.xi).abs() < eps && p.zeta < -eps)
    {
        return Some(Matrix3::new(1, 0, 0, 0, 1, -signum(p.xi), 0, 0, 1));
    }

    // A6
    if p.eta.abs() > p.a + eps
        || ((p.a - p.eta).abs() < eps && 2.0 * p.xi < p.zeta - eps)
        || ((p.a + p.eta).abs() < eps && p.zeta < -eps)
    {
        return Some(Matrix3::new(1, 0, -signum(p.eta), 0, 1, 0, 0, 0, 1));
    }

    // A7
    if p.zeta.abs() > p.a + eps
        || ((p.a - p.zeta).abs() < eps && 2.0 * p.xi < p.eta - eps)
        || ((p.a + p.zeta).abs() < eps && p.eta < -eps)
    {
        return Some(Matrix3::new(1, -signum(p.zeta), 0, 0, 1, 0, 0, 0, 1));
    }

    // A8
    let s = p.xi + p.eta + p.zeta + p.a + p.b;
    if s < -eps || (s.abs() < eps && 2.0 * (p.a + p.eta) + p.zeta > eps) {
        return Some(Matrix3::new(1, 0, 1, 0, 1, 1, 0, 0, 1));
    }

    None
}

/// Niggli-reduces a lattice.
///
/// # Arguments
///
/// * `lattice` - The lattice to be reduced.
/// * `tol` - The tolerance from which the comparison threshold for the metric is derived.
///
/// # Returns
///
/// The reduced lattice $`\mathbf{L}'`$ and the unimodular integer matrix $`\mathbf{M}`$ with
/// $`\mathbf{L}' = \mathbf{L}\mathbf{M}`$.
///
/// # Errors
///
/// Errors if the lattice is degenerate or the reduction does not converge.
pub fn niggli_reduce(
    lattice: &Lattice,
    tol: &Tolerance,
) -> Result<(Lattice, Matrix3<i32>), SymmetryError> {
    lattice.validate()?;
    let eps = metric_epsilon(lattice, tol);
    let mut basis = *lattice.basis();
    let mut transformation = Matrix3::<i32>::identity();
    for _ in 0..REDUCTION_MAX_ITERATIONS {
        match niggli_step(&basis, eps) {
            Some(step) => {
                basis *= to_f64_matrix(&step);
                transformation *= step;
            }
            None => return Ok((Lattice::from_basis(basis), transformation)),
        }
    }
    Err(SymmetryError::ReductionFailed {
        algorithm: "Niggli",
        iterations: REDUCTION_MAX_ITERATIONS,
    })
}

/// Checks whether a lattice satisfies the Niggli conditions within the comparison threshold.
#[must_use]
pub fn is_niggli_reduced(lattice: &Lattice, tol: &Tolerance) -> bool {
    niggli_step(lattice.basis(), metric_epsilon(lattice, tol)).is_none()
}
