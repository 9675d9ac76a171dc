//! Geometrical predicates, tolerances and integer linear algebra.

use std::fmt;

use derive_builder::Builder;
use itertools::Itertools;
use nalgebra::{DMatrix, DVector, Matrix3, Vector3};
use num::integer::Integer;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;

// ==================
// Struct definitions
// ==================

/// A structure holding the numerical tolerances used to decide whether two geometrical quantities
/// are equal.
#[derive(Clone, Builder, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// The Cartesian distance tolerance (in the length unit of the lattice) below which two
    /// positions, or two lengths, are considered equal.
    #[builder(default = "1e-5")]
    pub symprec: f64,

    /// An optional angular tolerance in degrees. If `None`, angles are compared through a
    /// distance-like criterion derived from [`Self::symprec`].
    #[builder(default = "None")]
    pub angle_tolerance: Option<f64>,
}

impl Tolerance {
    /// Returns a builder to construct a new [`Tolerance`].
    pub fn builder() -> ToleranceBuilder {
        ToleranceBuilder::default()
    }

    /// Constructs a tolerance with a distance criterion only.
    #[must_use]
    pub fn new(symprec: f64) -> Self {
        Self {
            symprec,
            angle_tolerance: None,
        }
    }

    /// Constructs a tolerance with both a distance criterion and an explicit angular criterion in
    /// degrees.
    #[must_use]
    pub fn with_angle_tolerance(symprec: f64, angle_tolerance: f64) -> Self {
        Self {
            symprec,
            angle_tolerance: Some(angle_tolerance),
        }
    }

    /// Returns a copy of this tolerance with the distance criterion scaled by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            symprec: self.symprec * factor,
            angle_tolerance: self.angle_tolerance,
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(1e-5)
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.angle_tolerance {
            Some(ang) => write!(f, "symprec = {:.3e}, angle tolerance = {ang:.3}°", self.symprec),
            None => write!(f, "symprec = {:.3e}, angle tolerance = derived", self.symprec),
        }
    }
}

// ====================
// Geometric predicates
// ====================

/// Checks if two lengths are equal within the distance tolerance.
#[must_use]
pub fn lengths_equal(length_a: f64, length_b: f64, tol: &Tolerance) -> bool {
    (length_a - length_b).abs() < tol.symprec
}

/// Checks if the angle subtended by the vector pair `pair_a` equals that subtended by `pair_b`.
///
/// If no explicit angular tolerance is given, the angular difference $`\Delta\theta`$ is accepted
/// when $`\sin\Delta\theta`$ multiplied by the mean length of the two pairs is below the distance
/// tolerance.
///
/// # Arguments
///
/// * `pair_a` - The first pair of Cartesian vectors.
/// * `pair_b` - The second pair of Cartesian vectors.
/// * `tol` - The tolerance.
///
/// # Returns
///
/// `true` if the two angles are equal.
#[must_use]
pub fn angles_equal(
    pair_a: (&Vector3<f64>, &Vector3<f64>),
    pair_b: (&Vector3<f64>, &Vector3<f64>),
    tol: &Tolerance,
) -> bool {
    let (la1, la2) = (pair_a.0.norm(), pair_a.1.norm());
    let (lb1, lb2) = (pair_b.0.norm(), pair_b.1.norm());
    let cos_a = (pair_a.0.dot(pair_a.1) / (la1 * la2)).clamp(-1.0, 1.0);
    let cos_b = (pair_b.0.dot(pair_b.1) / (lb1 * lb2)).clamp(-1.0, 1.0);
    match tol.angle_tolerance {
        Some(ang) => (cos_a.acos() - cos_b.acos()).abs().to_degrees() < ang,
        None => {
            let sin_a = (1.0 - cos_a * cos_a).max(0.0).sqrt();
            let sin_b = (1.0 - cos_b * cos_b).max(0.0).sqrt();
            let cos_dtheta = cos_a * cos_b + sin_a * sin_b;
            let sin_dtheta_sq = (1.0 - cos_dtheta * cos_dtheta).max(0.0);
            let mean_length_sq = (la1 + lb1) * (la2 + lb2) / 4.0;
            sin_dtheta_sq * mean_length_sq < tol.symprec * tol.symprec
        }
    }
}

/// Checks if an integer basis transformation preserves the metric of a lattice, *i.e.* if the
/// lengths of, and angles between, the transformed basis vectors match those of the original.
///
/// # Arguments
///
/// * `basis` - The lattice basis with the basis vectors as columns.
/// * `rotation` - The integer transformation acting on fractional coordinates.
/// * `tol` - The tolerance.
#[must_use]
pub fn metric_preserved(basis: &Matrix3<f64>, rotation: &Matrix3<i32>, tol: &Tolerance) -> bool {
    let rotated = basis * to_f64_matrix(rotation);
    let lengths_ok = (0..3).all(|i| {
        lengths_equal(
            basis.column(i).norm(),
            rotated.column(i).norm(),
            tol,
        )
    });
    lengths_ok
        && [(0, 1), (0, 2), (1, 2)].iter().all(|&(i, j)| {
            let (oi, oj): (Vector3<f64>, Vector3<f64>) =
                (basis.column(i).into_owned(), basis.column(j).into_owned());
            let (ri, rj): (Vector3<f64>, Vector3<f64>) =
                (rotated.column(i).into_owned(), rotated.column(j).into_owned());
            angles_equal((&oi, &oj), (&ri, &rj), tol)
        })
}

/// Checks if two fractional positions coincide modulo the lattice.
///
/// The difference is brought into $`[-\tfrac{1}{2}, \tfrac{1}{2}]^3`$ and its Cartesian norm is
/// compared against the distance tolerance.
#[must_use]
pub fn positions_coincide(
    basis: &Matrix3<f64>,
    pos_a: &Vector3<f64>,
    pos_b: &Vector3<f64>,
    tol: &Tolerance,
) -> bool {
    cartesian_residual(basis, &(pos_a - pos_b)) < tol.symprec
}

/// Checks if a fractional vector is a lattice vector within the distance tolerance.
#[must_use]
pub fn is_lattice_vector(basis: &Matrix3<f64>, frac: &Vector3<f64>, tol: &Tolerance) -> bool {
    cartesian_residual(basis, frac) < tol.symprec
}

/// Returns the Cartesian length of the fractional displacement `frac` after removal of the nearest
/// lattice vector.
#[must_use]
pub fn cartesian_residual(basis: &Matrix3<f64>, frac: &Vector3<f64>) -> f64 {
    (basis * wrap_centred(frac)).norm()
}

/// Brings fractional coordinates into $`[0, 1)`$.
#[must_use]
pub fn wrap_fractional(frac: &Vector3<f64>) -> Vector3<f64> {
    frac.map(|x| {
        let w = x - x.floor();
        if w >= 1.0 - 1e-12 {
            0.0
        } else {
            w
        }
    })
}

/// Brings fractional coordinates into $`[-\tfrac{1}{2}, \tfrac{1}{2}]`$.
#[must_use]
pub fn wrap_centred(frac: &Vector3<f64>) -> Vector3<f64> {
    frac.map(|x| x - x.round())
}

// ========================
// Integer matrix utilities
// ========================

/// Determinant of an integer $`3 \times 3`$ matrix.
#[must_use]
pub fn det_i32(mat: &Matrix3<i32>) -> i32 {
    mat[(0, 0)] * (mat[(1, 1)] * mat[(2, 2)] - mat[(1, 2)] * mat[(2, 1)])
        - mat[(0, 1)] * (mat[(1, 0)] * mat[(2, 2)] - mat[(1, 2)] * mat[(2, 0)])
        + mat[(0, 2)] * (mat[(1, 0)] * mat[(2, 1)] - mat[(1, 1)] * mat[(2, 0)])
}

/// Adjugate of an integer $`3 \times 3`$ matrix, so that `mat * adj = det * I`.
#[must_use]
pub fn adjugate_i32(mat: &Matrix3<i32>) -> Matrix3<i32> {
    let m = |i: usize, j: usize| mat[(i, j)];
    Matrix3::new(
        m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1),
        m(0, 2) * m(2, 1) - m(0, 1) * m(2, 2),
        m(0, 1) * m(1, 2) - m(0, 2) * m(1, 1),
        m(1, 2) * m(2, 0) - m(1, 0) * m(2, 2),
        m(0, 0) * m(2, 2) - m(0, 2) * m(2, 0),
        m(0, 2) * m(1, 0) - m(0, 0) * m(1, 2),
        m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0),
        m(0, 1) * m(2, 0) - m(0, 0) * m(2, 1),
        m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0),
    )
}

/// Inverse of a unimodular integer matrix, or `None` if the determinant is not $`\pm 1`$.
#[must_use]
pub fn inverse_unimodular(mat: &Matrix3<i32>) -> Option<Matrix3<i32>> {
    let det = det_i32(mat);
    if det.abs() == 1 {
        Some(adjugate_i32(mat) * det)
    } else {
        None
    }
}

/// Converts an integer matrix into a floating-point matrix.
#[must_use]
pub fn to_f64_matrix(mat: &Matrix3<i32>) -> Matrix3<f64> {
    mat.map(f64::from)
}

/// Rounds a floating-point matrix to the nearest integer matrix if every element lies within
/// `thresh` of an integer.
#[must_use]
pub fn round_to_integer_matrix(mat: &Matrix3<f64>, thresh: f64) -> Option<Matrix3<i32>> {
    if mat.iter().all(|x| (x - x.round()).abs() < thresh) {
        Some(mat.map(|x| x.round() as i32))
    } else {
        None
    }
}

/// Conjugates an integer matrix by a rational basis change, returning
/// $`\mathbf{P}^{-1}\mathbf{W}\mathbf{P}`$ if it is integral.
///
/// # Arguments
///
/// * `rotation` - The integer matrix $`\mathbf{W}`$.
/// * `basis_change` - The integer matrix $`\mathbf{P}`$ with non-zero determinant.
///
/// # Returns
///
/// The conjugated matrix, or `None` if it is not integral.
#[must_use]
pub fn conjugate_integer_matrix(
    rotation: &Matrix3<i32>,
    basis_change: &Matrix3<i32>,
) -> Option<Matrix3<i32>> {
    let det = det_i32(basis_change);
    if det == 0 {
        return None;
    }
    let scaled = adjugate_i32(basis_change) * rotation * basis_change;
    if scaled.iter().all(|x| x % det == 0) {
        Some(scaled / det)
    } else {
        None
    }
}

/// Returns the primitive integer vector parallel to `vec`, with the first non-zero component
/// made positive.
#[must_use]
pub fn primitive_integer_vector(vec: &Vector3<i32>) -> Vector3<i32> {
    let g = vec.iter().fold(0, |acc, x| acc.gcd(x));
    if g == 0 {
        return *vec;
    }
    let reduced = vec / g;
    let sign = reduced
        .iter()
        .find(|x| **x != 0)
        .map_or(1, |x| x.signum());
    reduced * sign
}

/// Greatest common divisor of the components of an integer vector.
#[must_use]
pub fn integer_vector_gcd(vec: &Vector3<i32>) -> i32 {
    vec.iter().fold(0, |acc, x| acc.gcd(x))
}

/// Diagonalises a rectangular integer matrix by unimodular row and column operations.
///
/// No divisibility condition is imposed on the diagonal, so this is weaker than the Smith normal
/// form, but sufficient for solving linear congruences.
///
/// # Arguments
///
/// * `mat` - The integer matrix $`\mathbf{A}`$ of shape $`m \times n`$.
///
/// # Returns
///
/// The triple $`(\mathbf{U}, \mathbf{D}, \mathbf{V})`$ with $`\mathbf{U}`$ and $`\mathbf{V}`$
/// unimodular and $`\mathbf{D} = \mathbf{U}\mathbf{A}\mathbf{V}`$ diagonal with non-negative
/// entries.
#[must_use]
pub fn diagonalise_integer_matrix(
    mat: &DMatrix<i64>,
) -> (DMatrix<i64>, DMatrix<i64>, DMatrix<i64>) {
    let (nrows, ncols) = mat.shape();
    let mut d = mat.clone();
    let mut u = DMatrix::<i64>::identity(nrows, nrows);
    let mut v = DMatrix::<i64>::identity(ncols, ncols);
    for t in 0..nrows.min(ncols) {
        loop {
            let pivot = (t..nrows)
                .cartesian_product(t..ncols)
                .filter(|&(i, j)| d[(i, j)] != 0)
                .min_by_key(|&(i, j)| (d[(i, j)].abs(), i, j));
            let Some((pi, pj)) = pivot else {
                return (u, d, v);
            };
            d.swap_rows(t, pi);
            u.swap_rows(t, pi);
            d.swap_columns(t, pj);
            v.swap_columns(t, pj);

            let p = d[(t, t)];
            let mut clean = true;
            for i in (t + 1)..nrows {
                let q = d[(i, t)] / p;
                if q != 0 {
                    for k in 0..ncols {
                        let x = d[(t, k)];
                        d[(i, k)] -= q * x;
                    }
                    for k in 0..nrows {
                        let x = u[(t, k)];
                        u[(i, k)] -= q * x;
                    }
                }
                if d[(i, t)] != 0 {
                    clean = false;
                }
            }
            for j in (t + 1)..ncols {
                let q = d[(t, j)] / p;
                if q != 0 {
                    for k in 0..nrows {
                        let x = d[(k, t)];
                        d[(k, j)] -= q * x;
                    }
                    for k in 0..ncols {
                        let x = v[(k, t)];
                        v[(k, j)] -= q * x;
                    }
                }
                if d[(t, j)] != 0 {
                    clean = false;
                }
            }
            if clean {
                break;
            }
        }
        if d[(t, t)] < 0 {
            for k in 0..ncols {
                d[(t, k)] = -d[(t, k)];
            }
            for k in 0..nrows {
                u[(t, k)] = -u[(t, k)];
            }
        }
    }
    (u, d, v)
}

/// Enumerates the solutions $`\mathbf{u}`$ of the linear congruence
/// $`\mathbf{A}\mathbf{u} \equiv \mathbf{b} \pmod{1}`$.
///
/// Directions in which $`\mathbf{u}`$ is unconstrained are set to zero, so that only the discrete
/// solutions modulo those directions are returned.
///
/// # Arguments
///
/// * `mat` - The integer matrix $`\mathbf{A}`$ with three columns.
/// * `rhs` - The right-hand side $`\mathbf{b}`$.
/// * `thresh` - The threshold for deciding whether a transformed right-hand side component is
/// integral where the system imposes a consistency condition.
///
/// # Returns
///
/// All discrete solutions. The vector is empty if the system is inconsistent.
#[must_use]
pub fn solve_modular_congruence(
    mat: &DMatrix<i64>,
    rhs: &DVector<f64>,
    thresh: f64,
) -> Vec<Vector3<f64>> {
    let (nrows, ncols) = mat.shape();
    assert_eq!(ncols, 3, "Only three unknowns are supported.");
    assert_eq!(nrows, rhs.len(), "Mismatched congruence dimensions.");
    if nrows == 0 {
        return vec![Vector3::zeros()];
    }
    let (u, d, v) = diagonalise_integer_matrix(mat);
    let e = u.map(|x| x as f64) * rhs;

    let mut options: Vec<Vec<f64>> = Vec::with_capacity(ncols);
    for i in 0..nrows {
        let dii = if i < ncols { d[(i, i)] } else { 0 };
        if dii == 0 {
            if (e[i] - e[i].round()).abs() > thresh {
                return vec![];
            }
            if i < ncols {
                options.push(vec![0.0]);
            }
        } else {
            options.push(
                (0..dii)
                    .map(|k| (e[i] + k as f64) / dii as f64)
                    .collect_vec(),
            );
        }
    }
    for _ in options.len()..ncols {
        options.push(vec![0.0]);
    }
    let v_f = v.map(|x| x as f64);
    options
        .iter()
        .multi_cartesian_product()
        .map(|ys| {
            let y = DVector::from_iterator(ncols, ys.into_iter().copied());
            let sol = &v_f * y;
            Vector3::new(sol[0], sol[1], sol[2])
        })
        .collect_vec()
}
