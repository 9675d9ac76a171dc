//! Lattice reduction and lattice point symmetry.

use itertools::{iproduct, Itertools};
use log;
use nalgebra::{Matrix3, Vector3};

use crate::auxiliary::cell::Lattice;
use crate::auxiliary::geometry::{
    det_i32, inverse_unimodular, lengths_equal, metric_preserved, Tolerance,
};
use crate::lattice::delaunay::delaunay_reduce;
use crate::symmetry::SymmetryError;

pub mod delaunay;
pub mod niggli;

#[cfg(test)]
#[path = "lattice_tests.rs"]
mod lattice_tests;

/// The maximum number of iterations allowed in either reduction algorithm.
pub const REDUCTION_MAX_ITERATIONS: usize = 100;

/// Returns the comparison threshold for scalar products of basis vectors, which scales with the
/// linear size of the cell.
pub(crate) fn metric_epsilon(lattice: &Lattice, tol: &Tolerance) -> f64 {
    2.0 * tol.symprec * lattice.volume().cbrt()
}

/// Enumerates the integer matrices that map the basis of a reduced lattice onto a basis of equal
/// metric.
///
/// Each column of a candidate is drawn from $`\{-1, 0, 1\}^3`$, which is sufficient when the
/// lattice is Delaunay-reduced. The identity comes first.
///
/// # Arguments
///
/// * `reduced` - A Delaunay-reduced lattice.
/// * `tol` - The tolerance for comparing lengths and angles.
///
/// # Returns
///
/// The metric-preserving integer matrices acting on fractional coordinates of `reduced`.
#[must_use]
pub fn metric_preserving_rotations(reduced: &Lattice, tol: &Tolerance) -> Vec<Matrix3<i32>> {
    let basis = reduced.basis();
    let unit_combinations = iproduct!(-1..=1, -1..=1, -1..=1)
        .filter(|&(i, j, k)| (i, j, k) != (0, 0, 0))
        .map(|(i, j, k)| Vector3::new(i, j, k))
        .collect_vec();
    let lengths = reduced.lengths();
    let column_candidates = lengths
        .iter()
        .map(|&length| {
            unit_combinations
                .iter()
                .filter(|v| lengths_equal((basis * v.map(f64::from)).norm(), length, tol))
                .copied()
                .collect_vec()
        })
        .collect_vec();

    let mut rotations = iproduct!(
        column_candidates[0].iter(),
        column_candidates[1].iter(),
        column_candidates[2].iter()
    )
    .map(|(c0, c1, c2)| Matrix3::from_columns(&[*c0, *c1, *c2]))
    .filter(|w| det_i32(w).abs() == 1 && metric_preserved(basis, w, tol))
    .collect_vec();

    if let Some(pos) = rotations.iter().position(|w| *w == Matrix3::identity()) {
        let identity = rotations.remove(pos);
        rotations.insert(0, identity);
    }
    rotations
}

/// Determines the point group of a lattice, *i.e.* all integer matrices $`\mathbf{W}`$ with
/// determinant $`\pm 1`$ such that $`\mathbf{L}\mathbf{W}`$ has the same metric as
/// $`\mathbf{L}`$.
///
/// The search is performed on the Delaunay-reduced basis and the results are expressed back in
/// the basis of `lattice`.
///
/// # Errors
///
/// Errors if the lattice is degenerate or cannot be reduced.
pub fn lattice_point_group(
    lattice: &Lattice,
    tol: &Tolerance,
) -> Result<Vec<Matrix3<i32>>, SymmetryError> {
    let (reduced, m) = delaunay_reduce(lattice, tol)?;
    let m_inv = inverse_unimodular(&m).ok_or_else(|| {
        SymmetryError::InternalInconsistency(
            "Delaunay transformation is not unimodular".to_string(),
        )
    })?;
    let rotations = metric_preserving_rotations(&reduced, tol)
        .into_iter()
        .map(|w| m * w * m_inv)
        .collect_vec();
    log::debug!(
        "Lattice point group of order {} found with {}.",
        rotations.len(),
        tol
    );
    Ok(rotations)
}
