//! Delaunay (Selling) reduction.

use itertools::Itertools;
use log;
use nalgebra::Matrix3;
use ordered_float::OrderedFloat;

use crate::auxiliary::cell::Lattice;
use crate::auxiliary::geometry::{det_i32, round_to_integer_matrix, Tolerance};
use crate::lattice::{metric_epsilon, REDUCTION_MAX_ITERATIONS};
use crate::symmetry::SymmetryError;

#[cfg(test)]
#[path = "delaunay_tests.rs"]
mod delaunay_tests;

/// Delaunay-reduces a lattice.
///
/// The superbase $`\{\mathbf{b}_1, \mathbf{b}_2, \mathbf{b}_3, \mathbf{b}_4\}`$ with
/// $`\mathbf{b}_4 = -(\mathbf{b}_1 + \mathbf{b}_2 + \mathbf{b}_3)`$ is modified until all
/// pairwise scalar products are non-positive. The three shortest linearly independent vectors
/// among the superbase and its pairwise sums then form the reduced basis, which keeps the
/// handedness of the input basis.
///
/// # Arguments
///
/// * `lattice` - The lattice to be reduced.
/// * `tol` - The tolerance from which the comparison threshold for scalar products is derived.
///
/// # Returns
///
/// The reduced lattice $`\mathbf{L}'`$ and the integer matrix $`\mathbf{M}`$ with
/// $`\mathbf{L}' = \mathbf{L}\mathbf{M}`$ and $`\det\mathbf{M} = 1`$.
///
/// # Errors
///
/// Errors if the lattice is degenerate or the reduction does not converge.
pub fn delaunay_reduce(
    lattice: &Lattice,
    tol: &Tolerance,
) -> Result<(Lattice, Matrix3<i32>), SymmetryError> {
    lattice.validate()?;
    let eps = metric_epsilon(lattice, tol);
    let mut superbase = [
        lattice.vector(0),
        lattice.vector(1),
        lattice.vector(2),
        -(lattice.vector(0) + lattice.vector(1) + lattice.vector(2)),
    ];

    let mut converged = false;
    for _ in 0..REDUCTION_MAX_ITERATIONS {
        let offending = (0..4)
            .tuple_combinations::<(_, _)>()
            .find(|&(i, j)| superbase[i].dot(&superbase[j]) > eps);
        match offending {
            Some((i, j)) => {
                let bi = superbase[i];
                for (k, bk) in superbase.iter_mut().enumerate() {
                    if k != i && k != j {
                        *bk += bi;
                    }
                }
                superbase[i] = -bi;
            }
            None => {
                converged = true;
                break;
            }
        }
    }
    if !converged {
        return Err(SymmetryError::ReductionFailed {
            algorithm: "Delaunay",
            iterations: REDUCTION_MAX_ITERATIONS,
        });
    }

    let candidates = [
        superbase[0],
        superbase[1],
        superbase[2],
        superbase[3],
        superbase[0] + superbase[1],
        superbase[1] + superbase[2],
        superbase[2] + superbase[0],
    ];
    let order = (0..candidates.len())
        .sorted_by_key(|&i| (OrderedFloat(candidates[i].norm()), i))
        .collect_vec();

    let basis_inv = lattice.basis().try_inverse().ok_or_else(|| {
        SymmetryError::DegenerateLattice("lattice basis cannot be inverted".to_string())
    })?;
    let handedness = lattice.determinant().signum();
    for (i, j, k) in order.iter().tuple_combinations::<(_, _, _)>() {
        let mut new_basis =
            Matrix3::from_columns(&[candidates[*i], candidates[*j], candidates[*k]]);
        if new_basis.determinant().abs() < 0.5 * lattice.volume() {
            continue;
        }
        if new_basis.determinant().signum() != handedness {
            new_basis.set_column(2, &(-candidates[*k]));
        }
        let Some(m) = round_to_integer_matrix(&(basis_inv * new_basis), 1e-4) else {
            continue;
        };
        if det_i32(&m).abs() != 1 {
            continue;
        }
        let reduced = Lattice::from_basis(*lattice.basis() * m.map(f64::from));
        log::debug!("Delaunay-reduced lattice:\n{reduced}");
        return Ok((reduced, m));
    }
    Err(SymmetryError::InternalInconsistency(
        "no Delaunay basis could be selected from the reduced superbase".to_string(),
    ))
}
