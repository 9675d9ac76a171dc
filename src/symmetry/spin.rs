//! Symmetry of structures carrying collinear magnetic moments.

use itertools::Itertools;
use log;
use serde::{Deserialize, Serialize};

use crate::auxiliary::cell::Cell;
use crate::auxiliary::geometry::Tolerance;
use crate::permutation::Permutation;
use crate::symmetry::symmetry_operation::SymmetryOperation;
use crate::symmetry::symmetry_search::{induced_permutation, search_symmetry};
use crate::symmetry::SymmetryError;

#[cfg(test)]
#[path = "spin_tests.rs"]
mod spin_tests;

/// A structure containing the operations of a structure with collinear magnetic moments.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CollinearSpinSymmetry {
    /// The operations compatible with the moments, in the input basis.
    pub operations: Vec<SymmetryOperation>,

    /// For each operation, `1` if it preserves every moment and `-1` if it reverses every
    /// moment, *i.e.* if it must be combined with time reversal.
    pub spin_flips: Vec<i8>,

    /// For each atom, the smallest index of an atom equivalent to it under the magnetic
    /// operations.
    pub equivalent_atoms: Vec<usize>,
}

impl CollinearSpinSymmetry {
    /// The operations that preserve every moment.
    pub fn spin_preserving_operations(&self) -> impl Iterator<Item = &SymmetryOperation> + '_ {
        self.operations
            .iter()
            .zip(self.spin_flips.iter())
            .filter(|(_, &flip)| flip == 1)
            .map(|(op, _)| op)
    }

    /// The number of operations combined with time reversal.
    #[must_use]
    pub fn n_spin_flipping(&self) -> usize {
        self.spin_flips.iter().filter(|&&flip| flip == -1).count()
    }
}

/// Classifies an atom permutation against collinear moments.
///
/// # Returns
///
/// `Some(1)` if every moment is carried onto an equal moment, `Some(-1)` if every moment is
/// carried onto its negative, and `None` otherwise. Vanishing moments count as preserved.
fn spin_flip(permutation: &Permutation, magmoms: &[f64], thresh: f64) -> Option<i8> {
    let image = permutation.image();
    if magmoms
        .iter()
        .enumerate()
        .all(|(i, m)| (magmoms[image[i]] - m).abs() < thresh)
    {
        Some(1)
    } else if magmoms
        .iter()
        .enumerate()
        .all(|(i, m)| (magmoms[image[i]] + m).abs() < thresh)
    {
        Some(-1)
    } else {
        None
    }
}

/// The smallest atom index of every orbit under a set of permutations.
#[must_use]
pub fn orbit_representatives(n_atoms: usize, permutations: &[Permutation]) -> Vec<usize> {
    let mut representatives = (0..n_atoms).collect_vec();
    // Relaxation to a fixed point: every atom takes the smallest representative among its images.
    let mut changed = true;
    while changed {
        changed = false;
        for perm in permutations {
            for (i, &j) in perm.image().iter().enumerate() {
                let smallest = representatives[i].min(representatives[j]);
                if representatives[i] != smallest || representatives[j] != smallest {
                    representatives[i] = smallest;
                    representatives[j] = smallest;
                    changed = true;
                }
            }
        }
    }
    representatives
}

/// Determines the operations of a structure compatible with collinear magnetic moments.
///
/// The operations of the non-magnetic structure are found first. An operation is kept if the
/// atom permutation it induces carries every moment onto an equal moment, or every moment onto
/// its negative. Moments are compared with the distance tolerance of `tol`.
///
/// # Arguments
///
/// * `cell` - The cell.
/// * `magmoms` - The collinear moment of each atom.
/// * `tol` - The tolerance.
///
/// # Errors
///
/// Errors with [`SymmetryError::InvalidCell`] if the number of moments differs from the number
/// of atoms, and otherwise as [`search_symmetry`].
pub fn get_operations_with_collinear_spin(
    cell: &Cell,
    magmoms: &[f64],
    tol: &Tolerance,
) -> Result<CollinearSpinSymmetry, SymmetryError> {
    if magmoms.len() != cell.n_atoms() {
        return Err(SymmetryError::InvalidCell(format!(
            "{} magnetic moment(s) for {} atom(s)",
            magmoms.len(),
            cell.n_atoms()
        )));
    }
    let search = search_symmetry(cell, tol)?;
    let mut operations = vec![];
    let mut spin_flips = vec![];
    let mut permutations = vec![];
    for op in search.operations.iter() {
        let perm = induced_permutation(cell, op, tol).ok_or_else(|| {
            SymmetryError::InternalInconsistency(format!(
                "operation {op} induces no permutation of the atoms"
            ))
        })?;
        if let Some(flip) = spin_flip(&perm, magmoms, tol.symprec) {
            operations.push(op.clone());
            spin_flips.push(flip);
            permutations.push(perm);
        }
    }
    log::debug!(
        "{} of {} operation(s) are compatible with the magnetic moments ({} with time reversal).",
        operations.len(),
        search.operations.len(),
        spin_flips.iter().filter(|&&flip| flip == -1).count()
    );
    Ok(CollinearSpinSymmetry {
        operations,
        spin_flips,
        equivalent_atoms: orbit_representatives(cell.n_atoms(), &permutations),
    })
}
