//! Search for the space-group operations of a cell.

use itertools::Itertools;
use log;
use nalgebra::{Matrix3, Vector3};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::auxiliary::cell::Cell;
use crate::auxiliary::geometry::{
    is_lattice_vector, round_to_integer_matrix, to_f64_matrix, wrap_centred, wrap_fractional,
    Tolerance,
};
use crate::lattice::lattice_point_group;
use crate::permutation::Permutation;
use crate::symmetry::operation_set::{OperationSet, COMPOSITION_TOLERANCE_FACTOR};
use crate::symmetry::primitive::{find_primitive_cell, PrimitiveCell};
use crate::symmetry::symmetry_operation::SymmetryOperation;
use crate::symmetry::SymmetryError;

#[cfg(test)]
#[path = "symmetry_search_tests.rs"]
mod symmetry_search_tests;

// ==================
// Struct definitions
// ==================

/// The outcome of checking one trial operation against a cell.
#[derive(Clone, Debug)]
pub struct OperationMatch {
    /// The permutation of atoms induced by the operation: atom `i` is sent onto atom
    /// `permutation.image()[i]`.
    pub permutation: Permutation,

    /// The trial translation corrected by the mean residual displacement of all atoms.
    pub refined_translation: Vector3<f64>,

    /// The largest Cartesian displacement between an image and its matched atom.
    pub max_residual: f64,
}

/// A structure containing the complete outcome of an operation search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SymmetrySearchResult {
    /// The pure translations of the input cell, the zero translation first.
    pub pure_translations: Vec<Vector3<f64>>,

    /// The primitive cell.
    pub primitive: PrimitiveCell,

    /// The operations of the primitive cell, one per distinct rotation, identity first.
    pub primitive_operations: Vec<SymmetryOperation>,

    /// The atom permutations induced by [`Self::primitive_operations`] on the primitive cell.
    pub primitive_permutations: Vec<Permutation>,

    /// The operations of the input cell, *i.e.* every primitive operation whose rotation part is
    /// integral in the input basis, combined with every pure translation.
    pub operations: OperationSet,
}

// =========
// Functions
// =========

/// Checks whether a trial operation maps every atom of a cell onto an atom of the same species.
///
/// Each image is matched to the nearest atom of its species within tolerance that no earlier
/// image has claimed. The search stops at the first image without such an atom.
///
/// # Arguments
///
/// * `cell` - The cell.
/// * `rotation` - The trial rotation part in the basis of `cell`.
/// * `translation` - The trial translation part.
/// * `tol` - The distance tolerance for matching images to atoms.
///
/// # Returns
///
/// The match details, or `None` if the trial operation is not a symmetry operation.
#[must_use]
pub fn match_operation(
    cell: &Cell,
    rotation: &Matrix3<i32>,
    translation: &Vector3<f64>,
    tol: &Tolerance,
) -> Option<OperationMatch> {
    let basis = cell.lattice().basis();
    let positions = cell.positions();
    let types = cell.types();
    let w = to_f64_matrix(rotation);
    let n = cell.n_atoms();

    let mut image = vec![0; n];
    let mut used = vec![false; n];
    let mut shift_sum = Vector3::<f64>::zeros();
    let mut max_residual = 0.0_f64;
    for i in 0..n {
        let y = w * positions[i] + translation;
        let (j, d, residual) = (0..n)
            .filter(|&j| !used[j] && types[j] == types[i])
            .map(|j| {
                let d = wrap_centred(&(positions[j] - y));
                (j, d, (basis * d).norm())
            })
            .filter(|(_, _, residual)| *residual < tol.symprec)
            .min_by(|(_, _, r1), (_, _, r2)| r1.total_cmp(r2))?;
        used[j] = true;
        image[i] = j;
        shift_sum += d;
        max_residual = max_residual.max(residual);
    }
    let permutation = Permutation::from_image(&image)?;
    Some(OperationMatch {
        permutation,
        refined_translation: translation + shift_sum / n as f64,
        max_residual,
    })
}

/// Returns the permutation of atoms induced by an operation, or `None` if the operation does not
/// map the cell onto itself.
///
/// The distance tolerance is relaxed by [`COMPOSITION_TOLERANCE_FACTOR`] as `op` may result from
/// composing or re-expressing found operations.
#[must_use]
pub fn induced_permutation(
    cell: &Cell,
    op: &SymmetryOperation,
    tol: &Tolerance,
) -> Option<Permutation> {
    match_operation(
        cell,
        &op.rotation,
        &op.translation,
        &tol.scaled(COMPOSITION_TOLERANCE_FACTOR),
    )
    .map(|m| m.permutation)
}

/// Indices of the atoms belonging to the least-populated species, which anchor the trial
/// translations.
fn anchor_atoms(cell: &Cell) -> Vec<usize> {
    let anchor_species = cell.least_populated_species();
    cell.types()
        .iter()
        .enumerate()
        .filter(|(_, &species)| species == anchor_species)
        .map(|(i, _)| i)
        .collect_vec()
}

/// Finds all pure translations of a cell, *i.e.* all translations $`\mathbf{t}`$ such that
/// $`(\mathbf{I}, \mathbf{t})`$ maps the cell onto itself.
///
/// # Returns
///
/// The distinct pure translations in $`[0, 1)^3`$, the zero translation first.
///
/// # Errors
///
/// Errors if the identity is not recovered.
pub fn search_pure_translations(
    cell: &Cell,
    tol: &Tolerance,
) -> Result<Vec<Vector3<f64>>, SymmetryError> {
    let anchors = anchor_atoms(cell);
    let first = *anchors.first().ok_or_else(|| {
        SymmetryError::InvalidCell("the cell contains no atoms".to_string())
    })?;
    let identity = Matrix3::<i32>::identity();
    let found = anchors
        .par_iter()
        .map(|&j| {
            let trial = wrap_fractional(&(cell.positions()[j] - cell.positions()[first]));
            match_operation(cell, &identity, &trial, tol)
                .map(|m| wrap_fractional(&m.refined_translation))
        })
        .collect::<Vec<_>>();

    let basis = cell.lattice().basis();
    let mut translations: Vec<Vector3<f64>> = Vec::with_capacity(found.len());
    for t in found.into_iter().flatten() {
        if !translations
            .iter()
            .any(|existing| is_lattice_vector(basis, &(existing - t), tol))
        {
            translations.push(t);
        }
    }
    match translations.first() {
        Some(t0) if is_lattice_vector(basis, t0, tol) => {
            translations[0] = Vector3::zeros();
            log::debug!("{} pure translation(s) found.", translations.len());
            Ok(translations)
        }
        _ => Err(SymmetryError::InternalInconsistency(
            "the identity operation does not map the cell onto itself".to_string(),
        )),
    }
}

/// Finds, for each candidate rotation, the translation completing it into a symmetry operation of
/// a primitive cell.
///
/// # Arguments
///
/// * `cell` - A primitive cell, *i.e.* one without non-trivial pure translations.
/// * `rotations` - The candidate rotations, *e.g.* the lattice point group.
/// * `tol` - The tolerance.
///
/// # Returns
///
/// The operations found together with their induced permutations, in the order of `rotations`.
/// If several translations survive for a rotation, the one with the smallest maximum residual is
/// kept.
///
/// # Errors
///
/// Errors if the identity is not among the operations found.
pub fn search_operations(
    cell: &Cell,
    rotations: &[Matrix3<i32>],
    tol: &Tolerance,
) -> Result<Vec<(SymmetryOperation, Permutation)>, SymmetryError> {
    let anchors = anchor_atoms(cell);
    let first = *anchors.first().ok_or_else(|| {
        SymmetryError::InvalidCell("the cell contains no atoms".to_string())
    })?;
    let mut found = rotations
        .par_iter()
        .map(|rotation| {
            let image_of_first = to_f64_matrix(rotation) * cell.positions()[first];
            anchors
                .iter()
                .filter_map(|&j| {
                    let trial = wrap_fractional(&(cell.positions()[j] - image_of_first));
                    match_operation(cell, rotation, &trial, tol)
                })
                .min_by_key(|m| OrderedFloat(m.max_residual))
                .map(|m| {
                    (
                        SymmetryOperation::new(*rotation, wrap_fractional(&m.refined_translation)),
                        m.permutation,
                    )
                })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect_vec();

    let basis = cell.lattice().basis();
    match found.first_mut() {
        Some((op, _))
            if op.rotation == Matrix3::identity()
                && is_lattice_vector(basis, &op.translation, tol) =>
        {
            op.translation = Vector3::zeros();
        }
        _ => {
            return Err(SymmetryError::InternalInconsistency(
                "the identity operation is not the first operation found".to_string(),
            ))
        }
    }
    log::debug!(
        "{} operation(s) found out of {} candidate rotation(s).",
        found.len(),
        rotations.len()
    );
    Ok(found)
}

/// Re-expresses the operations of the primitive cell in the basis of the input cell and combines
/// them with the pure translations.
///
/// Operations whose rotation part is not integral in the input basis are symmetries of the
/// structure but not of the input lattice, and are omitted.
///
/// # Arguments
///
/// * `primitive_operations` - The operations of the primitive cell.
/// * `transformation` - The primitive basis vectors in fractional coordinates of the input cell,
/// as columns.
/// * `pure_translations` - The pure translations of the input cell, zero first.
#[must_use]
pub fn expand_operations(
    primitive_operations: &[SymmetryOperation],
    transformation: &Matrix3<f64>,
    pure_translations: &[Vector3<f64>],
) -> Vec<SymmetryOperation> {
    let Some(t_inv) = transformation.try_inverse() else {
        return vec![];
    };
    primitive_operations
        .iter()
        .filter_map(|op| {
            let w_in = round_to_integer_matrix(
                &(transformation * to_f64_matrix(&op.rotation) * t_inv),
                1e-6,
            );
            if w_in.is_none() {
                log::debug!("Operation {op} is not compatible with the input lattice.");
            }
            w_in.map(|w_in| (w_in, transformation * op.translation))
        })
        .flat_map(|(w_in, t_in)| {
            pure_translations
                .iter()
                .map(move |tau| SymmetryOperation::new(w_in, wrap_fractional(&(t_in + tau))))
        })
        .collect_vec()
}

/// Determines the complete set of symmetry operations of a cell.
///
/// The pure translations are found first and used to build the primitive cell. The lattice point
/// group of the primitive lattice supplies the candidate rotations, each of which is completed
/// into an operation where possible. The operations are checked to form a group and finally
/// expressed in the input basis.
///
/// # Errors
///
/// Errors if the cell is degenerate or the operations found are inconsistent.
pub fn search_symmetry(cell: &Cell, tol: &Tolerance) -> Result<SymmetrySearchResult, SymmetryError> {
    cell.lattice().validate()?;
    let pure_translations = search_pure_translations(cell, tol)?;
    let primitive = find_primitive_cell(cell, &pure_translations, tol)?;
    let rotations = lattice_point_group(primitive.cell.lattice(), tol)?;
    let (primitive_operations, primitive_permutations): (Vec<_>, Vec<_>) =
        search_operations(&primitive.cell, &rotations, tol)?
            .into_iter()
            .unzip();
    OperationSet::new(primitive_operations.clone())
        .validate_group(primitive.cell.lattice().basis(), tol)?;
    let operations = OperationSet::new(expand_operations(
        &primitive_operations,
        &primitive.transformation,
        &pure_translations,
    ));
    log::debug!(
        "{} operation(s) in the input cell ({} primitive operation(s) × {} pure translation(s)).",
        operations.len(),
        primitive_operations.len(),
        pure_translations.len()
    );
    Ok(SymmetrySearchResult {
        pure_translations,
        primitive,
        primitive_operations,
        primitive_permutations,
        operations,
    })
}
