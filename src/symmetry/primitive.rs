//! Primitive cells.

use itertools::Itertools;
use log;
use nalgebra::{Matrix3, Vector3};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::auxiliary::cell::Cell;
use crate::auxiliary::geometry::{
    positions_coincide, to_f64_matrix, wrap_centred, wrap_fractional, Tolerance,
};
use crate::lattice::delaunay::delaunay_reduce;
use crate::symmetry::operation_set::COMPOSITION_TOLERANCE_FACTOR;
use crate::symmetry::SymmetryError;

#[cfg(test)]
#[path = "primitive_tests.rs"]
mod primitive_tests;

/// A structure containing a primitive cell and its relation to the cell it was derived from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrimitiveCell {
    /// The primitive cell, with a Delaunay-reduced basis.
    pub cell: Cell,

    /// The matrix $`\mathbf{T}`$ whose columns are the primitive basis vectors in fractional
    /// coordinates of the input cell, so that $`\mathbf{L}_{\mathrm{p}} =
    /// \mathbf{L}_{\mathrm{in}}\mathbf{T}`$ and $`\mathbf{x}_{\mathrm{in}} =
    /// \mathbf{T}\mathbf{x}_{\mathrm{p}}`$.
    pub transformation: Matrix3<f64>,

    /// For each atom of the input cell, the index of the primitive atom it is mapped onto.
    pub mapping_to_primitive: Vec<usize>,

    /// The number of pure translations of the input cell, *i.e.* the ratio of the input volume
    /// to the primitive volume.
    pub n_translations: usize,
}

/// Chooses the primitive basis from the pure translations.
///
/// Returns the basis in fractional coordinates of the input cell, with entries snapped to
/// multiples of $`1/n`$.
fn primitive_basis(
    cell: &Cell,
    pure_translations: &[Vector3<f64>],
) -> Result<Matrix3<f64>, SymmetryError> {
    let n = pure_translations.len();
    if n <= 1 {
        return Ok(Matrix3::identity());
    }
    let basis = cell.lattice().basis();
    let candidates = pure_translations
        .iter()
        .skip(1)
        .map(wrap_centred)
        .chain([Vector3::x(), Vector3::y(), Vector3::z()])
        .sorted_by_key(|v| OrderedFloat((basis * v).norm()))
        .collect_vec();
    let nf = n as f64;
    candidates
        .iter()
        .tuple_combinations::<(_, _, _)>()
        .map(|(v0, v1, v2)| Matrix3::from_columns(&[*v0, *v1, *v2]))
        .find(|p| (p.determinant().abs() * nf - 1.0).abs() < 1e-6)
        .map(|p| p.map(|x| (x * nf).round() / nf))
        .ok_or_else(|| {
            SymmetryError::InternalInconsistency(format!(
                "no primitive basis can be formed from {n} pure translations"
            ))
        })
}

/// Constructs the primitive cell of a cell from its pure translations.
///
/// The shortest pure translations together with the input basis vectors supply the candidate
/// primitive basis vectors. The first triple spanning $`1/n`$ of the input volume is made
/// right-handed and Delaunay-reduced. Atoms related by a pure translation are then merged and
/// their positions averaged.
///
/// # Arguments
///
/// * `cell` - The input cell.
/// * `pure_translations` - The $`n`$ pure translations of `cell`, zero first.
/// * `tol` - The tolerance.
///
/// # Errors
///
/// Errors if no primitive basis exists or if the atoms do not fall into groups of exactly
/// $`n`$.
pub fn find_primitive_cell(
    cell: &Cell,
    pure_translations: &[Vector3<f64>],
    tol: &Tolerance,
) -> Result<PrimitiveCell, SymmetryError> {
    let n = pure_translations.len().max(1);
    let mut p = primitive_basis(cell, pure_translations)?;
    if (cell.lattice().basis() * p).determinant() < 0.0 {
        let flipped = -p.column(2);
        p.set_column(2, &flipped);
    }
    let (reduced_lattice, m) = delaunay_reduce(&cell.lattice().transformed(&p), tol)?;
    let transformation = p * to_f64_matrix(&m);
    let t_inv = transformation.try_inverse().ok_or_else(|| {
        SymmetryError::DegenerateLattice("singular primitive transformation".to_string())
    })?;

    let prim_basis = reduced_lattice.basis();
    let loose = tol.scaled(COMPOSITION_TOLERANCE_FACTOR);
    let mut groups: Vec<(Vector3<f64>, usize, Vec<usize>)> = vec![];
    for (i, (pos, &species)) in cell.positions().iter().zip(cell.types()).enumerate() {
        let x_p = t_inv * pos;
        match groups.iter_mut().find(|(rep, rep_species, _)| {
            *rep_species == species && positions_coincide(prim_basis, rep, &x_p, &loose)
        }) {
            Some((_, _, members)) => members.push(i),
            None => groups.push((x_p, species, vec![i])),
        }
    }
    if let Some((_, _, members)) = groups.iter().find(|(_, _, members)| members.len() != n) {
        return Err(SymmetryError::InternalInconsistency(format!(
            "{} atom(s) grouped onto one primitive site where {n} were expected",
            members.len()
        )));
    }

    let mut mapping_to_primitive = vec![0; cell.n_atoms()];
    let mut positions = Vec::with_capacity(groups.len());
    let mut types = Vec::with_capacity(groups.len());
    for (k, (rep, species, members)) in groups.iter().enumerate() {
        let mean_shift = members
            .iter()
            .map(|&i| wrap_centred(&(t_inv * cell.positions()[i] - rep)))
            .sum::<Vector3<f64>>()
            / members.len() as f64;
        positions.push(wrap_fractional(&(rep + mean_shift)));
        types.push(*species);
        for &i in members {
            mapping_to_primitive[i] = k;
        }
    }
    log::debug!(
        "Primitive cell with {} atom(s) found ({} pure translation(s)).",
        positions.len(),
        n
    );
    Ok(PrimitiveCell {
        cell: Cell::new(reduced_lattice, positions, types)?,
        transformation,
        mapping_to_primitive,
        n_translations: n,
    })
}
