//! Symmetrisation of structures and construction of standardised cells.

use itertools::Itertools;
use log;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::auxiliary::cell::{Cell, Lattice};
use crate::auxiliary::geometry::{
    inverse_unimodular, to_f64_matrix, wrap_centred, wrap_fractional,
};
use crate::database::hall_symbol::TRANSLATION_DENOMINATOR;
use crate::permutation::Permutation;
use crate::symmetry::operation_set::OperationSet;
use crate::symmetry::point_group::CrystalSystem;
use crate::symmetry::space_group::SpaceGroupMatch;
use crate::symmetry::symmetry_operation::SymmetryOperation;
use crate::symmetry::symmetry_search::{expand_operations, SymmetrySearchResult};
use crate::symmetry::SymmetryError;

#[cfg(test)]
#[path = "refinement_tests.rs"]
mod refinement_tests;

// ==================
// Struct definitions
// ==================

/// A structure containing a symmetrised structure in its input setting and in the standardised
/// conventional setting.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RefinedStructure {
    /// The standardised conventional cell with an idealised metric, in the standard orientation
    /// with $`\mathbf{a}`$ along $`x`$ and $`\mathbf{b}`$ in the $`xy`$-plane. All centring
    /// copies are included.
    pub standardized: Cell,

    /// For each atom of [`Self::standardized`], the index of the primitive atom it derives from.
    pub standardized_mapping_to_primitive: Vec<usize>,

    /// The conventional lattice as measured, *i.e.* without idealisation and in the input
    /// orientation.
    pub conventional_lattice: Lattice,

    /// The Cartesian rotation $`\mathbf{R}`$ taking the idealised conventional lattice in the
    /// input orientation onto the standard orientation.
    pub std_rotation: Matrix3<f64>,

    /// The matrix $`\mathbf{P}`$ of the transformation
    /// $`\mathbf{x}_{\mathrm{s}} = \mathbf{P}\mathbf{x} + \mathbf{p}`$ from input to standardised
    /// fractional coordinates.
    pub transformation: Matrix3<f64>,

    /// The origin shift $`\mathbf{p}`$ of that transformation.
    pub origin_shift: Vector3<f64>,

    /// The symmetrised input cell: same basis choice, orientation and atom order as the input,
    /// with idealised metric and symmetrised positions.
    pub symmetrised: Cell,

    /// The symmetrised primitive cell, in the input orientation with idealised metric.
    pub primitive: Cell,

    /// The exact operations of the primitive cell, one per rotation.
    pub primitive_operations: Vec<SymmetryOperation>,

    /// The exact operations in the input basis.
    pub operations: OperationSet,
}

// =========
// Functions
// =========

/// Idealises lattice parameters according to a crystal system.
///
/// The triclinic metric is unchanged; monoclinic cells get $`\alpha = \gamma = 90°`$;
/// orthorhombic cells all right angles; tetragonal cells additionally $`a = b`$; trigonal and
/// hexagonal cells $`a = b`$ and $`\gamma = 120°`$; cubic cells $`a = b = c`$. Equal lengths are
/// replaced by their mean.
///
/// # Returns
///
/// The idealised lengths and angles (degrees).
#[must_use]
pub fn idealised_parameters(
    lattice: &Lattice,
    crystal_system: CrystalSystem,
) -> ([f64; 3], [f64; 3]) {
    let [a, b, c] = lattice.lengths();
    let [alpha, beta, gamma] = lattice.angles();
    match crystal_system {
        CrystalSystem::Triclinic => ([a, b, c], [alpha, beta, gamma]),
        CrystalSystem::Monoclinic => ([a, b, c], [90.0, beta, 90.0]),
        CrystalSystem::Orthorhombic => ([a, b, c], [90.0, 90.0, 90.0]),
        CrystalSystem::Tetragonal => {
            let ab = (a + b) / 2.0;
            ([ab, ab, c], [90.0, 90.0, 90.0])
        }
        CrystalSystem::Trigonal | CrystalSystem::Hexagonal => {
            let ab = (a + b) / 2.0;
            ([ab, ab, c], [90.0, 90.0, 120.0])
        }
        CrystalSystem::Cubic => {
            let abc = (a + b + c) / 3.0;
            ([abc, abc, abc], [90.0, 90.0, 90.0])
        }
    }
}

/// The matrix whose columns are the standard primitive basis vectors of a centred conventional
/// cell, in conventional fractional coordinates. Rhombohedral cells are taken in the obverse
/// hexagonal setting.
#[must_use]
pub fn primitive_centring_matrix(centring_symbol: char) -> Matrix3<f64> {
    let third = 1.0 / 3.0;
    match centring_symbol {
        'A' => Matrix3::new(1.0, 0.0, 0.0, 0.0, 0.5, 0.5, 0.0, -0.5, 0.5),
        'B' => Matrix3::new(0.5, 0.0, 0.5, 0.0, 1.0, 0.0, -0.5, 0.0, 0.5),
        'C' => Matrix3::new(0.5, 0.5, 0.0, -0.5, 0.5, 0.0, 0.0, 0.0, 1.0),
        'I' => Matrix3::new(-0.5, 0.5, 0.5, 0.5, -0.5, 0.5, 0.5, 0.5, -0.5),
        'F' => Matrix3::new(0.0, 0.5, 0.5, 0.5, 0.0, 0.5, 0.5, 0.5, 0.0),
        'R' => Matrix3::new(
            2.0 * third,
            -third,
            -third,
            third,
            third,
            -2.0 * third,
            third,
            third,
            third,
        ),
        _ => Matrix3::identity(),
    }
}

/// The rotation factor of the polar decomposition of a real matrix.
fn polar_rotation(mat: &Matrix3<f64>) -> Result<Matrix3<f64>, SymmetryError> {
    let svd = mat.svd(true, true);
    match (svd.u, svd.v_t) {
        (Some(u), Some(v_t)) => Ok(u * v_t),
        _ => Err(SymmetryError::InternalInconsistency(
            "singular value decomposition of the orientation matrix failed".to_string(),
        )),
    }
}

/// Symmetrises fractional positions by averaging every atom over the images of its partners
/// under the inverse operations, which projects the positions onto the invariant subspace.
///
/// # Arguments
///
/// * `cell` - The cell.
/// * `operations` - Exact operations forming a group modulo the lattice of `cell`.
/// * `permutations` - The atom permutations induced by `operations`.
///
/// # Returns
///
/// The symmetrised positions, wrapped into $`[0, 1)`$.
///
/// # Errors
///
/// Errors if an operation has a non-unimodular rotation.
pub fn symmetrise_positions(
    cell: &Cell,
    operations: &[SymmetryOperation],
    permutations: &[Permutation],
) -> Result<Vec<Vector3<f64>>, SymmetryError> {
    let inverses = operations
        .iter()
        .map(|op| {
            inverse_unimodular(&op.rotation)
                .map(|w_inv| (to_f64_matrix(&w_inv), op.translation))
                .ok_or_else(|| {
                    SymmetryError::InternalInconsistency(format!(
                        "operation {op} has a non-unimodular rotation"
                    ))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let positions = cell.positions();
    let n_ops = operations.len() as f64;
    Ok(positions
        .iter()
        .enumerate()
        .map(|(i, x_i)| {
            let shift = inverses
                .iter()
                .zip(permutations.iter())
                .map(|((w_inv, w), perm)| {
                    let x_j = positions[perm.image()[i]];
                    wrap_centred(&(w_inv * (x_j - w) - x_i))
                })
                .sum::<Vector3<f64>>()
                / n_ops;
            wrap_fractional(&(x_i + shift))
        })
        .collect_vec())
}

/// Symmetrises a structure and constructs its standardised conventional cell.
///
/// The exact primitive operations are rebuilt from the matched setting, the primitive positions
/// are symmetrised with them, and the conventional metric is idealised according to the crystal
/// system. The results are then expressed in the standard setting and back in the input setting.
///
/// # Arguments
///
/// * `cell` - The input cell.
/// * `search` - The operation search result for `cell`.
/// * `space_group` - The space-group match of the primitive operations.
///
/// # Errors
///
/// Errors if the matched setting does not reproduce every primitive rotation or if a basis
/// transformation is singular.
pub fn refine_structure(
    cell: &Cell,
    search: &SymmetrySearchResult,
    space_group: &SpaceGroupMatch,
) -> Result<RefinedStructure, SymmetryError> {
    let prim = &search.primitive;
    let singular = |what: &str| SymmetryError::DegenerateLattice(format!("singular {what}"));

    let primitive_operations = search
        .primitive_operations
        .iter()
        .map(|op| {
            space_group
                .exact_primitive_operation(&op.rotation)
                .ok_or_else(|| {
                    SymmetryError::InternalInconsistency(format!(
                        "rotation of operation {op} is absent from {}",
                        space_group.record
                    ))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let prim_positions = symmetrise_positions(
        &prim.cell,
        &primitive_operations,
        &search.primitive_permutations,
    )?;

    // Conventional lattice, its idealisation and the orientation.
    let s = to_f64_matrix(&space_group.transformation);
    let s_inv = s.try_inverse().ok_or_else(|| singular("setting transformation"))?;
    let conventional_lattice = prim.cell.lattice().transformed(&s);
    let (lengths, angles) =
        idealised_parameters(&conventional_lattice, space_group.point_group.crystal_system());
    let std_lattice = Lattice::from_parameters(lengths, angles);
    let conv_inv = conventional_lattice
        .basis()
        .try_inverse()
        .ok_or_else(|| singular("conventional lattice"))?;
    let std_rotation = polar_rotation(&(std_lattice.basis() * conv_inv))?;
    let ideal_conventional_basis = std_rotation.transpose() * std_lattice.basis();

    // Standardised conventional cell with all centring copies.
    let u = space_group.origin_shift;
    let centrings = space_group
        .record
        .centring()
        .iter()
        .map(|c| c.map(|x| f64::from(x) / f64::from(TRANSLATION_DENOMINATOR)))
        .collect_vec();
    let mut std_positions = vec![];
    let mut std_types = vec![];
    let mut standardized_mapping_to_primitive = vec![];
    for centring in &centrings {
        for (i, (x_p, species)) in prim_positions.iter().zip(prim.cell.types()).enumerate() {
            std_positions.push(wrap_fractional(&(s_inv * (x_p + u) + centring)));
            std_types.push(*species);
            standardized_mapping_to_primitive.push(i);
        }
    }
    let standardized = Cell::new(std_lattice, std_positions, std_types)?;

    // Symmetrised primitive and input cells, in the input orientation.
    let t = prim.transformation;
    let t_inv = t.try_inverse().ok_or_else(|| singular("primitive transformation"))?;
    let ideal_primitive_basis = ideal_conventional_basis * s_inv;
    let primitive = Cell::new(
        Lattice::from_basis(ideal_primitive_basis),
        prim_positions.clone(),
        prim.cell.types().to_vec(),
    )?;
    let symmetrised_positions = cell
        .positions()
        .iter()
        .zip(prim.mapping_to_primitive.iter())
        .map(|(x_in, &i)| {
            let offset = (t_inv * x_in - prim_positions[i]).map(f64::round);
            let x_sym = t * (prim_positions[i] + offset);
            x_sym + (x_in - x_sym).map(f64::round)
        })
        .collect_vec();
    let symmetrised = Cell::new(
        Lattice::from_basis(ideal_primitive_basis * t_inv),
        symmetrised_positions,
        cell.types().to_vec(),
    )?;

    // Exact operations in the input basis.
    let n = search.pure_translations.len().max(1) as f64;
    let pure_translations = search
        .pure_translations
        .iter()
        .map(|tau| tau.map(|x| (x * n).round() / n))
        .collect_vec();
    let operations = OperationSet::new(expand_operations(
        &primitive_operations,
        &t,
        &pure_translations,
    ));

    let transformation = (t * s)
        .try_inverse()
        .ok_or_else(|| singular("standardising transformation"))?;
    let origin_shift = s_inv * u;
    log::debug!(
        "Refined structure: {} atom(s) in the standardised cell, origin shift {:?}.",
        standardized.n_atoms(),
        origin_shift
    );
    Ok(RefinedStructure {
        standardized,
        standardized_mapping_to_primitive,
        conventional_lattice,
        std_rotation,
        transformation,
        origin_shift,
        symmetrised,
        primitive,
        primitive_operations,
        operations,
    })
}

/// Reduces a standardised conventional cell to its standard primitive cell.
///
/// # Arguments
///
/// * `standardized` - The standardised conventional cell with the zero-centring copies first.
/// * `centring_symbol` - The lattice centring letter of the setting.
/// * `n_primitive` - The number of atoms in the primitive cell.
///
/// # Errors
///
/// Errors if `standardized` holds fewer than `n_primitive` atoms.
pub fn standard_primitive_cell(
    standardized: &Cell,
    centring_symbol: char,
    n_primitive: usize,
) -> Result<Cell, SymmetryError> {
    if standardized.n_atoms() < n_primitive {
        return Err(SymmetryError::InvalidCell(format!(
            "{} atom(s) cannot hold a primitive cell of {n_primitive}",
            standardized.n_atoms()
        )));
    }
    let p = primitive_centring_matrix(centring_symbol);
    let p_inv = p.try_inverse().ok_or_else(|| {
        SymmetryError::DegenerateLattice("singular centring matrix".to_string())
    })?;
    Cell::new(
        standardized.lattice().transformed(&p),
        standardized
            .positions()
            .iter()
            .take(n_primitive)
            .map(|x| wrap_fractional(&(p_inv * x)))
            .collect_vec(),
        standardized.types()[..n_primitive].to_vec(),
    )
}
