//! Identification of the space-group type and setting of a set of operations.

use std::collections::HashSet;

use itertools::Itertools;
use log;
use nalgebra::{DMatrix, DVector, Matrix3, Vector3};
use serde::Serialize;

use crate::auxiliary::cell::Lattice;
use crate::auxiliary::geometry::{
    cartesian_residual, conjugate_integer_matrix, det_i32, round_to_integer_matrix,
    solve_modular_congruence, to_f64_matrix, wrap_centred, Tolerance,
};
use crate::database::hall_symbol::TRANSLATION_DENOMINATOR;
use crate::database::{records_for_point_group, SpaceGroupRecord};
use crate::symmetry::operation_set::COMPOSITION_TOLERANCE_FACTOR;
use crate::symmetry::point_group::{identify_point_group, CrystalSystem, PointGroup};
use crate::symmetry::standard_axes::{centring_translations, find_standard_axes};
use crate::symmetry::symmetry_operation::{RotationKind, SymmetryOperation};
use crate::symmetry::SymmetryError;

#[cfg(test)]
#[path = "space_group_tests.rs"]
mod space_group_tests;

/// The threshold for the consistency conditions of the origin-shift congruences. Candidate
/// shifts are verified against all operations afterwards.
const CONGRUENCE_THRESHOLD: f64 = 0.1;

/// The threshold below which the input basis, expressed in the primitive basis, is taken to be
/// integral.
const FRAME_THRESHOLD: f64 = 1e-3;

// ==================
// Struct definitions
// ==================

/// A structure holding the outcome of matching a set of primitive operations against the
/// reference database.
#[derive(Clone, Debug, Serialize)]
pub struct SpaceGroupMatch {
    /// The matched setting.
    #[serde(skip)]
    pub record: &'static SpaceGroupRecord,

    /// The point group.
    pub point_group: &'static PointGroup,

    /// The integer matrix $`\mathbf{S}`$ whose columns are the conventional basis vectors of the
    /// matched setting in fractional coordinates of the primitive cell.
    pub transformation: Matrix3<i32>,

    /// The origin shift $`\mathbf{u}`$ in fractional coordinates of the primitive cell, such
    /// that conventional coordinates are
    /// $`\mathbf{x}_{\mathrm{c}} = \mathbf{S}^{-1}(\mathbf{x}_{\mathrm{p}} + \mathbf{u})`$.
    pub origin_shift: Vector3<f64>,
}

impl SpaceGroupMatch {
    /// The space-group number.
    #[must_use]
    pub fn number(&self) -> usize {
        self.record.number
    }

    /// The Hall number.
    #[must_use]
    pub fn hall_number(&self) -> usize {
        self.record.hall_number
    }

    /// The coset representative of a record translation expressed for a primitive rotation, in
    /// fractional coordinates of the primitive cell: $`\mathbf{S}\mathbf{t}_{\mathrm{h}}`$.
    #[must_use]
    pub fn primitive_record_translation(&self, rotation: &Matrix3<i32>) -> Option<Vector3<f64>> {
        record_translation(self.record, &self.transformation, rotation)
    }

    /// The exact primitive operation with rotation `rotation` in the matched setting:
    /// $`\mathbf{w} = \mathbf{S}\mathbf{t}_{\mathrm{h}} - (\mathbf{I} - \mathbf{W})\mathbf{u}`$.
    #[must_use]
    pub fn exact_primitive_operation(&self, rotation: &Matrix3<i32>) -> Option<SymmetryOperation> {
        let t = self.primitive_record_translation(rotation)?;
        let i_minus_w = Matrix3::identity() - to_f64_matrix(rotation);
        Some(SymmetryOperation::new(
            *rotation,
            t - i_minus_w * self.origin_shift,
        ))
    }
}

/// The integer matrices $`\mathbf{Q}`$ trialled after the conventional axes, giving settings
/// $`\mathbf{S} = \mathbf{S}_0\mathbf{Q}`$. The identity always comes first.
#[must_use]
pub fn setting_trials(crystal_system: CrystalSystem) -> Vec<Matrix3<i32>> {
    match crystal_system {
        CrystalSystem::Monoclinic => {
            let entries = [-1, 0, 1];
            let mut trials = vec![Matrix3::identity()];
            for (q00, q01, q10, q11) in itertools::iproduct!(entries, entries, entries, entries) {
                let q = Matrix3::new(q00, 0, q01, 0, 1, 0, q10, 0, q11);
                if q00 * q11 - q01 * q10 == 1 && q != Matrix3::identity() {
                    trials.push(q);
                }
            }
            trials
        }
        CrystalSystem::Orthorhombic => vec![
            Matrix3::identity(),
            Matrix3::new(0, 0, 1, 1, 0, 0, 0, 1, 0),
            Matrix3::new(0, 1, 0, 0, 0, 1, 1, 0, 0),
            -Matrix3::new(0, 1, 0, 1, 0, 0, 0, 0, 1),
            -Matrix3::new(1, 0, 0, 0, 0, 1, 0, 1, 0),
            -Matrix3::new(0, 0, 1, 0, 1, 0, 1, 0, 0),
        ],
        CrystalSystem::Cubic => vec![
            Matrix3::identity(),
            Matrix3::new(0, 0, 1, 0, -1, 0, 1, 0, 0),
        ],
        _ => vec![Matrix3::identity()],
    }
}

/// The record translation of the rotation $`\mathbf{S}^{-1}\mathbf{W}\mathbf{S}`$, expressed in
/// fractional coordinates of the primitive cell.
fn record_translation(
    record: &SpaceGroupRecord,
    transformation: &Matrix3<i32>,
    rotation: &Matrix3<i32>,
) -> Option<Vector3<f64>> {
    let w_h = conjugate_integer_matrix(rotation, transformation)?;
    let t_h = record.translation_for(&w_h)?;
    Some(
        to_f64_matrix(transformation)
            * t_h.map(|x| f64::from(x) / f64::from(TRANSLATION_DENOMINATOR)),
    )
}

/// Selects generators among the operations: operations are taken in order of decreasing
/// rotation order whenever their rotation is not yet generated.
fn select_generators(operations: &[SymmetryOperation]) -> Vec<&SymmetryOperation> {
    let mut generated = HashSet::from([Matrix3::<i32>::identity()]);
    let mut generators = vec![];
    for op in operations
        .iter()
        .sorted_by_key(|op| std::cmp::Reverse(op.rotation_kind().map_or(0, |k| k.order())))
    {
        if generated.contains(&op.rotation) {
            continue;
        }
        generators.push(op);
        let mut frontier = generated.iter().copied().collect_vec();
        while let Some(w) = frontier.pop() {
            for g in &generators {
                let product = g.rotation * w;
                if generated.insert(product) {
                    frontier.push(product);
                }
            }
        }
    }
    generators
}

/// Searches the origin shift $`\mathbf{u}`$ relating a set of primitive operations to a record
/// in the setting $`\mathbf{S}`$, by solving
/// $`(\mathbf{I} - \mathbf{W})\mathbf{u} \equiv \mathbf{S}\mathbf{t}_{\mathrm{h}} - \mathbf{w}
/// \pmod{1}`$ over the generators and verifying every candidate against all operations.
///
/// Verified shifts are compared in the conventional cell: each is taken modulo the conventional
/// lattice and its centrings, and the one closest to the conventional origin wins, ties going to
/// the lexicographically smallest shift on the $`1/24`$ grid. A conventional cell whose origin is
/// already admissible therefore keeps it.
///
/// # Returns
///
/// The chosen shift, brought into $`[-\tfrac{1}{2}, \tfrac{1}{2}]^3`$ in the primitive basis,
/// or `None` if there is none.
fn find_origin_shift(
    record: &SpaceGroupRecord,
    transformation: &Matrix3<i32>,
    operations: &[SymmetryOperation],
    lattice: &Lattice,
    tol: &Tolerance,
) -> Option<Vector3<f64>> {
    let generators = select_generators(operations);
    let mut mat = DMatrix::<i64>::zeros(3 * generators.len(), 3);
    let mut rhs = DVector::<f64>::zeros(3 * generators.len());
    for (k, op) in generators.iter().enumerate() {
        let i_minus_w = Matrix3::<i32>::identity() - op.rotation;
        let target = record_translation(record, transformation, &op.rotation)? - op.translation;
        for i in 0..3 {
            for j in 0..3 {
                mat[(3 * k + i, j)] = i64::from(i_minus_w[(i, j)]);
            }
            rhs[3 * k + i] = target[i];
        }
    }

    let basis = lattice.basis();
    let s = to_f64_matrix(transformation);
    let s_inv = s.try_inverse()?;
    let conventional_basis = basis * s;
    let centrings = record
        .centring()
        .iter()
        .map(|c| c.map(|x| f64::from(x) / f64::from(TRANSLATION_DENOMINATOR)))
        .collect_vec();
    let grid = f64::from(TRANSLATION_DENOMINATOR);
    let conventional_key = |u: &Vector3<f64>| {
        centrings
            .iter()
            .map(|c| {
                let shift = wrap_centred(&(s_inv * u + c));
                let norm = (conventional_basis * shift).norm();
                let nodes = shift
                    .map(|x| ((x * grid).round() as i32).rem_euclid(TRANSLATION_DENOMINATOR));
                ((norm / tol.symprec).round() as i64, nodes[0], nodes[1], nodes[2])
            })
            .min()
    };
    solve_modular_congruence(&mat, &rhs, CONGRUENCE_THRESHOLD)
        .into_iter()
        .map(|u| wrap_centred(&u))
        .filter(|u| {
            operations.iter().all(|op| {
                record_translation(record, transformation, &op.rotation).map_or(false, |t| {
                    let i_minus_w = Matrix3::identity() - to_f64_matrix(&op.rotation);
                    cartesian_residual(basis, &(op.translation - t + i_minus_w * u))
                        < tol.symprec
                })
            })
        })
        .min_by_key(conventional_key)
}

/// Whether the monoclinic angle $`\beta`$ of a conventional basis is not acute.
fn has_obtuse_beta(lattice: &Lattice, transformation: &Matrix3<i32>) -> bool {
    let conventional = lattice.basis() * to_f64_matrix(transformation);
    conventional.column(0).dot(&conventional.column(2)) <= 0.0
}

/// Brings a monoclinic setting to an obtuse $`\beta`$ by reversing $`\mathbf{a}`$ and
/// $`\mathbf{b}`$, which commutes with every monoclinic rotation and centring.
fn obtuse_setting(lattice: &Lattice, transformation: Matrix3<i32>) -> Matrix3<i32> {
    if has_obtuse_beta(lattice, &transformation) {
        transformation
    } else {
        transformation * Matrix3::new(-1, 0, 0, 0, -1, 0, 0, 0, 1)
    }
}

/// The input basis expressed in the primitive basis, if it is an integral right-handed setting.
fn frame_setting(lattice: &Lattice, frame: &Lattice) -> Option<Matrix3<i32>> {
    let m = lattice.basis().try_inverse()? * frame.basis();
    round_to_integer_matrix(&m, FRAME_THRESHOLD).filter(|s| det_i32(s) > 0)
}

/// Identifies the space-group type of a set of primitive operations and the setting relating
/// them to the reference database.
///
/// The point group is identified from the rotations, conventional axes are derived from it, and
/// the records of that point group are tried in Hall-number order. A record matches a trial
/// setting when the centrings agree, the rotation sets coincide and an origin shift exists that
/// maps the translations onto those of the record. The first match wins. Monoclinic settings are
/// taken with an obtuse $`\beta`$.
///
/// # Arguments
///
/// * `lattice` - The primitive lattice.
/// * `operations` - The operations of the primitive cell, one per rotation.
/// * `tol` - The tolerance with which the operations were found.
///
/// # Errors
///
/// Errors with [`SymmetryError::UnrecognizedSymmetry`] if no record matches.
pub fn match_space_group(
    lattice: &Lattice,
    operations: &[SymmetryOperation],
    tol: &Tolerance,
) -> Result<SpaceGroupMatch, SymmetryError> {
    match_space_group_in_frame(lattice, operations, None, tol)
}

/// Identifies the space-group type of a set of primitive operations as
/// [`match_space_group`] does, but keeps the basis of the input cell whenever it is itself an
/// admissible conventional setting of the matched record. A cell that is already standardised
/// is thus returned in its own setting.
///
/// # Arguments
///
/// * `lattice` - The primitive lattice.
/// * `operations` - The operations of the primitive cell, one per rotation.
/// * `frame` - The lattice of the input cell, if any.
/// * `tol` - The tolerance with which the operations were found.
///
/// # Errors
///
/// Errors with [`SymmetryError::UnrecognizedSymmetry`] if no record matches.
pub fn match_space_group_in_frame(
    lattice: &Lattice,
    operations: &[SymmetryOperation],
    frame: Option<&Lattice>,
    tol: &Tolerance,
) -> Result<SpaceGroupMatch, SymmetryError> {
    let rotations = operations.iter().map(|op| op.rotation).collect_vec();
    let point_group = identify_point_group(&rotations)?;
    let crystal_system = point_group.crystal_system();
    let axes = find_standard_axes(lattice, &rotations, point_group, tol)?;
    let loose = tol.scaled(COMPOSITION_TOLERANCE_FACTOR);

    let setting = |s: Matrix3<i32>| {
        let centring = centring_translations(&s)?;
        let conjugated = rotations
            .iter()
            .map(|w| conjugate_integer_matrix(w, &s))
            .collect::<Option<HashSet<_>>>()?;
        Some((s, centring, conjugated))
    };
    let framed = frame
        .and_then(|f| frame_setting(lattice, f))
        .filter(|s| {
            crystal_system != CrystalSystem::Monoclinic || has_obtuse_beta(lattice, s)
        })
        .and_then(|s| setting(s));
    let settings = framed
        .into_iter()
        .chain(setting_trials(crystal_system).into_iter().filter_map(|q| {
            let s = axes.transformation * q;
            if crystal_system == CrystalSystem::Monoclinic {
                setting(obtuse_setting(lattice, s))
            } else {
                setting(s)
            }
        }))
        .collect_vec();

    for record in records_for_point_group(point_group) {
        let record_centring = record
            .centring()
            .iter()
            .copied()
            .sorted_by_key(|t| (t[0], t[1], t[2]))
            .collect_vec();
        let record_rotations = record.rotations.iter().copied().collect::<HashSet<_>>();
        for (s, centring, conjugated) in &settings {
            if *centring != record_centring || *conjugated != record_rotations {
                continue;
            }
            if let Some(origin_shift) = find_origin_shift(record, s, operations, lattice, &loose)
            {
                log::debug!("Operations match {record} with origin shift {origin_shift:?}.");
                return Ok(SpaceGroupMatch {
                    record,
                    point_group,
                    transformation: *s,
                    origin_shift,
                });
            }
        }
    }
    Err(SymmetryError::UnrecognizedSymmetry(format!(
        "{} operation(s) with point group {point_group} match no tabulated setting",
        operations.len()
    )))
}

/// Summarises the rotation kinds of a set of operations, *e.g.* for diagnostics.
#[must_use]
pub fn rotation_kind_summary(operations: &[SymmetryOperation]) -> String {
    RotationKind::ALL
        .iter()
        .filter_map(|kind| {
            let count = operations
                .iter()
                .filter(|op| op.rotation_kind() == Some(*kind))
                .count();
            (count > 0).then(|| format!("{count}×{kind}"))
        })
        .join(" ")
}
