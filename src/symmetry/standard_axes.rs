//! Conventional axes of a crystal from the rotations of its point group.

use indexmap::IndexSet;
use itertools::{iproduct, Itertools};
use log;
use nalgebra::{Matrix3, Vector3};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::auxiliary::cell::Lattice;
use crate::auxiliary::geometry::{
    adjugate_i32, det_i32, integer_vector_gcd, primitive_integer_vector, Tolerance,
};
use crate::database::hall_symbol::TRANSLATION_DENOMINATOR;
use crate::lattice::niggli::niggli_reduce;
use crate::lattice::REDUCTION_MAX_ITERATIONS;
use crate::symmetry::point_group::{CrystalSystem, PointGroup};
use crate::symmetry::symmetry_operation::RotationKind;
use crate::symmetry::SymmetryError;

#[cfg(test)]
#[path = "standard_axes_tests.rs"]
mod standard_axes_tests;

/// The bound on the integer coefficients of candidate lattice vectors perpendicular to a
/// rotation axis.
const PERPENDICULAR_SEARCH_BOUND: i32 = 3;

/// A structure holding a choice of conventional axes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardAxes {
    /// The integer matrix $`\mathbf{S}_0`$ whose columns are the conventional basis vectors in
    /// fractional coordinates of the primitive cell. Its determinant is positive and equals the
    /// number of lattice points in the conventional cell.
    pub transformation: Matrix3<i32>,

    /// The centring translations of the conventional cell in units of $`1/24`$, sorted, the zero
    /// translation first.
    pub centring: Vec<Vector3<i32>>,
}

/// The proper part $`\det(\mathbf{W})\mathbf{W}`$ of a rotation.
fn proper_part(rotation: &Matrix3<i32>) -> Matrix3<i32> {
    rotation * det_i32(rotation)
}

/// The proper parts of the rotations whose proper order is `order`, deduplicated.
fn proper_rotations_of_order(rotations: &[Matrix3<i32>], order: usize) -> Vec<Matrix3<i32>> {
    rotations
        .iter()
        .filter(|w| {
            RotationKind::from_rotation(w).map(|kind| kind.proper_order()) == Some(order)
        })
        .map(proper_part)
        .unique()
        .collect_vec()
}

/// The primitive integer vector along the axis of a proper rotation other than the identity.
#[must_use]
pub fn rotation_axis(rotation: &Matrix3<i32>) -> Option<Vector3<i32>> {
    let m = rotation - Matrix3::identity();
    let rows = (0..3)
        .map(|i| Vector3::new(m[(i, 0)], m[(i, 1)], m[(i, 2)]))
        .collect_vec();
    (0..3)
        .tuple_combinations::<(_, _)>()
        .map(|(i, j)| rows[i].cross(&rows[j]))
        .find(|v| *v != Vector3::zeros())
        .map(|v| primitive_integer_vector(&v))
        .filter(|v| rotation * v == *v)
}

/// The distinct axes of a set of proper rotations, in order of first appearance.
fn distinct_axes(rotations: &[Matrix3<i32>]) -> Vec<Vector3<i32>> {
    rotations
        .iter()
        .filter_map(rotation_axis)
        .unique()
        .collect_vec()
}

/// Enumerates small lattice vectors annihilated by `annihilator`, sorted by Cartesian length and
/// then by their coefficients.
fn sorted_lattice_vectors_in_kernel(
    lattice: &Lattice,
    annihilator: &Matrix3<i32>,
) -> Vec<Vector3<i32>> {
    let bound = PERPENDICULAR_SEARCH_BOUND;
    iproduct!(-bound..=bound, -bound..=bound, -bound..=bound)
        .map(|(i, j, k)| Vector3::new(i, j, k))
        .filter(|v| *v != Vector3::zeros() && annihilator * v == Vector3::zeros())
        .sorted_by_key(|v| {
            (
                OrderedFloat((lattice.basis() * v.map(f64::from)).norm()),
                v[0],
                v[1],
                v[2],
            )
        })
        .collect_vec()
}

/// Gauss-reduces a two-dimensional lattice basis with respect to the Cartesian metric.
fn gauss_reduce(
    lattice: &Lattice,
    mut u: Vector3<i32>,
    mut v: Vector3<i32>,
) -> Result<(Vector3<i32>, Vector3<i32>), SymmetryError> {
    let cart = |w: &Vector3<i32>| lattice.basis() * w.map(f64::from);
    for _ in 0..REDUCTION_MAX_ITERATIONS {
        if cart(&u).norm_squared() > cart(&v).norm_squared() {
            std::mem::swap(&mut u, &mut v);
        }
        let mu = (cart(&u).dot(&cart(&v)) / cart(&u).norm_squared()).round() as i32;
        if mu == 0 {
            return Ok((u, v));
        }
        v -= u * mu;
    }
    Err(SymmetryError::ReductionFailed {
        algorithm: "Gauss",
        iterations: REDUCTION_MAX_ITERATIONS,
    })
}

/// Computes the centring translations of a conventional cell from the integer matrix relating
/// it to a primitive cell.
///
/// The primitive lattice points inside the conventional cell are the columns of
/// $`\mathbf{S}^{-1}`$ and their sums modulo the lattice.
///
/// # Returns
///
/// The sorted centring translations in units of $`1/24`$, or `None` if the determinant of
/// `transformation` does not divide 24.
#[must_use]
pub fn centring_translations(transformation: &Matrix3<i32>) -> Option<Vec<Vector3<i32>>> {
    let det = det_i32(transformation).abs();
    if det == 0 || TRANSLATION_DENOMINATOR % det != 0 {
        return None;
    }
    let scale = TRANSLATION_DENOMINATOR / det;
    let adj = adjugate_i32(transformation);
    let generators = (0..3)
        .map(|j| {
            Vector3::new(adj[(0, j)], adj[(1, j)], adj[(2, j)])
                .map(|x| (x * scale).rem_euclid(TRANSLATION_DENOMINATOR))
        })
        .collect_vec();
    let mut closure = IndexSet::<Vector3<i32>>::new();
    closure.insert(Vector3::zeros());
    let mut cursor = 0;
    while let Some(t) = closure.get_index(cursor).copied() {
        for g in &generators {
            closure.insert((t + g).map(|x| x.rem_euclid(TRANSLATION_DENOMINATOR)));
        }
        cursor += 1;
    }
    Some(
        closure
            .into_iter()
            .sorted_by_key(|t| (t[0], t[1], t[2]))
            .collect_vec(),
    )
}

fn missing(what: &str, point_group: &PointGroup) -> SymmetryError {
    SymmetryError::InternalInconsistency(format!(
        "no {what} found among the rotations of point group {point_group}"
    ))
}

/// Determines conventional axes for a primitive lattice and its point-group rotations.
///
/// The axes follow the proper parts of the rotations:
///
/// * triclinic: the Niggli-reduced basis;
/// * monoclinic: $`\mathbf{b}`$ along the twofold axis, $`\mathbf{a}`$ and $`\mathbf{c}`$ a
/// reduced basis of the perpendicular lattice plane;
/// * orthorhombic: the three twofold axes in order of increasing length;
/// * tetragonal, trigonal and hexagonal: $`\mathbf{c}`$ along the principal axis, $`\mathbf{a}`$
/// the shortest perpendicular lattice vector and $`\mathbf{b}`$ its image under the principal
/// rotation; rhombohedral centrings are brought to the obverse setting;
/// * cubic: the three fourfold axes, or the three twofold axes if there is no fourfold axis.
///
/// The handedness is fixed by reversing one axis where needed.
///
/// # Arguments
///
/// * `lattice` - The primitive lattice.
/// * `rotations` - The rotations of the point group in the primitive basis.
/// * `point_group` - The identified point group.
/// * `tol` - The tolerance, used for the triclinic reduction.
///
/// # Errors
///
/// Errors if the required rotation axes cannot be found.
pub fn find_standard_axes(
    lattice: &Lattice,
    rotations: &[Matrix3<i32>],
    point_group: &PointGroup,
    tol: &Tolerance,
) -> Result<StandardAxes, SymmetryError> {
    let mut transformation = match point_group.crystal_system() {
        CrystalSystem::Triclinic => niggli_reduce(lattice, tol)?.1,
        CrystalSystem::Monoclinic => monoclinic_axes(lattice, rotations, point_group)?,
        CrystalSystem::Orthorhombic => {
            let twofolds = proper_rotations_of_order(rotations, 2);
            let axes = distinct_axes(&twofolds)
                .into_iter()
                .sorted_by_key(|v| OrderedFloat((lattice.basis() * v.map(f64::from)).norm()))
                .collect_vec();
            if axes.len() != 3 {
                return Err(missing("set of three twofold axes", point_group));
            }
            Matrix3::from_columns(&[axes[0], axes[1], axes[2]])
        }
        CrystalSystem::Tetragonal => {
            let fourfold = *proper_rotations_of_order(rotations, 4)
                .first()
                .ok_or_else(|| missing("fourfold axis", point_group))?;
            let annihilator = Matrix3::identity() + fourfold * fourfold;
            principal_axes(lattice, &fourfold, &annihilator, point_group)?
        }
        CrystalSystem::Trigonal | CrystalSystem::Hexagonal => {
            let threefold = match proper_rotations_of_order(rotations, 6).first() {
                Some(sixfold) => sixfold * sixfold,
                None => *proper_rotations_of_order(rotations, 3)
                    .first()
                    .ok_or_else(|| missing("threefold axis", point_group))?,
            };
            let annihilator = Matrix3::identity() + threefold + threefold * threefold;
            principal_axes(lattice, &threefold, &annihilator, point_group)?
        }
        CrystalSystem::Cubic => {
            let fourfolds = proper_rotations_of_order(rotations, 4);
            let candidates = if fourfolds.is_empty() {
                proper_rotations_of_order(rotations, 2)
            } else {
                fourfolds
            };
            let axes = distinct_axes(&candidates);
            if axes.len() != 3 {
                return Err(missing("set of three cubic axes", point_group));
            }
            Matrix3::from_columns(&[axes[0], axes[1], axes[2]])
        }
    };

    if det_i32(&transformation) < 0 {
        let col = if point_group.crystal_system() == CrystalSystem::Monoclinic {
            1
        } else {
            2
        };
        let flipped = -transformation.column(col);
        transformation.set_column(col, &flipped);
    }

    let mut centring = centring_translations(&transformation).ok_or_else(|| {
        SymmetryError::InternalInconsistency(format!(
            "conventional cell with {} lattice points",
            det_i32(&transformation)
        ))
    })?;

    // Reverse rhombohedral centrings are turned into obverse ones by a half-turn about c.
    if centring.len() == 3 && !centring.contains(&Vector3::new(16, 8, 8)) {
        let half_turn = Matrix3::new(-1, 0, 0, 0, -1, 0, 0, 0, 1);
        transformation *= half_turn;
        centring = centring_translations(&transformation).ok_or_else(|| {
            SymmetryError::InternalInconsistency("rhombohedral centring lost".to_string())
        })?;
    }

    log::debug!(
        "Conventional axes for point group {point_group}: {} lattice point(s) per cell.",
        centring.len()
    );
    Ok(StandardAxes {
        transformation,
        centring,
    })
}

/// Axes along a principal rotation: $`\mathbf{c}`$ along its axis, $`\mathbf{a}`$ the shortest
/// lattice vector in the kernel of `annihilator` and $`\mathbf{b}`$ the image of $`\mathbf{a}`$.
fn principal_axes(
    lattice: &Lattice,
    principal: &Matrix3<i32>,
    annihilator: &Matrix3<i32>,
    point_group: &PointGroup,
) -> Result<Matrix3<i32>, SymmetryError> {
    let c = rotation_axis(principal).ok_or_else(|| missing("principal axis", point_group))?;
    let a = *sorted_lattice_vectors_in_kernel(lattice, annihilator)
        .first()
        .ok_or_else(|| missing("lattice vector perpendicular to the principal axis", point_group))?;
    let b = principal * a;
    Ok(Matrix3::from_columns(&[a, b, c]))
}

/// Monoclinic axes: $`\mathbf{b}`$ along the twofold axis and $`\mathbf{a}`$, $`\mathbf{c}`$
/// a Gauss-reduced basis of the lattice plane perpendicular to it.
fn monoclinic_axes(
    lattice: &Lattice,
    rotations: &[Matrix3<i32>],
    point_group: &PointGroup,
) -> Result<Matrix3<i32>, SymmetryError> {
    let twofold = *proper_rotations_of_order(rotations, 2)
        .first()
        .ok_or_else(|| missing("twofold axis", point_group))?;
    let b = rotation_axis(&twofold).ok_or_else(|| missing("twofold axis", point_group))?;
    let in_plane = sorted_lattice_vectors_in_kernel(lattice, &(Matrix3::identity() + twofold));
    let (a, c) = in_plane
        .iter()
        .tuple_combinations::<(_, _)>()
        .find(|(u, v)| integer_vector_gcd(&u.cross(v)) == 1)
        .map(|(u, v)| (*u, *v))
        .ok_or_else(|| missing("lattice plane perpendicular to the twofold axis", point_group))?;
    let (a, c) = gauss_reduce(lattice, a, c)?;
    Ok(Matrix3::from_columns(&[a, b, c]))
}
