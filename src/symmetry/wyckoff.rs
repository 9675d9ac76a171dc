//! Wyckoff positions and site-symmetry groups.
//!
//! The Wyckoff positions of a setting are derived from its operations on a grid of
//! $`24 \times 24 \times 24`$ points of the conventional cell, which contains every special
//! position of every crystallographic space group. Two grid points belong to the same Wyckoff
//! position if they are related by an operation of the group, or if they lie on a common affine
//! fixed space of their site-symmetry group and share that group. The derived positions are then
//! matched against the tabulated representatives of the International Tables, which fix their
//! letters.

use std::fmt;

use itertools::Itertools;
use log;
use nalgebra::{DMatrix, DVector, Matrix3, Vector3};
use serde::Serialize;

use crate::auxiliary::geometry::{cartesian_residual, diagonalise_integer_matrix, Tolerance};
use crate::database::hall_symbol::{ExactOperation, TRANSLATION_DENOMINATOR};
use crate::database::wyckoff_table::WYCKOFF_TABLE;
use crate::io::format::fractional_triplet;
use crate::database::SpaceGroupRecord;
use crate::symmetry::point_group::{identify_point_group, PointGroup};
use crate::symmetry::SymmetryError;

#[cfg(test)]
#[path = "wyckoff_tests.rs"]
mod wyckoff_tests;

const GRID: i32 = TRANSLATION_DENOMINATOR;

/// Parameter values, in units of $`1/24`$, at which tabulated representatives are evaluated.
/// Successive triples avoid each other's special values.
const SAMPLE_PARAMETERS: [[i32; 3]; 6] = [
    [5, 7, 11],
    [13, 2, 19],
    [1, 17, 10],
    [19, 11, 4],
    [7, 22, 3],
    [11, 5, 17],
];

/// Letters of Wyckoff positions in order. Only Pmmm needs the final `α`.
const WYCKOFF_LETTERS: [char; 27] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'α',
];

// ==================
// Struct definitions
// ==================

/// A structure describing one Wyckoff position of a space-group setting.
#[derive(Clone, Debug, Serialize)]
pub struct WyckoffPosition {
    /// The Wyckoff letter.
    pub letter: char,

    /// The number of equivalent points in the conventional cell.
    pub multiplicity: usize,

    /// The number of free coordinate parameters, *i.e.* the dimension of the fixed space of the
    /// site-symmetry group.
    pub free_parameters: usize,

    /// The point group of the site-symmetry group.
    pub site_symmetry: &'static PointGroup,

    /// A representative point in fractional coordinates of the conventional cell.
    pub representative: Vector3<f64>,
}

impl WyckoffPosition {
    /// The order of the site-symmetry group.
    #[must_use]
    pub fn site_symmetry_order(&self) -> usize {
        self.site_symmetry.order
    }
}

impl fmt::Display for WyckoffPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} ({}, {} free parameter(s))",
            self.multiplicity, self.letter, self.site_symmetry.symbol, self.free_parameters
        )
    }
}

/// A structure holding the Wyckoff positions of one space-group setting, together with the
/// Wyckoff position of every grid point.
#[derive(Clone, Debug)]
pub struct WyckoffTable {
    positions: Vec<WyckoffPosition>,
    grid_positions: Vec<usize>,
}

/// Minimal union–find over grid indices.
struct DisjointSets {
    parents: Vec<usize>,
}

impl DisjointSets {
    fn new(size: usize) -> Self {
        Self {
            parents: (0..size).collect(),
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parents[i] != i {
            self.parents[i] = self.parents[self.parents[i]];
            i = self.parents[i];
        }
        i
    }

    fn union(&mut self, i: usize, j: usize) {
        let (ri, rj) = (self.find(i), self.find(j));
        if ri != rj {
            self.parents[ri.max(rj)] = ri.min(rj);
        }
    }
}

fn grid_index(point: &Vector3<i32>) -> usize {
    let n = GRID as usize;
    point[0] as usize * n * n + point[1] as usize * n + point[2] as usize
}

fn grid_point(index: usize) -> Vector3<i32> {
    let n = GRID as usize;
    Vector3::new(index / (n * n), (index / n) % n, index % n).map(|x| x as i32)
}

fn wrap_grid(point: &Vector3<i32>) -> Vector3<i32> {
    point.map(|x| x.rem_euclid(GRID))
}

fn grid_image(op: &ExactOperation, point: &Vector3<i32>) -> Vector3<i32> {
    wrap_grid(&(op.rotation * point + op.translation))
}

/// The indices of the operations fixing a grid point modulo lattice translations.
fn grid_stabiliser(operations: &[ExactOperation], point: &Vector3<i32>) -> Vec<usize> {
    operations
        .iter()
        .enumerate()
        .filter(|(_, op)| grid_image(op, point) == *point)
        .map(|(i, _)| i)
        .collect_vec()
}

/// The integer basis vectors of the common fixed directions of a set of rotations, *i.e.* of the
/// kernel of the stacked matrices $`\mathbf{W} - \mathbf{I}`$.
fn fixed_directions<'a>(rotations: impl Iterator<Item = &'a Matrix3<i32>>) -> Vec<Vector3<i32>> {
    let (_, _, v, rank) = diagonalise_fixed_space(rotations);
    (rank..3)
        .map(|j| Vector3::new(v[(0, j)], v[(1, j)], v[(2, j)]).map(|x| x as i32))
        .collect_vec()
}

/// Diagonalises the stacked matrices $`\mathbf{W} - \mathbf{I}`$, returning
/// $`(\mathbf{U}, \mathbf{D}, \mathbf{V})`$ and the rank.
fn diagonalise_fixed_space<'a>(
    rotations: impl Iterator<Item = &'a Matrix3<i32>>,
) -> (DMatrix<i64>, DMatrix<i64>, DMatrix<i64>, usize) {
    let rotations = rotations.collect_vec();
    let mut mat = DMatrix::<i64>::zeros(3 * rotations.len().max(1), 3);
    for (k, w) in rotations.iter().enumerate() {
        let w_minus_i = *w - Matrix3::identity();
        for i in 0..3 {
            for j in 0..3 {
                mat[(3 * k + i, j)] = i64::from(w_minus_i[(i, j)]);
            }
        }
    }
    let (u, d, v) = diagonalise_integer_matrix(&mat);
    let rank = (0..3).take_while(|&i| d[(i, i)] != 0).count();
    (u, d, v, rank)
}

impl WyckoffTable {
    /// Derives the Wyckoff positions of a setting from its conventional operations.
    ///
    /// Letters follow the tabulated order of the International Tables. Should the tabulated
    /// positions fail to match the derived ones, letters fall back to the order of increasing
    /// multiplicity, then increasing number of free parameters, then the smallest grid
    /// representative. The general position carries the last letter either way.
    ///
    /// # Errors
    ///
    /// Errors if a site-symmetry group is not a crystallographic point group, which would
    /// indicate a corrupt record.
    pub fn generate(record: &SpaceGroupRecord) -> Result<Self, SymmetryError> {
        let operations = &record.operations;
        let n_points = (GRID * GRID * GRID) as usize;
        let stabilisers = (0..n_points)
            .map(|i| grid_stabiliser(operations, &grid_point(i)))
            .collect_vec();

        let mut sets = DisjointSets::new(n_points);
        for i in 0..n_points {
            let point = grid_point(i);
            for op in operations {
                sets.union(i, grid_index(&grid_image(op, &point)));
            }
        }

        let mut walked = vec![false; n_points];
        for i in 0..n_points {
            if walked[i] {
                continue;
            }
            let directions = fixed_directions(
                stabilisers[i]
                    .iter()
                    .map(|&k| &operations[k].rotation),
            );
            if directions.is_empty() {
                continue;
            }
            let point = grid_point(i);
            let steps = (0..directions.len())
                .map(|_| 0..GRID)
                .multi_cartesian_product();
            for coeffs in steps {
                let shifted = directions
                    .iter()
                    .zip(coeffs.iter())
                    .fold(point, |acc, (dir, c)| acc + dir * *c);
                let j = grid_index(&wrap_grid(&shifted));
                if stabilisers[j] == stabilisers[i] {
                    sets.union(i, j);
                    walked[j] = true;
                }
            }
        }

        let classes = (0..n_points)
            .map(|i| (sets.find(i), i))
            .into_group_map();
        let mut summaries = classes
            .into_iter()
            .map(|(root, members)| {
                let representative = members.iter().copied().min().unwrap_or(root);
                let stabiliser = &stabilisers[representative];
                let rotations = stabiliser
                    .iter()
                    .map(|&k| operations[k].rotation)
                    .collect_vec();
                let free_parameters = fixed_directions(rotations.iter()).len();
                let site_symmetry = identify_point_group(&rotations)?;
                Ok((
                    root,
                    operations.len() / stabiliser.len(),
                    free_parameters,
                    representative,
                    site_symmetry,
                ))
            })
            .collect::<Result<Vec<_>, SymmetryError>>()?;
        summaries.sort_by_key(|&(_, multiplicity, free, representative, _)| {
            (multiplicity, free, representative)
        });
        if summaries.len() > WYCKOFF_LETTERS.len() {
            return Err(SymmetryError::InternalInconsistency(format!(
                "{record} yields {} Wyckoff positions",
                summaries.len()
            )));
        }

        let mut class_of_root = vec![0; n_points];
        let mut positions = summaries
            .iter()
            .zip(WYCKOFF_LETTERS)
            .enumerate()
            .map(
                |(k, (&(root, multiplicity, free_parameters, representative, site_symmetry), letter))| {
                    class_of_root[root] = k;
                    WyckoffPosition {
                        letter,
                        multiplicity,
                        free_parameters,
                        site_symmetry,
                        representative: grid_point(representative)
                            .map(|x| f64::from(x) / f64::from(GRID)),
                    }
                },
            )
            .collect_vec();
        let mut grid_positions = (0..n_points)
            .map(|i| class_of_root[sets.find(i)])
            .collect_vec();

        match tabulated_order(record, &positions, &grid_positions) {
            Ok(order) => {
                let mut relabelled = vec![0; order.len()];
                for (k, &class) in order.iter().enumerate() {
                    relabelled[class] = k;
                }
                positions = order
                    .iter()
                    .zip(WYCKOFF_LETTERS)
                    .map(|(&class, letter)| WyckoffPosition {
                        letter,
                        ..positions[class].clone()
                    })
                    .collect_vec();
                grid_positions
                    .iter_mut()
                    .for_each(|class| *class = relabelled[*class]);
            }
            Err(err) => log::warn!("{record}: keeping derived Wyckoff letters: {err}"),
        }
        log::debug!(
            "{record}: {} Wyckoff position(s) derived.",
            positions.len()
        );
        Ok(Self {
            positions,
            grid_positions,
        })
    }

    /// The Wyckoff positions in letter order.
    #[must_use]
    pub fn positions(&self) -> &[WyckoffPosition] {
        &self.positions
    }

    /// The general position.
    #[must_use]
    pub fn general_position(&self) -> Option<&WyckoffPosition> {
        self.positions.last()
    }

    /// The Wyckoff position of a grid point given in units of $`1/24`$.
    #[must_use]
    pub fn position_of_grid_point(&self, point: &Vector3<i32>) -> &WyckoffPosition {
        &self.positions[self.grid_positions[grid_index(&wrap_grid(point))]]
    }

    /// Determines the Wyckoff position of a point of a symmetrised structure.
    ///
    /// The site-symmetry group of the point is found within tolerance, and a grid point sharing
    /// the same site-symmetry group on the same fixed space is located.
    ///
    /// # Arguments
    ///
    /// * `operations` - The conventional operations of the setting this table belongs to.
    /// * `position` - The point in fractional coordinates of the conventional cell.
    /// * `basis` - The conventional lattice basis.
    /// * `tol` - The tolerance.
    ///
    /// # Errors
    ///
    /// Errors if no grid point on the fixed space shares the site-symmetry group of the point.
    pub fn assign(
        &self,
        operations: &[ExactOperation],
        position: &Vector3<f64>,
        basis: &Matrix3<f64>,
        tol: &Tolerance,
    ) -> Result<&WyckoffPosition, SymmetryError> {
        let stabiliser = operations
            .iter()
            .enumerate()
            .filter(|(_, op)| {
                cartesian_residual(basis, &(op.to_operation().apply(position) - position))
                    < tol.symprec
            })
            .map(|(i, _)| i)
            .collect_vec();
        if stabiliser.len() <= 1 {
            return self.general_position().ok_or_else(|| {
                SymmetryError::InternalInconsistency("empty Wyckoff table".to_string())
            });
        }

        // Lifted translations fixing the point exactly: (W - I) x = -(t - d).
        let (u, d, v, rank) =
            diagonalise_fixed_space(stabiliser.iter().map(|&k| &operations[k].rotation));
        let mut rhs = DVector::<f64>::zeros(3 * stabiliser.len());
        for (k, &op_index) in stabiliser.iter().enumerate() {
            let op = operations[op_index].to_operation();
            let displacement = (op.apply(position) - position).map(f64::round);
            let lifted = op.translation - displacement;
            for i in 0..3 {
                rhs[3 * k + i] = -lifted[i];
            }
        }
        let e = u.map(|x| x as f64) * rhs;
        let v_f = v.map(|x| x as f64);
        let grid = f64::from(GRID);
        let fixed = (0..rank)
            .map(|i| (e[i] / d[(i, i)] as f64 * grid).round())
            .collect_vec();

        // An isolated special point has no free coordinates to scan.
        let free_coordinates: Box<dyn Iterator<Item = Vec<i32>>> = if rank == 3 {
            Box::new(std::iter::once(vec![]))
        } else {
            Box::new((0..3 - rank).map(|_| 0..GRID).multi_cartesian_product())
        };
        free_coordinates
            .map(|free| {
                let y = DVector::from_iterator(
                    3,
                    fixed
                        .iter()
                        .copied()
                        .chain(free.iter().map(|&c| f64::from(c))),
                );
                let z = &v_f * y;
                wrap_grid(&Vector3::new(z[0], z[1], z[2]).map(|x| x.round() as i32))
            })
            .find(|point| grid_stabiliser(operations, point) == stabiliser)
            .map(|point| self.position_of_grid_point(&point))
            .ok_or_else(|| {
                SymmetryError::InternalInconsistency(format!(
                    "no Wyckoff position found for point {position:?}"
                ))
            })
    }
}

/// Matches the tabulated Wyckoff positions of a setting against the derived ones, returning for
/// each tabulated letter in turn the index of its derived position.
fn tabulated_order(
    record: &SpaceGroupRecord,
    positions: &[WyckoffPosition],
    grid_positions: &[usize],
) -> Result<Vec<usize>, SymmetryError> {
    let entry = WYCKOFF_TABLE
        .get(record.hall_number - 1)
        .filter(|entry| entry.number == record.number)
        .ok_or_else(|| {
            SymmetryError::InternalInconsistency(format!("no tabulated Wyckoff row for {record}"))
        })?;
    let tabulated = entry.parse()?;
    if tabulated.len() != positions.len() {
        return Err(SymmetryError::InternalInconsistency(format!(
            "{} tabulated against {} derived Wyckoff position(s)",
            tabulated.len(),
            positions.len()
        )));
    }

    let mut order = Vec::with_capacity(tabulated.len());
    for site in &tabulated {
        let class = SAMPLE_PARAMETERS
            .iter()
            .map(|sample| {
                grid_positions[grid_index(&site.grid_point(&Vector3::from(*sample)))]
            })
            .find(|&class| {
                positions[class].multiplicity == site.multiplicity
                    && positions[class].free_parameters == site.free_parameters()
            })
            .ok_or_else(|| {
                SymmetryError::InternalInconsistency(format!(
                    "tabulated Wyckoff position of multiplicity {} not derived",
                    site.multiplicity
                ))
            })?;
        if order.contains(&class) {
            return Err(SymmetryError::InternalInconsistency(format!(
                "tabulated Wyckoff positions share the derived position {}",
                positions[class]
            )));
        }
        order.push(class);
    }
    Ok(order)
}

/// Lists the Wyckoff positions of a setting, for reporting.
#[must_use]
pub fn wyckoff_summary(table: &WyckoffTable) -> Vec<String> {
    table
        .positions()
        .iter()
        .map(|position| {
            format!(
                "{position} at {}",
                fractional_triplet(&position.representative)
            )
        })
        .collect_vec()
}
