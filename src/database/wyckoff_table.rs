//! The Wyckoff positions of every tabulated setting as listed in the International Tables for
//! Crystallography, Volume A.
//!
//! Each setting lists its positions in letter order, `a` first, as `;`-separated terms of a
//! multiplicity followed by a representative point. Coordinates are linear expressions in the
//! free parameters `x`, `y` and `z` with fractional constants. Representatives of origin-choice-2
//! settings are written in their own origin.

use itertools::Itertools;
use lazy_static::lazy_static;
use nalgebra::{Matrix3, Vector3};
use regex::Regex;

use crate::database::hall_symbol::TRANSLATION_DENOMINATOR;
use crate::database::space_group_table::N_SETTINGS;
use crate::symmetry::SymmetryError;

lazy_static! {
    static ref VARIABLE_TERM_RE: Regex =
        Regex::new(r"^([+-]?)(\d*)([xyz])$").expect("Regex pattern invalid.");
    static ref CONSTANT_TERM_RE: Regex =
        Regex::new(r"^([+-]?)(\d+)(?:/(\d+))?$").expect("Regex pattern invalid.");
}

/// A row of the Wyckoff table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WyckoffEntry {
    /// The space-group number, for cross-checking against the settings table.
    pub number: usize,

    /// The positions in letter order.
    pub positions: &'static str,
}

/// One tabulated Wyckoff position: its multiplicity and the affine map taking the free
/// parameters to a representative point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabulatedWyckoff {
    /// The number of equivalent points in the conventional cell.
    pub multiplicity: usize,

    /// Row `i` holds the coefficients of `x`, `y` and `z` in coordinate `i`.
    pub coefficients: Matrix3<i32>,

    /// The constant parts in units of $`1/24`$.
    pub constants: Vector3<i32>,
}

impl TabulatedWyckoff {
    /// The number of free parameters the representative depends on.
    #[must_use]
    pub fn free_parameters(&self) -> usize {
        self.coefficients
            .column_iter()
            .filter(|column| column.iter().any(|&c| c != 0))
            .count()
    }

    /// The representative for integer parameters given in units of $`1/24`$, wrapped into the
    /// grid of the conventional cell.
    #[must_use]
    pub fn grid_point(&self, parameters: &Vector3<i32>) -> Vector3<i32> {
        (self.coefficients * parameters + self.constants)
            .map(|x| x.rem_euclid(TRANSLATION_DENOMINATOR))
    }
}

impl WyckoffEntry {
    /// Parses the positions of this row in letter order.
    ///
    /// # Errors
    ///
    /// Errors with [`SymmetryError::InternalInconsistency`] if a term is malformed.
    pub fn parse(&self) -> Result<Vec<TabulatedWyckoff>, SymmetryError> {
        self.positions
            .split(';')
            .map(|term| {
                parse_position(term.trim()).ok_or_else(|| {
                    SymmetryError::InternalInconsistency(format!(
                        "malformed Wyckoff term `{term}` for space group {}",
                        self.number
                    ))
                })
            })
            .collect()
    }
}

fn parse_position(term: &str) -> Option<TabulatedWyckoff> {
    let (multiplicity, point) = term.split_once(' ')?;
    let multiplicity = multiplicity.parse::<usize>().ok()?;
    let coordinates = point.split(',').collect_vec();
    if coordinates.len() != 3 {
        return None;
    }
    let mut coefficients = Matrix3::zeros();
    let mut constants = Vector3::zeros();
    for (i, &coordinate) in coordinates.iter().enumerate() {
        // Split before every sign that does not lead the expression.
        let mut start = 0;
        let mut terms = vec![];
        for (j, c) in coordinate.char_indices().skip(1) {
            if c == '+' || c == '-' {
                terms.push(&coordinate[start..j]);
                start = j;
            }
        }
        terms.push(&coordinate[start..]);
        for linear_term in terms {
            if let Some(caps) = VARIABLE_TERM_RE.captures(linear_term) {
                let sign = if &caps[1] == "-" { -1 } else { 1 };
                let factor = if caps[2].is_empty() {
                    1
                } else {
                    caps[2].parse::<i32>().ok()?
                };
                let j = "xyz".find(&caps[3])?;
                coefficients[(i, j)] += sign * factor;
            } else {
                let caps = CONSTANT_TERM_RE.captures(linear_term)?;
                let sign = if &caps[1] == "-" { -1 } else { 1 };
                let numerator = caps[2].parse::<i32>().ok()?;
                let denominator = caps
                    .get(3)
                    .map_or(Some(1), |d| d.as_str().parse::<i32>().ok())?;
                if denominator == 0 || (TRANSLATION_DENOMINATOR * numerator) % denominator != 0 {
                    return None;
                }
                constants[i] += sign * TRANSLATION_DENOMINATOR * numerator / denominator;
            }
        }
    }
    Some(TabulatedWyckoff {
        multiplicity,
        coefficients,
        constants,
    })
}

const fn sites(number: usize, positions: &'static str) -> WyckoffEntry {
    WyckoffEntry { number, positions }
}

/// The tabulated Wyckoff positions in Hall-number order, aligned with
/// [`SPACE_GROUP_TABLE`](crate::database::space_group_table::SPACE_GROUP_TABLE).
pub static WYCKOFF_TABLE: [WyckoffEntry; N_SETTINGS] = [
    sites(1, "1 x,y,z"),
    sites(
        2,
        "1 0,0,0; 1 0,0,1/2; 1 0,1/2,0; 1 1/2,0,0; 1 1/2,1/2,0; 1 1/2,0,1/2; 1 0,1/2,1/2; 1 1/2,1/2,1/2; 2 x,y,z",
    ),
    sites(3, "1 0,y,0; 1 0,y,1/2; 1 1/2,y,0; 1 1/2,y,1/2; 2 x,y,z"),
    sites(4, "2 x,y,z"),
    sites(5, "2 0,y,0; 2 0,y,1/2; 4 x,y,z"),
    sites(6, "1 x,0,z; 1 x,1/2,z; 2 x,y,z"),
    sites(7, "2 x,y,z"),
    sites(8, "2 x,0,z; 4 x,y,z"),
    sites(9, "4 x,y,z"),
    sites(
        10,
        "1 0,0,0; 1 0,1/2,0; 1 0,0,1/2; 1 1/2,0,0; 1 1/2,1/2,0; 1 0,1/2,1/2; 1 1/2,0,1/2; 1 1/2,1/2,1/2; 2 0,y,0; 2 1/2,y,0; 2 0,y,1/2; 2 1/2,y,1/2; 2 x,0,z; 2 x,1/2,z; 4 x,y,z",
    ),
    sites(11, "2 0,0,0; 2 1/2,0,0; 2 0,0,1/2; 2 1/2,0,1/2; 2 x,1/4,z; 4 x,y,z"),
    sites(
        12,
        "2 0,0,0; 2 0,1/2,0; 2 0,0,1/2; 2 0,1/2,1/2; 4 1/4,1/4,0; 4 1/4,1/4,1/2; 4 0,y,0; 4 0,y,1/2; 4 x,0,z; 8 x,y,z",
    ),
    sites(13, "2 0,0,0; 2 1/2,1/2,0; 2 0,1/2,0; 2 1/2,0,0; 2 0,y,1/4; 2 1/2,y,1/4; 4 x,y,z"),
    sites(14, "2 0,0,0; 2 1/2,0,0; 2 0,0,1/2; 2 1/2,0,1/2; 4 x,y,z"),
    sites(15, "4 0,0,0; 4 0,1/2,0; 4 1/4,1/4,0; 4 1/4,1/4,1/2; 4 0,y,1/4; 8 x,y,z"),
    sites(
        16,
        "1 0,0,0; 1 1/2,0,0; 1 0,1/2,0; 1 0,0,1/2; 1 1/2,1/2,0; 1 1/2,0,1/2; 1 0,1/2,1/2; 1 1/2,1/2,1/2; 2 x,0,0; 2 x,0,1/2; 2 x,1/2,0; 2 x,1/2,1/2; 2 0,y,0; 2 0,y,1/2; 2 1/2,y,0; 2 1/2,y,1/2; 2 0,0,z; 2 1/2,0,z; 2 0,1/2,z; 2 1/2,1/2,z; 4 x,y,z",
    ),
    sites(17, "2 x,0,0; 2 x,1/2,0; 2 0,y,1/4; 2 1/2,y,1/4; 4 x,y,z"),
    sites(18, "2 0,0,z; 2 0,1/2,z; 4 x,y,z"),
    sites(19, "4 x,y,z"),
    sites(20, "4 x,0,0; 4 0,y,1/4; 8 x,y,z"),
    sites(
        21,
        "2 0,0,0; 2 0,1/2,0; 2 1/2,0,1/2; 2 0,0,1/2; 4 x,0,0; 4 x,0,1/2; 4 0,y,0; 4 0,y,1/2; 4 0,0,z; 4 0,1/2,z; 4 1/4,1/4,z; 8 x,y,z",
    ),
    sites(
        22,
        "4 0,0,0; 4 0,0,1/2; 4 1/4,1/4,1/4; 4 1/4,1/4,3/4; 8 x,0,0; 8 0,y,0; 8 0,0,z; 8 1/4,1/4,z; 8 1/4,y,1/4; 8 x,1/4,1/4; 16 x,y,z",
    ),
    sites(
        23,
        "2 0,0,0; 2 1/2,0,0; 2 0,0,1/2; 2 0,1/2,0; 4 x,0,0; 4 x,0,1/2; 4 0,y,0; 4 1/2,y,0; 4 0,0,z; 4 0,1/2,z; 8 x,y,z",
    ),
    sites(24, "4 x,0,1/4; 4 1/4,y,0; 4 0,1/4,z; 8 x,y,z"),
    sites(
        25,
        "1 0,0,z; 1 0,1/2,z; 1 1/2,0,z; 1 1/2,1/2,z; 2 x,0,z; 2 x,1/2,z; 2 0,y,z; 2 1/2,y,z; 4 x,y,z",
    ),
    sites(26, "2 0,y,z; 2 1/2,y,z; 4 x,y,z"),
    sites(27, "2 0,0,z; 2 0,1/2,z; 2 1/2,0,z; 2 1/2,1/2,z; 4 x,y,z"),
    sites(28, "2 0,0,z; 2 0,1/2,z; 2 1/4,y,z; 4 x,y,z"),
    sites(29, "4 x,y,z"),
    sites(30, "2 0,0,z; 2 1/2,0,z; 4 x,y,z"),
    sites(31, "2 0,y,z; 4 x,y,z"),
    sites(32, "2 0,0,z; 2 0,1/2,z; 4 x,y,z"),
    sites(33, "4 x,y,z"),
    sites(34, "2 0,0,z; 2 0,1/2,z; 4 x,y,z"),
    sites(35, "2 0,0,z; 2 0,1/2,z; 4 1/4,1/4,z; 4 x,0,z; 4 0,y,z; 8 x,y,z"),
    sites(36, "4 0,y,z; 8 x,y,z"),
    sites(37, "4 0,0,z; 4 0,1/2,z; 4 1/4,1/4,z; 8 x,y,z"),
    sites(38, "2 0,0,z; 2 1/2,0,z; 4 x,0,z; 4 0,y,z; 4 1/2,y,z; 8 x,y,z"),
    sites(39, "4 0,0,z; 4 1/2,0,z; 4 x,1/4,z; 8 x,y,z"),
    sites(40, "4 0,0,z; 4 1/4,y,z; 8 x,y,z"),
    sites(41, "4 0,0,z; 8 x,y,z"),
    sites(42, "4 0,0,z; 8 1/4,1/4,z; 8 0,y,z; 8 x,0,z; 16 x,y,z"),
    sites(43, "8 0,0,z; 16 x,y,z"),
    sites(44, "2 0,0,z; 2 0,1/2,z; 4 x,0,z; 4 0,y,z; 8 x,y,z"),
    sites(45, "4 0,0,z; 4 1/2,0,z; 8 x,y,z"),
    sites(46, "4 0,0,z; 4 1/4,y,z; 8 x,y,z"),
    sites(
        47,
        "1 0,0,0; 1 1/2,0,0; 1 0,0,1/2; 1 1/2,0,1/2; 1 0,1/2,0; 1 1/2,1/2,0; 1 0,1/2,1/2; 1 1/2,1/2,1/2; 2 x,0,0; 2 x,0,1/2; 2 x,1/2,0; 2 x,1/2,1/2; 2 0,y,0; 2 0,y,1/2; 2 1/2,y,0; 2 1/2,y,1/2; 2 0,0,z; 2 0,1/2,z; 2 1/2,0,z; 2 1/2,1/2,z; 4 0,y,z; 4 1/2,y,z; 4 x,0,z; 4 x,1/2,z; 4 x,y,0; 4 x,y,1/2; 8 x,y,z",
    ),
    sites(
        48,
        "2 0,0,0; 2 1/2,0,0; 2 0,0,1/2; 2 0,1/2,0; 4 1/4,1/4,1/4; 4 1/4,1/4,3/4; 4 x,0,0; 4 x,0,1/2; 4 0,y,0; 4 1/2,y,0; 4 0,0,z; 4 1/2,0,z; 8 x,y,z",
    ),
    sites(
        48,
        "2 1/4,1/4,1/4; 2 3/4,1/4,1/4; 2 1/4,1/4,3/4; 2 1/4,3/4,1/4; 4 0,0,0; 4 0,0,1/2; 4 x,3/4,3/4; 4 x,3/4,1/4; 4 3/4,y,3/4; 4 1/4,y,3/4; 4 3/4,3/4,z; 4 1/4,3/4,z; 8 x,y,z",
    ),
    sites(
        49,
        "2 0,0,0; 2 1/2,1/2,0; 2 0,1/2,0; 2 1/2,0,0; 2 0,0,1/4; 2 1/2,0,1/4; 2 0,1/2,1/4; 2 1/2,1/2,1/4; 4 x,0,1/4; 4 x,1/2,1/4; 4 0,y,1/4; 4 1/2,y,1/4; 4 0,0,z; 4 1/2,1/2,z; 4 0,1/2,z; 4 1/2,0,z; 4 x,y,0; 8 x,y,z",
    ),
    sites(
        50,
        "2 0,0,0; 2 0,1/2,0; 2 0,1/2,1/2; 2 0,0,1/2; 4 1/4,1/4,0; 4 1/4,1/4,1/2; 4 0,0,z; 4 0,1/2,z; 4 x,0,0; 4 x,0,1/2; 4 0,y,0; 4 0,y,1/2; 8 x,y,z",
    ),
    sites(
        50,
        "2 1/4,1/4,0; 2 1/4,3/4,0; 2 1/4,3/4,1/2; 2 1/4,1/4,1/2; 4 0,0,0; 4 0,0,1/2; 4 3/4,3/4,z; 4 3/4,1/4,z; 4 x,3/4,0; 4 x,3/4,1/2; 4 3/4,y,0; 4 3/4,y,1/2; 8 x,y,z",
    ),
    sites(
        51,
        "2 0,0,0; 2 0,1/2,0; 2 0,0,1/2; 2 0,1/2,1/2; 2 1/4,0,z; 2 1/4,1/2,z; 4 0,y,0; 4 0,y,1/2; 4 x,0,z; 4 x,1/2,z; 4 1/4,y,z; 8 x,y,z",
    ),
    sites(52, "4 0,0,0; 4 0,0,1/2; 4 1/4,0,z; 4 x,1/4,1/4; 8 x,y,z"),
    sites(
        53,
        "2 0,0,0; 2 1/2,0,0; 2 1/2,1/2,0; 2 0,1/2,0; 4 x,0,0; 4 x,1/2,0; 4 1/4,y,1/4; 4 0,y,z; 8 x,y,z",
    ),
    sites(54, "4 0,0,0; 4 0,1/2,0; 4 0,y,1/4; 4 1/4,0,z; 4 1/4,1/2,z; 8 x,y,z"),
    sites(
        55,
        "2 0,0,0; 2 0,0,1/2; 2 0,1/2,0; 2 0,1/2,1/2; 4 0,0,z; 4 0,1/2,z; 4 x,y,0; 4 x,y,1/2; 8 x,y,z",
    ),
    sites(56, "4 0,0,0; 4 0,0,1/2; 4 1/4,1/4,z; 4 1/4,3/4,z; 8 x,y,z"),
    sites(57, "4 0,0,0; 4 1/2,0,0; 4 x,1/4,0; 4 x,y,1/4; 8 x,y,z"),
    sites(58, "2 0,0,0; 2 0,0,1/2; 2 0,1/2,0; 2 0,1/2,1/2; 4 0,0,z; 4 0,1/2,z; 4 x,y,0; 8 x,y,z"),
    sites(59, "2 0,0,z; 2 0,1/2,z; 4 1/4,1/4,0; 4 1/4,1/4,1/2; 4 0,y,z; 4 x,0,z; 8 x,y,z"),
    sites(59, "2 3/4,3/4,z; 2 3/4,1/4,z; 4 0,0,0; 4 0,0,1/2; 4 3/4,y,z; 4 x,3/4,z; 8 x,y,z"),
    sites(60, "4 0,0,0; 4 0,1/2,0; 4 0,y,1/4; 8 x,y,z"),
    sites(61, "4 0,0,0; 4 0,0,1/2; 8 x,y,z"),
    sites(62, "4 0,0,0; 4 0,0,1/2; 4 x,1/4,z; 8 x,y,z"),
    sites(63, "4 0,0,0; 4 0,1/2,0; 4 0,y,1/4; 8 1/4,1/4,0; 8 x,0,0; 8 0,y,z; 8 x,y,1/4; 16 x,y,z"),
    sites(64, "4 0,0,0; 4 1/2,0,0; 8 1/4,1/4,0; 8 x,0,0; 8 1/4,y,1/4; 8 0,y,z; 16 x,y,z"),
    sites(
        65,
        "2 0,0,0; 2 1/2,0,0; 2 1/2,0,1/2; 2 0,0,1/2; 4 1/4,1/4,0; 4 1/4,1/4,1/2; 4 x,0,0; 4 x,0,1/2; 4 0,y,0; 4 0,y,1/2; 4 0,0,z; 4 0,1/2,z; 8 1/4,1/4,z; 8 0,y,z; 8 x,0,z; 8 x,y,0; 8 x,y,1/2; 16 x,y,z",
    ),
    sites(
        66,
        "4 0,0,1/4; 4 0,1/2,1/4; 4 0,0,0; 4 0,1/2,0; 4 1/4,1/4,0; 4 1/4,3/4,0; 8 x,0,1/4; 8 0,y,1/4; 8 0,0,z; 8 0,1/2,z; 8 1/4,1/4,z; 8 x,y,0; 16 x,y,z",
    ),
    sites(
        67,
        "4 1/4,0,0; 4 1/4,0,1/2; 4 0,0,0; 4 0,0,1/2; 4 1/4,1/4,0; 4 1/4,1/4,1/2; 4 0,1/4,z; 8 x,0,0; 8 x,0,1/2; 8 1/4,y,0; 8 1/4,y,1/2; 8 1/4,0,z; 8 0,y,z; 8 x,1/4,z; 16 x,y,z",
    ),
    sites(
        68,
        "4 0,0,0; 4 0,0,1/2; 8 0,1/4,1/4; 8 1/4,0,1/4; 8 x,0,0; 8 0,y,0; 8 0,0,z; 8 1/4,1/4,z; 16 x,y,z",
    ),
    sites(
        68,
        "4 0,1/4,1/4; 4 0,1/4,3/4; 8 0,0,0; 8 1/4,1/4,0; 8 x,3/4,3/4; 8 0,y,3/4; 8 0,3/4,z; 8 1/4,0,z; 16 x,y,z",
    ),
    sites(
        69,
        "4 0,0,0; 4 0,0,1/2; 8 0,1/4,1/4; 8 1/4,0,1/4; 8 1/4,1/4,0; 8 1/4,1/4,1/4; 8 x,0,0; 8 0,y,0; 8 0,0,z; 16 1/4,1/4,z; 16 1/4,y,1/4; 16 x,1/4,1/4; 16 0,y,z; 16 x,0,z; 16 x,y,0; 32 x,y,z",
    ),
    sites(
        70,
        "8 0,0,0; 8 0,0,1/2; 16 1/8,1/8,1/8; 16 1/8,1/8,5/8; 16 x,0,0; 16 0,y,0; 16 0,0,z; 32 x,y,z",
    ),
    sites(
        70,
        "8 1/8,1/8,1/8; 8 1/8,1/8,5/8; 16 0,0,0; 16 0,0,1/2; 16 x,7/8,7/8; 16 7/8,y,7/8; 16 7/8,7/8,z; 32 x,y,z",
    ),
    sites(
        71,
        "2 0,0,0; 2 0,1/2,1/2; 2 1/2,1/2,0; 2 1/2,0,1/2; 4 x,0,0; 4 x,1/2,0; 4 0,y,0; 4 0,y,1/2; 4 0,0,z; 4 1/2,0,z; 8 1/4,1/4,1/4; 8 0,y,z; 8 x,0,z; 8 x,y,0; 16 x,y,z",
    ),
    sites(
        72,
        "4 0,0,1/4; 4 1/2,0,1/4; 4 0,0,0; 4 1/2,0,0; 8 1/4,1/4,1/4; 8 x,0,1/4; 8 0,y,1/4; 8 0,1/2,z; 8 0,0,z; 8 x,y,0; 16 x,y,z",
    ),
    sites(73, "8 0,0,0; 8 1/4,1/4,1/4; 8 x,0,1/4; 8 1/4,y,0; 8 0,1/4,z; 16 x,y,z"),
    sites(
        74,
        "4 0,0,0; 4 0,0,1/2; 4 1/4,1/4,1/4; 4 1/4,1/4,3/4; 4 0,1/4,z; 8 x,0,0; 8 1/4,y,1/4; 8 0,y,z; 8 x,1/4,z; 16 x,y,z",
    ),
    sites(75, "1 0,0,z; 1 1/2,1/2,z; 2 0,1/2,z; 4 x,y,z"),
    sites(76, "4 x,y,z"),
    sites(77, "2 0,0,z; 2 1/2,1/2,z; 2 0,1/2,z; 4 x,y,z"),
    sites(78, "4 x,y,z"),
    sites(79, "2 0,0,z; 4 0,1/2,z; 8 x,y,z"),
    sites(80, "4 0,0,z; 8 x,y,z"),
    sites(
        81,
        "1 0,0,0; 1 0,0,1/2; 1 1/2,1/2,0; 1 1/2,1/2,1/2; 2 0,0,z; 2 1/2,1/2,z; 2 0,1/2,z; 4 x,y,z",
    ),
    sites(82, "2 0,0,0; 2 0,0,1/2; 2 0,1/2,1/4; 2 0,1/2,3/4; 4 0,0,z; 4 0,1/2,z; 8 x,y,z"),
    sites(
        83,
        "1 0,0,0; 1 0,0,1/2; 1 1/2,1/2,0; 1 1/2,1/2,1/2; 2 0,1/2,0; 2 0,1/2,1/2; 2 0,0,z; 2 1/2,1/2,z; 4 0,1/2,z; 4 x,y,0; 4 x,y,1/2; 8 x,y,z",
    ),
    sites(
        84,
        "2 0,0,0; 2 1/2,1/2,0; 2 0,1/2,0; 2 0,1/2,1/2; 2 0,0,1/4; 2 1/2,1/2,1/4; 4 0,0,z; 4 1/2,1/2,z; 4 0,1/2,z; 4 x,y,0; 8 x,y,z",
    ),
    sites(85, "2 0,0,0; 2 0,0,1/2; 2 0,1/2,z; 4 1/4,1/4,0; 4 1/4,1/4,1/2; 4 0,0,z; 8 x,y,z"),
    sites(85, "2 1/4,3/4,0; 2 1/4,3/4,1/2; 2 1/4,1/4,z; 4 0,0,0; 4 0,0,1/2; 4 1/4,3/4,z; 8 x,y,z"),
    sites(86, "2 0,0,0; 2 0,0,1/2; 4 1/4,1/4,1/4; 4 1/4,1/4,3/4; 4 0,1/2,z; 4 0,0,z; 8 x,y,z"),
    sites(
        86,
        "2 1/4,1/4,1/4; 2 1/4,1/4,3/4; 4 0,0,0; 4 0,0,1/2; 4 3/4,1/4,z; 4 3/4,3/4,z; 8 x,y,z",
    ),
    sites(
        87,
        "2 0,0,0; 2 0,0,1/2; 4 0,1/2,0; 4 0,1/2,1/4; 4 0,0,z; 8 1/4,1/4,1/4; 8 0,1/2,z; 8 x,y,0; 16 x,y,z",
    ),
    sites(88, "4 0,0,0; 4 0,0,1/2; 8 0,1/4,1/8; 8 1/4,0,3/8; 8 0,1/2,z; 16 x,y,z"),
    sites(88, "4 0,1/4,1/8; 4 0,1/4,5/8; 8 0,0,0; 8 0,0,1/2; 8 0,1/4,z; 16 x,y,z"),
    sites(
        89,
        "1 0,0,0; 1 0,0,1/2; 1 1/2,1/2,0; 1 1/2,1/2,1/2; 2 1/2,0,0; 2 1/2,0,1/2; 2 0,0,z; 2 1/2,1/2,z; 4 0,1/2,z; 4 x,x,0; 4 x,x,1/2; 4 x,0,0; 4 x,1/2,1/2; 4 x,0,1/2; 4 x,1/2,0; 8 x,y,z",
    ),
    sites(90, "2 0,0,0; 2 0,0,1/2; 2 0,1/2,z; 4 0,0,z; 4 x,x,0; 4 x,x,1/2; 8 x,y,z"),
    sites(91, "4 0,y,0; 4 1/2,y,0; 4 x,x,3/8; 8 x,y,z"),
    sites(92, "4 x,x,0; 8 x,y,z"),
    sites(
        93,
        "2 0,0,0; 2 1/2,1/2,0; 2 0,1/2,0; 2 0,1/2,1/2; 2 0,0,1/4; 2 1/2,1/2,1/4; 4 0,0,z; 4 1/2,1/2,z; 4 0,1/2,z; 4 x,0,0; 4 x,1/2,1/2; 4 x,0,1/2; 4 x,1/2,0; 4 x,x,1/4; 4 x,x,3/4; 8 x,y,z",
    ),
    sites(94, "2 0,0,0; 2 0,0,1/2; 4 0,1/2,z; 4 0,0,z; 4 x,x,0; 4 x,x,1/2; 8 x,y,z"),
    sites(95, "4 0,y,0; 4 1/2,y,0; 4 x,x,5/8; 8 x,y,z"),
    sites(96, "4 x,x,0; 8 x,y,z"),
    sites(
        97,
        "2 0,0,0; 2 0,0,1/2; 4 0,1/2,0; 4 0,1/2,1/4; 4 0,0,z; 8 0,1/2,z; 8 x,x,0; 8 x,0,0; 8 x,0,1/2; 8 x,x+1/2,1/4; 16 x,y,z",
    ),
    sites(98, "4 0,0,0; 4 0,0,1/2; 8 0,0,z; 8 x,x,0; 8 -x,x,0; 8 x,1/4,1/8; 16 x,y,z"),
    sites(99, "1 0,0,z; 1 1/2,1/2,z; 2 1/2,0,z; 4 x,x,z; 4 x,0,z; 4 x,1/2,z; 8 x,y,z"),
    sites(100, "2 0,0,z; 2 1/2,0,z; 4 x,x+1/2,z; 8 x,y,z"),
    sites(101, "2 0,0,z; 2 1/2,1/2,z; 4 0,1/2,z; 4 x,x,z; 8 x,y,z"),
    sites(102, "2 0,0,z; 4 0,1/2,z; 4 x,x,z; 8 x,y,z"),
    sites(103, "2 0,0,z; 2 1/2,1/2,z; 4 0,1/2,z; 8 x,y,z"),
    sites(104, "2 0,0,z; 4 0,1/2,z; 8 x,y,z"),
    sites(105, "2 0,0,z; 2 1/2,1/2,z; 2 0,1/2,z; 4 x,0,z; 4 x,1/2,z; 8 x,y,z"),
    sites(106, "4 0,0,z; 4 0,1/2,z; 8 x,y,z"),
    sites(107, "2 0,0,z; 4 0,1/2,z; 8 x,x,z; 8 x,0,z; 16 x,y,z"),
    sites(108, "4 0,0,z; 4 1/2,0,z; 8 x,x+1/2,z; 16 x,y,z"),
    sites(109, "4 0,0,z; 8 0,y,z; 16 x,y,z"),
    sites(110, "8 0,0,z; 16 x,y,z"),
    sites(
        111,
        "1 0,0,0; 1 1/2,1/2,1/2; 1 0,0,1/2; 1 1/2,1/2,0; 2 1/2,0,0; 2 1/2,0,1/2; 2 0,0,z; 2 1/2,1/2,z; 4 x,0,0; 4 x,1/2,1/2; 4 x,0,1/2; 4 x,1/2,0; 4 0,1/2,z; 4 x,x,z; 8 x,y,z",
    ),
    sites(
        112,
        "2 0,0,1/4; 2 1/2,0,1/4; 2 1/2,1/2,1/4; 2 0,1/2,1/4; 2 0,0,0; 2 1/2,1/2,0; 4 x,0,1/4; 4 1/2,y,1/4; 4 x,1/2,1/4; 4 0,y,1/4; 4 0,0,z; 4 1/2,1/2,z; 4 0,1/2,z; 8 x,y,z",
    ),
    sites(113, "2 0,0,0; 2 0,0,1/2; 2 0,1/2,z; 4 0,0,z; 4 x,x+1/2,z; 8 x,y,z"),
    sites(114, "2 0,0,0; 2 0,0,1/2; 4 0,0,z; 4 0,1/2,z; 8 x,y,z"),
    sites(
        115,
        "1 0,0,0; 1 1/2,1/2,0; 1 1/2,1/2,1/2; 1 0,0,1/2; 2 0,0,z; 2 1/2,1/2,z; 2 0,1/2,z; 4 x,x,0; 4 x,x,1/2; 4 x,0,z; 4 x,1/2,z; 8 x,y,z",
    ),
    sites(
        116,
        "2 0,0,1/4; 2 1/2,1/2,1/4; 2 0,0,0; 2 1/2,1/2,0; 4 x,x,1/4; 4 x,-x,1/4; 4 0,0,z; 4 1/2,1/2,z; 4 0,1/2,z; 8 x,y,z",
    ),
    sites(
        117,
        "2 0,0,0; 2 0,0,1/2; 2 0,1/2,0; 2 0,1/2,1/2; 4 0,0,z; 4 0,1/2,z; 4 x,x+1/2,0; 4 x,x+1/2,1/2; 8 x,y,z",
    ),
    sites(
        118,
        "2 0,0,0; 2 0,0,1/2; 2 0,1/2,1/4; 2 0,1/2,3/4; 4 0,0,z; 4 0,1/2,z; 4 x,-x+1/2,1/4; 4 x,x+1/2,1/4; 8 x,y,z",
    ),
    sites(
        119,
        "2 0,0,0; 2 0,0,1/2; 2 0,1/2,1/4; 2 0,1/2,3/4; 4 0,0,z; 4 0,1/2,z; 8 x,x,0; 8 x,x+1/2,1/4; 8 x,0,z; 16 x,y,z",
    ),
    sites(
        120,
        "4 0,0,1/4; 4 0,0,0; 4 0,1/2,1/4; 4 0,1/2,0; 8 x,x,1/4; 8 0,0,z; 8 0,1/2,z; 8 x,x+1/2,0; 16 x,y,z",
    ),
    sites(
        121,
        "2 0,0,0; 2 0,0,1/2; 4 0,1/2,0; 4 0,1/2,1/4; 4 0,0,z; 8 x,0,0; 8 x,0,1/2; 8 0,1/2,z; 8 x,x,z; 16 x,y,z",
    ),
    sites(122, "4 0,0,0; 4 0,0,1/2; 8 0,0,z; 8 x,1/4,1/8; 16 x,y,z"),
    sites(
        123,
        "1 0,0,0; 1 0,0,1/2; 1 1/2,1/2,0; 1 1/2,1/2,1/2; 2 0,1/2,1/2; 2 0,1/2,0; 2 0,0,z; 2 1/2,1/2,z; 4 0,1/2,z; 4 x,x,0; 4 x,x,1/2; 4 x,0,0; 4 x,0,1/2; 4 x,1/2,0; 4 x,1/2,1/2; 8 x,y,0; 8 x,y,1/2; 8 x,x,z; 8 x,0,z; 8 x,1/2,z; 16 x,y,z",
    ),
    sites(
        124,
        "2 0,0,1/4; 2 0,0,0; 2 1/2,1/2,1/4; 2 1/2,1/2,0; 4 0,1/2,0; 4 0,1/2,1/4; 4 0,0,z; 4 1/2,1/2,z; 8 0,1/2,z; 8 x,x,1/4; 8 x,0,1/4; 8 x,1/2,1/4; 8 x,y,0; 16 x,y,z",
    ),
    sites(
        125,
        "2 0,0,0; 2 0,0,1/2; 2 0,1/2,0; 2 0,1/2,1/2; 4 1/4,1/4,0; 4 1/4,1/4,1/2; 4 0,0,z; 4 0,1/2,z; 8 x,0,0; 8 x,0,1/2; 8 x,x,0; 8 x,x,1/2; 8 x,-x+1/2,z; 16 x,y,z",
    ),
    sites(
        125,
        "2 1/4,1/4,0; 2 1/4,1/4,1/2; 2 1/4,3/4,0; 2 1/4,3/4,1/2; 4 0,0,0; 4 0,0,1/2; 4 3/4,3/4,z; 4 3/4,1/4,z; 8 x,3/4,0; 8 x,3/4,1/2; 8 x,x,0; 8 x,x,1/2; 8 x,-x,z; 16 x,y,z",
    ),
    sites(
        126,
        "2 0,0,0; 2 0,0,1/2; 4 0,1/2,0; 4 0,1/2,1/4; 4 0,0,z; 8 1/4,1/4,1/4; 8 0,1/2,z; 8 x,0,0; 8 x,0,1/2; 8 x,x,0; 16 x,y,z",
    ),
    sites(
        126,
        "2 1/4,1/4,1/4; 2 1/4,1/4,3/4; 4 1/4,3/4,1/4; 4 1/4,3/4,0; 4 3/4,3/4,z; 8 0,0,0; 8 3/4,1/4,z; 8 x,3/4,3/4; 8 x,3/4,1/4; 8 x,x,3/4; 16 x,y,z",
    ),
    sites(
        127,
        "2 0,0,0; 2 0,0,1/2; 2 0,1/2,1/2; 2 0,1/2,0; 4 0,0,z; 4 0,1/2,z; 4 x,x+1/2,0; 4 x,x+1/2,1/2; 8 x,y,0; 8 x,y,1/2; 8 x,x+1/2,z; 16 x,y,z",
    ),
    sites(
        128,
        "2 0,0,0; 2 0,0,1/2; 4 0,1/2,0; 4 0,1/2,1/4; 4 0,0,z; 8 0,1/2,z; 8 x,x+1/2,1/4; 8 x,y,0; 16 x,y,z",
    ),
    sites(
        129,
        "2 0,0,0; 2 0,0,1/2; 2 0,1/2,z; 4 1/4,1/4,0; 4 1/4,1/4,1/2; 4 1/2,1/2,z; 8 x,-x,0; 8 x,-x,1/2; 8 0,y,z; 8 x,x+1/2,z; 16 x,y,z",
    ),
    sites(
        129,
        "2 1/4,3/4,0; 2 1/4,3/4,1/2; 2 1/4,1/4,z; 4 0,0,0; 4 0,0,1/2; 4 3/4,1/4,z; 8 x,-x,0; 8 x,-x,1/2; 8 1/4,y,z; 8 x,x,z; 16 x,y,z",
    ),
    sites(130, "4 0,0,1/4; 4 0,0,0; 4 0,1/2,z; 8 1/4,1/4,0; 8 1/2,1/2,z; 8 x,-x,1/4; 16 x,y,z"),
    sites(
        130,
        "4 1/4,3/4,1/4; 4 1/4,3/4,0; 4 1/4,1/4,z; 8 0,0,0; 8 3/4,1/4,z; 8 x,-x,1/4; 16 x,y,z",
    ),
    sites(
        131,
        "2 0,0,0; 2 1/2,1/2,0; 2 0,1/2,0; 2 0,1/2,1/2; 2 0,0,1/4; 2 1/2,1/2,1/4; 4 0,0,z; 4 1/2,1/2,z; 4 0,1/2,z; 4 x,0,0; 4 x,1/2,1/2; 4 x,0,1/2; 4 x,1/2,0; 8 x,x,1/4; 8 0,y,z; 8 1/2,y,z; 8 x,y,0; 16 x,y,z",
    ),
    sites(
        132,
        "2 0,0,0; 2 0,0,1/4; 2 1/2,1/2,0; 2 1/2,1/2,1/4; 4 0,1/2,0; 4 0,1/2,1/4; 4 0,0,z; 4 1/2,1/2,z; 4 x,x,0; 4 x,x,1/2; 8 0,1/2,z; 8 x,0,1/4; 8 x,1/2,1/4; 8 x,x,z; 8 x,y,0; 16 x,y,z",
    ),
    sites(
        133,
        "4 0,0,0; 4 0,0,1/4; 4 0,1/2,1/4; 4 0,1/2,0; 8 1/4,1/4,1/4; 8 0,0,z; 8 0,1/2,z; 8 x,0,1/4; 8 x,0,3/4; 8 x,-x+1/2,0; 16 x,y,z",
    ),
    sites(
        133,
        "4 1/4,3/4,1/4; 4 1/4,3/4,0; 4 1/4,1/4,0; 4 1/4,1/4,1/4; 8 0,0,0; 8 3/4,1/4,z; 8 3/4,3/4,z; 8 x,1/4,0; 8 x,1/4,1/2; 8 x,-x+1/2,3/4; 16 x,y,z",
    ),
    sites(
        134,
        "2 0,0,0; 2 0,0,1/2; 4 0,1/2,0; 4 0,1/2,1/4; 4 1/4,1/4,1/4; 4 1/4,1/4,3/4; 4 0,0,z; 8 0,1/2,z; 8 x,0,0; 8 x,0,1/2; 8 x,-x+1/2,1/4; 8 x,-x+1/2,3/4; 8 x,x,z; 16 x,y,z",
    ),
    sites(
        134,
        "2 1/4,3/4,1/4; 2 3/4,1/4,1/4; 4 1/4,1/4,1/4; 4 1/4,1/4,0; 4 0,0,1/2; 4 0,0,0; 4 3/4,1/4,z; 8 3/4,3/4,z; 8 x,1/4,3/4; 8 x,1/4,1/4; 8 x,-x+1/2,0; 8 x,-x+1/2,1/2; 8 x,x+1/2,z; 16 x,y,z",
    ),
    sites(
        135,
        "4 0,0,0; 4 0,0,1/4; 4 0,1/2,0; 4 0,1/2,1/4; 8 0,0,z; 8 0,1/2,z; 8 x,x+1/2,1/4; 8 x,y,0; 16 x,y,z",
    ),
    sites(
        136,
        "2 0,0,0; 2 0,0,1/2; 4 0,1/2,0; 4 0,1/2,1/4; 4 0,0,z; 4 x,x,0; 4 x,-x,0; 8 0,1/2,z; 8 x,y,0; 8 x,x,z; 16 x,y,z",
    ),
    sites(137, "2 0,0,0; 2 0,0,1/2; 4 0,0,z; 4 0,1/2,z; 8 1/4,1/4,1/4; 8 x,x,0; 8 0,y,z; 16 x,y,z"),
    sites(
        137,
        "2 1/4,3/4,1/4; 2 3/4,1/4,1/4; 4 3/4,1/4,z; 4 3/4,3/4,z; 8 0,0,0; 8 x,x+1/2,3/4; 8 3/4,y,z; 16 x,y,z",
    ),
    sites(
        138,
        "4 0,0,1/4; 4 0,0,0; 4 1/4,1/4,1/4; 4 1/4,1/4,3/4; 4 0,1/2,z; 8 0,0,z; 8 x,x,1/4; 8 x,x,3/4; 8 x,-x+1/2,z; 16 x,y,z",
    ),
    sites(
        138,
        "4 1/4,3/4,0; 4 1/4,3/4,1/4; 4 0,0,1/2; 4 0,0,0; 4 3/4,3/4,z; 8 3/4,1/4,z; 8 x,x+1/2,0; 8 x,x+1/2,1/2; 8 x,-x+1/2,z; 16 x,y,z",
    ),
    sites(
        139,
        "2 0,0,0; 2 0,0,1/2; 4 0,1/2,0; 4 0,1/2,1/4; 4 0,0,z; 8 1/4,1/4,1/4; 8 0,1/2,z; 8 x,x,0; 8 x,0,0; 8 x,1/2,0; 16 x,x+1/2,1/4; 16 x,y,0; 16 x,x,z; 16 0,y,z; 32 x,y,z",
    ),
    sites(
        140,
        "4 0,0,1/4; 4 0,1/2,1/4; 4 0,0,0; 4 0,1/2,0; 8 1/4,1/4,1/4; 8 0,0,z; 8 0,1/2,z; 8 x,x+1/2,0; 16 x,0,1/4; 16 x,x,1/4; 16 x,x+1/2,z; 16 x,y,0; 32 x,y,z",
    ),
    sites(
        141,
        "4 0,0,0; 4 0,0,1/2; 8 0,1/4,1/8; 8 1/4,0,3/8; 8 0,0,z; 16 x,3/4,1/8; 16 x,x,0; 16 0,y,z; 32 x,y,z",
    ),
    sites(
        141,
        "4 0,3/4,1/8; 4 0,1/4,3/8; 8 0,0,0; 8 0,0,1/2; 8 0,1/4,z; 16 x,0,0; 16 x,x+1/4,7/8; 16 0,y,z; 32 x,y,z",
    ),
    sites(142, "8 0,0,0; 8 0,0,1/4; 16 0,1/4,1/8; 16 0,0,z; 16 x,3/4,3/8; 16 x,x,1/4; 32 x,y,z"),
    sites(
        142,
        "8 0,1/4,3/8; 8 0,1/4,1/8; 16 0,0,0; 16 0,1/4,z; 16 x,0,1/4; 16 x,x+1/4,1/8; 32 x,y,z",
    ),
    sites(143, "1 0,0,z; 1 1/3,2/3,z; 1 2/3,1/3,z; 3 x,y,z"),
    sites(144, "3 x,y,z"),
    sites(145, "3 x,y,z"),
    sites(146, "3 0,0,z; 9 x,y,z"),
    sites(147, "1 0,0,0; 1 0,0,1/2; 2 0,0,z; 2 1/3,2/3,z; 3 1/2,0,0; 3 1/2,0,1/2; 6 x,y,z"),
    sites(148, "3 0,0,0; 3 0,0,1/2; 6 0,0,z; 9 1/2,0,1/2; 9 1/2,0,0; 18 x,y,z"),
    sites(
        149,
        "1 0,0,0; 1 0,0,1/2; 1 1/3,2/3,0; 1 1/3,2/3,1/2; 1 2/3,1/3,0; 1 2/3,1/3,1/2; 2 0,0,z; 2 1/3,2/3,z; 2 2/3,1/3,z; 3 x,-x,0; 3 x,-x,1/2; 6 x,y,z",
    ),
    sites(150, "1 0,0,0; 1 0,0,1/2; 2 0,0,z; 2 1/3,2/3,z; 3 x,0,0; 3 x,0,1/2; 6 x,y,z"),
    sites(151, "3 x,-x,1/3; 3 x,-x,5/6; 6 x,y,z"),
    sites(152, "3 x,0,1/3; 3 x,0,5/6; 6 x,y,z"),
    sites(153, "3 x,-x,2/3; 3 x,-x,1/6; 6 x,y,z"),
    sites(154, "3 x,0,2/3; 3 x,0,1/6; 6 x,y,z"),
    sites(155, "3 0,0,0; 3 0,0,1/2; 6 0,0,z; 9 x,0,0; 9 x,0,1/2; 18 x,y,z"),
    sites(156, "1 0,0,z; 1 1/3,2/3,z; 1 2/3,1/3,z; 3 x,-x,z; 6 x,y,z"),
    sites(157, "1 0,0,z; 2 1/3,2/3,z; 3 x,0,z; 6 x,y,z"),
    sites(158, "2 0,0,z; 2 1/3,2/3,z; 2 2/3,1/3,z; 6 x,y,z"),
    sites(159, "2 0,0,z; 2 1/3,2/3,z; 6 x,y,z"),
    sites(160, "3 0,0,z; 9 x,-x,z; 18 x,y,z"),
    sites(161, "6 0,0,z; 18 x,y,z"),
    sites(
        162,
        "1 0,0,0; 1 0,0,1/2; 2 1/3,2/3,0; 2 1/3,2/3,1/2; 2 0,0,z; 3 1/2,0,0; 3 1/2,0,1/2; 4 1/3,2/3,z; 6 x,-x,0; 6 x,-x,1/2; 6 x,0,z; 12 x,y,z",
    ),
    sites(
        163,
        "2 0,0,1/4; 2 0,0,0; 2 1/3,2/3,1/4; 2 2/3,1/3,1/4; 4 0,0,z; 4 1/3,2/3,z; 6 1/2,0,0; 6 x,-x,1/4; 12 x,y,z",
    ),
    sites(
        164,
        "1 0,0,0; 1 0,0,1/2; 2 0,0,z; 2 1/3,2/3,z; 3 1/2,0,0; 3 1/2,0,1/2; 6 x,0,0; 6 x,0,1/2; 6 x,-x,z; 12 x,y,z",
    ),
    sites(165, "2 0,0,1/4; 2 0,0,0; 4 0,0,z; 4 1/3,2/3,z; 6 1/2,0,0; 6 x,0,1/4; 12 x,y,z"),
    sites(
        166,
        "3 0,0,0; 3 0,0,1/2; 6 0,0,z; 9 1/2,0,1/2; 9 1/2,0,0; 18 x,0,0; 18 x,0,1/2; 18 x,-x,z; 36 x,y,z",
    ),
    sites(167, "6 0,0,1/4; 6 0,0,0; 12 0,0,z; 18 1/2,0,0; 18 x,0,1/4; 36 x,y,z"),
    sites(168, "1 0,0,z; 2 1/3,2/3,z; 3 1/2,0,z; 6 x,y,z"),
    sites(169, "6 x,y,z"),
    sites(170, "6 x,y,z"),
    sites(171, "3 0,0,z; 3 1/2,1/2,z; 6 x,y,z"),
    sites(172, "3 0,0,z; 3 1/2,1/2,z; 6 x,y,z"),
    sites(173, "2 0,0,z; 2 1/3,2/3,z; 6 x,y,z"),
    sites(
        174,
        "1 0,0,0; 1 0,0,1/2; 1 1/3,2/3,0; 1 1/3,2/3,1/2; 1 2/3,1/3,0; 1 2/3,1/3,1/2; 2 0,0,z; 2 1/3,2/3,z; 2 2/3,1/3,z; 3 x,y,0; 3 x,y,1/2; 6 x,y,z",
    ),
    sites(
        175,
        "1 0,0,0; 1 0,0,1/2; 2 1/3,2/3,0; 2 1/3,2/3,1/2; 2 0,0,z; 3 1/2,0,0; 3 1/2,0,1/2; 4 1/3,2/3,z; 6 1/2,0,z; 6 x,y,0; 6 x,y,1/2; 12 x,y,z",
    ),
    sites(
        176,
        "2 0,0,1/4; 2 0,0,0; 2 1/3,2/3,1/4; 2 2/3,1/3,1/4; 4 0,0,z; 4 1/3,2/3,z; 6 1/2,0,0; 6 x,y,1/4; 12 x,y,z",
    ),
    sites(
        177,
        "1 0,0,0; 1 0,0,1/2; 2 1/3,2/3,0; 2 1/3,2/3,1/2; 2 0,0,z; 3 1/2,0,0; 3 1/2,0,1/2; 4 1/3,2/3,z; 6 1/2,0,z; 6 x,0,0; 6 x,0,1/2; 6 x,2x,0; 6 x,2x,1/2; 12 x,y,z",
    ),
    sites(178, "6 x,0,0; 6 x,2x,1/4; 12 x,y,z"),
    sites(179, "6 x,0,0; 6 x,2x,3/4; 12 x,y,z"),
    sites(
        180,
        "3 0,0,0; 3 0,0,1/2; 3 1/2,0,0; 3 1/2,0,1/2; 6 0,0,z; 6 1/2,0,z; 6 x,0,0; 6 x,0,1/2; 6 x,2x,0; 6 x,2x,1/2; 12 x,y,z",
    ),
    sites(
        181,
        "3 0,0,0; 3 0,0,1/2; 3 1/2,0,0; 3 1/2,0,1/2; 6 0,0,z; 6 1/2,0,z; 6 x,0,0; 6 x,0,1/2; 6 x,2x,0; 6 x,2x,1/2; 12 x,y,z",
    ),
    sites(
        182,
        "2 0,0,0; 2 0,0,1/4; 2 1/3,2/3,1/4; 2 1/3,2/3,3/4; 4 0,0,z; 4 1/3,2/3,z; 6 x,0,0; 6 x,2x,1/4; 12 x,y,z",
    ),
    sites(183, "1 0,0,z; 2 1/3,2/3,z; 3 1/2,0,z; 6 x,0,z; 6 x,-x,z; 12 x,y,z"),
    sites(184, "2 0,0,z; 4 1/3,2/3,z; 6 1/2,0,z; 12 x,y,z"),
    sites(185, "2 0,0,z; 4 1/3,2/3,z; 6 x,0,z; 12 x,y,z"),
    sites(186, "2 0,0,z; 2 1/3,2/3,z; 6 x,-x,z; 12 x,y,z"),
    sites(
        187,
        "1 0,0,0; 1 0,0,1/2; 1 1/3,2/3,0; 1 1/3,2/3,1/2; 1 2/3,1/3,0; 1 2/3,1/3,1/2; 2 0,0,z; 2 1/3,2/3,z; 2 2/3,1/3,z; 3 x,-x,0; 3 x,-x,1/2; 6 x,y,0; 6 x,y,1/2; 6 x,-x,z; 12 x,y,z",
    ),
    sites(
        188,
        "2 0,0,0; 2 0,0,1/4; 2 1/3,2/3,0; 2 1/3,2/3,1/4; 2 2/3,1/3,0; 2 2/3,1/3,1/4; 4 0,0,z; 4 1/3,2/3,z; 4 2/3,1/3,z; 6 x,-x,0; 6 x,y,1/4; 12 x,y,z",
    ),
    sites(
        189,
        "1 0,0,0; 1 0,0,1/2; 2 1/3,2/3,0; 2 1/3,2/3,1/2; 2 0,0,z; 3 x,0,0; 3 x,0,1/2; 4 1/3,2/3,z; 6 x,0,z; 6 x,y,0; 6 x,y,1/2; 12 x,y,z",
    ),
    sites(
        190,
        "2 0,0,0; 2 0,0,1/4; 2 1/3,2/3,1/4; 2 2/3,1/3,1/4; 4 0,0,z; 4 1/3,2/3,z; 6 x,0,0; 6 x,y,1/4; 12 x,y,z",
    ),
    sites(
        191,
        "1 0,0,0; 1 0,0,1/2; 2 1/3,2/3,0; 2 1/3,2/3,1/2; 2 0,0,z; 3 1/2,0,0; 3 1/2,0,1/2; 4 1/3,2/3,z; 6 1/2,0,z; 6 x,0,0; 6 x,0,1/2; 6 x,2x,0; 6 x,2x,1/2; 12 x,0,z; 12 x,2x,z; 12 x,y,0; 12 x,y,1/2; 24 x,y,z",
    ),
    sites(
        192,
        "2 0,0,1/4; 2 0,0,0; 4 1/3,2/3,1/4; 4 1/3,2/3,0; 4 0,0,z; 6 1/2,0,1/4; 6 1/2,0,0; 8 1/3,2/3,z; 12 1/2,0,z; 12 x,0,1/4; 12 x,2x,1/4; 12 x,y,0; 24 x,y,z",
    ),
    sites(
        193,
        "2 0,0,1/4; 2 0,0,0; 4 1/3,2/3,1/4; 4 1/3,2/3,0; 4 0,0,z; 6 1/2,0,0; 6 x,0,1/4; 8 1/3,2/3,z; 12 x,2x,0; 12 x,y,1/4; 12 x,0,z; 24 x,y,z",
    ),
    sites(
        194,
        "2 0,0,0; 2 0,0,1/4; 2 1/3,2/3,1/4; 2 1/3,2/3,3/4; 4 0,0,z; 4 1/3,2/3,z; 6 1/2,0,0; 6 x,2x,1/4; 12 x,0,0; 12 x,y,1/4; 12 x,2x,z; 24 x,y,z",
    ),
    sites(
        195,
        "1 0,0,0; 1 1/2,1/2,1/2; 3 0,1/2,1/2; 3 1/2,0,0; 4 x,x,x; 6 x,0,0; 6 x,0,1/2; 6 x,1/2,0; 6 x,1/2,1/2; 12 x,y,z",
    ),
    sites(
        196,
        "4 0,0,0; 4 1/2,1/2,1/2; 4 1/4,1/4,1/4; 4 3/4,3/4,3/4; 16 x,x,x; 24 x,0,0; 24 x,1/4,1/4; 48 x,y,z",
    ),
    sites(197, "2 0,0,0; 6 0,1/2,1/2; 8 x,x,x; 12 x,0,0; 12 x,1/2,0; 24 x,y,z"),
    sites(198, "4 x,x,x; 12 x,y,z"),
    sites(199, "8 x,x,x; 12 x,0,1/4; 24 x,y,z"),
    sites(
        200,
        "1 0,0,0; 1 1/2,1/2,1/2; 3 0,1/2,1/2; 3 1/2,0,0; 6 x,0,0; 6 x,0,1/2; 6 x,1/2,0; 6 x,1/2,1/2; 8 x,x,x; 12 0,y,z; 12 1/2,y,z; 24 x,y,z",
    ),
    sites(
        201,
        "2 0,0,0; 4 1/4,1/4,1/4; 4 1/4,1/4,3/4; 6 0,0,1/2; 8 x,x,x; 12 x,0,0; 12 x,1/2,0; 24 x,y,z",
    ),
    sites(
        201,
        "2 1/4,1/4,1/4; 4 0,0,0; 4 0,0,1/2; 6 1/4,1/4,3/4; 8 x,x,x; 12 x,3/4,3/4; 12 x,1/4,3/4; 24 x,y,z",
    ),
    sites(
        202,
        "4 0,0,0; 4 1/2,1/2,1/2; 8 1/4,1/4,1/4; 24 0,1/4,1/4; 24 x,0,0; 32 x,x,x; 48 x,1/4,1/4; 48 0,y,z; 96 x,y,z",
    ),
    sites(203, "8 0,0,0; 8 0,0,1/2; 16 1/8,1/8,1/8; 16 1/8,1/8,5/8; 32 x,x,x; 48 x,0,0; 96 x,y,z"),
    sites(
        203,
        "8 1/8,1/8,1/8; 8 1/8,1/8,5/8; 16 0,0,0; 16 0,0,1/2; 32 x,x,x; 48 x,7/8,7/8; 96 x,y,z",
    ),
    sites(
        204,
        "2 0,0,0; 6 0,1/2,1/2; 8 1/4,1/4,1/4; 12 x,0,0; 12 x,0,1/2; 16 x,x,x; 24 0,y,z; 48 x,y,z",
    ),
    sites(205, "4 0,0,0; 4 1/2,1/2,1/2; 8 x,x,x; 24 x,y,z"),
    sites(206, "8 0,0,0; 8 1/4,1/4,1/4; 16 x,x,x; 24 x,0,1/4; 48 x,y,z"),
    sites(
        207,
        "1 0,0,0; 1 1/2,1/2,1/2; 3 0,1/2,1/2; 3 1/2,0,0; 6 x,0,0; 6 x,1/2,1/2; 8 x,x,x; 12 x,1/2,0; 12 0,y,y; 12 1/2,y,y; 24 x,y,z",
    ),
    sites(
        208,
        "2 0,0,0; 4 1/4,1/4,1/4; 4 3/4,3/4,3/4; 6 0,1/2,1/2; 6 1/4,0,1/2; 6 1/4,1/2,0; 8 x,x,x; 12 x,0,0; 12 x,0,1/2; 12 x,1/2,0; 12 1/4,y,-y+1/2; 12 1/4,y,y+1/2; 24 x,y,z",
    ),
    sites(
        209,
        "4 0,0,0; 4 1/2,1/2,1/2; 8 1/4,1/4,1/4; 24 0,1/4,1/4; 24 x,0,0; 32 x,x,x; 48 0,y,y; 48 1/2,y,y; 48 x,1/4,1/4; 96 x,y,z",
    ),
    sites(
        210,
        "8 0,0,0; 8 1/2,1/2,1/2; 16 1/8,1/8,1/8; 16 5/8,5/8,5/8; 32 x,x,x; 48 x,0,0; 48 1/8,y,-y+1/4; 96 x,y,z",
    ),
    sites(
        211,
        "2 0,0,0; 6 0,1/2,1/2; 8 1/4,1/4,1/4; 12 1/4,1/2,0; 12 x,0,0; 16 x,x,x; 24 x,1/2,0; 24 0,y,y; 24 1/4,y,-y+1/2; 48 x,y,z",
    ),
    sites(212, "4 1/8,1/8,1/8; 4 5/8,5/8,5/8; 8 x,x,x; 12 1/8,y,-y+1/4; 24 x,y,z"),
    sites(213, "4 3/8,3/8,3/8; 4 7/8,7/8,7/8; 8 x,x,x; 12 1/8,y,y+1/4; 24 x,y,z"),
    sites(
        214,
        "8 1/8,1/8,1/8; 8 7/8,7/8,7/8; 12 1/8,0,1/4; 12 5/8,0,1/4; 16 x,x,x; 24 x,0,1/4; 24 1/8,y,y+1/4; 24 1/8,y,-y+1/4; 48 x,y,z",
    ),
    sites(
        215,
        "1 0,0,0; 1 1/2,1/2,1/2; 3 0,1/2,1/2; 3 1/2,0,0; 4 x,x,x; 6 x,0,0; 6 x,1/2,1/2; 12 x,1/2,0; 12 x,x,z; 24 x,y,z",
    ),
    sites(
        216,
        "4 0,0,0; 4 1/2,1/2,1/2; 4 1/4,1/4,1/4; 4 3/4,3/4,3/4; 16 x,x,x; 24 x,0,0; 24 x,1/4,1/4; 48 x,x,z; 96 x,y,z",
    ),
    sites(
        217,
        "2 0,0,0; 6 0,1/2,1/2; 8 x,x,x; 12 1/4,1/2,0; 12 x,0,0; 24 x,1/2,0; 24 x,x,z; 48 x,y,z",
    ),
    sites(
        218,
        "2 0,0,0; 6 0,1/2,1/2; 6 1/4,1/2,0; 6 1/4,0,1/2; 8 x,x,x; 12 x,0,0; 12 x,1/2,0; 12 x,0,1/2; 24 x,y,z",
    ),
    sites(
        219,
        "8 0,0,0; 8 1/4,1/4,1/4; 24 0,1/4,1/4; 24 1/4,0,0; 32 x,x,x; 48 x,0,0; 48 x,1/4,1/4; 96 x,y,z",
    ),
    sites(220, "12 3/8,0,1/4; 12 7/8,0,1/4; 16 x,x,x; 24 x,0,1/4; 48 x,y,z"),
    sites(
        221,
        "1 0,0,0; 1 1/2,1/2,1/2; 3 0,1/2,1/2; 3 1/2,0,0; 6 x,0,0; 6 x,1/2,1/2; 8 x,x,x; 12 x,1/2,0; 12 0,y,y; 12 1/2,y,y; 24 0,y,z; 24 1/2,y,z; 24 x,x,z; 48 x,y,z",
    ),
    sites(
        222,
        "2 0,0,0; 6 0,0,1/2; 8 1/4,1/4,1/4; 12 0,1/4,1/2; 12 x,0,0; 16 x,x,x; 24 x,1/2,0; 24 0,y,y; 48 x,y,z",
    ),
    sites(
        222,
        "2 1/4,1/4,1/4; 6 1/4,1/4,3/4; 8 0,0,0; 12 0,1/4,3/4; 12 x,3/4,3/4; 16 x,x,x; 24 x,1/4,3/4; 24 3/4,y,y; 48 x,y,z",
    ),
    sites(
        223,
        "2 0,0,0; 6 0,1/2,1/2; 6 1/4,0,1/2; 6 1/4,1/2,0; 8 1/4,1/4,1/4; 12 x,0,0; 12 x,0,1/2; 12 x,1/2,0; 16 x,x,x; 24 1/4,y,y+1/2; 24 0,y,z; 48 x,y,z",
    ),
    sites(
        224,
        "2 0,0,0; 4 1/4,1/4,1/4; 4 1/4,1/4,3/4; 6 0,0,1/2; 8 x,x,x; 12 x,0,0; 12 0,1/4,1/2; 24 x,1/2,0; 24 1/4,y,-y+1/2; 24 x,1/4,x+1/2; 24 x,x,z; 48 x,y,z",
    ),
    sites(
        224,
        "2 1/4,1/4,1/4; 4 0,0,0; 4 0,0,1/2; 6 1/4,1/4,3/4; 8 x,x,x; 12 x,3/4,3/4; 12 0,1/4,3/4; 24 x,1/4,3/4; 24 0,y,-y; 24 x,0,x+1/2; 24 x,x,z; 48 x,y,z",
    ),
    sites(
        225,
        "4 0,0,0; 4 1/2,1/2,1/2; 8 1/4,1/4,1/4; 24 0,1/4,1/4; 24 x,0,0; 32 x,x,x; 48 x,1/4,1/4; 48 0,y,y; 48 1/2,y,y; 96 0,y,z; 96 x,x,z; 192 x,y,z",
    ),
    sites(
        226,
        "8 1/4,1/4,1/4; 8 0,0,0; 24 1/4,0,0; 24 0,1/4,1/4; 48 x,0,0; 48 x,1/4,1/4; 64 x,x,x; 96 1/4,y,y; 96 0,y,z; 192 x,y,z",
    ),
    sites(
        227,
        "8 0,0,0; 8 0,0,1/2; 16 1/8,1/8,1/8; 16 1/8,1/8,5/8; 32 x,x,x; 48 x,0,0; 96 x,x,z; 96 1/8,y,-y+1/4; 192 x,y,z",
    ),
    sites(
        227,
        "8 1/8,1/8,1/8; 8 1/8,1/8,5/8; 16 0,0,0; 16 0,0,1/2; 32 x,x,x; 48 x,7/8,7/8; 96 x,x,z; 96 0,y,-y; 192 x,y,z",
    ),
    sites(
        228,
        "16 0,0,0; 32 1/8,1/8,1/8; 32 1/8,1/8,3/8; 48 0,0,1/4; 64 x,x,x; 96 x,0,0; 96 x,1/8,-x+1/4; 192 x,y,z",
    ),
    sites(
        228,
        "16 1/8,1/8,1/8; 32 0,0,1/4; 32 0,0,0; 48 1/8,1/8,3/8; 64 x,x,x; 96 x,5/8,5/8; 96 x,3/4,-x+1/2; 192 x,y,z",
    ),
    sites(
        229,
        "2 0,0,0; 6 0,1/2,1/2; 8 1/4,1/4,1/4; 12 1/4,0,1/2; 12 x,0,0; 16 x,x,x; 24 x,0,1/2; 24 0,y,y; 48 1/4,y,-y+1/2; 48 0,y,z; 48 x,x,z; 96 x,y,z",
    ),
    sites(
        230,
        "16 0,0,0; 16 1/8,1/8,1/8; 24 1/8,0,1/4; 24 3/8,0,1/4; 32 x,x,x; 48 x,0,1/4; 48 1/8,y,-y+1/4; 96 x,y,z",
    ),
];
