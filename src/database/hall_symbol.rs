//! Hall symbols and exact space-group operations.

use std::fmt;

use indexmap::IndexSet;
use itertools::Itertools;
use lazy_static::lazy_static;
use nalgebra::{Matrix3, Vector3};
use phf::phf_map;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::symmetry::symmetry_operation::SymmetryOperation;
use crate::symmetry::SymmetryError;

#[cfg(test)]
#[path = "hall_symbol_tests.rs"]
mod hall_symbol_tests;

/// The common denominator of all translation components in the reference database.
pub const TRANSLATION_DENOMINATOR: i32 = 24;

lazy_static! {
    static ref MATRIX_SYMBOL_RE: Regex =
        Regex::new(r#"^(-?)([12346])([1-5]?)([xyz'"*]?)([abcnuvwd]*)$"#)
            .expect("Regex pattern invalid.");
    static ref LATTICE_SYMBOL_RE: Regex =
        Regex::new(r"^(-?)([PABCIRF])$").expect("Regex pattern invalid.");
}

/// Translation symbols in units of $`1/24`$.
static TRANSLATION_SYMBOLS: phf::Map<char, [i32; 3]> = phf_map! {
    'a' => [12, 0, 0],
    'b' => [0, 12, 0],
    'c' => [0, 0, 12],
    'n' => [12, 12, 12],
    'u' => [6, 0, 0],
    'v' => [0, 6, 0],
    'w' => [0, 0, 6],
    'd' => [6, 6, 6],
};

/// Lattice centring translations in units of $`1/24`$, excluding the zero translation.
static CENTRING_TRANSLATIONS: phf::Map<char, &'static [[i32; 3]]> = phf_map! {
    'P' => &[],
    'A' => &[[0, 12, 12]],
    'B' => &[[12, 0, 12]],
    'C' => &[[12, 12, 0]],
    'I' => &[[12, 12, 12]],
    'R' => &[[16, 8, 8], [8, 16, 16]],
    'F' => &[[0, 12, 12], [12, 0, 12], [12, 12, 0]],
};

// ==================
// Struct definitions
// ==================

/// A space-group operation with an integer translation in units of
/// $`1/24`$ ([`TRANSLATION_DENOMINATOR`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExactOperation {
    /// The integer rotation part.
    pub rotation: Matrix3<i32>,

    /// The translation part in units of $`1/24`$, normalised into $`[0, 24)`$.
    pub translation: Vector3<i32>,
}

impl ExactOperation {
    /// Constructs an exact operation, normalising the translation modulo the lattice.
    #[must_use]
    pub fn new(rotation: Matrix3<i32>, translation: Vector3<i32>) -> Self {
        Self {
            rotation,
            translation: translation.map(|x| x.rem_euclid(TRANSLATION_DENOMINATOR)),
        }
    }

    /// The identity operation.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Matrix3::identity(), Vector3::zeros())
    }

    /// The composition `self ∘ other` modulo the lattice.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(
            self.rotation * other.rotation,
            self.rotation * other.translation + self.translation,
        )
    }

    /// The translation as a fractional vector.
    #[must_use]
    pub fn fractional_translation(&self) -> Vector3<f64> {
        self.translation
            .map(|x| f64::from(x) / f64::from(TRANSLATION_DENOMINATOR))
    }

    /// Converts this operation into a floating-point [`SymmetryOperation`].
    #[must_use]
    pub fn to_operation(&self) -> SymmetryOperation {
        SymmetryOperation::new(self.rotation, self.fractional_translation())
    }
}

impl fmt::Display for ExactOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_operation())
    }
}

/// A structure holding a parsed Hall symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HallSymbol {
    /// The Hall symbol as written.
    pub symbol: String,

    /// The lattice letter (`P`, `A`, `B`, `C`, `I`, `R` or `F`).
    pub lattice_symbol: char,

    /// Whether the symbol carries an explicit inversion centre at the origin.
    pub centrosymmetric: bool,

    /// The centring translations, the zero translation first.
    pub centring: Vec<Vector3<i32>>,

    /// The generators after the origin shift, including the inversion if
    /// [`Self::centrosymmetric`].
    pub generators: Vec<ExactOperation>,

    /// The origin shift in units of $`1/24`$.
    pub origin_shift: Vector3<i32>,
}

/// The rotation axes that can appear in a Hall matrix symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HallAxis {
    X,
    Y,
    Z,
    FaceDiagonal1,
    FaceDiagonal2,
    BodyDiagonal,
}

impl HallAxis {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "x" => Some(Self::X),
            "y" => Some(Self::Y),
            "z" => Some(Self::Z),
            "'" => Some(Self::FaceDiagonal1),
            "\"" => Some(Self::FaceDiagonal2),
            "*" => Some(Self::BodyDiagonal),
            _ => None,
        }
    }

    fn unit(&self) -> Option<Vector3<i32>> {
        match self {
            Self::X => Some(Vector3::x()),
            Self::Y => Some(Vector3::y()),
            Self::Z => Some(Vector3::z()),
            _ => None,
        }
    }
}

/// Returns the proper rotation matrix of a Hall matrix symbol.
///
/// # Arguments
///
/// * `order` - The rotation order $`N`$.
/// * `axis` - The rotation axis.
/// * `preceding_axis` - The axis of the preceding matrix symbol, which orients the face-diagonal
/// axes.
fn hall_rotation(
    order: u32,
    axis: HallAxis,
    preceding_axis: HallAxis,
) -> Option<Matrix3<i32>> {
    if order == 1 {
        return Some(Matrix3::identity());
    }
    let mat = match (axis, order) {
        (HallAxis::Z, 2) => Matrix3::new(-1, 0, 0, 0, -1, 0, 0, 0, 1),
        (HallAxis::Z, 3) => Matrix3::new(0, -1, 0, 1, -1, 0, 0, 0, 1),
        (HallAxis::Z, 4) => Matrix3::new(0, -1, 0, 1, 0, 0, 0, 0, 1),
        (HallAxis::Z, 6) => Matrix3::new(1, -1, 0, 1, 0, 0, 0, 0, 1),
        (HallAxis::X, 2) => Matrix3::new(1, 0, 0, 0, -1, 0, 0, 0, -1),
        (HallAxis::X, 3) => Matrix3::new(1, 0, 0, 0, 0, -1, 0, 1, -1),
        (HallAxis::X, 4) => Matrix3::new(1, 0, 0, 0, 0, -1, 0, 1, 0),
        (HallAxis::X, 6) => Matrix3::new(1, 0, 0, 0, 1, -1, 0, 1, 0),
        (HallAxis::Y, 2) => Matrix3::new(-1, 0, 0, 0, 1, 0, 0, 0, -1),
        (HallAxis::Y, 3) => Matrix3::new(-1, 0, 1, 0, 1, 0, -1, 0, 0),
        (HallAxis::Y, 4) => Matrix3::new(0, 0, 1, 0, 1, 0, -1, 0, 0),
        (HallAxis::Y, 6) => Matrix3::new(0, 0, 1, 0, 1, 0, -1, 0, 1),
        (HallAxis::FaceDiagonal1, 2) => match preceding_axis {
            HallAxis::X => Matrix3::new(-1, 0, 0, 0, 0, -1, 0, -1, 0),
            HallAxis::Y => Matrix3::new(0, 0, -1, 0, -1, 0, -1, 0, 0),
            _ => Matrix3::new(0, -1, 0, -1, 0, 0, 0, 0, -1),
        },
        (HallAxis::FaceDiagonal2, 2) => match preceding_axis {
            HallAxis::X => Matrix3::new(-1, 0, 0, 0, 0, 1, 0, 1, 0),
            HallAxis::Y => Matrix3::new(0, 0, 1, 0, -1, 0, 1, 0, 0),
            _ => Matrix3::new(0, 1, 0, 1, 0, 0, 0, 0, -1),
        },
        (HallAxis::BodyDiagonal, 3) => Matrix3::new(0, 0, 1, 1, 0, 0, 0, 1, 0),
        _ => return None,
    };
    Some(mat)
}

impl HallSymbol {
    /// Parses a Hall symbol such as `-P 4 2 3` or `P 31 2c (0 0 1)`.
    ///
    /// # Errors
    ///
    /// Errors with [`SymmetryError::InvalidHallSymbol`] if any token is malformed or refers to an
    /// unsupported axis.
    pub fn parse(symbol: &str) -> Result<Self, SymmetryError> {
        let invalid = |msg: String| SymmetryError::InvalidHallSymbol(format!("`{symbol}`: {msg}"));

        let (body, shift) = match symbol.split_once('(') {
            Some((body, rest)) => {
                let inner = rest
                    .strip_suffix(')')
                    .ok_or_else(|| invalid("unterminated origin shift".to_string()))?;
                let components = inner
                    .split_whitespace()
                    .map(|s| s.parse::<i32>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|err| invalid(format!("bad origin shift: {err}")))?;
                if components.len() != 3 {
                    return Err(invalid("origin shift needs three components".to_string()));
                }
                // Origin shifts are written in twelfths.
                (
                    body,
                    Vector3::new(components[0], components[1], components[2]) * 2,
                )
            }
            None => (symbol, Vector3::zeros()),
        };

        let mut tokens = body.split_whitespace();
        let lattice_token = tokens
            .next()
            .ok_or_else(|| invalid("empty symbol".to_string()))?;
        let lattice_caps = LATTICE_SYMBOL_RE
            .captures(lattice_token)
            .ok_or_else(|| invalid(format!("bad lattice symbol `{lattice_token}`")))?;
        let centrosymmetric = !lattice_caps[1].is_empty();
        let lattice_symbol = lattice_caps[2]
            .chars()
            .next()
            .ok_or_else(|| invalid("missing lattice letter".to_string()))?;
        let centring = std::iter::once(Vector3::zeros())
            .chain(
                CENTRING_TRANSLATIONS
                    .get(&lattice_symbol)
                    .ok_or_else(|| invalid(format!("unknown lattice `{lattice_symbol}`")))?
                    .iter()
                    .map(|t| Vector3::from(*t)),
            )
            .collect_vec();

        let mut raw_generators = vec![];
        if centrosymmetric {
            raw_generators.push(ExactOperation::new(-Matrix3::identity(), Vector3::zeros()));
        }
        let mut preceding: Option<(u32, HallAxis)> = None;
        for (position, token) in tokens.enumerate() {
            let caps = MATRIX_SYMBOL_RE
                .captures(token)
                .ok_or_else(|| invalid(format!("bad matrix symbol `{token}`")))?;
            let improper = !caps[1].is_empty();
            let order = caps[2]
                .parse::<u32>()
                .map_err(|err| invalid(format!("bad rotation order: {err}")))?;
            let axis = match HallAxis::from_symbol(&caps[4]) {
                Some(axis) => axis,
                None => match (position, order, preceding) {
                    (0, _, _) => HallAxis::Z,
                    (1, 2, Some((2 | 4, _))) => HallAxis::X,
                    (1, 2, Some((3 | 6, _))) => HallAxis::FaceDiagonal1,
                    (2, 3, _) => HallAxis::BodyDiagonal,
                    (_, 1, _) => HallAxis::Z,
                    _ => {
                        return Err(invalid(format!(
                            "cannot infer the axis of matrix symbol `{token}`"
                        )))
                    }
                },
            };
            let preceding_axis = preceding.map_or(HallAxis::Z, |(_, a)| a);
            let proper = hall_rotation(order, axis, preceding_axis)
                .ok_or_else(|| invalid(format!("unsupported matrix symbol `{token}`")))?;
            let rotation = if improper { -proper } else { proper };

            let mut translation = caps[5]
                .chars()
                .filter_map(|c| TRANSLATION_SYMBOLS.get(&c))
                .fold(Vector3::<i32>::zeros(), |acc, t| acc + Vector3::from(*t));
            if !caps[3].is_empty() {
                let screw = caps[3]
                    .parse::<i32>()
                    .map_err(|err| invalid(format!("bad screw component: {err}")))?;
                let unit = axis
                    .unit()
                    .ok_or_else(|| invalid(format!("screw on a diagonal axis in `{token}`")))?;
                translation += unit * (TRANSLATION_DENOMINATOR * screw / order as i32);
            }
            raw_generators.push(ExactOperation::new(rotation, translation));
            if order != 1 {
                preceding = Some((order, axis));
            }
        }

        let generators = raw_generators
            .into_iter()
            .map(|op| {
                let shifted = op.translation + (Matrix3::identity() - op.rotation) * shift;
                ExactOperation::new(op.rotation, shifted)
            })
            .collect_vec();

        Ok(Self {
            symbol: symbol.to_string(),
            lattice_symbol,
            centrosymmetric,
            centring,
            generators,
            origin_shift: shift,
        })
    }

    /// Generates all operations of the space group modulo the lattice of the conventional cell,
    /// including the centring translations.
    ///
    /// The distinct rotations appear in order of discovery. Each rotation carries one coset
    /// representative translation, and the full list enumerates, for each centring translation
    /// in turn, every rotation with its representative translation shifted by that centring.
    #[must_use]
    pub fn operations(&self) -> Vec<ExactOperation> {
        let mut closure = IndexSet::<ExactOperation>::new();
        closure.insert(ExactOperation::identity());
        let mut cursor = 0;
        while let Some(op) = closure.get_index(cursor).cloned() {
            for generator in &self.generators {
                closure.insert(generator.compose(&op));
            }
            cursor += 1;
        }
        let representatives = closure
            .into_iter()
            .unique_by(|op| op.rotation)
            .collect_vec();
        self.centring
            .iter()
            .flat_map(|c| {
                representatives
                    .iter()
                    .map(move |op| ExactOperation::new(op.rotation, op.translation + c))
            })
            .collect_vec()
    }
}

impl fmt::Display for HallSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
