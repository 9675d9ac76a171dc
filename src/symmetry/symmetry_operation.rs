//! Space-group operations acting on fractional coordinates.

use std::fmt;
use std::ops::Mul;

use fraction::Fraction;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::auxiliary::geometry::{
    det_i32, inverse_unimodular, is_lattice_vector, round_to_integer_matrix, to_f64_matrix,
    wrap_fractional, Tolerance,
};

#[cfg(test)]
#[path = "symmetry_operation_tests.rs"]
mod symmetry_operation_tests;

/// Denominators tried when a translation component is written as a fraction.
const FRACTION_DENOMINATORS: [u64; 6] = [1, 2, 3, 4, 6, 8];

// ================
// Enum definitions
// ================

/// An enumerated type to classify crystallographic rotations by their determinant and trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RotationKind {
    /// The identity, $`1`$.
    Identity,

    /// A twofold rotation, $`2`$.
    Rotation2,

    /// A threefold rotation, $`3`$.
    Rotation3,

    /// A fourfold rotation, $`4`$.
    Rotation4,

    /// A sixfold rotation, $`6`$.
    Rotation6,

    /// The inversion, $`\bar{1}`$.
    Inversion,

    /// A reflection, $`m = \bar{2}`$.
    Mirror,

    /// A threefold rotoinversion, $`\bar{3}`$.
    Rotoinversion3,

    /// A fourfold rotoinversion, $`\bar{4}`$.
    Rotoinversion4,

    /// A sixfold rotoinversion, $`\bar{6}`$.
    Rotoinversion6,
}

impl RotationKind {
    /// All rotation kinds in a fixed order.
    pub const ALL: [RotationKind; 10] = [
        RotationKind::Identity,
        RotationKind::Rotation2,
        RotationKind::Rotation3,
        RotationKind::Rotation4,
        RotationKind::Rotation6,
        RotationKind::Inversion,
        RotationKind::Mirror,
        RotationKind::Rotoinversion3,
        RotationKind::Rotoinversion4,
        RotationKind::Rotoinversion6,
    ];

    /// Classifies an integer rotation matrix, or returns `None` if it is not crystallographic.
    #[must_use]
    pub fn from_rotation(rotation: &Matrix3<i32>) -> Option<Self> {
        match (det_i32(rotation), rotation.trace()) {
            (1, 3) => Some(Self::Identity),
            (1, -1) => Some(Self::Rotation2),
            (1, 0) => Some(Self::Rotation3),
            (1, 1) => Some(Self::Rotation4),
            (1, 2) => Some(Self::Rotation6),
            (-1, -3) => Some(Self::Inversion),
            (-1, 1) => Some(Self::Mirror),
            (-1, 0) => Some(Self::Rotoinversion3),
            (-1, -1) => Some(Self::Rotoinversion4),
            (-1, -2) => Some(Self::Rotoinversion6),
            _ => None,
        }
    }

    /// The order of the rotation.
    #[must_use]
    pub fn order(&self) -> usize {
        match self {
            Self::Identity => 1,
            Self::Rotation2 | Self::Inversion | Self::Mirror => 2,
            Self::Rotation3 => 3,
            Self::Rotation4 | Self::Rotoinversion4 => 4,
            Self::Rotation6 | Self::Rotoinversion3 | Self::Rotoinversion6 => 6,
        }
    }

    /// Returns `true` if the rotation is proper.
    #[must_use]
    pub fn is_proper(&self) -> bool {
        matches!(
            self,
            Self::Identity | Self::Rotation2 | Self::Rotation3 | Self::Rotation4 | Self::Rotation6
        )
    }

    /// The order of the proper part $`\det(\mathbf{W})\mathbf{W}`$.
    #[must_use]
    pub fn proper_order(&self) -> usize {
        match self {
            Self::Identity | Self::Inversion => 1,
            Self::Rotation2 | Self::Mirror => 2,
            Self::Rotation3 | Self::Rotoinversion3 => 3,
            Self::Rotation4 | Self::Rotoinversion4 => 4,
            Self::Rotation6 | Self::Rotoinversion6 => 6,
        }
    }
}

impl fmt::Display for RotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Identity => "1",
            Self::Rotation2 => "2",
            Self::Rotation3 => "3",
            Self::Rotation4 => "4",
            Self::Rotation6 => "6",
            Self::Inversion => "-1",
            Self::Mirror => "m",
            Self::Rotoinversion3 => "-3",
            Self::Rotoinversion4 => "-4",
            Self::Rotoinversion6 => "-6",
        };
        write!(f, "{symbol}")
    }
}

// ==================
// Struct definitions
// ==================

/// A structure for a space-group operation $`(\mathbf{W}, \mathbf{w})`$ acting on fractional
/// coordinates as $`\mathbf{x} \mapsto \mathbf{W}\mathbf{x} + \mathbf{w}`$.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymmetryOperation {
    /// The integer rotation part $`\mathbf{W}`$ with determinant $`\pm 1`$.
    pub rotation: Matrix3<i32>,

    /// The fractional translation part $`\mathbf{w}`$.
    pub translation: Vector3<f64>,
}

impl SymmetryOperation {
    /// Constructs a new operation.
    #[must_use]
    pub fn new(rotation: Matrix3<i32>, translation: Vector3<f64>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// The identity operation.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Matrix3::identity(), Vector3::zeros())
    }

    /// A pure translation.
    #[must_use]
    pub fn pure_translation(translation: Vector3<f64>) -> Self {
        Self::new(Matrix3::identity(), translation)
    }

    /// Applies this operation to a fractional position.
    #[must_use]
    pub fn apply(&self, position: &Vector3<f64>) -> Vector3<f64> {
        to_f64_matrix(&self.rotation) * position + self.translation
    }

    /// The composition `self ∘ other`, which applies `other` first.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(
            self.rotation * other.rotation,
            to_f64_matrix(&self.rotation) * other.translation + self.translation,
        )
    }

    /// The inverse operation $`(\mathbf{W}^{-1}, -\mathbf{W}^{-1}\mathbf{w})`$, or `None` if
    /// $`\mathbf{W}`$ is not unimodular.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let w_inv = inverse_unimodular(&self.rotation)?;
        Some(Self::new(w_inv, -(to_f64_matrix(&w_inv) * self.translation)))
    }

    /// The determinant of the rotation part.
    #[must_use]
    pub fn determinant(&self) -> i32 {
        det_i32(&self.rotation)
    }

    /// The kind of the rotation part.
    #[must_use]
    pub fn rotation_kind(&self) -> Option<RotationKind> {
        RotationKind::from_rotation(&self.rotation)
    }

    /// Returns `true` if the rotation part is the identity.
    #[must_use]
    pub fn is_pure_translation(&self) -> bool {
        self.rotation == Matrix3::identity()
    }

    /// Checks if two operations are equal modulo lattice translations.
    ///
    /// # Arguments
    ///
    /// * `other` - The other operation.
    /// * `basis` - The lattice basis used to measure the translation difference.
    /// * `tol` - The tolerance.
    #[must_use]
    pub fn equivalent_modulo_lattice(
        &self,
        other: &Self,
        basis: &Matrix3<f64>,
        tol: &Tolerance,
    ) -> bool {
        self.rotation == other.rotation
            && is_lattice_vector(basis, &(self.translation - other.translation), tol)
    }

    /// Returns a copy with the translation brought into $`[0, 1)`$.
    #[must_use]
    pub fn wrapped(&self) -> Self {
        Self::new(self.rotation, wrap_fractional(&self.translation))
    }

    /// Expresses this operation in another basis.
    ///
    /// If fractional coordinates transform as $`\mathbf{x}' = \mathbf{P}\mathbf{x} + \mathbf{p}`$,
    /// the operation becomes
    /// $`(\mathbf{P}\mathbf{W}\mathbf{P}^{-1}, \mathbf{P}\mathbf{w} + \mathbf{p} - \mathbf{P}\mathbf{W}\mathbf{P}^{-1}\mathbf{p})`$.
    ///
    /// # Returns
    ///
    /// The transformed operation, or `None` if the transformed rotation is not integral.
    #[must_use]
    pub fn change_basis(
        &self,
        p: &Matrix3<f64>,
        p_inv: &Matrix3<f64>,
        origin: &Vector3<f64>,
    ) -> Option<Self> {
        let w_new = p * to_f64_matrix(&self.rotation) * p_inv;
        let w_int = round_to_integer_matrix(&w_new, 1e-6)?;
        let w_int_f = to_f64_matrix(&w_int);
        Some(Self::new(
            w_int,
            p * self.translation + origin - w_int_f * origin,
        ))
    }

    /// Writes this operation in the conventional coordinate-triplet notation, *e.g.*
    /// `-y,x-y,z+1/3`.
    #[must_use]
    pub fn to_xyz(&self) -> String {
        let variables = ["x", "y", "z"];
        (0..3)
            .map(|i| {
                let mut term = String::new();
                for (j, var) in variables.iter().enumerate() {
                    let coeff = self.rotation[(i, j)];
                    match coeff {
                        0 => {}
                        1 => {
                            if !term.is_empty() {
                                term.push('+');
                            }
                            term.push_str(var);
                        }
                        -1 => {
                            term.push('-');
                            term.push_str(var);
                        }
                        c => {
                            if c > 0 && !term.is_empty() {
                                term.push('+');
                            }
                            term.push_str(&format!("{c}{var}"));
                        }
                    }
                }
                let t = wrap_fractional(&self.translation)[i];
                if t.abs() > 1e-8 {
                    term.push('+');
                    term.push_str(&format_fraction(t));
                }
                term
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Formats a number in $`[0, 1)`$ as a fraction with a small denominator if possible.
fn format_fraction(value: f64) -> String {
    FRACTION_DENOMINATORS
        .iter()
        .find_map(|&den| {
            let num = value * den as f64;
            if (num - num.round()).abs() < 1e-6 {
                Some(Fraction::new(num.round() as u64, den).to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| format!("{value:.6}"))
}

impl fmt::Display for SymmetryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_xyz())
    }
}

impl Mul<&'_ SymmetryOperation> for &SymmetryOperation {
    type Output = SymmetryOperation;

    fn mul(self, rhs: &SymmetryOperation) -> Self::Output {
        self.compose(rhs)
    }
}

impl Mul<SymmetryOperation> for SymmetryOperation {
    type Output = SymmetryOperation;

    fn mul(self, rhs: SymmetryOperation) -> Self::Output {
        self.compose(&rhs)
    }
}
