//! The 32 crystallographic point groups, their crystal systems and Laue classes.

use std::fmt;

use counter::Counter;
use itertools::Itertools;
use lazy_static::lazy_static;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::database::records_for_number;
use crate::symmetry::symmetry_operation::RotationKind;
use crate::symmetry::SymmetryError;

#[cfg(test)]
#[path = "point_group_tests.rs"]
mod point_group_tests;

// ================
// Enum definitions
// ================

/// An enumerated type for the seven crystal systems.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CrystalSystem {
    Triclinic,
    Monoclinic,
    Orthorhombic,
    Tetragonal,
    Trigonal,
    Hexagonal,
    Cubic,
}

impl CrystalSystem {
    /// The crystal system of a space-group number, or `None` outside `1..=230`.
    #[must_use]
    pub fn from_space_group_number(number: usize) -> Option<Self> {
        match number {
            1..=2 => Some(Self::Triclinic),
            3..=15 => Some(Self::Monoclinic),
            16..=74 => Some(Self::Orthorhombic),
            75..=142 => Some(Self::Tetragonal),
            143..=167 => Some(Self::Trigonal),
            168..=194 => Some(Self::Hexagonal),
            195..=230 => Some(Self::Cubic),
            _ => None,
        }
    }
}

impl fmt::Display for CrystalSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Triclinic => "Triclinic",
            Self::Monoclinic => "Monoclinic",
            Self::Orthorhombic => "Orthorhombic",
            Self::Tetragonal => "Tetragonal",
            Self::Trigonal => "Trigonal",
            Self::Hexagonal => "Hexagonal",
            Self::Cubic => "Cubic",
        };
        write!(f, "{name}")
    }
}

/// An enumerated type for the eleven Laue classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaueClass {
    /// $`\bar{1}`$.
    Laue1,

    /// $`2/m`$.
    Laue2m,

    /// $`mmm`$.
    LaueMmm,

    /// $`4/m`$.
    Laue4m,

    /// $`4/mmm`$.
    Laue4mmm,

    /// $`\bar{3}`$.
    Laue3,

    /// $`\bar{3}m`$.
    Laue3m,

    /// $`6/m`$.
    Laue6m,

    /// $`6/mmm`$.
    Laue6mmm,

    /// $`m\bar{3}`$.
    LaueM3,

    /// $`m\bar{3}m`$.
    LaueM3m,
}

impl fmt::Display for LaueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Laue1 => "-1",
            Self::Laue2m => "2/m",
            Self::LaueMmm => "mmm",
            Self::Laue4m => "4/m",
            Self::Laue4mmm => "4/mmm",
            Self::Laue3 => "-3",
            Self::Laue3m => "-3m",
            Self::Laue6m => "6/m",
            Self::Laue6mmm => "6/mmm",
            Self::LaueM3 => "m-3",
            Self::LaueM3m => "m-3m",
        };
        write!(f, "{symbol}")
    }
}

// ==================
// Struct definitions
// ==================

/// A structure describing one of the 32 crystallographic point groups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PointGroup {
    /// The index of the point group, from 1 to 32.
    pub number: usize,

    /// The Hermann–Mauguin symbol.
    pub symbol: &'static str,

    /// The Schoenflies symbol.
    pub schoenflies: &'static str,

    /// The order.
    pub order: usize,

    /// The first and last space-group numbers with this point group.
    pub space_groups: (usize, usize),

    /// The Laue class.
    pub laue_class: LaueClass,
}

const fn point_group(
    number: usize,
    symbol: &'static str,
    schoenflies: &'static str,
    order: usize,
    space_groups: (usize, usize),
    laue_class: LaueClass,
) -> PointGroup {
    PointGroup {
        number,
        symbol,
        schoenflies,
        order,
        space_groups,
        laue_class,
    }
}

/// The 32 crystallographic point groups in the order of the space-group numbers.
pub static POINT_GROUPS: [PointGroup; 32] = [
    point_group(1, "1", "C1", 1, (1, 1), LaueClass::Laue1),
    point_group(2, "-1", "Ci", 2, (2, 2), LaueClass::Laue1),
    point_group(3, "2", "C2", 2, (3, 5), LaueClass::Laue2m),
    point_group(4, "m", "Cs", 2, (6, 9), LaueClass::Laue2m),
    point_group(5, "2/m", "C2h", 4, (10, 15), LaueClass::Laue2m),
    point_group(6, "222", "D2", 4, (16, 24), LaueClass::LaueMmm),
    point_group(7, "mm2", "C2v", 4, (25, 46), LaueClass::LaueMmm),
    point_group(8, "mmm", "D2h", 8, (47, 74), LaueClass::LaueMmm),
    point_group(9, "4", "C4", 4, (75, 80), LaueClass::Laue4m),
    point_group(10, "-4", "S4", 4, (81, 82), LaueClass::Laue4m),
    point_group(11, "4/m", "C4h", 8, (83, 88), LaueClass::Laue4m),
    point_group(12, "422", "D4", 8, (89, 98), LaueClass::Laue4mmm),
    point_group(13, "4mm", "C4v", 8, (99, 110), LaueClass::Laue4mmm),
    point_group(14, "-42m", "D2d", 8, (111, 122), LaueClass::Laue4mmm),
    point_group(15, "4/mmm", "D4h", 16, (123, 142), LaueClass::Laue4mmm),
    point_group(16, "3", "C3", 3, (143, 146), LaueClass::Laue3),
    point_group(17, "-3", "C3i", 6, (147, 148), LaueClass::Laue3),
    point_group(18, "32", "D3", 6, (149, 155), LaueClass::Laue3m),
    point_group(19, "3m", "C3v", 6, (156, 161), LaueClass::Laue3m),
    point_group(20, "-3m", "D3d", 12, (162, 167), LaueClass::Laue3m),
    point_group(21, "6", "C6", 6, (168, 173), LaueClass::Laue6m),
    point_group(22, "-6", "C3h", 6, (174, 174), LaueClass::Laue6m),
    point_group(23, "6/m", "C6h", 12, (175, 176), LaueClass::Laue6m),
    point_group(24, "622", "D6", 12, (177, 182), LaueClass::Laue6mmm),
    point_group(25, "6mm", "C6v", 12, (183, 186), LaueClass::Laue6mmm),
    point_group(26, "-6m2", "D3h", 12, (187, 190), LaueClass::Laue6mmm),
    point_group(27, "6/mmm", "D6h", 24, (191, 194), LaueClass::Laue6mmm),
    point_group(28, "23", "T", 12, (195, 199), LaueClass::LaueM3),
    point_group(29, "m-3", "Th", 24, (200, 206), LaueClass::LaueM3),
    point_group(30, "432", "O", 24, (207, 214), LaueClass::LaueM3m),
    point_group(31, "-43m", "Td", 24, (215, 220), LaueClass::LaueM3m),
    point_group(32, "m-3m", "Oh", 48, (221, 230), LaueClass::LaueM3m),
];

/// A count of each [`RotationKind`] in a set of rotations, in the order of
/// [`RotationKind::ALL`].
pub type RotationSignature = [usize; 10];

lazy_static! {
    static ref POINT_GROUP_SIGNATURES: Vec<RotationSignature> = POINT_GROUPS
        .iter()
        .map(|pg| {
            let record = records_for_number(pg.space_groups.0)
                .into_iter()
                .next()
                .expect("Every point group has at least one space-group record.");
            rotation_signature(&record.rotations)
                .expect("Database rotations are crystallographic.")
        })
        .collect_vec();
}

impl PointGroup {
    /// The crystal system.
    #[must_use]
    pub fn crystal_system(&self) -> CrystalSystem {
        // Every space-group range lies in the range of a single crystal system.
        CrystalSystem::from_space_group_number(self.space_groups.0)
            .unwrap_or(CrystalSystem::Triclinic)
    }

    /// Returns `true` if the point group contains the inversion.
    #[must_use]
    pub fn is_centrosymmetric(&self) -> bool {
        matches!(
            self.symbol,
            "-1" | "2/m" | "mmm" | "4/m" | "4/mmm" | "-3" | "-3m" | "6/m" | "6/mmm" | "m-3" | "m-3m"
        )
    }

    /// The counts of the rotation kinds of this point group.
    #[must_use]
    pub fn signature(&self) -> &'static RotationSignature {
        &POINT_GROUP_SIGNATURES[self.number - 1]
    }
}

impl fmt::Display for PointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.schoenflies)
    }
}

// =========
// Functions
// =========

/// The point group of a space-group number, or `None` outside `1..=230`.
#[must_use]
pub fn point_group_for_number(number: usize) -> Option<&'static PointGroup> {
    POINT_GROUPS
        .iter()
        .find(|pg| (pg.space_groups.0..=pg.space_groups.1).contains(&number))
}

/// Counts the rotation kinds in a set of rotations, or returns `None` if any rotation is not
/// crystallographic.
#[must_use]
pub fn rotation_signature(rotations: &[Matrix3<i32>]) -> Option<RotationSignature> {
    let counts = rotations
        .iter()
        .map(RotationKind::from_rotation)
        .collect::<Option<Counter<RotationKind>>>()?;
    let mut signature = [0; 10];
    for (slot, kind) in signature.iter_mut().zip(RotationKind::ALL.iter()) {
        *slot = counts[kind];
    }
    Some(signature)
}

/// Identifies the crystallographic point group of a set of distinct rotations from the counts of
/// their rotation kinds.
///
/// # Errors
///
/// Errors with [`SymmetryError::UnrecognizedSymmetry`] if the counts match no point group.
pub fn identify_point_group(
    rotations: &[Matrix3<i32>],
) -> Result<&'static PointGroup, SymmetryError> {
    let signature = rotation_signature(rotations).ok_or_else(|| {
        SymmetryError::UnrecognizedSymmetry("non-crystallographic rotation found".to_string())
    })?;
    POINT_GROUPS
        .iter()
        .find(|pg| *pg.signature() == signature)
        .ok_or_else(|| {
            SymmetryError::UnrecognizedSymmetry(format!(
                "{} rotation(s) with kind counts {signature:?} form no crystallographic point group",
                rotations.len()
            ))
        })
}
