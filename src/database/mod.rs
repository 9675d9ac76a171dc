//! The reference database of space-group types and their settings.
//!
//! Every tabulated setting is expanded once, on first access, from its Hall symbol into the full
//! list of conventional operations. The expanded records are shared read-only.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use itertools::Itertools;
use lazy_static::lazy_static;
use nalgebra::{Matrix3, Vector3};

use crate::database::hall_symbol::{ExactOperation, HallSymbol};
use crate::database::space_group_table::{SpaceGroupEntry, SPACE_GROUP_TABLE};
use crate::symmetry::point_group::{point_group_for_number, CrystalSystem, PointGroup};
use crate::symmetry::wyckoff::WyckoffTable;
use crate::symmetry::SymmetryError;

pub mod hall_symbol;
pub mod space_group_table;
pub mod wyckoff_table;

#[cfg(test)]
#[path = "database_tests.rs"]
mod database_tests;

lazy_static! {
    static ref SPACE_GROUP_RECORDS: Vec<SpaceGroupRecord> = SPACE_GROUP_TABLE
        .iter()
        .enumerate()
        .map(|(i, entry)| SpaceGroupRecord::from_entry(i + 1, entry))
        .collect::<Result<Vec<_>, _>>()
        .expect("The space-group table contains an invalid entry.");
}

// ==================
// Struct definitions
// ==================

/// A structure holding one tabulated space-group setting together with its derived operations.
#[derive(Debug)]
pub struct SpaceGroupRecord {
    /// The Hall number, *i.e.* the one-based index of this setting in the table.
    pub hall_number: usize,

    /// The space-group number.
    pub number: usize,

    /// The short Hermann–Mauguin symbol.
    pub international: &'static str,

    /// The setting choice.
    pub choice: &'static str,

    /// The parsed Hall symbol.
    pub hall_symbol: HallSymbol,

    /// The point group of this space-group type.
    pub point_group: &'static PointGroup,

    /// All operations of the conventional cell modulo its lattice: every distinct rotation with
    /// its coset representative, repeated for each centring translation.
    pub operations: Vec<ExactOperation>,

    /// The distinct rotations, identity first.
    pub rotations: Vec<Matrix3<i32>>,

    coset_translations: HashMap<Matrix3<i32>, Vector3<i32>>,

    wyckoff: OnceLock<Result<WyckoffTable, SymmetryError>>,
}

impl SpaceGroupRecord {
    fn from_entry(hall_number: usize, entry: &SpaceGroupEntry) -> Result<Self, SymmetryError> {
        let hall_symbol = HallSymbol::parse(entry.hall_symbol)?;
        let point_group = point_group_for_number(entry.number).ok_or_else(|| {
            SymmetryError::UnrecognizedSymmetry(format!(
                "no point group for space group {}",
                entry.number
            ))
        })?;
        let operations = hall_symbol.operations();
        let rotations = operations
            .iter()
            .map(|op| op.rotation)
            .unique()
            .collect_vec();
        let coset_translations = operations
            .iter()
            .take(rotations.len())
            .map(|op| (op.rotation, op.translation))
            .collect::<HashMap<_, _>>();
        Ok(Self {
            hall_number,
            number: entry.number,
            international: entry.international,
            choice: entry.choice,
            hall_symbol,
            point_group,
            operations,
            rotations,
            coset_translations,
            wyckoff: OnceLock::new(),
        })
    }

    /// The centring translations in units of $`1/24`$, zero first.
    #[must_use]
    pub fn centring(&self) -> &[Vector3<i32>] {
        &self.hall_symbol.centring
    }

    /// The lattice centring letter.
    #[must_use]
    pub fn centring_symbol(&self) -> char {
        self.hall_symbol.lattice_symbol
    }

    /// The crystal system.
    #[must_use]
    pub fn crystal_system(&self) -> CrystalSystem {
        self.point_group.crystal_system()
    }

    /// The coset representative translation, in units of $`1/24`$, of a rotation of this group.
    #[must_use]
    pub fn translation_for(&self, rotation: &Matrix3<i32>) -> Option<&Vector3<i32>> {
        self.coset_translations.get(rotation)
    }

    /// The coset representatives, one per rotation, in the order of [`Self::rotations`].
    pub fn coset_representatives(&self) -> impl Iterator<Item = &ExactOperation> + '_ {
        self.operations.iter().take(self.rotations.len())
    }

    /// The Wyckoff positions of this setting, derived on first access.
    ///
    /// # Errors
    ///
    /// Errors if the derivation fails.
    pub fn wyckoff_positions(&self) -> Result<&WyckoffTable, SymmetryError> {
        self.wyckoff
            .get_or_init(|| WyckoffTable::generate(self))
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl fmt::Display for SpaceGroupRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (No. {}, Hall {} `{}`",
            self.international, self.number, self.hall_number, self.hall_symbol
        )?;
        if !self.choice.is_empty() {
            write!(f, ", setting {}", self.choice)?;
        }
        write!(f, ")")
    }
}

/// A summary of a space-group type.
#[derive(Clone, Debug, PartialEq)]
pub struct SpaceGroupType {
    /// The space-group number.
    pub number: usize,

    /// The short Hermann–Mauguin symbol.
    pub international: &'static str,

    /// The Hermann–Mauguin symbol of the point group.
    pub point_group: &'static str,

    /// The Schoenflies symbol of the point group.
    pub schoenflies: &'static str,

    /// The crystal system.
    pub crystal_system: CrystalSystem,

    /// The Hall numbers of all tabulated settings, the default first.
    pub hall_numbers: Vec<usize>,
}

// =========
// Functions
// =========

/// All tabulated settings in Hall-number order.
pub fn space_group_records() -> &'static [SpaceGroupRecord] {
    &SPACE_GROUP_RECORDS
}

/// The setting with the given Hall number, if tabulated.
pub fn space_group_record(hall_number: usize) -> Option<&'static SpaceGroupRecord> {
    hall_number
        .checked_sub(1)
        .and_then(|i| SPACE_GROUP_RECORDS.get(i))
}

/// All settings of the space-group type with the given number, in Hall-number order.
pub fn records_for_number(number: usize) -> Vec<&'static SpaceGroupRecord> {
    SPACE_GROUP_RECORDS
        .iter()
        .filter(|record| record.number == number)
        .collect_vec()
}

/// All settings of the space-group types with the given point group, in Hall-number order.
pub fn records_for_point_group(point_group: &PointGroup) -> Vec<&'static SpaceGroupRecord> {
    SPACE_GROUP_RECORDS
        .iter()
        .filter(|record| record.point_group.number == point_group.number)
        .collect_vec()
}

/// The summary of the space-group type with the given number.
pub fn space_group_type(number: usize) -> Option<SpaceGroupType> {
    let records = records_for_number(number);
    let first = records.first()?;
    Some(SpaceGroupType {
        number,
        international: first.international,
        point_group: first.point_group.symbol,
        schoenflies: first.point_group.schoenflies,
        crystal_system: first.crystal_system(),
        hall_numbers: records.iter().map(|record| record.hall_number).collect_vec(),
    })
}
