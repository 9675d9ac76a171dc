//! Symmetry datasets: the assembled outcome of symmetry determination for one cell.

use std::fmt;

use itertools::Itertools;
use log;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::auxiliary::cell::{Cell, Lattice};
use crate::auxiliary::geometry::{to_f64_matrix, wrap_fractional, Tolerance};
use crate::database::hall_symbol::{ExactOperation, TRANSLATION_DENOMINATOR};
use crate::database::SpaceGroupRecord;
use crate::io::format::Heading;
use crate::lattice::lattice_point_group;
use crate::permutation::Permutation;
use crate::symmetry::operation_set::OperationSet;
use crate::symmetry::point_group::{identify_point_group, CrystalSystem};
use crate::symmetry::refinement::{refine_structure, standard_primitive_cell, RefinedStructure};
use crate::symmetry::space_group::{match_space_group_in_frame, SpaceGroupMatch};
use crate::symmetry::spin::orbit_representatives;
use crate::symmetry::symmetry_search::{
    induced_permutation, search_symmetry, SymmetrySearchResult,
};
use crate::symmetry::SymmetryError;

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod dataset_tests;

// ==================
// Struct definitions
// ==================

/// A structure containing the complete symmetry information of a cell.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SymmetryDataset {
    /// The space-group number.
    pub number: usize,

    /// The Hall number of the matched setting.
    pub hall_number: usize,

    /// The short Hermann–Mauguin symbol.
    pub international: String,

    /// The Hall symbol of the matched setting.
    pub hall_symbol: String,

    /// The setting choice of the matched setting.
    pub choice: String,

    /// The Hermann–Mauguin symbol of the point group.
    pub point_group: String,

    /// The Schoenflies symbol of the point group.
    pub schoenflies: String,

    /// The crystal system.
    pub crystal_system: CrystalSystem,

    /// The Bravais lattice symbol, *e.g.* `cF`.
    pub bravais_lattice: String,

    /// The matrix $`\mathbf{P}`$ of the transformation
    /// $`\mathbf{x}_{\mathrm{s}} = \mathbf{P}\mathbf{x} + \mathbf{p}`$ to the standardised
    /// setting.
    pub transformation_matrix: Matrix3<f64>,

    /// The origin shift $`\mathbf{p}`$ of that transformation.
    pub origin_shift: Vector3<f64>,

    /// The operations in the input basis, with refined translations.
    pub operations: OperationSet,

    /// The operations of the standardised conventional cell, exact in units of $`1/24`$.
    pub std_operations: Vec<ExactOperation>,

    /// For each atom, the smallest index of an atom related to it by [`Self::operations`].
    pub equivalent_atoms: Vec<usize>,

    /// For each atom, the smallest index of an atom related to it by the operations of the
    /// primitive cell. This differs from [`Self::equivalent_atoms`] only for supercells whose
    /// lattice breaks some operations of the primitive cell.
    pub crystallographic_orbits: Vec<usize>,

    /// The Wyckoff letter of each atom.
    pub wyckoffs: Vec<char>,

    /// The Wyckoff multiplicity of each atom.
    pub multiplicities: Vec<usize>,

    /// The site-symmetry point-group symbol of each atom.
    pub site_symmetry_symbols: Vec<String>,

    /// The site-symmetry order of each atom.
    pub site_symmetry_orders: Vec<usize>,

    /// The symmetrised primitive cell.
    pub primitive: Cell,

    /// For each atom, the index of its primitive atom.
    pub mapping_to_primitive: Vec<usize>,

    /// The standardised conventional cell.
    pub standardized: Cell,

    /// The Cartesian rotation from the input orientation to the standard orientation.
    pub std_rotation_matrix: Matrix3<f64>,

    /// For each standardised atom, the index of its primitive atom.
    pub std_mapping_to_primitive: Vec<usize>,

    /// The symmetrised input cell.
    pub symmetrised: Cell,

    /// The tolerance used.
    pub tolerance: Tolerance,
}

/// A structure containing the symmetry of a bare lattice.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LatticeSymmetry {
    /// The rotations preserving the lattice, in the input basis.
    pub rotations: Vec<Matrix3<i32>>,

    /// The Hermann–Mauguin symbol of the holohedry.
    pub holohedry: String,

    /// The crystal system.
    pub crystal_system: CrystalSystem,

    /// The Bravais lattice symbol.
    pub bravais_lattice: String,

    /// The standardised conventional lattice.
    pub conventional_lattice: Lattice,
}

// =========
// Functions
// =========

/// The Bravais lattice symbol of a setting, *e.g.* `oC` or `hR`. Base-centred settings all
/// count as `C`.
#[must_use]
pub fn bravais_symbol(record: &SpaceGroupRecord) -> String {
    let family = match record.crystal_system() {
        CrystalSystem::Triclinic => 'a',
        CrystalSystem::Monoclinic => 'm',
        CrystalSystem::Orthorhombic => 'o',
        CrystalSystem::Tetragonal => 't',
        CrystalSystem::Trigonal | CrystalSystem::Hexagonal => 'h',
        CrystalSystem::Cubic => 'c',
    };
    let centring = match record.centring_symbol() {
        'A' | 'B' | 'C' => 'C',
        other => other,
    };
    format!("{family}{centring}")
}

/// The Bravais lattice symbol of the holohedry of a lattice, given the number of the symmorphic
/// space group of a single-atom structure on that lattice.
#[must_use]
pub fn bravais_symbol_of_holohedry(number: usize) -> Option<&'static str> {
    match number {
        2 => Some("aP"),
        10 => Some("mP"),
        12 => Some("mC"),
        47 => Some("oP"),
        65 => Some("oC"),
        69 => Some("oF"),
        71 => Some("oI"),
        123 => Some("tP"),
        139 => Some("tI"),
        166 => Some("hR"),
        191 => Some("hP"),
        221 => Some("cP"),
        225 => Some("cF"),
        229 => Some("cI"),
        _ => None,
    }
}

impl SymmetryDataset {
    /// Determines the complete symmetry dataset of a cell.
    ///
    /// # Arguments
    ///
    /// * `cell` - The cell.
    /// * `tol` - The tolerance.
    ///
    /// # Errors
    ///
    /// Errors if the cell is degenerate, if the operations found are inconsistent, or if no
    /// tabulated setting matches them.
    pub fn new(cell: &Cell, tol: &Tolerance) -> Result<Self, SymmetryError> {
        let search = search_symmetry(cell, tol)?;
        let space_group = match_space_group_in_frame(
            search.primitive.cell.lattice(),
            &search.primitive_operations,
            Some(cell.lattice()),
            tol,
        )?;
        let refined = refine_structure(cell, &search, &space_group)?;
        let record = space_group.record;

        let input_permutations = refined
            .operations
            .iter()
            .map(|op| {
                induced_permutation(&refined.symmetrised, op, tol).ok_or_else(|| {
                    SymmetryError::InternalInconsistency(format!(
                        "operation {op} induces no permutation of the symmetrised atoms"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let equivalent_atoms = orbit_representatives(cell.n_atoms(), &input_permutations);
        let crystallographic_orbits = crystallographic_orbits(
            &search.primitive.mapping_to_primitive,
            &search.primitive_permutations,
        );

        let (wyckoffs, multiplicities, site_symmetry_symbols, site_symmetry_orders) =
            assign_wyckoff_positions(
                record,
                &refined,
                &search.primitive.mapping_to_primitive,
                tol,
            )?;

        log::debug!(
            "Symmetry dataset: {} with {} operation(s).",
            record,
            refined.operations.len()
        );
        Ok(Self {
            number: record.number,
            hall_number: record.hall_number,
            international: record.international.to_string(),
            hall_symbol: record.hall_symbol.symbol.clone(),
            choice: record.choice.to_string(),
            point_group: space_group.point_group.symbol.to_string(),
            schoenflies: space_group.point_group.schoenflies.to_string(),
            crystal_system: space_group.point_group.crystal_system(),
            bravais_lattice: bravais_symbol(record),
            transformation_matrix: refined.transformation,
            origin_shift: refined.origin_shift,
            operations: refined.operations.clone(),
            std_operations: record.operations.clone(),
            equivalent_atoms,
            crystallographic_orbits,
            wyckoffs,
            multiplicities,
            site_symmetry_symbols,
            site_symmetry_orders,
            primitive: refined.primitive.clone(),
            mapping_to_primitive: search.primitive.mapping_to_primitive.clone(),
            standardized: refined.standardized.clone(),
            std_rotation_matrix: refined.std_rotation,
            std_mapping_to_primitive: refined.standardized_mapping_to_primitive.clone(),
            symmetrised: refined.symmetrised.clone(),
            tolerance: tol.clone(),
        })
    }

    /// The number of operations in the input basis.
    #[must_use]
    pub fn n_operations(&self) -> usize {
        self.operations.len()
    }
}

/// The smallest input-atom index of every orbit of primitive atoms, for each input atom.
fn crystallographic_orbits(
    mapping_to_primitive: &[usize],
    permutations: &[Permutation],
) -> Vec<usize> {
    let n_primitive = mapping_to_primitive.iter().max().map_or(0, |&i| i + 1);
    let primitive_orbits = orbit_representatives(n_primitive, permutations);
    let first_input_atom = |orbit: usize| {
        mapping_to_primitive
            .iter()
            .position(|&i| primitive_orbits[i] == orbit)
            .unwrap_or_default()
    };
    mapping_to_primitive
        .iter()
        .map(|&i| first_input_atom(primitive_orbits[i]))
        .collect_vec()
}

type WyckoffAssignment = (Vec<char>, Vec<usize>, Vec<String>, Vec<usize>);

/// Assigns the Wyckoff position of every input atom through its primitive atom in the
/// standardised cell.
fn assign_wyckoff_positions(
    record: &SpaceGroupRecord,
    refined: &RefinedStructure,
    mapping_to_primitive: &[usize],
    tol: &Tolerance,
) -> Result<WyckoffAssignment, SymmetryError> {
    let table = record.wyckoff_positions()?;
    let std_basis = refined.standardized.lattice().basis();
    let primitive_positions = (0..refined.primitive.n_atoms())
        .map(|i| {
            let position = refined
                .standardized_mapping_to_primitive
                .iter()
                .position(|&j| j == i)
                .map(|k| refined.standardized.positions()[k])
                .ok_or_else(|| {
                    SymmetryError::InternalInconsistency(format!(
                        "primitive atom {i} is absent from the standardised cell"
                    ))
                })?;
            table.assign(&record.operations, &position, std_basis, tol)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(mapping_to_primitive
        .iter()
        .map(|&i| {
            let position = primitive_positions[i];
            (
                position.letter,
                position.multiplicity,
                position.site_symmetry.symbol.to_string(),
                position.site_symmetry_order(),
            )
        })
        .fold(
            (vec![], vec![], vec![], vec![]),
            |(mut letters, mut mults, mut symbols, mut orders), (l, m, s, o)| {
                letters.push(l);
                mults.push(m);
                symbols.push(s);
                orders.push(o);
                (letters, mults, symbols, orders)
            },
        ))
}

/// Determines the complete symmetry dataset of a cell.
///
/// # Errors
///
/// Errors as [`SymmetryDataset::new`].
pub fn get_symmetry_dataset(
    cell: &Cell,
    tol: &Tolerance,
) -> Result<SymmetryDataset, SymmetryError> {
    SymmetryDataset::new(cell, tol)
}

/// Returns the standardised conventional cell of a structure, with symmetrised positions and an
/// idealised metric in the standard orientation.
///
/// # Errors
///
/// Errors as [`SymmetryDataset::new`].
pub fn refine_cell(cell: &Cell, tol: &Tolerance) -> Result<Cell, SymmetryError> {
    standardize_cell(cell, false, false, tol)
}

/// Returns a standardised cell of a structure.
///
/// # Arguments
///
/// * `cell` - The cell.
/// * `to_primitive` - If `true`, the standard primitive cell is returned instead of the
/// conventional one.
/// * `no_idealize` - If `true`, the lattice is neither idealised nor rotated into the standard
/// orientation, and the positions are left as found by the setting transformation.
/// * `tol` - The tolerance.
///
/// # Errors
///
/// Errors as [`SymmetryDataset::new`].
pub fn standardize_cell(
    cell: &Cell,
    to_primitive: bool,
    no_idealize: bool,
    tol: &Tolerance,
) -> Result<Cell, SymmetryError> {
    let search = search_symmetry(cell, tol)?;
    let space_group = match_space_group_in_frame(
        search.primitive.cell.lattice(),
        &search.primitive_operations,
        Some(cell.lattice()),
        tol,
    )?;
    let refined = refine_structure(cell, &search, &space_group)?;
    let conventional = if no_idealize {
        unidealised_conventional_cell(&search, &space_group, &refined)?
    } else {
        refined.standardized.clone()
    };
    if to_primitive {
        standard_primitive_cell(
            &conventional,
            space_group.record.centring_symbol(),
            refined.primitive.n_atoms(),
        )
    } else {
        Ok(conventional)
    }
}

/// The standardised conventional cell built from the measured lattice and unsymmetrised
/// positions, in the input orientation.
fn unidealised_conventional_cell(
    search: &SymmetrySearchResult,
    space_group: &SpaceGroupMatch,
    refined: &RefinedStructure,
) -> Result<Cell, SymmetryError> {
    let s_inv = to_f64_matrix(&space_group.transformation)
        .try_inverse()
        .ok_or_else(|| {
            SymmetryError::DegenerateLattice("singular setting transformation".to_string())
        })?;
    let n_primitive = search.primitive.cell.n_atoms();
    let positions = refined
        .standardized_mapping_to_primitive
        .iter()
        .enumerate()
        .map(|(k, &i)| {
            let centring = space_group.record.centring()[k / n_primitive]
                .map(|x| f64::from(x) / f64::from(TRANSLATION_DENOMINATOR));
            wrap_fractional(
                &(s_inv * (search.primitive.cell.positions()[i] + space_group.origin_shift)
                    + centring),
            )
        })
        .collect_vec();
    Cell::new(
        refined.conventional_lattice.clone(),
        positions,
        refined.standardized.types().to_vec(),
    )
}

/// Returns the primitive cell of a structure in the standard setting.
///
/// # Errors
///
/// Errors as [`SymmetryDataset::new`].
pub fn find_primitive(cell: &Cell, tol: &Tolerance) -> Result<Cell, SymmetryError> {
    standardize_cell(cell, true, false, tol)
}

/// Determines the symmetry of a bare lattice, by classifying a single-atom structure on it.
///
/// # Errors
///
/// Errors if the lattice is degenerate or its reduction fails.
pub fn get_lattice_symmetry(
    lattice: &Lattice,
    tol: &Tolerance,
) -> Result<LatticeSymmetry, SymmetryError> {
    let rotations = lattice_point_group(lattice, tol)?;
    let holohedry = identify_point_group(&rotations)?;
    let cell = Cell::new(lattice.clone(), vec![Vector3::zeros()], vec![0])?;
    let dataset = SymmetryDataset::new(&cell, tol)?;
    let bravais_lattice = bravais_symbol_of_holohedry(dataset.number)
        .map(str::to_string)
        .ok_or_else(|| {
            SymmetryError::InternalInconsistency(format!(
                "a single-atom structure yields the non-holohedral space group {}",
                dataset.number
            ))
        })?;
    Ok(LatticeSymmetry {
        rotations,
        holohedry: holohedry.symbol.to_string(),
        crystal_system: holohedry.crystal_system(),
        bravais_lattice,
        conventional_lattice: dataset.standardized.lattice().clone(),
    })
}

// =====================
// Trait implementations
// =====================

impl fmt::Display for SymmetryDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Heading::Subtitle.write(f, "Space group")?;
        writeln!(
            f,
            "{} (No. {}), Hall symbol `{}` (Hall No. {}{})",
            self.international,
            self.number,
            self.hall_symbol,
            self.hall_number,
            if self.choice.is_empty() {
                String::new()
            } else {
                format!(", setting {}", self.choice)
            }
        )?;
        writeln!(
            f,
            "Point group {} ({}), {} crystal system, Bravais lattice {}",
            self.point_group, self.schoenflies, self.crystal_system, self.bravais_lattice
        )?;
        writeln!(f, "{} operation(s) in the input cell", self.n_operations())?;
        writeln!(f)?;

        Heading::Subtitle.write(f, "Atoms")?;
        writeln!(
            f,
            "{:>5}  {:>7}  {:>10}  {:>7}  {:>8}  {:>13}",
            "Atom", "Species", "Equivalent", "Orbit", "Wyckoff", "Site symmetry"
        )?;
        for (i, species) in self.symmetrised.types().iter().enumerate() {
            writeln!(
                f,
                "{:>5}  {species:>7}  {:>10}  {:>7}  {:>8}  {:>13}",
                i,
                self.equivalent_atoms[i],
                self.crystallographic_orbits[i],
                format!("{}{}", self.multiplicities[i], self.wyckoffs[i]),
                self.site_symmetry_symbols[i],
            )?;
        }
        writeln!(f)?;

        Heading::Subtitle.write(f, "Standardised cell")?;
        writeln!(f, "{}", self.standardized)?;
        Ok(())
    }
}

impl fmt::Display for LatticeSymmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Heading::Subtitle.write(f, "Lattice symmetry")?;
        writeln!(
            f,
            "Holohedry {} ({} crystal system), Bravais lattice {}, {} rotation(s)",
            self.holohedry,
            self.crystal_system,
            self.bravais_lattice,
            self.rotations.len()
        )?;
        writeln!(f, "Conventional lattice:")?;
        writeln!(f, "{}", self.conventional_lattice)?;
        Ok(())
    }
}
