//! YAML input files for the `crystsym` binary.

use anyhow::{self, bail, format_err};
use indexmap::IndexSet;
use itertools::Itertools;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::auxiliary::cell::{Cell, Lattice};
use crate::drivers::lattice_symmetry::{LatticeSymmetryDriver, LatticeSymmetryParams};
use crate::drivers::space_group_detection::{
    SpaceGroupDetectionDriver, SpaceGroupDetectionParams, SpaceGroupDetectionResult,
};
use crate::drivers::CrystSymDriver;
use crate::interfaces::InputHandle;
use crate::io::format::{
    crystsym_error, crystsym_output, CrystSymOutput, Heading, ReportSection,
};
use crate::io::{read_crystsym_binary, CrystSymFileType};


/// A structure describing a cell in a YAML input file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CellInput {
    /// The lattice vectors $`\mathbf{a}`$, $`\mathbf{b}`$ and $`\mathbf{c}`$, one per row.
    pub lattice: [[f64; 3]; 3],

    /// The fractional positions of the atoms.
    pub positions: Vec<[f64; 3]>,

    /// The species labels of the atoms. Labels are numbered in order of first appearance.
    pub species: Vec<String>,
}

impl CellInput {
    /// Constructs the cell described by this input.
    ///
    /// # Returns
    ///
    /// The cell together with the distinct species labels, indexed by species number.
    ///
    /// # Errors
    ///
    /// Errors if the cell is malformed.
    pub fn to_cell(&self) -> Result<(Cell, Vec<String>), anyhow::Error> {
        let labels = self.species.iter().cloned().collect::<IndexSet<_>>();
        let types = self
            .species
            .iter()
            .map(|label| {
                labels
                    .get_index_of(label)
                    .ok_or_else(|| format_err!("Unknown species label `{label}`."))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let cell = Cell::new(
            Lattice::new(self.lattice),
            self.positions.iter().map(|pos| Vector3::from(*pos)).collect_vec(),
            types,
        )?;
        Ok((cell, labels.into_iter().collect_vec()))
    }
}

/// An enumerated type representing possible input kinds for space-group detection from a YAML
/// input file.
#[derive(Clone, Serialize, Deserialize)]
pub enum SpaceGroupDetectionInputKind {
    /// Variant indicating that the parameters for the space-group detection driver will be
    /// specified.
    Parameters(SpaceGroupDetectionParams),

    /// Variant indicating that the space-group detection results will be read in from a
    /// crystsym [`CrystSymFileType::Sym`] binary file. The associated string gives the name of
    /// the file without its `.crystsym.sym` extension.
    FromFile(String),
}

impl Default for SpaceGroupDetectionInputKind {
    fn default() -> Self {
        SpaceGroupDetectionInputKind::Parameters(SpaceGroupDetectionParams::default())
    }
}

/// A structure containing crystsym input parameters which can be serialised into and
/// deserialised from a YAML input file.
#[derive(Clone, Serialize, Deserialize)]
pub struct Input {
    /// The cell to be analysed. This is only optional when space-group detection results are
    /// read in from a file and no lattice symmetry is requested.
    #[serde(default)]
    pub cell: Option<CellInput>,

    /// Specification for space-group detection. If `None`, no space-group detection will be
    /// performed.
    #[serde(default)]
    pub space_group_detection: Option<SpaceGroupDetectionInputKind>,

    /// Parameters for lattice-symmetry determination of the cell's lattice. If `None`, this is
    /// not performed.
    #[serde(default)]
    pub lattice_symmetry: Option<LatticeSymmetryParams>,
}

impl Default for Input {
    fn default() -> Self {
        Input {
            cell: None,
            space_group_detection: Some(SpaceGroupDetectionInputKind::default()),
            lattice_symmetry: None,
        }
    }
}

impl Input {
    /// Constructs the cell of this input, logging it with its species labels.
    fn cell(&self) -> Result<Cell, anyhow::Error> {
        let (cell, labels) = self
            .cell
            .as_ref()
            .ok_or_else(|| format_err!("No cell has been specified in the input."))?
            .to_cell()?;
        Heading::Subtitle.log("Species");
        for (i, label) in labels.iter().enumerate() {
            crystsym_output!("{i:>5}  {label}");
        }
        crystsym_output!("");
        Ok(cell)
    }
}

impl InputHandle for Input {
    fn handle(&self) -> Result<(), anyhow::Error> {
        if self.space_group_detection.is_none() && self.lattice_symmetry.is_none() {
            bail!("Neither space-group detection nor lattice symmetry has been requested.");
        }

        match self.space_group_detection.as_ref() {
            Some(SpaceGroupDetectionInputKind::Parameters(params)) => {
                let section = ReportSection::begin("Space-group detection");
                crystsym_output!("");
                let cell = self.cell()?;
                let mut driver = SpaceGroupDetectionDriver::builder()
                    .parameters(params)
                    .cell(&cell)
                    .build()?;
                if let Err(err) = driver.run() {
                    crystsym_error!("{err}");
                    return Err(err);
                }
                drop(section);
                crystsym_output!("");
            }
            Some(SpaceGroupDetectionInputKind::FromFile(name)) => {
                let result: SpaceGroupDetectionResult =
                    read_crystsym_binary(name, CrystSymFileType::Sym)?;
                crystsym_output!(
                    "Space-group detection results read in from {name}.{}:",
                    CrystSymFileType::Sym.ext()
                );
                crystsym_output!("");
                result.log_output_display();
            }
            None => {}
        }

        if let Some(params) = self.lattice_symmetry.as_ref() {
            let section = ReportSection::begin("Lattice symmetry");
            crystsym_output!("");
            let cell = self.cell()?;
            let mut driver = LatticeSymmetryDriver::builder()
                .parameters(params)
                .lattice(cell.lattice())
                .build()?;
            if let Err(err) = driver.run() {
                crystsym_error!("{err}");
                return Err(err);
            }
            drop(section);
            crystsym_output!("");
        }
        Ok(())
    }
}
