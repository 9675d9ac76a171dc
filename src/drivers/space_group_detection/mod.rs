use std::fmt;

use anyhow::{self, bail, format_err};
use derive_builder::Builder;
use itertools::Itertools;
use log;
use serde::{Deserialize, Serialize};

use crate::auxiliary::cell::Cell;
use crate::auxiliary::geometry::Tolerance;
use crate::database::space_group_record;
use crate::drivers::CrystSymDriver;
use crate::io::format::{
    crystsym_output, crystsym_warn, table_rule, yes_no, CrystSymOutput, Heading,
};
use crate::io::{write_crystsym_binary, write_crystsym_cell, CrystSymFileType};
use crate::symmetry::dataset::SymmetryDataset;
use crate::symmetry::space_group::rotation_kind_summary;
use crate::symmetry::spin::{get_operations_with_collinear_spin, CollinearSpinSymmetry};
use crate::symmetry::wyckoff::wyckoff_summary;


// ==================
// Struct definitions
// ==================

// ----------
// Parameters
// ----------

/// A structure containing control parameters for space-group detection.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct SpaceGroupDetectionParams {
    /// Distance tolerances to be scanned, in the length unit of the lattice.
    #[builder(setter(custom), default = "vec![1.0e-5]")]
    pub symprecs: Vec<f64>,

    /// An optional angular tolerance in degrees, shared by all scanned tolerances.
    #[builder(default = "None")]
    #[serde(default)]
    pub angle_tolerance: Option<f64>,

    /// Optional collinear magnetic moments, one per atom. If given, the operations compatible
    /// with the moments are determined at the selected tolerance.
    #[builder(default = "None")]
    #[serde(default)]
    pub magnetic_moments: Option<Vec<f64>>,

    /// Boolean indicating if the operations found are to be written to the output.
    #[builder(default = "false")]
    #[serde(default)]
    pub write_operations: bool,

    /// Boolean indicating if the Wyckoff positions of the space group found are to be written to
    /// the output.
    #[builder(default = "false")]
    #[serde(default)]
    pub write_wyckoff_positions: bool,

    /// Optional name for saving the result as a binary file of type [`CrystSymFileType::Sym`].
    /// If `None`, the result will not be saved.
    #[builder(default = "None")]
    #[serde(default)]
    pub result_save_name: Option<String>,

    /// Optional name for saving the standardised cell as a YAML file of type
    /// [`CrystSymFileType::Cell`]. If `None`, the cell will not be saved.
    #[builder(default = "None")]
    #[serde(default)]
    pub standardized_cell_save_name: Option<String>,
}

impl SpaceGroupDetectionParams {
    /// Returns a builder to construct a [`SpaceGroupDetectionParams`] structure.
    pub fn builder() -> SpaceGroupDetectionParamsBuilder {
        SpaceGroupDetectionParamsBuilder::default()
    }

    /// Returns the tolerances to be scanned.
    pub fn tolerances(&self) -> Vec<Tolerance> {
        self.symprecs
            .iter()
            .map(|&symprec| Tolerance {
                symprec,
                angle_tolerance: self.angle_tolerance,
            })
            .collect_vec()
    }
}

impl SpaceGroupDetectionParamsBuilder {
    pub fn symprecs(&mut self, symprecs: &[f64]) -> &mut Self {
        self.symprecs = Some(symprecs.to_vec());
        self
    }
}

impl Default for SpaceGroupDetectionParams {
    fn default() -> Self {
        Self {
            symprecs: vec![1.0e-5],
            angle_tolerance: None,
            magnetic_moments: None,
            write_operations: false,
            write_wyckoff_positions: false,
            result_save_name: None,
            standardized_cell_save_name: None,
        }
    }
}

impl fmt::Display for SpaceGroupDetectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symprecs.len() == 1 {
            writeln!(f, "Fixed tolerance:")?;
            writeln!(f, "  Distance tolerance: {:.3e}", self.symprecs[0])?;
        } else {
            writeln!(f, "Variable tolerances:")?;
            writeln!(
                f,
                "  Distance tolerances: {}",
                self.symprecs.iter().map(|v| format!("{v:.3e}")).join(", ")
            )?;
        }
        writeln!(
            f,
            "  Angle tolerance: {}",
            self.angle_tolerance
                .map(|ang| format!("{ang:.3}°"))
                .unwrap_or_else(|| "derived from distance tolerance".to_string())
        )?;
        writeln!(f)?;

        if let Some(magmoms) = self.magnetic_moments.as_ref() {
            writeln!(
                f,
                "Collinear magnetic moments: {}",
                magmoms.iter().map(|m| format!("{m:+.3}")).join(", ")
            )?;
        }
        writeln!(
            f,
            "Report symmetry operations: {}",
            yes_no(self.write_operations)
        )?;
        writeln!(
            f,
            "Report Wyckoff positions: {}",
            yes_no(self.write_wyckoff_positions)
        )?;
        writeln!(
            f,
            "Save space-group detection results to file: {}",
            self.result_save_name
                .as_ref()
                .map_or_else(|| yes_no(false).to_string(), |name| {
                    CrystSymFileType::Sym.path(name).display().to_string()
                })
        )?;
        writeln!(
            f,
            "Save standardised cell to file: {}",
            self.standardized_cell_save_name
                .as_ref()
                .map_or_else(|| yes_no(false).to_string(), |name| {
                    CrystSymFileType::Cell.path(name).display().to_string()
                })
        )?;
        writeln!(f)?;

        Ok(())
    }
}

// ------
// Result
// ------

/// A structure to contain space-group detection results.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct SpaceGroupDetectionResult {
    /// The control parameters used to obtain this set of results.
    pub parameters: SpaceGroupDetectionParams,

    /// The tolerance at which the selected dataset was obtained.
    pub tolerance: Tolerance,

    /// The symmetry dataset of the highest-order space group found.
    pub dataset: SymmetryDataset,

    /// The operations compatible with the magnetic moments, if these have been given.
    #[builder(default = "None")]
    pub spin_symmetry: Option<CollinearSpinSymmetry>,
}

impl SpaceGroupDetectionResult {
    /// Returns a builder to construct a [`SpaceGroupDetectionResult`] structure.
    fn builder() -> SpaceGroupDetectionResultBuilder {
        SpaceGroupDetectionResultBuilder::default()
    }

    /// Writes the operations found in a nicely formatted table.
    fn write_operations(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Heading::Subtitle.write(
            f,
            &format!("Symmetry operations of {}", self.dataset.international),
        )?;
        writeln!(
            f,
            "Rotation kinds: {}",
            rotation_kind_summary(self.dataset.operations.operations())
        )?;
        writeln!(f, "{}", table_rule(48))?;
        writeln!(f, "{:>5}  {:>6}  {:<31}", "#", "Kind", "Coordinate triplet")?;
        writeln!(f, "{}", table_rule(48))?;
        for (i, op) in self.dataset.operations.iter().enumerate() {
            writeln!(
                f,
                "{i:>5}  {:>6}  {:<31}",
                op.rotation_kind()
                    .map_or_else(|| "?".to_string(), |kind| kind.to_string()),
                op.to_xyz()
            )?;
        }
        writeln!(f, "{}", table_rule(48))?;
        writeln!(f)?;
        Ok(())
    }

    /// Writes the Wyckoff positions of the space group found.
    fn write_wyckoff_positions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Heading::Subtitle.write(
            f,
            &format!("Wyckoff positions of {}", self.dataset.international),
        )?;
        match space_group_record(self.dataset.hall_number).map(|record| record.wyckoff_positions())
        {
            Some(Ok(table)) => {
                for line in wyckoff_summary(table) {
                    writeln!(f, "{line}")?;
                }
            }
            Some(Err(err)) => writeln!(f, "Wyckoff positions unavailable: {err}")?,
            None => writeln!(
                f,
                "Wyckoff positions unavailable: no setting with Hall number {}",
                self.dataset.hall_number
            )?,
        }
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for SpaceGroupDetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Highest space group found: {} (No. {}, {} {})",
            self.dataset.international,
            self.dataset.number,
            self.dataset.n_operations(),
            if self.dataset.n_operations() != 1 {
                "operations"
            } else {
                "operation"
            }
        )?;
        writeln!(f, "  Associated tolerance: {}", self.tolerance)?;
        if let Some(spin) = self.spin_symmetry.as_ref() {
            writeln!(
                f,
                "  Operations compatible with the magnetic moments: {} ({} with time reversal)",
                spin.operations.len(),
                spin.n_spin_flipping()
            )?;
        }
        writeln!(f)?;

        write!(f, "{}", self.dataset)?;
        writeln!(f)?;

        if self.parameters.write_operations {
            self.write_operations(f)?;
        }
        if self.parameters.write_wyckoff_positions {
            self.write_wyckoff_positions(f)?;
        }
        Ok(())
    }
}

// ------
// Driver
// ------

/// A driver for space-group detection.
#[derive(Clone, Builder)]
pub struct SpaceGroupDetectionDriver<'a> {
    /// The control parameters for space-group detection.
    parameters: &'a SpaceGroupDetectionParams,

    /// The cell for symmetry analysis.
    cell: &'a Cell,

    /// The result of the space-group detection.
    #[builder(setter(skip), default = "None")]
    result: Option<SpaceGroupDetectionResult>,
}

impl<'a> SpaceGroupDetectionDriver<'a> {
    /// Returns a builder to construct a [`SpaceGroupDetectionDriver`] structure.
    pub fn builder() -> SpaceGroupDetectionDriverBuilder<'a> {
        SpaceGroupDetectionDriverBuilder::default()
    }

    /// Executes space-group detection over all requested tolerances and keeps the dataset of the
    /// highest order, preferring the tightest tolerance among equally high orders.
    fn detect_space_group(&mut self) -> Result<(), anyhow::Error> {
        Heading::Title.log("Space-Group Detection");
        crystsym_output!("");
        let params = self.parameters;
        params.log_output_display();

        crystsym_output!("Cell for space-group detection:");
        self.cell.log_output_display();
        crystsym_output!("");

        let tolerances = params.tolerances();
        if tolerances.is_empty() {
            bail!("No tolerances have been specified for space-group detection.");
        }

        Heading::Subtitle.log("Tolerance-scanning space-group detection");
        crystsym_output!("");
        let count_length = tolerances.len().to_string().len() + 1;
        crystsym_output!("{}", table_rule(count_length + 46));
        crystsym_output!(
            "{:>width$} {:>12} {:>14} {:>6} {:>11}",
            "#",
            "Tolerance",
            "Space group",
            "No.",
            "Operations",
            width = count_length
        );
        crystsym_output!("{}", table_rule(count_length + 46));
        let datasets = tolerances
            .into_iter()
            .enumerate()
            .filter_map(|(i, tol)| match SymmetryDataset::new(self.cell, &tol) {
                Ok(dataset) => {
                    crystsym_output!(
                        "{:>width$} {:>12.3e} {:>14} {:>6} {:>11}",
                        i + 1,
                        tol.symprec,
                        dataset.international,
                        dataset.number,
                        dataset.n_operations(),
                        width = count_length
                    );
                    Some((tol, dataset))
                }
                Err(err) => {
                    log::debug!("Space-group detection with {tol} has failed: {err}");
                    crystsym_output!(
                        "{:>width$} {:>12.3e} {:>14} {:>6} {:>11}",
                        i + 1,
                        tol.symprec,
                        "--",
                        "--",
                        "--",
                        width = count_length
                    );
                    None
                }
            })
            .collect_vec();
        crystsym_output!("{}", table_rule(count_length + 46));
        crystsym_output!("");

        let (tolerance, dataset) = datasets
            .into_iter()
            .max_by(|(tol_a, dataset_a), (tol_b, dataset_b)| {
                dataset_a
                    .n_operations()
                    .cmp(&dataset_b.n_operations())
                    .then_with(|| tol_b.symprec.total_cmp(&tol_a.symprec))
            })
            .ok_or_else(|| {
                format_err!("Space-group detection has failed for every tolerance.")
            })?;

        let spin_symmetry = params
            .magnetic_moments
            .as_ref()
            .map(|magmoms| get_operations_with_collinear_spin(self.cell, magmoms, &tolerance))
            .transpose()?;
        if let Some(spin) = spin_symmetry.as_ref() {
            if spin.operations.len() < dataset.n_operations() {
                crystsym_warn!(
                    "The magnetic moments break {} of {} operation(s).",
                    dataset.n_operations() - spin.operations.len(),
                    dataset.n_operations()
                );
            }
        }

        let result = SpaceGroupDetectionResult::builder()
            .parameters(params.clone())
            .tolerance(tolerance)
            .dataset(dataset)
            .spin_symmetry(spin_symmetry)
            .build()
            .map_err(|err| format_err!(err))?;
        result.log_output_display();

        // Save space-group detection result, if requested
        if let Some(name) = params.result_save_name.as_ref() {
            write_crystsym_binary(name, CrystSymFileType::Sym, &result)?;
            crystsym_output!(
                "Space-group detection results saved as {name}.{}.",
                CrystSymFileType::Sym.ext()
            );
            crystsym_output!("");
        }
        if let Some(name) = params.standardized_cell_save_name.as_ref() {
            write_crystsym_cell(name, &result.dataset.standardized)?;
            crystsym_output!(
                "Standardised cell saved as {}.",
                CrystSymFileType::Cell.path(name).display()
            );
            crystsym_output!("");
        }
        self.result = Some(result);

        Ok(())
    }
}

impl<'a> CrystSymDriver for SpaceGroupDetectionDriver<'a> {
    type Params = SpaceGroupDetectionParams;

    type Outcome = SpaceGroupDetectionResult;

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No space-group detection results found."))
    }

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.detect_space_group()
    }
}
