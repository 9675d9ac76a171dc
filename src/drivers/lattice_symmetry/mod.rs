use std::fmt;

use anyhow::{self, format_err};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::auxiliary::cell::Lattice;
use crate::auxiliary::geometry::Tolerance;
use crate::drivers::CrystSymDriver;
use crate::io::format::{crystsym_output, yes_no, CrystSymOutput, Heading};
use crate::io::{write_crystsym_binary, CrystSymFileType};
use crate::lattice::niggli::niggli_reduce;
use crate::symmetry::dataset::{get_lattice_symmetry, LatticeSymmetry};

#[cfg(test)]
#[path = "lattice_symmetry_tests.rs"]
mod lattice_symmetry_tests;

// ==================
// Struct definitions
// ==================

// ----------
// Parameters
// ----------

/// A structure containing control parameters for lattice-symmetry determination.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct LatticeSymmetryParams {
    /// The distance tolerance, in the length unit of the lattice.
    #[builder(default = "1.0e-5")]
    #[serde(default = "default_symprec")]
    pub symprec: f64,

    /// An optional angular tolerance in degrees.
    #[builder(default = "None")]
    #[serde(default)]
    pub angle_tolerance: Option<f64>,

    /// Optional name for saving the result as a binary file of type [`CrystSymFileType::Lat`].
    /// If `None`, the result will not be saved.
    #[builder(default = "None")]
    #[serde(default)]
    pub result_save_name: Option<String>,
}

fn default_symprec() -> f64 {
    1.0e-5
}

impl LatticeSymmetryParams {
    /// Returns a builder to construct a [`LatticeSymmetryParams`] structure.
    pub fn builder() -> LatticeSymmetryParamsBuilder {
        LatticeSymmetryParamsBuilder::default()
    }

    /// Returns the tolerance described by these parameters.
    pub fn tolerance(&self) -> Tolerance {
        Tolerance {
            symprec: self.symprec,
            angle_tolerance: self.angle_tolerance,
        }
    }
}

impl Default for LatticeSymmetryParams {
    fn default() -> Self {
        Self {
            symprec: default_symprec(),
            angle_tolerance: None,
            result_save_name: None,
        }
    }
}

impl fmt::Display for LatticeSymmetryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tolerance: {}", self.tolerance())?;
        writeln!(
            f,
            "Save lattice-symmetry results to file: {}",
            if let Some(name) = self.result_save_name.as_ref() {
                CrystSymFileType::Lat.path(name).display().to_string()
            } else {
                yes_no(false).to_string()
            }
        )?;
        writeln!(f)?;
        Ok(())
    }
}

// ------
// Result
// ------

/// A structure to contain lattice-symmetry results.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LatticeSymmetryResult {
    /// The control parameters used to obtain this set of results.
    pub parameters: LatticeSymmetryParams,

    /// The Niggli-reduced lattice.
    pub niggli_lattice: Lattice,

    /// The symmetry of the lattice.
    pub symmetry: LatticeSymmetry,
}

impl fmt::Display for LatticeSymmetryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Niggli-reduced lattice:")?;
        writeln!(f, "{}", self.niggli_lattice)?;
        writeln!(f)?;
        write!(f, "{}", self.symmetry)
    }
}

// ------
// Driver
// ------

/// A driver for lattice-symmetry determination.
#[derive(Clone, Builder)]
pub struct LatticeSymmetryDriver<'a> {
    /// The control parameters.
    parameters: &'a LatticeSymmetryParams,

    /// The lattice to be classified.
    lattice: &'a Lattice,

    /// The result of the lattice-symmetry determination.
    #[builder(setter(skip), default = "None")]
    result: Option<LatticeSymmetryResult>,
}

impl<'a> LatticeSymmetryDriver<'a> {
    /// Returns a builder to construct a [`LatticeSymmetryDriver`] structure.
    pub fn builder() -> LatticeSymmetryDriverBuilder<'a> {
        LatticeSymmetryDriverBuilder::default()
    }

    fn determine_lattice_symmetry(&mut self) -> Result<(), anyhow::Error> {
        Heading::Title.log("Lattice Symmetry");
        crystsym_output!("");
        let params = self.parameters;
        params.log_output_display();

        let tol = params.tolerance();
        let (niggli_lattice, _) = niggli_reduce(self.lattice, &tol)?;
        let symmetry = get_lattice_symmetry(self.lattice, &tol)?;
        let result = LatticeSymmetryResult {
            parameters: params.clone(),
            niggli_lattice,
            symmetry,
        };
        result.log_output_display();

        if let Some(name) = params.result_save_name.as_ref() {
            write_crystsym_binary(name, CrystSymFileType::Lat, &result)?;
            crystsym_output!(
                "Lattice-symmetry results saved as {name}.{}.",
                CrystSymFileType::Lat.ext()
            );
            crystsym_output!("");
        }
        self.result = Some(result);
        Ok(())
    }
}

impl<'a> CrystSymDriver for LatticeSymmetryDriver<'a> {
    type Params = LatticeSymmetryParams;

    type Outcome = LatticeSymmetryResult;

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No lattice-symmetry results found."))
    }

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.determine_lattice_symmetry()
    }
}
