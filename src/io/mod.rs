//! Reading and writing of crystsym files.
//!
//! Results are stored as `bincode` binaries and cells as YAML documents. Every file type carries
//! its own compound extension, so that a single save name can hold one file of each type.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{self, bail, format_err, Context};
use bincode;
use serde::{de::DeserializeOwned, Serialize};
use serde_yaml;

use crate::auxiliary::cell::Cell;

pub(crate) mod format;


/// An enumerated type for crystsym file types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrystSymFileType {
    /// Variant for binary files containing space-group detection results.
    Sym,

    /// Variant for binary files containing lattice-symmetry results.
    Lat,

    /// Variant for YAML files containing a cell, such as a standardised one.
    Cell,
}

impl CrystSymFileType {
    /// Returns the extension of the file type.
    #[must_use]
    pub fn ext(&self) -> &'static str {
        match self {
            CrystSymFileType::Sym => "crystsym.sym",
            CrystSymFileType::Lat => "crystsym.lat",
            CrystSymFileType::Cell => "crystsym.yml",
        }
    }

    /// Returns `true` if files of this type are `bincode` binaries.
    #[must_use]
    pub fn is_binary(&self) -> bool {
        !matches!(self, CrystSymFileType::Cell)
    }

    /// Returns the path of the file of this type with a given name.
    pub fn path<P: AsRef<Path>>(&self, name: P) -> PathBuf {
        let mut path = name.as_ref().to_path_buf();
        path.set_extension(self.ext());
        path
    }
}

fn open(path: &Path) -> Result<BufReader<File>, anyhow::Error> {
    File::open(path)
        .map(BufReader::new)
        .with_context(|| format!("Unable to open `{}`.", path.display()))
}

fn create(path: &Path) -> Result<BufWriter<File>, anyhow::Error> {
    File::create(path)
        .map(BufWriter::new)
        .with_context(|| format!("Unable to create `{}`.", path.display()))
}

/// Reads a crystsym binary file and deserialises it into an appropriate structure.
///
/// # Arguments
///
/// * `name` - The name of the file to be read in (without crystsym-specific extensions).
/// * `file_type` - The type of the crystsym file to be read in, which must be a binary type.
///
/// # Errors
///
/// Errors if the file type is not binary, or if the file cannot be read or deserialised.
pub fn read_crystsym_binary<T, P: AsRef<Path>>(
    name: P,
    file_type: CrystSymFileType,
) -> Result<T, anyhow::Error>
where
    T: DeserializeOwned,
{
    if !file_type.is_binary() {
        bail!("`{}` files are not binary.", file_type.ext());
    }
    let path = file_type.path(name);
    let mut reader = open(&path)?;
    bincode::deserialize_from(&mut reader).map_err(|err| format_err!(err))
}

/// Serialises a structure and writes it into a crystsym binary file.
///
/// # Arguments
///
/// * `name` - The name of the file to be written (without crystsym-specific extensions).
/// * `file_type` - The type of the crystsym file to be written, which must be a binary type.
/// * `value` - The structure to be saved.
///
/// # Errors
///
/// Errors if the file type is not binary, or if the file cannot be created or written.
pub fn write_crystsym_binary<T, P: AsRef<Path>>(
    name: P,
    file_type: CrystSymFileType,
    value: &T,
) -> Result<(), anyhow::Error>
where
    T: Serialize,
{
    if !file_type.is_binary() {
        bail!("`{}` files are not binary.", file_type.ext());
    }
    let path = file_type.path(name);
    let mut writer = create(&path)?;
    bincode::serialize_into(&mut writer, value).map_err(|err| format_err!(err))
}

/// Reads a crystsym configuration YAML file and deserialises it into an appropriate structure.
///
/// # Arguments
///
/// * `name` - The name of the file to be read in (with its `.yml` or `.yaml` extension).
///
/// # Errors
///
/// Errors if the file cannot be read or does not describe a `T`.
pub fn read_crystsym_yaml<T, P: AsRef<Path>>(name: P) -> Result<T, anyhow::Error>
where
    T: DeserializeOwned,
{
    let path = name.as_ref();
    let mut reader = open(path)?;
    serde_yaml::from_reader(&mut reader)
        .with_context(|| format!("Invalid YAML document `{}`.", path.display()))
}

/// Writes a cell into a crystsym cell file.
///
/// # Arguments
///
/// * `name` - The name of the file to be written (without crystsym-specific extensions).
/// * `cell` - The cell to be saved.
///
/// # Errors
///
/// Errors if the file cannot be created or written.
pub fn write_crystsym_cell<P: AsRef<Path>>(name: P, cell: &Cell) -> Result<(), anyhow::Error> {
    let path = CrystSymFileType::Cell.path(name);
    let mut writer = create(&path)?;
    serde_yaml::to_writer(&mut writer, cell).map_err(|err| format_err!(err))
}

/// Reads a cell from a crystsym cell file, checking it on the way in.
///
/// # Arguments
///
/// * `name` - The name of the file to be read in (without crystsym-specific extensions).
///
/// # Errors
///
/// Errors if the file cannot be read, or if the cell it holds is invalid.
pub fn read_crystsym_cell<P: AsRef<Path>>(name: P) -> Result<Cell, anyhow::Error> {
    let path = CrystSymFileType::Cell.path(name);
    let cell: Cell = read_crystsym_yaml(&path)?;
    Cell::new(
        cell.lattice().clone(),
        cell.positions().to_vec(),
        cell.types().to_vec(),
    )
    .with_context(|| format!("Invalid cell in `{}`.", path.display()))
}
