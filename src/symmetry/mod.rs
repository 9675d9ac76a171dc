//! Crystallographic symmetry: operations, their search, classification and refinement.

use std::error::Error;
use std::fmt;

pub mod dataset;
pub mod operation_set;
pub mod point_group;
pub mod primitive;
pub mod refinement;
pub mod space_group;
pub mod spin;
pub mod standard_axes;
pub mod symmetry_operation;
pub mod symmetry_search;
pub mod wyckoff;

// =================
// Error definitions
// =================

/// An enumerated type for the failure modes of symmetry determination.
#[derive(Debug, Clone, PartialEq)]
pub enum SymmetryError {
    /// The lattice basis is singular or nearly so.
    DegenerateLattice(String),

    /// A lattice reduction did not converge within its iteration cap.
    ReductionFailed {
        /// The name of the reduction algorithm.
        algorithm: &'static str,

        /// The number of iterations performed.
        iterations: usize,
    },

    /// No reference space-group entry matches the operations found.
    UnrecognizedSymmetry(String),

    /// The operations found are mutually inconsistent, *e.g.* they do not close under
    /// composition or the primitive-cell construction does not partition the atoms evenly.
    InternalInconsistency(String),

    /// The cell itself is malformed, *e.g.* the numbers of positions and species differ.
    InvalidCell(String),

    /// A Hall symbol could not be parsed.
    InvalidHallSymbol(String),
}

impl fmt::Display for SymmetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateLattice(msg) => write!(f, "Degenerate lattice: {msg}"),
            Self::ReductionFailed {
                algorithm,
                iterations,
            } => write!(
                f,
                "{algorithm} reduction did not converge after {iterations} iterations."
            ),
            Self::UnrecognizedSymmetry(msg) => write!(f, "Unrecognised symmetry: {msg}"),
            Self::InternalInconsistency(msg) => write!(f, "Internal inconsistency: {msg}"),
            Self::InvalidCell(msg) => write!(f, "Invalid cell: {msg}"),
            Self::InvalidHallSymbol(msg) => write!(f, "Invalid Hall symbol: {msg}"),
        }
    }
}

impl Error for SymmetryError {}
