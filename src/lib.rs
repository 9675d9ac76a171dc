//! # crystsym: A Program for Crystallographic Space-Group Symmetry
//!
//! crystsym determines the crystallographic symmetry of a periodic atomic structure. Given a
//! lattice, a set of fractional atomic positions and their species, it finds
//! - the complete set of symmetry operations (rotations with their fractional translations) that
//!   map the structure onto itself within a numerical tolerance,
//! - the primitive cell,
//! - the point group, crystal system and Bravais lattice,
//! - the space-group type with its international and Hall symbols, matched against a reference
//!   table of all 230 types in their standard settings,
//! - equivalent atoms, crystallographic orbits and Wyckoff positions, and
//! - a refined (symmetrised) cell together with the standardised conventional cell.
//!
//! Collinear magnetic moments can additionally be taken into account, and the lattice alone can
//! be classified without any atomic decoration.
//!
//! ## Getting started
//!
//! The main entry point is [`symmetry::dataset::get_symmetry_dataset`]:
//!
//! ```
//! use crystsym::auxiliary::cell::Cell;
//! use crystsym::auxiliary::geometry::Tolerance;
//! use crystsym::symmetry::dataset::get_symmetry_dataset;
//!
//! let cell = Cell::from_arrays(
//!     [[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]],
//!     &[[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]],
//!     &[0, 1],
//! )
//! .unwrap();
//! let dataset = get_symmetry_dataset(&cell, &Tolerance::new(1e-5)).unwrap();
//! assert_eq!(dataset.number, 221);
//! assert_eq!(dataset.international, "Pm-3m");
//! ```
//!
//! The secondary entry point [`symmetry::dataset::get_lattice_symmetry`] classifies a bare
//! lattice. The reference table can be queried through the functions in [`database`].
//!
//! For usage of the compiled `crystsym` binary, run `crystsym --help`. The binary reads a YAML
//! configuration file describing the cell and the detection parameters.
//!
//! ## License
//!
//! GNU Lesser General Public License v3.0.

pub mod auxiliary;
pub mod database;
pub mod drivers;
pub mod interfaces;
pub mod io;
pub mod lattice;
pub mod permutation;
pub mod symmetry;
