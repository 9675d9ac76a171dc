//! Periodic lattices and crystal cells.

use std::fmt;

use counter::Counter;
use itertools::Itertools;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::auxiliary::geometry::{to_f64_matrix, wrap_fractional};
use crate::io::format::table_rule;
use crate::symmetry::SymmetryError;

#[cfg(test)]
#[path = "cell_tests.rs"]
mod cell_tests;

/// Relative volume $`V/(abc)`$ below which a lattice is considered degenerate.
const DEGENERACY_THRESHOLD: f64 = 1e-6;

// ==================
// Struct definitions
// ==================

/// A structure representing a three-dimensional lattice.
///
/// The basis vectors $`\mathbf{a}`$, $`\mathbf{b}`$, $`\mathbf{c}`$ are stored as the *columns*
/// of [`Self::basis`], so that a fractional coordinate vector $`\mathbf{x}`$ corresponds to the
/// Cartesian vector $`\mathbf{L}\mathbf{x}`$.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    basis: Matrix3<f64>,
}

impl Lattice {
    /// Constructs a lattice from its basis vectors written row by row, *i.e.* `rows[0]` is
    /// $`\mathbf{a}`$, `rows[1]` is $`\mathbf{b}`$ and `rows[2]` is $`\mathbf{c}`$.
    #[must_use]
    pub fn new(rows: [[f64; 3]; 3]) -> Self {
        Self {
            basis: Matrix3::from_columns(&[
                Vector3::from(rows[0]),
                Vector3::from(rows[1]),
                Vector3::from(rows[2]),
            ]),
        }
    }

    /// Constructs a lattice from a matrix whose columns are the basis vectors.
    #[must_use]
    pub fn from_basis(basis: Matrix3<f64>) -> Self {
        Self { basis }
    }

    /// Constructs a lattice from its six parameters in the canonical orientation with
    /// $`\mathbf{a}`$ along $`x`$ and $`\mathbf{b}`$ in the $`xy`$-plane.
    ///
    /// # Arguments
    ///
    /// * `lengths` - The lengths $`a`$, $`b`$, $`c`$.
    /// * `angles` - The angles $`\alpha`$, $`\beta`$, $`\gamma`$ in degrees.
    #[must_use]
    pub fn from_parameters(lengths: [f64; 3], angles: [f64; 3]) -> Self {
        let [a, b, c] = lengths;
        let [alpha, beta, gamma] = angles.map(f64::to_radians);
        let cy = (alpha.cos() - beta.cos() * gamma.cos()) / gamma.sin();
        let cz = (1.0 - beta.cos().powi(2) - cy.powi(2)).max(0.0).sqrt();
        Self::from_basis(Matrix3::from_columns(&[
            Vector3::new(a, 0.0, 0.0),
            Vector3::new(b * gamma.cos(), b * gamma.sin(), 0.0),
            Vector3::new(c * beta.cos(), c * cy, c * cz),
        ]))
    }

    /// The basis matrix with the basis vectors as columns.
    #[must_use]
    pub fn basis(&self) -> &Matrix3<f64> {
        &self.basis
    }

    /// The basis vector with index `i` (0 for $`\mathbf{a}`$, 1 for $`\mathbf{b}`$, 2 for
    /// $`\mathbf{c}`$).
    #[must_use]
    pub fn vector(&self, i: usize) -> Vector3<f64> {
        self.basis.column(i).into_owned()
    }

    /// The lengths $`a`$, $`b`$, $`c`$.
    #[must_use]
    pub fn lengths(&self) -> [f64; 3] {
        [0, 1, 2].map(|i| self.basis.column(i).norm())
    }

    /// The angles $`\alpha`$, $`\beta`$, $`\gamma`$ in degrees.
    #[must_use]
    pub fn angles(&self) -> [f64; 3] {
        let angle = |i: usize, j: usize| {
            let vi = self.vector(i);
            let vj = self.vector(j);
            (vi.dot(&vj) / (vi.norm() * vj.norm()))
                .clamp(-1.0, 1.0)
                .acos()
                .to_degrees()
        };
        [angle(1, 2), angle(0, 2), angle(0, 1)]
    }

    /// The metric tensor $`\mathbf{G} = \mathbf{L}^{\mathrm{T}}\mathbf{L}`$.
    #[must_use]
    pub fn metric(&self) -> Matrix3<f64> {
        self.basis.transpose() * self.basis
    }

    /// The signed determinant of the basis matrix.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.basis.determinant()
    }

    /// The cell volume.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.determinant().abs()
    }

    /// Converts fractional coordinates into Cartesian coordinates.
    #[must_use]
    pub fn to_cartesian(&self, frac: &Vector3<f64>) -> Vector3<f64> {
        self.basis * frac
    }

    /// Converts Cartesian coordinates into fractional coordinates, or `None` if the basis is
    /// singular.
    #[must_use]
    pub fn to_fractional(&self, cart: &Vector3<f64>) -> Option<Vector3<f64>> {
        self.basis.try_inverse().map(|inv| inv * cart)
    }

    /// Returns the lattice spanned by $`\mathbf{L}\mathbf{M}`$.
    #[must_use]
    pub fn transformed(&self, transformation: &Matrix3<f64>) -> Self {
        Self::from_basis(self.basis * transformation)
    }

    /// Returns the lattice spanned by $`\mathbf{L}\mathbf{M}`$ for an integer $`\mathbf{M}`$.
    #[must_use]
    pub fn transformed_integer(&self, transformation: &Matrix3<i32>) -> Self {
        self.transformed(&to_f64_matrix(transformation))
    }

    /// Returns the lattice rotated rigidly by the Cartesian matrix `rotation`.
    #[must_use]
    pub fn rotated(&self, rotation: &Matrix3<f64>) -> Self {
        Self::from_basis(rotation * self.basis)
    }

    /// Checks that the lattice is not degenerate.
    ///
    /// # Errors
    ///
    /// Errors with [`SymmetryError::DegenerateLattice`] if the basis vectors are (nearly)
    /// linearly dependent or any of them is (nearly) zero.
    pub fn validate(&self) -> Result<(), SymmetryError> {
        let [a, b, c] = self.lengths();
        if !self.basis.iter().all(|x| x.is_finite()) {
            return Err(SymmetryError::DegenerateLattice(
                "lattice basis contains non-finite entries".to_string(),
            ));
        }
        let length_product = a * b * c;
        if length_product <= f64::EPSILON
            || self.volume() / length_product < DEGENERACY_THRESHOLD
        {
            return Err(SymmetryError::DegenerateLattice(format!(
                "basis vectors with lengths ({a:.6}, {b:.6}, {c:.6}) span a volume of {:.3e}",
                self.volume()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, i) in [("a", 0), ("b", 1), ("c", 2)] {
            let v = self.vector(i);
            writeln!(f, "  {label} = ({:+12.7}, {:+12.7}, {:+12.7})", v[0], v[1], v[2])?;
        }
        let [a, b, c] = self.lengths();
        let [alpha, beta, gamma] = self.angles();
        write!(
            f,
            "  Lengths: {a:.6}, {b:.6}, {c:.6}; angles: {alpha:.4}°, {beta:.4}°, {gamma:.4}°"
        )
    }
}

/// A structure representing a crystal: a lattice decorated with atoms in fractional coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    lattice: Lattice,
    positions: Vec<Vector3<f64>>,
    types: Vec<usize>,
}

impl Cell {
    /// Constructs and validates a new cell.
    ///
    /// # Arguments
    ///
    /// * `lattice` - The lattice.
    /// * `positions` - The fractional positions of the atoms.
    /// * `types` - The species numbers of the atoms, parallel to `positions`.
    ///
    /// # Errors
    ///
    /// Errors if the lattice is degenerate, if `positions` and `types` differ in length, if the
    /// cell is empty, or if any position is not finite.
    pub fn new(
        lattice: Lattice,
        positions: Vec<Vector3<f64>>,
        types: Vec<usize>,
    ) -> Result<Self, SymmetryError> {
        lattice.validate()?;
        if positions.len() != types.len() {
            return Err(SymmetryError::InvalidCell(format!(
                "{} positions but {} species",
                positions.len(),
                types.len()
            )));
        }
        if positions.is_empty() {
            return Err(SymmetryError::InvalidCell(
                "the cell contains no atoms".to_string(),
            ));
        }
        if let Some(bad) = positions
            .iter()
            .position(|pos| !pos.iter().all(|x| x.is_finite()))
        {
            return Err(SymmetryError::InvalidCell(format!(
                "position of atom {bad} is not finite"
            )));
        }
        Ok(Self {
            lattice,
            positions,
            types,
        })
    }

    /// Constructs a new cell from plain arrays, with the lattice vectors given row by row.
    ///
    /// # Errors
    ///
    /// Errors under the same conditions as [`Self::new`].
    pub fn from_arrays(
        lattice: [[f64; 3]; 3],
        positions: &[[f64; 3]],
        types: &[usize],
    ) -> Result<Self, SymmetryError> {
        Self::new(
            Lattice::new(lattice),
            positions.iter().map(|pos| Vector3::from(*pos)).collect_vec(),
            types.to_vec(),
        )
    }

    /// The lattice.
    #[must_use]
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The fractional positions.
    #[must_use]
    pub fn positions(&self) -> &[Vector3<f64>] {
        &self.positions
    }

    /// The species numbers.
    #[must_use]
    pub fn types(&self) -> &[usize] {
        &self.types
    }

    /// The number of atoms.
    #[must_use]
    pub fn n_atoms(&self) -> usize {
        self.positions.len()
    }

    /// The number of atoms of each species.
    #[must_use]
    pub fn species_counts(&self) -> Counter<usize> {
        self.types.iter().copied().collect::<Counter<_>>()
    }

    /// The species with the fewest atoms, ties broken by the smaller species number.
    #[must_use]
    pub fn least_populated_species(&self) -> usize {
        self.species_counts()
            .into_iter()
            .min_by_key(|&(species, count)| (count, species))
            .map(|(species, _)| species)
            .unwrap_or_default()
    }

    /// Returns a copy of this cell with all positions brought into $`[0, 1)`$.
    #[must_use]
    pub fn wrapped(&self) -> Self {
        Self {
            lattice: self.lattice.clone(),
            positions: self.positions.iter().map(wrap_fractional).collect_vec(),
            types: self.types.clone(),
        }
    }

    /// Re-expresses this cell in the basis $`\mathbf{L}\mathbf{M}`$ for a unimodular
    /// $`\mathbf{M}`$, wrapping the transformed positions into the new unit cell.
    ///
    /// # Errors
    ///
    /// Errors if `transformation` is singular.
    pub fn change_basis(&self, transformation: &Matrix3<f64>) -> Result<Self, SymmetryError> {
        let inv = transformation.try_inverse().ok_or_else(|| {
            SymmetryError::DegenerateLattice("singular basis transformation".to_string())
        })?;
        Self::new(
            self.lattice.transformed(transformation),
            self.positions
                .iter()
                .map(|pos| wrap_fractional(&(inv * pos)))
                .collect_vec(),
            self.types.clone(),
        )
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lattice:")?;
        writeln!(f, "{}", self.lattice)?;
        writeln!(f, "{}", table_rule(52))?;
        writeln!(f, " {:>5}  {:>7}  {:>10}  {:>10}  {:>10}", "#", "Species", "x", "y", "z")?;
        writeln!(f, "{}", table_rule(52))?;
        for (i, (pos, species)) in self.positions.iter().zip(self.types.iter()).enumerate() {
            writeln!(
                f,
                " {i:>5}  {species:>7}  {:>10.6}  {:>10.6}  {:>10.6}",
                pos[0], pos[1], pos[2]
            )?;
        }
        write!(f, "{}", table_rule(52))
    }
}
