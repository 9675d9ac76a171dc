//! Ordered collections of space-group operations.

use std::fmt;

use indexmap::IndexSet;
use itertools::Itertools;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::auxiliary::geometry::Tolerance;
use crate::symmetry::symmetry_operation::SymmetryOperation;
use crate::symmetry::SymmetryError;

#[cfg(test)]
#[path = "operation_set_tests.rs"]
mod operation_set_tests;

/// Factor by which the distance tolerance is relaxed when products of found operations are
/// compared against other found operations, as translation errors accumulate on composition.
pub const COMPOSITION_TOLERANCE_FACTOR: f64 = 3.0;

/// A structure holding an ordered set of space-group operations expressed in one basis.
///
/// The identity operation always comes first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperationSet {
    operations: Vec<SymmetryOperation>,
}

impl OperationSet {
    /// Constructs an operation set.
    #[must_use]
    pub fn new(operations: Vec<SymmetryOperation>) -> Self {
        Self { operations }
    }

    /// The operations.
    #[must_use]
    pub fn operations(&self) -> &[SymmetryOperation] {
        &self.operations
    }

    /// The number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the set contains no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// An iterator over the operations.
    pub fn iter(&self) -> std::slice::Iter<'_, SymmetryOperation> {
        self.operations.iter()
    }

    /// The translations of the operations with identity rotation part, in order.
    #[must_use]
    pub fn pure_translations(&self) -> Vec<Vector3<f64>> {
        self.operations
            .iter()
            .filter(|op| op.is_pure_translation())
            .map(|op| op.translation)
            .collect_vec()
    }

    /// The distinct rotation parts, in order of first appearance.
    #[must_use]
    pub fn rotations(&self) -> Vec<Matrix3<i32>> {
        self.operations
            .iter()
            .map(|op| op.rotation)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect_vec()
    }

    /// Locates an operation equivalent to `op` modulo lattice translations.
    #[must_use]
    pub fn find(
        &self,
        op: &SymmetryOperation,
        basis: &Matrix3<f64>,
        tol: &Tolerance,
    ) -> Option<usize> {
        self.operations
            .iter()
            .position(|other| other.equivalent_modulo_lattice(op, basis, tol))
    }

    /// Checks that the operations form a group modulo lattice translations: the identity is
    /// present, every inverse is present and the set is closed under composition.
    ///
    /// # Arguments
    ///
    /// * `basis` - The lattice basis in which the operations are expressed.
    /// * `tol` - The tolerance with which the operations were found.
    ///
    /// # Errors
    ///
    /// Errors with [`SymmetryError::InternalInconsistency`] if any group axiom fails.
    pub fn validate_group(&self, basis: &Matrix3<f64>, tol: &Tolerance) -> Result<(), SymmetryError> {
        let loose = tol.scaled(COMPOSITION_TOLERANCE_FACTOR);
        if self
            .find(&SymmetryOperation::identity(), basis, &loose)
            .is_none()
        {
            return Err(SymmetryError::InternalInconsistency(
                "the identity operation is missing".to_string(),
            ));
        }
        for op in &self.operations {
            let inv = op.inverse().ok_or_else(|| {
                SymmetryError::InternalInconsistency(format!(
                    "operation {op} has a non-unimodular rotation"
                ))
            })?;
            if self.find(&inv, basis, &loose).is_none() {
                return Err(SymmetryError::InternalInconsistency(format!(
                    "the inverse of operation {op} is missing"
                )));
            }
        }
        for (a, b) in self.operations.iter().cartesian_product(self.operations.iter()) {
            if self.find(&a.compose(b), basis, &loose).is_none() {
                return Err(SymmetryError::InternalInconsistency(format!(
                    "the product of operations {a} and {b} is missing"
                )));
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a OperationSet {
    type Item = &'a SymmetryOperation;
    type IntoIter = std::slice::Iter<'a, SymmetryOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}

impl fmt::Display for OperationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.operations.iter().enumerate() {
            writeln!(f, "{:>5}  {op}", i + 1)?;
        }
        Ok(())
    }
}
