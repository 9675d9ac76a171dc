//! Permutations of atoms induced by symmetry operations.

use std::collections::HashSet;
use std::fmt;
use std::ops::Mul;

use derive_builder::Builder;
use indexmap::IndexSet;
use num::integer::lcm;
use num_traits::{Inv, Pow};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "permutation_tests.rs"]
mod permutation_tests;

/// A structure to manage permutation actions of a finite set, such as the atoms of a cell under a
/// space-group operation.
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct Permutation {
    /// The rank of the permutation, *i.e.* the number of elements in the finite set on which the
    /// permutation acts.
    rank: usize,

    /// If the permutation is to act on an ordered sequence of $`n`$ integers,
    /// $`0, 1, \ldots, n - 1`$ where $`n`$ is [`Self::rank`], then this gives the result of the
    /// action. Atom `i` is sent to atom `image[i]`.
    #[builder(setter(custom))]
    image: Vec<usize>,

    #[builder(setter(skip), default = "self.calc_cycles()")]
    cycles: Vec<Vec<usize>>,
}

impl PermutationBuilder {
    fn image(&mut self, perm: &[usize]) -> &mut Self {
        self.image = Some(perm.to_vec());
        self
    }

    fn validate(&self) -> Result<(), String> {
        let rank = self.rank.ok_or("Permutation rank has not been set.")?;
        let image = self
            .image
            .as_ref()
            .ok_or("Permutation image has not been set.")?;
        if image.len() != rank {
            return Err(format!(
                "The permutation image `{image:?}` does not contain {rank} elements."
            ));
        }
        let distinct = image.iter().copied().collect::<HashSet<usize>>();
        if distinct.len() != rank || image.iter().any(|&i| i >= rank) {
            return Err(format!("`{image:?}` is not a bijection of 0..{rank}."));
        }
        Ok(())
    }

    fn calc_cycles(&self) -> Vec<Vec<usize>> {
        let rank = self.rank.unwrap_or_default();
        let image = self.image.clone().unwrap_or_default();
        if image.len() != rank {
            return vec![];
        }
        let mut remaining_indices = (0..rank).rev().collect::<IndexSet<usize>>();
        let mut cycles: Vec<Vec<usize>> = Vec::with_capacity(rank);
        while let Some(start) = remaining_indices.pop() {
            let mut cycle: Vec<usize> = vec![start];
            let mut idx = start;
            while image[idx] != start {
                idx = image[idx];
                if !remaining_indices.shift_remove(&idx) {
                    // Not a bijection; validation reports this.
                    return vec![];
                }
                cycle.push(idx);
            }
            cycles.push(cycle);
        }
        cycles.sort_by_key(|cycle| (!cycle.len(), cycle.clone()));
        cycles
    }
}

impl Permutation {
    /// Returns a builder to construct a new permutation.
    #[must_use]
    fn builder() -> PermutationBuilder {
        PermutationBuilder::default()
    }

    /// Constructs a permutation from its image, or `None` if `image` is not a bijection of
    /// $`0, 1, \ldots, n - 1`$.
    #[must_use]
    pub fn from_image(image: &[usize]) -> Option<Self> {
        Self::builder()
            .rank(image.len())
            .image(image)
            .build()
            .map_err(|err| log::debug!("{err}"))
            .ok()
    }

    /// Constructs a permutation from its disjoint cycles, or `None` if the cycles do not partition
    /// $`0, 1, \ldots, n - 1`$.
    #[must_use]
    pub fn from_cycles(cycles: &[Vec<usize>]) -> Option<Self> {
        let mut image_map = cycles
            .iter()
            .filter_map(|cycle| Some((*cycle.first()?, *cycle.last()?, cycle)))
            .flat_map(|(start, end, cycle)| {
                cycle
                    .windows(2)
                    .map(|pair| (pair[0], pair[1]))
                    .chain([(end, start)])
            })
            .collect::<Vec<(usize, usize)>>();
        image_map.sort_unstable();
        let image = image_map
            .into_iter()
            .map(|(_, img)| img)
            .collect::<Vec<usize>>();
        Self::from_image(&image)
    }

    /// Constructs the identity permutation of a given rank.
    #[must_use]
    pub fn identity(rank: usize) -> Self {
        Self {
            rank,
            image: (0..rank).collect(),
            cycles: (0..rank).map(|i| vec![i]).collect(),
        }
    }

    /// The rank of the permutation.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// The image of the permutation.
    #[must_use]
    pub fn image(&self) -> &[usize] {
        &self.image
    }

    /// Obtains the cycle representation of the permutation.
    #[must_use]
    pub fn cycles(&self) -> &[Vec<usize>] {
        &self.cycles
    }

    /// Obtains the pattern of the cycle representation of the permutation.
    #[must_use]
    pub fn cycle_pattern(&self) -> Vec<usize> {
        self.cycles
            .iter()
            .map(Vec::len)
            .collect::<Vec<usize>>()
    }

    /// The order of the permutation, *i.e.* the lowest common multiple of its cycle lengths.
    #[must_use]
    pub fn order(&self) -> usize {
        self.cycles.iter().map(Vec::len).fold(1, lcm)
    }

    /// Returns `true` if this permutation is the identity permutation for this rank.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.image.iter().enumerate().all(|(i, &img)| i == img)
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cycles = self
            .cycles
            .iter()
            .filter(|cycle| cycle.len() > 1)
            .map(|cycle| {
                format!(
                    "({})",
                    cycle
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" ")
                )
            })
            .collect::<String>();
        if cycles.is_empty() {
            write!(f, "()")
        } else {
            write!(f, "{cycles}")
        }
    }
}

// ---
// Mul
// ---
impl Mul<&'_ Permutation> for &Permutation {
    type Output = Permutation;

    /// Composes two permutations, applying `rhs` first.
    fn mul(self, rhs: &Permutation) -> Self::Output {
        assert_eq!(
            self.rank, rhs.rank,
            "The ranks of two multiplying permutations do not match."
        );
        let image = rhs
            .image
            .iter()
            .map(|&ri| self.image[ri])
            .collect::<Vec<usize>>();
        Permutation::from_image(&image)
            .expect("The composition of two bijections must be a bijection.")
    }
}

impl Mul<&'_ Permutation> for Permutation {
    type Output = Permutation;

    fn mul(self, rhs: &Permutation) -> Self::Output {
        &self * rhs
    }
}

impl Mul<Permutation> for Permutation {
    type Output = Permutation;

    fn mul(self, rhs: Permutation) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<Permutation> for &Permutation {
    type Output = Permutation;

    fn mul(self, rhs: Permutation) -> Self::Output {
        self * &rhs
    }
}

// ---
// Inv
// ---
impl Inv for &Permutation {
    type Output = Permutation;

    fn inv(self) -> Self::Output {
        let mut image_inv = vec![0; self.rank];
        for (i, &img) in self.image.iter().enumerate() {
            image_inv[img] = i;
        }
        Permutation::from_image(&image_inv)
            .expect("The inverse of a bijection must be a bijection.")
    }
}

impl Inv for Permutation {
    type Output = Permutation;

    fn inv(self) -> Self::Output {
        (&self).inv()
    }
}

// ---
// Pow
// ---
impl Pow<i32> for &Permutation {
    type Output = Permutation;

    fn pow(self, rhs: i32) -> Self::Output {
        let base = if rhs < 0 { self.inv() } else { self.clone() };
        (0..rhs.unsigned_abs()).fold(Permutation::identity(self.rank), |acc, _| &base * acc)
    }
}

impl Pow<i32> for Permutation {
    type Output = Permutation;

    fn pow(self, rhs: i32) -> Self::Output {
        (&self).pow(rhs)
    }
}
