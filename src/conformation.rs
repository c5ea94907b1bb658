//! # Conformation
//! A chain placement on the lattice, with the connectivity and
//! self-avoidance invariants from the data model enforced at construction.

use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde_support")]
use serde::{Serialize, Deserialize};

use crate::coord::{manhattan, Coord};

/// Invariant violations a [`Conformation`] refuses to be constructed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConformationError {
    /// residues at the given 0-indexed position and its successor are not lattice neighbors
    NotConnected(usize),
    /// two residues occupy the same lattice cell
    NotSelfAvoiding,
}

impl fmt::Display for ConformationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConformationError::NotConnected(i) => {
                write!(f, "residues {} and {} are not lattice neighbors", i, i + 1)
            }
            ConformationError::NotSelfAvoiding => {
                write!(f, "two residues occupy the same lattice cell")
            }
        }
    }
}

impl std::error::Error for ConformationError {}

/// An ordered placement of `n` residues on the lattice.
///
/// Construction via [`Conformation::new`] is the only place both data-model
/// invariants (connectivity, self-avoidance) are checked from scratch; moves
/// that already re-derive a self-avoiding walk use
/// [`Conformation::from_checked`] to avoid a redundant `O(n^2)` rescan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Conformation {
    coords: Vec<Coord>,
}

impl Conformation {
    /// Validate and wrap `coords`.
    pub fn new(coords: Vec<Coord>) -> Result<Self, ConformationError> {
        for i in 0..coords.len().saturating_sub(1) {
            if manhattan(coords[i], coords[i + 1]) != 1 {
                return Err(ConformationError::NotConnected(i));
            }
        }
        let mut seen = HashMap::with_capacity(coords.len());
        for (i, &c) in coords.iter().enumerate() {
            if seen.insert(c, i).is_some() {
                return Err(ConformationError::NotSelfAvoiding);
            }
        }
        Ok(Conformation { coords })
    }

    /// Wrap `coords` without re-validating. Callers must have already
    /// established both invariants (e.g. via the move engine's own
    /// self-avoidance gate); this is a private constructor used exactly
    /// there.
    pub(crate) fn from_checked(coords: Vec<Coord>) -> Self {
        Conformation { coords }
    }

    /// The straight-line initial conformation `C[i] = (i, 0)`.
    pub fn line(n: usize) -> Self {
        let coords = (0..n as i32).map(|i| Coord::new(i, 0)).collect();
        Conformation::from_checked(coords)
    }

    /// Number of residues.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Never empty in practice (sequences are length `>= 2`), spelled out
    /// for clippy's sake.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Read-only view of the coordinates in residue order.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Coordinate of residue `index`.
    pub fn get(&self, index: usize) -> Coord {
        self.coords[index]
    }

    /// Build the occupancy map: lattice cell -> residue index. Rebuilt on
    /// demand rather than cached, so it stays trivially consistent with
    /// `self.coords` (see energy evaluator and move engine design notes).
    pub fn occupancy(&self) -> HashMap<Coord, usize> {
        self.coords
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i))
            .collect()
    }
}
