//! # HP sequence
//! The two-letter hydrophobic/polar alphabet the lattice model folds.
//! Converting amino-acid sequences into this alphabet is an external
//! collaborator's job (see crate docs); this module only validates and
//! stores the already-converted HP string.

use std::convert::TryFrom;
use std::fmt;

#[cfg(feature = "serde_support")]
use serde::{Serialize, Deserialize};

/// A single residue: hydrophobic or polar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum Residue {
    /// Hydrophobic
    H,
    /// Polar
    P,
}

impl Residue {
    /// `true` for `Residue::H`.
    pub fn is_hydrophobic(self) -> bool {
        matches!(self, Residue::H)
    }
}

/// Things that can go wrong turning a string into an [`HpSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// sequence has fewer than 2 residues
    TooShort,
    /// encountered a character other than 'H'/'P' (case insensitive), at the given 0-indexed position
    InvalidSymbol(char, usize),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SequenceError::TooShort => write!(f, "HP sequence must contain at least 2 residues"),
            SequenceError::InvalidSymbol(c, pos) => {
                write!(f, "invalid HP symbol '{}' at position {}, expected 'H' or 'P'", c, pos)
            }
        }
    }
}

impl std::error::Error for SequenceError {}

/// An immutable HP sequence of length `>= 2`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct HpSequence {
    residues: Vec<Residue>,
}

impl HpSequence {
    /// Number of residues.
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Never empty by construction, but spelled out for clippy's sake.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Residue at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<Residue> {
        self.residues.get(index).copied()
    }

    /// Read-only view of the residues in chain order.
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }
}

impl TryFrom<&str> for HpSequence {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, SequenceError> {
        if s.len() < 2 {
            return Err(SequenceError::TooShort);
        }
        let mut residues = Vec::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            let residue = match c.to_ascii_uppercase() {
                'H' => Residue::H,
                'P' => Residue::P,
                other => return Err(SequenceError::InvalidSymbol(other, i)),
            };
            residues.push(residue);
        }
        if residues.len() < 2 {
            return Err(SequenceError::TooShort);
        }
        Ok(HpSequence { residues })
    }
}
