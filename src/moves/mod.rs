//! # Move engine
//! `attempt_move` is the single entry point used by both drivers: it
//! dispatches on [`MoveMode`] to the VSHD triplet, the Pull move, or a
//! hybrid of the two, and either returns a self-avoiding successor
//! conformation or `None` if no proposal could be found.

mod pull;
mod vshd;

use std::fmt;

use rand::Rng;

use crate::conformation::Conformation;

/// Which move kind(s) `attempt_move` should try.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveMode {
    /// Try the VSHD triplet (end, corner, crankshaft) only.
    Vshd,
    /// Try the Pull move only.
    Pull,
    /// With probability `rho`, try Pull first and fall through to VSHD on
    /// failure; otherwise try VSHD first and fall through to Pull.
    Hybrid {
        /// probability of trying Pull first, must be in `[0, 1]`
        rho: f64,
    },
}

/// Errors raised by the move engine itself.
///
/// Spec.md's "unknown mode is an error" clause is enforced by the type
/// system for anything other than `rho` out of range: [`MoveMode`] is a
/// closed enum, so there is no runtime representation of an "unknown"
/// variant to reject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveError {
    /// `rho` used in [`MoveMode::Hybrid`] is outside `[0, 1]`
    InvalidRho(f64),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MoveError::InvalidRho(rho) => {
                write!(f, "rho must be in [0, 1], got {}", rho)
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Attempt a single move. Returns `Ok(None)` if no valid proposal could be
/// found -- that is explicitly not an error (spec.md S7), and the caller
/// should record the step as a no-op and continue.
pub fn attempt_move(
    conf: &Conformation,
    mode: MoveMode,
    rng: &mut impl Rng,
) -> Result<Option<Conformation>, MoveError> {
    match mode {
        MoveMode::Vshd => Ok(vshd::attempt_vshd(conf, rng)),
        MoveMode::Pull => Ok(pull::attempt_pull(conf, rng)),
        MoveMode::Hybrid { rho } => {
            if !(0.0..=1.0).contains(&rho) {
                return Err(MoveError::InvalidRho(rho));
            }
            let try_pull_first = rng.gen::<f64>() < rho;
            if try_pull_first {
                if let Some(next) = pull::attempt_pull(conf, rng) {
                    return Ok(Some(next));
                }
                Ok(vshd::attempt_vshd(conf, rng))
            } else {
                if let Some(next) = vshd::attempt_vshd(conf, rng) {
                    return Ok(Some(next));
                }
                Ok(pull::attempt_pull(conf, rng))
            }
        }
    }
}
