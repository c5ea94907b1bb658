//! # Metropolis MC driver
//! A single chain sampled at fixed temperature.

use std::fmt;

use rand::Rng;

use crate::conformation::Conformation;
use crate::energy::energy;
use crate::moves::{attempt_move, MoveError, MoveMode};
use crate::sequence::HpSequence;

/// Hard upper bound on the number of steps any single run may take,
/// regardless of what the caller asks for (spec.md S4.4 / S9).
pub const MAX_STEPS: usize = 10_000;

/// Acceptance probabilities are computed against a temperature floor to
/// avoid dividing by zero for `T` arbitrarily close to zero.
const TEMPERATURE_FLOOR: f64 = 1e-12;

/// Parameter errors for [`McConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum McError {
    /// `steps == 0`
    NonPositiveSteps,
    /// `temperature <= 0`
    NonPositiveTemperature,
    /// `rho` (only meaningful for [`MoveMode::Hybrid`]) outside `[0, 1]`
    InvalidRho(f64),
}

impl fmt::Display for McError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            McError::NonPositiveSteps => write!(f, "steps must be positive"),
            McError::NonPositiveTemperature => write!(f, "temperature must be positive"),
            McError::InvalidRho(rho) => write!(f, "rho must be in [0, 1], got {}", rho),
        }
    }
}

impl std::error::Error for McError {}

impl From<MoveError> for McError {
    fn from(e: MoveError) -> Self {
        match e {
            MoveError::InvalidRho(rho) => McError::InvalidRho(rho),
        }
    }
}

/// Validated configuration for [`run_mc`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct McConfig {
    steps: usize,
    temperature: f64,
    move_mode: MoveMode,
}

impl McConfig {
    /// Build a configuration, clamping `steps` to [`MAX_STEPS`] and
    /// validating `temperature` and (for [`MoveMode::Hybrid`]) `rho`.
    pub fn new(steps: usize, temperature: f64, move_mode: MoveMode) -> Result<Self, McError> {
        if steps == 0 {
            return Err(McError::NonPositiveSteps);
        }
        if !(temperature > 0.0) {
            return Err(McError::NonPositiveTemperature);
        }
        if let MoveMode::Hybrid { rho } = move_mode {
            if !(0.0..=1.0).contains(&rho) {
                return Err(McError::InvalidRho(rho));
            }
        }
        Ok(McConfig {
            steps: steps.min(MAX_STEPS),
            temperature,
            move_mode,
        })
    }

    /// Effective step count after clamping.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

/// Return structure of [`run_mc`], matching spec.md S6's table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct McOutcome {
    /// conformation after the last step
    pub final_coords: Conformation,
    /// lowest-energy conformation observed during the run
    pub best_coords: Conformation,
    /// energy after each step, in order
    pub energies: Vec<i64>,
    /// running best energy after each step, in order
    pub best_energies: Vec<i64>,
    /// `best_energies.last()`, kept alongside for convenience
    pub best_energy: i64,
}

/// `min(1, exp(-delta_e / T))`, accepting unconditionally when
/// `delta_e <= 0`.
fn metropolis_accept(delta_e: i64, temperature: f64, rng: &mut impl Rng) -> bool {
    if delta_e <= 0 {
        return true;
    }
    let t = temperature.max(TEMPERATURE_FLOOR);
    let a_prob = (-(delta_e as f64) / t).exp();
    rng.gen::<f64>() < a_prob
}

/// Run the single-chain Metropolis driver from the straight-line initial
/// conformation.
pub fn run_mc(hp_seq: &HpSequence, config: &McConfig, rng: &mut impl Rng) -> McOutcome {
    let mut conf = Conformation::line(hp_seq.len());
    let mut e = energy(&conf, hp_seq);

    let mut best_conf = conf.clone();
    let mut best_e = e;

    let mut energies = Vec::with_capacity(config.steps);
    let mut best_energies = Vec::with_capacity(config.steps);

    for _ in 0..config.steps {
        let proposal = attempt_move(&conf, config.move_mode, rng)
            .expect("McConfig validates rho at construction");

        if let Some(candidate) = proposal {
            let candidate_e = energy(&candidate, hp_seq);
            if metropolis_accept(candidate_e - e, config.temperature, rng) {
                conf = candidate;
                e = candidate_e;
                if e < best_e {
                    best_e = e;
                    best_conf = conf.clone();
                }
            }
        }

        energies.push(e);
        best_energies.push(best_e);
    }

    McOutcome {
        final_coords: conf,
        best_coords: best_conf,
        energies,
        best_energies,
        best_energy: best_e,
    }
}
