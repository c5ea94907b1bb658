//! # Replica Exchange MC driver
//! A ladder of [`Replica`]s at a linearly spaced range of temperatures,
//! each sampled independently by the Metropolis driver between periodic
//! exchange sweeps that swap conformations between neighboring replicas.

use std::fmt;

use rand::Rng;

use crate::conformation::Conformation;
use crate::energy::energy;
use crate::mc::MAX_STEPS;
use crate::moves::{attempt_move, MoveMode};
use crate::sequence::HpSequence;

/// Parameter errors for [`RemcConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemcError {
    /// `steps == 0`
    NonPositiveSteps,
    /// `tmin <= 0`, `tmax <= 0`, or `tmin >= tmax`
    InvalidTemperatureRange,
    /// fewer than 2 replicas requested
    TooFewReplicas,
    /// `exchange_every == 0`
    NonPositiveExchangeInterval,
    /// `rho` (only meaningful for [`MoveMode::Hybrid`]) outside `[0, 1]`
    InvalidRho(f64),
}

impl fmt::Display for RemcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RemcError::NonPositiveSteps => write!(f, "steps must be positive"),
            RemcError::InvalidTemperatureRange => {
                write!(f, "temperature range must satisfy 0 < tmin < tmax")
            }
            RemcError::TooFewReplicas => write!(f, "at least 2 replicas are required"),
            RemcError::NonPositiveExchangeInterval => {
                write!(f, "exchange_every must be positive")
            }
            RemcError::InvalidRho(rho) => write!(f, "rho must be in [0, 1], got {}", rho),
        }
    }
}

impl std::error::Error for RemcError {}

/// One rung of the temperature ladder.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct Replica {
    /// this replica's current conformation
    pub coords: Conformation,
    /// `energy(coords, sequence)`, kept alongside to avoid recomputing it
    pub energy: i64,
    /// this replica's fixed rung temperature
    pub temperature: f64,
}

/// Validated configuration for [`run_remc`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemcConfig {
    steps: usize,
    n_replicas: usize,
    tmin: f64,
    tmax: f64,
    exchange_every: usize,
    move_mode: MoveMode,
}

impl RemcConfig {
    /// Build a configuration, clamping `steps` to [`MAX_STEPS`] and
    /// validating the replica count, temperature range, exchange interval
    /// and (for [`MoveMode::Hybrid`]) `rho`.
    pub fn new(
        steps: usize,
        n_replicas: usize,
        tmin: f64,
        tmax: f64,
        exchange_every: usize,
        move_mode: MoveMode,
    ) -> Result<Self, RemcError> {
        if steps == 0 {
            return Err(RemcError::NonPositiveSteps);
        }
        if n_replicas < 2 {
            return Err(RemcError::TooFewReplicas);
        }
        if !(tmin > 0.0) || !(tmax > 0.0) || tmin >= tmax {
            return Err(RemcError::InvalidTemperatureRange);
        }
        if exchange_every == 0 {
            return Err(RemcError::NonPositiveExchangeInterval);
        }
        if let MoveMode::Hybrid { rho } = move_mode {
            if !(0.0..=1.0).contains(&rho) {
                return Err(RemcError::InvalidRho(rho));
            }
        }
        Ok(RemcConfig {
            steps: steps.min(MAX_STEPS),
            n_replicas,
            tmin,
            tmax,
            exchange_every,
            move_mode,
        })
    }

    /// Linearly spaced ladder `T_r = tmin + r * (tmax - tmin) / (n - 1)`.
    fn ladder(&self) -> Vec<f64> {
        let n = self.n_replicas;
        (0..n)
            .map(|r| self.tmin + r as f64 * (self.tmax - self.tmin) / (n - 1) as f64)
            .collect()
    }
}

/// Return structure of [`run_remc`], matching spec.md S6's "both drivers"
/// table (`final_coords`, `best_coords`, `energies`, `best_energies`,
/// `best_energy`), plus two fields specific to the replica ladder.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct RemcOutcome {
    /// the coldest replica's conformation, or the best-ever conformation
    /// if it strictly improves on the coldest replica's final energy
    pub final_coords: Conformation,
    /// lowest-energy conformation observed across all replicas and steps
    pub best_coords: Conformation,
    /// current energy of the reference replica (ladder slot 0, fixed at
    /// `tmin`) after each step, before that step's exchange sweep
    pub energies: Vec<i64>,
    /// running global best-so-far energy after each step, same length as
    /// `energies`
    pub best_energies: Vec<i64>,
    /// `best_energies.last()`, kept alongside for convenience
    pub best_energy: i64,
    /// each replica's final energy, ordered by rung (coldest first)
    pub replica_energies: Vec<i64>,
    /// fraction of attempted neighbor-pair exchanges that were accepted
    pub exchange_acceptance_rate: f64,
}

/// `min(1, exp(-delta_e / T))`, accepting unconditionally when
/// `delta_e <= 0`. Shares the teacher's acceptance-probability coding
/// idiom with [`crate::mc::run_mc`].
fn metropolis_accept(delta_e: i64, temperature: f64, rng: &mut impl Rng) -> bool {
    if delta_e <= 0 {
        return true;
    }
    let t = temperature.max(1e-12);
    let a_prob = (-(delta_e as f64) / t).exp();
    rng.gen::<f64>() < a_prob
}

/// `min(1, exp((1/Tj - 1/Ti) * (Ei - Ej)))`: the REMC replica-swap
/// acceptance rule.
fn exchange_accept(ti: f64, tj: f64, ei: i64, ej: i64, rng: &mut impl Rng) -> bool {
    let exponent = (1.0 / tj - 1.0 / ti) * (ei - ej) as f64;
    if exponent >= 0.0 {
        return true;
    }
    rng.gen::<f64>() < exponent.exp()
}

/// Starting index of the `sweep_number`-th exchange sweep (1-indexed):
/// `0` for the even-indexed pairs `(0,1),(2,3),...`, `1` for the
/// odd-indexed pairs `(1,2),(3,4),...`. Sweep 1 always starts at 0, per
/// spec.md §4.5 step 3 and `original_source/remc.py`'s `even = True`
/// before its first sweep.
fn exchange_start_parity(sweep_number: usize) -> usize {
    1 - (sweep_number % 2)
}

/// Run the replica-exchange driver. All replicas start from the
/// straight-line initial conformation.
pub fn run_remc(hp_seq: &HpSequence, config: &RemcConfig, rng: &mut impl Rng) -> RemcOutcome {
    let temperatures = config.ladder();
    let mut replicas: Vec<Replica> = temperatures
        .iter()
        .map(|&t| {
            let coords = Conformation::line(hp_seq.len());
            let e = energy(&coords, hp_seq);
            Replica {
                coords,
                energy: e,
                temperature: t,
            }
        })
        .collect();

    let mut best_coords = replicas[0].coords.clone();
    let mut best_energy = replicas[0].energy;
    for r in &replicas {
        if r.energy < best_energy {
            best_energy = r.energy;
            best_coords = r.coords.clone();
        }
    }

    let mut exchange_attempts = 0u64;
    let mut exchange_accepted = 0u64;

    let mut energies = Vec::with_capacity(config.steps);
    let mut best_energies = Vec::with_capacity(config.steps);

    for step in 0..config.steps {
        for replica in &mut replicas {
            let proposal = attempt_move(&replica.coords, config.move_mode, rng)
                .expect("RemcConfig validates rho at construction");
            if let Some(candidate) = proposal {
                let candidate_e = energy(&candidate, hp_seq);
                if metropolis_accept(candidate_e - replica.energy, replica.temperature, rng) {
                    replica.coords = candidate;
                    replica.energy = candidate_e;
                    if replica.energy < best_energy {
                        best_energy = replica.energy;
                        best_coords = replica.coords.clone();
                    }
                }
            }
        }

        energies.push(replicas[0].energy);
        best_energies.push(best_energy);

        if (step + 1) % config.exchange_every == 0 {
            let sweep_number = (step + 1) / config.exchange_every;
            let mut i = exchange_start_parity(sweep_number);
            while i + 1 < replicas.len() {
                exchange_attempts += 1;
                let (ti, ei) = (replicas[i].temperature, replicas[i].energy);
                let (tj, ej) = (replicas[i + 1].temperature, replicas[i + 1].energy);
                if exchange_accept(ti, tj, ei, ej, rng) {
                    // swap conformations and energies only; each ladder rung
                    // keeps its own fixed temperature.
                    let (left, right) = replicas.split_at_mut(i + 1);
                    std::mem::swap(&mut left[i].coords, &mut right[0].coords);
                    std::mem::swap(&mut left[i].energy, &mut right[0].energy);
                    exchange_accepted += 1;
                }
                i += 2;
            }
        }
    }

    let coldest = replicas
        .iter()
        .min_by(|a, b| a.temperature.partial_cmp(&b.temperature).unwrap())
        .expect("n_replicas >= 2");

    let final_coords = if best_energy < coldest.energy {
        best_coords.clone()
    } else {
        coldest.coords.clone()
    };

    let exchange_acceptance_rate = if exchange_attempts == 0 {
        0.0
    } else {
        exchange_accepted as f64 / exchange_attempts as f64
    };

    RemcOutcome {
        final_coords,
        best_coords,
        energies,
        best_energies,
        best_energy,
        replica_energies: replicas.iter().map(|r| r.energy).collect(),
        exchange_acceptance_rate,
    }
}
