//! # HP lattice protein folding
//!
//! A 2D hydrophobic-polar (HP) lattice model of protein folding, sampled
//! with single-chain Metropolis Monte Carlo or Replica Exchange Monte
//! Carlo (REMC).
//!
//! * start with [`HpSequence`](sequence/struct.HpSequence.html) to parse
//!   an `H`/`P` string
//! * [`Conformation`](conformation/struct.Conformation.html) is a
//!   self-avoiding placement of that sequence on the lattice; use
//!   [`energy`](energy/fn.energy.html) to score one
//! * [`moves`](moves/index.html) holds the VSHD and Pull move proposals
//!   shared by both drivers
//! * [`mc::run_mc`](mc/fn.run_mc.html) runs a single chain at fixed
//!   temperature; [`remc::run_remc`](remc/fn.run_remc.html) runs a ladder
//!   of replicas with periodic exchange sweeps
//!
//! Turning an amino-acid sequence into an HP string, and turning a
//! [`Conformation`] into a picture, are both left to external
//! collaborators -- this crate only does the lattice sampling.
//!
//! # Example: single-chain Metropolis sampling
//!
//! ```
//! use hp_ensembles::{HpSequence, mc::McConfig, mc::run_mc, moves::MoveMode};
//! use hp_ensembles::rand::SeedableRng;
//! use rand_pcg::Pcg64;
//! use std::convert::TryFrom;
//!
//! let seq = HpSequence::try_from("HPHPPHHPHPPHPHHPPHPH").unwrap();
//! let config = McConfig::new(2000, 1.0, MoveMode::Hybrid { rho: 0.5 }).unwrap();
//! let mut rng = Pcg64::seed_from_u64(2024);
//!
//! let outcome = run_mc(&seq, &config, &mut rng);
//! println!("best energy found: {}", outcome.best_energy);
//! ```
//!
//! # Example: replica exchange
//!
//! ```
//! use hp_ensembles::{HpSequence, remc::RemcConfig, remc::run_remc, moves::MoveMode};
//! use hp_ensembles::rand::SeedableRng;
//! use rand_pcg::Pcg64;
//! use std::convert::TryFrom;
//!
//! let seq = HpSequence::try_from("HHPPHHPPHH").unwrap();
//! let config = RemcConfig::new(2000, 8, 0.2, 2.0, 10, MoveMode::Vshd).unwrap();
//! let mut rng = Pcg64::seed_from_u64(7);
//!
//! let outcome = run_remc(&seq, &config, &mut rng);
//! println!("best energy across the ladder: {}", outcome.best_energy);
//! ```
//!
//! # Example: save and load a run's outcome
//! * only works if feature ```"serde_support"``` is enabled
//! * Note: ```"serde_support"``` is enabled by default
//! ```
//! use hp_ensembles::{HpSequence, mc::McConfig, mc::run_mc, moves::MoveMode};
//! use hp_ensembles::rand::SeedableRng;
//! use rand_pcg::Pcg64;
//! use std::convert::TryFrom;
//!
//! let seq = HpSequence::try_from("HPHPHPHP").unwrap();
//! let config = McConfig::new(200, 1.0, MoveMode::Vshd).unwrap();
//! let mut rng = Pcg64::seed_from_u64(1);
//! let outcome = run_mc(&seq, &config, &mut rng);
//!
//! #[cfg(feature = "serde_support")]
//! {
//!     let json = serde_json::to_string(&outcome).unwrap();
//!     let _round_tripped: hp_ensembles::mc::McOutcome = serde_json::from_str(&json).unwrap();
//! }
//! ```
#![deny(missing_docs, warnings)]
pub mod coord;
pub mod sequence;
pub mod conformation;
pub mod energy;
pub mod moves;
pub mod mc;
pub mod remc;

pub use coord::Coord;
pub use sequence::{HpSequence, Residue};
pub use conformation::Conformation;
pub use energy::energy;

pub use rand;
