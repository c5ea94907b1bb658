use std::convert::TryFrom;

use hp_ensembles::coord::is_self_avoiding;
use hp_ensembles::mc::{run_mc, McConfig, McError};
use hp_ensembles::moves::MoveMode;
use hp_ensembles::HpSequence;
use rand::SeedableRng;
use rand_pcg::Pcg64;

#[cfg(feature = "serde_support")]
use serde_json;

#[test]
fn rejects_empty_sequence_via_sequence_construction() {
    assert!(HpSequence::try_from("").is_err());
}

#[test]
fn scenario_s1_minimal_chain_one_step() {
    // Spec scenario S1: the shortest legal sequence, one Monte Carlo step.
    let seq = HpSequence::try_from("HH").unwrap();
    let config = McConfig::new(1, 1.0, MoveMode::Vshd).unwrap();
    let mut rng = Pcg64::seed_from_u64(1);
    let outcome = run_mc(&seq, &config, &mut rng);

    assert_eq!(outcome.energies.len(), 1);
    assert!(is_self_avoiding(outcome.final_coords.coords()));
    assert!(is_self_avoiding(outcome.best_coords.coords()));
    // "HH" has no non-consecutive contact possible, energy is always 0.
    assert_eq!(outcome.best_energy, 0);
}

#[test]
fn zero_temperature_is_rejected_rather_than_dividing_by_zero() {
    assert_eq!(
        McConfig::new(10, 0.0, MoveMode::Vshd).unwrap_err(),
        McError::NonPositiveTemperature
    );
}

#[test]
fn best_energy_never_exceeds_final_energy_trace_minimum() {
    let seq = HpSequence::try_from("HPPHHPPHPHHPHPPHPHPH").unwrap();
    let config = McConfig::new(3000, 1.2, MoveMode::Hybrid { rho: 0.5 }).unwrap();
    let mut rng = Pcg64::seed_from_u64(4242);
    let outcome = run_mc(&seq, &config, &mut rng);

    let trace_min = *outcome.energies.iter().min().unwrap();
    assert!(outcome.best_energy <= trace_min);
    assert!(is_self_avoiding(outcome.best_coords.coords()));
    assert!(is_self_avoiding(outcome.final_coords.coords()));
}

#[test]
fn lower_temperature_drifts_toward_lower_energy_on_average() {
    // Not a strict inequality (stochastic), but a long cold run should not
    // do worse than a long hot run on a sequence with real H-H contacts to
    // find, for a fixed seed.
    let seq = HpSequence::try_from("HPHPPHHPHPPHPHHPPHPH").unwrap();

    let cold = McConfig::new(4000, 0.3, MoveMode::Hybrid { rho: 0.5 }).unwrap();
    let mut rng_cold = Pcg64::seed_from_u64(9001);
    let cold_outcome = run_mc(&seq, &cold, &mut rng_cold);

    let hot = McConfig::new(4000, 5.0, MoveMode::Hybrid { rho: 0.5 }).unwrap();
    let mut rng_hot = Pcg64::seed_from_u64(9001);
    let hot_outcome = run_mc(&seq, &hot, &mut rng_hot);

    assert!(cold_outcome.best_energy <= hot_outcome.best_energy);
}

#[cfg(feature = "serde_support")]
#[test]
fn serde_json_round_trip_of_outcome() {
    let seq = HpSequence::try_from("HPHPHPHP").unwrap();
    let config = McConfig::new(100, 1.0, MoveMode::Vshd).unwrap();
    let mut rng = Pcg64::seed_from_u64(6);
    let outcome = run_mc(&seq, &config, &mut rng);

    let serialized = serde_json::to_string(&outcome).unwrap();
    let round_tripped: hp_ensembles::mc::McOutcome = serde_json::from_str(&serialized).unwrap();
    assert_eq!(outcome, round_tripped);
}
