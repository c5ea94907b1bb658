//! # Energy evaluator
//! Counts non-adjacent H-H lattice contacts over a conformation's
//! occupancy map.

use crate::conformation::Conformation;
use crate::coord::neighbours4;
use crate::sequence::{HpSequence, Residue};

/// `E(C, S)`: the negative count of topological H-H contacts, i.e. pairs
/// `(i, j)` with `i < j`, `j != i + 1`, `S[i] = S[j] = H` and `C[i]`, `C[j]`
/// lattice-adjacent.
///
/// Kept as a free function of `(&Conformation, &HpSequence)` rather than a
/// method, so it stays usable as a pure oracle in tests regardless of how
/// callers cache or mutate their own state.
pub fn energy(conformation: &Conformation, sequence: &HpSequence) -> i64 {
    debug_assert_eq!(conformation.len(), sequence.len());
    let occupancy = conformation.occupancy();
    let mut e: i64 = 0;
    for (i, &p) in conformation.coords().iter().enumerate() {
        if sequence.get(i) != Some(Residue::H) {
            continue;
        }
        for nb in neighbours4(p) {
            let j = match occupancy.get(&nb) {
                Some(&j) => j,
                None => continue,
            };
            if j <= i {
                continue;
            }
            if j == i + 1 {
                continue;
            }
            if sequence.get(j) == Some(Residue::H) {
                e -= 1;
            }
        }
    }
    e
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;
    use std::convert::TryFrom;

    #[test]
    fn line_conformation_has_zero_energy() {
        for seq_str in ["HHHH", "HPHP", "PPPP", "HPHPHPHP"] {
            let seq = HpSequence::try_from(seq_str).unwrap();
            let conf = Conformation::line(seq.len());
            assert_eq!(energy(&conf, &seq), 0, "sequence {}", seq_str);
        }
    }

    #[test]
    fn u_shape_has_one_hh_contact() {
        let seq = HpSequence::try_from("HHHH").unwrap();
        let coords = vec![
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(1, 1),
            Coord::new(0, 1),
        ];
        let conf = Conformation::new(coords).unwrap();
        assert_eq!(energy(&conf, &seq), -1);
    }

    #[test]
    fn energy_is_translation_invariant() {
        let seq = HpSequence::try_from("HHHH").unwrap();
        let coords = vec![
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(1, 1),
            Coord::new(0, 1),
        ];
        let conf = Conformation::new(coords.clone()).unwrap();
        let shift = Coord::new(-7, 13);
        let shifted: Vec<Coord> = coords.into_iter().map(|c| c + shift).collect();
        let shifted_conf = Conformation::new(shifted).unwrap();
        assert_eq!(energy(&conf, &seq), energy(&shifted_conf, &seq));
    }

    #[test]
    fn consecutive_hh_neighbors_are_not_contacts() {
        // "HH" on a line: adjacent on the chain, must not be counted.
        let seq = HpSequence::try_from("HH").unwrap();
        let conf = Conformation::line(2);
        assert_eq!(energy(&conf, &seq), 0);
    }
}
