//! VSHD: the `{end, corner, crankshaft}` triplet.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::conformation::Conformation;
use crate::coord::{is_self_avoiding, manhattan, neighbours4, Coord};

#[derive(Clone, Copy)]
enum Kind {
    End,
    Corner,
    Crankshaft,
}

/// Try `{end, corner, crankshaft}` in a uniformly random order, returning
/// the first successful proposal.
pub(super) fn attempt_vshd(conf: &Conformation, rng: &mut impl Rng) -> Option<Conformation> {
    let mut kinds = [Kind::End, Kind::Corner, Kind::Crankshaft];
    kinds.shuffle(rng);
    for kind in kinds {
        let proposal = match kind {
            Kind::End => try_end(conf, rng),
            Kind::Corner => try_corner(conf, rng),
            Kind::Crankshaft => try_crankshaft(conf, rng),
        };
        if proposal.is_some() {
            return proposal;
        }
    }
    None
}

/// End move: relocate one chain end to a free neighbor of its anchor.
fn try_end(conf: &Conformation, rng: &mut impl Rng) -> Option<Conformation> {
    let n = conf.len();
    if n < 2 {
        return None;
    }
    let occ = conf.occupancy();
    let mut ends = [0usize, n - 1];
    ends.shuffle(rng);

    for &end in &ends {
        let anchor_idx = if end == 0 { 1 } else { n - 2 };
        let anchor = conf.get(anchor_idx);
        let current = conf.get(end);

        let mut candidates: Vec<Coord> = neighbours4(anchor)
            .into_iter()
            .filter(|c| *c != current && !occ.contains_key(c))
            .collect();
        candidates.shuffle(rng);

        for cand in candidates {
            let mut coords = conf.coords().to_vec();
            coords[end] = cand;
            if is_self_avoiding(&coords) {
                return Some(Conformation::from_checked(coords));
            }
        }
    }
    None
}

/// Corner move: relocate an interior residue into the shared lattice
/// neighbor of its two chain neighbors, if one is free.
fn try_corner(conf: &Conformation, rng: &mut impl Rng) -> Option<Conformation> {
    let n = conf.len();
    if n < 3 {
        return None;
    }
    let occ = conf.occupancy();
    let mut order: Vec<usize> = (1..n - 1).collect();
    order.shuffle(rng);

    for i in order {
        let prev = conf.get(i - 1);
        let next = conf.get(i + 1);
        if manhattan(prev, next) != 2 {
            continue;
        }
        let current = conf.get(i);
        let next_nb = neighbours4(next);
        let mut candidates: Vec<Coord> = neighbours4(prev)
            .into_iter()
            .filter(|c| next_nb.contains(c))
            .filter(|c| *c != prev && *c != next && *c != current && !occ.contains_key(c))
            .collect();
        candidates.shuffle(rng);

        for cand in candidates {
            let mut coords = conf.coords().to_vec();
            coords[i] = cand;
            if is_self_avoiding(&coords) {
                return Some(Conformation::from_checked(coords));
            }
        }
    }
    None
}

/// Crankshaft move: 180 degree flip of the two middle residues of a
/// horizontal or vertical "U" spanning four consecutive residues.
///
/// See DESIGN.md: for any self-avoiding walk the three unit steps between
/// `C[k]` and `C[k+3]` force an odd separation, so the `manhattan == 2`
/// precondition below can never hold for a real chain. The check is kept
/// exactly as specified (and as implemented by the reference source) since
/// it is a faithful, harmless no-op in that case; [`flip_u`] is exercised
/// directly in tests against a hypothetical U to check the geometry itself.
fn try_crankshaft(conf: &Conformation, rng: &mut impl Rng) -> Option<Conformation> {
    let n = conf.len();
    if n < 4 {
        return None;
    }
    let occ = conf.occupancy();
    let mut order: Vec<usize> = (0..=n - 4).collect();
    order.shuffle(rng);

    for k in order {
        let p0 = conf.get(k);
        let p1 = conf.get(k + 1);
        let p2 = conf.get(k + 2);
        let p3 = conf.get(k + 3);
        if manhattan(p0, p1) != 1 || manhattan(p1, p2) != 1 || manhattan(p2, p3) != 1 {
            continue;
        }
        if manhattan(p0, p3) != 2 {
            continue;
        }
        let (target1, target2) = match flip_u(p0, p1, p3) {
            Some(t) => t,
            None => continue,
        };
        let free = |c: Coord| -> bool {
            match occ.get(&c) {
                None => true,
                Some(&idx) => idx == k + 1 || idx == k + 2,
            }
        };
        if free(target1) && free(target2) {
            let mut coords = conf.coords().to_vec();
            coords[k + 1] = target1;
            coords[k + 2] = target2;
            if is_self_avoiding(&coords) {
                return Some(Conformation::from_checked(coords));
            }
        }
    }
    None
}

/// Pure geometric half of the crankshaft move: given a (hypothetical) "U"
/// with ends `p0`, `p3` and first interior point `p1` (used only to
/// determine which side of the `p0`-`p3` line the U currently bows to),
/// returns the pair of target cells for the two interior residues after a
/// 180 degree flip. `None` for the diagonal separation case, which is
/// intentionally not flipped (no unique U).
fn flip_u(p0: Coord, p1: Coord, p3: Coord) -> Option<(Coord, Coord)> {
    let dx = p3.x - p0.x;
    let dy = p3.y - p0.y;
    match (dx.abs(), dy.abs()) {
        (2, 0) => {
            let midx = (p0.x + p3.x) / 2;
            let y = p1.y;
            let dy_flip = if p1.y == p0.y { 1 } else { -1 };
            let cand1 = Coord::new(midx, y + dy_flip);
            let other_x = if dx > 0 { midx + 1 } else { midx - 1 };
            let cand2 = Coord::new(other_x, y + dy_flip);
            Some((cand1, cand2))
        }
        (0, 2) => {
            let midy = (p0.y + p3.y) / 2;
            let x = p1.x;
            let dx_flip = if p1.x == p0.x { 1 } else { -1 };
            let cand1 = Coord::new(x + dx_flip, midy);
            let other_y = if dy > 0 { midy + 1 } else { midy - 1 };
            let cand2 = Coord::new(x + dx_flip, other_y);
            Some((cand1, cand2))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn end_move_candidate_set_matches_free_neighbors_of_anchor() {
        let conf = Conformation::new(vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)])
            .unwrap();
        let anchor = conf.get(1);
        let occ = conf.occupancy();
        let current = conf.get(0);
        let candidates: Vec<Coord> = neighbours4(anchor)
            .into_iter()
            .filter(|c| *c != current && !occ.contains_key(c))
            .collect();
        let mut sorted = candidates.clone();
        sorted.sort();
        assert_eq!(sorted, vec![Coord::new(1, -1), Coord::new(1, 1)]);
    }

    #[test]
    fn end_move_preserves_invariants() {
        let mut rng = Pcg64::seed_from_u64(42);
        let conf = Conformation::new(vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)])
            .unwrap();
        for _ in 0..50 {
            if let Some(next) = try_end(&conf, &mut rng) {
                assert!(is_self_avoiding(next.coords()));
                assert_eq!(next.len(), conf.len());
            }
        }
    }

    #[test]
    fn corner_move_on_u_relocates_interior_residue() {
        // a 2x2 "C" shape has an interior corner candidate
        let conf = Conformation::new(vec![
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(1, 1),
            Coord::new(1, 0),
        ])
        .unwrap();
        let mut rng = Pcg64::seed_from_u64(7);
        // index 1 (=(0,1)) and index 2 (=(1,1)) have chain-neighbors at
        // distance 2 with a free shared neighbor only if the opposite
        // corner is unoccupied; here all 4 cells are filled so no corner
        // candidate should exist for interior index 1 or 2 -- exercise the
        // no-proposal path explicitly.
        if let Some(next) = try_corner(&conf, &mut rng) {
            assert!(is_self_avoiding(next.coords()));
        }
    }

    #[test]
    fn flip_u_horizontal_targets() {
        let p0 = Coord::new(0, 0);
        let p1 = Coord::new(0, 1);
        let p3 = Coord::new(2, 0);
        let (t1, t2) = flip_u(p0, p1, p3).unwrap();
        assert_eq!((t1, t2), (Coord::new(1, 0), Coord::new(2, 0)));
    }

    #[test]
    fn flip_u_vertical_targets() {
        let p0 = Coord::new(0, 0);
        let p1 = Coord::new(1, 0);
        let p3 = Coord::new(0, 2);
        let (t1, t2) = flip_u(p0, p1, p3).unwrap();
        assert_eq!((t1, t2), (Coord::new(0, 1), Coord::new(0, 2)));
    }

    #[test]
    fn flip_u_diagonal_separation_is_skipped() {
        assert!(flip_u(Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)).is_none());
    }

    #[test]
    fn crankshaft_precondition_is_unreachable_for_a_real_chain() {
        // any self-avoiding 3-step segment has odd end-to-end distance
        let conf = Conformation::new(vec![
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(1, 1),
            Coord::new(1, 0),
        ])
        .unwrap();
        let mut rng = Pcg64::seed_from_u64(1);
        assert!(try_crankshaft(&conf, &mut rng).is_none());
    }
}
