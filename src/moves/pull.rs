//! Pull move (Lesh-Mitzenmacher-Whitesides, 2D).

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::conformation::Conformation;
use crate::coord::{is_self_avoiding, manhattan, Coord};

/// Try a single pull move, picking the pivot and rotation in random order.
pub(super) fn attempt_pull(conf: &Conformation, rng: &mut impl Rng) -> Option<Conformation> {
    let n = conf.len();
    if n < 3 {
        return None;
    }
    let coords: Vec<Coord> = conf.coords().to_vec();
    let occ0: HashSet<Coord> = coords.iter().copied().collect();

    let mut pivots: Vec<usize> = (1..=n - 2).collect();
    pivots.shuffle(rng);

    for i in pivots {
        let pi = coords[i];
        let pip1 = coords[i + 1];
        let v = pip1 - pi;
        let mut shifts = [Coord::new(v.y, -v.x), Coord::new(-v.y, v.x)];
        shifts.shuffle(rng);

        for s in shifts {
            if let Some(proposal) = try_rotation(&coords, &occ0, i, pi, pip1, s) {
                if is_self_avoiding(&proposal) {
                    return Some(Conformation::from_checked(proposal));
                }
            }
        }
    }
    None
}

/// Build the candidate conformation for pivot `i` and rotation `s`, or
/// `None` if the rotation is blocked before a self-avoidance check is even
/// worth running.
fn try_rotation(
    coords: &[Coord],
    occ0: &HashSet<Coord>,
    i: usize,
    pi: Coord,
    pip1: Coord,
    s: Coord,
) -> Option<Vec<Coord>> {
    let l = pip1 + s;
    let c_cell = pi + s;

    if occ0.contains(&l) && l != pi {
        return None;
    }

    // corner shortcut: relocating index i to L is the whole move.
    if c_cell == coords[i - 1] {
        let mut newc = coords.to_vec();
        newc[i] = l;
        return Some(newc);
    }

    if occ0.contains(&c_cell) {
        return None;
    }

    let mut newc = coords.to_vec();
    let mut occ: HashSet<Coord> = occ0.clone();

    occ.remove(&pi);
    newc[i] = l;
    occ.insert(l);

    occ.remove(&coords[i - 1]);
    newc[i - 1] = c_cell;
    occ.insert(c_cell);

    if i < 2 || manhattan(newc[i - 2], newc[i - 1]) == 1 {
        return Some(newc);
    }

    // propagate the pull backward to residue 0, running to completion and
    // relying on the final self-avoidance gate (see DESIGN.md: the spec
    // treats this as strictly safer than the early-exit heuristic).
    let mut j = i as isize - 2;
    while j >= 0 {
        let ju = j as usize;
        let target = coords[ju + 2];
        if occ.contains(&target) && target != newc[ju] {
            return None;
        }
        occ.remove(&newc[ju]);
        newc[ju] = target;
        occ.insert(target);
        j -= 1;
    }

    Some(newc)
}
