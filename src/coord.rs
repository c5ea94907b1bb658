//! # Lattice primitives
//! Coordinate arithmetic on the integer lattice ℤ² and the self-avoidance
//! predicate shared by the energy evaluator and every move.

use std::ops::{Add, Sub};

#[cfg(feature = "serde_support")]
use serde::{Serialize, Deserialize};

/// A point on the integer lattice.
///
/// Kept as a small `Copy` struct (not a bare tuple) so candidate buffers
/// built by the move engine can be passed around and compared cheaply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Coord {
    /// column
    pub x: i32,
    /// row
    pub y: i32,
}

impl Coord {
    /// Create a new coordinate.
    pub fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from(p: (i32, i32)) -> Self {
        Coord::new(p.0, p.1)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

/// The four orthogonal lattice neighbors of `p`, in a fixed order
/// (+x, -x, +y, -y). Callers that need a random order shuffle this buffer
/// themselves with `rand::seq::SliceRandom`.
pub fn neighbours4(p: Coord) -> [Coord; 4] {
    [
        Coord::new(p.x + 1, p.y),
        Coord::new(p.x - 1, p.y),
        Coord::new(p.x, p.y + 1),
        Coord::new(p.x, p.y - 1),
    ]
}

/// Manhattan (L1) distance between two lattice points.
pub fn manhattan(p: Coord, q: Coord) -> i32 {
    (p.x - q.x).abs() + (p.y - q.y).abs()
}

/// `true` iff all coordinates in `coords` are pairwise distinct and every
/// consecutive pair is at Manhattan distance 1.
///
/// This is the final gate every move implementation must pass before
/// returning a proposal (spec invariant: connectivity + self-avoidance).
pub fn is_self_avoiding(coords: &[Coord]) -> bool {
    for i in 0..coords.len() {
        for j in (i + 1)..coords.len() {
            if coords[i] == coords[j] {
                return false;
            }
        }
    }
    coords.windows(2).all(|w| manhattan(w[0], w[1]) == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours4_are_distance_one() {
        let p = Coord::new(3, -2);
        for n in neighbours4(p) {
            assert_eq!(manhattan(p, n), 1);
        }
    }

    #[test]
    fn manhattan_is_symmetric() {
        let p = Coord::new(1, 1);
        let q = Coord::new(-3, 4);
        assert_eq!(manhattan(p, q), manhattan(q, p));
    }

    #[test]
    fn line_is_self_avoiding() {
        let line: Vec<Coord> = (0..10).map(|i| Coord::new(i, 0)).collect();
        assert!(is_self_avoiding(&line));
    }

    #[test]
    fn duplicate_coordinate_is_not_self_avoiding() {
        let coords = vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(0, 0)];
        assert!(!is_self_avoiding(&coords));
    }

    #[test]
    fn disconnected_chain_is_not_self_avoiding() {
        let coords = vec![Coord::new(0, 0), Coord::new(5, 5)];
        assert!(!is_self_avoiding(&coords));
    }
}
