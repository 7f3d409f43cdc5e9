//! The four cardinal movement directions.
//!
//! A closed, exhaustively-matched enum carrying its own `(dx, dy)` delta and
//! opposite-direction mapping.  `y` grows downward, so `Up` is `(0, -1)`.
//!
//! # Enumeration order
//!
//! [`Direction::ALL`] fixes the order **up, down, left, right**.  BFS path
//! planning expands neighbors in this order, which determines the *shape* of
//! equal-length shortest paths (never their length).  Changing the order
//! changes reproducibility of recorded runs, so it is part of the contract.

use std::fmt;

/// A single-cell cardinal move on the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the canonical expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Cell delta as `(dx, dy)`.  The grid's y axis grows downward, so `Up`
    /// is `(0, -1)`.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up    => (0, -1),
            Direction::Down  => (0, 1),
            Direction::Left  => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The inverse move.  Used to record recovery steps when an agent detours
    /// around a transient obstruction.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up    => "up",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Right => "right",
        };
        write!(f, "{s}")
    }
}
