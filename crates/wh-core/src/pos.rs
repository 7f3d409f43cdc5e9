//! Grid cell coordinates.
//!
//! `GridPos` uses `i32` components even though valid cells are non-negative:
//! stepping off the edge of the grid produces an out-of-bounds position that
//! the grid's bounds check rejects, instead of an underflow panic.

use crate::Direction;

/// A cell coordinate on the warehouse grid: `x` is the column, `y` the row.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step in `dir` from `self`.  May be out of bounds.
    #[inline]
    pub fn step(self, dir: Direction) -> GridPos {
        let (dx, dy) = dir.delta();
        GridPos { x: self.x + dx, y: self.y + dy }
    }

    /// Manhattan (L1) distance — the minimum number of cardinal steps between
    /// two cells on an obstacle-free grid.
    #[inline]
    pub fn manhattan(self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `true` if `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: GridPos) -> bool {
        self.manhattan(other) == 1
    }

    /// The four cardinal neighbors in [`Direction::ALL`] order.  Neighbors of
    /// edge cells may be out of bounds; callers filter via the grid.
    pub fn neighbors(self) -> impl Iterator<Item = GridPos> {
        Direction::ALL.into_iter().map(move |d| self.step(d))
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
