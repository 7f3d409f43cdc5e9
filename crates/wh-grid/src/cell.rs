//! The closed set of cell states.

use std::fmt;

/// What currently occupies a grid cell.  Exactly one tag per cell.
///
/// Invariants maintained by the crates above:
/// - a `Generator` or `DropZone` cell never becomes `Obstacle`;
/// - `Agent` is mutually exclusive with `Obstacle` (an agent only ever steps
///   into `Empty` cells).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellTag {
    #[default]
    Empty,
    Obstacle,
    Generator,
    DropZone,
    Agent,
}

impl CellTag {
    /// `true` for cells a reachability search may pass through: everything
    /// except obstacles.  Agents do not block here — they are transient and
    /// connectivity must hold regardless of where the fleet happens to stand.
    #[inline]
    pub fn is_walkable(self) -> bool {
        !matches!(self, CellTag::Obstacle)
    }

    /// Single-character glyph for ASCII grid dumps.
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            CellTag::Empty     => ' ',
            CellTag::Obstacle  => '.',
            CellTag::Generator => '-',
            CellTag::DropZone  => '#',
            CellTag::Agent     => '*',
        }
    }
}

impl fmt::Display for CellTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
