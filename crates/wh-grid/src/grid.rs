//! The `Grid` cell matrix.

use wh_core::{Direction, GridPos};

use crate::CellTag;

/// A fixed-size rectangular cell matrix.
///
/// Allocated once with all cells [`CellTag::Empty`]; mutated throughout a run
/// by setup (generator / drop-zone / obstacle markers) and by agent movement
/// (clear the vacated cell, tag the entered cell).  All mutation goes through
/// [`set_tag`](Self::set_tag) — single-cell, no side effects.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows:  usize,
    cols:  usize,
    cells: Vec<CellTag>,
}

impl Grid {
    /// Allocate a `rows × cols` grid with every cell empty.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![CellTag::Empty; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// `true` if `pos` names a cell of this grid.
    #[inline]
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.cols && (pos.y as usize) < self.rows
    }

    /// Row-major index of an in-bounds position.
    #[inline]
    pub fn index_of(&self, pos: GridPos) -> usize {
        debug_assert!(self.in_bounds(pos));
        pos.y as usize * self.cols + pos.x as usize
    }

    /// The tag at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds; bounds-check with
    /// [`in_bounds`](Self::in_bounds) first when the position is derived.
    #[inline]
    pub fn tag(&self, pos: GridPos) -> CellTag {
        self.cells[self.index_of(pos)]
    }

    /// Overwrite the tag at `pos`.
    #[inline]
    pub fn set_tag(&mut self, pos: GridPos, tag: CellTag) {
        let idx = self.index_of(pos);
        self.cells[idx] = tag;
    }

    /// `true` if `pos` is in bounds and empty — the only cells an agent may
    /// step into or a path may route through.
    #[inline]
    pub fn is_free(&self, pos: GridPos) -> bool {
        self.in_bounds(pos) && self.tag(pos) == CellTag::Empty
    }

    /// The neighbor of `pos` one step in `dir`, if it is in bounds.
    #[inline]
    pub fn neighbor(&self, pos: GridPos, dir: Direction) -> Option<GridPos> {
        let next = pos.step(dir);
        self.in_bounds(next).then_some(next)
    }

    /// Free cells cardinally adjacent to `pos`, in [`Direction::ALL`] order.
    pub fn free_adjacent(&self, pos: GridPos) -> Vec<GridPos> {
        pos.neighbors().filter(|&n| self.is_free(n)).collect()
    }

    /// `true` if any cardinal neighbor of `pos` carries `tag`.
    pub fn has_adjacent_tag(&self, pos: GridPos, tag: CellTag) -> bool {
        pos.neighbors()
            .any(|n| self.in_bounds(n) && self.tag(n) == tag)
    }

    /// All positions currently carrying `tag`, in row-major order.
    pub fn positions_with(&self, tag: CellTag) -> Vec<GridPos> {
        self.iter_positions()
            .filter(|&p| self.tag(p) == tag)
            .collect()
    }

    /// Number of cells currently carrying `tag`.
    pub fn count_tag(&self, tag: CellTag) -> usize {
        self.cells.iter().filter(|&&c| c == tag).count()
    }

    /// Iterator over every cell position in row-major order.
    pub fn iter_positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        let (rows, cols) = (self.rows as i32, self.cols as i32);
        (0..rows).flat_map(move |y| (0..cols).map(move |x| GridPos::new(x, y)))
    }

    /// ASCII dump of the grid, one row per line, using each tag's glyph.
    /// For debug output and test failure messages.
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for y in 0..self.rows as i32 {
            for x in 0..self.cols as i32 {
                out.push(self.tag(GridPos::new(x, y)).glyph());
            }
            out.push('\n');
        }
        out
    }
}
