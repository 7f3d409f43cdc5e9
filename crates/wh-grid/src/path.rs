//! Breadth-first search over the grid.
//!
//! Two queries share the BFS skeleton but differ in what blocks expansion:
//!
//! - [`shortest_path`] plans an agent's route.  Only `Empty` cells (and the
//!   destination itself) are expandable — obstacles, other agents, and
//!   non-destination special cells all block, because the path will be
//!   *executed* step by step and every intermediate cell must be enterable.
//! - [`exists_path`] answers the placer's reachability predicate.  Every
//!   non-obstacle tag is traversable, agents included: connectivity is a
//!   property of the static layout, not of where the fleet stands today.
//!
//! Neighbors expand in [`Direction::ALL`] order (up, down, left, right).
//! This fixes the shape of equal-length shortest paths, which matters for
//! reproducibility of recorded runs; it never affects path length.

use std::collections::VecDeque;

use wh_core::{Direction, GridPos};

use crate::{CellTag, Grid};

/// Shortest move sequence from `start` to `goal`, or an empty vector when the
/// goal is unreachable or `start == goal`.
///
/// Cost model: every step costs 1, so BFS yields a minimum-length path.
pub fn shortest_path(grid: &Grid, start: GridPos, goal: GridPos) -> Vec<Direction> {
    if !grid.in_bounds(start) || !grid.in_bounds(goal) || start == goal {
        return Vec::new();
    }

    let mut visited = vec![false; grid.cell_count()];
    // prev[cell] = (predecessor cell, move that entered this cell).
    let mut prev: Vec<Option<(GridPos, Direction)>> = vec![None; grid.cell_count()];

    let mut queue = VecDeque::new();
    queue.push_back(start);
    visited[grid.index_of(start)] = true;

    'search: while let Some(pos) = queue.pop_front() {
        if pos == goal {
            break 'search;
        }
        for dir in Direction::ALL {
            let Some(next) = grid.neighbor(pos, dir) else {
                continue;
            };
            let idx = grid.index_of(next);
            if visited[idx] {
                continue;
            }
            // Expandable: the destination itself, or an empty cell.
            if next == goal || grid.tag(next) == CellTag::Empty {
                visited[idx] = true;
                prev[idx] = Some((pos, dir));
                queue.push_back(next);
            }
        }
    }

    // Walk predecessors back from the goal; unreached goal → empty path.
    let mut moves = Vec::new();
    let mut cur = goal;
    while cur != start {
        match prev[grid.index_of(cur)] {
            Some((from, dir)) => {
                moves.push(dir);
                cur = from;
            }
            None => return Vec::new(),
        }
    }
    moves.reverse();
    moves
}

/// `true` if `goal` is reachable from `start` through non-obstacle cells.
///
/// Used by the obstacle placer's connectivity predicate; see the module docs
/// for why its traversability differs from [`shortest_path`]'s.
pub fn exists_path(grid: &Grid, start: GridPos, goal: GridPos) -> bool {
    if !grid.in_bounds(start) || !grid.in_bounds(goal) {
        return false;
    }
    if start == goal {
        return true;
    }

    let mut visited = vec![false; grid.cell_count()];
    let mut queue = VecDeque::new();
    queue.push_back(start);
    visited[grid.index_of(start)] = true;

    while let Some(pos) = queue.pop_front() {
        if pos == goal {
            return true;
        }
        for dir in Direction::ALL {
            let Some(next) = grid.neighbor(pos, dir) else {
                continue;
            };
            let idx = grid.index_of(next);
            if !visited[idx] && grid.tag(next).is_walkable() {
                visited[idx] = true;
                queue.push_back(next);
            }
        }
    }
    false
}
