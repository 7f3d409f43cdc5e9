//! Connectivity-preserving obstacle placement.
//!
//! Given a grid already carrying its generator and drop-zone markers, scatter
//! static obstacles up to a target density while guaranteeing the
//! reachability predicate:
//!
//! > every generator can reach **at least one** drop zone, and every drop
//! > zone can be reached from **at least one** generator,
//!
//! over cardinal-direction BFS through non-obstacle cells.  This existence
//! form is deliberately weaker than all-pairs reachability — a generator is
//! never guaranteed a path to *every* zone, only out of isolation.
//!
//! Cells cardinally adjacent to a generator or drop zone are never eligible:
//! agents stage their pickups and drop-offs on those neighbors, so the
//! placement keeps them clear.

use wh_core::{GridPos, SimRng};

use crate::{exists_path, CellTag, Grid};

/// Density-targeted obstacle placer.  Runs once at setup, before any agent
/// is placed.
#[derive(Clone, Debug)]
pub struct ObstaclePlacer {
    density: f64,
}

impl ObstaclePlacer {
    /// `density` is the target fraction of *eligible* free cells to fill,
    /// clamped to [0, 1].
    pub fn new(density: f64) -> Self {
        Self { density: density.clamp(0.0, 1.0) }
    }

    /// Place obstacles and return their positions.
    ///
    /// Eligible cells are visited in random order; each candidate is
    /// provisionally marked, checked against the reachability predicate, and
    /// reverted if the predicate fails.  A rejected candidate is skipped, not
    /// retried elsewhere, so the final count may fall short of the target —
    /// that is expected behavior, not an error.
    pub fn place(&self, grid: &mut Grid, rng: &mut SimRng) -> Vec<GridPos> {
        let generators = grid.positions_with(CellTag::Generator);
        let zones = grid.positions_with(CellTag::DropZone);

        let mut eligible: Vec<GridPos> = grid
            .iter_positions()
            .filter(|&p| grid.tag(p) == CellTag::Empty && !self.near_special(grid, p))
            .collect();
        let target = (self.density * eligible.len() as f64).floor() as usize;

        rng.shuffle(&mut eligible);

        let mut placed = Vec::with_capacity(target);
        for pos in eligible {
            if placed.len() >= target {
                break;
            }
            grid.set_tag(pos, CellTag::Obstacle);
            if connectivity_holds(grid, &generators, &zones) {
                placed.push(pos);
            } else {
                grid.set_tag(pos, CellTag::Empty);
            }
        }
        placed
    }

    /// Restore the reachability predicate on a grid whose obstacles violate
    /// it, by removing random obstacles until it holds.  Returns the removed
    /// positions (empty when the predicate already held).
    pub fn repair(&self, grid: &mut Grid, rng: &mut SimRng) -> Vec<GridPos> {
        let generators = grid.positions_with(CellTag::Generator);
        let zones = grid.positions_with(CellTag::DropZone);

        if connectivity_holds(grid, &generators, &zones) {
            return Vec::new();
        }

        let mut obstacles = grid.positions_with(CellTag::Obstacle);
        rng.shuffle(&mut obstacles);

        let mut removed = Vec::new();
        for pos in obstacles {
            grid.set_tag(pos, CellTag::Empty);
            removed.push(pos);
            if connectivity_holds(grid, &generators, &zones) {
                break;
            }
        }
        removed
    }

    fn near_special(&self, grid: &Grid, pos: GridPos) -> bool {
        grid.has_adjacent_tag(pos, CellTag::Generator)
            || grid.has_adjacent_tag(pos, CellTag::DropZone)
    }
}

/// The reachability predicate: each generator reaches some zone, each zone is
/// reached by some generator.
///
/// Kept as a free function so tests can assert the invariant directly on any
/// grid, placed or hand-built.
pub fn connectivity_holds(grid: &Grid, generators: &[GridPos], zones: &[GridPos]) -> bool {
    for &source in generators {
        if !zones.iter().any(|&z| exists_path(grid, source, z)) {
            return false;
        }
    }
    for &zone in zones {
        if !generators.iter().any(|&g| exists_path(grid, g, zone)) {
            return false;
        }
    }
    true
}
