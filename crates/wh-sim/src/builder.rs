//! Fluent builder for constructing a [`Warehouse`].

use wh_agent::Agent;
use wh_core::{AgentId, AgentRng, GeneratorId, GridPos, SimConfig, SimRng, ZoneId};
use wh_grid::{CellTag, Grid, ObstaclePlacer};

use crate::world::{DropZone, Generator};
use crate::{SimError, SimResult, Warehouse};

/// How many random draws to spend finding a free cell for one agent before
/// giving up.  Generous relative to any sane density.
const PLACEMENT_ATTEMPTS: usize = 10_000;

/// Fluent builder for [`Warehouse`].
///
/// With no explicit placements, the builder lays out the reference
/// warehouse: `config.generator_count` generators spread down the left
/// column, `config.zone_count` zones spread down the right column, obstacles
/// scattered to `config.obstacle_density`, and `config.agent_count` agents
/// dropped on random free cells.  Explicit placements replace the
/// corresponding default layout entirely.
///
/// # Example
///
/// ```rust,ignore
/// let wh = WarehouseBuilder::new(SimConfig::default()).build()?;
/// ```
pub struct WarehouseBuilder {
    config:     SimConfig,
    generators: Vec<GridPos>,
    zones:      Vec<GridPos>,
    agents:     Vec<GridPos>,
}

impl WarehouseBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            generators: Vec::new(),
            zones:      Vec::new(),
            agents:     Vec::new(),
        }
    }

    /// Place a generator explicitly.  The first call discards the default
    /// left-column layout.
    pub fn generator_at(mut self, pos: GridPos) -> Self {
        self.generators.push(pos);
        self
    }

    /// Place a drop zone explicitly.  Zones are numbered "Z1", "Z2", … in
    /// call order.  The first call discards the default right-column layout.
    pub fn zone_at(mut self, pos: GridPos) -> Self {
        self.zones.push(pos);
        self
    }

    /// Place an agent explicitly instead of drawing a random free cell.
    pub fn agent_at(mut self, pos: GridPos) -> Self {
        self.agents.push(pos);
        self
    }

    /// Validate the layout, scatter obstacles, place the fleet, and return a
    /// ready-to-tick [`Warehouse`].
    pub fn build(self) -> SimResult<Warehouse> {
        let cfg = self.config;
        if cfg.rows == 0 || cfg.cols == 0 {
            return Err(SimError::Config(format!(
                "grid must be non-empty, got {}x{}",
                cfg.rows, cfg.cols
            )));
        }

        let gen_positions = if self.generators.is_empty() {
            column_layout(0, cfg.rows, cfg.generator_count)
        } else {
            self.generators
        };
        let zone_positions = if self.zones.is_empty() {
            column_layout(cfg.cols as i32 - 1, cfg.rows, cfg.zone_count)
        } else {
            self.zones
        };

        if gen_positions.is_empty() {
            return Err(SimError::Config("at least one generator is required".into()));
        }
        if zone_positions.is_empty() {
            return Err(SimError::Config("at least one drop zone is required".into()));
        }

        let mut grid = Grid::new(cfg.rows, cfg.cols);
        let mut rng = SimRng::new(cfg.seed);

        for &pos in &gen_positions {
            mark(&mut grid, pos, CellTag::Generator, "generator")?;
        }
        for &pos in &zone_positions {
            mark(&mut grid, pos, CellTag::DropZone, "drop zone")?;
        }

        // Obstacles go in before agents so the connectivity check sees only
        // static occupancy.  The placer draws from its own child stream:
        // however many candidates it visits, agent placement below consumes
        // the same parent draws for a given seed.
        if cfg.obstacle_density > 0.0 {
            let mut placer_rng = rng.child(1);
            ObstaclePlacer::new(cfg.obstacle_density).place(&mut grid, &mut placer_rng);
        }

        let generators = gen_positions
            .iter()
            .enumerate()
            .map(|(i, &pos)| Generator::new(GeneratorId(i as u32), pos))
            .collect();
        let zones = zone_positions
            .iter()
            .enumerate()
            .map(|(i, &pos)| DropZone::new(ZoneId(i as u16), pos))
            .collect();

        let mut agents = Vec::with_capacity(cfg.agent_count.max(self.agents.len()));
        let mut rngs = Vec::with_capacity(agents.capacity());
        let explicit = self.agents;
        let fleet_size = if explicit.is_empty() { cfg.agent_count } else { explicit.len() };

        for i in 0..fleet_size {
            let id = AgentId(i as u32);
            let pos = match explicit.get(i) {
                Some(&p) => {
                    if !grid.in_bounds(p) {
                        return Err(SimError::OutOfBounds {
                            what: "agent",
                            pos:  p,
                            rows: cfg.rows,
                            cols: cfg.cols,
                        });
                    }
                    if !grid.is_free(p) {
                        return Err(SimError::Occupied { what: "agent", pos: p });
                    }
                    p
                }
                None => random_free_cell(&grid, &mut rng)
                    .ok_or(SimError::NoFreeCell { index: i, attempts: PLACEMENT_ATTEMPTS })?,
            };
            agents.push(Agent::new(id, pos, &mut grid));
            rngs.push(AgentRng::new(cfg.seed, id));
        }

        Ok(Warehouse::from_parts(cfg, grid, generators, zones, agents, rngs, rng))
    }
}

/// Spread `count` markers evenly down grid column `x`.
fn column_layout(x: i32, rows: usize, count: usize) -> Vec<GridPos> {
    (0..count)
        .map(|i| GridPos::new(x, ((i + 1) * rows / (count + 1)) as i32))
        .collect()
}

fn mark(grid: &mut Grid, pos: GridPos, tag: CellTag, what: &'static str) -> SimResult<()> {
    if !grid.in_bounds(pos) {
        return Err(SimError::OutOfBounds {
            what,
            pos,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    if grid.tag(pos) != CellTag::Empty {
        return Err(SimError::Occupied { what, pos });
    }
    grid.set_tag(pos, tag);
    Ok(())
}

fn random_free_cell(grid: &Grid, rng: &mut SimRng) -> Option<GridPos> {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let x = rng.gen_range(0..grid.cols() as i32);
        let y = rng.gen_range(0..grid.rows() as i32);
        let pos = GridPos::new(x, y);
        if grid.is_free(pos) {
            return Some(pos);
        }
    }
    None
}
