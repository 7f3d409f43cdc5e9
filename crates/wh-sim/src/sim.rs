//! The warehouse dispatcher and its tick loop.
//!
//! # One call to [`Warehouse::tick`]
//!
//! ```text
//! tick(now_ms):
//!   ① Generation — when the generation timer is ready, each empty
//!                  generator rolls `gen_probability` and may buffer a
//!                  fresh random item, queued as pending work.
//!   ② Assignment — pending items are offered to idle agents (first idle
//!                  wins); an accepting agent is routed to a staging cell
//!                  next to the generator.  Unreachable work stays queued.
//!   ③ Movement   — when the movement timer is ready AND every agent's
//!                  step animation has settled, the whole fleet advances
//!                  one step in lockstep.
//!   ④ Arrivals   — settled agents with a completed route either pick up
//!                  (then get classified and routed to a drop zone) or
//!                  deliver (then go idle); an agent stranded short of its
//!                  target is re-routed.
//! ```
//!
//! The host supplies the millisecond clock; the dispatcher never sleeps.
//! Re-running with the same [`SimConfig`] and clock sequence reproduces the
//! run exactly.

use std::collections::VecDeque;

use wh_agent::{Agent, TaskPhase};
use wh_core::{
    AgentId, AgentRng, GeneratorId, GridPos, IntervalTimer, ItemAttrs, SimConfig, SimRng, Tick,
};
use wh_fuzzy::classify;
use wh_grid::Grid;

use crate::observer::SimObserver;
use crate::world::{DropZone, Generator};

/// The complete simulation state: grid, generators, zones, fleet, pending
/// work queue, and the two cadence timers.
///
/// Built by [`WarehouseBuilder`][crate::WarehouseBuilder]; driven by a host
/// calling [`tick`][Self::tick] with a monotonically increasing clock.
#[derive(Debug)]
pub struct Warehouse {
    config: SimConfig,
    grid:   Grid,

    generators: Vec<Generator>,
    zones:      Vec<DropZone>,
    agents:     Vec<Agent>,
    /// One decorrelated RNG stream per agent, index-parallel with `agents`.
    rngs:       Vec<AgentRng>,

    /// Generators holding an item nobody has accepted yet, oldest first.
    pending: VecDeque<GeneratorId>,
    rng:     SimRng,

    gen_timer:  IntervalTimer,
    move_timer: IntervalTimer,
    move_tick:  Tick,

    items_generated: u64,
}

impl Warehouse {
    pub(crate) fn from_parts(
        config: SimConfig,
        grid: Grid,
        generators: Vec<Generator>,
        zones: Vec<DropZone>,
        agents: Vec<Agent>,
        rngs: Vec<AgentRng>,
        rng: SimRng,
    ) -> Self {
        let gen_timer = IntervalTimer::new(config.gen_interval_ms);
        let move_timer = IntervalTimer::new(config.move_interval_ms);
        Self {
            config,
            grid,
            generators,
            zones,
            agents,
            rngs,
            pending: VecDeque::new(),
            rng,
            gen_timer,
            move_timer,
            move_tick: Tick::ZERO,
            items_generated: 0,
        }
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the simulation to `now_ms`.
    ///
    /// Safe to call as often as the host likes; the internal timers decide
    /// which phases actually run.
    pub fn tick(&mut self, now_ms: u64, observer: &mut dyn SimObserver) {
        if self.gen_timer.ready(now_ms) {
            self.tick_generation(observer);
            self.gen_timer.mark(now_ms);
        }

        self.assign_tasks(observer);

        if self.move_timer.ready(now_ms) && self.all_settled(now_ms) {
            self.tick_movement(now_ms, observer);
            self.move_timer.mark(now_ms);
        }

        self.detect_arrivals(now_ms, observer);
    }

    /// Run one generation round immediately, ignoring the generation timer.
    pub fn tick_generation(&mut self, observer: &mut dyn SimObserver) {
        for generator in &mut self.generators {
            if let Some(item) = generator.try_generate(self.config.gen_probability, &mut self.rng) {
                self.pending.push_back(generator.id);
                self.items_generated += 1;
                observer.on_item_generated(self.move_tick, generator.id, item);
            }
        }
    }

    /// Run one fleet movement round immediately, ignoring the movement timer
    /// and the settle barrier.
    pub fn tick_movement(&mut self, now_ms: u64, observer: &mut dyn SimObserver) {
        for i in 0..self.agents.len() {
            self.agents[i].perform_move(&mut self.grid, &mut self.rngs[i], now_ms);
        }
        self.move_tick.advance();
        observer.on_movement_round(self.move_tick);
    }

    /// Force an item into a generator's buffer, bypassing the probability
    /// roll.  Returns `false` when the buffer is already full (the item is
    /// discarded) or the generator does not exist.
    pub fn spawn_item(&mut self, source: GeneratorId, attrs: ItemAttrs) -> bool {
        let Some(g) = self.generators.get_mut(source.index()) else {
            return false;
        };
        if g.holding.is_some() {
            return false;
        }
        g.holding = Some(attrs);
        self.pending.push_back(source);
        self.items_generated += 1;
        true
    }

    // ── Assignment ────────────────────────────────────────────────────────

    /// Offer pending items to idle agents.  The oldest pending item goes to
    /// the first idle agent in fleet order; items whose generator has no
    /// reachable staging cell stay queued for a later round.
    fn assign_tasks(&mut self, observer: &mut dyn SimObserver) {
        let mut i = 0;
        while i < self.pending.len() {
            let gen_id = self.pending[i];
            let gen_pos = self.generators[gen_id.index()].pos;

            let Some(agent_idx) =
                self.agents.iter().position(|a| a.phase == TaskPhase::Idle)
            else {
                return; // nobody free; later items can't jump the line anyway
            };

            let dest = self.staging_cell(gen_pos, self.agents[agent_idx].pos);
            let committed = match dest {
                Some(d) => {
                    let attrs = self.generators[gen_id.index()].holding;
                    let agent = &mut self.agents[agent_idx];
                    if agent.plan_route(&self.grid, d) {
                        agent.phase = TaskPhase::ToPickup;
                        agent.pickup_target = Some(gen_id);
                        agent.carrying = attrs;
                        observer.on_task_assigned(self.move_tick, agent.id, gen_id);
                        true
                    } else {
                        false
                    }
                }
                None => false,
            };

            if committed {
                self.pending.remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// The staging cell for servicing `target` when approaching from `from`:
    /// `from` itself when already cardinally adjacent, otherwise the free
    /// neighbor of `target` nearest to `from` (first such neighbor on ties).
    fn staging_cell(&self, target: GridPos, from: GridPos) -> Option<GridPos> {
        if from.is_adjacent(target) {
            return Some(from);
        }
        let mut best: Option<(u32, GridPos)> = None;
        for cell in self.grid.free_adjacent(target) {
            let d = cell.manhattan(from);
            if best.map_or(true, |(bd, _)| d < bd) {
                best = Some((d, cell));
            }
        }
        best.map(|(_, cell)| cell)
    }

    // ── Arrivals ──────────────────────────────────────────────────────────

    /// Resolve pickups and deliveries for settled agents whose route is
    /// spent, and re-route agents stranded short of their target (their
    /// staging cell was taken, or their plan failed).
    fn detect_arrivals(&mut self, now_ms: u64, observer: &mut dyn SimObserver) {
        for i in 0..self.agents.len() {
            if !self.agents[i].motion.settled(now_ms, self.config.animation_ms)
                || !self.agents[i].route_complete()
            {
                continue;
            }
            match self.agents[i].phase {
                TaskPhase::Idle => {
                    debug_assert!(self.agents[i].carrying.is_none(), "idle agent carries an item");
                }
                TaskPhase::ToPickup => self.resolve_pickup(i, observer),
                TaskPhase::ToDropoff => self.resolve_dropoff(i, observer),
            }
        }
    }

    fn resolve_pickup(&mut self, i: usize, observer: &mut dyn SimObserver) {
        let Some(gen_id) = self.agents[i].pickup_target else {
            debug_assert!(false, "ToPickup agent without a pickup target");
            return;
        };
        let gen_pos = self.generators[gen_id.index()].pos;

        if !self.agents[i].pos.is_adjacent(gen_pos) {
            self.replan(i, gen_pos);
            return;
        }

        let Some(item) = self.generators[gen_id.index()].take() else {
            // Buffer emptied out from under us; drop the task.
            let agent = &mut self.agents[i];
            agent.phase = TaskPhase::Idle;
            agent.carrying = None;
            agent.pickup_target = None;
            return;
        };

        // Classify; rule indices past the configured zone count fold into
        // the last zone.
        let zone_idx = classify(item).index().min(self.zones.len() - 1);
        let zone_id = self.zones[zone_idx].id;
        let zone_pos = self.zones[zone_idx].pos;
        let dest = self.staging_cell(zone_pos, self.agents[i].pos);

        let agent = &mut self.agents[i];
        agent.carrying = Some(item);
        agent.phase = TaskPhase::ToDropoff;
        agent.pickup_target = None;
        agent.delivery_target = Some(zone_id);
        if let Some(d) = dest {
            agent.plan_route(&self.grid, d);
        }
        observer.on_pickup(self.move_tick, agent.id, gen_id, zone_id, item);
    }

    fn resolve_dropoff(&mut self, i: usize, observer: &mut dyn SimObserver) {
        let Some(zone_id) = self.agents[i].delivery_target else {
            debug_assert!(false, "ToDropoff agent without a delivery target");
            return;
        };
        let zone_pos = self.zones[zone_id.index()].pos;

        if !self.agents[i].pos.is_adjacent(zone_pos) {
            self.replan(i, zone_pos);
            return;
        }

        self.zones[zone_id.index()].receive();
        let agent = &mut self.agents[i];
        let item = agent.carrying.take();
        debug_assert!(item.is_some(), "delivering agent carries nothing");
        agent.phase = TaskPhase::Idle;
        agent.delivery_target = None;
        if let Some(item) = item {
            observer.on_delivery(self.move_tick, agent.id, zone_id, item);
        }
    }

    /// Route agent `i` to a staging cell next to `target`; no state change
    /// when every staging cell is occupied or unreachable (the agent waits
    /// and the next arrival pass retries).
    fn replan(&mut self, i: usize, target: GridPos) {
        if let Some(d) = self.staging_cell(target, self.agents[i].pos) {
            self.agents[i].plan_route(&self.grid, d);
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` when no agent is mid-animation.
    pub fn all_settled(&self, now_ms: u64) -> bool {
        self.agents
            .iter()
            .all(|a| a.motion.settled(now_ms, self.config.animation_ms))
    }

    /// Render position of an agent, interpolated along its current step.
    /// `None` for an unknown ID.
    pub fn visual_position(&self, id: AgentId, now_ms: u64) -> Option<(f32, f32)> {
        let agent = self.agents.get(id.index())?;
        let m = &agent.motion;
        let t = m.progress(now_ms, self.config.animation_ms);
        let x = m.from.x as f32 + (m.to.x - m.from.x) as f32 * t;
        let y = m.from.y as f32 + (m.to.y - m.from.y) as f32 * t;
        Some((x, y))
    }

    /// Items delivered across all zones.
    pub fn delivered_total(&self) -> u64 {
        self.zones.iter().map(|z| z.received).sum()
    }

    /// Items generated but not yet delivered: buffered at generators plus
    /// carried by delivering agents.  (A fetching agent's copy is still the
    /// generator's item and is not double-counted.)
    pub fn items_outstanding(&self) -> u64 {
        let buffered = self.generators.iter().filter(|g| g.holding.is_some()).count();
        let carried = self
            .agents
            .iter()
            .filter(|a| a.phase == TaskPhase::ToDropoff && a.carrying.is_some())
            .count();
        (buffered + carried) as u64
    }

    pub fn items_generated(&self) -> u64 {
        self.items_generated
    }

    pub fn move_tick(&self) -> Tick {
        self.move_tick
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn generators(&self) -> &[Generator] {
        &self.generators
    }

    pub fn zones(&self) -> &[DropZone] {
        &self.zones
    }

    pub fn pending(&self) -> &VecDeque<GeneratorId> {
        &self.pending
    }

    // ── Convenience ───────────────────────────────────────────────────────

    /// Drive a synthetic clock from 0 to `duration_ms` in `step_ms`
    /// increments, ticking at each instant.  For headless runs and tests.
    pub fn run_for(&mut self, duration_ms: u64, step_ms: u64, observer: &mut dyn SimObserver) {
        let step = step_ms.max(1);
        let mut now = 0;
        while now <= duration_ms {
            self.tick(now, observer);
            now += step;
        }
    }
}
