//! The `Agent` and its collision-avoidance state machine.
//!
//! # States
//!
//! - **Following** (`avoiding == false`): while the path queue is non-empty,
//!   attempt the front move each round.  If the target cell is occupied at
//!   execution time (a transient occupant — typically another agent), the
//!   failed move is re-queued at the front, the agent enters *Avoiding*, and
//!   it takes one random valid side-step, pushing that step's inverse onto
//!   the recovery stack.
//! - **Avoiding** (`avoiding == true`): each round, if the originally-blocked
//!   front move has become executable (from the agent's current cell), pop
//!   and execute one recovery step, unwinding toward the planned path; once
//!   the stack is empty, drop back to *Following*.  While the front move
//!   remains blocked, take a fresh random side-step instead, pushing its
//!   inverse.  If the path has drained entirely, unwind unconditionally.
//!
//! Idle agents (no path, no task) wander one random valid cell per round.
//! A *tasked* agent with an empty path stays put — the dispatcher re-plans
//! for it at arrival detection.
//!
//! Every step is atomic: either both occupancy tags flip (vacated cell
//! cleared, entered cell tagged) and the motion record updates, or nothing
//! changes and the caller sees `false`.

use std::collections::VecDeque;

use wh_core::{AgentId, AgentRng, Direction, GeneratorId, GridPos, ItemAttrs, ZoneId};
use wh_grid::{shortest_path, CellTag, Grid};

use crate::{Motion, TaskPhase};

/// A mobile warehouse robot.
///
/// Fields are `pub` for the dispatcher and the renderer's read-only queries;
/// mutation should flow through the methods so occupancy stays consistent.
#[derive(Debug)]
pub struct Agent {
    pub id: AgentId,

    /// Logical cell.  The grid cell at `pos` is always tagged
    /// [`CellTag::Agent`] for exactly this agent.
    pub pos: GridPos,
    /// Animation record of the most recent step.
    pub motion: Motion,

    pub phase: TaskPhase,
    /// Planned moves, consumed from the front.
    pub path: VecDeque<Direction>,
    /// Inverse moves that undo collision-avoidance detours, popped from the top.
    pub recovery: Vec<Direction>,
    /// `true` while in the Avoiding state.
    pub avoiding: bool,

    /// Attribute triple of the item being fetched or carried.
    pub carrying: Option<ItemAttrs>,
    /// Generator this agent is fetching from (phase `ToPickup`).
    pub pickup_target: Option<GeneratorId>,
    /// Zone this agent is delivering to (phase `ToDropoff`).
    pub delivery_target: Option<ZoneId>,
}

impl Agent {
    /// Place a new idle agent at `pos`, tagging the grid cell.
    ///
    /// `pos` must be a free cell; debug builds assert it.
    pub fn new(id: AgentId, pos: GridPos, grid: &mut Grid) -> Self {
        debug_assert_eq!(grid.tag(pos), CellTag::Empty);
        grid.set_tag(pos, CellTag::Agent);
        Self {
            id,
            pos,
            motion: Motion::stationary(pos),
            phase: TaskPhase::Idle,
            path: VecDeque::new(),
            recovery: Vec::new(),
            avoiding: false,
            carrying: None,
            pickup_target: None,
            delivery_target: None,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` when the agent has consumed its plan and is not mid-detour:
    /// the condition under which the dispatcher evaluates arrival.
    #[inline]
    pub fn route_complete(&self) -> bool {
        self.path.is_empty() && !self.avoiding && self.recovery.is_empty()
    }

    /// `true` if stepping `dir` from the current cell would succeed now.
    #[inline]
    pub fn can_step(&self, grid: &Grid, dir: Direction) -> bool {
        grid.is_free(self.pos.step(dir))
    }

    // ── Planning ──────────────────────────────────────────────────────────

    /// Replace the current plan with a BFS shortest path to `dest`, clearing
    /// any avoidance state.
    ///
    /// Returns `false` when `dest` is unreachable (the path stays empty and
    /// the agent stands still); the caller decides whether to postpone.
    /// Planning to the current cell is a trivially complete route.
    pub fn plan_route(&mut self, grid: &Grid, dest: GridPos) -> bool {
        let moves = shortest_path(grid, self.pos, dest);
        let reachable = !moves.is_empty() || self.pos == dest;
        self.path = moves.into();
        self.recovery.clear();
        self.avoiding = false;
        reachable
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Execute one atomic grid step.  Fails (returning `false`, with no state
    /// change) when the target cell is out of bounds or not empty.
    pub fn step(&mut self, grid: &mut Grid, dir: Direction, now_ms: u64) -> bool {
        let next = self.pos.step(dir);
        if !grid.is_free(next) {
            return false;
        }
        debug_assert_eq!(grid.tag(self.pos), CellTag::Agent);
        grid.set_tag(self.pos, CellTag::Empty);
        grid.set_tag(next, CellTag::Agent);
        self.motion = Motion { from: self.pos, to: next, started_ms: now_ms };
        self.pos = next;
        true
    }

    /// Advance the state machine by at most one step.  Called once per
    /// movement round by the dispatcher; the dispatcher guarantees the whole
    /// fleet is settled before any agent moves.
    pub fn perform_move(&mut self, grid: &mut Grid, rng: &mut AgentRng, now_ms: u64) {
        if self.avoiding {
            self.perform_avoiding(grid, rng, now_ms);
            return;
        }

        // Following.
        if let Some(dir) = self.path.pop_front() {
            if !self.step(grid, dir, now_ms) {
                // Blocked at execution time: re-queue the move and detour.
                self.path.push_front(dir);
                self.avoiding = true;
                self.sidestep(grid, rng, now_ms);
            }
        } else if self.phase == TaskPhase::Idle {
            self.wander(grid, rng, now_ms);
        }
    }

    /// One round of the Avoiding state.
    fn perform_avoiding(&mut self, grid: &mut Grid, rng: &mut AgentRng, now_ms: u64) {
        match self.path.front() {
            Some(&blocked) => {
                if self.can_step(grid, blocked) {
                    // The way is clear: unwind one recovery step, or rejoin
                    // the path next round if fully unwound.
                    match self.recovery.pop() {
                        Some(back) => {
                            self.step(grid, back, now_ms);
                        }
                        None => self.avoiding = false,
                    }
                } else {
                    self.sidestep(grid, rng, now_ms);
                }
            }
            None => {
                // Path drained mid-detour: unwind unconditionally.
                match self.recovery.pop() {
                    Some(back) => {
                        self.step(grid, back, now_ms);
                    }
                    None => self.avoiding = false,
                }
            }
        }
    }

    /// Take one random valid side-step and record its inverse on the
    /// recovery stack.  Boxed-in agents stay put and retry next round.
    fn sidestep(&mut self, grid: &mut Grid, rng: &mut AgentRng, now_ms: u64) {
        let mut dirs = Direction::ALL;
        rng.shuffle(&mut dirs);
        for dir in dirs {
            if self.step(grid, dir, now_ms) {
                self.recovery.push(dir.opposite());
                return;
            }
        }
    }

    /// One random valid cardinal move — idle exploration.  No task effect.
    fn wander(&mut self, grid: &mut Grid, rng: &mut AgentRng, now_ms: u64) {
        let mut dirs = Direction::ALL;
        rng.shuffle(&mut dirs);
        for dir in dirs {
            if self.step(grid, dir, now_ms) {
                return;
            }
        }
    }
}
