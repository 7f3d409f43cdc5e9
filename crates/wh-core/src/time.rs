//! Simulation time model.
//!
//! # Design
//!
//! The dispatcher is driven by a host loop calling `tick(now_ms)` with a
//! monotonically increasing millisecond clock (wall time for interactive
//! hosts, a synthetic counter for headless runs and tests).  Two activities
//! run on independent cadences — item generation and fleet movement — each
//! gated by an [`IntervalTimer`].
//!
//! Completed movement rounds are counted by a [`Tick`]: an exact integer
//! useful for event logs and invariant checks, free of floating-point drift.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// A movement-round counter, advanced once per completed fleet step.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Advance by one round.
    #[inline]
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── IntervalTimer ─────────────────────────────────────────────────────────────

/// Elapsed-time gate for one of the dispatcher's cadences.
///
/// `ready(now)` reports whether the interval has passed since the last
/// [`mark`](Self::mark); it never consumes the firing, because a ready timer
/// may still be held back by another condition (the movement barrier waits
/// for the whole fleet to settle).  Callers `mark(now)` only once the
/// activity actually ran.
///
/// A fresh timer is immediately ready.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalTimer {
    pub interval_ms: u64,
    last_ms:         Option<u64>,
}

impl IntervalTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self { interval_ms, last_ms: None }
    }

    /// `true` once `interval_ms` has elapsed since the last `mark`.
    #[inline]
    pub fn ready(&self, now_ms: u64) -> bool {
        match self.last_ms {
            None       => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        }
    }

    /// Record that the gated activity ran at `now_ms`.
    #[inline]
    pub fn mark(&mut self, now_ms: u64) {
        self.last_ms = Some(now_ms);
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Consumed by the `wh-sim` builder; everything a host needs to set up a run
/// lives here, so a `(SimConfig, seed)` pair fully determines the world.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Grid height in cells.
    pub rows: usize,
    /// Grid width in cells.
    pub cols: usize,

    /// Number of item generators (default layout: left column).
    pub generator_count: usize,
    /// Number of drop zones, named "Z1".."Zn" (default layout: right column).
    pub zone_count: usize,
    /// Fleet size.
    pub agent_count: usize,

    /// Target obstacle density as a fraction of eligible free cells.
    /// The placer may fall short when connectivity forbids a placement.
    pub obstacle_density: f64,

    /// Milliseconds between fleet movement rounds.
    pub move_interval_ms: u64,
    /// Milliseconds between item-generation rounds.
    pub gen_interval_ms: u64,
    /// Per-generator firing probability at each generation round.
    pub gen_probability: f64,
    /// How long a single-cell step takes to animate.  The fleet moves in
    /// lockstep: no round starts until every agent's animation has settled.
    pub animation_ms: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for SimConfig {
    /// Constants of the reference warehouse: a 16×12 grid, four generators,
    /// five zones, four agents, 15% obstacle density, 500 ms movement rounds,
    /// 2 s generation rounds at 10% probability.
    fn default() -> Self {
        Self {
            rows:             12,
            cols:             16,
            generator_count:  4,
            zone_count:       5,
            agent_count:      4,
            obstacle_density: 0.15,
            move_interval_ms: 500,
            gen_interval_ms:  2_000,
            gen_probability:  0.1,
            animation_ms:     250,
            seed:             42,
        }
    }
}
