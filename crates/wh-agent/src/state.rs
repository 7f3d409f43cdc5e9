//! Per-agent task phase and step-animation state.

use std::fmt;

use wh_core::GridPos;

// ── TaskPhase ─────────────────────────────────────────────────────────────────

/// Where an agent is in its pickup → classify → deliver cycle.
///
/// Invariant (checked by the dispatcher's debug assertions): an agent carries
/// an item if and only if it is en route — never while `Idle`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TaskPhase {
    /// No assignment; eligible for dispatch, wanders one random cell per round.
    #[default]
    Idle,
    /// Heading for a staging cell next to the pickup generator.
    ToPickup,
    /// Carrying an item toward a staging cell next to the classified zone.
    ToDropoff,
}

impl fmt::Display for TaskPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskPhase::Idle      => "idle",
            TaskPhase::ToPickup  => "pickup",
            TaskPhase::ToDropoff => "deliver",
        };
        write!(f, "{s}")
    }
}

// ── Motion ────────────────────────────────────────────────────────────────────

/// Record of the agent's most recent grid step, for animation.
///
/// The *logical* move is atomic — occupancy tags flip the instant the step
/// executes.  `Motion` only remembers where the step came from and when it
/// started, so a renderer can blend the agent's visual position between the
/// two cells, and so the dispatcher can hold the next movement round until
/// the whole fleet has settled.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motion {
    /// Cell the step departed from (equals `to` when stationary).
    pub from: GridPos,
    /// Cell the agent logically occupies.
    pub to: GridPos,
    /// Millisecond timestamp at which the step began.
    pub started_ms: u64,
}

impl Motion {
    /// A stationary record at `pos`.
    #[inline]
    pub fn stationary(pos: GridPos) -> Self {
        Self { from: pos, to: pos, started_ms: 0 }
    }

    /// `true` once the step's animation window has elapsed (or the agent
    /// never left its cell).
    #[inline]
    pub fn settled(&self, now_ms: u64, animation_ms: u64) -> bool {
        self.from == self.to || now_ms >= self.started_ms.saturating_add(animation_ms)
    }

    /// Fraction of the step completed at `now_ms`, in `[0, 1]`.
    /// Stationary agents report `1.0`.
    pub fn progress(&self, now_ms: u64, animation_ms: u64) -> f32 {
        if self.from == self.to || animation_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.started_ms) as f32;
        (elapsed / animation_ms as f32).min(1.0)
    }
}
