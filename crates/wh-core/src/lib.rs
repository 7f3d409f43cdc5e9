//! `wh-core` — foundational types for the `whsim` warehouse fleet simulator.
//!
//! This crate is a dependency of every other `wh-*` crate.  It intentionally
//! has no `wh-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `AgentId`, `GeneratorId`, `ZoneId`                      |
//! | [`pos`]       | `GridPos`, Manhattan distance, cardinal stepping        |
//! | [`direction`] | `Direction` enum with deltas and opposites              |
//! | [`item`]      | `ItemAttrs` — the (size, fragility, priority) triple    |
//! | [`rng`]       | `AgentRng` (per-agent), `SimRng` (global)               |
//! | [`time`]      | `Tick`, `IntervalTimer`, `SimConfig`                    |
//! | [`error`]     | `WhError`, `WhResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod error;
pub mod ids;
pub mod item;
pub mod pos;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{WhError, WhResult};
pub use ids::{AgentId, GeneratorId, ZoneId};
pub use item::ItemAttrs;
pub use pos::GridPos;
pub use rng::{AgentRng, SimRng};
pub use time::{IntervalTimer, SimConfig, Tick};
