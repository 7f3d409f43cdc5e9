//! `wh-agent` — the mobile robots of the warehouse.
//!
//! An [`Agent`] owns a grid position, a planned path of cardinal moves, a
//! recovery stack for collision backtracking, and a task phase.  Each
//! movement round the dispatcher calls [`Agent::perform_move`], which
//! executes at most one atomic grid step under the collision-avoidance state
//! machine described on [`agent`].
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`state`] | `TaskPhase`, `Motion` (step-animation record)              |
//! | [`agent`] | `Agent` — planning, stepping, avoidance, recovery          |

pub mod agent;
pub mod state;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use state::{Motion, TaskPhase};
