//! `wh-fuzzy` — stateless fuzzy classification of items into drop zones.
//!
//! A pure function from an item's `(size, fragility, priority)` triple to a
//! [`ZoneId`](wh_core::ZoneId).  No state, no randomness: identical inputs
//! always yield identical zones, which the dispatcher relies on for
//! reproducible routing.
//!
//! | Module         | Contents                                          |
//! |----------------|---------------------------------------------------|
//! | [`membership`] | Low / Medium / High piecewise-linear memberships  |
//! | [`rules`]      | The five zone rules and [`classify`]              |

pub mod membership;
pub mod rules;


pub use membership::{high, low, medium};
pub use rules::{classify, RULE_COUNT};
