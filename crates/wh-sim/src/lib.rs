//! `wh-sim` — world setup and the warehouse dispatcher.
//!
//! Owns everything above the individual agent: the grid with its generator
//! and drop-zone markers, obstacle placement, the pending-work queue, task
//! assignment, the lockstep movement barrier, and pickup/delivery
//! resolution.  Item attributes are classified to a destination zone by
//! [`wh_fuzzy::classify`] at the moment of pickup.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`world`]    | `Generator` (single-item buffer), `DropZone`          |
//! | [`builder`]  | `WarehouseBuilder` — layout, obstacles, fleet         |
//! | [`sim`]      | `Warehouse` — the tick loop                           |
//! | [`observer`] | `SimObserver` lifecycle callbacks, `NoopObserver`     |
//! | [`error`]    | `SimError`, `SimResult`                               |

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod world;


pub use builder::WarehouseBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Warehouse;
pub use world::{DropZone, Generator};
