//! `wh-grid` — the warehouse floor.
//!
//! # Data layout
//!
//! The grid is a flat row-major `Vec<CellTag>` of `rows × cols` cells; each
//! cell holds exactly one tag.  The grid is pure data plus a narrow query and
//! single-cell mutation surface — all *behavior* (movement, placement policy,
//! task logic) lives in the crates above it.
//!
//! # Modules
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`cell`]   | `CellTag` — the closed set of cell states                |
//! | [`grid`]   | `Grid` — bounds, tags, adjacency queries, ASCII dump     |
//! | [`path`]   | BFS shortest path and reachability over the grid         |
//! | [`placer`] | `ObstaclePlacer` — density-targeted, connectivity-safe   |

pub mod cell;
pub mod grid;
pub mod path;
pub mod placer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::CellTag;
pub use grid::Grid;
pub use path::{exists_path, shortest_path};
pub use placer::{connectivity_holds, ObstaclePlacer};
