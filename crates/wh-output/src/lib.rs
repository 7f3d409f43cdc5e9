//! `wh-output` — event log writers for warehouse runs.
//!
//! Two files are produced per run:
//!
//! | File             | One row per…     | Columns                                               |
//! |------------------|------------------|-------------------------------------------------------|
//! | `items.csv`      | generated item   | tick, generator, size, fragility, priority            |
//! | `deliveries.csv` | delivered item   | tick, agent, zone, size, fragility, priority          |
//!
//! The backend implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `wh_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wh_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! warehouse.run_for(120_000, 50, &mut obs);
//! obs.finish();
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DeliveryRow, ItemRow};
pub use writer::OutputWriter;
