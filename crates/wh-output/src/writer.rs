//! The `OutputWriter` trait implemented by backend writers.

use crate::{DeliveryRow, ItemRow, OutputResult};

/// Trait implemented by the CSV backend (and any future ones).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one generated-item row.
    fn write_item(&mut self, row: &ItemRow) -> OutputResult<()>;

    /// Write one delivery row.
    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
