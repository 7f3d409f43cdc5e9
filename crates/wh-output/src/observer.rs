//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use wh_core::{AgentId, GeneratorId, ItemAttrs, Tick, ZoneId};
use wh_sim::SimObserver;

use crate::row::{DeliveryRow, ItemRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that appends every generated item and completed
/// delivery to an [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run, flush with
/// [`finish`][Self::finish] and check [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Flush the backend.  Call once after the run.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_item_generated(&mut self, tick: Tick, source: GeneratorId, item: ItemAttrs) {
        let row = ItemRow {
            tick:         tick.0,
            generator_id: source.0,
            size:         item.size,
            fragility:    item.fragility,
            priority:     item.priority,
        };
        let result = self.writer.write_item(&row);
        self.store_err(result);
    }

    fn on_delivery(&mut self, tick: Tick, agent: AgentId, zone: ZoneId, item: ItemAttrs) {
        let row = DeliveryRow {
            tick:      tick.0,
            agent_id:  agent.0,
            zone:      zone.0,
            size:      item.size,
            fragility: item.fragility,
            priority:  item.priority,
        };
        let result = self.writer.write_delivery(&row);
        self.store_err(result);
    }
}
