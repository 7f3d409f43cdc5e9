//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `items.csv`
//! - `deliveries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DeliveryRow, ItemRow, OutputResult};

/// Writes the run's event log to two CSV files.
pub struct CsvWriter {
    items:      Writer<File>,
    deliveries: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut items = Writer::from_path(dir.join("items.csv"))?;
        items.write_record(["tick", "generator_id", "size", "fragility", "priority"])?;

        let mut deliveries = Writer::from_path(dir.join("deliveries.csv"))?;
        deliveries.write_record(["tick", "agent_id", "zone", "size", "fragility", "priority"])?;

        Ok(Self {
            items,
            deliveries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_item(&mut self, row: &ItemRow) -> OutputResult<()> {
        self.items.write_record(&[
            row.tick.to_string(),
            row.generator_id.to_string(),
            format!("{:.2}", row.size),
            format!("{:.2}", row.fragility),
            format!("{:.2}", row.priority),
        ])?;
        Ok(())
    }

    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()> {
        self.deliveries.write_record(&[
            row.tick.to_string(),
            row.agent_id.to_string(),
            row.zone.to_string(),
            format!("{:.2}", row.size),
            format!("{:.2}", row.fragility),
            format!("{:.2}", row.priority),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.items.flush()?;
        self.deliveries.flush()?;
        Ok(())
    }
}
