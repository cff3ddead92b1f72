//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `operations.csv`
//! - `tick_summaries.csv`
//! - `catastrophes.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CatastropheRow, OperationRecord, OutputResult, TickSummaryRow};

/// Writes mission output to three CSV files.
pub struct CsvWriter {
    operations:   Writer<File>,
    summaries:    Writer<File>,
    catastrophes: Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut operations = Writer::from_path(dir.join("operations.csv"))?;
        operations.write_record(["time", "kind", "vehicle", "node", "duration_min", "payload"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "operations", "destroyed", "replanned"])?;

        let mut catastrophes = Writer::from_path(dir.join("catastrophes.csv"))?;
        catastrophes.write_record(["name", "deadline", "status", "resolved_at", "outstanding"])?;

        Ok(Self { operations, summaries, catastrophes, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_operations(&mut self, rows: &[OperationRecord]) -> OutputResult<()> {
        for row in rows {
            self.operations.write_record(&[
                row.time.to_string(),
                row.kind.to_owned(),
                row.vehicle.clone(),
                row.node.clone(),
                format!("{:.2}", row.duration_min),
                row.payload.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.operations.to_string(),
            row.destroyed.to_string(),
            (row.replanned as u8).to_string(),
        ])?;
        Ok(())
    }

    fn write_catastrophes(&mut self, rows: &[CatastropheRow]) -> OutputResult<()> {
        for row in rows {
            self.catastrophes.write_record(&[
                row.name.clone(),
                row.deadline.to_string(),
                row.status.to_owned(),
                row.resolved_at.map(|t| t.to_string()).unwrap_or_default(),
                row.outstanding.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.operations.flush()?;
        self.summaries.flush()?;
        self.catastrophes.flush()?;
        Ok(())
    }
}
