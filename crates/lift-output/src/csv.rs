//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `lift_events.csv`
//! - `call_log.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CallRow, LiftEventRow, OutputResult};

/// Writes dispatch logs to two CSV files.
pub struct CsvWriter {
    events:   Writer<File>,
    calls:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files, and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join("lift_events.csv"))?;
        events.write_record(["tick", "lift", "event", "from", "to", "detail"])?;

        let mut calls = Writer::from_path(dir.join("call_log.csv"))?;
        calls.write_record(["tick", "floor", "direction", "outcome"])?;

        Ok(Self { events, calls, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_lift_event(&mut self, row: &LiftEventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.tick.to_string(),
            row.lift.to_string(),
            row.event.to_owned(),
            row.from.to_string(),
            row.to.to_string(),
            row.detail.to_string(),
        ])?;
        Ok(())
    }

    fn write_call(&mut self, row: &CallRow) -> OutputResult<()> {
        self.calls.write_record(&[
            row.tick.to_string(),
            row.floor.to_string(),
            row.direction.to_owned(),
            row.outcome.to_owned(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.calls.flush()?;
        Ok(())
    }
}
