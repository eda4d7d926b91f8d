//! `lift-output` — dispatch log writers for the rust_lift simulator.
//!
//! | Backend | Files created                          |
//! |---------|----------------------------------------|
//! | CSV     | `lift_events.csv`, `call_log.csv`      |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`EventLogObserver`], which implements `lift_sim::DispatchObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, EventLogObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = EventLogObserver::new(writer);
//! sys.run_until_idle(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
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
pub use observer::EventLogObserver;
pub use row::{CallRow, LiftEventRow};
pub use writer::OutputWriter;
