//! The `OutputWriter` trait implemented by log backends.

use crate::{CallRow, LiftEventRow, OutputResult};

/// A sink for dispatch log rows.
///
/// [`EventLogObserver`][crate::EventLogObserver] stores the first error
/// instead of propagating it; see
/// [`take_error`][crate::EventLogObserver::take_error].
pub trait OutputWriter {
    /// Write one lift lifecycle event.
    fn write_lift_event(&mut self, row: &LiftEventRow) -> OutputResult<()>;

    /// Write one call-handling outcome.
    fn write_call(&mut self, row: &CallRow) -> OutputResult<()>;

    /// Flush all underlying file handles.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
