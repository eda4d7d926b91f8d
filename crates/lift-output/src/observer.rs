//! `EventLogObserver<W>` — bridges `DispatchObserver` to an `OutputWriter`.

use lift_core::{Floor, FloorCall, LiftId, Tick};
use lift_sim::DispatchObserver;

use crate::row::{CallRow, LiftEventRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`DispatchObserver`] that logs every call outcome and lift event to an
/// [`OutputWriter`].
///
/// Errors from the writer are stored because observer hooks have no return
/// value.  After the run, check with [`take_error`][Self::take_error].
///
/// The writer is flushed in `on_run_end`, which only
/// `run_until_idle` fires.  When driving the system with `step`,
/// `run_until` or `run_for`, call [`finish`][Self::finish] before
/// checking for errors.
pub struct EventLogObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> EventLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, or `None` if every write succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer, storing any error for
    /// [`take_error`][Self::take_error].  Safe to call more than once.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn call(&mut self, tick: Tick, call: FloorCall, outcome: &'static str) {
        let row = CallRow {
            tick:      tick.0,
            floor:     call.floor,
            direction: call.direction.map_or("", |d| d.as_str()),
            outcome,
        };
        let result = self.writer.write_call(&row);
        self.store_err(result);
    }

    fn event(&mut self, tick: Tick, lift: LiftId, event: &'static str, floor: Floor) {
        let row = LiftEventRow {
            tick:   tick.0,
            lift:   lift.get(),
            event,
            from:   floor.get(),
            to:     floor.get(),
            detail: 0,
        };
        let result = self.writer.write_lift_event(&row);
        self.store_err(result);
    }
}

impl<W: OutputWriter> DispatchObserver for EventLogObserver<W> {
    fn on_call_ignored(&mut self, tick: Tick, call: FloorCall) {
        self.call(tick, call, "ignored");
    }

    fn on_call_already_served(&mut self, tick: Tick, _floor: Floor, call: FloorCall) {
        self.call(tick, call, "already_served");
    }

    fn on_call_queued(&mut self, tick: Tick, _floor: Floor, call: FloorCall, _queue_len: usize) {
        self.call(tick, call, "queued");
    }

    fn on_call_dispatched(&mut self, tick: Tick, _floor: Floor, call: FloorCall, _lift: LiftId) {
        self.call(tick, call, "dispatched");
    }

    fn on_departure(&mut self, tick: Tick, lift: LiftId, from: Floor, to: Floor, travel_ticks: u64) {
        let row = LiftEventRow {
            tick:   tick.0,
            lift:   lift.get(),
            event:  "departure",
            from:   from.get(),
            to:     to.get(),
            detail: travel_ticks,
        };
        let result = self.writer.write_lift_event(&row);
        self.store_err(result);
    }

    fn on_reached(&mut self, tick: Tick, lift: LiftId, floor: Floor) {
        self.event(tick, lift, "reached", floor);
    }

    fn on_doors_opened(&mut self, tick: Tick, lift: LiftId, floor: Floor) {
        self.event(tick, lift, "doors_opened", floor);
    }

    fn on_doors_closed(&mut self, tick: Tick, lift: LiftId, floor: Floor) {
        self.event(tick, lift, "doors_closed", floor);
    }

    fn on_arrived_idle(&mut self, tick: Tick, lift: LiftId, floor: Floor) {
        self.event(tick, lift, "idle", floor);
    }

    fn on_pending_replayed(&mut self, tick: Tick, floor: Floor) {
        self.call(tick, FloorCall::from(floor), "replayed");
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        self.finish();
    }
}
