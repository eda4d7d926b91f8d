//! Observer trait for rendering and data collection.

use lift_core::{Floor, FloorCall, LiftId, Tick};

/// Callbacks invoked by [`DispatchSystem`][crate::DispatchSystem] whenever
/// a call is handled or a lift changes phase.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  A renderer typically animates the car
/// on `on_departure` (it has the travel time), toggles the doors on
/// `on_doors_opened` / `on_doors_closed`, and does nothing else.
///
/// # Example: console printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl DispatchObserver for Printer {
///     fn on_departure(&mut self, tick: Tick, lift: LiftId, from: Floor, to: Floor, travel: u64) {
///         println!("{tick}: {lift} {from} -> {to} ({travel} ticks)");
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// A call for a floor outside the building was dropped.
    fn on_call_ignored(&mut self, _tick: Tick, _call: FloorCall) {}

    /// A call found a lift already parked at or claimed for its floor.
    fn on_call_already_served(&mut self, _tick: Tick, _floor: Floor, _call: FloorCall) {}

    /// A call found no idle lift and joined the pending queue.
    /// `queue_len` includes the new entry.
    fn on_call_queued(&mut self, _tick: Tick, _floor: Floor, _call: FloorCall, _queue_len: usize) {}

    /// `lift` was claimed for a call.  Fired just before `on_departure`.
    fn on_call_dispatched(&mut self, _tick: Tick, _floor: Floor, _call: FloorCall, _lift: LiftId) {}

    /// A lift was claimed and starts travelling.  `travel_ticks` is how long
    /// until it reaches `to`.
    fn on_departure(
        &mut self,
        _tick:         Tick,
        _lift:         LiftId,
        _from:         Floor,
        _to:           Floor,
        _travel_ticks: u64,
    ) {}

    /// A lift finished travelling.  Fired in both lifecycles, just before
    /// `on_doors_opened` when the doors phase is enabled.
    fn on_reached(&mut self, _tick: Tick, _lift: LiftId, _floor: Floor) {}

    fn on_doors_opened(&mut self, _tick: Tick, _lift: LiftId, _floor: Floor) {}

    fn on_doors_closed(&mut self, _tick: Tick, _lift: LiftId, _floor: Floor) {}

    /// A lift committed its new floor and is idle again.
    fn on_arrived_idle(&mut self, _tick: Tick, _lift: LiftId, _floor: Floor) {}

    /// The oldest pending call was taken off the queue for another attempt.
    /// The outcome of that attempt is reported through the call hooks.
    fn on_pending_replayed(&mut self, _tick: Tick, _floor: Floor) {}

    /// Called once when [`run_until_idle`][crate::DispatchSystem::run_until_idle]
    /// finishes.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
