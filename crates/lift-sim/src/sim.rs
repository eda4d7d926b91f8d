//! The `DispatchSystem` struct and its timer-driven run loop.

use lift_core::{Floor, FleetConfig, FloorCall, LiftId, SimClock, Tick};
use lift_fleet::{Fleet, FloorRegistry, Lift, LiftStatus};
use lift_motion::{LinearTravel, MotionEngine, MotionEvent, TravelModel};
use lift_schedule::{PendingQueue, TimerQueue};
use tracing::{debug, trace};

use crate::dispatcher::{claim, nearest_idle, CallOutcome};
use crate::{DispatchObserver, NoopObserver, SimResult};

// ── DispatchSystem ────────────────────────────────────────────────────────────

/// All dispatch state for one building, owned in one place.
///
/// Every operation takes `&mut self`, so each call handling and each phase
/// transition runs to completion before the next one starts.  To drive it
/// from several threads, put it behind a single owner (a `Mutex` or one
/// worker thread receiving calls over a channel).
///
/// Time only moves when asked to:
///
/// - [`request_call`](Self::request_call) handles a call at the current tick.
/// - [`step`](Self::step) jumps to the next tick with something due and
///   handles everything due then.
/// - [`run_until`](Self::run_until), [`run_for`](Self::run_for) and
///   [`run_until_idle`](Self::run_until_idle) repeat `step`.
///
/// Within one tick, lift timers fire first (in the order they were
/// scheduled, including timers created during that same tick), then
/// scripted calls due at that tick are delivered in script order.
///
/// Create via [`DispatchBuilder`][crate::DispatchBuilder].
pub struct DispatchSystem<T: TravelModel = LinearTravel> {
    /// Fleet and building configuration.
    pub config: FleetConfig,

    /// Virtual clock.
    pub clock: SimClock,

    /// Every lift, indexed by `LiftId`.
    pub fleet: Fleet,

    /// Floor → lifts parked at or claimed for that floor.
    pub registry: FloorRegistry,

    /// Movement phases and timings.
    pub motion: MotionEngine<T>,

    /// Calls that found no idle lift, oldest first.
    pub pending: PendingQueue,

    /// Lift phase timers.  Each moving lift has exactly one entry.
    pub timers: TimerQueue<LiftId>,

    /// External calls scheduled for future ticks.
    pub script: TimerQueue<FloorCall>,
}

impl<T: TravelModel> DispatchSystem<T> {
    // ── Inspection ────────────────────────────────────────────────────────

    /// Current simulation tick.
    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    /// The lift with `id`, or `None` if no such lift exists.
    pub fn lift(&self, id: LiftId) -> Option<&Lift> {
        self.fleet.contains(id).then(|| self.fleet.get(id))
    }

    /// All lifts in id order.
    pub fn lifts(&self) -> impl Iterator<Item = &Lift> + '_ {
        self.fleet.iter()
    }

    pub fn registry(&self) -> &FloorRegistry {
        &self.registry
    }

    /// Floors waiting for a lift, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = Floor> + '_ {
        self.pending.iter()
    }

    /// `true` when no lift is moving and nothing is scheduled.
    ///
    /// Calls may still sit in the pending queue: a replay that finds a lift
    /// already at its floor consumes the idle event that triggered it.
    pub fn is_quiescent(&self) -> bool {
        self.timers.is_empty() && self.script.is_empty()
    }

    /// `true` if every lift is listed at exactly one floor.
    pub fn check_partition(&self) -> bool {
        self.registry.is_partition_of(self.fleet.len())
    }

    // ── Calls ─────────────────────────────────────────────────────────────

    /// Handle a call from `floor` at the current tick, without an observer.
    pub fn request_floor(&mut self, floor: i64) -> SimResult<CallOutcome> {
        self.request_call(FloorCall::at(floor), &mut NoopObserver)
    }

    /// Handle `call` at the current tick.
    ///
    /// Out-of-range floors are ignored.  A floor that already lists a lift
    /// is considered served.  Otherwise the nearest idle lift is claimed
    /// for the floor, or the call is queued when none is idle.
    pub fn request_call<O: DispatchObserver>(
        &mut self,
        call:     FloorCall,
        observer: &mut O,
    ) -> SimResult<CallOutcome> {
        let now = self.now();

        let Some(floor) = Floor::checked(call.floor, self.registry.floor_count()) else {
            debug!(floor = call.floor, "call outside building ignored");
            observer.on_call_ignored(now, call);
            return Ok(CallOutcome::Ignored);
        };

        if self.registry.is_occupied(floor) {
            trace!(floor = floor.get(), "lift already at floor");
            observer.on_call_already_served(now, floor, call);
            return Ok(CallOutcome::AlreadyServed);
        }

        let Some((lift, from)) = nearest_idle(floor, &self.registry, &self.fleet) else {
            self.pending.push(floor);
            debug!(floor = floor.get(), pending = self.pending.len(), "no idle lift, call queued");
            observer.on_call_queued(now, floor, call, self.pending.len());
            return Ok(CallOutcome::Queued);
        };

        let arrival = self.motion.begin_move(lift, from, floor, now)?;
        claim(lift, from, floor, &mut self.registry, &mut self.fleet);
        self.timers.push(arrival, lift);

        let travel_ticks = arrival - now;
        debug!(
            lift = lift.get(),
            from = from.get(),
            to = floor.get(),
            travel_ticks,
            "lift dispatched"
        );
        observer.on_call_dispatched(now, floor, call, lift);
        observer.on_departure(now, lift, from, floor, travel_ticks);

        Ok(CallOutcome::Dispatched { lift, from, to: floor, travel_ticks })
    }

    /// Deliver `call` when the clock reaches `tick`.  Ticks in the past are
    /// delivered at the next step.
    pub fn schedule_call(&mut self, tick: Tick, call: FloorCall) {
        self.script.push(tick.max(self.now()), call);
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// The next tick with a timer or scripted call due.
    pub fn next_event_tick(&self) -> Option<Tick> {
        match (self.timers.next_tick(), self.script.next_tick()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Jump to the next tick with something due and handle all of it.
    ///
    /// Returns the tick handled, or `None` if nothing is scheduled.
    pub fn step<O: DispatchObserver>(&mut self, observer: &mut O) -> SimResult<Option<Tick>> {
        let Some(tick) = self.next_event_tick() else {
            return Ok(None);
        };
        self.process_tick(tick, observer)?;
        Ok(Some(tick))
    }

    /// Handle everything due up to and including `until`, then leave the
    /// clock at `until`.
    pub fn run_until<O: DispatchObserver>(&mut self, until: Tick, observer: &mut O) -> SimResult<()> {
        while let Some(tick) = self.next_event_tick() {
            if tick > until {
                break;
            }
            self.process_tick(tick, observer)?;
        }
        self.clock.advance_to(until);
        Ok(())
    }

    /// [`run_until`](Self::run_until) `ticks` from now.
    pub fn run_for<O: DispatchObserver>(&mut self, ticks: u64, observer: &mut O) -> SimResult<()> {
        let until = self.now() + ticks;
        self.run_until(until, observer)
    }

    /// Run until no lift is moving and no scripted call remains.
    ///
    /// Always terminates: each lift holds at most one timer, every move
    /// ends, and a settle replays at most one pending call.  Returns the
    /// final tick.
    pub fn run_until_idle<O: DispatchObserver>(&mut self, observer: &mut O) -> SimResult<Tick> {
        while self.step(observer)?.is_some() {}
        let end = self.now();
        observer.on_run_end(end);
        Ok(end)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: DispatchObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<usize> {
        self.clock.advance_to(now);
        let mut handled = 0;

        loop {
            // ── Phase 1: lift timers ──────────────────────────────────────
            if let Some(lifts) = self.timers.drain_tick(now) {
                for lift in lifts {
                    self.fire_timer(lift, now, observer)?;
                    handled += 1;
                }
                continue;
            }

            // ── Phase 2: scripted calls ───────────────────────────────────
            if let Some(calls) = self.script.drain_tick(now) {
                for call in calls {
                    self.request_call(call, observer)?;
                    handled += 1;
                }
                continue;
            }

            break;
        }

        trace!(tick = now.0, handled, "tick processed");
        Ok(handled)
    }

    /// Advance `lift` one phase and schedule its next timer.
    fn fire_timer<O: DispatchObserver>(
        &mut self,
        lift:     LiftId,
        now:      Tick,
        observer: &mut O,
    ) -> SimResult<()> {
        let transition = self.motion.advance(lift, now)?;

        match transition.event {
            MotionEvent::Reached { floor, doors_opened } => {
                trace!(lift = lift.get(), floor = floor.get(), doors_opened, "lift reached floor");
                observer.on_reached(now, lift, floor);
                if doors_opened {
                    observer.on_doors_opened(now, lift, floor);
                }
            }

            MotionEvent::DoorsClosed { floor } => {
                trace!(lift = lift.get(), floor = floor.get(), "doors closed");
                observer.on_doors_closed(now, lift, floor);
            }

            MotionEvent::Settled { floor } => {
                let record = self.fleet.get_mut(lift);
                record.floor = floor;
                record.status = LiftStatus::Idle;
                debug!(lift = lift.get(), floor = floor.get(), "lift idle");
                observer.on_arrived_idle(now, lift, floor);
                self.replay_pending(now, observer)?;
            }
        }

        if let Some(deadline) = transition.next_deadline {
            self.timers.push(deadline, lift);
        }
        Ok(())
    }

    /// Give the oldest pending call one more attempt.
    fn replay_pending<O: DispatchObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        let Some(floor) = self.pending.pop() else {
            return Ok(());
        };
        debug!(floor = floor.get(), remaining = self.pending.len(), "replaying pending call");
        observer.on_pending_replayed(now, floor);
        self.request_call(FloorCall::from(floor), observer)?;
        Ok(())
    }
}
