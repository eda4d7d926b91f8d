//! High-level motion engine: starts moves and steps them through their
//! phases as timers fire.

use lift_core::{Floor, FleetConfig, LiftId, Tick};

use crate::{LiftPhase, MotionError, MotionResult, MovementState, TravelModel};

/// What happened to a lift when one of its timers fired.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MotionEvent {
    /// Travel finished at `floor`.  `doors_opened` is `false` when the
    /// doors phase is disabled and the lift went straight to settling.
    Reached { floor: Floor, doors_opened: bool },
    /// The door hold ended and the doors closed at `floor`.
    DoorsClosed { floor: Floor },
    /// The settle delay ended; the lift is idle at `floor`.
    Settled { floor: Floor },
}

/// Result of [`MotionEngine::advance`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PhaseTransition {
    pub lift:  LiftId,
    pub event: MotionEvent,
    /// When the phase just entered ends, or `None` if the lift is now idle.
    pub next_deadline: Option<Tick>,
}

/// Owns the movement state of every lift and the phase timings.
///
/// # Type parameter
///
/// `T` must implement [`TravelModel`] (e.g. [`crate::LinearTravel`]).
pub struct MotionEngine<T: TravelModel> {
    /// The travel-time model.
    pub travel: T,

    /// How long the doors stay open.  Zero skips the doors phase.
    pub door_hold_ticks: u64,

    /// Delay after the doors close before the lift is idle.
    pub settle_ticks: u64,

    /// Per-lift state, indexed by `LiftId::slot()`.
    pub states: Vec<MovementState>,
}

impl<T: TravelModel> MotionEngine<T> {
    /// Create an engine with every lift resting at `Floor::FIRST`, using
    /// the door and settle timings from `config`.
    pub fn new(travel: T, config: &FleetConfig) -> Self {
        Self {
            travel,
            door_hold_ticks: config.door_hold_ticks,
            settle_ticks:    config.settle_ticks,
            states:          vec![
                MovementState::resting(Floor::FIRST, Tick::ZERO);
                config.lift_count as usize
            ],
        }
    }

    /// Teleport `lift` to `floor` without a move (initial placement).
    pub fn place(&mut self, lift: LiftId, floor: Floor, tick: Tick) -> MotionResult<()> {
        *self.state_mut(lift)? = MovementState::resting(floor, tick);
        Ok(())
    }

    /// Movement state of `lift`.
    pub fn state(&self, lift: LiftId) -> MotionResult<&MovementState> {
        if lift.get() == 0 {
            return Err(MotionError::UnknownLift(lift));
        }
        self.states.get(lift.slot()).ok_or(MotionError::UnknownLift(lift))
    }

    fn state_mut(&mut self, lift: LiftId) -> MotionResult<&mut MovementState> {
        if lift.get() == 0 {
            return Err(MotionError::UnknownLift(lift));
        }
        self.states.get_mut(lift.slot()).ok_or(MotionError::UnknownLift(lift))
    }

    /// Start moving `lift` from `origin` to `destination` at `now`.
    ///
    /// Returns the tick at which travel ends, to be inserted into the
    /// timer queue.  A lift that is not idle cannot be redirected.
    pub fn begin_move(
        &mut self,
        lift:        LiftId,
        origin:      Floor,
        destination: Floor,
        now:         Tick,
    ) -> MotionResult<Tick> {
        let travel = self.travel.travel_ticks(origin, destination);
        let state = self.state_mut(lift)?;
        if !state.is_idle() {
            return Err(MotionError::AlreadyMoving(lift));
        }

        let arrival_tick = now + travel;
        *state = MovementState {
            phase:          LiftPhase::Departing,
            origin,
            destination,
            departure_tick: now,
            arrival_tick,
            phase_ends:     arrival_tick,
        };
        Ok(arrival_tick)
    }

    /// Move `lift` into its next phase.  Call when the lift's timer fires.
    pub fn advance(&mut self, lift: LiftId, now: Tick) -> MotionResult<PhaseTransition> {
        let door_hold = self.door_hold_ticks;
        let settle = self.settle_ticks;
        let state = self.state_mut(lift)?;
        debug_assert!(now >= state.phase_ends, "{lift} advanced before its timer");
        let floor = state.destination;

        let (event, next_deadline) = match state.phase {
            LiftPhase::Idle => return Err(MotionError::NotMoving(lift)),

            LiftPhase::Departing if door_hold > 0 => {
                state.phase = LiftPhase::DoorsOpen;
                state.phase_ends = now + door_hold;
                (MotionEvent::Reached { floor, doors_opened: true }, Some(state.phase_ends))
            }

            LiftPhase::Departing => {
                state.phase = LiftPhase::Settling;
                state.phase_ends = now + settle;
                (MotionEvent::Reached { floor, doors_opened: false }, Some(state.phase_ends))
            }

            LiftPhase::DoorsOpen => {
                state.phase = LiftPhase::Settling;
                state.phase_ends = now + settle;
                (MotionEvent::DoorsClosed { floor }, Some(state.phase_ends))
            }

            LiftPhase::Settling => {
                *state = MovementState::resting(floor, now);
                (MotionEvent::Settled { floor }, None)
            }
        };

        Ok(PhaseTransition { lift, event, next_deadline })
    }

    /// Interpolated position for `lift` at `now`.
    ///
    /// Returns `(origin, destination, progress)` where `progress` is in
    /// `[0.0, 1.0]`.
    pub fn visual_position(&self, lift: LiftId, now: Tick) -> MotionResult<(Floor, Floor, f32)> {
        let state = self.state(lift)?;
        Ok((state.origin, state.destination, state.progress(now)))
    }

    /// Number of lifts with a move in progress.
    pub fn moving_count(&self) -> usize {
        self.states.iter().filter(|s| !s.is_idle()).count()
    }
}
