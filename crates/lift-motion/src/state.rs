//! Per-lift movement state.

use lift_core::{Floor, Tick};

/// Where a lift is in its call lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum LiftPhase {
    /// Resting at `origin`; eligible for dispatch.
    #[default]
    Idle,
    /// Travelling from `origin` to `destination`.
    Departing,
    /// At `destination` with the doors held open.
    DoorsOpen,
    /// Doors closed; waiting out the settle delay before going idle.
    Settling,
}

impl LiftPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            LiftPhase::Idle      => "idle",
            LiftPhase::Departing => "departing",
            LiftPhase::DoorsOpen => "doors_open",
            LiftPhase::Settling  => "settling",
        }
    }
}

impl std::fmt::Display for LiftPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The movement state for a single lift.
///
/// When idle, `origin == destination` and both name the resting floor.
/// While a move is in progress `origin` stays at the departure floor until
/// the lift settles; renderers interpolate between the two using
/// [`progress`](Self::progress).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementState {
    pub phase: LiftPhase,

    /// Floor the current move started from (or the resting floor when idle).
    pub origin: Floor,

    /// Floor the lift is heading to.  Equals `origin` when idle.
    pub destination: Floor,

    /// Tick at which the current move began.
    pub departure_tick: Tick,

    /// Tick at which travel ends and the lift reaches `destination`.
    pub arrival_tick: Tick,

    /// Tick at which the current phase ends.  Equals `arrival_tick` while
    /// departing; meaningless when idle.
    pub phase_ends: Tick,
}

impl MovementState {
    /// An idle lift resting at `floor`.
    #[inline]
    pub fn resting(floor: Floor, tick: Tick) -> Self {
        Self {
            phase:          LiftPhase::Idle,
            origin:         floor,
            destination:    floor,
            departure_tick: tick,
            arrival_tick:   tick,
            phase_ends:     tick,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.phase == LiftPhase::Idle
    }

    /// Fraction of the travel leg completed at `now`, in `[0.0, 1.0]`.
    ///
    /// Returns `1.0` once the lift has reached its destination (doors open,
    /// settling, idle) or when travel takes zero ticks.
    pub fn progress(&self, now: Tick) -> f32 {
        if self.phase != LiftPhase::Departing || self.arrival_tick <= self.departure_tick {
            return 1.0;
        }
        let elapsed = now.since(self.departure_tick) as f32;
        let total   = (self.arrival_tick - self.departure_tick) as f32;
        (elapsed / total).min(1.0)
    }
}
