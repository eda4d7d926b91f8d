//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! abstract time unit; the default scale reads it as one millisecond, which
//! keeps the stock durations (200 per floor, 3000 doors open, 2000 settle)
//! exact integers.
//!
//! Nothing here reads the wall clock.  The simulation jumps the clock
//! straight to the next due timer, so a run covering minutes of simulated
//! time finishes instantly and is fully deterministic.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`, saturating at `u64::MAX`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0.saturating_add(n))
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        self.offset(rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The virtual clock owned by the dispatch system.
///
/// Unlike a per-tick loop, the clock is only ever moved forward with
/// [`advance_to`](Self::advance_to) to the next instant where something
/// happens.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many ticks make up one displayed second.  Default: 1000.
    pub ticks_per_second: u32,
    /// The current tick.
    pub current_tick: Tick,
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(1_000)
    }
}

impl SimClock {
    /// Create a clock at tick 0 with the given display resolution.
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            ticks_per_second: ticks_per_second.max(1),
            current_tick: Tick::ZERO,
        }
    }

    /// Move the clock forward to `tick`.  Moving backwards is a no-op.
    #[inline]
    pub fn advance_to(&mut self, tick: Tick) {
        if tick > self.current_tick {
            self.current_tick = tick;
        }
    }

    /// Break elapsed time into (minutes, seconds, millis) for log output.
    pub fn elapsed_msm(&self) -> (u64, u64, u64) {
        let per_sec = self.ticks_per_second as u64;
        let total_secs = self.current_tick.0 / per_sec;
        let millis = (self.current_tick.0 % per_sec) * 1_000 / per_sec;
        (total_secs / 60, total_secs % 60, millis)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s, ms) = self.elapsed_msm();
        write!(f, "{} ({:02}:{:02}.{:03})", self.current_tick, m, s, ms)
    }
}
