//! Fleet and building configuration.

use crate::{LiftError, LiftResult};

/// Smallest building the core will simulate.
pub const MIN_FLOORS: u32 = 2;
/// Smallest fleet the core will simulate.
pub const MIN_LIFTS: u32 = 1;
/// Largest building the input layer accepts.
pub const MAX_FLOORS: u32 = 50;
/// Largest fleet the input layer accepts.
pub const MAX_LIFTS: u32 = 10;

/// Everything needed to initialize a dispatch session.
///
/// Typically built in code, or loaded from JSON by the application crate
/// (with the `serde` feature) and passed to `lift_sim::DispatchBuilder`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FleetConfig {
    /// Number of lift cars.  Ids run `1..=lift_count`.
    pub lift_count: u32,

    /// Number of floors.  Floors run `1..=floor_count`.
    pub floor_count: u32,

    /// Travel time for one floor of distance.  Default: 200.
    pub per_floor_ticks: u64,

    /// How long the doors stay open on arrival.  Default: 3000.
    /// Zero skips the doors phase entirely.
    pub door_hold_ticks: u64,

    /// Delay after the doors close before the lift counts as idle again.
    /// Default: 2000.
    pub settle_ticks: u64,

    /// Seed for generated traffic.  The same seed always produces the same
    /// call script.
    pub seed: u64,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            lift_count:      3,
            floor_count:     10,
            per_floor_ticks: 200,
            door_hold_ticks: 3_000,
            settle_ticks:    2_000,
            seed:            42,
        }
    }
}

impl FleetConfig {
    /// Config with the given sizes and default timings.
    pub fn new(lift_count: u32, floor_count: u32) -> Self {
        Self {
            lift_count,
            floor_count,
            ..Self::default()
        }
    }

    /// Reject sizes the core cannot simulate (`floor_count < 2`,
    /// `lift_count < 1`) and timings whose longest move does not fit in a
    /// `u64` tick count.
    pub fn validate(&self) -> LiftResult<()> {
        if self.floor_count < MIN_FLOORS {
            return Err(LiftError::TooFewFloors(self.floor_count));
        }
        if self.lift_count < MIN_LIFTS {
            return Err(LiftError::TooFewLifts(self.lift_count));
        }
        if self.longest_move_ticks().is_none() {
            return Err(LiftError::Config(format!(
                "timings overflow: {} floors at {} ticks each, plus {} door hold and {} settle",
                self.floor_count, self.per_floor_ticks, self.door_hold_ticks, self.settle_ticks
            )));
        }
        Ok(())
    }

    /// Ticks from departure to idle for a bottom-to-top move, or `None` if
    /// that overflows.
    pub fn longest_move_ticks(&self) -> Option<u64> {
        u64::from(self.floor_count.saturating_sub(1))
            .checked_mul(self.per_floor_ticks)?
            .checked_add(self.door_hold_ticks)?
            .checked_add(self.settle_ticks)
    }

    /// [`validate`](Self::validate) plus the input layer's upper limits
    /// (`MAX_FLOORS`, `MAX_LIFTS`).
    pub fn validate_supported(&self) -> LiftResult<()> {
        self.validate()?;
        if self.floor_count > MAX_FLOORS {
            return Err(LiftError::Config(format!(
                "only {MAX_FLOORS} floors are supported, got {}",
                self.floor_count
            )));
        }
        if self.lift_count > MAX_LIFTS {
            return Err(LiftError::Config(format!(
                "only {MAX_LIFTS} lifts are supported, got {}",
                self.lift_count
            )));
        }
        Ok(())
    }
}
