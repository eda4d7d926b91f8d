//! Travel-time models.

use lift_core::{Floor, FleetConfig};

/// How long a lift takes to get from one floor to another.
///
/// The engine is generic over this trait so alternative timing (e.g. an
/// express zone, acceleration curves) can be swapped in at compile time
/// without touching dispatch.
pub trait TravelModel {
    /// Ticks spent travelling from `from` to `to`.
    fn travel_ticks(&self, from: Floor, to: Floor) -> u64;
}

/// Constant speed: `|to − from| × per_floor_ticks`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LinearTravel {
    pub per_floor_ticks: u64,
}

impl LinearTravel {
    pub fn new(per_floor_ticks: u64) -> Self {
        Self { per_floor_ticks }
    }

    pub fn from_config(config: &FleetConfig) -> Self {
        Self::new(config.per_floor_ticks)
    }
}

impl TravelModel for LinearTravel {
    #[inline]
    fn travel_ticks(&self, from: Floor, to: Floor) -> u64 {
        from.distance(to) * self.per_floor_ticks
    }
}
