//! Seeded random call traffic.
//!
//! Produces a call script that looks like people pressing hall buttons:
//! uniformly random floors, a button that exists on that floor, and
//! random gaps between presses.

use lift_core::{FleetConfig, FloorCall, Tick, TrafficRng};

use crate::ScriptedCall;

/// Generates [`ScriptedCall`]s for a building.
///
/// ```rust
/// use lift_core::FleetConfig;
/// use lift_schedule::TrafficGenerator;
///
/// let config = FleetConfig::new(2, 8);
/// let script = TrafficGenerator::new(&config, 1_000).generate(20);
/// assert_eq!(script.len(), 20);
/// assert!(script.windows(2).all(|w| w[0].tick <= w[1].tick));
/// ```
pub struct TrafficGenerator {
    rng:         TrafficRng,
    floor_count: u32,
    max_gap:     u64,
    start:       Tick,
}

impl TrafficGenerator {
    /// A generator for `config`'s building, seeded from `config.seed`.
    /// Consecutive calls are between `0` and `max_gap` ticks apart.
    pub fn new(config: &FleetConfig, max_gap: u64) -> Self {
        Self {
            rng:         TrafficRng::new(config.seed),
            floor_count: config.floor_count,
            max_gap,
            start:       Tick::ZERO,
        }
    }

    /// Tick of the first generated call.  Default: 0.
    pub fn starting_at(mut self, start: Tick) -> Self {
        self.start = start;
        self
    }

    /// Produce `count` calls in ascending tick order.
    pub fn generate(&mut self, count: usize) -> Vec<ScriptedCall> {
        let mut tick = self.start;
        let mut calls = Vec::with_capacity(count);
        for i in 0..count {
            if i > 0 {
                tick = tick + self.rng.gen_range(0..=self.max_gap);
            }
            let floor = self.rng.floor(self.floor_count);
            let direction = self.rng.direction_at(floor, self.floor_count);
            calls.push(ScriptedCall::new(
                tick,
                FloorCall { floor: floor.get() as i64, direction: Some(direction) },
            ));
        }
        calls
    }
}
