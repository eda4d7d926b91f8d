//! Deterministic RNG for generated passenger traffic.
//!
//! The dispatcher itself is fully deterministic and never draws random
//! numbers.  Randomness only enters through generated call scripts, which
//! are seeded from `FleetConfig::seed` so that a run can be replayed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Direction, Floor};

/// Seeded RNG for traffic generation.
pub struct TrafficRng(SmallRng);

impl TrafficRng {
    pub fn new(seed: u64) -> Self {
        TrafficRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A uniformly random floor in `1..=floor_count`.
    pub fn floor(&mut self, floor_count: u32) -> Floor {
        Floor(self.0.gen_range(1..=floor_count.max(1)))
    }

    /// A button that actually exists on `floor`: the ground floor only has
    /// an up button and the top floor only a down button.
    pub fn direction_at(&mut self, floor: Floor, floor_count: u32) -> Direction {
        if floor.get() <= 1 {
            Direction::Up
        } else if floor.get() >= floor_count {
            Direction::Down
        } else if self.0.gen_bool(0.5) {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}
