//! Fluent builder for constructing `Fleet` + `FloorRegistry` in one step.
//!
//! # Usage
//!
//! ```rust
//! use lift_core::{Floor, FleetConfig, LiftId};
//! use lift_fleet::FleetBuilder;
//!
//! let (fleet, registry) = FleetBuilder::new(&FleetConfig::new(3, 10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(fleet.len(), 3);
//! assert_eq!(registry.lookup(Floor(1)), &[LiftId(1), LiftId(2), LiftId(3)]);
//! ```

use lift_core::{Floor, FleetConfig, LiftError, LiftId, LiftResult};

use crate::{Fleet, FloorRegistry, Lift};

/// Fluent builder for [`Fleet`] + [`FloorRegistry`].
pub struct FleetBuilder {
    lift_count:  u32,
    floor_count: u32,
    starts:      Option<Vec<Floor>>,
}

impl FleetBuilder {
    /// Create a builder sized from `config`.
    pub fn new(config: &FleetConfig) -> Self {
        Self {
            lift_count:  config.lift_count,
            floor_count: config.floor_count,
            starts:      None,
        }
    }

    /// Supply the starting floor for each lift (must be length
    /// `lift_count`).
    ///
    /// If not called, every lift starts idle at floor 1.
    pub fn start_floors(mut self, starts: Vec<Floor>) -> Self {
        self.starts = Some(starts);
        self
    }

    /// Validate the sizes, create the lifts in id order, and place each one
    /// in its starting floor's collection.
    pub fn build(self) -> LiftResult<(Fleet, FloorRegistry)> {
        FleetConfig::new(self.lift_count, self.floor_count).validate()?;

        let starts = match self.starts {
            Some(s) => {
                if s.len() != self.lift_count as usize {
                    return Err(LiftError::Config(format!(
                        "{} start floors supplied for {} lifts",
                        s.len(),
                        self.lift_count
                    )));
                }
                s
            }
            None => vec![Floor::FIRST; self.lift_count as usize],
        };

        let mut registry = FloorRegistry::new(self.floor_count);
        let mut lifts = Vec::with_capacity(starts.len());

        for (i, floor) in starts.into_iter().enumerate() {
            if !registry.contains(floor) {
                return Err(LiftError::Config(format!(
                    "start floor {} is outside 1..={}",
                    floor.get(),
                    self.floor_count
                )));
            }
            let id = LiftId::from_slot(i);
            registry.insert(id, floor);
            lifts.push(Lift::new(id, floor));
        }

        Ok((Fleet::new(lifts), registry))
    }
}
