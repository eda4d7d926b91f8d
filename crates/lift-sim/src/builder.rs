//! Fluent builder for constructing a [`DispatchSystem`].

use lift_core::{Floor, FleetConfig, LiftId, SimClock, Tick};
use lift_fleet::FleetBuilder;
use lift_motion::{LinearTravel, MotionEngine, TravelModel};
use lift_schedule::{PendingQueue, ScriptedCall, TimerQueue};
use tracing::info;

use crate::{DispatchSystem, SimResult};

/// Fluent builder for [`DispatchSystem<T>`].
///
/// # Required inputs
///
/// - [`FleetConfig`]: lift and floor counts, phase timings, seed
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                                  |
/// |-----------------------|------------------------------------------|
/// | `.start_floors(v)`    | Every lift at floor 1                    |
/// | `.script(v)`          | No scripted calls                        |
/// | `.travel_model(t)`    | `LinearTravel` at `per_floor_ticks`      |
///
/// # Example
///
/// ```rust
/// use lift_core::{Floor, FleetConfig};
/// use lift_sim::{CallOutcome, DispatchBuilder};
///
/// let mut sys = DispatchBuilder::new(FleetConfig::new(2, 10))
///     .start_floors(vec![Floor(1), Floor(8)])
///     .build()
///     .unwrap();
///
/// assert!(matches!(sys.request_floor(9).unwrap(), CallOutcome::Dispatched { .. }));
/// ```
pub struct DispatchBuilder<T: TravelModel = LinearTravel> {
    config: FleetConfig,
    travel: T,
    starts: Option<Vec<Floor>>,
    script: Vec<ScriptedCall>,
}

impl DispatchBuilder<LinearTravel> {
    /// Create a builder with linear travel timed from `config`.
    pub fn new(config: FleetConfig) -> Self {
        let travel = LinearTravel::from_config(&config);
        Self {
            config,
            travel,
            starts: None,
            script: Vec::new(),
        }
    }
}

impl<T: TravelModel> DispatchBuilder<T> {
    /// Replace the travel-time model.
    pub fn travel_model<U: TravelModel>(self, travel: U) -> DispatchBuilder<U> {
        DispatchBuilder {
            config: self.config,
            travel,
            starts: self.starts,
            script: self.script,
        }
    }

    /// Supply the starting floor for each lift (must be length
    /// `lift_count`).
    pub fn start_floors(mut self, starts: Vec<Floor>) -> Self {
        self.starts = Some(starts);
        self
    }

    /// Supply calls to deliver at fixed ticks during the run.
    pub fn script(mut self, script: Vec<ScriptedCall>) -> Self {
        self.script = script;
        self
    }

    /// Validate the configuration, place every lift, and return a
    /// ready-to-run [`DispatchSystem`] at tick 0.
    pub fn build(self) -> SimResult<DispatchSystem<T>> {
        self.config.validate()?;

        let mut fleet_builder = FleetBuilder::new(&self.config);
        if let Some(starts) = self.starts {
            fleet_builder = fleet_builder.start_floors(starts);
        }
        let (fleet, registry) = fleet_builder.build()?;

        // ── Place lifts in the motion engine ──────────────────────────────
        let mut motion = MotionEngine::new(self.travel, &self.config);
        for lift in fleet.iter() {
            motion.place(lift.id, lift.floor, Tick::ZERO)?;
        }

        let script: TimerQueue<_> = self
            .script
            .into_iter()
            .map(|s| (s.tick, s.call))
            .collect();

        info!(
            lifts = self.config.lift_count,
            floors = self.config.floor_count,
            scripted_calls = script.len(),
            "dispatch system ready"
        );

        Ok(DispatchSystem {
            config:   self.config,
            clock:    SimClock::default(),
            fleet,
            registry,
            motion,
            pending:  PendingQueue::new(),
            timers:   TimerQueue::<LiftId>::new(),
            script,
        })
    }
}
