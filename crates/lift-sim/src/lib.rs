//! `lift-sim` — dispatcher and run loop for the rust_lift simulator.
//!
//! # Call handling
//!
//! ```text
//! request_call(call):
//!   ① Validate   : floors outside 1..=floor_count are ignored.
//!   ② Served?    : a floor that already lists a lift needs nothing.
//!   ③ Search     : nearest idle lift, upper cursor before lower.
//!   ④ Claim      : move the lift's registry entry to the call floor,
//!                   mark it moving, start travel, schedule arrival.
//!      or Queue  : nothing idle, so push the floor onto the pending queue.
//! ```
//!
//! # Lift lifecycle
//!
//! ```text
//! Departing ──travel──▶ DoorsOpen ──door hold──▶ Settling ──settle──▶ Idle
//!                  (skipped when door_hold_ticks == 0)         │
//!                                                              └─▶ replay one pending call
//! ```
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`dispatcher`] | `nearest_idle`, `claim`, `CallOutcome`                  |
//! | [`sim`]        | `DispatchSystem` and its run loop                       |
//! | [`builder`]    | `DispatchBuilder`                                       |
//! | [`observer`]   | `DispatchObserver`, `NoopObserver`                      |
//! | [`error`]      | `SimError`, `SimResult<T>`                              |
//!
//! # Quick-start
//!
//! ```rust
//! use lift_core::{FleetConfig, Tick};
//! use lift_sim::{DispatchBuilder, NoopObserver};
//!
//! let mut sys = DispatchBuilder::new(FleetConfig::new(1, 5)).build().unwrap();
//! sys.request_floor(4).unwrap();
//! let end = sys.run_until_idle(&mut NoopObserver).unwrap();
//! assert_eq!(end, Tick(600 + 3_000 + 2_000));
//! ```

pub mod builder;
pub mod dispatcher;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::DispatchBuilder;
pub use dispatcher::{claim, nearest_idle, CallOutcome};
pub use error::{SimError, SimResult};
pub use observer::{DispatchObserver, NoopObserver};
pub use sim::DispatchSystem;
