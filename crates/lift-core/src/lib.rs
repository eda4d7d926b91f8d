//! `lift-core` — foundational types for the `rust_lift` dispatch simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `LiftId`, `Floor` (both 1-based)                      |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `FleetConfig`, supported fleet/building limits        |
//! | [`call`]        | `Direction`, `FloorCall`                              |
//! | [`rng`]         | `TrafficRng` (seeded call generation)                 |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod call;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use call::{Direction, FloorCall};
pub use config::{FleetConfig, MAX_FLOORS, MAX_LIFTS, MIN_FLOORS, MIN_LIFTS};
pub use error::{LiftError, LiftResult};
pub use ids::{Floor, LiftId};
pub use rng::TrafficRng;
pub use time::{SimClock, Tick};
