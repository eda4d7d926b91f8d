//! `lift-fleet` — lift records and the floor registry.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`lift`]        | `Lift`, `LiftStatus`, `Fleet`                             |
//! | [`registry`]    | `FloorRegistry` (floor → ordered lift ids)                |
//! | [`builder`]     | `FleetBuilder` (validated construction of both)           |
//!
//! # Why two structs?
//!
//! The dispatcher reads lift status from `Fleet` while it rewrites the
//! per-floor collections in `FloorRegistry`.  Keeping them apart lets both
//! borrows coexist without cloning, the same way the simulator keeps its
//! timer queue separate from its motion state.

pub mod builder;
pub mod lift;
pub mod registry;


pub use builder::FleetBuilder;
pub use lift::{Fleet, Lift, LiftStatus};
pub use registry::FloorRegistry;
