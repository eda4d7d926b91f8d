//! `lift-motion` — lift movement phases and timing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`state`]   | `LiftPhase`, `MovementState`, per-lift lifecycle state           |
//! | [`travel`]  | `TravelModel` trait, `LinearTravel` (distance × per-floor time)   |
//! | [`engine`]  | `MotionEngine<T>`: begin a move, advance it one phase per timer  |
//! | [`error`]   | `MotionError`, `MotionResult<T>`                                  |
//!
//! # Movement model
//!
//! Lifts use a **commit-at-settle** model:
//!
//! ```text
//! Idle ──begin_move──▶ Departing ──travel──▶ DoorsOpen ──door hold──▶ Settling ──settle──▶ Idle
//!                                  └─(door hold = 0)────────────────────▶ Settling
//! ```
//!
//! 1. `MotionEngine::begin_move` computes travel time via a pluggable
//!    [`TravelModel`] and returns the tick at which travel ends.
//! 2. Each time that timer fires the caller invokes
//!    `MotionEngine::advance`, which moves the lift into its next phase and
//!    returns the next deadline (if any).
//! 3. When `Settling` ends the engine reports `MotionEvent::Settled`; the
//!    caller commits the lift's floor and status.
//!
//! For rendering, `MotionEngine::visual_position` returns
//! `(origin, destination, progress ∈ [0,1])`.

pub mod engine;
pub mod error;
pub mod state;
pub mod travel;

#[cfg(test)]
mod tests;

pub use engine::{MotionEngine, MotionEvent, PhaseTransition};
pub use error::{MotionError, MotionResult};
pub use state::{LiftPhase, MovementState};
pub use travel::{LinearTravel, TravelModel};
