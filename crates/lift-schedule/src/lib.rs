//! `lift-schedule` — everything that waits: timers, pending calls, and
//! call scripts.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`timer_queue`] | `TimerQueue<T>` (`BTreeMap<Tick, Vec<T>>`)                |
//! | [`pending`]     | `PendingQueue` (FIFO of unanswered floor calls)           |
//! | [`script`]      | `ScriptedCall` (a `FloorCall` due at a tick)              |
//! | [`loader`]      | `load_calls_csv`, `load_calls_reader`                     |
//! | [`traffic`]     | `TrafficGenerator` (seeded random call scripts)           |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Timer model (summary)
//!
//! The dispatcher never sleeps.  Every delayed continuation ("doors open
//! after travel", "idle after settling") is an entry in a `TimerQueue`
//! keyed by the tick it is due.  The simulation jumps its clock to
//! `next_tick()` and drains that tick, so only ticks where something
//! happens are ever visited.

pub mod error;
pub mod loader;
pub mod pending;
pub mod script;
pub mod timer_queue;
pub mod traffic;


pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_calls_csv, load_calls_reader};
pub use pending::PendingQueue;
pub use script::ScriptedCall;
pub use timer_queue::TimerQueue;
pub use traffic::TrafficGenerator;
