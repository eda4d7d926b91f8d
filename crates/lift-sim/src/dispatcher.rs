//! Lift selection: the nearest-idle search and the registry claim.
//!
//! # Search order
//!
//! Two cursors start one floor above and one floor below the call and move
//! outward together.  Each round checks the upper cursor first, then the
//! lower one, so of two idle lifts at the same distance the upper one wins.
//! Within a floor, lifts are checked in registry (insertion) order and the
//! first idle one is taken.
//!
//! ```text
//! call at 5, floors 1..=10:   round 1: 6, 4   round 2: 7, 3   round 3: 8, 2 …
//! ```
//!
//! The calling floor itself is never searched: the dispatcher only runs the
//! search after seeing that floor is empty.  The search is O(floors × lifts)
//! and always terminates once both cursors leave the building.

use lift_core::{Floor, LiftId};
use lift_fleet::{Fleet, FloorRegistry, LiftStatus};

/// What the dispatcher did with a call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CallOutcome {
    /// The floor number was outside the building; nothing changed.
    Ignored,
    /// A lift is already parked at or heading to the floor.
    AlreadyServed,
    /// No idle lift anywhere; the call joined the pending queue.
    Queued,
    /// `lift` was claimed and is travelling `from` → `to`.
    Dispatched {
        lift:         LiftId,
        from:         Floor,
        to:           Floor,
        travel_ticks: u64,
    },
}

impl CallOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallOutcome::Ignored          => "ignored",
            CallOutcome::AlreadyServed    => "already_served",
            CallOutcome::Queued           => "queued",
            CallOutcome::Dispatched { .. } => "dispatched",
        }
    }
}

/// Find the idle lift nearest to `floor`, returning it with the floor it is
/// parked at.  See the module docs for the exact search order.
pub fn nearest_idle(
    floor:    Floor,
    registry: &FloorRegistry,
    fleet:    &Fleet,
) -> Option<(LiftId, Floor)> {
    let top = registry.floor_count() as i64;
    let mut up = floor.get() as i64 + 1;
    let mut down = floor.get() as i64 - 1;

    while up <= top || down >= 1 {
        if up <= top {
            let at = Floor(up as u32);
            if let Some(lift) = first_idle(at, registry, fleet) {
                return Some((lift, at));
            }
        }
        if down >= 1 {
            let at = Floor(down as u32);
            if let Some(lift) = first_idle(at, registry, fleet) {
                return Some((lift, at));
            }
        }
        up += 1;
        down -= 1;
    }
    None
}

fn first_idle(floor: Floor, registry: &FloorRegistry, fleet: &Fleet) -> Option<LiftId> {
    registry
        .lookup(floor)
        .iter()
        .copied()
        .find(|&lift| fleet.get(lift).is_idle())
}

/// Move `lift` from `from`'s collection to `to`'s and mark it moving.
///
/// After this returns, calls to `to` see the lift as already there, even
/// though it has not started travelling yet.
pub fn claim(
    lift:     LiftId,
    from:     Floor,
    to:       Floor,
    registry: &mut FloorRegistry,
    fleet:    &mut Fleet,
) {
    let removed = registry.remove(lift, from);
    debug_assert!(removed, "{lift} was not listed at {from}");
    registry.insert(lift, to);
    fleet.get_mut(lift).status = LiftStatus::Moving;
}
