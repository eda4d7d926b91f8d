//! `FloorRegistry` — which lifts are parked at (or claimed for) each floor.
//!
//! The registry is the authoritative answer to "where is every lift".  A
//! lift moves from its origin floor's collection to its destination floor's
//! collection at dispatch time, so a lift that is still travelling is
//! already listed at the floor it is heading to.
//!
//! Each floor keeps its lifts in insertion order.  The nearest-idle search
//! relies on that order to break ties between lifts on the same floor.
//!
//! Callers are responsible for bounds: every method taking a `Floor` panics
//! if the floor lies outside `1..=floor_count`.  Use
//! [`contains`](FloorRegistry::contains) first when the floor is untrusted.

use lift_core::{Floor, LiftId};

/// Floor number → ordered collection of lift ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FloorRegistry {
    floors: Vec<Vec<LiftId>>,
}

impl FloorRegistry {
    /// A registry for `floor_count` floors, every floor empty.
    pub fn new(floor_count: u32) -> Self {
        Self {
            floors: vec![Vec::new(); floor_count as usize],
        }
    }

    /// Number of floors.
    #[inline]
    pub fn floor_count(&self) -> u32 {
        self.floors.len() as u32
    }

    /// `true` if `floor` lies in `1..=floor_count`.
    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        floor.get() >= 1 && floor.slot() < self.floors.len()
    }

    /// Lifts at `floor`, in insertion order.
    #[inline]
    pub fn lookup(&self, floor: Floor) -> &[LiftId] {
        &self.floors[floor.slot()]
    }

    /// `true` if at least one lift is parked at or claimed for `floor`.
    #[inline]
    pub fn is_occupied(&self, floor: Floor) -> bool {
        !self.floors[floor.slot()].is_empty()
    }

    /// Remove `lift` from `from`'s collection, keeping the order of the
    /// rest.  Returns `false` if the lift was not listed there.
    pub fn remove(&mut self, lift: LiftId, from: Floor) -> bool {
        let lifts = &mut self.floors[from.slot()];
        match lifts.iter().position(|&l| l == lift) {
            Some(pos) => {
                lifts.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Append `lift` to the back of `to`'s collection.
    pub fn insert(&mut self, lift: LiftId, to: Floor) {
        self.floors[to.slot()].push(lift);
    }

    /// The floor currently listing `lift`, if any.  O(floors × lifts).
    pub fn floor_of(&self, lift: LiftId) -> Option<Floor> {
        self.floors
            .iter()
            .position(|lifts| lifts.contains(&lift))
            .map(Floor::from_slot)
    }

    /// Iterate `(floor, lifts)` from the ground floor up.
    pub fn iter(&self) -> impl Iterator<Item = (Floor, &[LiftId])> + '_ {
        self.floors
            .iter()
            .enumerate()
            .map(|(i, lifts)| (Floor::from_slot(i), lifts.as_slice()))
    }

    /// Total number of entries across all floors.
    pub fn lift_count(&self) -> usize {
        self.floors.iter().map(Vec::len).sum()
    }

    /// `true` if the collections partition a fleet of `fleet_size` lifts:
    /// every id `1..=fleet_size` is listed exactly once and nothing else is.
    pub fn is_partition_of(&self, fleet_size: usize) -> bool {
        let mut seen = vec![false; fleet_size];
        for lifts in &self.floors {
            for &lift in lifts {
                if lift.get() == 0 || lift.slot() >= fleet_size || seen[lift.slot()] {
                    return false;
                }
                seen[lift.slot()] = true;
            }
        }
        seen.into_iter().all(|s| s)
    }
}
