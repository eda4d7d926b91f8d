//! The `Lift` entity and the `Fleet` that owns every lift.

use lift_core::{Floor, LiftId};

/// Whether a lift can be picked by the dispatcher.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LiftStatus {
    #[default]
    Idle,
    /// Claimed for a call: travelling, doors open, or settling.
    Moving,
}

impl LiftStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LiftStatus::Idle   => "idle",
            LiftStatus::Moving => "moving",
        }
    }
}

impl std::fmt::Display for LiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lift car.
///
/// `floor` is the committed resting floor.  It does not follow the car
/// while it travels; it changes only when a move completes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lift {
    pub id:     LiftId,
    pub floor:  Floor,
    pub status: LiftStatus,
}

impl Lift {
    /// A new idle lift resting at `floor`.
    pub fn new(id: LiftId, floor: Floor) -> Self {
        Self { id, floor, status: LiftStatus::Idle }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.status == LiftStatus::Idle
    }
}

/// Every lift in the session, indexed by `LiftId::slot()`.
///
/// The fleet size is fixed at construction; lifts are never added or
/// removed afterwards.
#[derive(Clone, Debug)]
pub struct Fleet {
    lifts: Vec<Lift>,
}

impl Fleet {
    pub(crate) fn new(lifts: Vec<Lift>) -> Self {
        Self { lifts }
    }

    /// Number of lifts.
    #[inline]
    pub fn len(&self) -> usize {
        self.lifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lifts.is_empty()
    }

    /// The lift with `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this fleet.
    #[inline]
    pub fn get(&self, id: LiftId) -> &Lift {
        &self.lifts[id.slot()]
    }

    /// Mutable access to the lift with `id`.
    #[inline]
    pub fn get_mut(&mut self, id: LiftId) -> &mut Lift {
        &mut self.lifts[id.slot()]
    }

    /// `true` if `id` belongs to this fleet.
    pub fn contains(&self, id: LiftId) -> bool {
        id.get() >= 1 && id.slot() < self.lifts.len()
    }

    /// All lifts in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Lift> + '_ {
        self.lifts.iter()
    }

    /// Number of lifts currently idle.
    pub fn idle_count(&self) -> usize {
        self.lifts.iter().filter(|l| l.is_idle()).count()
    }
}
