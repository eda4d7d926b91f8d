//! Floor-call events handed to the dispatcher.

use crate::Floor;

/// Which hall button was pressed.
///
/// Recorded and reported, but never used to choose a lift: any idle lift
/// qualifies regardless of the requested direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Lower-case label used in CSV input and output.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single call from a floor.
///
/// `floor` is the raw number as received from the input layer; it is
/// range-checked by the dispatcher, which silently drops out-of-range calls.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorCall {
    pub floor:     i64,
    pub direction: Option<Direction>,
}

impl FloorCall {
    /// A call with no direction attached (e.g. a replayed pending request).
    pub fn at(floor: i64) -> Self {
        Self { floor, direction: None }
    }

    pub fn up(floor: i64) -> Self {
        Self { floor, direction: Some(Direction::Up) }
    }

    pub fn down(floor: i64) -> Self {
        Self { floor, direction: Some(Direction::Down) }
    }
}

impl From<Floor> for FloorCall {
    fn from(floor: Floor) -> Self {
        FloorCall::at(floor.get() as i64)
    }
}
