//! `PendingQueue` — calls that found no idle lift.

use std::collections::VecDeque;

use lift_core::Floor;

/// First-come-first-served backlog of floor calls.
///
/// Duplicates are allowed: two unanswered calls from the same floor occupy
/// two entries.  One entry is replayed each time a lift becomes idle; a
/// replay that again finds no lift goes back in at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingQueue {
    inner: VecDeque<Floor>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a call at the back.
    pub fn push(&mut self, floor: Floor) {
        self.inner.push_back(floor);
    }

    /// Take the oldest call.
    pub fn pop(&mut self) -> Option<Floor> {
        self.inner.pop_front()
    }

    /// The oldest call, without removing it.
    pub fn peek(&self) -> Option<Floor> {
        self.inner.front().copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Calls oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Floor> + '_ {
        self.inner.iter().copied()
    }
}
