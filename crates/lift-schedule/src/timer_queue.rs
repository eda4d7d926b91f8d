//! `TimerQueue` — sparse per-tick activation queue.
//!
//! # Why this exists
//!
//! A lift spends almost all of its life waiting: travelling, holding its
//! doors, settling.  Rather than polling every lift on every tick, each
//! phase registers the tick at which it ends.  The simulation then visits
//! only the ticks that have something due.
//!
//! # Ordering
//!
//! Entries due at the same tick come back in the order they were pushed.
//! This is what makes two lifts finishing at the same instant resolve
//! deterministically: the one dispatched first is handled first.

use std::collections::BTreeMap;

use lift_core::Tick;

/// A priority queue mapping simulation ticks → items due at that tick.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    inner: BTreeMap<Tick, Vec<T>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            inner: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `item` at `tick`, behind anything already due then.
    pub fn push(&mut self, tick: Tick, item: T) {
        self.inner.entry(tick).or_default().push(item);
        self.total += 1;
    }

    /// Remove and return everything scheduled for exactly `tick`.
    ///
    /// Returns `None` if nothing is queued for that tick (avoids
    /// allocation on the common empty path).
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<T>> {
        let items = self.inner.remove(&tick)?;
        self.total -= items.len();
        Some(items)
    }

    /// The earliest tick with at least one entry, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of (tick, item) entries across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct ticks that have at least one entry.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }

    /// All entries in due order, without removing them.
    pub fn iter(&self) -> impl Iterator<Item = (Tick, &T)> + '_ {
        self.inner
            .iter()
            .flat_map(|(&tick, items)| items.iter().map(move |item| (tick, item)))
    }
}

impl<T> FromIterator<(Tick, T)> for TimerQueue<T> {
    fn from_iter<I: IntoIterator<Item = (Tick, T)>>(iter: I) -> Self {
        let mut queue = Self::new();
        for (tick, item) in iter {
            queue.push(tick, item);
        }
        queue
    }
}
