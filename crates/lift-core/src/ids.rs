//! Strongly typed, 1-based identifier wrappers.
//!
//! Lifts and floors are both numbered from 1 in every user-facing surface,
//! so the inner integer keeps that numbering.  Storage is still plain `Vec`s
//! indexed from 0; use `.slot()` / `from_slot()` to cross between the two
//! and never subtract 1 by hand.

use std::fmt;

/// Generate a 1-based typed ID wrapper around a primitive integer.
macro_rules! one_based_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The lowest valid value.
            pub const FIRST: $name = $name(1);

            /// Zero-based position for direct use as a `Vec` index.
            ///
            /// # Panics
            /// Panics in debug mode if `self` is 0.
            #[inline(always)]
            pub fn slot(self) -> usize {
                (self.0 - 1) as usize
            }

            /// Inverse of [`slot`](Self::slot).
            #[inline(always)]
            pub fn from_slot(slot: usize) -> $name {
                $name(slot as $inner + 1)
            }

            /// The raw 1-based number.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

one_based_id! {
    /// Identity of one lift car.  Assigned `1..=lift_count` at fleet creation.
    pub struct LiftId(u32);
}

one_based_id! {
    /// A floor of the building, `1..=floor_count`.
    pub struct Floor(u32);
}

impl Floor {
    /// Accept a raw, caller-supplied floor number only if it lies in
    /// `[1, floor_count]`.
    ///
    /// Zero, negative and too-high values yield `None`; this is how invalid
    /// calls are filtered before they reach the dispatcher.
    pub fn checked(raw: i64, floor_count: u32) -> Option<Floor> {
        if raw >= 1 && raw <= floor_count as i64 {
            Some(Floor(raw as u32))
        } else {
            None
        }
    }

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u64 {
        self.0.abs_diff(other.0) as u64
    }
}
