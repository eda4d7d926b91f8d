//! Plain data row types written by output backends.

/// One lift lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiftEventRow {
    pub tick:   u64,
    pub lift:   u32,
    /// `departure`, `reached`, `doors_opened`, `doors_closed` or `idle`.
    pub event:  &'static str,
    pub from:   u32,
    pub to:     u32,
    /// Travel ticks for `departure`; zero otherwise.
    pub detail: u64,
}

/// What happened to one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallRow {
    pub tick:      u64,
    /// Raw floor number, which may be outside the building.
    pub floor:     i64,
    /// `up`, `down`, or empty when the call carried no direction.
    pub direction: &'static str,
    /// `ignored`, `already_served`, `queued`, `dispatched` or `replayed`.
    pub outcome:   &'static str,
}
