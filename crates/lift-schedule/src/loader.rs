//! CSV call-script loader.
//!
//! # CSV format
//!
//! One row per floor call.  Rows need not be sorted; the loader orders them
//! by `tick`, keeping file order among rows with the same tick.
//!
//! ```csv
//! tick,floor,direction
//! 0,5,down
//! 0,3,up
//! 400,2,
//! ```
//!
//! **`direction`** field:
//!
//! | Value  | Meaning                          |
//! |--------|----------------------------------|
//! | `up`   | `Some(Direction::Up)`            |
//! | `down` | `Some(Direction::Down)`          |
//! | empty  | `None`                           |
//!
//! `floor` is loaded as a raw signed integer and is *not* range-checked
//! here: out-of-range calls are part of what the dispatcher must tolerate,
//! and it drops them itself.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Direction, FloorCall, Tick};

use crate::{ScheduleError, ScriptedCall};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CallRecord {
    tick:      u64,
    floor:     i64,
    direction: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a call script from a CSV file.
pub fn load_calls_csv(path: &Path) -> Result<Vec<ScriptedCall>, ScheduleError> {
    let file = std::fs::File::open(path)
        .map_err(ScheduleError::Io)?;
    load_calls_reader(file)
}

/// Like [`load_calls_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for scripts embedded
/// in a binary.
pub fn load_calls_reader<R: Read>(reader: R) -> Result<Vec<ScriptedCall>, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut calls = Vec::new();

    for result in csv_reader.deserialize::<CallRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        let direction = parse_direction(row.direction.as_deref())?;
        calls.push(ScriptedCall::new(
            Tick(row.tick),
            FloorCall { floor: row.floor, direction },
        ));
    }

    // Stable: same-tick rows keep their file order.
    calls.sort_by_key(|c| c.tick);
    Ok(calls)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_direction(s: Option<&str>) -> Result<Option<Direction>, ScheduleError> {
    match s.map(str::trim) {
        None | Some("") => Ok(None),
        Some(d) if d.eq_ignore_ascii_case("up") => Ok(Some(Direction::Up)),
        Some(d) if d.eq_ignore_ascii_case("down") => Ok(Some(Direction::Down)),
        Some(other) => Err(ScheduleError::Parse(format!(
            "invalid direction {other:?}: expected \"up\", \"down\", or empty"
        ))),
    }
}
