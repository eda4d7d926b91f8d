//! A floor call that arrives at a fixed simulation tick.

use lift_core::{FloorCall, Tick};

/// One entry of a call script: `call` is delivered to the dispatcher when
/// the clock reaches `tick`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptedCall {
    pub tick: Tick,
    pub call: FloorCall,
}

impl ScriptedCall {
    pub fn new(tick: Tick, call: FloorCall) -> Self {
        Self { tick, call }
    }
}
