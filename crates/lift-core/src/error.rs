//! Configuration error type shared by the `lift-*` crates.
//!
//! Sub-crates define their own error enums and wrap `LiftError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised before a simulation session can start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LiftError {
    #[error("configuration error: floor count {0} is below the minimum of 2")]
    TooFewFloors(u32),

    #[error("configuration error: lift count {0} is below the minimum of 1")]
    TooFewLifts(u32),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for configuration-level operations.
pub type LiftResult<T> = Result<T, LiftError>;
