use lift_core::LiftError;
use lift_motion::MotionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("dispatch configuration error: {0}")]
    Config(#[from] LiftError),

    #[error("motion error: {0}")]
    Motion(#[from] MotionError),
}

pub type SimResult<T> = Result<T, SimError>;
