use lift_core::LiftId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MotionError {
    #[error("{0} is already moving and cannot be redirected")]
    AlreadyMoving(LiftId),

    #[error("{0} has no move in progress")]
    NotMoving(LiftId),

    #[error("{0} is not part of this fleet")]
    UnknownLift(LiftId),
}

pub type MotionResult<T> = Result<T, MotionError>;
