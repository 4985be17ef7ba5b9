use thiserror::Error;

/// Contract violations reported synchronously at the offending call.
#[derive(Debug, Error, PartialEq)]
pub enum MotionError {
    #[error("transition is already running")]
    AlreadyRunning,
    #[error("transition duration must be non-zero")]
    ZeroDuration,
    #[error("transition rate must be non-zero")]
    ZeroRate,
    #[error(transparent)]
    Core(#[from] terra_core::CoreError),
}
