use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("timer interval must be non-zero")]
    InvalidInterval,
}
