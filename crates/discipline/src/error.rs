use thiserror::Error;

/// Errors from the prediction layer. Prediction itself is total; only a
/// misconfigured threshold fails, and it fails at validation time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisciplineError {
    #[error("invalid prediction configuration: {0}")]
    InvalidConfig(String),
}
