use thiserror::Error;

/// Errors that can occur in the detection layer.
///
/// Extraction itself is total; the only failure mode is a configuration
/// that should have been rejected at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DetectError {
    #[error("invalid detector configuration: {0}")]
    InvalidConfig(String),
}
