//! Domain error types

use thiserror::Error;

/// Errors that can occur while analysing or rendering signals
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DspError {
    /// The signal cannot supply x[-n] for an index n in its domain
    #[error("Index domain error: x[{index}] is required but not defined")]
    IndexDomain { index: i64 },

    /// even + odd did not reproduce the input. Never expected from valid input.
    #[error("Reconstruction error: max error {max_error:e} exceeds tolerance {tolerance:e}")]
    Reconstruction { max_error: f64, tolerance: f64 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for signal operations
pub type DspResult<T> = Result<T, DspError>;
