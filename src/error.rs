//! Error types for the accident-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur during aggregation and forecasting.
///
/// All variants indicate a contract violation by the caller or an
/// unrecoverable downstream failure; none are retriable and the library
/// never substitutes a fallback value on failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// The field named for a `sum` metric is not a numeric field of the records.
    #[error("invalid metric: no numeric field named '{0}'")]
    InvalidMetric(String),

    /// Too few monthly observations to seed lag features.
    #[error("insufficient history: need at least {needed} monthly observations, got {got}")]
    InsufficientHistory { needed: usize, got: usize },

    /// Requested horizon is negative or exceeds the cap.
    #[error("invalid horizon: {got} (must be between 0 and {max})")]
    InvalidHorizon { got: i64, max: i64 },

    /// The opaque prediction model rejected its input.
    #[error("model invocation failed: {0}")]
    ModelInvocation(String),

    /// Timestamp-related error (non-increasing months, month arithmetic overflow).
    #[error("timestamp error: {0}")]
    Timestamp(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
