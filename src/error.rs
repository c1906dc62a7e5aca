//! Error types for Elo rating calculations
//!
//! Calculations return `anyhow::Result`, carrying an [`EloError`] that callers
//! can recover with `downcast_ref` when they need to match on the failure.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Reasons a rating calculation or configuration can be rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EloError {
    #[error("Invalid input for {field}: {value} is not a finite number")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("Score out of range for {field}: {value} (strict mode requires 0.0..=1.0)")]
    ScoreOutOfRange { field: &'static str, value: f64 },

    #[error("Scores must sum to 1.0 in strict mode, got {sum}")]
    ScoreSumMismatch { sum: f64 },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
