//! Elo Rating - head-to-head rating updates
//!
//! This crate computes expected scores and updated ratings for two
//! competitors after a match, using the classical Elo formulas with a
//! configurable K-factor and optional strict score validation.

pub mod config;
pub mod error;
pub mod rating;
pub mod types;

// Re-export commonly used types and traits
pub use config::{EloConfig, ValidationMode, DEFAULT_K_FACTOR};
pub use error::{EloError, Result};
pub use rating::{EloCalculator, RatingCalculator};
pub use types::{Outcome, RatingResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compute a match result with the default K-factor and permissive validation.
///
/// Non-finite ratings or scores are rejected with [`EloError::InvalidInput`].
pub fn compute(
    rating_a: f64,
    rating_b: f64,
    score_a: f64,
    score_b: f64,
) -> Result<RatingResult> {
    EloCalculator::default().compute(rating_a, rating_b, score_a, score_b)
}
