//! Elo rating calculations for head-to-head matches
//!
//! `elo` holds the two pure formula steps; `calculator` wraps them with input
//! validation and configuration behind the [`RatingCalculator`] trait.

pub mod calculator;
pub mod elo;

// Re-export commonly used types
pub use calculator::{EloCalculator, RatingCalculator};
pub use elo::{expected_scores, new_ratings};
