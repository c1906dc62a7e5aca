//! Configuration for Elo rating calculations
//!
//! This module holds the K-factor and input validation policy, with
//! defaults, TOML loading and validation.

pub mod rating;

// Re-export commonly used types
pub use rating::{EloConfig, ValidationMode, DEFAULT_K_FACTOR};
