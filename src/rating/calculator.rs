//! Rating calculator trait and the Elo implementation
//!
//! This module defines the interface for head-to-head rating calculations and
//! the configurable Elo calculator behind it.

use crate::config::{EloConfig, ValidationMode};
use crate::error::{EloError, Result};
use crate::rating::elo::{expected_scores, new_ratings};
use crate::types::{Outcome, RatingResult};
use tracing::{debug, info, warn};

/// Tolerance used when checking that strict-mode scores sum to one
const SCORE_SUM_TOLERANCE: f64 = 1e-9;

/// Trait for calculating rating changes after a two-player match
pub trait RatingCalculator: Send + Sync {
    /// Compute expectations and new ratings for players A and B
    ///
    /// # Arguments
    /// * `rating_a`, `rating_b` - Current ratings
    /// * `score_a`, `score_b` - Match scores, conventionally 1 / 0.5 / 0
    ///
    /// # Returns
    /// A fully populated result, or an error if any input is rejected
    fn compute(
        &self,
        rating_a: f64,
        rating_b: f64,
        score_a: f64,
        score_b: f64,
    ) -> Result<RatingResult>;

    /// Compute a single game given its outcome
    fn compute_outcome(
        &self,
        rating_a: f64,
        rating_b: f64,
        outcome: Outcome,
    ) -> Result<RatingResult> {
        let (score_a, score_b) = outcome.scores();
        self.compute(rating_a, rating_b, score_a, score_b)
    }

    /// K-factor applied to rating changes
    fn k_factor(&self) -> f64;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;

    /// Update configuration from JSON
    fn update_config(&mut self, config: serde_json::Value) -> Result<()>;
}

/// Elo rating calculator
#[derive(Debug, Clone, Default)]
pub struct EloCalculator {
    config: EloConfig,
}

impl EloCalculator {
    /// Create a new Elo calculator
    pub fn new(config: EloConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Create a permissive calculator with a custom K-factor
    pub fn with_k_factor(k_factor: f64) -> Result<Self> {
        Self::new(EloConfig::with_k_factor(k_factor))
    }

    pub fn validation_mode(&self) -> ValidationMode {
        self.config.validation
    }

    fn validate_inputs(
        &self,
        rating_a: f64,
        rating_b: f64,
        score_a: f64,
        score_b: f64,
    ) -> Result<()> {
        let inputs = [
            ("rating_a", rating_a),
            ("rating_b", rating_b),
            ("score_a", score_a),
            ("score_b", score_b),
        ];
        for (field, value) in inputs {
            if !value.is_finite() {
                return Err(EloError::InvalidInput { field, value }.into());
            }
        }

        if self.config.validation == ValidationMode::Strict {
            for (field, value) in [("score_a", score_a), ("score_b", score_b)] {
                if !(0.0..=1.0).contains(&value) {
                    return Err(EloError::ScoreOutOfRange { field, value }.into());
                }
            }

            let sum = score_a + score_b;
            if (sum - 1.0).abs() > SCORE_SUM_TOLERANCE {
                return Err(EloError::ScoreSumMismatch { sum }.into());
            }
        }

        Ok(())
    }
}

impl RatingCalculator for EloCalculator {
    fn compute(
        &self,
        rating_a: f64,
        rating_b: f64,
        score_a: f64,
        score_b: f64,
    ) -> Result<RatingResult> {
        if let Err(e) = self.validate_inputs(rating_a, rating_b, score_a, score_b) {
            warn!("Rejected rating calculation: {}", e);
            return Err(e);
        }

        let (expected_a, expected_b) = expected_scores(rating_a, rating_b);
        if expected_a == 0.0 || expected_b == 0.0 {
            warn!(
                "Expected score saturated for ratings {} vs {}",
                rating_a, rating_b
            );
        }

        let k_factor = self.config.k_factor;
        let (new_rating_a, new_rating_b) = new_ratings(
            k_factor, rating_a, rating_b, expected_a, expected_b, score_a, score_b,
        );

        debug!(
            rating_a,
            rating_b,
            score_a,
            score_b,
            expected_a,
            expected_b,
            new_rating_a,
            new_rating_b,
            "Computed Elo ratings"
        );

        Ok(RatingResult::new(
            rating_a,
            rating_b,
            score_a,
            score_b,
            expected_a,
            expected_b,
            new_rating_a,
            new_rating_b,
            k_factor,
        ))
    }

    fn k_factor(&self) -> f64 {
        self.config.k_factor
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    fn update_config(&mut self, config: serde_json::Value) -> Result<()> {
        let new_config: EloConfig =
            serde_json::from_value(config).map_err(|e| EloError::ConfigurationError {
                message: format!("Invalid Elo configuration: {}", e),
            })?;

        new_config.validate()?;
        info!(
            "Elo configuration updated: k_factor={}, validation={:?}",
            new_config.k_factor, new_config.validation
        );
        self.config = new_config;
        Ok(())
    }
}
