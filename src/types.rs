//! Value types produced by rating calculations

use serde::Serialize;

/// Outcome of a single head-to-head game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    WinA,
    Draw,
    WinB,
}

impl Outcome {
    /// Conventional (score_a, score_b) pair for this outcome
    pub fn scores(self) -> (f64, f64) {
        match self {
            Outcome::WinA => (1.0, 0.0),
            Outcome::Draw => (0.5, 0.5),
            Outcome::WinB => (0.0, 1.0),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::WinA => write!(f, "WinA"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::WinB => write!(f, "WinB"),
        }
    }
}

/// Inputs, expectations and updated ratings for one match between A and B.
///
/// Every field is written once when the result is computed. There are no
/// setters, so `expected_a + expected_b == 1` and
/// `new_rating_x - rating_x == k_factor * (score_x - expected_x)` hold for
/// the lifetime of the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingResult {
    rating_a: f64,
    rating_b: f64,
    score_a: f64,
    score_b: f64,
    expected_a: f64,
    expected_b: f64,
    new_rating_a: f64,
    new_rating_b: f64,
    k_factor: f64,
}

impl RatingResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        rating_a: f64,
        rating_b: f64,
        score_a: f64,
        score_b: f64,
        expected_a: f64,
        expected_b: f64,
        new_rating_a: f64,
        new_rating_b: f64,
        k_factor: f64,
    ) -> Self {
        Self {
            rating_a,
            rating_b,
            score_a,
            score_b,
            expected_a,
            expected_b,
            new_rating_a,
            new_rating_b,
            k_factor,
        }
    }

    pub fn rating_a(&self) -> f64 {
        self.rating_a
    }

    pub fn rating_b(&self) -> f64 {
        self.rating_b
    }

    pub fn score_a(&self) -> f64 {
        self.score_a
    }

    pub fn score_b(&self) -> f64 {
        self.score_b
    }

    /// Probability that A wins, in (0, 1) for moderate rating gaps
    pub fn expected_a(&self) -> f64 {
        self.expected_a
    }

    /// Probability that B wins
    pub fn expected_b(&self) -> f64 {
        self.expected_b
    }

    pub fn new_rating_a(&self) -> f64 {
        self.new_rating_a
    }

    pub fn new_rating_b(&self) -> f64 {
        self.new_rating_b
    }

    /// K-factor the new ratings were computed with
    pub fn k_factor(&self) -> f64 {
        self.k_factor
    }

    /// Rating delta for A (positive on gain)
    pub fn change_a(&self) -> f64 {
        self.new_rating_a - self.rating_a
    }

    /// Rating delta for B (positive on gain)
    pub fn change_b(&self) -> f64 {
        self.new_rating_b - self.rating_b
    }
}
