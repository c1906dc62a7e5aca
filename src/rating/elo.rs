//! Classical Elo formulas
//!
//! Both steps are pure and total over finite inputs. A rating gap too large
//! for `f64` saturates the expectation to 0.0 or 1.0 instead of failing.

/// Rating difference that multiplies the odds by [`EXPONENT_BASE`]
pub const RATING_SCALE: f64 = 400.0;

/// Base of the logistic expectation curve
pub const EXPONENT_BASE: f64 = 10.0;

/// Expected score of a player rated `own` against one rated `opponent`
fn expected_score(own: f64, opponent: f64) -> f64 {
    // 10^+inf is +inf, so the expectation collapses to 0.0 rather than erroring
    1.0 / (1.0 + EXPONENT_BASE.powf((opponent - own) / RATING_SCALE))
}

/// Expected scores `(expected_a, expected_b)` for a match between A and B.
///
/// Each side uses the mirror of the other's exponent, so the pair sums to 1
/// and equal ratings give exactly `(0.5, 0.5)`.
pub fn expected_scores(rating_a: f64, rating_b: f64) -> (f64, f64) {
    (
        expected_score(rating_a, rating_b),
        expected_score(rating_b, rating_a),
    )
}

/// New ratings `(new_rating_a, new_rating_b)` after a match.
///
/// Each side moves by `k_factor * (score - expected)` using only its own
/// score and expectation.
pub fn new_ratings(
    k_factor: f64,
    rating_a: f64,
    rating_b: f64,
    expected_a: f64,
    expected_b: f64,
    score_a: f64,
    score_b: f64,
) -> (f64, f64) {
    (
        rating_a + k_factor * (score_a - expected_a),
        rating_b + k_factor * (score_b - expected_b),
    )
}
