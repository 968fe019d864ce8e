//! Aggregate score summaries.
//!
//! ## Purpose
//!
//! This module reduces a score histogram to the headline number used in
//! horizon-scanning workflows: the percentage of recipient cells whose
//! floored score reaches a match threshold.
//!
//! ## Key concepts
//!
//! * **Match threshold**: The lowest bin counted as a climate match.
//!   Climatch convention treats scores of 6 and above as matching.
//! * **Full divisor**: The percentage divides by every recorded score,
//!   including those whose floor fell outside the bins.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::evaluation::histogram::ScoreHistogram;

/// Lowest floored score conventionally treated as a climate match.
pub const DEFAULT_MATCH_THRESHOLD: usize = 6;

/// Percentage of recorded scores whose bin is at least `threshold`.
///
/// Returns zero for an empty histogram.
pub fn percentage_at_least<T: Float>(hist: &ScoreHistogram, threshold: usize) -> T {
    if hist.total() == 0 {
        return T::zero();
    }
    let matched = T::from(hist.tail_count(threshold)).unwrap();
    let total = T::from(hist.total()).unwrap();
    matched / total * T::from(100).unwrap()
}
