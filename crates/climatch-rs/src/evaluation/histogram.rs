//! Bounded histogram of floored match scores.
//!
//! ## Purpose
//!
//! This module provides the histogram used to summarise match scores: eleven
//! bins covering the floored scores 0 through 10.
//!
//! ## Design notes
//!
//! * **Bound-checked binning**: Every floored score is range-checked before
//!   it is counted. Negative scores (recipient cells far outside the source
//!   climate) contribute to the total but land in no bin; they are never
//!   turned into a bin index.
//! * **Exact counts**: Counts are `u64`; percentages are derived downstream
//!   in the caller's float type.
//!
//! ## Invariants
//!
//! * `total()` equals the number of scores recorded.
//! * The sum of `counts()` is at most `total()`.

// External dependencies
use num_traits::Float;

/// Number of score bins: floored scores 0 through 10 inclusive.
pub const BIN_COUNT: usize = 11;

/// Histogram of floored match scores.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreHistogram {
    counts: [u64; BIN_COUNT],
    total: u64,
}

impl ScoreHistogram {
    /// Build a histogram from raw match scores.
    pub fn from_scores<T: Float>(scores: &[T]) -> Self {
        let mut hist = Self::default();
        for &score in scores {
            hist.record(score);
        }
        hist
    }

    /// Record a single raw score.
    ///
    /// The score is floored and counted in the matching bin when that floor
    /// lies in `0..=10`; otherwise only the total grows.
    pub fn record<T: Float>(&mut self, score: T) {
        self.total += 1;
        if let Some(bin) = score.floor().to_usize() {
            if bin < BIN_COUNT {
                self.counts[bin] += 1;
            }
        }
    }

    /// Per-bin counts, indexed by floored score.
    pub fn counts(&self) -> &[u64; BIN_COUNT] {
        &self.counts
    }

    /// Number of scores recorded, including any outside the bins.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Combined count of bins `from..=10`.
    pub fn tail_count(&self, from: usize) -> u64 {
        self.counts.iter().skip(from).sum()
    }
}
