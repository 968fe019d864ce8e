//! High-level API for climate matching.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for climate
//! matching. It implements a fluent builder for configuring a match run and
//! convenience functions mirroring the classic climatch workflow.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is checked when `.build()` is called; data
//!   is checked on every scoring call.
//! * **Reusable**: A built [`Climatch`] borrows nothing and can score any
//!   number of region pairs.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Score pass sharing**: The vector, histogram, and percentage outputs
//!   all reduce the same per-cell score pass, so they can never disagree.
//! * **Configuration Flow**: Builder pattern ending in `.build()`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ClimatchBuilder`] via `Climatch::new()`.
//! 2. Chain configuration methods (`.threshold()`, `.parallel()`).
//! 3. Call `.build()` to obtain a validated processor.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{score_pass, score_pass_parallel};
use crate::engine::validate::validate_inputs;
use crate::evaluation::summary::percentage_at_least;
use crate::input::{ClimateTable, VarianceInput};

// Publicly re-exported types
pub use crate::evaluation::histogram::{ScoreHistogram, BIN_COUNT};
pub use crate::evaluation::summary::DEFAULT_MATCH_THRESHOLD;
pub use crate::input::TableView;
pub use crate::primitives::errors::ClimatchError;

// ============================================================================
// Builder
// ============================================================================

/// Builder for a configured climate match processor.
#[derive(Debug, Clone)]
pub struct ClimatchBuilder {
    threshold: usize,
    parallel: bool,
}

impl Default for ClimatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClimatchBuilder {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * threshold: 6 (the classic climatch cutoff)
    /// * parallel: true
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
            parallel: true,
        }
    }

    /// Set the lowest floored score counted as a match.
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build the processor, validating the configuration.
    pub fn build(self) -> Result<Climatch, ClimatchError> {
        if self.threshold >= BIN_COUNT {
            return Err(ClimatchError::InvalidThreshold {
                value: self.threshold,
            });
        }
        Ok(Climatch { config: self })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Configured climate match processor.
#[derive(Debug, Clone)]
pub struct Climatch {
    config: ClimatchBuilder,
}

impl Climatch {
    /// Create a builder with default parameters.
    pub fn new() -> ClimatchBuilder {
        ClimatchBuilder::new()
    }

    /// Raw match scores for every recipient cell, in recipient row order.
    ///
    /// Scores lie in `(-inf, 10]`: a perfect climate analogue scores 10, a
    /// normalized distance of one scores 0, and larger distances go
    /// negative. No clamping or flooring is applied.
    pub fn scores<T, R, S, V>(
        &self,
        recipient: &R,
        source: &S,
        global_variance: &V,
    ) -> Result<Vec<T>, ClimatchError>
    where
        T: Float + Send + Sync,
        R: ClimateTable<T> + ?Sized,
        S: ClimateTable<T> + ?Sized,
        V: VarianceInput<T> + ?Sized,
    {
        let recipient = recipient.as_table_view()?;
        let source = source.as_table_view()?;
        let variance = global_variance.as_variance_slice()?;
        validate_inputs(&recipient, &source, variance)?;

        if self.config.parallel {
            Ok(score_pass_parallel(&recipient, &source, variance))
        } else {
            Ok(score_pass(&recipient, &source, variance))
        }
    }

    /// Histogram of floored match scores over the recipient region.
    pub fn histogram<T, R, S, V>(
        &self,
        recipient: &R,
        source: &S,
        global_variance: &V,
    ) -> Result<ScoreHistogram, ClimatchError>
    where
        T: Float + Send + Sync,
        R: ClimateTable<T> + ?Sized,
        S: ClimateTable<T> + ?Sized,
        V: VarianceInput<T> + ?Sized,
    {
        let scores: Vec<T> = self.scores(recipient, source, global_variance)?;
        Ok(ScoreHistogram::from_scores(&scores))
    }

    /// Percentage of recipient cells at or above the match threshold.
    pub fn percentage<T, R, S, V>(
        &self,
        recipient: &R,
        source: &S,
        global_variance: &V,
    ) -> Result<T, ClimatchError>
    where
        T: Float + Send + Sync,
        R: ClimateTable<T> + ?Sized,
        S: ClimateTable<T> + ?Sized,
        V: VarianceInput<T> + ?Sized,
    {
        let scores: Vec<T> = self.scores(recipient, source, global_variance)?;
        let hist = ScoreHistogram::from_scores(&scores);
        Ok(percentage_at_least(&hist, self.config.threshold))
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Raw match scores with default settings.
///
/// Equivalent to `Climatch::new().build()?.scores(...)`.
pub fn climatch_vector<T, R, S, V>(
    recipient: &R,
    source: &S,
    global_variance: &V,
) -> Result<Vec<T>, ClimatchError>
where
    T: Float + Send + Sync,
    R: ClimateTable<T> + ?Sized,
    S: ClimateTable<T> + ?Sized,
    V: VarianceInput<T> + ?Sized,
{
    Climatch::new().build()?.scores(recipient, source, global_variance)
}

/// Percentage of recipient cells scoring 6 or higher, with default settings.
pub fn climatch_percentage<T, R, S, V>(
    recipient: &R,
    source: &S,
    global_variance: &V,
) -> Result<T, ClimatchError>
where
    T: Float + Send + Sync,
    R: ClimateTable<T> + ?Sized,
    S: ClimateTable<T> + ?Sized,
    V: VarianceInput<T> + ?Sized,
{
    Climatch::new().build()?.percentage(recipient, source, global_variance)
}

/// Histogram of floored match scores, with default settings.
pub fn climatch_histogram<T, R, S, V>(
    recipient: &R,
    source: &S,
    global_variance: &V,
) -> Result<ScoreHistogram, ClimatchError>
where
    T: Float + Send + Sync,
    R: ClimateTable<T> + ?Sized,
    S: ClimateTable<T> + ?Sized,
    V: VarianceInput<T> + ?Sized,
{
    Climatch::new().build()?.histogram::<T, R, S, V>(recipient, source, global_variance)
}
