//! Score pass execution over recipient cells.
//!
//! ## Purpose
//!
//! This module runs the score pass: for every recipient cell it scans all
//! source cells for the nearest climate analogue and converts that distance
//! into a raw match score in `(-inf, 10]`.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` for data-parallel execution across
//!   recipient cells when the `cpu` feature is enabled.
//! * **Determinism**: The parallel pass maps independent cells and collects
//!   in index order, so values and ordering are identical to the sequential
//!   pass.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Inputs are validated before a pass runs (see the `validate` module).
//! * Output order matches recipient row order.
//! * Scores are not clamped; minimum distances above 1 yield negative scores.
//!
//! ## Non-goals
//!
//! * This module does not floor or aggregate scores (handled by the
//!   evaluation layer).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::input::TableView;
use crate::math::distance::{nearest_analogue_sq_distance, normalized_distance};

/// Raw match score for one recipient cell against all source cells.
///
/// A distance of zero (a perfect analogue) scores 10; a normalized distance
/// of one scores 0.
#[inline]
fn score_cell<T: Float>(cell: &[T], source: &TableView<'_, T>, variance: &[T]) -> T {
    let min_sq = nearest_analogue_sq_distance(source.values(), source.n_vars(), cell, variance);
    let dist = normalized_distance(min_sq, variance.len());
    (T::one() - dist) * T::from(10).unwrap()
}

/// Perform a sequential score pass over all recipient cells.
pub fn score_pass<T: Float>(
    recipient: &TableView<'_, T>,
    source: &TableView<'_, T>,
    variance: &[T],
) -> Vec<T> {
    debug_assert!(recipient.n_vars() > 0);

    recipient
        .values()
        .chunks_exact(recipient.n_vars())
        .map(|cell| score_cell(cell, source, variance))
        .collect()
}

/// Perform a score pass over all recipient cells in parallel.
///
/// Values and order are identical to [`score_pass`]; only the execution
/// strategy differs.
#[cfg(feature = "cpu")]
pub fn score_pass_parallel<T>(
    recipient: &TableView<'_, T>,
    source: &TableView<'_, T>,
    variance: &[T],
) -> Vec<T>
where
    T: Float + Send + Sync,
{
    debug_assert!(recipient.n_vars() > 0);

    recipient
        .values()
        .par_chunks_exact(recipient.n_vars())
        .map(|cell| score_cell(cell, source, variance))
        .collect()
}

// Sequential fallback (when cpu feature is not enabled)
#[cfg(not(feature = "cpu"))]
pub fn score_pass_parallel<T>(
    recipient: &TableView<'_, T>,
    source: &TableView<'_, T>,
    variance: &[T],
) -> Vec<T>
where
    T: Float + Send + Sync,
{
    score_pass(recipient, source, variance)
}
