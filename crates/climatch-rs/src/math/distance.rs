//! Variance-normalized Euclidean distance computation.
//!
//! ## Purpose
//!
//! This module provides the distance kernel of climate matching: squared
//! Euclidean distance with each variable scaled by its global variance, and
//! the scan that finds the nearest source cell for a recipient cell.
//!
//! ## Design notes
//!
//! * **Deferred square root**: Minimisation happens on the scaled squared
//!   sums; the square root and the division by the variable count are applied
//!   once to the selected minimum. Both are monotone, so the selected source
//!   cell and the resulting distance match a per-candidate evaluation.
//! * **Flat layout**: Tables are dense row-major slices with `n_vars` values
//!   per row.
//! * **Exhaustive scan**: Every source row is visited. Match scores need the
//!   true minimum, and the variance scaling changes per call, so no spatial
//!   index is built.
//!
//! ## Invariants
//!
//! * `sources.len()` must be a multiple of `n_vars`.
//! * `target.len()` and `variance.len()` must equal `n_vars`.
//! * Variance entries must be positive (validated upstream).

// External dependencies
use num_traits::Float;

/// Squared Euclidean distance between two cells, each variable scaled by its
/// global variance.
///
/// ```text
/// s = Σₘ (a[m] − b[m])² / variance[m]
/// ```
#[inline]
pub fn variance_scaled_sq_distance<T: Float>(a: &[T], b: &[T], variance: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), variance.len());

    let mut acc = T::zero();
    for m in 0..a.len() {
        let d = a[m] - b[m];
        acc = acc + d * d / variance[m];
    }
    acc
}

/// Smallest variance-scaled squared distance from `target` to any row of
/// `sources`.
///
/// Scans every row and keeps a running minimum. Returns `T::infinity()` when
/// `sources` is empty; callers reject empty tables before scoring.
pub fn nearest_analogue_sq_distance<T: Float>(
    sources: &[T],
    n_vars: usize,
    target: &[T],
    variance: &[T],
) -> T {
    debug_assert_eq!(sources.len() % n_vars, 0);
    debug_assert_eq!(target.len(), n_vars);
    debug_assert_eq!(variance.len(), n_vars);

    let mut min_sq = T::infinity();
    for row in sources.chunks_exact(n_vars) {
        let sq = variance_scaled_sq_distance(row, target, variance);
        if sq < min_sq {
            min_sq = sq;
        }
    }
    min_sq
}

/// Convert a variance-scaled squared sum into the normalized distance
/// `sqrt(s / n_vars)`.
#[inline]
pub fn normalized_distance<T: Float>(sq_sum: T, n_vars: usize) -> T {
    debug_assert!(n_vars > 0);
    (sq_sum / T::from(n_vars).unwrap()).sqrt()
}
