//! Error types for climate matching.
//!
//! ## Purpose
//!
//! This module defines the error type shared by every fallible operation in
//! the crate. All input checks run before any scores are computed, so a
//! returned error always means no partial results were produced.
//!
//! ## Key concepts
//!
//! * **Fail-fast validation**: Inputs are checked once, up front, in a fixed
//!   order (emptiness, dimensions, variance entries, finiteness).
//! * **Structured variants**: Each variant carries the indices and values
//!   needed to locate the offending input.

// External dependencies
use thiserror::Error;

/// Errors returned by climate matching operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClimatchError {
    /// A table's column count does not match the global variance vector.
    #[error("dimension mismatch in {what}: expected {expected} variables, found {actual}")]
    DimensionMismatch {
        /// Which input disagreed.
        what: &'static str,
        /// Number of variables defined by the global variance vector.
        expected: usize,
        /// Number of variables actually found.
        actual: usize,
    },

    /// A global variance entry is zero, negative, or non-finite.
    #[error("invalid variance at index {index}: {value} (must be positive and finite)")]
    InvalidVariance {
        /// Position of the offending entry in the variance vector.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// An input that must contain data is empty.
    #[error("empty input: {what} contains no data")]
    EmptyInput {
        /// Which input was empty.
        what: &'static str,
    },

    /// A climate table contains a NaN or infinite value.
    #[error("non-finite value in {what} at row {row}, column {col}")]
    NonFiniteValue {
        /// Which table contained the value.
        what: &'static str,
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
    },

    /// Input data could not be converted to a dense row-major table.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The match threshold lies outside the score bin range.
    #[error("invalid match threshold {value}: must be at most 10")]
    InvalidThreshold {
        /// The rejected threshold.
        value: usize,
    },
}
