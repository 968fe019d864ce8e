//! Input validation for climate matching.
//!
//! ## Purpose
//!
//! This module performs every precondition check before scoring starts.
//! Errors are detected eagerly so that a score pass never observes empty
//! tables, mismatched dimensions, degenerate variances, or non-finite data.
//!
//! ## Key concepts
//!
//! * **Fixed check order**: variance presence, table presence, dimension
//!   agreement, variance positivity, table finiteness. The first failing
//!   check wins when several apply.
//! * **Reject over propagate**: NaN and infinite table values are rejected
//!   up front rather than carried into distance minimisation, where NaN
//!   ordering would make results platform-dependent.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::input::TableView;
use crate::primitives::errors::ClimatchError;

/// Check all scoring preconditions for one recipient/source/variance triple.
pub fn validate_inputs<T: Float>(
    recipient: &TableView<'_, T>,
    source: &TableView<'_, T>,
    variance: &[T],
) -> Result<(), ClimatchError> {
    if variance.is_empty() {
        return Err(ClimatchError::EmptyInput {
            what: "global variance",
        });
    }
    if source.n_rows() == 0 {
        return Err(ClimatchError::EmptyInput {
            what: "source table",
        });
    }
    if recipient.n_rows() == 0 {
        return Err(ClimatchError::EmptyInput {
            what: "recipient table",
        });
    }
    if source.n_vars() != variance.len() {
        return Err(ClimatchError::DimensionMismatch {
            what: "source table",
            expected: variance.len(),
            actual: source.n_vars(),
        });
    }
    if recipient.n_vars() != variance.len() {
        return Err(ClimatchError::DimensionMismatch {
            what: "recipient table",
            expected: variance.len(),
            actual: recipient.n_vars(),
        });
    }
    for (index, &value) in variance.iter().enumerate() {
        if !value.is_finite() || value <= T::zero() {
            return Err(ClimatchError::InvalidVariance {
                index,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
    }
    check_finite(source, "source table")?;
    check_finite(recipient, "recipient table")?;
    Ok(())
}

/// Reject tables containing NaN or infinite values.
fn check_finite<T: Float>(
    table: &TableView<'_, T>,
    what: &'static str,
) -> Result<(), ClimatchError> {
    let n_vars = table.n_vars();
    for (idx, &value) in table.values().iter().enumerate() {
        if !value.is_finite() {
            return Err(ClimatchError::NonFiniteValue {
                what,
                row: idx / n_vars,
                col: idx % n_vars,
            });
        }
    }
    Ok(())
}
