//! Input abstractions for climate matching.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for climate tables and variance
//! vectors, allowing the scoring methods to process multiple data formats
//! (nested vectors, fixed-size rows, flat slices, ndarray) through a single
//! interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Flat slices and contiguous ndarray views
//!   are borrowed; nested rows are flattened into an owned buffer.
//! * **Interoperability**: Bridges standard Rust collections with specialized
//!   numerical libraries.
//! * **Fail-fast validation**: Shape defects (ragged rows, indivisible flat
//!   buffers, non-contiguous arrays) are rejected during conversion, before
//!   any scoring work runs.
//!
//! ## Key concepts
//!
//! * **ClimateTable Trait**: Converts a two-dimensional input into a dense
//!   row-major [`TableView`].
//! * **VarianceInput Trait**: Converts a one-dimensional input into a
//!   contiguous slice.
//!
//! ## Invariants
//!
//! * A `TableView` always holds `n_rows * n_vars` values in row-major order.
//! * Inputs must be contiguous in memory; non-contiguous inputs return an
//!   error.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.
//! * This module does not align climate variables by name; column order is
//!   the caller's contract.

// Feature-gated imports
#[cfg(feature = "cpu")]
use ndarray::{ArrayBase, Data, Ix1, Ix2};

// External dependencies
use num_traits::Float;
use std::borrow::Cow;

// Internal dependencies
use crate::primitives::errors::ClimatchError;

// ============================================================================
// Table View
// ============================================================================

/// Dense row-major view of a climate table.
///
/// Every [`ClimateTable`] input is converted into this form before
/// validation and scoring.
#[derive(Debug, Clone)]
pub struct TableView<'a, T: Float> {
    values: Cow<'a, [T]>,
    n_vars: usize,
}

impl<'a, T: Float> TableView<'a, T> {
    /// Build a view borrowing a dense row-major slice.
    pub fn from_flat(values: &'a [T], n_vars: usize) -> Result<Self, ClimatchError> {
        if n_vars == 0 {
            if values.is_empty() {
                return Ok(Self {
                    values: Cow::Borrowed(values),
                    n_vars: 0,
                });
            }
            return Err(ClimatchError::InvalidInput(
                "flat input declares zero variables but contains data".to_string(),
            ));
        }
        if values.len() % n_vars != 0 {
            return Err(ClimatchError::InvalidInput(format!(
                "flat input length {} is not a multiple of {} variables",
                values.len(),
                n_vars
            )));
        }
        Ok(Self {
            values: Cow::Borrowed(values),
            n_vars,
        })
    }

    /// Build an owned view by flattening one row per cell.
    ///
    /// The first row defines the number of variables; ragged inputs are
    /// rejected.
    pub fn from_rows<'v>(rows: &[Vec<T>]) -> Result<TableView<'v, T>, ClimatchError> {
        let n_vars = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(rows.len() * n_vars);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_vars {
                return Err(ClimatchError::InvalidInput(format!(
                    "ragged input: row {} has {} values, expected {}",
                    i,
                    row.len(),
                    n_vars
                )));
            }
            values.extend_from_slice(row);
        }
        Ok(TableView {
            values: Cow::Owned(values),
            n_vars,
        })
    }

    /// Number of rows (grid cells).
    pub fn n_rows(&self) -> usize {
        if self.n_vars == 0 {
            0
        } else {
            self.values.len() / self.n_vars
        }
    }

    /// Number of variables per row.
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    /// The underlying row-major values.
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

// ============================================================================
// Input Traits
// ============================================================================

/// Trait for types that can be used as a climate table.
pub trait ClimateTable<T: Float> {
    /// Convert the input to a dense row-major table view.
    fn as_table_view(&self) -> Result<TableView<'_, T>, ClimatchError>;
}

/// Trait for types that can be used as a global variance vector.
pub trait VarianceInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_variance_slice(&self) -> Result<&[T], ClimatchError>;
}

// ============================================================================
// Table Implementations
// ============================================================================

impl<T: Float> ClimateTable<T> for [Vec<T>] {
    fn as_table_view(&self) -> Result<TableView<'_, T>, ClimatchError> {
        TableView::from_rows(self)
    }
}

impl<T: Float> ClimateTable<T> for Vec<Vec<T>> {
    fn as_table_view(&self) -> Result<TableView<'_, T>, ClimatchError> {
        TableView::from_rows(self)
    }
}

impl<T: Float, const V: usize> ClimateTable<T> for [[T; V]] {
    fn as_table_view(&self) -> Result<TableView<'_, T>, ClimatchError> {
        let mut values = Vec::with_capacity(self.len() * V);
        for row in self {
            values.extend_from_slice(row);
        }
        Ok(TableView {
            values: Cow::Owned(values),
            n_vars: V,
        })
    }
}

impl<'b, T: Float> ClimateTable<T> for (&'b [T], usize) {
    fn as_table_view(&self) -> Result<TableView<'_, T>, ClimatchError> {
        TableView::from_flat(self.0, self.1)
    }
}

#[cfg(feature = "cpu")]
impl<T: Float, S> ClimateTable<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn as_table_view(&self) -> Result<TableView<'_, T>, ClimatchError> {
        let values = self.as_slice().ok_or_else(|| {
            ClimatchError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })?;
        Ok(TableView {
            values: Cow::Borrowed(values),
            n_vars: self.ncols(),
        })
    }
}

// ============================================================================
// Variance Implementations
// ============================================================================

impl<T: Float> VarianceInput<T> for [T] {
    fn as_variance_slice(&self) -> Result<&[T], ClimatchError> {
        Ok(self)
    }
}

impl<T: Float> VarianceInput<T> for Vec<T> {
    fn as_variance_slice(&self) -> Result<&[T], ClimatchError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, const V: usize> VarianceInput<T> for [T; V] {
    fn as_variance_slice(&self) -> Result<&[T], ClimatchError> {
        Ok(self)
    }
}

#[cfg(feature = "cpu")]
impl<T: Float, S> VarianceInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_variance_slice(&self) -> Result<&[T], ClimatchError> {
        self.as_slice().ok_or_else(|| {
            ClimatchError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
