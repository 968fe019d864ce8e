//! Python bindings for climatch-rs.
//!
//! Provides Python access to the climatch-rs Rust library via PyO3.

#![deny(missing_docs)]

use numpy::{PyArray1, PyReadonlyArray1, PyReadonlyArray2, PyUntypedArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::fmt::Display;

use ::climatch_rs::prelude::{Climatch, ScoreHistogram};

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a ClimatchError to a PyErr
fn to_py_error(e: impl Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ============================================================================
// Python Classes
// ============================================================================

/// Histogram of floored climatch scores.
#[pyclass(name = "ScoreHistogram")]
pub struct PyScoreHistogram {
    inner: ScoreHistogram,
}

#[pymethods]
impl PyScoreHistogram {
    /// Per-bin counts for floored scores 0 through 10.
    #[getter]
    fn counts<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u64>> {
        PyArray1::from_vec(py, self.inner.counts().to_vec())
    }

    /// Number of scores recorded, including any outside the bins.
    #[getter]
    fn total(&self) -> u64 {
        self.inner.total()
    }

    /// Combined count of bins `threshold` through 10.
    fn tail_count(&self, threshold: usize) -> u64 {
        self.inner.tail_count(threshold)
    }

    fn __repr__(&self) -> String {
        format!(
            "ScoreHistogram(total={}, counts={:?})",
            self.inner.total(),
            self.inner.counts()
        )
    }
}

// ============================================================================
// Python Functions
// ============================================================================

/// Raw climatch scores for every recipient cell.
///
/// For each recipient grid cell, finds the nearest source cell under the
/// variance-normalized Euclidean distance and returns `10 * (1 - distance)`.
/// Scores are unclamped: a perfect analogue scores 10 and distant climates
/// go negative.
///
/// Parameters
/// ----------
/// recipient : ndarray of float64, shape (n_cells, n_vars)
///     Climate values for the recipient region, one row per grid cell.
/// source : ndarray of float64, shape (m_cells, n_vars)
///     Climate values for the source region, one row per grid cell.
/// global_variance : ndarray of float64, shape (n_vars,)
///     Global variance of each climate variable; entries must be positive.
/// parallel : bool, optional
///     Enable parallel execution (default: True).
///
/// Returns
/// -------
/// ndarray of float64
///     One score per recipient cell, in recipient row order.
#[pyfunction]
#[pyo3(signature = (recipient, source, global_variance, parallel=true))]
fn climatch_vector<'py>(
    py: Python<'py>,
    recipient: PyReadonlyArray2<'py, f64>,
    source: PyReadonlyArray2<'py, f64>,
    global_variance: PyReadonlyArray1<'py, f64>,
    parallel: bool,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let rec_slice = recipient.as_slice().map_err(to_py_error)?;
    let src_slice = source.as_slice().map_err(to_py_error)?;
    let var_slice = global_variance.as_slice().map_err(to_py_error)?;

    let model = Climatch::new()
        .parallel(parallel)
        .build()
        .map_err(to_py_error)?;

    let scores = model
        .scores(
            &(rec_slice, recipient.shape()[1]),
            &(src_slice, source.shape()[1]),
            var_slice,
        )
        .map_err(to_py_error)?;

    Ok(PyArray1::from_vec(py, scores))
}

/// Percentage of recipient cells at or above the match threshold.
///
/// Scores are floored into bins 0 through 10; the result is the share of
/// recipient cells whose bin is at least `threshold`, as a percentage of
/// all recipient cells.
///
/// Parameters
/// ----------
/// recipient : ndarray of float64, shape (n_cells, n_vars)
///     Climate values for the recipient region, one row per grid cell.
/// source : ndarray of float64, shape (m_cells, n_vars)
///     Climate values for the source region, one row per grid cell.
/// global_variance : ndarray of float64, shape (n_vars,)
///     Global variance of each climate variable; entries must be positive.
/// threshold : int, optional
///     Lowest floored score counted as a match, 0 through 10 (default: 6).
/// parallel : bool, optional
///     Enable parallel execution (default: True).
///
/// Returns
/// -------
/// float
///     Matching cells as a percentage of all recipient cells.
#[pyfunction]
#[pyo3(signature = (recipient, source, global_variance, threshold=6, parallel=true))]
fn climatch_percentage<'py>(
    recipient: PyReadonlyArray2<'py, f64>,
    source: PyReadonlyArray2<'py, f64>,
    global_variance: PyReadonlyArray1<'py, f64>,
    threshold: usize,
    parallel: bool,
) -> PyResult<f64> {
    let rec_slice = recipient.as_slice().map_err(to_py_error)?;
    let src_slice = source.as_slice().map_err(to_py_error)?;
    let var_slice = global_variance.as_slice().map_err(to_py_error)?;

    let model = Climatch::new()
        .threshold(threshold)
        .parallel(parallel)
        .build()
        .map_err(to_py_error)?;

    model
        .percentage(
            &(rec_slice, recipient.shape()[1]),
            &(src_slice, source.shape()[1]),
            var_slice,
        )
        .map_err(to_py_error)
}

/// Histogram of floored climatch scores over the recipient region.
///
/// Parameters
/// ----------
/// recipient : ndarray of float64, shape (n_cells, n_vars)
///     Climate values for the recipient region, one row per grid cell.
/// source : ndarray of float64, shape (m_cells, n_vars)
///     Climate values for the source region, one row per grid cell.
/// global_variance : ndarray of float64, shape (n_vars,)
///     Global variance of each climate variable; entries must be positive.
/// parallel : bool, optional
///     Enable parallel execution (default: True).
///
/// Returns
/// -------
/// ScoreHistogram
///     Bin counts for floored scores 0 through 10 plus the total cell count.
#[pyfunction]
#[pyo3(signature = (recipient, source, global_variance, parallel=true))]
fn climatch_histogram<'py>(
    recipient: PyReadonlyArray2<'py, f64>,
    source: PyReadonlyArray2<'py, f64>,
    global_variance: PyReadonlyArray1<'py, f64>,
    parallel: bool,
) -> PyResult<PyScoreHistogram> {
    let rec_slice = recipient.as_slice().map_err(to_py_error)?;
    let src_slice = source.as_slice().map_err(to_py_error)?;
    let var_slice = global_variance.as_slice().map_err(to_py_error)?;

    let model = Climatch::new()
        .parallel(parallel)
        .build()
        .map_err(to_py_error)?;

    let hist = model
        .histogram::<f64, _, _, _>(
            &(rec_slice, recipient.shape()[1]),
            &(src_slice, source.shape()[1]),
            var_slice,
        )
        .map_err(to_py_error)?;

    Ok(PyScoreHistogram { inner: hist })
}

// ============================================================================
// Module Registration
// ============================================================================

/// climatch: Euclidean climate matching scores for Python.
#[pymodule]
fn climatch(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyScoreHistogram>()?;
    m.add_function(wrap_pyfunction!(climatch_vector, m)?)?;
    m.add_function(wrap_pyfunction!(climatch_percentage, m)?)?;
    m.add_function(wrap_pyfunction!(climatch_histogram, m)?)?;
    Ok(())
}
