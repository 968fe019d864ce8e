//! Euclidean climate matching (climatch) scores.
//!
//! This crate scores how closely the climate of each grid cell in a
//! recipient region matches the nearest-climate cell of a source region,
//! following the climatch algorithm (Crombie et al. 2008) used in invasion
//! risk screening. For recipient cell `j`, source cells `i`, and `V` climate
//! variables with global variances `var`:
//!
//! ```text
//! d(i, j)  = sqrt( (1/V) · Σₘ (source[i][m] − recipient[j][m])² / var[m] )
//! score(j) = 10 · (1 − minᵢ d(i, j))
//! ```
//!
//! A perfect climate analogue scores 10. Floored scores of 6 and above are
//! conventionally treated as a climate match; recipient cells far outside
//! the source climate envelope score negative.
//!
//! # Quick start
//!
//! ```
//! use climatch_rs::prelude::*;
//!
//! // Two source cells and two recipient cells over three climate variables.
//! let source = vec![
//!     vec![18.0, 1200.0, 60.0],
//!     vec![21.0, 950.0, 55.0],
//! ];
//! let recipient = vec![
//!     vec![19.0, 1100.0, 58.0],
//!     vec![35.0, 200.0, 10.0],
//! ];
//! let global_variance = vec![25.0, 40000.0, 100.0];
//!
//! let scores = climatch_vector(&recipient, &source, &global_variance).unwrap();
//! assert_eq!(scores.len(), 2);
//! assert!(scores[0] > 6.0);
//! assert!(scores[1] < 0.0);
//!
//! let percentage: f64 = climatch_percentage(&recipient, &source, &global_variance).unwrap();
//! assert_eq!(percentage, 50.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! Climatch::scores() / climatch_vector()
//!   ├─ as_table_view()                       (input.rs)
//!   ├─ validate_inputs()                     (engine/validate.rs)
//!   └─ score_pass[_parallel]()               (engine/executor.rs)
//!        └─ nearest_analogue_sq_distance()   (math/distance.rs)
//!
//! Climatch::histogram() / ::percentage()
//!   └─ ScoreHistogram / percentage_at_least  (evaluation/)
//! ```
//!
//! The source scan is deliberately exhaustive: match scores need the true
//! minimum and the variance scaling changes per call, so no spatial index is
//! built.
//!
//! # Feature flags
//!
//! * `cpu` (default): rayon-parallel score pass and ndarray input support.
//! * `dev`: enables the workspace integration test targets.

/// High-level API for climate matching.
pub mod api;

/// Score pass execution and input validation.
pub mod engine;

/// Score histograms and summaries.
pub mod evaluation;

/// Input abstractions for climate tables and variance vectors.
pub mod input;

/// Distance mathematics.
pub mod math;

/// Foundational types.
pub mod primitives;

/// Commonly used types and functions for climate matching.
pub mod prelude {
    pub use crate::api::{
        climatch_histogram, climatch_percentage, climatch_vector, Climatch, ClimatchBuilder,
        ClimatchError, ScoreHistogram, TableView, BIN_COUNT, DEFAULT_MATCH_THRESHOLD,
    };
    pub use crate::input::{ClimateTable, VarianceInput};
}
