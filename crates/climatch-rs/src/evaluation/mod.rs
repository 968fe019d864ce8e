//! Layer 4: Evaluation
//!
//! ## Purpose
//!
//! This layer reduces a score pass to reportable summaries: the bounded
//! histogram of floored scores and the percentage of cells at or above a
//! match threshold.
//!
//! ## Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Bounded histogram of floored match scores.
pub mod histogram;

/// Aggregate score summaries.
pub mod summary;
