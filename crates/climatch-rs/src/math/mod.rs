//! Layer 2: Math
//!
//! ## Purpose
//!
//! This layer provides the mathematical core of climate matching: the
//! variance-normalized Euclidean distance and the exhaustive nearest-source
//! scan.
//!
//! ## Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Variance-normalized Euclidean distance computation.
pub mod distance;
