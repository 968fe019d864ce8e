//! Layer 3: Engine
//!
//! ## Purpose
//!
//! This layer validates inputs and runs the score pass over all recipient
//! cells, sequentially or in parallel.
//!
//! ## Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Score pass execution over recipient cells.
pub mod executor;

/// Input validation for climate matching.
pub mod validate;
