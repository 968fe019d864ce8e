//! Layer 1: Primitives
//!
//! ## Purpose
//!
//! This layer provides the foundational types shared by every other layer,
//! currently the crate-wide error type.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for climate matching.
pub mod errors;
