//! Unified error types for canticle.
//!
//! This module provides a single error type shared by the segmenter,
//! the option loader and all output encoders.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result};
