//! Common types, traits, and utilities shared across formats.
//!
//! This module provides the pieces every encoder leans on: the unified error
//! type, the colour model, XML escaping and the identifier/clock seam.

// Submodule declarations
pub mod color;
pub mod error;
pub mod id;
pub mod xml;

// Re-exports for convenience
pub use color::Rgba;
pub use error::{Error, Result};
pub use id::{Identity, SeededIdentity, SystemIdentity};
