//! Unified error types for canticle.
//!
//! Every generation call is a single atomic computation, so each variant
//! describes why the whole call was rejected. There is no partial output.
use thiserror::Error;

/// Main error type for presentation generation.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The hymn structure handed to the segmenter is malformed
    #[error("Invalid hymn structure (section {section}): {reason}")]
    InvalidStructure { section: usize, reason: String },

    /// Presentation options are out of range
    #[error("Invalid presentation options: {0}")]
    InvalidOptions(String),

    /// A colour value could not be parsed
    #[error("Invalid colour: {0}")]
    InvalidColor(String),

    /// Requested output format is not one we can produce
    #[error("Unsupported format '{requested}', expected one of: {}", .supported.join(", "))]
    UnsupportedFormat {
        requested: String,
        supported: Vec<&'static str>,
    },

    /// The binary object graph failed schema validation
    #[error("Schema violation at {path}: {reason}")]
    Schema { path: String, reason: String },

    /// Protobuf encoding failed
    #[error("Encode error: {0}")]
    Encode(String),

    /// Protobuf decoding failed
    #[error("Decode error: {0}")]
    Decode(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// Options file could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a schema violation for the given field path.
    pub fn schema(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Schema {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for canticle operations.
pub type Result<T> = std::result::Result<T, Error>;
