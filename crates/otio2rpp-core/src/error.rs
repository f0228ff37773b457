//! Error types for timeline conversion.

use thiserror::Error;

/// Main error type for conversion operations.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unsupported schema: {0}")]
    UnsupportedSchema(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// The clip has neither a source range nor a media available range.
    #[error("Clip \"{clip}\" has no source range")]
    MissingRange { clip: String },

    /// Extension (lowercase, without the dot) of a media file that cannot be
    /// placed in the project.
    #[error("Unknown file extension: \"{0}\"")]
    UnsupportedMediaType(String),
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;
