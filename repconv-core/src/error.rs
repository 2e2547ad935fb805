//! Error types for report conversion
//!
//! Conversion faults that the line-oriented format can produce are surfaced
//! as typed errors instead of index panics, using thiserror for the trait
//! implementations.

use thiserror::Error;

/// Main error type for conversion operations
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Writing to the output sink failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A block produced no fields where a header or row was required
    #[error("block {position} (rep {marker}) contains no fields")]
    EmptyBlock { position: usize, marker: String },

    /// A block's labels differ from the header's labels
    #[error("block {position} (rep {marker}) has fields [{found}] but the header is [{expected}]")]
    FieldMismatch { position: usize, marker: String, expected: String, found: String },

    /// Configuration values that cannot be used
    #[error("Configuration error: {message}")]
    InvalidConfig { message: String },
}

impl ConvertError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig { message: message.into() }
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
