//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading error.
    #[error("schema error: {0}")]
    Schema(#[from] inputgen_schema::ParseError),

    /// Type chain that can't be turned into an annotation.
    #[error("parsing error: {message}")]
    Parsing {
        /// Error message.
        message: String,
    },

    /// I/O error while reading a schema file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid generator configuration.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a parsing error with the given message.
    pub fn parsing(message: impl Into<String>) -> Self {
        Self::Parsing {
            message: message.into(),
        }
    }

    /// Creates a configuration error with the given message.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}
