//! Error types for schema loading.

use thiserror::Error;

/// Error type for SDL loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// GraphQL syntax error.
    #[error("GraphQL syntax error: {0}")]
    Syntax(#[from] async_graphql_parser::Error),

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (input, enum, etc.).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Extension of a type that was never defined, or of a different kind.
    #[error("cannot extend {kind} '{name}': no such {kind} defined")]
    UnknownType {
        /// Kind of the extension.
        kind: String,
        /// Extended type name.
        name: String,
    },

    /// Literal that has no counterpart in the type model.
    #[error("unsupported default value for field '{field}': {message}")]
    UnsupportedValue {
        /// Field carrying the default.
        field: String,
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates an unknown type error.
    pub fn unknown_type(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownType {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates an unsupported value error.
    pub fn unsupported_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            field: field.into(),
            message: message.into(),
        }
    }
}
