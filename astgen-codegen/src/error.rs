//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading error.
    #[error("schema error: {0}")]
    Load(#[from] astgen_schema::LoadError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid generator configuration.
    #[error("invalid configuration: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns true if the schema source could not be read or parsed.
    #[must_use]
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::Load(err) if err.is_source_unavailable())
    }

    /// Returns true if the schema content was invalid.
    #[must_use]
    pub fn is_schema_format(&self) -> bool {
        matches!(self, Self::Load(err) if err.is_schema_format())
    }
}
