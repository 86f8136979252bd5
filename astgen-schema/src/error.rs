//! Error types for schema loading and validation.

use thiserror::Error;

/// Error raised when a schema source cannot be read or is not structured data.
#[derive(Debug, Error)]
pub enum SourceError {
    /// IO error while reading the source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not well-formed JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// No base type name could be derived from the source identity.
    #[error("cannot derive a base type name from '{path}'")]
    NoBaseName {
        /// Path of the source.
        path: String,
    },
}

/// Error raised when a schema document is well-formed but structurally invalid.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Required key is absent.
    #[error("missing required key '{key}' in {context}")]
    MissingKey {
        /// Context the key was expected in.
        context: String,
        /// Key name.
        key: String,
    },

    /// Value has the wrong JSON shape.
    #[error("invalid {context}: expected {expected}")]
    InvalidShape {
        /// Location of the value.
        context: String,
        /// Description of the expected shape.
        expected: String,
    },

    /// Field entry is not a `[typeName, fieldName]` pair.
    #[error("invalid field #{index} in variant '{variant}': expected a [type, name] pair")]
    InvalidField {
        /// Variant name.
        variant: String,
        /// Zero-based position of the field.
        index: usize,
    },

    /// Identifier is empty.
    #[error("empty {kind} in {context}")]
    EmptyIdentifier {
        /// Kind of identifier (variant name, field name, ...).
        kind: String,
        /// Location of the identifier.
        context: String,
    },

    /// Identifier is not usable as a type or field name.
    #[error("invalid {kind} '{name}'")]
    InvalidIdentifier {
        /// Kind of identifier.
        kind: String,
        /// Offending identifier.
        name: String,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} '{name}' in {context}")]
    DuplicateDefinition {
        /// Kind of definition (variant, field).
        kind: String,
        /// Name of the duplicate.
        name: String,
        /// Where the duplicate appeared.
        context: String,
    },
}

/// Error returned by the schema loader.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read or parsed as JSON.
    #[error("schema source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),

    /// The source is JSON but not a valid schema unit.
    #[error("schema format error: {0}")]
    SchemaFormat(#[from] FormatError),
}

impl LoadError {
    /// Returns true if the source itself could not be read or parsed.
    #[must_use]
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable(_))
    }

    /// Returns true if the source parsed but its content is invalid.
    #[must_use]
    pub fn is_schema_format(&self) -> bool {
        matches!(self, Self::SchemaFormat(_))
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        Self::SourceUnavailable(SourceError::Io(err))
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::SourceUnavailable(SourceError::Json(err))
    }
}

impl FormatError {
    /// Creates a missing key error.
    pub fn missing_key(context: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingKey {
            context: context.into(),
            key: key.into(),
        }
    }

    /// Creates an invalid shape error.
    pub fn invalid_shape(context: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidShape {
            context: context.into(),
            expected: expected.into(),
        }
    }

    /// Creates an invalid field error.
    pub fn invalid_field(variant: impl Into<String>, index: usize) -> Self {
        Self::InvalidField {
            variant: variant.into(),
            index,
        }
    }

    /// Creates an empty identifier error.
    pub fn empty(kind: impl Into<String>, context: impl Into<String>) -> Self {
        Self::EmptyIdentifier {
            kind: kind.into(),
            context: context.into(),
        }
    }

    /// Creates an invalid identifier error.
    pub fn invalid_identifier(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(
        kind: impl Into<String>,
        name: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
            context: context.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_kinds() {
        let err = LoadError::from(FormatError::missing_key("schema 'Expr'", "variants"));
        assert!(err.is_schema_format());
        assert!(!err.is_source_unavailable());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = LoadError::from(io);
        assert!(err.is_source_unavailable());
        assert!(!err.is_schema_format());
    }

    #[test]
    fn test_error_messages() {
        let err = FormatError::invalid_field("Binary", 2);
        assert_eq!(
            err.to_string(),
            "invalid field #2 in variant 'Binary': expected a [type, name] pair"
        );

        let err = FormatError::duplicate("field", "left", "variant 'Binary'");
        assert_eq!(err.to_string(), "duplicate field 'left' in variant 'Binary'");
    }
}
