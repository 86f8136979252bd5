//! Generator configuration.

use crate::error::CodegenError;
use astgen_schema::validation::{is_identifier, is_reserved_word};

/// Source file extension of generated units.
pub const FILE_EXTENSION: &str = "java";

/// Default package declared by generated units.
pub const DEFAULT_PACKAGE: &str = "ast";

/// Default number of spaces per indent level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

const MAX_INDENT_WIDTH: usize = 16;

/// Layout settings for generated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    package: String,
    indent_width: usize,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }

    /// Sets the package declared at the top of each unit.
    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Sets the number of spaces per indent level.
    #[must_use]
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Returns the package name.
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package
    }

    /// Returns one indent level as a string of spaces.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }

    /// Returns the source file extension of generated units.
    #[must_use]
    pub const fn file_extension(&self) -> &'static str {
        FILE_EXTENSION
    }

    /// Checks the configuration.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if the package is not a dotted
    /// identifier path or the indent width is out of range.
    pub fn validate(&self) -> Result<(), CodegenError> {
        let usable = |segment: &str| is_identifier(segment) && !is_reserved_word(segment);
        if self.package.is_empty() || !self.package.split('.').all(usable) {
            return Err(CodegenError::config(format!(
                "package '{}' is not a dotted identifier path",
                self.package
            )));
        }
        if !(1..=MAX_INDENT_WIDTH).contains(&self.indent_width) {
            return Err(CodegenError::config(format!(
                "indent width {} out of range 1..={MAX_INDENT_WIDTH}",
                self.indent_width
            )));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
