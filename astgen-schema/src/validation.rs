//! Schema validation utilities.
//!
//! Checks that a decoded schema unit can be turned into source that compiles:
//! identifiers are usable as type and field names, and nothing is declared
//! twice. Type names are opaque and only checked for emptiness.
//!
//! Names the generated unit declares itself (`Visitor`, the type parameter
//! `R`) are rejected as variant and base names so they cannot shadow them.

use crate::error::FormatError;
use crate::types::SchemaUnit;
use crate::variants::VariantDef;
use std::collections::HashSet;

/// Java keywords and literals, none of which may name a type or field.
const RESERVED_WORDS: &[&str] = &[
    "_", "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

/// Names that are legal identifiers but cannot name a generated type.
const RESERVED_TYPE_NAMES: &[&str] = &["R", "Visitor", "record", "var", "yield"];

/// Validates a schema unit.
///
/// # Errors
/// Returns `FormatError` describing the first problem found.
pub fn validate_unit(unit: &SchemaUnit) -> Result<(), FormatError> {
    check_type_name("base type name", &unit.base_name, "schema")?;
    // The base name, lowercased, is the parameter of every visitor method.
    if is_reserved_word(&unit.base_name.to_lowercase()) {
        return Err(FormatError::invalid_identifier("base type name", &unit.base_name));
    }

    let mut seen_variants = HashSet::new();
    for variant in &unit.variants {
        let context = format!("schema '{}'", unit.base_name);
        check_type_name("variant name", &variant.name, &context)?;

        if variant.name == unit.base_name {
            return Err(FormatError::duplicate("type", &variant.name, context));
        }
        if !seen_variants.insert(variant.name.as_str()) {
            return Err(FormatError::duplicate("variant", &variant.name, context));
        }

        validate_variant(variant)?;
    }

    for (index, import) in unit.imports.iter().enumerate() {
        if import.trim().is_empty() {
            return Err(FormatError::empty(
                "import",
                format!("imports[{index}] of schema '{}'", unit.base_name),
            ));
        }
    }

    Ok(())
}

/// Validates the fields of a single variant.
fn validate_variant(variant: &VariantDef) -> Result<(), FormatError> {
    let context = format!("variant '{}'", variant.name);
    let mut seen_fields = HashSet::new();

    for field in &variant.fields {
        if field.type_name.trim().is_empty() {
            return Err(FormatError::empty("field type", &context));
        }
        check_identifier("field name", &field.name, &context)?;

        // Duplicates are reported, never merged.
        if !seen_fields.insert(field.name.as_str()) {
            return Err(FormatError::duplicate("field", &field.name, context));
        }
    }

    Ok(())
}

fn check_identifier(kind: &str, name: &str, context: &str) -> Result<(), FormatError> {
    if name.is_empty() {
        return Err(FormatError::empty(kind, context));
    }
    if !is_identifier(name) || is_reserved_word(name) {
        return Err(FormatError::invalid_identifier(kind, name));
    }
    Ok(())
}

fn check_type_name(kind: &str, name: &str, context: &str) -> Result<(), FormatError> {
    check_identifier(kind, name, context)?;
    if RESERVED_TYPE_NAMES.contains(&name) {
        return Err(FormatError::invalid_identifier(kind, name));
    }
    Ok(())
}

/// Returns true if `name` is a Java keyword or literal (`class`, `null`, ...).
///
/// The check is case-sensitive: `If` is a usable name, `if` is not.
#[must_use]
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Returns true if `name` is an ASCII identifier: a letter or `_` followed by
/// letters, digits or `_`.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
