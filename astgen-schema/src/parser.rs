//! JSON schema loader.
//!
//! This module reads a schema document into a [`SchemaUnit`]. Two document
//! shapes are accepted:
//!
//! ```json
//! { "imports": ["java.util.List"],
//!   "variants": [ { "className": "Block", "Fields": [["List<Stmt>", "statements"]] } ] }
//! ```
//!
//! and the legacy form, a bare array of variant records without imports.
//! The base type name never comes from the document; it is supplied by the
//! caller or derived from the file stem.

use crate::error::{FormatError, LoadError, SourceError};
use crate::types::SchemaUnit;
use crate::validation::validate_unit;
use crate::variants::{FieldDef, VariantDef};
use serde_json::{Map, Value};
use std::path::Path;

const VARIANTS_KEY: &str = "variants";
const IMPORTS_KEY: &str = "imports";
const CLASS_NAME_KEY: &str = "className";
const FIELDS_KEY: &str = "Fields";

/// Parses a schema document from a string.
///
/// # Arguments
/// * `json` - Schema document content
/// * `base_name` - Name of the hierarchy's base type
///
/// # Errors
/// Returns `LoadError::SourceUnavailable` if `json` is not well-formed JSON and
/// `LoadError::SchemaFormat` if it is not a valid schema unit.
pub fn parse_schema(json: &str, base_name: &str) -> Result<SchemaUnit, LoadError> {
    let document: Value = serde_json::from_str(json)?;
    parse_schema_value(&document, base_name)
}

/// Parses a schema unit from an already decoded JSON document.
///
/// # Errors
/// Returns `LoadError::SchemaFormat` if the document is not a valid schema unit.
pub fn parse_schema_value(document: &Value, base_name: &str) -> Result<SchemaUnit, LoadError> {
    let mut unit = SchemaUnit::new(base_name);
    let context = format!("schema '{base_name}'");

    let variants = match document {
        Value::Object(obj) => {
            parse_imports(obj, &context, &mut unit)?;
            obj.get(VARIANTS_KEY)
                .ok_or_else(|| FormatError::missing_key(&context, VARIANTS_KEY))?
        }
        // Legacy shape: the document is the variant list itself.
        Value::Array(_) => document,
        _ => {
            return Err(FormatError::invalid_shape(
                &context,
                "an object with a 'variants' key or an array of variants",
            )
            .into());
        }
    };

    let entries = variants.as_array().ok_or_else(|| {
        FormatError::invalid_shape(format!("'{VARIANTS_KEY}' of {context}"), "an array")
    })?;

    for (index, entry) in entries.iter().enumerate() {
        unit.add_variant(parse_variant(entry, index)?);
    }

    validate_unit(&unit)?;

    tracing::debug!(
        base = %unit.base_name,
        variants = unit.variants.len(),
        imports = unit.imports.len(),
        "loaded schema unit"
    );

    Ok(unit)
}

/// Reads and parses a schema file, deriving the base name from its stem.
///
/// # Errors
/// Returns `LoadError::SourceUnavailable` if the file cannot be read, is not
/// JSON, or has no usable stem, and `LoadError::SchemaFormat` if its content
/// is not a valid schema unit.
pub fn parse_schema_file(path: &Path) -> Result<SchemaUnit, LoadError> {
    let base_name = base_name_from_path(path)?;
    tracing::debug!(path = %path.display(), base = %base_name, "reading schema file");
    let json = std::fs::read_to_string(path)?;
    parse_schema(&json, &base_name)
}

/// Derives a base type name from a source path (`ast/Expr.json` -> `Expr`).
///
/// # Errors
/// Returns `SourceError::NoBaseName` if the path has no UTF-8 file stem.
pub fn base_name_from_path(path: &Path) -> Result<String, SourceError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| SourceError::NoBaseName {
            path: path.display().to_string(),
        })
}

/// Parses the optional imports list.
fn parse_imports(
    obj: &Map<String, Value>,
    context: &str,
    unit: &mut SchemaUnit,
) -> Result<(), FormatError> {
    let Some(imports) = obj.get(IMPORTS_KEY) else {
        return Ok(());
    };

    let entries = imports.as_array().ok_or_else(|| {
        FormatError::invalid_shape(format!("'{IMPORTS_KEY}' of {context}"), "an array of strings")
    })?;

    for (index, entry) in entries.iter().enumerate() {
        let name = entry.as_str().ok_or_else(|| {
            FormatError::invalid_shape(format!("{IMPORTS_KEY}[{index}] of {context}"), "a string")
        })?;
        unit.add_import(name);
    }

    Ok(())
}

/// Parses one variant record.
fn parse_variant(entry: &Value, index: usize) -> Result<VariantDef, FormatError> {
    let context = format!("{VARIANTS_KEY}[{index}]");
    let obj = entry
        .as_object()
        .ok_or_else(|| FormatError::invalid_shape(&context, "a variant object"))?;

    let name = obj
        .get(CLASS_NAME_KEY)
        .ok_or_else(|| FormatError::missing_key(&context, CLASS_NAME_KEY))?
        .as_str()
        .ok_or_else(|| {
            FormatError::invalid_shape(format!("'{CLASS_NAME_KEY}' of {context}"), "a string")
        })?;

    let fields = obj
        .get(FIELDS_KEY)
        .ok_or_else(|| FormatError::missing_key(format!("variant '{name}'"), FIELDS_KEY))?
        .as_array()
        .ok_or_else(|| {
            FormatError::invalid_shape(format!("'{FIELDS_KEY}' of variant '{name}'"), "an array")
        })?;

    let mut variant = VariantDef::new(name);
    for (field_index, field) in fields.iter().enumerate() {
        variant.add_field(parse_field(field, name, field_index)?);
    }

    Ok(variant)
}

/// Parses a `[typeName, fieldName]` pair.
fn parse_field(entry: &Value, variant: &str, index: usize) -> Result<FieldDef, FormatError> {
    match entry.as_array().map(Vec::as_slice) {
        Some([Value::String(type_name), Value::String(name)]) => {
            Ok(FieldDef::new(type_name.as_str(), name.as_str()))
        }
        _ => Err(FormatError::invalid_field(variant, index)),
    }
}
