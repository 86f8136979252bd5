//! Variant definitions for AST schemas.
//!
//! A variant is one concrete subtype of the hierarchy's base type, described
//! by its name and an ordered list of typed fields.

use serde::Serialize;

/// Variant (subtype) definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDef {
    /// Variant name, used verbatim as the subtype name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

impl VariantDef {
    /// Creates a new variant with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field, keeping declaration order.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }

    /// Builder-style variant of [`add_field`](Self::add_field).
    #[must_use]
    pub fn with_field(mut self, type_name: impl Into<String>, name: impl Into<String>) -> Self {
        self.add_field(FieldDef::new(type_name, name));
        self
    }
}

/// Field definition: a `(typeName, fieldName)` pair.
///
/// The type name is opaque and copied verbatim into generated code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    /// Target-language type of the field.
    pub type_name: String,
    /// Field name.
    pub name: String,
}

impl FieldDef {
    /// Creates a new field definition.
    #[must_use]
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}
