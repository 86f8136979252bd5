//! Schema unit definition.
//!
//! A schema unit describes one AST hierarchy: its base type name, the ordered
//! variant subtypes and the external dependencies the generated unit imports.

use crate::variants::VariantDef;
use serde::Serialize;

/// One loaded schema unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaUnit {
    /// Name of the abstract base type, derived from the source identity.
    pub base_name: String,
    /// Variant definitions in schema order.
    pub variants: Vec<VariantDef>,
    /// Dependency (import) names in schema order, not deduplicated.
    pub imports: Vec<String>,
}

impl SchemaUnit {
    /// Creates a new empty schema unit.
    #[must_use]
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            variants: Vec::new(),
            imports: Vec::new(),
        }
    }

    /// Adds a variant, keeping schema order.
    pub fn add_variant(&mut self, variant: VariantDef) {
        self.variants.push(variant);
    }

    /// Adds a dependency name.
    pub fn add_import(&mut self, import: impl Into<String>) {
        self.imports.push(import.into());
    }

    /// Looks up a variant by name.
    #[must_use]
    pub fn get_variant(&self, name: &str) -> Option<&VariantDef> {
        self.variants.iter().find(|v| v.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_unit_new() {
        let unit = SchemaUnit::new("Expr");
        assert_eq!(unit.base_name, "Expr");
        assert!(unit.variants.is_empty());
        assert!(unit.imports.is_empty());
    }

    #[test]
    fn test_add_variant_lookup() {
        let mut unit = SchemaUnit::new("Stmt");
        unit.add_variant(VariantDef::new("Print").with_field("Expr", "expr"));
        unit.add_variant(VariantDef::new("Block").with_field("List<Stmt>", "statements"));

        assert_eq!(unit.get_variant("Block").unwrap().fields.len(), 1);
        assert!(unit.get_variant("While").is_none());
    }

    #[test]
    fn test_lookup_after_direct_edit() {
        let mut unit = SchemaUnit::new("Expr");
        unit.add_variant(VariantDef::new("Binary"));
        unit.add_variant(VariantDef::new("Unary"));

        unit.variants.truncate(1);
        assert!(unit.get_variant("Unary").is_none());

        unit.variants.push(VariantDef::new("Literal"));
        assert!(unit.get_variant("Literal").is_some());
    }

    #[test]
    fn test_equality_ignores_build_path() {
        let mut built = SchemaUnit::new("Expr");
        built.add_variant(VariantDef::new("Literal"));

        let mut edited = SchemaUnit::new("Expr");
        edited.variants.push(VariantDef::new("Literal"));

        assert_eq!(built, edited);
    }

    #[test]
    fn test_imports_keep_order_and_duplicates() {
        let mut unit = SchemaUnit::new("Stmt");
        unit.add_import("java.util.List");
        unit.add_import("java.util.Map");
        unit.add_import("java.util.List");

        assert_eq!(
            unit.imports,
            ["java.util.List", "java.util.Map", "java.util.List"]
        );
    }

    #[test]
    fn test_serialize_shape() {
        let mut unit = SchemaUnit::new("Expr");
        unit.add_variant(VariantDef::new("Literal").with_field("Object", "value"));

        let json = serde_json::to_value(&unit).unwrap();
        assert_eq!(json["baseName"], "Expr");
        assert_eq!(json["variants"][0]["fields"][0]["typeName"], "Object");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }
}
