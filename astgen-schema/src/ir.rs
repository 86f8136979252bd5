//! Intermediate representation for code generation.
//!
//! This module resolves the names the generated code depends on, so that
//! every composer reads them from one place. In particular the dispatch
//! method name is computed once per variant by [`dispatch_method_name`] and
//! shared by the variant's `accept` forwarding call and the visitor interface.

use crate::types::SchemaUnit;
use crate::variants::{FieldDef, VariantDef};

/// Prefix of every visitor dispatch method.
pub const DISPATCH_PREFIX: &str = "visit";

/// Intermediate representation of a schema unit for code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitIr {
    /// Base type name.
    pub base_name: String,
    /// Parameter name used by every visitor method.
    pub visitor_param: String,
    /// Dependency names in schema order.
    pub imports: Vec<String>,
    /// Variants with resolved names, in schema order.
    pub variants: Vec<ResolvedVariant>,
}

impl UnitIr {
    /// Creates an intermediate representation from a loaded schema unit.
    #[must_use]
    pub fn from_unit(unit: &SchemaUnit) -> Self {
        Self {
            base_name: unit.base_name.clone(),
            visitor_param: visitor_param_name(&unit.base_name),
            imports: unit.imports.clone(),
            variants: unit
                .variants
                .iter()
                .map(|v| ResolvedVariant::from_variant_def(v, &unit.base_name))
                .collect(),
        }
    }
}

/// Variant with its dispatch method resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVariant {
    /// Variant name.
    pub name: String,
    /// Visitor method this variant dispatches to.
    pub dispatch_method: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

impl ResolvedVariant {
    /// Resolves a variant against its base type.
    #[must_use]
    pub fn from_variant_def(variant: &VariantDef, base_name: &str) -> Self {
        Self {
            name: variant.name.clone(),
            dispatch_method: dispatch_method_name(&variant.name, base_name),
            fields: variant.fields.clone(),
        }
    }
}

/// Name of the visitor method for a variant (`Binary`, `Expr` -> `visitBinaryExpr`).
#[must_use]
pub fn dispatch_method_name(variant_name: &str, base_name: &str) -> String {
    format!("{DISPATCH_PREFIX}{variant_name}{base_name}")
}

/// Name of the node parameter of visitor methods (`Expr` -> `expr`).
#[must_use]
pub fn visitor_param_name(base_name: &str) -> String {
    base_name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_schema;

    #[test]
    fn test_dispatch_method_name() {
        assert_eq!(dispatch_method_name("Binary", "Expr"), "visitBinaryExpr");
        assert_eq!(dispatch_method_name("Print", "Stmt"), "visitPrintStmt");
    }

    #[test]
    fn test_visitor_param_name() {
        assert_eq!(visitor_param_name("Expr"), "expr");
        assert_eq!(visitor_param_name("TypeExpr"), "typeexpr");
    }

    #[test]
    fn test_unit_ir_from_unit() {
        let json = r#"{
            "imports": ["java.util.List"],
            "variants": [
                { "className": "Block", "Fields": [["List<Stmt>", "statements"]] },
                { "className": "Print", "Fields": [["Expr", "expr"]] }
            ]
        }"#;
        let unit = parse_schema(json, "Stmt").expect("Failed to parse");
        let ir = UnitIr::from_unit(&unit);

        assert_eq!(ir.base_name, "Stmt");
        assert_eq!(ir.visitor_param, "stmt");
        assert_eq!(ir.imports, ["java.util.List"]);
        assert_eq!(ir.variants.len(), 2);
        assert_eq!(ir.variants[0].dispatch_method, "visitBlockStmt");
        assert_eq!(
            ir.variants[1].dispatch_method,
            dispatch_method_name("Print", "Stmt")
        );
    }

    #[test]
    fn test_resolved_variant_keeps_fields() {
        let variant = VariantDef::new("Binary")
            .with_field("Expr", "left")
            .with_field("Token", "operator")
            .with_field("Expr", "right");
        let resolved = ResolvedVariant::from_variant_def(&variant, "Expr");

        assert_eq!(resolved.fields, variant.fields);
        assert_eq!(resolved.dispatch_method, "visitBinaryExpr");
    }
}
