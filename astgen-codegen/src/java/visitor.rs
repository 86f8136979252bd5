//! Visitor interface generation.

use super::writer::SourceWriter;
use astgen_schema::ir::{ResolvedVariant, UnitIr, visitor_param_name};
use astgen_schema::variants::VariantDef;
use std::fmt;

/// One visitor method signature, e.g. `R visitBinaryExpr(Binary expr);`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSignature {
    /// Method name.
    pub method: String,
    /// Parameter type (the variant's own class).
    pub param_type: String,
    /// Parameter name (the lower-cased base type name).
    pub param_name: String,
}

impl fmt::Display for DispatchSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R {}({} {});", self.method, self.param_type, self.param_name)
    }
}

/// The `interface Visitor<R>` block: one signature per variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisitorBlock {
    /// Signatures in variant order.
    pub signatures: Vec<DispatchSignature>,
}

impl VisitorBlock {
    /// Writes the interface to `writer`.
    pub fn write_to(&self, writer: &mut SourceWriter) {
        writer.block("interface Visitor<R>", |w| {
            for signature in &self.signatures {
                w.line(&signature.to_string());
            }
        });
    }
}

/// Generator for the visitor interface.
pub struct VisitorGenerator<'a> {
    ir: &'a UnitIr,
}

impl<'a> VisitorGenerator<'a> {
    /// Creates a new visitor generator.
    #[must_use]
    pub fn new(ir: &'a UnitIr) -> Self {
        Self { ir }
    }

    /// Composes the visitor interface.
    #[must_use]
    pub fn generate(&self) -> VisitorBlock {
        VisitorBlock {
            signatures: self
                .ir
                .variants
                .iter()
                .map(|variant| signature(variant, &self.ir.visitor_param))
                .collect(),
        }
    }
}

/// Composes the visitor interface for `variants` of `base_name`.
#[must_use]
pub fn compose_visitor(base_name: &str, variants: &[VariantDef]) -> VisitorBlock {
    let param = visitor_param_name(base_name);
    VisitorBlock {
        signatures: variants
            .iter()
            .map(|v| signature(&ResolvedVariant::from_variant_def(v, base_name), &param))
            .collect(),
    }
}

fn signature(variant: &ResolvedVariant, param_name: &str) -> DispatchSignature {
    DispatchSignature {
        method: variant.dispatch_method.clone(),
        param_type: variant.name.clone(),
        param_name: param_name.to_string(),
    }
}
