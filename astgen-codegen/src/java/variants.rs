//! Variant subclass generation.

use super::fields::RenderedFields;
use super::writer::SourceWriter;
use astgen_schema::ir::{ResolvedVariant, UnitIr};
use astgen_schema::variants::VariantDef;

/// One composed `static class <Variant> extends <Base>` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantBlock {
    /// Variant (subclass) name.
    pub name: String,
    /// Base type the subclass extends.
    pub base_name: String,
    /// Rendered fields.
    pub fields: RenderedFields,
    /// Visitor method called from `accept`.
    pub dispatch_method: String,
}

impl VariantBlock {
    /// The `accept` forwarding statement.
    #[must_use]
    pub fn accept_call(&self) -> String {
        format!("return visitor.{}(this);", self.dispatch_method)
    }

    /// Writes the subclass to `writer`.
    pub fn write_to(&self, writer: &mut SourceWriter) {
        let header = format!("static class {} extends {}", self.name, self.base_name);
        writer.block(&header, |w| {
            for declaration in &self.fields.declarations {
                w.line(declaration);
            }
            if !self.fields.is_empty() {
                w.blank();
            }

            let ctor = format!("{}({})", self.name, self.fields.param_list());
            if self.fields.is_empty() {
                w.line(&format!("{ctor} {{}}"));
            } else {
                w.block(&ctor, |w| {
                    for assignment in &self.fields.assignments {
                        w.line(assignment);
                    }
                });
            }
            w.blank();

            w.line("@Override");
            w.block("<R> R accept(Visitor<R> visitor)", |w| {
                w.line(&self.accept_call());
            });
        });
    }
}

/// Generator for variant subclasses.
pub struct VariantGenerator<'a> {
    ir: &'a UnitIr,
}

impl<'a> VariantGenerator<'a> {
    /// Creates a new variant generator.
    #[must_use]
    pub fn new(ir: &'a UnitIr) -> Self {
        Self { ir }
    }

    /// Composes every variant, in schema order.
    #[must_use]
    pub fn generate(&self) -> Vec<VariantBlock> {
        self.ir
            .variants
            .iter()
            .map(|variant| self.compose(variant))
            .collect()
    }

    /// Composes a single resolved variant.
    #[must_use]
    pub fn compose(&self, variant: &ResolvedVariant) -> VariantBlock {
        tracing::trace!(variant = %variant.name, fields = variant.fields.len(), "composing variant");
        VariantBlock {
            name: variant.name.clone(),
            base_name: self.ir.base_name.clone(),
            fields: RenderedFields::from_fields(&variant.fields),
            dispatch_method: variant.dispatch_method.clone(),
        }
    }
}

/// Composes one variant of `base_name` outside a full unit.
#[must_use]
pub fn compose_variant(base_name: &str, variant: &VariantDef) -> VariantBlock {
    let resolved = ResolvedVariant::from_variant_def(variant, base_name);
    VariantBlock {
        name: resolved.name,
        base_name: base_name.to_string(),
        fields: RenderedFields::from_fields(&resolved.fields),
        dispatch_method: resolved.dispatch_method,
    }
}
