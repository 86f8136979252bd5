//! Main code generator.
//!
//! The generator composes a unit in two steps. [`Generator::compose`] builds a
//! [`ComposedUnit`] of typed blocks from the intermediate representation, and
//! [`ComposedUnit::render`] serializes it. Only the second step knows about
//! layout, so the same blocks can be checked independently of whitespace.

use crate::config::GeneratorConfig;
use crate::java::{SourceWriter, VariantBlock, VariantGenerator, VisitorBlock, VisitorGenerator};
use astgen_schema::{SchemaUnit, UnitIr};

/// Final text of one generated unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputUnit {
    /// Base type name the unit was generated for.
    pub base_name: String,
    /// Generated source text.
    pub text: String,
}

impl OutputUnit {
    /// Conventional file name for this unit (`Expr` -> `Expr.java`).
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.base_name, crate::config::FILE_EXTENSION)
    }
}

/// A unit composed into typed blocks, not yet serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedUnit {
    /// Package declared at the top of the unit.
    pub package: String,
    /// Import lines, in schema order.
    pub imports: Vec<String>,
    /// Base type name.
    pub base_name: String,
    /// Visitor interface.
    pub visitor: VisitorBlock,
    /// Variant subclasses, in schema order.
    pub variants: Vec<VariantBlock>,
}

impl ComposedUnit {
    /// Serializes the unit using the given indent unit.
    #[must_use]
    pub fn render(&self, indent_unit: &str) -> String {
        let mut w = SourceWriter::new(indent_unit);

        w.line(&format!("package {};", self.package));
        w.blank();

        if !self.imports.is_empty() {
            for import in &self.imports {
                w.line(&format!("import {import};"));
            }
            w.blank();
        }

        w.block(&format!("abstract class {}", self.base_name), |w| {
            w.blank();
            self.visitor.write_to(w);
            w.blank();
            w.line("abstract <R> R accept(Visitor<R> visitor);");

            for variant in &self.variants {
                w.blank();
                variant.write_to(w);
            }
        });

        w.finish()
    }
}

/// Main code generator that orchestrates all generation.
pub struct Generator<'a> {
    ir: &'a UnitIr,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator with the default configuration.
    #[must_use]
    pub fn new(ir: &'a UnitIr) -> Self {
        Self {
            ir,
            config: GeneratorConfig::default(),
        }
    }

    /// Replaces the generator configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Composes the unit into typed blocks.
    #[must_use]
    pub fn compose(&self) -> ComposedUnit {
        ComposedUnit {
            package: self.config.package_name().to_string(),
            imports: self.ir.imports.clone(),
            base_name: self.ir.base_name.clone(),
            visitor: VisitorGenerator::new(self.ir).generate(),
            variants: VariantGenerator::new(self.ir).generate(),
        }
    }

    /// Generates the complete output unit.
    #[must_use]
    pub fn generate(&self) -> OutputUnit {
        let composed = self.compose();
        let text = composed.render(&self.config.indent_unit());

        tracing::debug!(
            base = %self.ir.base_name,
            variants = composed.variants.len(),
            bytes = text.len(),
            "generated unit"
        );

        OutputUnit {
            base_name: self.ir.base_name.clone(),
            text,
        }
    }
}

/// Generates the output unit for a loaded schema with the default configuration.
#[must_use]
pub fn compose_unit(unit: &SchemaUnit) -> OutputUnit {
    let ir = UnitIr::from_unit(unit);
    Generator::new(&ir).generate()
}
