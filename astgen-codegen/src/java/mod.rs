//! Java code generation modules.

pub mod fields;
pub mod variants;
pub mod visitor;
pub mod writer;

pub use fields::{RenderedFields, render_fields};
pub use variants::{VariantBlock, VariantGenerator, compose_variant};
pub use visitor::{DispatchSignature, VisitorBlock, VisitorGenerator, compose_visitor};
pub use writer::SourceWriter;
