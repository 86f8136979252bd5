//! # astgen Schema
//!
//! AST schema loader and type definitions.
//!
//! This crate provides:
//! - JSON schema loading (object and legacy array documents)
//! - Type definitions for schema units, variants and fields
//! - Schema validation
//! - Intermediate representation for code generation

pub mod error;
pub mod ir;
pub mod parser;
pub mod types;
pub mod validation;
pub mod variants;

pub use error::{FormatError, LoadError, SourceError};
pub use ir::{ResolvedVariant, UnitIr, dispatch_method_name, visitor_param_name};
pub use parser::{base_name_from_path, parse_schema, parse_schema_file, parse_schema_value};
pub use types::SchemaUnit;
pub use validation::validate_unit;
pub use variants::{FieldDef, VariantDef};
