//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use astgen::prelude::*;
//! ```

// Schema types
pub use astgen_schema::{
    FieldDef, FormatError, LoadError, SchemaUnit, SourceError, UnitIr, VariantDef,
    dispatch_method_name, parse_schema, parse_schema_file,
};

// Generation
pub use astgen_codegen::{
    CodegenError, ComposedUnit, Generator, GeneratorConfig, OutputUnit, compose_unit,
    generate_from_file, generate_from_json,
};
