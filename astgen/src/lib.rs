//! # astgen
//!
//! Schema-driven generator for visitor-based AST class hierarchies.
//!
//! Each schema describes one base type and its variants. astgen emits one
//! source unit per schema containing the abstract base class, a `Visitor<R>`
//! interface with one method per variant, and a subclass per variant holding
//! its fields, a constructor and an `accept` method.
//!
//! ## Features
//!
//! - **Pure composition** - loading and generation do no I/O beyond reading the schema
//! - **Deterministic output** - identical schemas always produce identical text
//! - **Single naming contract** - `accept` and the visitor share one dispatch-name function
//! - **Legacy schemas** - bare variant arrays are accepted alongside `{ "variants": ... }`
//!
//! ## Quick Start
//!
//! ```
//! use astgen::prelude::*;
//!
//! let json = r#"{ "variants": [
//!     { "className": "Binary",
//!       "Fields": [["Expr", "left"], ["Token", "operator"], ["Expr", "right"]] }
//! ] }"#;
//!
//! let unit = parse_schema(json, "Expr")?;
//! let ir = UnitIr::from_unit(&unit);
//! let output = Generator::new(&ir).generate();
//!
//! assert_eq!(output.file_name(), "Expr.java");
//! assert!(output.text.contains("R visitBinaryExpr(Binary expr);"));
//! # Ok::<(), astgen::schema::LoadError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema loading, validation and intermediate representation
//! - [`codegen`] - Field, variant, visitor and unit composition

pub mod prelude;

/// Schema loading and validation.
pub mod schema {
    pub use astgen_schema::*;
}

/// Code generation from schemas.
pub mod codegen {
    pub use astgen_codegen::*;
}
