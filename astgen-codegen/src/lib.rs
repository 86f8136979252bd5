//! # astgen Codegen
//!
//! Visitor-pattern AST class generation from astgen schemas.
//!
//! This crate provides:
//! - Field, variant and visitor composition into typed blocks
//! - Java source serialization of composed units
//! - Generator configuration (package, indentation)
//! - File-level entry points for batch drivers and build scripts

pub mod config;
pub mod error;
pub mod generator;
pub mod java;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::{ComposedUnit, Generator, OutputUnit, compose_unit};

use astgen_schema::UnitIr;
use std::path::{Path, PathBuf};

/// Generates Java source from a schema document string.
///
/// # Arguments
/// * `json` - Schema document content
/// * `base_name` - Name of the hierarchy's base type
///
/// # Returns
/// The generated output unit.
///
/// # Errors
/// Returns `CodegenError` if loading the schema fails.
pub fn generate_from_json(json: &str, base_name: &str) -> Result<OutputUnit, CodegenError> {
    generate_from_json_with(json, base_name, &GeneratorConfig::default())
}

/// Generates Java source from a schema document string with a custom configuration.
///
/// # Errors
/// Returns `CodegenError` if the configuration is invalid or loading fails.
pub fn generate_from_json_with(
    json: &str,
    base_name: &str,
    config: &GeneratorConfig,
) -> Result<OutputUnit, CodegenError> {
    config.validate()?;
    let unit = astgen_schema::parse_schema(json, base_name)?;
    let ir = UnitIr::from_unit(&unit);
    Ok(Generator::new(&ir).with_config(config.clone()).generate())
}

/// Generates Java source from a schema file, naming the base type after the file stem.
///
/// # Arguments
/// * `path` - Path to the schema file
///
/// # Returns
/// The generated output unit.
///
/// # Errors
/// Returns `CodegenError` if reading, loading, or generation fails.
pub fn generate_from_file(path: &Path) -> Result<OutputUnit, CodegenError> {
    generate_from_file_with(path, &GeneratorConfig::default())
}

/// Generates Java source from a schema file with a custom configuration.
///
/// # Errors
/// Returns `CodegenError` if the configuration is invalid, or reading or
/// loading the schema fails.
pub fn generate_from_file_with(
    path: &Path,
    config: &GeneratorConfig,
) -> Result<OutputUnit, CodegenError> {
    config.validate()?;
    let unit = astgen_schema::parse_schema_file(path)?;
    let ir = UnitIr::from_unit(&unit);
    Ok(Generator::new(&ir).with_config(config.clone()).generate())
}

/// Generates a schema file and writes `<Base>.java` into `out_dir`.
///
/// # Returns
/// Path of the written file.
///
/// # Errors
/// Returns `CodegenError` if generation fails or the output cannot be written.
pub fn generate_to_dir(
    path: &Path,
    out_dir: &Path,
    config: &GeneratorConfig,
) -> Result<PathBuf, CodegenError> {
    let output = generate_from_file_with(path, config)?;
    write_unit(&output, out_dir)
}

/// Writes an output unit as `<Base>.java` into `out_dir`, creating the directory.
///
/// # Returns
/// Path of the written file.
///
/// # Errors
/// Returns `CodegenError::Io` if the directory or file cannot be written.
pub fn write_unit(output: &OutputUnit, out_dir: &Path) -> Result<PathBuf, CodegenError> {
    std::fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join(output.file_name());
    std::fs::write(&out_path, &output.text)?;
    tracing::debug!(base = %output.base_name, out = %out_path.display(), "wrote unit");
    Ok(out_path)
}
