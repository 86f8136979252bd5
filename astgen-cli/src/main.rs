//! `astgen` command-line driver.
//!
//! Discovers schema files, generates one Java unit per schema in parallel and
//! writes the results to an output directory.

use anyhow::{Context, bail};
use astgen_codegen::config::{DEFAULT_INDENT_WIDTH, DEFAULT_PACKAGE};
use astgen_codegen::{CodegenError, GeneratorConfig, OutputUnit, generate_from_file_with, write_unit};
use astgen_schema::{base_name_from_path, parse_schema_file};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "astgen",
    version,
    about = "Generate visitor-based AST class hierarchies from JSON schemas."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate one source file per schema.
    Generate(GenerateArgs),
    /// Load a schema and print it as normalized JSON.
    Inspect(InspectArgs),
}

#[derive(Debug, Parser)]
struct GenerateArgs {
    /// Schema files, directories (all `*.json` inside) or quoted glob patterns.
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Directory the generated files are written to.
    #[arg(long, short)]
    out_dir: PathBuf,

    /// Package declared by every generated file.
    #[arg(long, default_value = DEFAULT_PACKAGE)]
    package: String,

    /// Spaces per indent level.
    #[arg(long, default_value_t = DEFAULT_INDENT_WIDTH)]
    indent: usize,

    /// Write the units that succeed even if others fail.
    #[arg(long, default_value_t = false)]
    keep_going: bool,

    /// Worker threads (default: one per CPU).
    #[arg(long, short)]
    jobs: Option<usize>,
}

#[derive(Debug, Parser)]
struct InspectArgs {
    /// Schema file to load.
    schema: PathBuf,
}

/// Outcome of a generate run.
#[derive(Debug, Default)]
struct GenerateReport {
    written: Vec<PathBuf>,
    failed: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = real_main(Cli::parse()) {
        error!("{:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main(cli: Cli) -> anyhow::Result<()> {
    match cli.cmd {
        Command::Generate(args) => {
            let report = run_generate(&args)?;
            info!(written = report.written.len(), "generation finished");
            if !report.failed.is_empty() {
                bail!("{} schema unit(s) failed", report.failed.len());
            }
        }
        Command::Inspect(args) => {
            println!("{}", run_inspect(&args)?);
        }
    }
    Ok(())
}

fn run_generate(args: &GenerateArgs) -> anyhow::Result<GenerateReport> {
    let config = GeneratorConfig::new()
        .package(args.package.as_str())
        .indent_width(args.indent);
    config.validate()?;

    let sources = discover_sources(&args.inputs)?;
    if sources.is_empty() {
        bail!("no schema sources found");
    }
    check_collisions(&sources, config.file_extension())?;
    info!(
        count = sources.len(),
        out_dir = %args.out_dir.display(),
        "generating schema units"
    );

    let results = match args.jobs {
        Some(jobs) => rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .context("failed to build worker pool")?
            .install(|| generate_all(&sources, &config)),
        None => generate_all(&sources, &config),
    };

    let mut report = GenerateReport::default();
    let mut outputs = Vec::with_capacity(sources.len());
    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok(output) => outputs.push(output),
            Err(e) => {
                error!(source = %source.display(), "{e}");
                report.failed.push(source.clone());
            }
        }
    }

    if !report.failed.is_empty() && !args.keep_going {
        bail!(
            "{} of {} schema units failed; nothing written",
            report.failed.len(),
            sources.len()
        );
    }

    for output in &outputs {
        let path = write_unit(output, &args.out_dir)
            .with_context(|| format!("failed to write {}", output.file_name()))?;
        debug!(out = %path.display(), "written");
        report.written.push(path);
    }
    for source in &report.failed {
        warn!(source = %source.display(), "skipped");
    }

    Ok(report)
}

/// Generates every source; results are in the same order as `sources`.
fn generate_all(
    sources: &[PathBuf],
    config: &GeneratorConfig,
) -> Vec<Result<OutputUnit, CodegenError>> {
    sources
        .par_iter()
        .map(|source| generate_from_file_with(source, config))
        .collect()
}

fn run_inspect(args: &InspectArgs) -> anyhow::Result<String> {
    let unit = parse_schema_file(&args.schema)
        .with_context(|| format!("failed to load {}", args.schema.display()))?;
    Ok(serde_json::to_string_pretty(&unit)?)
}

/// Expands inputs into schema file paths, keeping input order.
fn discover_sources(inputs: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut sources = Vec::new();

    for input in inputs {
        let path = Path::new(input);
        if path.is_dir() {
            let dir = path
                .to_str()
                .with_context(|| format!("non UTF-8 directory '{}'", path.display()))?;
            let pattern = format!("{}/*.json", glob::Pattern::escape(dir));
            let found = glob_files(&pattern)?;
            if found.is_empty() {
                warn!(dir = %path.display(), "no schema files in directory");
            }
            sources.extend(found);
        } else if path.is_file() {
            sources.push(path.to_path_buf());
        } else {
            let found = glob_files(input)?;
            if found.is_empty() {
                bail!("no schema sources match '{input}'");
            }
            sources.extend(found);
        }
    }

    Ok(sources)
}

fn glob_files(pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in glob::glob(pattern).with_context(|| format!("invalid glob pattern '{pattern}'"))? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Fails if two sources would be written to the same output file.
fn check_collisions(sources: &[PathBuf], extension: &str) -> anyhow::Result<()> {
    let mut seen: HashMap<String, &PathBuf> = HashMap::new();
    for source in sources {
        let base = base_name_from_path(source)?;
        if let Some(previous) = seen.insert(base.clone(), source) {
            bail!(
                "'{}' and '{}' both generate {base}.{extension}",
                previous.display(),
                source.display()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;

    const EXPR: &str = r#"{ "variants": [
        { "className": "Binary", "Fields": [["Expr","left"],["Token","operator"],["Expr","right"]] },
        { "className": "Literal", "Fields": [["Object","value"]] }
    ] }"#;
    const STMT: &str = r#"[ { "className": "Print", "Fields": [["Expr","expression"]] } ]"#;

    fn schema_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Expr.json"), EXPR).unwrap();
        fs::write(dir.path().join("Stmt.json"), STMT).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a schema").unwrap();
        dir
    }

    fn args(inputs: Vec<String>, out_dir: PathBuf) -> GenerateArgs {
        GenerateArgs {
            inputs,
            out_dir,
            package: DEFAULT_PACKAGE.to_string(),
            indent: DEFAULT_INDENT_WIDTH,
            keep_going: false,
            jobs: Some(2),
        }
    }

    fn path_str(path: &Path) -> String {
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse_generate() {
        let cli = Cli::try_parse_from([
            "astgen", "generate", "schemas", "-o", "out", "--package", "com.lox", "--keep-going",
        ])
        .unwrap();

        match cli.cmd {
            Command::Generate(args) => {
                assert_eq!(args.inputs, ["schemas"]);
                assert_eq!(args.out_dir, PathBuf::from("out"));
                assert_eq!(args.package, "com.lox");
                assert_eq!(args.indent, 4);
                assert!(args.keep_going);
                assert!(args.jobs.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_discover_directory_sorted() {
        let dir = schema_dir();
        let sources = discover_sources(&[path_str(dir.path())]).unwrap();

        let names: Vec<_> = sources
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["Expr.json", "Stmt.json"]);
    }

    #[test]
    fn test_discover_glob_and_file() {
        let dir = schema_dir();
        let pattern = format!("{}/S*.json", path_str(dir.path()));
        let file = path_str(&dir.path().join("Expr.json"));

        let sources = discover_sources(&[pattern, file]).unwrap();
        assert_eq!(sources.len(), 2);
        assert!(sources[0].ends_with("Stmt.json"));
        assert!(sources[1].ends_with("Expr.json"));
    }

    #[test]
    fn test_discover_unmatched_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.json", path_str(dir.path()));
        assert!(discover_sources(&[pattern]).is_err());
    }

    #[test]
    fn test_check_collisions() {
        let sources = [PathBuf::from("a/Expr.json"), PathBuf::from("b/Expr.json")];
        let err = check_collisions(&sources, "java").unwrap_err();
        assert!(err.to_string().contains("Expr.java"));

        let sources = [PathBuf::from("a/Expr.json"), PathBuf::from("a/Stmt.json")];
        assert!(check_collisions(&sources, "java").is_ok());
    }

    #[test]
    fn test_generate_directory() {
        let dir = schema_dir();
        let out = dir.path().join("out");

        let report = run_generate(&args(vec![path_str(dir.path())], out.clone())).unwrap();

        assert!(report.failed.is_empty());
        assert_eq!(report.written, [out.join("Expr.java"), out.join("Stmt.java")]);
        let expr = fs::read_to_string(out.join("Expr.java")).unwrap();
        assert!(expr.contains("R visitLiteralExpr(Literal expr);"));
    }

    #[test]
    fn test_failure_writes_nothing_without_keep_going() {
        let dir = schema_dir();
        fs::write(dir.path().join("Broken.json"), r#"{ "imports": [] }"#).unwrap();
        let out = dir.path().join("out");

        let err = run_generate(&args(vec![path_str(dir.path())], out.clone())).unwrap_err();

        assert!(err.to_string().contains("1 of 3"));
        assert!(!out.exists());
    }

    #[test]
    fn test_keep_going_writes_successful_units() {
        let dir = schema_dir();
        fs::write(dir.path().join("Broken.json"), "{ not json").unwrap();
        let out = dir.path().join("out");
        let mut args = args(vec![path_str(dir.path())], out.clone());
        args.keep_going = true;

        let report = run_generate(&args).unwrap();

        assert_eq!(report.failed.len(), 1);
        assert!(report.failed[0].ends_with("Broken.json"));
        assert_eq!(report.written.len(), 2);
        assert!(out.join("Stmt.java").exists());
        assert!(!out.join("Broken.java").exists());
    }

    #[test]
    fn test_generate_rejects_bad_package() {
        let dir = schema_dir();
        let mut args = args(vec![path_str(dir.path())], dir.path().join("out"));
        args.package = "not a package".to_string();

        assert!(run_generate(&args).is_err());
    }

    #[test]
    fn test_inspect() {
        let dir = schema_dir();
        let json = run_inspect(&InspectArgs {
            schema: dir.path().join("Stmt.json"),
        })
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["baseName"], "Stmt");
        assert_eq!(value["variants"][0]["name"], "Print");
        assert_eq!(value["imports"], serde_json::json!([]));
    }
}
