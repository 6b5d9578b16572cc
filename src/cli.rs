//! Command-line interface for strictpy.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::report;
use crate::runner::{collect_files, Runner};
use crate::violations::{Category, ViolationCatalog};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Strict Python style checker.
///
/// Flags functions and modules that are too hard to read (cognitive
/// complexity), `else: if` blocks that should be `elif`, multiline
/// annotations and decorators that use the relaxed grammar.
#[derive(Parser)]
#[command(name = "strictpy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint Python files
    #[command(visible_alias = "check")]
    Lint(LintArgs),
    /// List violation codes
    Codes(CodesArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}

/// Arguments for the lint command.
#[derive(Parser)]
pub struct LintArgs {
    /// Path to lint (file or directory)
    pub path: PathBuf,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,

    /// Show suppressed violations in output
    #[arg(long)]
    pub show_suppressed: bool,

    /// Override the per-function cognitive complexity limit
    #[arg(long)]
    pub max_cognitive_score: Option<u32>,

    /// Override the per-module average cognitive complexity limit
    #[arg(long)]
    pub max_cognitive_average: Option<u32>,
}

/// Arguments for the codes command.
#[derive(Parser)]
pub struct CodesArgs {
    /// Only list codes of this category (e.g. "complexity")
    #[arg(long)]
    pub category: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,
}

/// Load configuration for a lint run and apply command-line overrides.
pub fn resolve_config(args: &LintArgs, catalog: &ViolationCatalog) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    let mut config = Config::load(args.config.as_deref(), &cwd)?;

    if let Some(score) = args.max_cognitive_score {
        config.max_cognitive_score = score;
    }
    if let Some(average) = args.max_cognitive_average {
        config.max_cognitive_average = average;
    }

    config.validate(catalog)?;
    Ok(config)
}

/// Run the lint command.
pub fn run_lint(args: &LintArgs) -> anyhow::Result<i32> {
    let catalog = ViolationCatalog::standard()?;

    let config = match resolve_config(args, &catalog) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: invalid config: {:#}", e);
            return Ok(EXIT_ERROR);
        }
    };

    if !args.path.exists() {
        eprintln!("Error: cannot access path {:?}", args.path);
        return Ok(EXIT_ERROR);
    }

    let files = collect_files(&args.path, &config)?;
    if files.is_empty() {
        eprintln!("Warning: no files to lint");
        return Ok(EXIT_SUCCESS);
    }
    log::debug!("linting {} files", files.len());

    let runner = Runner::new(&catalog, &config);
    let result = runner.lint_files(&files);

    let path_str = args.path.to_string_lossy().to_string();
    match args.format {
        OutputFormat::Json => report::write_json(&path_str, &result, args.show_suppressed)?,
        OutputFormat::Pretty => report::write_pretty(&path_str, &result, args.show_suppressed),
    }

    if result.passed() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}

/// Run the codes command.
pub fn run_codes(args: &CodesArgs) -> anyhow::Result<i32> {
    let catalog = ViolationCatalog::standard()?;

    let category = match args.category.as_deref() {
        Some(name) => match Category::parse(name) {
            Some(c) => Some(c),
            None => {
                let known: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
                eprintln!(
                    "Error: unknown category {:?} (expected one of: {})",
                    name,
                    known.join(", ")
                );
                return Ok(EXIT_ERROR);
            }
        },
        None => None,
    };

    match args.format {
        OutputFormat::Json => report::write_codes_json(&catalog, category)?,
        OutputFormat::Pretty => report::write_codes_pretty(&catalog, category),
    }
    Ok(EXIT_SUCCESS)
}
