//! awslist code generator.
//!
//! Reads botocore-style API models and a resource catalog and generates one
//! list function per resource type.
//!
//! # Usage
//!
//! ```text
//! awslist-codegen generate --models models --catalog catalog/aws.toml --output generated
//! awslist-codegen operations --models models --prefix List
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AWSLIST_MODELS_DIR` | `models` | API model directory |
//! | `AWSLIST_CATALOG` | `catalog/aws.toml` | Resource catalog |
//! | `AWSLIST_OUTPUT_DIR` | `generated` | Output directory |
//! | `AWSLIST_TARGET` | `rust` | Generated language (`rust` or `go`) |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |
//!
//! Command-line flags override environment variables.

use std::path::PathBuf;

use anyhow::{Context, Result};
use awslist_core::{Catalog, CodegenConfig, Generator, Target};
use awslist_model::ApiModel;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate list functions for AWS resource types.
#[derive(Parser, Debug)]
#[command(name = "awslist-codegen", version, about, long_about = None)]
struct Args {
    /// Log level filter (overrides `LOG_LEVEL`)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// API model directory
    #[arg(long, global = true)]
    models: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve every catalogued resource type and write list functions
    Generate {
        /// Resource catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Generated language: rust or go
        #[arg(long)]
        target: Option<Target>,

        /// Resolve and report without writing files
        #[arg(long)]
        dry_run: bool,
    },
    /// Print operation names starting with a prefix, skipping tag operations
    Operations {
        /// Operation name prefixes
        #[arg(long = "prefix", default_values = ["Describe", "Get", "List"])]
        prefixes: Vec<String>,
    },
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = CodegenConfig::from_env().context("failed to load configuration")?;
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    if let Some(models) = args.models {
        config.models_dir = models;
    }

    init_tracing(&config.log_level)?;

    match args.command {
        Command::Generate {
            catalog,
            output,
            target,
            dry_run,
        } => {
            if let Some(catalog) = catalog {
                config.catalog = catalog;
            }
            if let Some(output) = output {
                config.output_dir = output;
            }
            if let Some(target) = target {
                config.target = target;
            }
            generate(&config, dry_run)
        }
        Command::Operations { prefixes } => operations(&config, &prefixes),
    }
}

fn load_model(config: &CodegenConfig) -> Result<ApiModel> {
    ApiModel::load_dir(&config.models_dir).with_context(|| {
        format!(
            "failed to load API model from {}",
            config.models_dir.display()
        )
    })
}

fn generate(config: &CodegenConfig, dry_run: bool) -> Result<()> {
    info!(
        models = %config.models_dir.display(),
        catalog = %config.catalog.display(),
        output = %config.output_dir.display(),
        target = %config.target,
        "generating list functions"
    );

    let model = load_model(config)?;
    let catalog = Catalog::load(&config.catalog)
        .with_context(|| format!("failed to load catalog {}", config.catalog.display()))?;

    let emitter = config.target.emitter();
    let generation = Generator::new(&model, &catalog, emitter.as_ref())
        .run()
        .context("code generation failed")?;

    if dry_run {
        info!(files = generation.files.len(), "dry run, nothing written");
    } else {
        generation
            .write_to(&config.output_dir)
            .with_context(|| format!("failed to write {}", config.output_dir.display()))?;
    }

    for diagnostic in &generation.report.diagnostics {
        eprintln!("note: {diagnostic}");
    }
    eprintln!("{}", generation.report);

    Ok(())
}

fn operations(config: &CodegenConfig, prefixes: &[String]) -> Result<()> {
    let model = load_model(config)?;
    let prefixes: Vec<&str> = prefixes.iter().map(String::as_str).collect();
    for name in model.operations_with_prefixes(&prefixes) {
        println!("{name}");
    }
    Ok(())
}
