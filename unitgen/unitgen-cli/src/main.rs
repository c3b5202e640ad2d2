//! unitgen CLI - heuristic JUnit 5 test generation for Java classes.
//!
//! # Usage
//!
//! ```bash
//! # Print a test suite for a class
//! unitgen generate src/main/java/com/acme/Calculator.java
//!
//! # Read from stdin, emit the full artifact as JSON
//! cat Calculator.java | unitgen generate - --format json
//!
//! # Write CalculatorTest.java and friends into a directory
//! unitgen generate src/*.java --out-dir src/test/java --force
//!
//! # Manage configuration
//! unitgen config init
//! unitgen config show
//! ```

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;
use unitgen_cli::{GenerateOptions, commands, output};
use unitgen_core::{OutputFormat, UnitgenConfig};

#[derive(Parser)]
#[command(name = "unitgen")]
#[command(about = "unitgen - Heuristic JUnit test generation for Java classes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormatArg {
    Text,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a JUnit test suite for each Java source
    Generate {
        /// Java source files, or `-` for stdin
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Write `<ClassName>Test.java` files into this directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Output format for stdout
        #[arg(short, long, value_enum)]
        format: Option<OutputFormatArg>,

        /// Overwrite existing test files in the output directory
        #[arg(long)]
        force: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a default configuration file
    Init {
        /// Target path (defaults to the resolved configuration path)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show,
}

fn main() {
    if let Err(e) = run() {
        output::error(format!("{:#}", e));
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // `config init` must work even when the current file is broken
    let config = match &cli.command {
        Commands::Config(ConfigCommands::Init { .. }) => UnitgenConfig::default(),
        _ => UnitgenConfig::load(cli.config.as_deref()).context("Failed to load configuration")?,
    };

    init_logging(cli.verbose, &config.general().log_level);

    match cli.command {
        Commands::Generate {
            inputs,
            out_dir,
            format,
            force,
        } => {
            let options =
                GenerateOptions::resolve(&inputs, out_dir, format.map(Into::into), force, &config);
            let summary = commands::generate_tests(&options)?;
            if !summary.is_success() {
                bail!(
                    "{} of {} inputs failed",
                    summary.failed,
                    options.inputs.len()
                );
            }
        }

        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init { path, force } => {
                commands::config_init(path.or(cli.config), force)?;
            }
            ConfigCommands::Show => {
                let source = match cli.config {
                    Some(path) => path,
                    None => UnitgenConfig::resolve_path()?,
                };
                commands::config_show(&config, &source);
            }
        },
    }

    Ok(())
}

fn init_logging(verbose: bool, level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = if verbose {
        EnvFilter::new("unitgen=debug,warn")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("unitgen={},warn", level)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
