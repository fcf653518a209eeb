//! enforce CLI tool.
//!
//! Usage:
//! ```bash
//! enforce check --rule "a number, less than 10" --name count --value 3
//! enforce list-rules
//! enforce init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Check values against English-like rule strings
#[derive(Parser)]
#[command(name = "enforce")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one value against a rule string
    Check {
        /// Rule string, e.g. "an optional string, with 4 to 12 characters"
        #[arg(short, long)]
        rule: String,

        /// Parameter name used in messages
        #[arg(short, long, default_value = "value")]
        name: String,

        /// Value as JSON; omit to check an absent value
        #[arg(long)]
        value: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let source = config_resolver::resolve(Path::new("."), cli.config.as_deref());

    match cli.command {
        Commands::Check {
            rule,
            name,
            value,
            format,
        } => commands::check::run(&rule, &name, value.as_deref(), format, &source),
        Commands::ListRules => commands::list_rules::run(&source),
        Commands::Init { force } => commands::init::run(force),
    }
}
