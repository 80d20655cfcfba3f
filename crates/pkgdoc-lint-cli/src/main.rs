//! pkgdoc-lint CLI tool.
//!
//! Usage:
//! ```bash
//! pkgdoc-lint                      # check packages under the current directory
//! pkgdoc-lint check [OPTIONS] [PATH]
//! pkgdoc-lint list-rules
//! pkgdoc-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Package documentation comment linter for Go source trees
#[derive(Parser)]
#[command(name = "pkgdoc-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check package doc comments (default)
    Check {
        /// Root of the source tree (default: `analyzer.root`, else current directory)
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated names or codes)
        #[arg(long)]
        rules: Option<String>,
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

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `<package>: <violations>` line per failing package.
    #[default]
    Text,
    /// JSON output.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let command = cli.command.unwrap_or(Commands::Check {
        path: None,
        format: OutputFormat::default(),
        rules: None,
    });

    match command {
        Commands::Check {
            path,
            format,
            rules,
        } => {
            let lookup_dir = path.as_deref().unwrap_or_else(|| Path::new("."));
            let source = config_resolver::resolve(lookup_dir, cli.config.as_deref());
            commands::check::run(path.as_deref(), format, rules, &source)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
