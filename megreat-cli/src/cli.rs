//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::CONFIG_ENV_VAR;

/// megreat - SQL migration tool
#[derive(Parser, Debug)]
#[command(name = "megreat")]
#[command(version)]
#[command(about = "megreat - SQL migration tool", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the migration configuration file [default: megreat.json]
    #[arg(short, long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the migration configuration file
    Validate,

    /// Print the loaded migration configuration
    Show(ShowArgs),

    /// Display version information
    Version,
}

// =============================================================================
// Show Command
// =============================================================================

/// Arguments for the `show` command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Print the connection string without masking secrets
    #[arg(long)]
    pub reveal: bool,
}

/// Output formats for `show`
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
