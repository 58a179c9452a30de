//! Command-line argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Validate coverage report descriptions and emit task configuration
#[derive(Debug, Parser)]
#[command(name = "trebol", version, about)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the registered report columns and their allowed formats
    Columns(ColumnsArgs),
    /// Validate a report description file
    Check(CheckArgs),
    /// Validate a report description and print task configuration as JSON
    Emit(EmitArgs),
}

/// Arguments for `trebol columns`
#[derive(Debug, clap::Args)]
pub struct ColumnsArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ColumnsFormat,
}

/// Output format for the columns listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColumnsFormat {
    /// Human-readable table
    #[default]
    Text,
    /// JSON array
    Json,
}

/// Arguments for `trebol check`
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Report description file (YAML)
    pub file: PathBuf,
}

/// Arguments for `trebol emit`
#[derive(Debug, clap::Args)]
pub struct EmitArgs {
    /// Report description file (YAML)
    pub file: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
