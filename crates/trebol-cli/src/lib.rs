//! Trebol CLI Library
//!
//! Command-line interface for the trebol report configuration model: load
//! a YAML report description, validate it through the library's
//! conventions, and emit task configuration for the external report
//! runner.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
mod output;

pub use commands::{CheckArgs, Cli, ColumnsArgs, ColumnsFormat, Commands, EmitArgs};
pub use config::{
    AddedSection, ColumnEntry, HistoricalSection, MoverSection, ReportDescription, Scalar,
    TaskConfig,
};
pub use error::{CliError, CliResult};
pub use output::{stdout_is_terminal, Printer};
