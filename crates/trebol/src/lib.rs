//! Trebol: Coverage Report Configuration Model
//!
//! Trebol (Spanish: "clover") models the configuration surface of an
//! external coverage instrumentation and reporting tool: which metric
//! columns a report displays, how historical/trend reports are assembled,
//! and which output formats are requested. Validation happens at
//! configuration time, so a misconfigured build description fails while
//! the author is still looking at it, not deep inside report generation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    TREBOL Architecture                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐           │
//! │   │ Build      │    │ Conventions│    │ Report     │           │
//! │   │ Description│───►│ (validated │───►│ Runner     │           │
//! │   │ (YAML/DSL) │    │  columns)  │    │ (external) │           │
//! │   └────────────┘    └────────────┘    └────────────┘           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The crate does not generate report content, instrument sources, or
//! compute metrics; it produces validated configuration for the tool that
//! does.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod report;
mod result;

pub use report::{
    is_valid_column, lookup_column, registered_columns, ColumnsConvention, FlushPolicy,
    FormatPolicy, HistoricalAdded, HistoricalConvention, HistoricalMover, ReportColumn,
    ReportType,
};
pub use result::{TrebolError, TrebolResult};
