//! Report Configuration Surface
//!
//! Everything the build description can say about a coverage report lives
//! here:
//!
//! - Column specifications validated against a fixed registry
//! - The columns convention (name-based configure dispatch)
//! - Historical/trend report settings with `added`/`mover` sub-blocks
//! - The closed set of report output types and flush policies
//!
//! All validation is synchronous and in-memory; the registry is a static
//! table built before first use and never mutated.

mod column;
mod columns;
mod historical;
mod types;

pub use column::{is_valid_column, lookup_column, registered_columns, FormatPolicy, ReportColumn};
pub use columns::ColumnsConvention;
pub use historical::{HistoricalAdded, HistoricalConvention, HistoricalMover};
pub use types::{FlushPolicy, ReportType};

#[cfg(test)]
mod tests;
