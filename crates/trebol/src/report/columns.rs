//! Columns convention: ordered, validated column configuration.

use super::column::{is_valid_column, ReportColumn};
use crate::result::{TrebolError, TrebolResult};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Ordered collection of validated report columns.
///
/// The convention exposes a single generic entry point,
/// [`configure`](Self::configure): the build-description layer translates
/// whatever syntax it offers for "symbolic call with an attribute map"
/// into `configure(name, attributes)` calls, and the convention gates
/// each one through the column registry. There is deliberately no
/// per-column method surface; one dispatch point covers every registered
/// name.
///
/// Columns accumulate in call order, duplicates included; nothing is ever
/// removed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ColumnsConvention {
    columns: Vec<ReportColumn>,
}

impl ColumnsConvention {
    /// Create an empty convention
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a column by its symbolic name.
    ///
    /// Unregistered names fail with
    /// [`UnsupportedColumn`](TrebolError::UnsupportedColumn) and leave the
    /// stored sequence untouched. Registered names go through full
    /// [`ReportColumn`] validation; any validation failure propagates and
    /// likewise leaves the sequence untouched.
    pub fn configure(
        &mut self,
        name: &str,
        attributes: BTreeMap<String, String>,
    ) -> TrebolResult<()> {
        if !is_valid_column(name) {
            return Err(TrebolError::unsupported_column(name));
        }
        let column = ReportColumn::new(name, attributes)?;
        debug!(column = name, index = self.columns.len(), "column configured");
        self.columns.push(column);
        Ok(())
    }

    /// The validated columns in configuration order
    #[must_use]
    pub fn columns(&self) -> &[ReportColumn] {
        &self.columns
    }

    /// True if no columns have been configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Each configured column as a standalone JSON document, in order
    pub fn json_columns(&self) -> TrebolResult<Vec<String>> {
        self.columns.iter().map(ReportColumn::to_json).collect()
    }
}
