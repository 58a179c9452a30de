//! Historical/trend report configuration.
//!
//! A historical report compares coverage across past runs. The convention
//! holds the scalar settings (date range, include pattern, package filter)
//! plus two kinds of sub-block: at most one `added` block describing the
//! "most newly covered" table and any number of `mover` blocks describing
//! "biggest gainers/losers" tables. Sub-blocks are populated through
//! closure configurators; the convention only manages their lifecycle and
//! ordering, it does not validate their contents.

use crate::result::TrebolResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for the "added" table of a historical report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalAdded {
    /// Number of classes to show
    #[serde(default = "default_range")]
    pub range: i32,
    /// Time interval the comparison spans (e.g. `"4 weeks"`)
    #[serde(default)]
    pub interval: Option<String>,
}

impl Default for HistoricalAdded {
    fn default() -> Self {
        Self {
            range: default_range(),
            interval: None,
        }
    }
}

impl HistoricalAdded {
    /// Serialize to a JSON object
    pub fn to_json(&self) -> TrebolResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from a JSON object
    pub fn from_json(json: &str) -> TrebolResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Configuration for a "movers" table of a historical report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalMover {
    /// Minimum percentage-point change for a class to qualify
    #[serde(default = "default_threshold")]
    pub threshold: i32,
    /// Number of classes to show in each direction
    #[serde(default = "default_range")]
    pub range: i32,
    /// Time interval the comparison spans (e.g. `"4 weeks"`)
    #[serde(default)]
    pub interval: Option<String>,
}

impl Default for HistoricalMover {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            range: default_range(),
            interval: None,
        }
    }
}

impl HistoricalMover {
    /// Serialize to a JSON object
    pub fn to_json(&self) -> TrebolResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from a JSON object
    pub fn from_json(json: &str) -> TrebolResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

const fn default_range() -> i32 {
    5
}

const fn default_threshold() -> i32 {
    1
}

/// Historical/trend report convention.
///
/// Plain mutable configuration record, owned and mutated by a single
/// configuration pass. No cross-field validation is performed here; in
/// particular `from`/`to` ordering is the report runner's concern.
#[derive(Debug, Clone, Serialize)]
pub struct HistoricalConvention {
    /// Whether a historical report is generated at all
    pub enabled: bool,
    /// Glob for history point files
    pub history_includes: String,
    /// Restrict the report to a package prefix
    pub package_filter: Option<String>,
    /// Start of the date range
    pub from: Option<String>,
    /// End of the date range
    pub to: Option<String>,
    added: Option<HistoricalAdded>,
    movers: Vec<HistoricalMover>,
}

impl Default for HistoricalConvention {
    fn default() -> Self {
        Self {
            enabled: false,
            history_includes: "clover-*.xml.gz".to_string(),
            package_filter: None,
            from: None,
            to: None,
            added: None,
            movers: Vec::new(),
        }
    }
}

impl HistoricalConvention {
    /// Create a convention with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the `added` block.
    ///
    /// A fresh [`HistoricalAdded`] with defaults is handed to the
    /// configurator, then stored. A later call replaces any earlier block;
    /// this is an overwrite, not an error.
    pub fn added<F>(&mut self, configure: F)
    where
        F: FnOnce(&mut HistoricalAdded),
    {
        let mut added = HistoricalAdded::default();
        configure(&mut added);
        if self.added.is_some() {
            debug!("replacing previously configured added block");
        }
        self.added = Some(added);
    }

    /// Configure and append a `mover` block.
    ///
    /// Movers accumulate in call order without limit or dedup.
    pub fn mover<F>(&mut self, configure: F)
    where
        F: FnOnce(&mut HistoricalMover),
    {
        let mut mover = HistoricalMover::default();
        configure(&mut mover);
        self.movers.push(mover);
    }

    /// The `added` block, if one was configured
    #[must_use]
    pub fn added_block(&self) -> Option<&HistoricalAdded> {
        self.added.as_ref()
    }

    /// The `mover` blocks in configuration order
    #[must_use]
    pub fn movers(&self) -> &[HistoricalMover] {
        &self.movers
    }

    /// The `added` block as JSON, if one was configured
    pub fn json_added(&self) -> TrebolResult<Option<String>> {
        self.added.as_ref().map(HistoricalAdded::to_json).transpose()
    }

    /// Each `mover` block as a standalone JSON document, in order
    pub fn json_movers(&self) -> TrebolResult<Vec<String>> {
        self.movers.iter().map(HistoricalMover::to_json).collect()
    }
}
