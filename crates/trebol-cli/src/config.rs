//! Report description schema and its translation into the conventions.
//!
//! The YAML file is the build-description layer for the trebol library:
//! each column entry becomes one `configure(name, attributes)` call, in
//! file order, and the `historical` block populates a
//! [`HistoricalConvention`]. All attribute validation lives in the
//! library; this module only carries syntax across.

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use trebol::{ColumnsConvention, FlushPolicy, HistoricalConvention, ReportType};

/// Root of a YAML report description.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportDescription {
    /// Column entries in display order
    #[serde(default)]
    pub columns: Vec<ColumnEntry>,
    /// Historical/trend report settings
    #[serde(default)]
    pub historical: Option<HistoricalSection>,
    /// Requested report output types
    #[serde(default)]
    pub reports: Vec<String>,
    /// Instrumentation flush policy
    #[serde(default)]
    pub flush_policy: Option<String>,
}

/// One column entry: a name plus whatever attributes the author wrote.
///
/// Attribute keys are not constrained here; unknown keys flow through to
/// the library so the rejection names the actual offender.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnEntry {
    /// Symbolic column name
    pub name: String,
    /// Attribute map, forwarded verbatim
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Scalar>,
}

/// YAML scalar that may arrive as a number or a string.
///
/// The library validates attribute values as strings, so `min: 0` and
/// `min: "0"` must behave identically.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Unquoted integer scalar
    Int(i64),
    /// Quoted or non-numeric scalar
    Str(String),
}

impl Scalar {
    /// Render as the string the library validates
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Str(s) => s,
        }
    }
}

/// The `historical:` block of a report description.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoricalSection {
    /// Whether a historical report is generated
    #[serde(default)]
    pub enabled: bool,
    /// Glob for history point files
    #[serde(default)]
    pub history_includes: Option<String>,
    /// Restrict the report to a package prefix
    #[serde(default)]
    pub package_filter: Option<String>,
    /// Start of the date range
    #[serde(default)]
    pub from: Option<String>,
    /// End of the date range
    #[serde(default)]
    pub to: Option<String>,
    /// The `added` table settings
    #[serde(default)]
    pub added: Option<AddedSection>,
    /// The `movers` table settings, in order
    #[serde(default)]
    pub movers: Vec<MoverSection>,
}

/// The `added:` sub-block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddedSection {
    /// Number of classes to show
    #[serde(default)]
    pub range: Option<i32>,
    /// Time interval the comparison spans
    #[serde(default)]
    pub interval: Option<String>,
}

/// One `movers:` list entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoverSection {
    /// Minimum percentage-point change to qualify
    #[serde(default)]
    pub threshold: Option<i32>,
    /// Number of classes to show in each direction
    #[serde(default)]
    pub range: Option<i32>,
    /// Time interval the comparison spans
    #[serde(default)]
    pub interval: Option<String>,
}

/// Validated task configuration, ready for the external report runner.
#[derive(Debug, Serialize)]
pub struct TaskConfig {
    /// Validated columns in description order
    pub columns: ColumnsConvention,
    /// Historical snapshot
    pub historical: HistoricalConvention,
    /// Requested report types in description order
    pub reports: Vec<ReportType>,
    /// Instrumentation flush policy, if set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flush_policy: Option<FlushPolicy>,
}

impl ReportDescription {
    /// Load a report description from a YAML file
    pub fn load(path: &Path) -> CliResult<Self> {
        tracing::debug!(path = %path.display(), "loading report description");
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml_ng::from_str(&text)?)
    }

    /// Translate the description into validated task configuration.
    ///
    /// Column entries become `configure` calls in file order, so the
    /// first invalid entry aborts with the library's validation error.
    pub fn into_task_config(self) -> CliResult<TaskConfig> {
        let mut columns = ColumnsConvention::new();
        for entry in self.columns {
            let attributes = entry
                .attributes
                .into_iter()
                .map(|(key, value)| (key, value.into_string()))
                .collect();
            columns.configure(&entry.name, attributes)?;
        }

        let mut historical = HistoricalConvention::new();
        if let Some(section) = self.historical {
            historical.enabled = section.enabled;
            if let Some(includes) = section.history_includes {
                historical.history_includes = includes;
            }
            historical.package_filter = section.package_filter;
            historical.from = section.from;
            historical.to = section.to;
            if let Some(added) = section.added {
                historical.added(|a| {
                    if let Some(range) = added.range {
                        a.range = range;
                    }
                    a.interval = added.interval.clone();
                });
            }
            for mover in section.movers {
                historical.mover(|m| {
                    if let Some(threshold) = mover.threshold {
                        m.threshold = threshold;
                    }
                    if let Some(range) = mover.range {
                        m.range = range;
                    }
                    m.interval = mover.interval.clone();
                });
            }
        }

        let reports = self
            .reports
            .iter()
            .map(|name| ReportType::from_str(name).map_err(CliError::config))
            .collect::<CliResult<Vec<_>>>()?;

        let flush_policy = self
            .flush_policy
            .as_deref()
            .map(|name| FlushPolicy::from_str(name).map_err(CliError::config))
            .transpose()?;

        Ok(TaskConfig {
            columns,
            historical,
            reports,
            flush_policy,
        })
    }
}
