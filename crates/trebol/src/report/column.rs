//! Report column specifications and the column registry.
//!
//! The registry is the single source of truth for which metric columns the
//! external report tool understands and which rendering formats each one
//! accepts. It is a static table: built at compile time, case-sensitive,
//! never extended at runtime. A [`ReportColumn`] can only be obtained
//! through its validating constructor, so every instance in circulation is
//! known-good.

use crate::result::{TrebolError, TrebolResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Format-rendering policy for a registered column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatPolicy {
    /// Column renders only as a raw value
    RawOnly,
    /// Column renders as `raw`, `bar`, `longbar`, or `%`
    MultiFormat,
}

impl FormatPolicy {
    /// Check whether a `format` attribute value satisfies this policy
    #[must_use]
    pub fn allows(self, format: &str) -> bool {
        match self {
            Self::RawOnly => format == "raw",
            Self::MultiFormat => matches!(format, "raw" | "bar" | "longbar" | "%"),
        }
    }

    /// The format strings this policy accepts
    #[must_use]
    pub const fn allowed_formats(self) -> &'static [&'static str] {
        match self {
            Self::RawOnly => &["raw"],
            Self::MultiFormat => &["raw", "bar", "longbar", "%"],
        }
    }
}

/// Registered column names with their format policies.
///
/// Sorted by byte value for binary search; lookups are case-sensitive
/// exact matches.
const COLUMN_REGISTRY: &[(&str, FormatPolicy)] = &[
    ("SUM", FormatPolicy::RawOnly),
    ("avgClassesPerFile", FormatPolicy::RawOnly),
    ("avgMethodComplexity", FormatPolicy::RawOnly),
    ("avgMethodsPerClass", FormatPolicy::RawOnly),
    ("avgStatementsPerMethod", FormatPolicy::RawOnly),
    ("complexity", FormatPolicy::RawOnly),
    ("complexityDensity", FormatPolicy::RawOnly),
    ("coveredBranches", FormatPolicy::MultiFormat),
    ("coveredElements", FormatPolicy::MultiFormat),
    ("coveredMethods", FormatPolicy::MultiFormat),
    ("coveredStatements", FormatPolicy::MultiFormat),
    ("files", FormatPolicy::RawOnly),
    ("filteredElements", FormatPolicy::MultiFormat),
    ("lineCount", FormatPolicy::RawOnly),
    ("methods", FormatPolicy::RawOnly),
    ("ncLineCount", FormatPolicy::RawOnly),
    ("percentageCoveredContribution", FormatPolicy::MultiFormat),
    ("percentageUncoveredContribution", FormatPolicy::MultiFormat),
    ("totalBranches", FormatPolicy::RawOnly),
    ("totalChildren", FormatPolicy::RawOnly),
    ("totalClasses", FormatPolicy::RawOnly),
    ("totalElements", FormatPolicy::RawOnly),
    ("totalFiles", FormatPolicy::RawOnly),
    ("totalMethods", FormatPolicy::RawOnly),
    ("totalPercentageCovered", FormatPolicy::MultiFormat),
    ("totalStatements", FormatPolicy::RawOnly),
    ("uncoveredBranches", FormatPolicy::MultiFormat),
    ("uncoveredElements", FormatPolicy::MultiFormat),
    ("uncoveredMethods", FormatPolicy::MultiFormat),
    ("uncoveredStatements", FormatPolicy::MultiFormat),
];

/// Check whether a column name is registered
#[must_use]
pub fn is_valid_column(column: &str) -> bool {
    lookup_column(column).is_some()
}

/// Look up the format policy for a column name
#[must_use]
pub fn lookup_column(column: &str) -> Option<FormatPolicy> {
    COLUMN_REGISTRY
        .binary_search_by_key(&column, |&(name, _)| name)
        .ok()
        .map(|idx| COLUMN_REGISTRY[idx].1)
}

/// Iterate over all registered column names with their policies
pub fn registered_columns() -> impl Iterator<Item = (&'static str, FormatPolicy)> {
    COLUMN_REGISTRY.iter().copied()
}

/// Unvalidated wire form of a column specification.
#[derive(Debug, Deserialize)]
struct RawColumn {
    column: String,
    #[serde(default)]
    attributes: BTreeMap<String, String>,
}

/// A single validated, immutable report column specification.
///
/// Construction either fully succeeds or fails with a [`TrebolError`];
/// no partially-populated instance is observable. Deserialization goes
/// through the same validation, so JSON input cannot smuggle in an
/// unvalidated column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawColumn")]
pub struct ReportColumn {
    column: String,
    attributes: BTreeMap<String, String>,
}

impl ReportColumn {
    /// Create a validated column specification.
    ///
    /// Validation short-circuits on the first failure: the name must be
    /// registered, every attribute key must be one of `format`, `min`,
    /// `max`, `scope`, and each value must satisfy that key's rule
    /// (format policy of the column, base-10 integer, or the fixed scope
    /// set).
    pub fn new(
        column: impl Into<String>,
        attributes: BTreeMap<String, String>,
    ) -> TrebolResult<Self> {
        let column = column.into();
        let Some(policy) = lookup_column(&column) else {
            return Err(TrebolError::unknown_column(column));
        };

        for (key, value) in &attributes {
            match key.as_str() {
                "format" => {
                    if !policy.allows(value) {
                        return Err(TrebolError::InvalidFormat {
                            column,
                            format: value.clone(),
                        });
                    }
                }
                "min" | "max" => {
                    if value.parse::<i32>().is_err() {
                        return Err(TrebolError::InvalidNumber {
                            column,
                            value: value.clone(),
                        });
                    }
                }
                "scope" => {
                    if !matches!(value.as_str(), "package" | "class" | "method") {
                        return Err(TrebolError::InvalidScope {
                            column,
                            scope: value.clone(),
                        });
                    }
                }
                _ => {
                    return Err(TrebolError::UnknownAttribute {
                        column,
                        attribute: key.clone(),
                    });
                }
            }
        }

        Ok(Self { column, attributes })
    }

    /// The registered column name
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// The validated attribute map
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Serialize to a JSON object with `column` and `attributes` fields
    pub fn to_json(&self) -> TrebolResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON, re-running full validation.
    ///
    /// Validation failures surface with the constructor's error taxonomy,
    /// not as opaque deserialization errors.
    pub fn from_json(json: &str) -> TrebolResult<Self> {
        let raw: RawColumn = serde_json::from_str(json)?;
        Self::try_from(raw)
    }
}

impl TryFrom<RawColumn> for ReportColumn {
    type Error = TrebolError;

    fn try_from(raw: RawColumn) -> TrebolResult<Self> {
        Self::new(raw.column, raw.attributes)
    }
}
