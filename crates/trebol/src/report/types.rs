//! Report output types and instrumentation flush policies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported report output types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    /// XML report
    Xml,
    /// JSON report
    Json,
    /// HTML report
    Html,
    /// PDF report
    Pdf,
}

impl ReportType {
    /// The lowercase format string the report tool expects
    #[must_use]
    pub const fn format(self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Json => "json",
            Self::Html => "html",
            Self::Pdf => "pdf",
        }
    }

    /// All format strings in declaration order
    #[must_use]
    pub const fn all_formats() -> [&'static str; 4] {
        ["xml", "json", "html", "pdf"]
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format())
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xml" => Ok(Self::Xml),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            "pdf" => Ok(Self::Pdf),
            other => Err(format!("unknown report type '{other}'")),
        }
    }
}

/// Coverage-recording flush policies of the instrumentation runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlushPolicy {
    /// Flush only at explicitly directed points
    Directed,
    /// Flush at a fixed interval
    Interval,
    /// Flush from a background thread
    Threaded,
}

impl FlushPolicy {
    /// The lowercase policy string the instrumentation tool expects
    #[must_use]
    pub const fn policy(self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Interval => "interval",
            Self::Threaded => "threaded",
        }
    }

    /// All policy strings in declaration order
    #[must_use]
    pub const fn all_policies() -> [&'static str; 3] {
        ["directed", "interval", "threaded"]
    }
}

impl fmt::Display for FlushPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.policy())
    }
}

impl FromStr for FlushPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "directed" => Ok(Self::Directed),
            "interval" => Ok(Self::Interval),
            "threaded" => Ok(Self::Threaded),
            other => Err(format!("unknown flush policy '{other}'")),
        }
    }
}
