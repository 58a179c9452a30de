//! Result and error types for Trebol.

use thiserror::Error;

/// Result type for Trebol operations
pub type TrebolResult<T> = Result<T, TrebolError>;

/// Errors that can occur while validating report configuration.
///
/// Every variant is a configuration-time rejection of user input; none of
/// them represent runtime or system faults. Messages name the column and
/// the offending key/value so the build-description author can find the
/// line to fix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrebolError {
    /// Column name is not in the registry
    #[error("Column '{column}' is not supported")]
    UnknownColumn {
        /// The rejected column name
        column: String,
    },

    /// Convention dispatch received an unregistered identifier
    #[error("Unsupported column name '{column}' for coverage report")]
    UnsupportedColumn {
        /// The rejected identifier
        column: String,
    },

    /// Attribute key is not one of `format`, `min`, `max`, `scope`
    #[error("Invalid column attribute '{attribute}' for column {column}")]
    UnknownAttribute {
        /// Column being configured
        column: String,
        /// The rejected attribute key
        attribute: String,
    },

    /// `format` value violates the column's format policy
    #[error("Invalid column format specification '{format}' for column {column}")]
    InvalidFormat {
        /// Column being configured
        column: String,
        /// The rejected format value
        format: String,
    },

    /// `min`/`max` value is not a base-10 integer
    #[error("Invalid column min/max specification '{value}' for column {column}")]
    InvalidNumber {
        /// Column being configured
        column: String,
        /// The rejected value
        value: String,
    },

    /// `scope` value is not `package`, `class`, or `method`
    #[error("Invalid column scope specification '{scope}' for column {column}")]
    InvalidScope {
        /// Column being configured
        column: String,
        /// The rejected scope value
        scope: String,
    },

    /// JSON (de)serialization of a configuration object failed
    #[error("Configuration serialization failed: {message}")]
    Serialization {
        /// Underlying serde error message
        message: String,
    },
}

impl TrebolError {
    /// Create an unknown-column error
    #[must_use]
    pub fn unknown_column(column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
        }
    }

    /// Create an unsupported-column error
    #[must_use]
    pub fn unsupported_column(column: impl Into<String>) -> Self {
        Self::UnsupportedColumn {
            column: column.into(),
        }
    }
}

impl From<serde_json::Error> for TrebolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}
