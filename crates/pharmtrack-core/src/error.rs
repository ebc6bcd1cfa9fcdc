//! Error types for the PharmTrack engine
//!
//! The classifier, estimator, query engine and facet counter are total and
//! never fail. Errors only arise at the edges:
//! - Parsing filter names typed by a user
//! - Parsing dates and loading datasets
//! - Replacing a record that is not in the page collection

use std::path::PathBuf;

/// Errors raised by fallible catalog operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Filter or tab name not recognized for this page
    #[error("unknown {kind} filter: '{value}'")]
    UnknownFilter {
        /// Which page the filter belongs to (`inventory` or `delivery`)
        kind: &'static str,
        /// The rejected input
        value: String,
    },

    /// Date string in neither supported format
    #[error("invalid date '{0}': expected YYYY-MM-DD or 'Mon D, YYYY'")]
    InvalidDate(String),

    /// Dataset JSON could not be decoded
    #[error("malformed {collection} dataset: {source}")]
    Malformed {
        /// Collection being decoded
        collection: &'static str,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// IO error while reading a dataset file
    #[error("io error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Two records in one collection share an id
    #[error("duplicate record id '{id}' in {collection}")]
    DuplicateId {
        /// Collection holding the duplicate
        collection: &'static str,
        /// The repeated id
        id: String,
    },

    /// Replacement target does not exist
    #[error("no record with id '{id}' in {collection}")]
    UnknownRecord {
        /// Collection that was searched
        collection: &'static str,
        /// The missing id
        id: String,
    },
}

impl CatalogError {
    /// Create unknown filter error
    pub fn unknown_filter(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownFilter {
            kind,
            value: value.into(),
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if the error was caused by user-supplied input rather than data
    #[inline]
    #[must_use]
    pub fn is_user_input(&self) -> bool {
        matches!(self, Self::UnknownFilter { .. } | Self::UnknownRecord { .. })
    }
}
