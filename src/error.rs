//! Error types for catalog loading.
//!
//! Missing data at resolve time is never an error: absent programs and
//! summaries are a routine outcome of partial upstream coverage and
//! surface as `None`/empty fields in the resolved view. Errors are
//! reserved for the load boundary, where an unreadable catalog is fatal
//! for the session; the resolver never runs with a partial catalog set.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a catalog at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        /// Path of the unreadable catalog.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The catalog contents are not valid JSON, or a record does not
    /// match any tolerated schema variant.
    #[error("failed to parse catalog {}: {source}", path.display())]
    Parse {
        /// Path of the malformed catalog.
        path: PathBuf,

        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The catalog parsed as JSON but its top level is not an array of
    /// records.
    #[error("catalog {} must be a JSON array of records", path.display())]
    NotAnArray {
        /// Path of the malformed catalog.
        path: PathBuf,
    },
}

impl CatalogError {
    /// Path of the catalog that failed to load.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::NotAnArray { path } => path,
        }
    }
}

/// Convenience alias for catalog-loading results.
pub type CatalogResult<T> = Result<T, CatalogError>;
