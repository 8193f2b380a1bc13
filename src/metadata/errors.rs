//! Metadata error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for metadata operations
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Metadata errors
///
/// These surface at load time; lookups on a loaded store never fail,
/// they resolve to `None`.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed metadata file {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("Invalid definition '{name}': {reason}")]
    InvalidDefinition { name: String, reason: String },
}

impl MetadataError {
    /// Create an I/O error for a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed-file error
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-definition error
    pub fn invalid_definition(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
