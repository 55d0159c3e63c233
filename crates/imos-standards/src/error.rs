//! Error types for reference table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading the IMOS reference tables.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Standards directory not found.
    #[error("Standards directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Reference table file not found.
    #[error("Reference table not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read a reference table file.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reference table is not valid YAML.
    #[error("Failed to parse YAML {source_name}: {source}")]
    Yaml {
        source_name: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Reference table parsed but is not a list or mapping of codes.
    #[error("Invalid reference table {source_name}: {message}")]
    InvalidTable { source_name: String, message: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for reference table loading.
pub type Result<T> = std::result::Result<T, StandardsError>;
