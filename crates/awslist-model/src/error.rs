//! Error types for loading the API metadata model.

use std::path::PathBuf;

/// Errors raised while loading service definitions.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A definition file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A definition file is not valid JSON for its document type.
    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        /// File being parsed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// An in-memory definition is not valid JSON for its document type.
    #[error("invalid service definition: {0}")]
    Parse(#[from] serde_json::Error),

    /// The model directory could not be traversed.
    #[error("failed to walk model directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Two definitions map to the same package name.
    #[error("duplicate service package name: {0}")]
    DuplicateService(String),
}

/// Convenience result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
