//! Error types for kijiya-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from workspace repository operations.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (write/save path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON parse error on load — includes the file path.
    #[error("failed to parse content plan at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No persisted data for the client identifier.
    #[error("no client data found for '{client}' — run `kijiya setup` first")]
    MissingClientData { client: String },

    /// The plan has no content item matching the requested number.
    #[error("no content item matching '{content}' for client '{client}'")]
    MissingContentData { client: String, content: String },
}

/// Errors from loading the system configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure while reading the configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error — includes file path and line context from serde_yaml.
    #[error("failed to parse configuration at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
