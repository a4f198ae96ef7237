//! Configuration-specific error types.

use std::io;
use std::path::PathBuf;

/// Reasons the configuration could not be read, written or accepted.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file path not set")]
    FilePathNotSet,

    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    #[error("Failed to create configuration directory {path}: {source}")]
    CreateDirectoryFailed { path: PathBuf, source: io::Error },

    #[error("Failed to read {path}: {source}")]
    ReadFailed { path: PathBuf, source: io::Error },

    #[error("Failed to write {path}: {source}")]
    WriteFailed { path: PathBuf, source: io::Error },

    /// The file exists but is not valid YAML for the expected fields.
    #[error("Malformed configuration in {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Failed to encode configuration: {0}")]
    Encode(serde_yaml::Error),

    /// The API base URL is not an absolute http(s) URL.
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },
}
