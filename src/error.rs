//! Error types for the `podium` CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for CLI operations.
#[derive(Error, Debug)]
pub enum PodiumError {
    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parse error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error bubbled up from the display library.
    #[error(transparent)]
    Lib(#[from] podium_lib::PodiumError),
}

/// Result type using the CLI `PodiumError`.
pub type Result<T> = std::result::Result<T, PodiumError>;
