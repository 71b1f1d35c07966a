//! Error types for `podium-lib`.
//!
//! Display filters are total and never construct errors; these variants
//! cover template I/O and name parsing only.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for podium-lib operations.
#[derive(Error, Debug)]
pub enum PodiumError {
    /// Deployment template file was not found.
    #[error("Template not found: {0}")]
    TemplateNotFound(PathBuf),

    /// Deployment template did not parse as a descriptor.
    #[error("Template parse error in {path}: {reason}")]
    TemplateParse { path: PathBuf, reason: String },

    /// A status name did not match any value in its domain.
    #[error("Unknown {domain} name: {name}")]
    UnknownName { domain: &'static str, name: String },

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type using `PodiumError`.
pub type Result<T> = std::result::Result<T, PodiumError>;
