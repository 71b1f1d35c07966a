//! Configuration management for `podium`.
//!
//! Configuration is loaded from a YAML file (`podium.yaml` in the working
//! directory, or the path given with `--config`) with environment variable
//! overrides. A missing default file yields the built-in defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PodiumError, Result};

/// Default config file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "podium.yaml";

/// Environment override for the template directory.
pub const TEMPLATES_DIR_ENV: &str = "PODIUM_TEMPLATES_DIR";

/// Runtime configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory searched when a template is referenced by bare name.
    pub templates_dir: PathBuf,

    /// Filler placed between joined display values.
    pub filler: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("templates"),
            filler: ",".to_string(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist; the default file is optional.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` for a missing explicit path, `Io` on read
    /// failure, or `Config` if the file does not parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if !path.exists() => {
                return Err(PodiumError::ConfigNotFound(path.to_path_buf()));
            }
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };

        if let Ok(dir) = env::var(TEMPLATES_DIR_ENV) {
            config.templates_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&raw)
            .map_err(|e| PodiumError::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve a template reference: a path is used as-is, a bare name is
    /// looked up as `<templates_dir>/<name>.json`.
    #[must_use]
    pub fn resolve_template(&self, reference: &str) -> PathBuf {
        let path = Path::new(reference);
        if path.extension().is_some() || reference.contains(std::path::MAIN_SEPARATOR) {
            path.to_path_buf()
        } else {
            self.templates_dir.join(format!("{reference}.json"))
        }
    }
}
