// Storage path configuration

use crate::store::DEFAULT_FILE_NAME;
use eyre::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the storage file
pub const FILE_ENV: &str = "TASKLIST_FILE";

/// Contents of `<config_dir>/tasklist/config.yaml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Storage file path; relative paths are taken from the working directory
    pub file: Option<PathBuf>,
}

impl FileConfig {
    /// Read a config file. A missing file yields the default config.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = ?path, "No config file");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).with_context(|| format!("Failed to parse config {}", path.display()))
    }
}

/// Location of the user config file, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tasklist").join("config.yaml"))
}

/// Pick the storage file
///
/// Order: explicit path (flag or `TASKLIST_FILE`, both handled by clap),
/// then the config file, then `tasks.json` in the working directory.
pub fn resolve_storage_path(explicit: Option<PathBuf>, config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        debug!(path = ?path, "Using explicit storage path");
        return Ok(path);
    }

    if let Some(config_path) = config_path {
        let config = FileConfig::load(config_path)?;
        if let Some(path) = config.file {
            debug!(path = ?path, config = ?config_path, "Using storage path from config file");
            return Ok(path);
        }
    }

    Ok(PathBuf::from(DEFAULT_FILE_NAME))
}
