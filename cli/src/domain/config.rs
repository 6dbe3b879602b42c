//! Domain types for dc configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default storage directory, relative to the working root.
pub const DEFAULT_STORAGE_PATH: &str = "docker-compose";

/// Top-level configuration stored in `~/.dc/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DcConfig {
    /// Directory holding definition files. Relative paths resolve against
    /// the working root.
    pub storage_path: String,
}

impl Default for DcConfig {
    fn default() -> Self {
        Self {
            storage_path: DEFAULT_STORAGE_PATH.to_string(),
        }
    }
}

impl DcConfig {
    /// Apply an override (flag or env) on top of the file value.
    #[must_use]
    pub fn with_storage_override(mut self, storage_path: Option<String>) -> Self {
        if let Some(path) = storage_path.filter(|p| !p.is_empty()) {
            self.storage_path = path;
        }
        self
    }

    /// Absolute storage root under `working_root`.
    #[must_use]
    pub fn storage_root(&self, working_root: &Path) -> PathBuf {
        working_root.join(&self.storage_path)
    }
}
