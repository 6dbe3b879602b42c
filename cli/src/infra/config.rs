//! Infrastructure implementation of the `ConfigStore` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::DcConfig;

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV: &str = "DC_CONFIG";

/// Production implementation of `ConfigStore` that uses a YAML file on disk.
#[derive(Debug, Default)]
pub struct YamlConfigStore {
    path: Option<PathBuf>,
}

impl YamlConfigStore {
    /// Resolve the file from `DC_CONFIG`, then `~/.dc/config.yaml`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit file (used in tests).
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<DcConfig> {
        let path = self.path()?;
        if !path.exists() {
            return Ok(DcConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        if let Ok(val) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".dc").join("config.yaml"))
    }
}
