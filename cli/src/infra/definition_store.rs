//! Infrastructure implementation of the `DefinitionStore` port.
//!
//! One `<name>.yml` file per definition directly under the storage root.
//! The root is shared mutable state: files may appear or vanish between
//! calls, and any such race surfaces as an error rather than a panic.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::DefinitionStore;
use crate::domain::definition::{
    definition_path, name_from_file_name, validate_content, validate_name,
};
use crate::domain::{ServiceDefinition, ServiceError};

/// File-backed definition store rooted at a single directory.
#[derive(Debug, Clone)]
pub struct FsDefinitionStore {
    root: PathBuf,
}

impl FsDefinitionStore {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Storage root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the storage root, including parents. Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn init(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("creating storage directory {}", self.root.display()))
    }
}

impl DefinitionStore for FsDefinitionStore {
    fn path_for(&self, name: &str) -> PathBuf {
        definition_path(&self.root, name)
    }

    fn exists(&self, name: &str) -> bool {
        validate_name(name).is_ok() && self.path_for(name).is_file()
    }

    fn put(&self, name: &str, content: &str) -> Result<()> {
        validate_name(name)?;
        validate_content(content)?;
        let path = self.path_for(name);
        std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))
    }

    fn get(&self, name: &str) -> Result<ServiceDefinition> {
        validate_name(name)?;
        let path = self.path_for(name);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(ServiceDefinition {
                name: name.to_string(),
                content,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ServiceError::NotFound(name.to_string()).into())
            }
            Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
        }
    }

    fn delete(&self, name: &str) -> Result<()> {
        validate_name(name)?;
        let path = self.path_for(name);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(service = name, "delete of absent definition ignored");
                Ok(())
            }
            Err(e) => Err(e).with_context(|| format!("removing {}", path.display())),
        }
    }

    fn list(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.root)
            .with_context(|| format!("listing {}", self.root.display()))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| format!("listing {}", self.root.display()))?;
            // `file_type` does not follow symlinks, so links are skipped too.
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            if let Some(name) = entry.file_name().to_str().and_then(name_from_file_name) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
