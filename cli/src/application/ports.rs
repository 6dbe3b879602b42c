//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::Output;
use std::time::Duration;

use anyhow::Result;

use crate::domain::{DcConfig, ServiceDefinition};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// A non-zero exit is not an error: it is reported through `Output::status`
/// together with the captured stdout/stderr. Errors are reserved for spawn
/// and wait failures.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture its output. No deadline.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program, killing it if it outlives `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
}

// ── Definition Storage Port ───────────────────────────────────────────────────

/// Keyed storage of opaque definition blobs, one file per name.
///
/// Every method validates `name` before touching storage.
#[cfg_attr(test, mockall::automock)]
pub trait DefinitionStore {
    /// Deterministic location of the definition file for `name`.
    fn path_for(&self, name: &str) -> PathBuf;
    /// Whether a definition for `name` currently exists.
    fn exists(&self, name: &str) -> bool;
    /// Create or overwrite the definition.
    fn put(&self, name: &str, content: &str) -> Result<()>;
    /// Read a definition; `ServiceError::NotFound` if absent.
    fn get(&self, name: &str) -> Result<ServiceDefinition>;
    /// Remove a definition; absent definitions are not an error.
    fn delete(&self, name: &str) -> Result<()>;
    /// Names of all stored definitions.
    fn list(&self) -> Result<Vec<String>>;
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts loading of the on-disk configuration file.
pub trait ConfigStore {
    /// Load configuration, returning defaults when no file exists.
    fn load(&self) -> Result<DcConfig>;
    /// Location of the configuration file.
    fn path(&self) -> Result<PathBuf>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
