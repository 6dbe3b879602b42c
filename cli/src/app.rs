//! Application context — unified state passed to every command handler.
//!
//! `AppContext` is built once by [`AppContext::initialize`]: it loads the
//! configuration, creates the storage root and resolves the compose runtime.
//! The resolved runtime is an immutable value owned here and handed to the
//! lifecycle service on every call; nothing is re-probed.

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::application::services::{lifecycle, registry, resolver};
use crate::domain::{DcConfig, Runtime, ServiceDefinition};
use crate::infra::{FsDefinitionStore, TokioCommandRunner};
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Flags passed from the top-level CLI to `AppContext::initialize`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Storage directory override (`--storage-path` / `DC_STORAGE_PATH`).
    pub storage_path: Option<String>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Effective configuration after overrides.
    pub config: DcConfig,
    /// Definition storage.
    pub store: FsDefinitionStore,
    /// Process executor for compose invocations.
    pub runner: TokioCommandRunner,
    /// Compose runtime resolved at startup.
    pub runtime: Runtime,
}

impl AppContext {
    /// Load configuration, create the storage root, and resolve the runtime.
    ///
    /// Runtime probe failures never fail initialization; they resolve to
    /// [`Runtime::Unavailable`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded, the working
    /// directory cannot be determined, or the storage root cannot be created.
    pub async fn initialize(flags: &AppFlags, config_store: &impl ConfigStore) -> Result<Self> {
        let config = config_store
            .load()?
            .with_storage_override(flags.storage_path.clone());
        let working_root =
            std::env::current_dir().context("cannot determine working directory")?;
        let store = FsDefinitionStore::new(config.storage_root(&working_root));
        store.init()?;

        let runner = TokioCommandRunner::new();
        let runtime = resolver::resolve(&runner).await;

        Ok(Self::from_parts(flags, config, store, runner, runtime))
    }

    /// Assemble a context from already-initialized parts.
    #[must_use]
    pub fn from_parts(
        flags: &AppFlags,
        config: DcConfig,
        store: FsDefinitionStore,
        runner: TokioCommandRunner,
        runtime: Runtime,
    ) -> Self {
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        // JSON mode keeps stdout machine-readable.
        let quiet = flags.output.quiet || mode == OutputMode::Json;

        Self {
            output: OutputContext::new(flags.output.no_color, quiet),
            mode,
            config,
            store,
            runner,
            runtime,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Bring a definition up, detached.
    ///
    /// # Errors
    ///
    /// See [`lifecycle::start`].
    pub async fn start(&self, name: &str) -> Result<()> {
        let reporter = TerminalReporter::new(&self.output);
        lifecycle::start(&self.runner, &self.store, &self.runtime, &reporter, name).await
    }

    /// Tear a definition down.
    ///
    /// # Errors
    ///
    /// See [`lifecycle::stop`].
    pub async fn stop(&self, name: &str) -> Result<()> {
        let reporter = TerminalReporter::new(&self.output);
        lifecycle::stop(&self.runner, &self.store, &self.runtime, &reporter, name).await
    }

    /// Create or overwrite a definition.
    ///
    /// # Errors
    ///
    /// See [`registry::update`].
    pub fn update(&self, name: &str, content: &str) -> Result<()> {
        registry::update(&self.store, name, content)
    }

    /// Remove a definition.
    ///
    /// # Errors
    ///
    /// See [`registry::remove`].
    pub fn remove(&self, name: &str) -> Result<()> {
        registry::remove(&self.store, name)
    }

    /// Read a definition.
    ///
    /// # Errors
    ///
    /// See [`registry::show`].
    pub fn show(&self, name: &str) -> Result<ServiceDefinition> {
        registry::show(&self.store, name)
    }

    /// List stored definition names.
    ///
    /// # Errors
    ///
    /// See [`registry::list`].
    pub fn list(&self) -> Result<Vec<String>> {
        registry::list(&self.store)
    }
}
