//! `dc config` — inspect configuration.

use anyhow::Result;
use clap::Subcommand;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::output::json;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show effective configuration
    Show,
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the configuration path cannot be determined.
pub fn run(app: &AppContext, cmd: &ConfigCommand, store: &impl ConfigStore) -> Result<ExitCode> {
    match cmd {
        ConfigCommand::Show => show_config(app, store),
    }
}

fn show_config(app: &AppContext, store: &impl ConfigStore) -> Result<ExitCode> {
    let path = store.path()?;
    if app.is_json() {
        println!(
            "{}",
            json::to_pretty(&serde_json::json!({
                "path": path,
                "config": app.config,
            }))?
        );
        return Ok(ExitCode::SUCCESS);
    }
    let ctx = &app.output;
    ctx.header("Configuration");
    ctx.kv("file", &path.display().to_string());
    ctx.kv("storage_path", &app.config.storage_path);
    Ok(ExitCode::SUCCESS)
}
