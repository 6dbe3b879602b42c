//! `dc runtime` — show which compose command form was resolved.

use anyhow::Result;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::domain::Runtime;
use crate::output::json;

/// Run `dc runtime`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    if app.is_json() {
        println!(
            "{}",
            json::to_pretty(&serde_json::json!({
                "runtime": app.runtime,
                "command": app.runtime.display_command(),
                "storage_root": app.store.root(),
            }))?
        );
        return Ok(ExitCode::SUCCESS);
    }

    let ctx = &app.output;
    ctx.header("Compose Runtime");
    ctx.kv("command", &app.runtime.display_command());
    ctx.kv("storage", &app.store.root().display().to_string());
    if app.runtime == Runtime::Unavailable {
        ctx.warn("Install Docker with the compose plugin, or docker-compose.");
    }
    Ok(ExitCode::SUCCESS)
}
