//! `dc stop` — tear a stored definition down.

use anyhow::Result;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::output::json::{self, LifecycleResult};

/// Run `dc stop <name>`.
///
/// # Errors
///
/// Returns an error if the name is invalid, the definition does not exist,
/// or the compose invocation fails.
pub async fn run(app: &AppContext, name: &str) -> Result<ExitCode> {
    app.stop(name).await?;
    if app.is_json() {
        println!(
            "{}",
            json::to_pretty(&LifecycleResult {
                name,
                status: "stopped",
            })?
        );
    }
    Ok(ExitCode::SUCCESS)
}
