//! `dc start` — bring a stored definition up, detached.

use anyhow::Result;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::output::json::{self, LifecycleResult};

/// Run `dc start <name>`.
///
/// # Errors
///
/// Returns an error if the name is invalid, the definition does not exist,
/// or the compose invocation fails.
pub async fn run(app: &AppContext, name: &str) -> Result<ExitCode> {
    app.start(name).await?;
    if app.is_json() {
        println!(
            "{}",
            json::to_pretty(&LifecycleResult {
                name,
                status: "started",
            })?
        );
    }
    Ok(ExitCode::SUCCESS)
}
