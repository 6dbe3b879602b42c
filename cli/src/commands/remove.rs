//! `dc remove` — delete a definition. Removing an absent one succeeds.

use anyhow::Result;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::output::json;

/// Run `dc remove <name>`.
///
/// # Errors
///
/// Returns an error if the name is invalid or the file cannot be removed.
pub fn run(app: &AppContext, name: &str) -> Result<ExitCode> {
    app.remove(name)?;
    if app.is_json() {
        println!(
            "{}",
            json::to_pretty(&serde_json::json!({ "name": name, "removed": true }))?
        );
    } else {
        app.output.success(&format!("'{name}' removed"));
    }
    Ok(ExitCode::SUCCESS)
}
