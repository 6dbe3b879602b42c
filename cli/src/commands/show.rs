//! `dc show` — print a stored definition.

use anyhow::Result;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::output::json;

/// Run `dc show <name>`.
///
/// Human mode prints the raw content so it can be piped back into
/// `dc update` or another tool.
///
/// # Errors
///
/// Returns an error if the name is invalid or the definition does not exist.
pub fn run(app: &AppContext, name: &str) -> Result<ExitCode> {
    let definition = app.show(name)?;
    if app.is_json() {
        println!("{}", json::to_pretty(&definition)?);
    } else {
        print!("{}", definition.content);
        if !definition.content.ends_with('\n') {
            println!();
        }
    }
    Ok(ExitCode::SUCCESS)
}
