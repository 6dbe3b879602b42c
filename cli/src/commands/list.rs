//! `dc list` — list stored definition names.

use anyhow::Result;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::output::json::{self, ServiceList};

/// Run `dc list`.
///
/// # Errors
///
/// Returns an error if the storage directory cannot be read.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let names = app.list()?;
    if app.is_json() {
        println!("{}", json::to_pretty(&ServiceList { services: &names })?);
    } else if names.is_empty() {
        app.output.info("No services defined.");
    } else {
        for name in &names {
            println!("{name}");
        }
    }
    Ok(ExitCode::SUCCESS)
}
