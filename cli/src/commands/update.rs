//! `dc update` — create or overwrite a definition.

use std::io::{IsTerminal as _, Read as _};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::DefinitionStore as _;
use crate::domain::ServiceError;
use crate::output::json;

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Service name
    pub name: String,

    /// Compose content, inline
    #[arg(long, conflicts_with = "file")]
    pub content: Option<String>,

    /// Read compose content from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Run `dc update <name>`.
///
/// Content comes from `--content`, then `--file`, then piped stdin.
///
/// # Errors
///
/// Returns an error if no content is supplied, the name is invalid, or the
/// definition cannot be written.
pub fn run(app: &AppContext, args: &UpdateArgs) -> Result<ExitCode> {
    let content = read_content(args)?;
    app.update(&args.name, &content)?;
    if app.is_json() {
        let path = app.store.path_for(&args.name);
        println!(
            "{}",
            json::to_pretty(&serde_json::json!({
                "name": args.name,
                "path": path,
            }))?
        );
    } else {
        app.output.success(&format!("'{}' updated", args.name));
    }
    Ok(ExitCode::SUCCESS)
}

fn read_content(args: &UpdateArgs) -> Result<String> {
    if let Some(content) = &args.content {
        return Ok(content.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()));
    }
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(ServiceError::InvalidArgument(
            "Compose content is required: pass --content, --file, or pipe it on stdin"
                .to_string(),
        )
        .into());
    }
    let mut content = String::new();
    stdin
        .read_to_string(&mut content)
        .context("reading compose content from stdin")?;
    Ok(content)
}
