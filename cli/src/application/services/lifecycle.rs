//! Service lifecycle: bring a stored definition up or tear it down.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! Running state is never tracked here; every call asks the orchestration
//! tool, which is the single source of truth for workload state.

use std::process::Output;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::application::ports::{CommandRunner, DefinitionStore, ProgressReporter};
use crate::domain::error::ServiceError;
use crate::domain::runtime::{Directive, RUNTIME_UNAVAILABLE, Runtime, compose_args};
use crate::domain::validate_name;

/// Bring the named definition up, detached.
///
/// # Errors
///
/// - [`ServiceError::InvalidArgument`] for an empty or unsafe name.
/// - [`ServiceError::NotFound`] if no definition exists (no process is spawned).
/// - [`ServiceError::ExecutionFailed`] if the runtime is unavailable or the
///   tool exits non-zero.
pub async fn start(
    runner: &impl CommandRunner,
    store: &impl DefinitionStore,
    runtime: &Runtime,
    reporter: &impl ProgressReporter,
    name: &str,
) -> Result<()> {
    reporter.step(&format!("starting '{name}'..."));
    run_directive(runner, store, runtime, reporter, name, Directive::Up).await?;
    reporter.success(&format!("'{name}' started"));
    Ok(())
}

/// Tear the named definition down.
///
/// # Errors
///
/// Same taxonomy as [`start`].
pub async fn stop(
    runner: &impl CommandRunner,
    store: &impl DefinitionStore,
    runtime: &Runtime,
    reporter: &impl ProgressReporter,
    name: &str,
) -> Result<()> {
    reporter.step(&format!("stopping '{name}'..."));
    run_directive(runner, store, runtime, reporter, name, Directive::Down).await?;
    reporter.success(&format!("'{name}' stopped"));
    Ok(())
}

async fn run_directive(
    runner: &impl CommandRunner,
    store: &impl DefinitionStore,
    runtime: &Runtime,
    reporter: &impl ProgressReporter,
    name: &str,
    directive: Directive,
) -> Result<()> {
    validate_name(name)?;
    if !store.exists(name) {
        return Err(ServiceError::NotFound(name.to_string()).into());
    }
    let Runtime::Available(form) = *runtime else {
        warn!(service = name, "no compose runtime found");
        reporter.warn("install Docker with the compose plugin, or docker-compose");
        return Err(ServiceError::ExecutionFailed(RUNTIME_UNAVAILABLE.to_string()).into());
    };

    let file = store.path_for(name);
    let path = file
        .to_str()
        .with_context(|| format!("definition path {} is not valid UTF-8", file.display()))?;
    let args = compose_args(form, path, directive);
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    debug!(binary = form.binary(), args = ?arg_refs, "invoking compose");

    let output = runner
        .run(form.binary(), &arg_refs)
        .await
        .with_context(|| format!("running {}", runtime.display_command()))?;

    if output.status.success() {
        info!(service = name, ?directive, "compose succeeded");
        Ok(())
    } else {
        Err(ServiceError::ExecutionFailed(diagnostic(&output)).into())
    }
}

/// Stderr, falling back to stdout, falling back to the exit status.
fn diagnostic(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        return stderr.trim().to_string();
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        return stdout.trim().to_string();
    }
    format!("compose exited with {}", output.status)
}
