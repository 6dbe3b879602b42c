//! Runtime resolution: pick the usable compose command form once.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::time::Duration;

use tracing::debug;

use crate::application::ports::CommandRunner;
use crate::domain::runtime::{ComposeForm, Runtime};

/// Upper bound on a single capability probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Probe each compose form in preference order and return the first usable
/// one, or [`Runtime::Unavailable`] when none responds.
///
/// Probe failures (spawn errors, timeouts, non-zero exits) are absorbed.
/// The user-visible error is deferred to the first lifecycle call.
pub async fn resolve(runner: &impl CommandRunner) -> Runtime {
    for form in ComposeForm::PREFERENCE {
        if probe(runner, form).await {
            debug!(binary = form.binary(), "compose runtime resolved");
            return Runtime::Available(form);
        }
    }
    debug!("no compose runtime found");
    Runtime::Unavailable
}

async fn probe(runner: &impl CommandRunner, form: ComposeForm) -> bool {
    let args = form.probe_args();
    match runner
        .run_with_timeout(form.binary(), &args, PROBE_TIMEOUT)
        .await
    {
        Ok(output) if output.status.success() => true,
        Ok(output) => {
            debug!(
                binary = form.binary(),
                code = ?output.status.code(),
                "compose probe exited non-zero"
            );
            false
        }
        Err(e) => {
            debug!(binary = form.binary(), error = %e, "compose probe failed");
            false
        }
    }
}
