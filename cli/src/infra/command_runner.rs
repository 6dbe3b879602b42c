//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation. It uses tokio for
//! async process execution and kills the child when a timeout fires.

use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Child;

use crate::application::ports::CommandRunner;

/// Production `CommandRunner`.
///
/// On Windows, `tokio::time::timeout` around `.output().await` does NOT kill
/// the child process when the timeout fires. This implementation uses
/// `tokio::select!` with explicit `child.kill()` to guarantee termination.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn spawn_piped(program: &str, args: &[&str]) -> Result<Child> {
    tokio::process::Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("failed to spawn {program}"))
}

async fn drain(handle: Option<impl AsyncRead + Unpin>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut h) = handle {
        let _ = h.read_to_end(&mut buf).await;
    }
    buf
}

/// Read stdout/stderr concurrently with `wait()`. A child that fills the
/// pipe buffer would otherwise block forever on write.
async fn collect(child: &mut Child, program: &str) -> Result<Output> {
    let stdout_handle = child.stdout.take();
    let stderr_handle = child.stderr.take();
    let (status, stdout, stderr) =
        tokio::join!(child.wait(), drain(stdout_handle), drain(stderr_handle));
    Ok(Output {
        status: status.with_context(|| format!("waiting for {program}"))?,
        stdout,
        stderr,
    })
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        let mut child = spawn_piped(program, args)?;
        collect(&mut child, program).await
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        let mut child = spawn_piped(program, args)?;
        tokio::select! {
            result = collect(&mut child, program) => result,
            () = tokio::time::sleep(timeout) => {
                let _ = child.kill().await;
                anyhow::bail!("{program} timed out after {}s", timeout.as_secs())
            }
        }
    }
}
