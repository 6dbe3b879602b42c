//! Unit tests for start/stop against a scripted process layer.

#![allow(clippy::expect_used)]

use dc_cli::application::ports::DefinitionStore;
use dc_cli::application::services::lifecycle;
use dc_cli::domain::{ComposeForm, Runtime, ServiceError};

use crate::helpers::{
    RecordingReporter, ScriptedRunner, err_output, ok_output, temp_store,
};

const PLUGIN: Runtime = Runtime::Available(ComposeForm::Plugin);
const STANDALONE: Runtime = Runtime::Available(ComposeForm::Standalone);

fn service_error(err: &anyhow::Error) -> &ServiceError {
    err.downcast_ref::<ServiceError>().expect("ServiceError")
}

// ── start ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn start_invokes_compose_up_detached_in_order() {
    let (_dir, store) = temp_store();
    store.put("web", "version: 3\nservices: {}").expect("put");
    let runner = ScriptedRunner::succeeding();

    lifecycle::start(&runner, &store, &PLUGIN, &RecordingReporter::default(), "web")
        .await
        .expect("start");

    let path = store.path_for("web").to_string_lossy().to_string();
    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, "docker");
    assert_eq!(calls[0].args, ["compose", "-f", path.as_str(), "up", "-d"]);
    assert_eq!(calls[0].timeout, None, "lifecycle calls carry no deadline");
}

#[tokio::test]
async fn start_uses_standalone_form_exclusively_when_resolved() {
    let (_dir, store) = temp_store();
    store.put("web", "services: {}").expect("put");
    let runner = ScriptedRunner::succeeding();

    lifecycle::start(&runner, &store, &STANDALONE, &RecordingReporter::default(), "web")
        .await
        .expect("start");

    let path = store.path_for("web").to_string_lossy().to_string();
    let calls = runner.calls();
    assert_eq!(calls[0].program, "docker-compose");
    assert_eq!(calls[0].args, ["-f", path.as_str(), "up", "-d"]);
}

#[tokio::test]
async fn start_missing_definition_is_not_found_without_spawning() {
    let (_dir, store) = temp_store();
    let runner = ScriptedRunner::succeeding();

    let err = lifecycle::start(&runner, &store, &PLUGIN, &RecordingReporter::default(), "web")
        .await
        .expect_err("must fail");

    assert_eq!(service_error(&err), &ServiceError::NotFound("web".to_string()));
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn start_empty_name_is_invalid_without_spawning() {
    let (_dir, store) = temp_store();
    let runner = ScriptedRunner::succeeding();

    let err = lifecycle::start(&runner, &store, &PLUGIN, &RecordingReporter::default(), "")
        .await
        .expect_err("must fail");

    assert!(matches!(service_error(&err), ServiceError::InvalidArgument(_)));
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn start_nonzero_exit_carries_diagnostic() {
    let (_dir, store) = temp_store();
    store.put("web", "version: 3\nservices: {}").expect("put");
    let runner = ScriptedRunner::exiting(1, b"port in use\n");

    let err = lifecycle::start(&runner, &store, &PLUGIN, &RecordingReporter::default(), "web")
        .await
        .expect_err("must fail");

    assert_eq!(
        service_error(&err),
        &ServiceError::ExecutionFailed("port in use".to_string())
    );
}

#[tokio::test]
async fn start_diagnostic_falls_back_to_stdout() {
    let (_dir, store) = temp_store();
    store.put("web", "x").expect("put");
    let runner = ScriptedRunner::new(|_, _| {
        let mut out = ok_output(b"no such service: db\n");
        out.status = err_output(1, b"").status;
        Ok(out)
    });

    let err = lifecycle::start(&runner, &store, &PLUGIN, &RecordingReporter::default(), "web")
        .await
        .expect_err("must fail");

    assert_eq!(
        service_error(&err),
        &ServiceError::ExecutionFailed("no such service: db".to_string())
    );
}

#[tokio::test]
async fn start_unavailable_runtime_fails_without_spawning() {
    let (_dir, store) = temp_store();
    store.put("web", "x").expect("put");
    let runner = ScriptedRunner::succeeding();
    let reporter = RecordingReporter::default();

    let err = lifecycle::start(&runner, &store, &Runtime::Unavailable, &reporter, "web")
        .await
        .expect_err("must fail");

    assert!(matches!(service_error(&err), ServiceError::ExecutionFailed(_)));
    assert!(runner.calls().is_empty());
    assert!(
        reporter.messages().iter().any(|m| m.starts_with("warn: ")),
        "got: {:?}",
        reporter.messages()
    );
}

#[cfg(unix)]
#[tokio::test]
async fn start_rejects_non_utf8_definition_path_without_spawning() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt as _;

    use dc_cli::infra::FsDefinitionStore;

    let dir = tempfile::TempDir::new().expect("tempdir");
    let store = FsDefinitionStore::new(dir.path().join(OsStr::from_bytes(b"stacks-\xff")));
    store.init().expect("init");
    store.put("web", "x").expect("put");
    let runner = ScriptedRunner::succeeding();

    let err = lifecycle::start(&runner, &store, &PLUGIN, &RecordingReporter::default(), "web")
        .await
        .expect_err("must fail");

    assert!(format!("{err:#}").contains("not valid UTF-8"), "got: {err:#}");
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn start_spawn_failure_is_surfaced() {
    let (_dir, store) = temp_store();
    store.put("web", "x").expect("put");
    let runner = ScriptedRunner::nothing_installed();

    let err = lifecycle::start(&runner, &store, &PLUGIN, &RecordingReporter::default(), "web")
        .await
        .expect_err("must fail");

    assert!(format!("{err:#}").contains("failed to spawn docker"), "got: {err:#}");
}

#[tokio::test]
async fn start_reports_progress() {
    let (_dir, store) = temp_store();
    store.put("web", "x").expect("put");
    let reporter = RecordingReporter::default();

    lifecycle::start(&ScriptedRunner::succeeding(), &store, &PLUGIN, &reporter, "web")
        .await
        .expect("start");

    assert_eq!(
        reporter.messages(),
        ["step: starting 'web'...", "success: 'web' started"]
    );
}

// ── stop ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn stop_invokes_compose_down_without_detach() {
    let (_dir, store) = temp_store();
    store.put("web", "x").expect("put");
    let runner = ScriptedRunner::succeeding();

    lifecycle::stop(&runner, &store, &PLUGIN, &RecordingReporter::default(), "web")
        .await
        .expect("stop");

    let path = store.path_for("web").to_string_lossy().to_string();
    let calls = runner.calls();
    assert_eq!(calls[0].args, ["compose", "-f", path.as_str(), "down"]);
}

#[tokio::test]
async fn stop_missing_definition_is_not_found_without_spawning() {
    let (_dir, store) = temp_store();
    let runner = ScriptedRunner::succeeding();

    let err = lifecycle::stop(&runner, &store, &PLUGIN, &RecordingReporter::default(), "web")
        .await
        .expect_err("must fail");

    assert_eq!(service_error(&err), &ServiceError::NotFound("web".to_string()));
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn stop_nonzero_exit_carries_diagnostic() {
    let (_dir, store) = temp_store();
    store.put("web", "x").expect("put");
    let runner = ScriptedRunner::exiting(1, b"  network web_default in use  \n");

    let err = lifecycle::stop(&runner, &store, &PLUGIN, &RecordingReporter::default(), "web")
        .await
        .expect_err("must fail");

    assert_eq!(
        service_error(&err),
        &ServiceError::ExecutionFailed("network web_default in use".to_string())
    );
}

#[tokio::test]
async fn stop_unavailable_runtime_fails_without_spawning() {
    let (_dir, store) = temp_store();
    store.put("web", "x").expect("put");
    let runner = ScriptedRunner::succeeding();
    let reporter = RecordingReporter::default();

    let err = lifecycle::stop(&runner, &store, &Runtime::Unavailable, &reporter, "web")
        .await
        .expect_err("must fail");

    assert!(matches!(service_error(&err), ServiceError::ExecutionFailed(_)));
    assert!(runner.calls().is_empty());
    assert!(reporter.messages().iter().any(|m| m.starts_with("warn: ")));
}

#[tokio::test]
async fn stop_after_remove_is_not_found() {
    let (_dir, store) = temp_store();
    store.put("web", "x").expect("put");
    store.delete("web").expect("delete");
    let runner = ScriptedRunner::succeeding();

    let err = lifecycle::stop(&runner, &store, &PLUGIN, &RecordingReporter::default(), "web")
        .await
        .expect_err("must fail");

    assert!(matches!(service_error(&err), ServiceError::NotFound(_)));
}

// ── resolver → lifecycle ──────────────────────────────────────────────────────

#[tokio::test]
async fn start_after_failed_resolution_never_reaches_process_layer() {
    use dc_cli::application::services::resolver;

    let (_dir, store) = temp_store();
    store.put("web", "x").expect("put");
    let runner = ScriptedRunner::nothing_installed();
    let runtime = resolver::resolve(&runner).await;
    let probes = runner.calls().len();

    let err = lifecycle::start(&runner, &store, &runtime, &RecordingReporter::default(), "web")
        .await
        .expect_err("must fail");

    assert!(matches!(service_error(&err), ServiceError::ExecutionFailed(_)));
    assert_eq!(runner.calls().len(), probes, "no invocation after probing");
}

#[tokio::test]
async fn start_after_legacy_resolution_uses_legacy_binary_only() {
    use dc_cli::application::services::resolver;

    let (_dir, store) = temp_store();
    store.put("web", "x").expect("put");
    let runner = ScriptedRunner::only("docker-compose");
    let runtime = resolver::resolve(&runner).await;
    let probes = runner.calls().len();

    for _ in 0..2 {
        lifecycle::start(&runner, &store, &runtime, &RecordingReporter::default(), "web")
            .await
            .expect("start");
    }

    let invocations: Vec<_> = runner.calls().into_iter().skip(probes).collect();
    assert_eq!(invocations.len(), 2);
    assert!(invocations.iter().all(|c| c.program == "docker-compose"));
}
