//! JSON output helpers.
//!
//! Provides the error-object formatter used by all `--json` code paths when
//! a command fails, and the payload shapes printed on success.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::ServiceError;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Error code for any failure; typed service errors keep their own code.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<ServiceError>()
        .map_or("internal", ServiceError::code)
}

/// Pretty-print any serializable payload.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn to_pretty(value: &impl Serialize) -> Result<String> {
    serde_json::to_string_pretty(value).context("JSON serialization failed")
}

/// Result of a start/stop request.
#[derive(Debug, Serialize)]
pub struct LifecycleResult<'a> {
    pub name: &'a str,
    pub status: &'a str,
}

/// Result of `list`.
#[derive(Debug, Serialize)]
pub struct ServiceList<'a> {
    pub services: &'a [String],
}
