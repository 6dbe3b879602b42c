//! Service definitions: naming rules and the name → path mapping.
//!
//! Pure functions only. No I/O, no async.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::error::ServiceError;

/// File extension carried by every stored definition.
pub const DEFINITION_EXTENSION: &str = "yml";

/// Names become a single path component, so separators and leading dots
/// are rejected to rule out path traversal (CWE-22).
pub static SERVICE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern — cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{0,127}$").expect("valid regex")
});

/// A named, opaque compose definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDefinition {
    pub name: String,
    pub content: String,
}

/// Validates a service name.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidArgument`] if the name is empty or contains
/// characters that are unsafe in a file name.
pub fn validate_name(name: &str) -> Result<(), ServiceError> {
    if name.is_empty() {
        return Err(ServiceError::InvalidArgument("Name is required".to_string()));
    }
    if !SERVICE_NAME_RE.is_match(name) {
        return Err(ServiceError::InvalidArgument(format!(
            "Invalid service name '{name}': must match {}",
            SERVICE_NAME_RE.as_str()
        )));
    }
    Ok(())
}

/// Validates definition content. Content is opaque; only emptiness is checked.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidArgument`] if the content is empty.
pub fn validate_content(content: &str) -> Result<(), ServiceError> {
    if content.is_empty() {
        return Err(ServiceError::InvalidArgument(
            "Compose content is required".to_string(),
        ));
    }
    Ok(())
}

/// `<root>/<name>.yml`. Callers validate `name` first.
#[must_use]
pub fn definition_path(root: &Path, name: &str) -> PathBuf {
    root.join(format!("{name}.{DEFINITION_EXTENSION}"))
}

/// Inverse of [`definition_path`] for a bare file name. Returns `None` for
/// files that do not carry the definition extension.
#[must_use]
pub fn name_from_file_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(DEFINITION_EXTENSION)
        .and_then(|stem| stem.strip_suffix('.'))
        .filter(|stem| !stem.is_empty())
}
