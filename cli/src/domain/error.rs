//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

/// Errors surfaced by definition and lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Missing or malformed caller input. Never retried.
    #[error("{0}")]
    InvalidArgument(String),

    /// The named definition does not exist.
    #[error("Service '{0}' not found")]
    NotFound(String),

    /// The orchestration tool ran and exited non-zero, or no tool is available.
    /// Carries the tool's diagnostic output verbatim.
    #[error("{0}")]
    ExecutionFailed(String),
}

impl ServiceError {
    /// Stable machine-readable code used in JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::NotFound(_) => "not_found",
            Self::ExecutionFailed(_) => "execution_failed",
        }
    }
}
