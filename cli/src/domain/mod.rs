//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod definition;
pub mod error;
pub mod runtime;

pub use config::DcConfig;
pub use definition::{ServiceDefinition, definition_path, validate_content, validate_name};
pub use error::ServiceError;
pub use runtime::{ComposeForm, Directive, Runtime, compose_args};
