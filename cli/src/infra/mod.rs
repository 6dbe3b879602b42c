//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution,
//! definition storage, and configuration loading.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod command_runner;
pub mod config;
pub mod definition_store;

pub use command_runner::TokioCommandRunner;
pub use config::YamlConfigStore;
pub use definition_store::FsDefinitionStore;
