//! Application services — use-case orchestration.
//!
//! Each service imports only from `crate::domain` and
//! `crate::application::ports`. All I/O is routed through injected port traits.

pub mod lifecycle;
pub mod registry;
pub mod resolver;
