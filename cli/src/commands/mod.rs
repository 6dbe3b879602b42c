//! Command implementations

pub mod config;
pub mod list;
pub mod remove;
pub mod runtime;
pub mod show;
pub mod start;
pub mod stop;
pub mod update;
