//! Compose runtime resolution and argument construction.
//!
//! Pure functions only. The resolver service decides which [`ComposeForm`]
//! is usable; everything here is data in, data out.

use serde::Serialize;

/// One invocation form of the orchestration tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComposeForm {
    /// `docker compose` (CLI plugin).
    Plugin,
    /// `docker-compose` (legacy standalone binary).
    Standalone,
}

impl ComposeForm {
    /// Probe order: first success wins.
    pub const PREFERENCE: [Self; 2] = [Self::Plugin, Self::Standalone];

    /// Program to spawn.
    #[must_use]
    pub fn binary(self) -> &'static str {
        match self {
            Self::Plugin => "docker",
            Self::Standalone => "docker-compose",
        }
    }

    /// Fixed leading arguments.
    #[must_use]
    pub fn base_args(self) -> &'static [&'static str] {
        match self {
            Self::Plugin => &["compose"],
            Self::Standalone => &[],
        }
    }

    /// Side-effect-free capability check: `<binary> <base args> version`.
    #[must_use]
    pub fn probe_args(self) -> Vec<&'static str> {
        let mut args = self.base_args().to_vec();
        args.push("version");
        args
    }
}

/// The fixed resolution chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "form", rename_all = "snake_case")]
pub enum Runtime {
    Available(ComposeForm),
    /// No usable form was found. Every lifecycle call fails without spawning.
    Unavailable,
}

impl Runtime {
    /// Human-readable command prefix, e.g. `docker compose`.
    #[must_use]
    pub fn display_command(&self) -> String {
        match self {
            Self::Available(form) => std::iter::once(form.binary())
                .chain(form.base_args().iter().copied())
                .collect::<Vec<_>>()
                .join(" "),
            Self::Unavailable => "unavailable".to_string(),
        }
    }
}

/// Message carried by `ExecutionFailed` when no runtime was resolved.
pub const RUNTIME_UNAVAILABLE: &str =
    "No compose runtime found: neither 'docker compose' nor 'docker-compose' is usable";

/// Lifecycle directive passed to the orchestration tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `up -d`: bring the stack up detached.
    Up,
    /// `down`: tear the stack down synchronously.
    Down,
}

impl Directive {
    fn args(self) -> &'static [&'static str] {
        match self {
            Self::Up => &["up", "-d"],
            Self::Down => &["down"],
        }
    }
}

/// `base args ++ ["-f", path] ++ directive args`.
#[must_use]
pub fn compose_args(form: ComposeForm, file: &str, directive: Directive) -> Vec<String> {
    form.base_args()
        .iter()
        .copied()
        .chain(["-f", file])
        .chain(directive.args().iter().copied())
        .map(str::to_string)
        .collect()
}
