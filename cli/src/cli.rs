//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, OutputFlags};
use crate::commands;
use crate::infra::YamlConfigStore;

/// Manage compose definitions and bring them up or down
#[derive(Parser)]
#[command(
    name = "dc",
    version,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (the `NO_COLOR` variable is honoured too)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding definition files, relative to the current directory
    #[arg(long, global = true, env = "DC_STORAGE_PATH")]
    pub storage_path: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Bring a service up (detached)
    Start {
        /// Service name
        name: String,
    },

    /// Tear a service down
    Stop {
        /// Service name
        name: String,
    },

    /// Create or overwrite a service definition
    Update(commands::update::UpdateArgs),

    /// Delete a service definition
    Remove {
        /// Service name
        name: String,
    },

    /// Print a service definition
    Show {
        /// Service name
        name: String,
    },

    /// List service definitions
    List,

    /// Show the resolved compose runtime
    Runtime,

    /// Inspect configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if initialization or the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose: _,
            storage_path,
            command,
        } = self;
        let flags = AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            storage_path,
        };
        let config_store = YamlConfigStore::new();
        let app = AppContext::initialize(&flags, &config_store).await?;

        match command {
            Command::Start { name } => commands::start::run(&app, &name).await,
            Command::Stop { name } => commands::stop::run(&app, &name).await,
            Command::Update(args) => commands::update::run(&app, &args),
            Command::Remove { name } => commands::remove::run(&app, &name),
            Command::Show { name } => commands::show::run(&app, &name),
            Command::List => commands::list::run(&app),
            Command::Runtime => commands::runtime::run(&app),
            Command::Config(cmd) => commands::config::run(&app, &cmd, &config_store),
        }
    }
}
