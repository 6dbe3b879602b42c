//! dc - manage compose definitions and drive docker compose

use std::process::ExitCode;

use clap::Parser;
use console::Term;
use dc_cli::cli::Cli;
use dc_cli::output::{json, no_color_env};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let ansi = !cli.no_color && !no_color_env() && Term::stderr().is_term();
    init_tracing(cli.verbose, ansi);

    let json_mode = cli.json;
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            report_error(&e, json_mode);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays clean for `show` and `--json`.
fn init_tracing(verbose: bool, ansi: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .init();
}

fn report_error(e: &anyhow::Error, json_mode: bool) {
    let message = format!("{e:#}");
    if json_mode {
        if let Ok(body) = json::format_error(&message, json::error_code(e)) {
            println!("{body}");
            return;
        }
    }
    eprintln!("Error: {message}");
}
