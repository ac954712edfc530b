//! # projscan
//!
//! **CLI Binary**
//!
//! Entry point for the `projscan` command-line application.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Initialise logging
//! * Load `projscan.toml`
//! * Run the scan and render the report
//! * Map errors to hints and exit codes
//!
//! This crate should contain minimal business logic.

mod config;
mod error_hints;
mod format;
mod logging;

use std::io::Write;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use projscan_config::{self as cli, Cli, Commands};
use tracing::info;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
/// The scan root is missing or not a directory.
pub const EXIT_INVALID_ROOT: i32 = 2;

/// Run the CLI and return the process exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(&cli.global);

    match cli.command {
        Some(Commands::Completions(args)) => {
            write_completions(args.shell);
            Ok(EXIT_SUCCESS)
        }
        None => scan(&cli.scan),
    }
}

/// Render an error with its context chain and any matching hints.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}

fn scan(args: &cli::CliScanArgs) -> Result<i32> {
    let file = config::load_scan_config(args)?;
    let settings = cli::resolve_settings(args, file.as_ref());

    let outcome = projscan_core::analyze_workflow(&settings)?;
    let rendered = format::render(&outcome, args.format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("Failed to write report to stdout")?;
        }
    }

    if outcome.is_invalid() {
        Ok(EXIT_INVALID_ROOT)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn write_completions(shell: cli::Shell) {
    use clap_complete::generate;
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let shell = match shell {
        cli::Shell::Bash => clap_complete::Shell::Bash,
        cli::Shell::Elvish => clap_complete::Shell::Elvish,
        cli::Shell::Fish => clap_complete::Shell::Fish,
        cli::Shell::Powershell => clap_complete::Shell::PowerShell,
        cli::Shell::Zsh => clap_complete::Shell::Zsh,
    };
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
