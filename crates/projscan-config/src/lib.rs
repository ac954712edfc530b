//! # projscan-config
//!
//! **Tier 4 (Configuration)**
//!
//! Clap definitions for the `projscan` command line and the merge of CLI
//! flags with a `projscan.toml` file into [`AnalyzeSettings`].
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * CLI-over-file precedence rules
//!
//! ## What does NOT belong here
//! * Reading files (the binary loads `projscan.toml`)
//! * Detection logic

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

pub use projscan_settings::{
    AnalyzeSettings, CONFIG_FILE_NAME, ScanConfig, TomlConfig, discover_config,
};

/// `projscan` inspects a project directory and reports its composition:
/// files, manifests, containers, ML assets, stubs, secrets, duplicates,
/// logging and test tooling.
#[derive(Parser, Debug)]
#[command(name = "projscan", version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub scan: CliScanArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Verbose logging on stderr (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Pretty-printed JSON report.
    #[default]
    Json,
    /// Markdown summary, one section per domain.
    Md,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CliScanArgs {
    /// Project directory to inspect. Defaults to "."
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Directory name to prune from the walk. Repeatable or comma-separated.
    ///
    /// Examples:
    ///   --prune node_modules --prune .git
    ///   --prune node_modules,.git,__pycache__
    #[arg(long, value_name = "DIR", value_delimiter = ',')]
    pub prune: Vec<String>,

    /// Keep files above the size threshold out of content checks.
    #[arg(long)]
    pub skip_large_files: bool,

    /// Size threshold in MiB for --skip-large-files [default: 50].
    #[arg(long, value_name = "MB")]
    pub large_file_threshold_mb: Option<u64>,

    /// Source file extension for line scanners. Repeatable [default: py].
    #[arg(long = "ext", value_name = "EXT", value_delimiter = ',')]
    pub ext: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write the report to FILE instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file to use instead of `<PATH>/projscan.toml`.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CliScanArgs {
    pub fn root(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Merge CLI flags over an optional config file over built-in defaults.
///
/// `--skip-large-files` can only switch skipping on; a config file that
/// enables it cannot be overridden from the command line.
pub fn resolve_settings(args: &CliScanArgs, file: Option<&TomlConfig>) -> AnalyzeSettings {
    let mut settings = AnalyzeSettings::for_path(args.root().display().to_string());
    if let Some(file) = file {
        settings.apply_config(&file.scan);
    }

    if !args.prune.is_empty() {
        settings.prune = args.prune.clone();
    }
    settings.skip_large_files |= args.skip_large_files;
    if let Some(mb) = args.large_file_threshold_mb {
        settings.large_file_threshold_mb = mb;
    }
    if !args.ext.is_empty() {
        settings.source_extensions = args.ext.clone();
    }
    settings
}
