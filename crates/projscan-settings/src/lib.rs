//! # projscan-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free settings types for the analysis layer, plus the
//! `projscan.toml` file schema. These types mirror CLI arguments without
//! Clap, so library consumers and the JSON entry point can build them.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * Default values
//! * Config file parsing
//!
//! ## What does NOT belong here
//! * Clap parsing (use projscan-config)
//! * Detection logic

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the optional per-project config file.
pub const CONFIG_FILE_NAME: &str = "projscan.toml";

pub const DEFAULT_LARGE_FILE_THRESHOLD_MB: u64 = 50;

/// Settings for one `analyze` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeSettings {
    /// Project root to inspect.
    #[serde(default = "default_path")]
    pub path: String,

    /// Directory names pruned from the walk (e.g. `node_modules`, `.git`).
    #[serde(default)]
    pub prune: Vec<String>,

    /// Keep files above the threshold out of content-reading detectors.
    #[serde(default)]
    pub skip_large_files: bool,

    #[serde(default = "default_threshold_mb")]
    pub large_file_threshold_mb: u64,

    /// Extensions treated as source code by the line-scanning detectors.
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
}

impl Default for AnalyzeSettings {
    fn default() -> Self {
        Self {
            path: default_path(),
            prune: Vec::new(),
            skip_large_files: false,
            large_file_threshold_mb: DEFAULT_LARGE_FILE_THRESHOLD_MB,
            source_extensions: default_source_extensions(),
        }
    }
}

impl AnalyzeSettings {
    pub fn for_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Byte ceiling for content reads, set only when large files are skipped.
    pub fn max_file_bytes(&self) -> Option<u64> {
        if self.skip_large_files {
            Some(self.large_file_threshold_mb.saturating_mul(1024 * 1024))
        } else {
            None
        }
    }

    /// Overlay values present in a config file.
    pub fn apply_config(&mut self, scan: &ScanConfig) {
        if let Some(prune) = &scan.prune {
            self.prune = prune.clone();
        }
        if let Some(skip) = scan.skip_large_files {
            self.skip_large_files = skip;
        }
        if let Some(mb) = scan.large_file_threshold_mb {
            self.large_file_threshold_mb = mb;
        }
        if let Some(exts) = &scan.source_extensions {
            self.source_extensions = exts.clone();
        }
    }
}

fn default_path() -> String {
    ".".to_string()
}

fn default_threshold_mb() -> u64 {
    DEFAULT_LARGE_FILE_THRESHOLD_MB
}

fn default_source_extensions() -> Vec<String> {
    vec!["py".to_string()]
}

/// Root of `projscan.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub scan: ScanConfig,
}

/// `[scan]` table. Every key is optional; absent keys leave defaults alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    pub prune: Option<Vec<String>>,
    pub skip_large_files: Option<bool>,
    pub large_file_threshold_mb: Option<u64>,
    pub source_extensions: Option<Vec<String>>,
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

/// `<root>/projscan.toml` if it exists.
pub fn discover_config(root: &Path) -> Option<PathBuf> {
    let candidate = root.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}
