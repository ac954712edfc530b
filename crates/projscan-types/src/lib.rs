//! # projscan-types
//!
//! **Tier 0 (Report Contract)**
//!
//! Pure data structures for detector results and the consolidated report.
//! No I/O or business logic.
//!
//! ## What belongs here
//! * One result type per detector
//! * The consolidated report and the invalid-root error record
//! * Stable JSON key names
//!
//! ## What does NOT belong here
//! * Detection logic (use projscan-analysis)
//! * Rendering (use the projscan CLI)
//! * File I/O operations

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Keys of the consolidated report, in the order detectors run.
pub const REPORT_KEYS: [&str; 11] = [
    "project_path",
    "file_structure",
    "requirements",
    "docker_setup",
    "ml_workflow",
    "incomplete_logic",
    "env_file",
    "security",
    "duplicates",
    "logging_monitoring",
    "testing",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "projscan".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Result of a single `analyze` call.
///
/// Serialized untagged: a successful scan is the bare report, an invalid root
/// is the bare two-key error record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Report(Box<ProjectReport>),
    Invalid(ErrorReport),
}

impl AnalysisOutcome {
    pub fn is_invalid(&self) -> bool {
        matches!(self, AnalysisOutcome::Invalid(_))
    }

    pub fn report(&self) -> Option<&ProjectReport> {
        match self {
            AnalysisOutcome::Report(report) => Some(report),
            AnalysisOutcome::Invalid(_) => None,
        }
    }

    pub fn project_path(&self) -> &str {
        match self {
            AnalysisOutcome::Report(report) => &report.project_path,
            AnalysisOutcome::Invalid(err) => &err.project_path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
    pub project_path: String,
}

impl ErrorReport {
    pub fn not_a_directory(project_path: &str) -> Self {
        Self {
            error: format!("Provided path '{}' is not a valid directory.", project_path),
            project_path: project_path.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectReport {
    pub project_path: String,
    pub file_structure: FileStructureReport,
    pub requirements: RequirementsReport,
    pub docker_setup: DockerReport,
    pub ml_workflow: MlWorkflowReport,
    pub incomplete_logic: IncompleteLogicReport,
    pub env_file: EnvFileReport,
    pub security: SecurityReport,
    pub duplicates: DuplicatesReport,
    pub logging_monitoring: LoggingReport,
    pub testing: TestingReport,
}

// --------------
// File structure
// --------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStructureReport {
    pub total_files: usize,
    pub total_size_bytes: u64,
    pub file_details: Vec<FileDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDetail {
    pub path: String,
    /// `None` when the size could not be read; `error` then says why.
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ------------
// Requirements
// ------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementsReport {
    pub requirements_txt: ManifestReport,
    pub environment_yml: ManifestReport,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestReport {
    pub found: bool,
    pub packages: Vec<PackageSpec>,
    pub missing_versions: Vec<String>,
    pub duplicates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSpec {
    pub name: String,
    pub specifier: Option<String>,
    pub version: Option<String>,
}

// ------
// Docker
// ------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerReport {
    pub dockerfile_found: bool,
    pub docker_compose_found: bool,
    pub docker_issues: Vec<String>,
}

// -----------
// ML workflow
// -----------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MlWorkflowReport {
    pub ml_folder_found: bool,
    pub configs_found: Vec<String>,
    pub scripts_found: Vec<String>,
    pub notebooks_found: Vec<String>,
    pub model_config_valid: bool,
    pub validation_messages: Vec<String>,
}

impl Default for MlWorkflowReport {
    fn default() -> Self {
        Self {
            ml_folder_found: false,
            configs_found: Vec::new(),
            scripts_found: Vec::new(),
            notebooks_found: Vec::new(),
            model_config_valid: true,
            validation_messages: Vec::new(),
        }
    }
}

// ----------------
// Incomplete logic
// ----------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncompleteLogicReport {
    pub incomplete_logic: BTreeMap<String, Vec<String>>,
}

// --------
// Env file
// --------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvFileReport {
    pub env_found: bool,
    pub env_vars: Vec<EnvVar>,
    pub comments: Vec<String>,
    pub potential_secrets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

// --------
// Security
// --------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityReport {
    pub security_issues: Vec<String>,
}

// ----------
// Duplicates
// ----------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicatesReport {
    pub duplicates: Vec<Vec<String>>,
}

// ----------------------
// Logging and monitoring
// ----------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingReport {
    pub logging_found: bool,
    pub logging_references: Vec<String>,
    pub monitoring_found: bool,
    pub monitoring_references: Vec<String>,
}

// -------
// Testing
// -------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestingReport {
    pub pytest_found: bool,
    pub unittest_found: bool,
    pub nose_found: bool,
    pub tox_found: bool,
    pub coverage_files: Vec<String>,
    pub cypress_found: bool,
    pub cypress_config_found: bool,
    pub test_directories: Vec<String>,
}
