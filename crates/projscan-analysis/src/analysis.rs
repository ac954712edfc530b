use std::path::Path;

use projscan_types::{AnalysisOutcome, ErrorReport, ProjectReport};
use projscan_walk::{FileSet, WalkOptions};
use tracing::{debug, info, warn};

use crate::{
    build_docker_report, build_duplicates_report, build_env_file_report,
    build_file_structure_report, build_incomplete_logic_report, build_logging_report,
    build_ml_report, build_requirements_report, build_security_report, build_testing_report,
};

/// Knobs for one scan. All of them are applied inside the single walk or by
/// the detectors that read file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Directory names pruned wherever they occur below the root.
    pub prune: Vec<String>,
    /// Files larger than this stay in the inventory but are never opened.
    pub max_file_bytes: Option<u64>,
    /// Extensions (without dot) treated as source code.
    pub source_extensions: Vec<String>,
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self {
            prune: Vec::new(),
            max_file_bytes: None,
            source_extensions: vec!["py".to_string()],
        }
    }
}

impl AnalysisRequest {
    fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            prune: self.prune.clone(),
            max_file_bytes: self.max_file_bytes,
        }
    }
}

/// Scan `root` and return the consolidated report.
///
/// A root that is not a directory short-circuits to the error record before
/// any detector runs. Nothing else is fatal.
pub fn analyze(root: &Path, req: &AnalysisRequest) -> AnalysisOutcome {
    let project_path = root.display().to_string();
    if !root.is_dir() {
        info!(path = %project_path, "not a directory, skipping scan");
        return AnalysisOutcome::Invalid(ErrorReport::not_a_directory(&project_path));
    }

    let files = match projscan_walk::walk(root, &req.walk_options()) {
        Ok(files) => files,
        Err(err) => {
            warn!(path = %project_path, error = %err, "walk failed, continuing with no files");
            FileSet::empty(root)
        }
    };
    info!(
        path = %project_path,
        files = files.files.len(),
        dirs = files.dirs.len(),
        "walk complete"
    );

    let report = analyze_files(&files, req);
    info!(path = %project_path, "scan complete");
    AnalysisOutcome::Report(Box::new(report))
}

/// Run every detector, in declared order, over an already-walked tree.
pub fn analyze_files(files: &FileSet, req: &AnalysisRequest) -> ProjectReport {
    let root = files.root.as_path();
    let exts = req.source_extensions.as_slice();

    let file_structure = build_file_structure_report(files);
    debug!(total = file_structure.total_files, "file structure");
    let requirements = build_requirements_report(root);
    let docker_setup = build_docker_report(root);
    let ml_workflow = build_ml_report(files, exts);
    let incomplete_logic = build_incomplete_logic_report(files, exts);
    let env_file = build_env_file_report(root);
    let security = build_security_report(files, exts);
    debug!(issues = security.security_issues.len(), "security");
    let duplicates = build_duplicates_report(files);
    debug!(groups = duplicates.duplicates.len(), "duplicates");
    let logging_monitoring = build_logging_report(files, exts);
    let testing = build_testing_report(root, files, exts);

    ProjectReport {
        project_path: root.display().to_string(),
        file_structure,
        requirements,
        docker_setup,
        ml_workflow,
        incomplete_logic,
        env_file,
        security,
        duplicates,
        logging_monitoring,
        testing,
    }
}
