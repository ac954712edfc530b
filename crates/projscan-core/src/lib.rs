//! # projscan-core
//!
//! This crate is the **primary library interface** for `projscan`.
//! It turns [`AnalyzeSettings`] into a scan request, runs every detector over
//! one walk of the project, and returns the consolidated report.
//!
//! If you are embedding `projscan` into another Rust application, depend on
//! this crate and `projscan-types`. Language bindings and other adapters
//! should go through [`ffi::run_json`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use projscan_core::analyze_workflow;
//! use projscan_core::settings::AnalyzeSettings;
//!
//! let settings = AnalyzeSettings {
//!     prune: vec![".git".to_string(), "node_modules".to_string()],
//!     ..AnalyzeSettings::for_path("path/to/project")
//! };
//! let outcome = analyze_workflow(&settings).expect("valid settings");
//! if let Some(report) = outcome.report() {
//!     println!("{} files", report.file_structure.total_files);
//! }
//! ```

pub mod error;
pub mod ffi;

use std::path::Path;

use tracing::debug;

pub use projscan_settings as settings;
pub use projscan_types as types;

use error::ProjscanError;
use projscan_analysis::AnalysisRequest;
use projscan_settings::AnalyzeSettings;
use projscan_types::AnalysisOutcome;

/// Runs the full scan described by `settings`.
///
/// Settings that cannot describe a scan (empty path, blank extension, a prune
/// entry containing a path separator) are rejected. A path that simply is not
/// a directory is not an error: it yields [`AnalysisOutcome::Invalid`].
pub fn analyze_workflow(settings: &AnalyzeSettings) -> Result<AnalysisOutcome, ProjscanError> {
    let req = analysis_request(settings)?;
    debug!(
        path = %settings.path,
        prune = ?req.prune,
        max_file_bytes = ?req.max_file_bytes,
        "analyze request"
    );
    Ok(projscan_analysis::analyze(Path::new(&settings.path), &req))
}

/// Validate settings and translate them into an analysis request.
pub fn analysis_request(settings: &AnalyzeSettings) -> Result<AnalysisRequest, ProjscanError> {
    if settings.path.trim().is_empty() {
        return Err(ProjscanError::invalid_path(&settings.path, "path is empty"));
    }

    for name in &settings.prune {
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(ProjscanError::invalid_field(
                "prune",
                "directory names without path separators",
            ));
        }
    }

    let source_extensions: Vec<String> = settings
        .source_extensions
        .iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_string())
        .collect();
    if source_extensions.iter().any(String::is_empty) {
        return Err(ProjscanError::invalid_field(
            "source_extensions",
            "non-empty extensions such as \"py\"",
        ));
    }

    Ok(AnalysisRequest {
        prune: settings.prune.clone(),
        max_file_bytes: settings.max_file_bytes(),
        source_extensions,
    })
}
