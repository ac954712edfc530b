use projscan_content::patterns::{LOGGING_CALL, monitoring_markers};
use projscan_content::read_text_lossy;
use projscan_types::LoggingReport;
use projscan_walk::FileSet;
use tracing::debug;

/// Logging setup calls and Sentry/Datadog references in source files.
pub fn build_logging_report(files: &FileSet, source_extensions: &[String]) -> LoggingReport {
    let monitoring = monitoring_markers();
    let mut logging_references = Vec::new();
    let mut monitoring_references = Vec::new();

    for file in files.with_extension(source_extensions) {
        let text = match read_text_lossy(&file.path) {
            Ok(text) => text,
            Err(err) => {
                debug!(path = %file.path.display(), error = %err, "skipping unreadable file");
                continue;
            }
        };
        let shown = file.display_path();
        for (idx, line) in text.lines().enumerate() {
            let reference = || format!("{shown}:{} => {}", idx + 1, line.trim());
            if LOGGING_CALL.is_match(line) {
                logging_references.push(reference());
            }
            if monitoring.iter().any(|re| re.is_match(line)) {
                monitoring_references.push(reference());
            }
        }
    }

    LoggingReport {
        logging_found: !logging_references.is_empty(),
        logging_references,
        monitoring_found: !monitoring_references.is_empty(),
        monitoring_references,
    }
}
