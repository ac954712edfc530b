use std::path::Path;

use projscan_content::read_text_lossy;
use projscan_types::TestingReport;
use projscan_walk::FileSet;
use tracing::debug;

const COVERAGE_ARTIFACTS: [&str; 4] = ["coverage.xml", ".coveragerc", "coverage", "coverage-report"];
const CYPRESS_CONFIGS: [&str; 2] = ["cypress.json", "cypress.config.js"];

/// Test-tooling signals: framework imports, coverage artifacts, Cypress and
/// `tests` directories.
///
/// Framework flags are substring checks over whole files, so a mention in a
/// string literal counts.
pub fn build_testing_report(
    root: &Path,
    files: &FileSet,
    source_extensions: &[String],
) -> TestingReport {
    let mut report = TestingReport::default();

    if files.has_dir("cypress") {
        report.cypress_found = true;
        report.cypress_config_found = CYPRESS_CONFIGS.iter().any(|c| root.join(c).is_file());
    }

    report.coverage_files = COVERAGE_ARTIFACTS
        .iter()
        .filter(|name| root.join(name).exists())
        .map(|name| name.to_string())
        .collect();

    report.test_directories = files
        .dirs
        .iter()
        .filter(|dir| dir.file_name().is_some_and(|n| n == "tests"))
        .map(|dir| dir.display().to_string())
        .collect();

    for file in files.with_extension(source_extensions) {
        let text = match read_text_lossy(&file.path) {
            Ok(text) => text,
            Err(err) => {
                debug!(path = %file.path.display(), error = %err, "skipping unreadable file");
                continue;
            }
        };
        report.pytest_found |= text.contains("import pytest");
        report.unittest_found |= imports(&text, "unittest");
        report.nose_found |= imports(&text, "nose");
        report.tox_found |= imports(&text, "tox");
    }

    report
}

fn imports(text: &str, module: &str) -> bool {
    text.contains(&format!("import {module}")) || text.contains(&format!("from {module}"))
}
