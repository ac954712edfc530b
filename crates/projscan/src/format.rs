//! Report rendering.

use anyhow::Result;
use projscan_config::OutputFormat;
use projscan_types::{AnalysisOutcome, ManifestReport, ProjectReport};

/// Markdown sections list at most this many rows per table or list.
const MD_ROW_LIMIT: usize = 20;

pub(crate) fn render(outcome: &AnalysisOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(outcome)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Md => Ok(match outcome {
            AnalysisOutcome::Report(report) => render_md(report),
            AnalysisOutcome::Invalid(err) => format!(
                "# projscan report\n\n**Error:** {}\n",
                err.error
            ),
        }),
    }
}

fn render_md(report: &ProjectReport) -> String {
    let mut out = String::new();
    out.push_str("# projscan report\n\n");
    out.push_str(&format!("Project: `{}`\n\n", report.project_path));

    let fs = &report.file_structure;
    out.push_str("## File structure\n\n");
    out.push_str(&format!("- Files: {}\n", fs.total_files));
    out.push_str(&format!("- Total bytes: {}\n", fs.total_size_bytes));
    let unreadable = fs.file_details.iter().filter(|d| d.error.is_some()).count();
    if unreadable > 0 {
        out.push_str(&format!("- Unreadable: {unreadable}\n"));
    }
    out.push('\n');

    out.push_str("## Requirements\n\n");
    push_manifest(&mut out, "requirements.txt", &report.requirements.requirements_txt);
    push_manifest(&mut out, "environment.yml", &report.requirements.environment_yml);
    out.push('\n');

    let docker = &report.docker_setup;
    out.push_str("## Docker setup\n\n");
    out.push_str(&format!("- Dockerfile: {}\n", yes_no(docker.dockerfile_found)));
    out.push_str(&format!(
        "- docker-compose.yml: {}\n",
        yes_no(docker.docker_compose_found)
    ));
    push_list(&mut out, "Issues", &docker.docker_issues);
    out.push('\n');

    let ml = &report.ml_workflow;
    out.push_str("## ML workflow\n\n");
    if ml.ml_folder_found {
        push_inline(&mut out, "Configs", &ml.configs_found);
        push_inline(&mut out, "Scripts", &ml.scripts_found);
        push_inline(&mut out, "Notebooks", &ml.notebooks_found);
        out.push_str(&format!(
            "- Model config valid: {}\n",
            yes_no(ml.model_config_valid)
        ));
        push_list(&mut out, "Validation", &ml.validation_messages);
    } else {
        out.push_str("- No `ml/` folder.\n");
    }
    out.push('\n');

    let stubs = &report.incomplete_logic.incomplete_logic;
    out.push_str("## Incomplete logic\n\n");
    if stubs.is_empty() {
        out.push_str("- No stubs found.\n\n");
    } else {
        out.push_str("|Path|Hits|\n");
        out.push_str("|---|---:|\n");
        for (path, lines) in stubs.iter().take(MD_ROW_LIMIT) {
            out.push_str(&format!("|{}|{}|\n", path, lines.len()));
        }
        if stubs.len() > MD_ROW_LIMIT {
            out.push_str(&format!("|... {} more||\n", stubs.len() - MD_ROW_LIMIT));
        }
        out.push('\n');
    }

    let env = &report.env_file;
    out.push_str("## Env file\n\n");
    if env.env_found {
        out.push_str(&format!("- Variables: {}\n", env.env_vars.len()));
        out.push_str(&format!("- Comments: {}\n", env.comments.len()));
        push_list(&mut out, "Potential secrets", &env.potential_secrets);
    } else {
        out.push_str("- No `.env` file.\n");
    }
    out.push('\n');

    out.push_str("## Security\n\n");
    if report.security.security_issues.is_empty() {
        out.push_str("- No findings.\n");
    } else {
        push_bullets(&mut out, &report.security.security_issues);
    }
    out.push('\n');

    out.push_str("## Duplicates\n\n");
    if report.duplicates.duplicates.is_empty() {
        out.push_str("- No duplicate files.\n");
    } else {
        let groups: Vec<String> = report
            .duplicates
            .duplicates
            .iter()
            .map(|group| {
                let paths: Vec<String> = group.iter().map(|p| format!("`{p}`")).collect();
                paths.join(", ")
            })
            .collect();
        push_bullets(&mut out, &groups);
    }
    out.push('\n');

    let logging = &report.logging_monitoring;
    out.push_str("## Logging and monitoring\n\n");
    out.push_str(&format!("- Logging: {}\n", yes_no(logging.logging_found)));
    out.push_str(&format!("- Monitoring: {}\n", yes_no(logging.monitoring_found)));
    push_list(&mut out, "Logging references", &logging.logging_references);
    push_list(&mut out, "Monitoring references", &logging.monitoring_references);
    out.push('\n');

    let testing = &report.testing;
    out.push_str("## Testing\n\n");
    let frameworks: Vec<String> = [
        ("pytest", testing.pytest_found),
        ("unittest", testing.unittest_found),
        ("nose", testing.nose_found),
        ("tox", testing.tox_found),
    ]
    .iter()
    .filter(|(_, found)| *found)
    .map(|(name, _)| name.to_string())
    .collect();
    push_inline(&mut out, "Frameworks", &frameworks);
    push_inline(&mut out, "Coverage files", &testing.coverage_files);
    out.push_str(&format!("- Cypress: {}", yes_no(testing.cypress_found)));
    if testing.cypress_found {
        out.push_str(&format!(
            " (config: {})",
            yes_no(testing.cypress_config_found)
        ));
    }
    out.push('\n');
    push_list(&mut out, "Test directories", &testing.test_directories);

    out
}

fn push_manifest(out: &mut String, name: &str, manifest: &ManifestReport) {
    if !manifest.found {
        out.push_str(&format!("- `{name}`: not found\n"));
        return;
    }
    out.push_str(&format!(
        "- `{name}`: {} packages, {} without version",
        manifest.packages.len(),
        manifest.missing_versions.len()
    ));
    if !manifest.duplicates.is_empty() {
        out.push_str(&format!(
            ", duplicates: `{}`",
            manifest.duplicates.join("`, `")
        ));
    }
    out.push('\n');
}

fn push_inline(out: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        out.push_str(&format!("- {label}: none\n"));
    } else {
        out.push_str(&format!("- {label}: `{}`\n", items.join("`, `")));
    }
}

fn push_list(out: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("- {label}:\n"));
    for item in items.iter().take(MD_ROW_LIMIT) {
        out.push_str(&format!("  - {item}\n"));
    }
    if items.len() > MD_ROW_LIMIT {
        out.push_str(&format!("  - ... {} more\n", items.len() - MD_ROW_LIMIT));
    }
}

fn push_bullets(out: &mut String, items: &[String]) {
    for item in items.iter().take(MD_ROW_LIMIT) {
        out.push_str(&format!("- {item}\n"));
    }
    if items.len() > MD_ROW_LIMIT {
        out.push_str(&format!("- ... {} more\n", items.len() - MD_ROW_LIMIT));
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
