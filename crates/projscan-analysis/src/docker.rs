use std::path::Path;
use std::sync::LazyLock;

use projscan_content::patterns::PLACEHOLDER;
use projscan_content::read_text_lossy;
use projscan_types::DockerReport;
use regex::Regex;

static FROM_INSTRUCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*FROM\s").expect("valid regex literal"));

pub fn build_docker_report(root: &Path) -> DockerReport {
    let mut report = DockerReport::default();

    let dockerfile = root.join("Dockerfile");
    if dockerfile.is_file() {
        report.dockerfile_found = true;
        report.docker_issues.extend(scan_dockerfile(&dockerfile));
    }

    let compose = root.join("docker-compose.yml");
    if compose.is_file() {
        report.docker_compose_found = true;
        report.docker_issues.extend(scan_compose(&compose));
    }

    report
}

fn scan_dockerfile(path: &Path) -> Vec<String> {
    let text = match read_text_lossy(path) {
        Ok(text) => text,
        Err(err) => return vec![format!("Error reading Dockerfile: {err}")],
    };
    let shown = path.display();
    let mut issues = Vec::new();
    let mut found_from = false;

    for (idx, line) in text.lines().enumerate() {
        let n = idx + 1;
        if FROM_INSTRUCTION.is_match(line) {
            found_from = true;
        }
        if PLACEHOLDER.is_match(line) {
            issues.push(format!(
                "{shown} line {n}: Found placeholder => {}",
                line.trim()
            ));
        }
        if line.contains("apt-get update") && !line.contains("&&") {
            issues.push(format!(
                "{shown} line {n}: 'apt-get update' not chained with 'apt-get upgrade' or similar best practice."
            ));
        }
    }

    if !found_from {
        issues.push(format!(
            "{shown}: No 'FROM' instruction found (best practice is to define base image)."
        ));
    }
    issues
}

fn scan_compose(path: &Path) -> Vec<String> {
    let text = match read_text_lossy(path) {
        Ok(text) => text,
        Err(err) => return vec![format!("Error reading docker-compose.yml: {err}")],
    };
    let shown = path.display();
    text.lines()
        .enumerate()
        .filter(|(_, line)| PLACEHOLDER.is_match(line))
        .map(|(idx, line)| {
            format!("{shown} line {}: Found placeholder => {}", idx + 1, line.trim())
        })
        .collect()
}
