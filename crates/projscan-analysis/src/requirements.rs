use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use projscan_content::read_lines_lossy;
use projscan_types::{ManifestReport, PackageSpec, RequirementsReport};
use regex::Regex;
use tracing::debug;

static REQUIREMENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<name>[A-Za-z0-9_\-.]+)(?P<specifier>==|>=|<=|~=|!=|>|<)?(?P<version>[0-9A-Za-z.\-]*)$",
    )
    .expect("valid regex literal")
});

pub fn build_requirements_report(root: &Path) -> RequirementsReport {
    RequirementsReport {
        requirements_txt: load_manifest(&root.join("requirements.txt"), parse_requirements_txt),
        environment_yml: load_manifest(&root.join("environment.yml"), parse_environment_yml),
    }
}

fn load_manifest(path: &Path, parse: fn(&[String]) -> ManifestReport) -> ManifestReport {
    if !path.is_file() {
        return ManifestReport::default();
    }
    let lines = match read_lines_lossy(path) {
        Ok(lines) => lines,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "manifest unreadable");
            Vec::new()
        }
    };
    ManifestReport {
        found: true,
        ..parse(&lines)
    }
}

/// Parse one requirement line.
///
/// A line outside the `name[specifier]version` grammar is kept whole as the
/// name, with no specifier or version.
pub fn parse_requirement(line: &str) -> PackageSpec {
    match REQUIREMENT_LINE.captures(line) {
        Some(caps) => PackageSpec {
            name: caps["name"].to_string(),
            specifier: caps.name("specifier").map(|m| m.as_str().to_string()),
            version: caps
                .name("version")
                .map(|m| m.as_str())
                .filter(|v| !v.is_empty())
                .map(str::to_string),
        },
        None => PackageSpec {
            name: line.to_string(),
            specifier: None,
            version: None,
        },
    }
}

/// Parse trimmed `requirements.txt` lines. Blank lines and `#` comments are skipped.
pub fn parse_requirements_txt(lines: &[String]) -> ManifestReport {
    summarize(
        lines
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty() && !l.starts_with('#')),
    )
}

/// Parse the `- item` entries following `dependencies:` in an `environment.yml`.
///
/// The nested `pip:` entry itself is skipped. Its indented children are read
/// like any other `- item` line.
pub fn parse_environment_yml(lines: &[String]) -> ManifestReport {
    let mut in_deps = false;
    let mut items: Vec<&str> = Vec::new();
    for line in lines.iter().map(|l| l.trim()) {
        if line.to_ascii_lowercase().starts_with("dependencies:") {
            in_deps = true;
            continue;
        }
        if !in_deps {
            continue;
        }
        if let Some(item) = line.strip_prefix("- ") {
            let item = item.trim();
            if item.starts_with("pip:") {
                continue;
            }
            items.push(item);
        }
    }
    summarize(items.into_iter())
}

fn summarize<'a>(lines: impl Iterator<Item = &'a str>) -> ManifestReport {
    let mut packages = Vec::new();
    let mut missing_versions = Vec::new();
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for line in lines {
        let spec = parse_requirement(line);
        if spec.version.is_none() {
            missing_versions.push(line.to_string());
        }
        let count = counts.entry(spec.name.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(spec.name.clone());
        }
        *count += 1;
        packages.push(spec);
    }

    let duplicates = first_seen
        .into_iter()
        .filter(|name| counts.get(name).copied().unwrap_or(0) > 1)
        .collect();

    ManifestReport {
        found: false,
        packages,
        missing_versions,
        duplicates,
    }
}
