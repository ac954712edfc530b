use std::path::Path;
use std::sync::LazyLock;

use projscan_content::read_lines_lossy;
use projscan_types::{EnvFileReport, EnvVar};
use regex::Regex;
use tracing::debug;

static ENV_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<key>[A-Za-z_][A-Za-z0-9_]*)\s*=\s*(?P<value>.*)$")
        .expect("valid regex literal")
});

const SENSITIVE_KEY_WORDS: [&str; 2] = ["secret", "token"];

pub fn build_env_file_report(root: &Path) -> EnvFileReport {
    let path = root.join(".env");
    if !path.is_file() {
        return EnvFileReport::default();
    }
    let lines = match read_lines_lossy(&path) {
        Ok(lines) => lines,
        Err(err) => {
            debug!(path = %path.display(), error = %err, ".env unreadable");
            Vec::new()
        }
    };
    EnvFileReport {
        env_found: true,
        ..parse_env(&lines)
    }
}

/// Split `.env` lines into variables and everything else.
///
/// Blank lines, comments and lines that are not `KEY = value` land in
/// `comments`, blank ones as `""`.
pub fn parse_env(lines: &[String]) -> EnvFileReport {
    let mut report = EnvFileReport::default();

    for raw in lines.iter().map(|l| l.trim()) {
        let caps = match ENV_ASSIGNMENT.captures(raw) {
            Some(caps) => caps,
            _ => {
                report.comments.push(raw.to_string());
                continue;
            }
        };

        let name = caps["key"].to_string();
        let value = caps["value"].trim_matches(|c| c == '"' || c == '\'').to_string();
        let lowered = name.to_ascii_lowercase();
        if SENSITIVE_KEY_WORDS.iter().any(|w| lowered.contains(w)) {
            report
                .potential_secrets
                .push(format!("{name} might be sensitive."));
        }
        report.env_vars.push(EnvVar { name, value });
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn quoted_values_are_unwrapped() {
        let report = parse_env(&lines("A=\"x y\"\nB='z'\nC=plain\n"));
        let values: Vec<&str> = report.env_vars.iter().map(|v| v.value.as_str()).collect();
        assert_eq!(values, vec!["x y", "z", "plain"]);
    }

    #[test]
    fn spaces_around_equals_are_allowed() {
        let report = parse_env(&lines("DEBUG = true"));
        assert_eq!(report.env_vars[0].name, "DEBUG");
        assert_eq!(report.env_vars[0].value, "true");
    }

    #[test]
    fn unparseable_lines_are_comments() {
        let report = parse_env(&lines("# note\nexport FOO=bar\n\n"));
        assert!(report.env_vars.is_empty());
        assert_eq!(
            report.comments,
            vec![
                "# note".to_string(),
                "export FOO=bar".to_string(),
                String::new()
            ]
        );
    }

    #[test]
    fn blank_lines_are_kept_as_empty_comments() {
        let report = parse_env(&lines("A=1\n\n# note"));
        assert_eq!(report.env_vars.len(), 1);
        assert_eq!(report.comments, vec![String::new(), "# note".to_string()]);
    }

    #[test]
    fn sensitive_keys_are_flagged_case_insensitively() {
        let report = parse_env(&lines("GitHub_Token=x\nDB_HOST=y\nclient_secret=z\n"));
        assert_eq!(
            report.potential_secrets,
            vec![
                "GitHub_Token might be sensitive.".to_string(),
                "client_secret might be sensitive.".to_string(),
            ]
        );
    }
}
