use projscan_content::patterns::{INSECURE_CALL, SECRET_ASSIGNMENT};
use projscan_content::read_text_lossy;
use projscan_types::SecurityReport;
use projscan_walk::FileSet;
use tracing::debug;

/// Hardcoded-secret assignments and `eval(`/`exec(` calls in source files.
pub fn build_security_report(files: &FileSet, source_extensions: &[String]) -> SecurityReport {
    let mut security_issues = Vec::new();

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
            let n = idx + 1;
            if SECRET_ASSIGNMENT.is_match(line) {
                security_issues.push(format!(
                    "{shown} Line {n}: Potential hardcoded secret => {}",
                    line.trim()
                ));
            }
            if INSECURE_CALL.is_match(line) {
                security_issues.push(format!(
                    "{shown} Line {n}: Insecure function usage => {}",
                    line.trim()
                ));
            }
        }
    }

    SecurityReport { security_issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projscan_walk::{WalkOptions, walk};
    use std::fs;

    #[test]
    fn a_line_can_carry_both_findings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("app.py"),
            "token = \"abc\"; eval(token)\nprint('ok')\n",
        )
        .unwrap();

        let set = walk(dir.path(), &WalkOptions::default()).unwrap();
        let report = build_security_report(&set, &["py".to_string()]);
        let shown = dir.path().join("app.py").display().to_string();

        assert_eq!(
            report.security_issues,
            vec![
                format!("{shown} Line 1: Potential hardcoded secret => token = \"abc\"; eval(token)"),
                format!("{shown} Line 1: Insecure function usage => token = \"abc\"; eval(token)"),
            ]
        );
    }

    #[test]
    fn unquoted_assignment_is_not_a_secret() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.py"), "password = os.environ['PW']\n").unwrap();
        let set = walk(dir.path(), &WalkOptions::default()).unwrap();
        assert!(build_security_report(&set, &["py".to_string()])
            .security_issues
            .is_empty());
    }
}
