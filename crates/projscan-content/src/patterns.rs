//! Compiled line patterns shared across detectors.
//!
//! Matching is purely textual: a hit inside a comment or string literal is
//! indistinguishable from real code.

use std::sync::LazyLock;

use regex::Regex;

/// `TODO` or `PLACEHOLDER`, any case.
pub static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(TODO|PLACEHOLDER)").expect("valid regex literal"));

/// `<name containing a secret-ish word> = "<quoted>"`.
pub static SECRET_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:api_key|secret|token|password|private_key|aws_access_key_id)\s*=\s*['"](.+?)['"]"#,
    )
    .expect("valid regex literal")
});

/// `eval(` or `exec(`.
pub static INSECURE_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\beval\s*\(|\bexec\s*\(").expect("valid regex literal"));

pub static TODO_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bTODO\b").expect("valid regex literal"));

pub static PASS_STATEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bpass\b").expect("valid regex literal"));

pub static NOT_IMPLEMENTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bNotImplementedError\b").expect("valid regex literal"));

/// `logging.basicConfig` / `logging.getLogger`.
pub static LOGGING_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\blogging\.(basicConfig|getLogger)\b").expect("valid regex literal")
});

pub static SENTRY_USAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bimport\s+sentry_sdk\b|\bsentry_sdk\.init\b").expect("valid regex literal")
});

pub static DATADOG_USAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bimport\s+datadog\b|\bimport\s+ddtrace\b").expect("valid regex literal")
});

pub fn incomplete_markers() -> [&'static Regex; 3] {
    [&*TODO_MARKER, &*PASS_STATEMENT, &*NOT_IMPLEMENTED]
}

pub fn monitoring_markers() -> [&'static Regex; 2] {
    [&*SENTRY_USAGE, &*DATADOG_USAGE]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_case_insensitive() {
        assert!(PLACEHOLDER.is_match("# todo: fill in"));
        assert!(PLACEHOLDER.is_match("image: PLACEHOLDER"));
        assert!(!PLACEHOLDER.is_match("FROM python:3.11"));
    }

    #[test]
    fn secret_assignment_needs_a_quoted_value() {
        assert!(SECRET_ASSIGNMENT.is_match(r#"password = "hunter2""#));
        assert!(SECRET_ASSIGNMENT.is_match("API_KEY='abc'"));
        assert!(SECRET_ASSIGNMENT.is_match(r#"db_password="x""#));
        assert!(!SECRET_ASSIGNMENT.is_match("password = get_password()"));
    }

    #[test]
    fn insecure_call_matches_eval_and_exec() {
        assert!(INSECURE_CALL.is_match("eval(user_input)"));
        assert!(INSECURE_CALL.is_match("exec (code)"));
        assert!(!INSECURE_CALL.is_match("evaluate(x)"));
        assert!(!INSECURE_CALL.is_match("executor.run()"));
    }

    #[test]
    fn incomplete_markers_use_word_boundaries() {
        let [todo, pass, not_impl] = incomplete_markers();
        assert!(todo.is_match("# TODO later"));
        assert!(!todo.is_match("TODOS"));
        assert!(pass.is_match("    pass"));
        assert!(!pass.is_match("password = 1"));
        assert!(not_impl.is_match("raise NotImplementedError"));
    }

    #[test]
    fn monitoring_markers_cover_sentry_and_datadog() {
        let [sentry, datadog] = monitoring_markers();
        assert!(sentry.is_match("import sentry_sdk"));
        assert!(sentry.is_match("sentry_sdk.init(dsn=DSN)"));
        assert!(datadog.is_match("import ddtrace"));
        assert!(datadog.is_match("import datadog"));
        assert!(!datadog.is_match("import datadoggy"));
    }

    #[test]
    fn logging_call_matches_config_and_logger() {
        assert!(LOGGING_CALL.is_match("logging.basicConfig(level=logging.INFO)"));
        assert!(LOGGING_CALL.is_match("log = logging.getLogger(__name__)"));
        assert!(!LOGGING_CALL.is_match("logging.info('x')"));
    }
}
