//! Integration tests for the JSON API.
//!
//! - Success: `{"ok": true, "data": ...}`
//! - Error: `{"ok": false, "error": {"code": "...", "message": "..."}}`

use std::fs;

use projscan_core::ffi::{run_json, version};
use serde_json::{Value, json};

fn parse(result: &str) -> Value {
    serde_json::from_str(result).expect("envelope is valid JSON")
}

fn error_code(result: &str) -> String {
    let parsed = parse(result);
    assert_eq!(parsed["ok"], false, "expected an error envelope, got: {result}");
    parsed["error"]["code"].as_str().unwrap_or_default().to_string()
}

#[test]
fn given_version_mode_when_running_then_name_and_version_are_returned() {
    let parsed = parse(&run_json("version", "{}"));

    assert_eq!(parsed["ok"], true);
    assert_eq!(parsed["data"]["name"], "projscan");
    assert_eq!(parsed["data"]["version"], version());
}

#[test]
fn given_an_unknown_mode_when_running_then_unknown_mode_is_reported() {
    assert_eq!(error_code(&run_json("lang", "{}")), "unknown_mode");
}

#[test]
fn given_malformed_json_when_running_then_invalid_json_is_reported() {
    assert_eq!(error_code(&run_json("analyze", "{not json")), "invalid_json");
}

#[test]
fn given_non_object_arguments_when_running_then_invalid_settings_is_reported() {
    assert_eq!(error_code(&run_json("analyze", "[1, 2]")), "invalid_settings");
}

#[test]
fn given_a_mistyped_field_when_analyzing_then_invalid_settings_is_reported() {
    let result = run_json("analyze", r#"{"skip_large_files": "yes"}"#);
    assert_eq!(error_code(&result), "invalid_settings");
    assert!(result.contains("skip_large_files"));
}

#[test]
fn given_an_empty_path_when_analyzing_then_invalid_path_is_reported() {
    assert_eq!(error_code(&run_json("analyze", r#"{"path": ""}"#)), "invalid_path");
}

#[test]
fn given_a_missing_directory_when_analyzing_then_data_is_the_error_record() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("gone");
    let args = json!({ "path": missing.display().to_string() }).to_string();

    let parsed = parse(&run_json("analyze", &args));

    assert_eq!(parsed["ok"], true);
    let data = parsed["data"].as_object().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data["project_path"], missing.display().to_string());
    assert!(data["error"].as_str().unwrap().ends_with("is not a valid directory."));
}

#[test]
fn given_a_project_when_analyzing_then_data_is_the_full_report() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("requirements.txt"), "numpy\n").unwrap();
    fs::create_dir(tmp.path().join("vendor")).unwrap();
    fs::write(tmp.path().join("vendor/lib.py"), "eval('1')\n").unwrap();
    let args = json!({
        "path": tmp.path().display().to_string(),
        "prune": ["vendor"],
    })
    .to_string();

    let parsed = parse(&run_json("analyze", &args));

    assert_eq!(parsed["ok"], true, "got: {parsed}");
    let data = &parsed["data"];
    assert_eq!(data["file_structure"]["total_files"], 1);
    assert_eq!(data["requirements"]["requirements_txt"]["missing_versions"], json!(["numpy"]));
    assert_eq!(data["security"]["security_issues"], json!([]));
}
