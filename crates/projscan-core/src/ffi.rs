//! JSON entrypoint for adapters and language bindings.
//!
//! [`run_json`] takes a mode string and JSON arguments and always returns a
//! JSON [`ResponseEnvelope`](crate::error::ResponseEnvelope).
//!
//! ## Strict Parsing
//!
//! - Missing or `null` keys use defaults
//! - Values of the wrong type are `invalid_settings` errors, never silently
//!   replaced by defaults

use serde_json::Value;

use crate::analyze_workflow;
use crate::error::{ProjscanError, ResponseEnvelope};
use projscan_settings::{AnalyzeSettings, DEFAULT_LARGE_FILE_THRESHOLD_MB};
use projscan_types::ToolInfo;

/// Run a projscan operation with JSON arguments, returning JSON output.
///
/// Modes:
/// * `analyze` - args are [`AnalyzeSettings`] fields; `data` is the report, or
///   the `{error, project_path}` record when the path is not a directory
/// * `version` - `data` is `{name, version}`
///
/// ```ignore
/// let out = run_json("analyze", r#"{"path": ".", "prune": [".git"]}"#);
/// // {"ok": true, "data": {"project_path": ".", "file_structure": {...}, ...}}
/// ```
pub fn run_json(mode: &str, args_json: &str) -> String {
    match run_json_inner(mode, args_json) {
        Ok(data) => ResponseEnvelope::success(data).to_json(),
        Err(err) => ResponseEnvelope::error(&err).to_json(),
    }
}

fn run_json_inner(mode: &str, args_json: &str) -> Result<Value, ProjscanError> {
    let args: Value = serde_json::from_str(args_json)?;
    if !args.is_object() {
        return Err(ProjscanError::invalid_field("arguments", "a JSON object"));
    }

    match mode {
        "analyze" => {
            let settings = parse_analyze_settings(&args)?;
            let outcome = analyze_workflow(&settings)?;
            Ok(serde_json::to_value(&outcome)?)
        }
        "version" => Ok(serde_json::to_value(ToolInfo::current())?),
        _ => Err(ProjscanError::unknown_mode(mode)),
    }
}

/// Get the projscan version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// ============================================================================
// Strict parsing helpers
// ============================================================================

fn parse_bool(args: &Value, field: &str, default: bool) -> Result<bool, ProjscanError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v
            .as_bool()
            .ok_or_else(|| ProjscanError::invalid_field(field, "a boolean (true or false)")),
    }
}

fn parse_u64(args: &Value, field: &str, default: u64) -> Result<u64, ProjscanError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v
            .as_u64()
            .ok_or_else(|| ProjscanError::invalid_field(field, "a non-negative integer")),
    }
}

fn parse_string(args: &Value, field: &str, default: &str) -> Result<String, ProjscanError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(v) => v
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ProjscanError::invalid_field(field, "a string")),
    }
}

fn parse_string_array(
    args: &Value,
    field: &str,
    default: Vec<String>,
) -> Result<Vec<String>, ProjscanError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => serde_json::from_value::<Vec<String>>(v.clone())
            .map_err(|_| ProjscanError::invalid_field(field, "an array of strings")),
    }
}

fn parse_analyze_settings(args: &Value) -> Result<AnalyzeSettings, ProjscanError> {
    let defaults = AnalyzeSettings::default();
    Ok(AnalyzeSettings {
        path: parse_string(args, "path", &defaults.path)?,
        prune: parse_string_array(args, "prune", defaults.prune)?,
        skip_large_files: parse_bool(args, "skip_large_files", defaults.skip_large_files)?,
        large_file_threshold_mb: parse_u64(
            args,
            "large_file_threshold_mb",
            DEFAULT_LARGE_FILE_THRESHOLD_MB,
        )?,
        source_extensions: parse_string_array(
            args,
            "source_extensions",
            defaults.source_extensions,
        )?,
    })
}
