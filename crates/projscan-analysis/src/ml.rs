use std::path::Path;

use projscan_content::read_text_lossy;
use projscan_types::MlWorkflowReport;
use projscan_walk::{FileSet, list_dir_names};
use serde_json::Value;

const MODEL_CONFIG: &str = "model_config.json";
const DATASET_CONFIG: &str = "dataset_config.json";
const REQUIRED_MODEL_KEYS: [&str; 2] = ["model_type", "hyperparameters"];

/// Inspect the `ml/` subtree: config presence, scripts, notebooks and
/// `model_config.json` validity.
///
/// Only directories the walk visited count, so pruned ones read as absent.
pub fn build_ml_report(files: &FileSet, source_extensions: &[String]) -> MlWorkflowReport {
    let mut report = MlWorkflowReport::default();
    if !files.has_dir("ml") {
        return report;
    }
    report.ml_folder_found = true;
    let ml = files.root.join("ml");

    if files.has_dir("ml/config") {
        let config = ml.join("config");
        let model_config = config.join(MODEL_CONFIG);
        if model_config.is_file() {
            report.configs_found.push(MODEL_CONFIG.to_string());
            let messages = validate_model_config(&model_config);
            report.model_config_valid = messages.is_empty();
            report.validation_messages = messages;
        }
        if config.join(DATASET_CONFIG).is_file() {
            report.configs_found.push(DATASET_CONFIG.to_string());
        }
    }

    if files.has_dir("ml/scripts") {
        report.scripts_found = list_dir_names(&ml.join("scripts"))
            .into_iter()
            .filter(|name| has_any_extension(name, source_extensions))
            .collect();
    }
    if files.has_dir("ml/notebooks") {
        report.notebooks_found = list_dir_names(&ml.join("notebooks"))
            .into_iter()
            .filter(|name| has_any_extension(name, &["ipynb".to_string()]))
            .collect();
    }

    report
}

/// Validation messages for a model config; empty means valid.
fn validate_model_config(path: &Path) -> Vec<String> {
    let text = match read_text_lossy(path) {
        Ok(text) => text,
        Err(err) => return vec![format!("Error reading or parsing {MODEL_CONFIG}: {err}")],
    };
    let value: Value = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(err) => return vec![format!("Error reading or parsing {MODEL_CONFIG}: {err}")],
    };

    // A non-object document has none of the required keys.
    let keys = value.as_object();
    REQUIRED_MODEL_KEYS
        .iter()
        .filter(|key| !keys.is_some_and(|obj| obj.contains_key(**key)))
        .map(|key| format!("{key} is missing from {MODEL_CONFIG}."))
        .collect()
}

fn has_any_extension(name: &str, exts: &[String]) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            exts.iter()
                .any(|want| want.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}
