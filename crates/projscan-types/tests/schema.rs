//! Key-shape tests for the consolidated report contract.

use projscan_types::{
    AnalysisOutcome, DockerReport, DuplicatesReport, EnvFileReport, ErrorReport,
    FileStructureReport, IncompleteLogicReport, LoggingReport, MlWorkflowReport, ProjectReport,
    REPORT_KEYS, RequirementsReport, SecurityReport, TestingReport,
};

fn empty_report(path: &str) -> ProjectReport {
    ProjectReport {
        project_path: path.to_string(),
        file_structure: FileStructureReport::default(),
        requirements: RequirementsReport::default(),
        docker_setup: DockerReport::default(),
        ml_workflow: MlWorkflowReport::default(),
        incomplete_logic: IncompleteLogicReport::default(),
        env_file: EnvFileReport::default(),
        security: SecurityReport::default(),
        duplicates: DuplicatesReport::default(),
        logging_monitoring: LoggingReport::default(),
        testing: TestingReport::default(),
    }
}

#[test]
fn report_serializes_with_every_domain_key_in_order() {
    let value = serde_json::to_value(empty_report("proj")).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(|k| k.as_str())
        .collect();
    let mut expected: Vec<&str> = REPORT_KEYS.to_vec();
    expected.sort();
    let mut actual = keys.clone();
    actual.sort();
    assert_eq!(actual, expected);
}

#[test]
fn requirements_manifest_keys_are_stable() {
    let value = serde_json::to_value(RequirementsReport::default()).unwrap();
    let txt = value.get("requirements_txt").unwrap();
    for key in ["found", "packages", "missing_versions", "duplicates"] {
        assert!(txt.get(key).is_some(), "missing {key}");
    }
    assert!(value.get("environment_yml").is_some());
}

#[test]
fn outcome_round_trips_through_untagged_json() {
    let report = AnalysisOutcome::Report(Box::new(empty_report("proj")));
    let json = serde_json::to_string(&report).unwrap();
    let back: AnalysisOutcome = serde_json::from_str(&json).unwrap();
    assert!(!back.is_invalid());
    assert_eq!(back.project_path(), "proj");

    let invalid = AnalysisOutcome::Invalid(ErrorReport::not_a_directory("missing"));
    let json = serde_json::to_string(&invalid).unwrap();
    let back: AnalysisOutcome = serde_json::from_str(&json).unwrap();
    assert!(back.is_invalid());
    assert!(back.report().is_none());
}

#[test]
fn package_without_version_serializes_nulls() {
    let pkg = projscan_types::PackageSpec {
        name: "requests".to_string(),
        specifier: None,
        version: None,
    };
    let json = serde_json::to_string(&pkg).unwrap();
    assert_eq!(json, r#"{"name":"requests","specifier":null,"version":null}"#);
}
