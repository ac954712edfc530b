//! # projscan-analysis
//!
//! **Tier 2 (Orchestration)**
//!
//! The ten detectors and the aggregator that runs them over one shared walk.
//! Every detector is a pure function of its inputs: it reads the tree, never
//! writes it, and degrades I/O failures to absence instead of returning them.

mod analysis;
mod docker;
mod duplicates;
mod env_file;
mod file_structure;
mod incomplete;
mod logging;
mod ml;
mod requirements;
mod security;
mod testing;

pub use analysis::{AnalysisRequest, analyze, analyze_files};
pub use docker::build_docker_report;
pub use duplicates::build_duplicates_report;
pub use env_file::{build_env_file_report, parse_env};
pub use file_structure::build_file_structure_report;
pub use incomplete::build_incomplete_logic_report;
pub use logging::build_logging_report;
pub use ml::build_ml_report;
pub use requirements::{
    build_requirements_report, parse_environment_yml, parse_requirement, parse_requirements_txt,
};
pub use security::build_security_report;
pub use testing::build_testing_report;
