use std::collections::BTreeMap;

use projscan_content::patterns::incomplete_markers;
use projscan_content::scan_file;
use projscan_types::IncompleteLogicReport;
use projscan_walk::FileSet;

/// `TODO`, `pass` and `NotImplementedError` lines per source file.
/// Files without a hit are omitted.
pub fn build_incomplete_logic_report(
    files: &FileSet,
    source_extensions: &[String],
) -> IncompleteLogicReport {
    let markers = incomplete_markers();
    let mut incomplete_logic: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for file in files.with_extension(source_extensions) {
        let hits = scan_file(&file.path, &markers);
        if hits.is_empty() {
            continue;
        }
        incomplete_logic.insert(
            file.display_path(),
            hits.into_iter()
                .map(|m| format!("Line {}: {}", m.line, m.text))
                .collect(),
        );
    }

    IncompleteLogicReport { incomplete_logic }
}
