use std::collections::BTreeMap;

use projscan_content::hash_file;
use projscan_types::DuplicatesReport;
use projscan_walk::{FileRecord, FileSet};
use tracing::debug;

/// Groups of files with byte-identical contents.
///
/// Files are bucketed by size first, so only same-size candidates are hashed.
/// Unreadable files drop out silently. Groups are ordered by their first path
/// and paths keep walk order.
pub fn build_duplicates_report(files: &FileSet) -> DuplicatesReport {
    let mut by_size: BTreeMap<u64, Vec<&FileRecord>> = BTreeMap::new();
    for file in files.content_files() {
        if let Some(size) = file.size {
            by_size.entry(size).or_default().push(file);
        }
    }

    let mut duplicates: Vec<Vec<String>> = Vec::new();
    for candidates in by_size.into_values() {
        if candidates.len() < 2 {
            continue;
        }
        let mut by_hash: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for file in candidates {
            match hash_file(&file.path) {
                Ok(hash) => by_hash.entry(hash).or_default().push(file.display_path()),
                Err(err) => {
                    debug!(path = %file.path.display(), error = %err, "skipping unhashable file");
                }
            }
        }
        duplicates.extend(by_hash.into_values().filter(|group| group.len() > 1));
    }

    duplicates.sort_by(|a, b| a[0].cmp(&b[0]));
    DuplicatesReport { duplicates }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projscan_walk::{WalkOptions, walk};
    use std::fs;

    #[test]
    fn same_size_different_content_is_not_a_group() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "abc").unwrap();
        fs::write(dir.path().join("b.txt"), "xyz").unwrap();
        let set = walk(dir.path(), &WalkOptions::default()).unwrap();
        assert!(build_duplicates_report(&set).duplicates.is_empty());
    }

    #[test]
    fn empty_files_form_a_group() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("__init__.py"), "").unwrap();
        fs::create_dir(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("pkg/__init__.py"), "").unwrap();
        let set = walk(dir.path(), &WalkOptions::default()).unwrap();

        let report = build_duplicates_report(&set);

        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(report.duplicates[0].len(), 2);
    }

    #[test]
    fn oversized_files_are_not_hashed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.bin"), "0123456789").unwrap();
        fs::write(dir.path().join("b.bin"), "0123456789").unwrap();
        let opts = WalkOptions {
            prune: Vec::new(),
            max_file_bytes: Some(4),
        };
        let set = walk(dir.path(), &opts).unwrap();
        assert!(build_duplicates_report(&set).duplicates.is_empty());
    }
}
