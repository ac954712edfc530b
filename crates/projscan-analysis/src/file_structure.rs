use projscan_types::{FileDetail, FileStructureReport};
use projscan_walk::FileSet;

/// Inventory of every walked file. Oversized files are listed too; only
/// content readers skip them.
pub fn build_file_structure_report(files: &FileSet) -> FileStructureReport {
    let file_details: Vec<FileDetail> = files
        .files
        .iter()
        .map(|f| FileDetail {
            path: f.display_path(),
            size: f.size,
            error: f.error.clone(),
        })
        .collect();
    let total_size_bytes = files.files.iter().filter_map(|f| f.size).sum();

    FileStructureReport {
        total_files: file_details.len(),
        total_size_bytes,
        file_details,
    }
}
