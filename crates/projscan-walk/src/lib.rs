//! # projscan-walk
//!
//! **Tier 1 (Utilities)**
//!
//! Filesystem traversal for project inspection. One walk produces every
//! [`FileRecord`] and directory path that the detectors need.
//!
//! ## What belongs here
//! * Recursive listing, hidden entries included
//! * Directory pruning by name
//! * Size lookup and large-file flagging
//!
//! ## What does NOT belong here
//! * Content scanning (use projscan-content)
//! * Detection rules
//! * File modification

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use ignore::WalkBuilder;
use tracing::debug;

/// Options applied once, centrally, to the shared walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Directory names to prune (matched against the final path component).
    pub prune: Vec<String>,
    /// Files above this size are flagged `oversized` and never opened by
    /// content-reading detectors.
    pub max_file_bytes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Root-joined path, as reported to the user.
    pub path: PathBuf,
    /// Path relative to the scanned root.
    pub rel: PathBuf,
    pub size: Option<u64>,
    pub error: Option<String>,
    pub oversized: bool,
}

impl FileRecord {
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    pub fn file_name(&self) -> &str {
        self.rel.file_name().and_then(|n| n.to_str()).unwrap_or("")
    }

    pub fn has_extension(&self, exts: &[String]) -> bool {
        let ext = match self.rel.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext,
            None => return false,
        };
        exts.iter()
            .any(|want| want.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

/// Everything one traversal of a project root produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    pub root: PathBuf,
    pub files: Vec<FileRecord>,
    /// Every directory visited, the root included.
    pub dirs: Vec<PathBuf>,
}

impl FileSet {
    pub fn empty(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            files: Vec::new(),
            dirs: Vec::new(),
        }
    }

    /// Whether the walk visited `rel` (relative to the root) as a directory.
    /// Pruned directories are never visited.
    pub fn has_dir(&self, rel: impl AsRef<Path>) -> bool {
        let wanted = self.root.join(rel);
        self.dirs.iter().any(|d| *d == wanted)
    }

    /// Records that content-reading detectors may open.
    pub fn content_files(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.iter().filter(|f| !f.oversized)
    }

    /// Content files whose extension is one of `exts` (case-insensitive, dot optional).
    pub fn with_extension<'a>(
        &'a self,
        exts: &'a [String],
    ) -> impl Iterator<Item = &'a FileRecord> + 'a {
        self.content_files().filter(move |f| f.has_extension(exts))
    }
}

/// Walk `root` once and return its files and directories, sorted by relative path.
///
/// Unreadable entries are skipped. Only a root that is not a directory fails.
pub fn walk(root: &Path, opts: &WalkOptions) -> Result<FileSet> {
    if !root.is_dir() {
        bail!("not a directory: {}", root.display());
    }

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.hidden(false);
    builder.follow_links(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));

    if !opts.prune.is_empty() {
        let prune = opts.prune.clone();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !prune.iter().any(|p| p == name.as_ref())
        });
    }

    let mut files: Vec<FileRecord> = Vec::new();
    let mut dirs: Vec<PathBuf> = Vec::new();

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        let file_type = match entry.file_type() {
            Some(t) => t,
            None => continue,
        };
        if file_type.is_dir() {
            dirs.push(entry.path().to_path_buf());
            continue;
        }

        let path = entry.path().to_path_buf();
        // Symlinks are listed like files but never descended into. A live
        // link reports its target's size, a dangling one carries the error.
        let metadata = if file_type.is_symlink() {
            match std::fs::metadata(&path) {
                Ok(meta) if meta.is_dir() => continue,
                Ok(meta) => Ok(meta.len()),
                Err(err) => Err(err.to_string()),
            }
        } else if file_type.is_file() {
            entry.metadata().map(|m| m.len()).map_err(|e| e.to_string())
        } else {
            continue;
        };

        let rel = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        let (size, error) = match metadata {
            Ok(len) => (Some(len), None),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "size unavailable");
                (None, Some(err))
            }
        };
        let oversized = match (opts.max_file_bytes, size) {
            (Some(limit), Some(bytes)) => bytes > limit,
            _ => false,
        };
        files.push(FileRecord {
            path,
            rel,
            size,
            error,
            oversized,
        });
    }

    files.sort_by(|a, b| a.rel.to_string_lossy().cmp(&b.rel.to_string_lossy()));
    dirs.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));

    Ok(FileSet {
        root: root.to_path_buf(),
        files,
        dirs,
    })
}

/// Sorted names of the regular files directly inside `dir`.
///
/// A missing or unreadable directory yields an empty list.
pub fn list_dir_names(dir: &Path) -> Vec<String> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(dir = %dir.display(), error = %err, "cannot list directory");
            return Vec::new();
        }
    };
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
