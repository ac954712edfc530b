//! # projscan-content
//!
//! **Tier 1 (Utilities)**
//!
//! Content scanning helpers shared by the detectors: lossy readers, the
//! line scanner, blake3 hashing and the compiled [`patterns`].

pub mod patterns;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

/// One matching line: 1-based number and trimmed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    pub line: usize,
    pub text: String,
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(buf)
}

/// Read a whole file as UTF-8, replacing invalid sequences.
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = read_bytes(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read a file as trimmed lines, replacing invalid UTF-8.
pub fn read_lines_lossy(path: &Path) -> Result<Vec<String>> {
    let text = read_text_lossy(path)?;
    Ok(text.lines().map(|l| l.trim().to_string()).collect())
}

/// Lines of `text` matching any of `patterns`, one entry per line.
pub fn scan_text(text: &str, patterns: &[&Regex]) -> Vec<LineMatch> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| patterns.iter().any(|re| re.is_match(line)))
        .map(|(idx, line)| LineMatch {
            line: idx + 1,
            text: line.trim().to_string(),
        })
        .collect()
}

/// [`scan_text`] over a file. A file that cannot be read yields no matches.
pub fn scan_file(path: &Path, patterns: &[&Regex]) -> Vec<LineMatch> {
    match read_text_lossy(path) {
        Ok(text) => scan_text(&text, patterns),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "skipping unreadable file");
            Vec::new()
        }
    }
}

pub fn hash_bytes(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// blake3 digest of the whole file.
pub fn hash_file(path: &Path) -> Result<String> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut hasher = blake3::Hasher::new();
    hasher
        .update_reader(file)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(hasher.finalize().to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn scan_text_reports_one_based_trimmed_lines() {
        let re = Regex::new("needle").unwrap();
        let hits = scan_text("hay\n   needle here  \nhay", &[&re]);
        assert_eq!(
            hits,
            vec![LineMatch {
                line: 2,
                text: "needle here".to_string()
            }]
        );
    }

    #[test]
    fn scan_text_counts_a_line_once_when_several_patterns_match() {
        let a = Regex::new("foo").unwrap();
        let b = Regex::new("bar").unwrap();
        let hits = scan_text("foo bar", &[&a, &b]);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn scan_file_on_missing_path_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let re = Regex::new("x").unwrap();
        assert!(scan_file(&dir.path().join("missing"), &[&re]).is_empty());
    }

    #[test]
    fn read_text_lossy_replaces_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.dat");
        fs::write(&path, [b'o', b'k', 0xff, 0xfe, b'\n']).unwrap();
        let text = read_text_lossy(&path).unwrap();
        assert!(text.starts_with("ok"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn hash_file_matches_hash_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "hello").unwrap();
        assert_eq!(hash_file(&path).unwrap(), hash_bytes(b"hello"));
    }

    #[test]
    fn read_lines_lossy_trims_each_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("req.txt");
        fs::write(&path, "  flask==2.2.5  \r\nrequests\n").unwrap();
        assert_eq!(
            read_lines_lossy(&path).unwrap(),
            vec!["flask==2.2.5".to_string(), "requests".to_string()]
        );
    }
}
