//! Source discovery backend
//!
//! Uses the ignore crate for file traversal that respects .gitignore

use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Text extensions counted when none are given
pub const DEFAULT_EXTENSIONS: &[&str] = &["md", "txt", "rst", "adoc", "org", "tex"];

/// Options for walking a directory for text sources
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Include hidden files/directories
    pub hidden: bool,
    /// Respect .gitignore and friends
    pub ignore: bool,
    /// Extensions (without the dot) to keep; empty keeps every file
    pub extensions: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            hidden: false,
            ignore: true,
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ScanOptions {
    fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.extensions
                    .iter()
                    .any(|wanted| wanted.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

/// Collect text files under `dir`, sorted for a stable processing order
pub fn scan_sources(dir: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Not a directory: {}", dir.display());
    }

    let mut builder = WalkBuilder::new(dir);
    builder
        .hidden(!options.hidden)
        .git_ignore(options.ignore)
        .git_global(options.ignore)
        .git_exclude(options.ignore)
        .ignore(options.ignore);

    let mut files = Vec::new();

    for entry in builder.build() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::debug!(%err, "skipping unreadable entry");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() || !options.accepts(path) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    tracing::debug!(dir = %dir.display(), count = files.len(), "scanned sources");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn test_scan_empty_dir() {
        let temp = tempdir().unwrap();
        let result = scan_sources(temp.path(), &ScanOptions::default()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_filters_extensions() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("notes.md")).unwrap();
        File::create(temp.path().join("main.rs")).unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        File::create(temp.path().join("sub/readme.TXT")).unwrap();

        let result = scan_sources(temp.path(), &ScanOptions::default()).unwrap();
        assert_eq!(
            result,
            vec![
                temp.path().join("notes.md"),
                temp.path().join("sub/readme.TXT")
            ]
        );
    }

    #[test]
    fn test_scan_without_extension_filter() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("a.rs")).unwrap();
        File::create(temp.path().join("b")).unwrap();

        let options = ScanOptions {
            extensions: Vec::new(),
            ..Default::default()
        };
        let result = scan_sources(temp.path(), &options).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_scan_skips_hidden_by_default() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join(".draft.md")).unwrap();
        File::create(temp.path().join("final.md")).unwrap();

        let result = scan_sources(temp.path(), &ScanOptions::default()).unwrap();
        assert_eq!(result, vec![temp.path().join("final.md")]);

        let options = ScanOptions {
            hidden: true,
            ..Default::default()
        };
        let result = scan_sources(temp.path(), &options).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_scan_not_a_directory() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.md");
        File::create(&file).unwrap();
        assert!(scan_sources(&file, &ScanOptions::default()).is_err());
    }
}
