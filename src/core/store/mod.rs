//! Storage access used by the catalog.
//!
//! The catalog never touches the filesystem directly; everything goes through
//! [`FileStore`]. [`FsStore`] is the real implementation.

mod fs;

use std::{
    io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;

pub use fs::FsStore;

/// A file found under a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub path: PathBuf,
    pub extension: String,
}

/// A source file and its contents, as read for key extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub contents: String,
}

pub trait FileStore {
    /// Immediate subdirectories of `root`, sorted by name. Missing root -> empty.
    fn list_directories(&self, root: &Path) -> Vec<PathBuf>;

    /// All files below `root` with the given extension, in name order.
    fn list_files(&self, root: &Path, extension: &str) -> Vec<FileDescriptor>;

    fn exists(&self, path: &Path) -> bool;

    fn read_text(&self, path: &Path) -> io::Result<String>;

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()>;

    fn make_directories(&self, path: &Path) -> io::Result<()>;

    /// Every source file below `roots` accepted by `filter`, with contents.
    fn list_all_files(&self, roots: &[PathBuf], filter: &SourceFilter) -> Vec<SourceFile>;
}

/// Which source files the extraction pass reads.
///
/// Ignore entries containing `*` or `?` are glob patterns matched against the
/// full path; anything else is a literal path prefix.
#[derive(Debug, Clone, Default)]
pub struct SourceFilter {
    extensions: Vec<String>,
    ignore_globs: Vec<Pattern>,
    ignore_paths: Vec<PathBuf>,
}

impl SourceFilter {
    pub fn new(extensions: &[String], ignores: &[String]) -> Result<Self> {
        let mut filter = Self {
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect(),
            ..Self::default()
        };

        for ignore in ignores {
            if is_glob_pattern(ignore) {
                let pattern = Pattern::new(ignore)
                    .with_context(|| format!("Invalid ignore pattern: \"{}\"", ignore))?;
                filter.ignore_globs.push(pattern);
            } else {
                filter.ignore_paths.push(PathBuf::from(ignore));
            }
        }

        Ok(filter)
    }

    /// True if the path (file or directory) is excluded by an ignore rule.
    pub fn is_ignored(&self, path: &Path) -> bool {
        if self
            .ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.ignore_globs.iter().any(|p| p.matches(&path_str))
    }

    /// True if a file with this path should be scanned.
    ///
    /// Compound extensions such as `blade.php` match on the file name suffix.
    pub fn accepts(&self, path: &Path) -> bool {
        if self.is_ignored(path) {
            return false;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|ext| file_name.ends_with(&format!(".{}", ext)))
    }
}

/// Check if a pattern contains glob wildcards (* or ?).
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}
