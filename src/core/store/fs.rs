use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::{FileDescriptor, FileStore, SourceFile, SourceFilter};

/// [`FileStore`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl FileStore for FsStore {
    fn list_directories(&self, root: &Path) -> Vec<PathBuf> {
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!(path = %root.display(), error = %e, "cannot list directory");
                }
                return Vec::new();
            }
        };

        let mut dirs: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();
        dirs
    }

    fn list_files(&self, root: &Path, extension: &str) -> Vec<FileDescriptor> {
        if !root.exists() {
            return Vec::new();
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!(error = %e, "cannot access path");
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) == Some(extension) {
                files.push(FileDescriptor {
                    path: path.to_path_buf(),
                    extension: extension.to_string(),
                });
            }
        }
        files
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn make_directories(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn list_all_files(&self, roots: &[PathBuf], filter: &SourceFilter) -> Vec<SourceFile> {
        let mut paths: Vec<PathBuf> = Vec::new();

        for root in roots {
            if !root.exists() {
                debug!(path = %root.display(), "source path does not exist");
                continue;
            }
            let walker = WalkDir::new(root)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|entry| !filter.is_ignored(entry.path()));
            for entry in walker {
                let entry = match entry {
                    Ok(e) => e,
                    Err(e) => {
                        warn!(error = %e, "cannot access path");
                        continue;
                    }
                };
                if entry.file_type().is_file() && filter.accepts(entry.path()) {
                    paths.push(entry.into_path());
                }
            }
        }

        // Read in parallel; collect keeps listing order.
        paths
            .into_par_iter()
            .filter_map(|path| match fs::read_to_string(&path) {
                Ok(contents) => Some(SourceFile { path, contents }),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable source file");
                    None
                }
            })
            .collect()
    }
}
