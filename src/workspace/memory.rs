//! Markdown memory files stored under the workspace `memory` directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::utils::system_time_iso;

/// Number of entries reported by [`MemoryDir::recent_files`] on the API.
pub const RECENT_FILES_LIMIT: usize = 7;

/// One memory file as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryFileEntry {
    /// File name, e.g. `2026-02-09.md`.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Local modification time, ISO-8601.
    pub modified: String,
}

/// Directory of markdown memory files.
#[derive(Debug, Clone)]
pub struct MemoryDir {
    path: PathBuf,
}

impl MemoryDir {
    /// Wrap a directory path. The directory does not have to exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the directory exists.
    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    /// Paths of all markdown files, unsorted. Missing or unreadable
    /// directories yield an empty list.
    pub fn markdown_files(&self) -> Vec<PathBuf> {
        let entries = match fs::read_dir(&self.path) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "Memory directory unavailable");
                return Vec::new();
            }
        };

        entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| is_markdown(path))
            .collect()
    }

    /// Number of markdown files.
    pub fn count(&self) -> usize {
        self.markdown_files().len()
    }

    /// Up to `limit` markdown files, sorted by file name descending.
    /// Files that vanish or cannot be stat-ed between listing and stat are skipped.
    pub fn recent_files(&self, limit: usize) -> Vec<MemoryFileEntry> {
        let mut files = self.markdown_files();
        files.sort_by(|a, b| b.file_name().cmp(&a.file_name()));

        files
            .into_iter()
            .take(limit)
            .filter_map(|path| {
                let metadata = match fs::metadata(&path) {
                    Ok(m) => m,
                    Err(e) => {
                        debug!(path = %path.display(), error = %e, "Skipping memory file");
                        return None;
                    }
                };
                let modified = metadata.modified().ok().map(system_time_iso)?;
                let name = path.file_name()?.to_string_lossy().into_owned();

                Some(MemoryFileEntry {
                    name,
                    size: metadata.len(),
                    modified,
                })
            })
            .collect()
    }
}

/// `*.md` glob semantics: regular file, `md` extension, not hidden.
fn is_markdown(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .map_or(true, |n| n.starts_with('.'));

    !hidden && path.extension().is_some_and(|ext| ext == "md") && path.is_file()
}
