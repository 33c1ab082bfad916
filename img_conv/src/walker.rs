//! Recursive directory traversal.

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One node yielded by the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Lazily walk `root` depth-first, yielding directories as well as files.
///
/// Entries inside a directory come in file-name order. Symlinks are not
/// followed. Errors are yielded in place; callers stop at the first one.
pub fn walk(root: &Path) -> impl Iterator<Item = Result<FileEntry>> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| -> Result<FileEntry> {
            let entry = entry?;
            Ok(FileEntry {
                is_dir: entry.file_type().is_dir(),
                path: entry.into_path(),
            })
        })
}
