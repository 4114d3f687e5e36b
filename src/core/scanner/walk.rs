// src/core/scanner/walk.rs
use std::path::Path;
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Recursively yields the regular files below `dir`, following symlinks.
///
/// Entries the walker cannot read (permission denied, symlink loops, I/O
/// failures) are logged and skipped, so one bad subtree never hides its
/// siblings. Open directory handles live inside the returned iterator and
/// are closed when it is dropped.
#[inline]
pub fn walk_files(dir: &Path) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("Error: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
}
