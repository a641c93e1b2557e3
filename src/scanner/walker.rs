use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use super::suffixes;
use crate::common::CleanError;

/// A temporary build file found during a walk
#[derive(Debug, Clone)]
pub struct TempFile {
    pub path: PathBuf,
    /// The entry is a symlink to a regular file; removing it removes the link only
    pub is_link: bool,
}

/// Resolve `root` to an absolute path and make sure it can be listed.
///
/// This is the only place a scan can fail outright: a missing root yields
/// [`CleanError::RootNotFound`], an unlistable one [`CleanError::RootUnreadable`].
pub fn resolve_root(root: &Path) -> Result<PathBuf, CleanError> {
    let resolved =
        std::fs::canonicalize(root).map_err(|e| CleanError::from_root(root.to_path_buf(), e))?;

    if resolved.is_dir() {
        std::fs::read_dir(&resolved).map_err(|e| CleanError::from_root(resolved.clone(), e))?;
    }

    Ok(resolved)
}

/// Lazily walk everything below `root` and yield the files whose name ends
/// with a target suffix.
///
/// Directories are never followed through symlinks and never yielded,
/// whatever their name. A symlink counts as a file when its target is a
/// regular file. Unreadable entries below the root are logged and skipped.
pub fn walk_temp_files(root: &Path) -> impl Iterator<Item = TempFile> {
    WalkDir::new(root)
        .follow_links(false)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|entry| suffixes::is_temp_file_name(entry.file_name()))
        .filter(points_at_file)
        .map(|entry| TempFile {
            is_link: entry.path_is_symlink(),
            path: entry.into_path(),
        })
}

// Broken links and links to directories are rejected along with directories.
fn points_at_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        return std::fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false);
    }
    file_type.is_file()
}
