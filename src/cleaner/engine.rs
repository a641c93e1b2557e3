use std::path::Path;

use tracing::debug;

use crate::common::CleanError;
use crate::scanner::{self, TempFile};

/// Receives the per-file events of a clean run
pub trait Reporter {
    /// Called right before a deletion is attempted
    fn deleting(&mut self, path: &Path);

    /// Called when a deletion failed; the run continues afterwards
    fn failed(&mut self, error: &CleanError);
}

/// Delete every temporary build file below `root`.
///
/// This is the main entry point of the crate.
/// - The root is resolved to an absolute path first; a missing or unlistable
///   root is the only error returned.
/// - Each matching file is announced, then removed exactly once.
/// - A failed removal is reported and skipped, never returned.
pub fn clean<R: Reporter + ?Sized>(root: &Path, reporter: &mut R) -> Result<(), CleanError> {
    let root = scanner::resolve_root(root)?;
    debug!("Scanning {}", root.display());

    for file in scanner::walk_temp_files(&root) {
        reporter.deleting(&file.path);
        match delete_file(&file) {
            Ok(()) => {}
            Err(err) if err.is_recoverable() => reporter.failed(&err),
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

/// Permanently remove a single file. Symlinks are removed, not their targets.
fn delete_file(file: &TempFile) -> Result<(), CleanError> {
    std::fs::remove_file(&file.path).map_err(|source| CleanError::Delete {
        path: file.path.clone(),
        source,
    })?;

    debug!(
        "Removed {}{} (matched {})",
        file.path.display(),
        if file.is_link { " [symlink]" } else { "" },
        file.path
            .file_name()
            .and_then(scanner::matched_suffix)
            .unwrap_or_default()
    );

    Ok(())
}
