use std::path::PathBuf;

use thiserror::Error;

/// Error types for texclean operations.
/// We use `anyhow` at the top level for CLI error handling,
/// but these typed errors let the cleaner tell fatal failures from per-file ones.
#[derive(Debug, Error)]
pub enum CleanError {
    /// Root directory does not exist
    #[error("Root directory not found: '{}'", path.display())]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Root exists but cannot be resolved or listed
    #[error("Cannot read root directory '{}': {}", path.display(), source)]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Removing a single file failed
    #[error("Failed to delete '{}': {}", path.display(), source)]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CleanError {
    /// Classify an I/O error raised while resolving or opening the root.
    pub fn from_root(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            CleanError::RootNotFound { path, source }
        } else {
            CleanError::RootUnreadable { path, source }
        }
    }

    /// Per-file errors are reported and skipped; everything else aborts the scan.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CleanError::Delete { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_not_found_root_is_classified() {
        let err = CleanError::from_root(
            PathBuf::from("/no/such/dir"),
            Error::new(ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(err, CleanError::RootNotFound { .. }));
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("/no/such/dir"));
    }

    #[test]
    fn test_permission_denied_root_is_unreadable() {
        let err = CleanError::from_root(
            PathBuf::from("/locked"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, CleanError::RootUnreadable { .. }));
    }

    #[test]
    fn test_delete_error_names_path_and_cause() {
        let err = CleanError::Delete {
            path: PathBuf::from("/tmp/paper.aux"),
            source: Error::new(ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_recoverable());
        let msg = err.to_string();
        assert!(msg.contains("/tmp/paper.aux"));
        assert!(msg.contains("denied"));
    }
}
