//! Error types for scan and mutation operations
//!
//! Structural errors on the root of an operation (missing path, wrong
//! entry kind) and mutation failures always propagate to the caller.
//! Per-entry errors encountered deep inside a traversal never surface
//! here; the tree builder records them as [`SkippedEntry`] values and
//! the statistics queries exclude the affected entries.
//!
//! [`SkippedEntry`]: crate::node::SkippedEntry

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`ScanError`]
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors produced by tree construction and filesystem mutation
#[derive(Debug, Error)]
pub enum ScanError {
    /// The root path handed to the tree builder does not exist
    #[error("Path does not exist: {}", .0.display())]
    InvalidPath(PathBuf),

    /// The root path exists but is not a directory
    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A mutation target is absent
    #[error("No such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    /// A create or rename destination already exists
    #[error("Already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// The operation is not defined for this entry kind
    /// (renaming a directory is explicitly restricted to files)
    #[error("Operation not supported: {0}")]
    Unsupported(String),

    /// Opaque catch-all for listing/read/permission failures
    #[error("Filesystem error: {0}")]
    FileSystem(String),
}

impl ScanError {
    /// Wrap an I/O error with the path it occurred on
    ///
    /// Collision and missing-path cases keep their dedicated variants
    /// so callers can match on them; everything else collapses into
    /// the opaque `FileSystem` variant.
    #[must_use]
    pub fn from_io(path: &std::path::Path, err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::AlreadyExists => Self::AlreadyExists(path.to_path_buf()),
            _ => Self::FileSystem(format!("{}: {err}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn from_io_maps_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let mapped = ScanError::from_io(Path::new("/tmp/x"), &err);
        assert!(matches!(mapped, ScanError::NotFound(_)));
    }

    #[test]
    fn from_io_maps_already_exists() {
        let err = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "dup");
        let mapped = ScanError::from_io(Path::new("/tmp/x"), &err);
        assert!(matches!(mapped, ScanError::AlreadyExists(_)));
    }

    #[test]
    fn from_io_maps_other_to_filesystem() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let mapped = ScanError::from_io(Path::new("/tmp/x"), &err);
        assert!(matches!(mapped, ScanError::FileSystem(_)));
    }

    #[test]
    fn display_includes_path() {
        let err = ScanError::InvalidPath(PathBuf::from("/no/such/root"));
        assert!(err.to_string().contains("/no/such/root"));
    }
}
