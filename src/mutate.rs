//! Best-effort mutations against the live filesystem
//!
//! Three independent operations - create, delete, rename - each
//! atomic only at the single-syscall level. There is no cross-
//! operation transactionality and no cached state here: after a
//! successful mutation the caller rebuilds its tree via
//! [`crate::tree::build_tree`] to resynchronize.
//!
//! Mutation errors always propagate; they represent a singular,
//! user-initiated action and are never swallowed the way traversal
//! errors are.

use crate::error::{Result, ScanError};
use crate::observer::{Mutation, ScanObserver, TracingObserver};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Create an empty regular file `name` inside `parent`
///
/// The parent directory is not auto-created.
///
/// # Errors
///
/// Returns `ScanError::AlreadyExists` if the target exists (the
/// existing file is left untouched - the open is create-new, never
/// truncating) and `ScanError::NotFound`/`ScanError::FileSystem` when
/// the parent is absent or unwritable.
pub fn create_file(parent: &Path, name: &str) -> Result<PathBuf> {
    create_file_with_observer(parent, name, &TracingObserver)
}

/// [`create_file`] reporting to an explicit observer
///
/// # Errors
///
/// Same contract as [`create_file`].
pub fn create_file_with_observer(
    parent: &Path,
    name: &str,
    observer: &dyn ScanObserver,
) -> Result<PathBuf> {
    if name.is_empty() {
        return Err(ScanError::FileSystem(
            "file name must not be empty".to_string(),
        ));
    }

    let target = parent.join(name);
    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
        .map_err(|e| ScanError::from_io(&target, &e))?;

    observer.mutation_performed(Mutation::Create, &target);
    Ok(target)
}

/// Delete a file, or a directory together with everything below it
///
/// Directory contents are removed deepest-first: the full listing is
/// sorted so that longer paths go before their parents, guaranteeing
/// no child outlives its directory.
///
/// # Errors
///
/// Returns `ScanError::NotFound` if `path` is absent. A failure
/// deleting any single entry aborts further deletion and propagates;
/// entries already removed stay removed (partial deletion is an
/// observable outcome).
pub fn delete(path: &Path) -> Result<()> {
    delete_with_observer(path, &TracingObserver)
}

/// [`delete`] reporting to an explicit observer
///
/// # Errors
///
/// Same contract as [`delete`].
pub fn delete_with_observer(path: &Path, observer: &dyn ScanObserver) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ScanError::from_io(path, &e))?;

    if metadata.is_dir() {
        let mut doomed: Vec<PathBuf> = WalkDir::new(path)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .map(walkdir::DirEntry::into_path)
            .collect();
        // Reverse lexicographic order puts every child before its
        // parent, since a child path extends the parent's
        doomed.sort();
        doomed.reverse();

        for entry in doomed {
            remove_one(&entry)?;
        }
    } else {
        fs::remove_file(path).map_err(|e| ScanError::from_io(path, &e))?;
    }

    observer.mutation_performed(Mutation::Delete, path);
    Ok(())
}

/// Rename a regular file within its directory
///
/// Directories cannot be renamed through this operation - an explicit
/// restriction, not an oversight.
///
/// # Errors
///
/// Returns `ScanError::NotFound` if `path` is absent,
/// `ScanError::Unsupported` if it is a directory, and
/// `ScanError::AlreadyExists` if `new_name` is already taken (both
/// files are left on disk).
pub fn rename_file(path: &Path, new_name: &str) -> Result<PathBuf> {
    rename_file_with_observer(path, new_name, &TracingObserver)
}

/// [`rename_file`] reporting to an explicit observer
///
/// # Errors
///
/// Same contract as [`rename_file`].
pub fn rename_file_with_observer(
    path: &Path,
    new_name: &str,
    observer: &dyn ScanObserver,
) -> Result<PathBuf> {
    if new_name.is_empty() {
        return Err(ScanError::FileSystem(
            "file name must not be empty".to_string(),
        ));
    }

    let metadata = fs::symlink_metadata(path).map_err(|e| ScanError::from_io(path, &e))?;
    if metadata.is_dir() {
        return Err(ScanError::Unsupported(format!(
            "only files can be renamed, not directories: {}",
            path.display()
        )));
    }

    let parent = path.parent().ok_or_else(|| {
        ScanError::FileSystem(format!("no parent directory for {}", path.display()))
    })?;
    let destination = parent.join(new_name);
    if destination.exists() {
        return Err(ScanError::AlreadyExists(destination));
    }

    fs::rename(path, &destination).map_err(|e| ScanError::from_io(path, &e))?;

    observer.mutation_performed(Mutation::Rename, &destination);
    Ok(destination)
}

/// Remove a single listed entry, directory or not
fn remove_one(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ScanError::from_io(path, &e))?;
    if metadata.is_dir() {
        fs::remove_dir(path).map_err(|e| ScanError::from_io(path, &e))
    } else {
        fs::remove_file(path).map_err(|e| ScanError::from_io(path, &e))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::observer::NullObserver;
    use tempfile::TempDir;

    #[test]
    fn create_makes_an_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let created = create_file_with_observer(temp_dir.path(), "x.txt", &NullObserver).unwrap();
        assert!(created.is_file());
        assert_eq!(fs::metadata(&created).unwrap().len(), 0);
    }

    #[test]
    fn create_collision_keeps_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("x.txt");
        fs::write(&existing, b"keep me").unwrap();

        let result = create_file_with_observer(temp_dir.path(), "x.txt", &NullObserver);
        assert!(matches!(result, Err(ScanError::AlreadyExists(_))));
        assert_eq!(fs::read(&existing).unwrap(), b"keep me");
    }

    #[test]
    fn create_rejects_empty_name() {
        let temp_dir = TempDir::new().unwrap();
        let result = create_file_with_observer(temp_dir.path(), "", &NullObserver);
        assert!(result.is_err());
    }

    #[test]
    fn delete_missing_path_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = delete_with_observer(&temp_dir.path().join("gone"), &NullObserver);
        assert!(matches!(result, Err(ScanError::NotFound(_))));
    }

    #[test]
    fn delete_removes_nested_tree() {
        let temp_dir = TempDir::new().unwrap();
        let top = temp_dir.path().join("top");
        fs::create_dir_all(top.join("sub")).unwrap();
        fs::write(top.join("sub/leaf.txt"), b"x").unwrap();

        // remove_dir rejects non-empty directories, so this passing
        // proves children went first
        delete_with_observer(&top, &NullObserver).unwrap();
        assert!(!top.exists());
    }

    #[test]
    fn rename_directory_is_unsupported() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("d");
        fs::create_dir(&dir).unwrap();

        let result = rename_file_with_observer(&dir, "e", &NullObserver);
        assert!(matches!(result, Err(ScanError::Unsupported(_))));
        assert!(dir.exists());
    }

    #[test]
    fn rename_collision_leaves_both_files() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.txt");
        let taken = temp_dir.path().join("a.md");
        fs::write(&source, b"src").unwrap();
        fs::write(&taken, b"dst").unwrap();

        let result = rename_file_with_observer(&source, "a.md", &NullObserver);
        assert!(matches!(result, Err(ScanError::AlreadyExists(_))));
        assert!(source.exists());
        assert_eq!(fs::read(&taken).unwrap(), b"dst");
    }

    #[test]
    fn rename_moves_within_directory() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.txt");
        fs::write(&source, b"content").unwrap();

        let renamed = rename_file_with_observer(&source, "b.txt", &NullObserver).unwrap();
        assert!(!source.exists());
        assert_eq!(fs::read(&renamed).unwrap(), b"content");
    }
}
