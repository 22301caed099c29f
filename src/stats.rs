//! Aggregate statistics over a directory subtree
//!
//! Every query walks the live filesystem from scratch - no cache, no
//! reuse of a previously built node tree. That trades recomputation
//! cost for simplicity and for tolerance of filesystem changes
//! between calls.
//!
//! # Error policy
//!
//! Per-entry traversal errors are swallowed and the entry excluded
//! from the result. A walk that cannot start at all (root vanished)
//! yields the zero value or an empty list; callers cannot distinguish
//! that from an empty subtree.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Aggregate counters for one subtree
///
/// Assembled from independent walks, one per field; a concurrent
/// mutation between them can make the fields mutually inconsistent.
/// Ephemeral display data, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Number of regular files
    pub files: u64,
    /// Number of directories, excluding the root itself
    pub directories: u64,
    /// Sum of regular-file sizes in bytes
    pub total_bytes: u64,
    /// Extension the file counters were scoped to, if any
    pub extension: Option<String>,
}

/// Compute a [`StatsSnapshot`] for `dir`
///
/// With an extension scope, `files` and `total_bytes` cover only
/// matching files; the directory count is never scoped.
#[must_use]
pub fn snapshot(dir: &Path, extension: Option<&str>) -> StatsSnapshot {
    let (files, total_bytes) = match extension {
        Some(ext) => (count_by_extension(dir, ext), size_by_extension(dir, ext)),
        None => (count_files(dir), total_size(dir)),
    };
    StatsSnapshot {
        files,
        directories: count_directories(dir),
        total_bytes,
        extension: extension.map(str::to_owned),
    }
}

/// Count regular files in the subtree rooted at `dir`
#[must_use]
pub fn count_files(dir: &Path) -> u64 {
    readable_entries(dir)
        .filter(|e| e.file_type().is_file())
        .count() as u64
}

/// Count directories in the subtree rooted at `dir`, excluding `dir`
/// itself
#[must_use]
pub fn count_directories(dir: &Path) -> u64 {
    readable_entries(dir)
        .filter(|e| e.file_type().is_dir() && e.depth() > 0)
        .count() as u64
}

/// Sum of regular-file sizes in the subtree rooted at `dir`
///
/// Directory entries contribute 0; a file whose size cannot be read
/// contributes 0 as well.
#[must_use]
pub fn total_size(dir: &Path) -> u64 {
    readable_entries(dir)
        .filter(|e| e.file_type().is_file())
        .map(|e| entry_size(&e))
        .sum()
}

/// Collect files whose name ends in `"." + extension`
/// (case-insensitive)
#[must_use]
pub fn filter_by_extension(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let suffix = extension_suffix(extension);
    readable_entries(dir)
        .filter(|e| e.file_type().is_file() && matches_suffix(e, &suffix))
        .map(DirEntry::into_path)
        .collect()
}

/// Count files whose name ends in `"." + extension`
/// (case-insensitive)
#[must_use]
pub fn count_by_extension(dir: &Path, extension: &str) -> u64 {
    let suffix = extension_suffix(extension);
    readable_entries(dir)
        .filter(|e| e.file_type().is_file() && matches_suffix(e, &suffix))
        .count() as u64
}

/// Sum of sizes of files whose name ends in `"." + extension`
/// (case-insensitive)
#[must_use]
pub fn size_by_extension(dir: &Path, extension: &str) -> u64 {
    let suffix = extension_suffix(extension);
    readable_entries(dir)
        .filter(|e| e.file_type().is_file() && matches_suffix(e, &suffix))
        .map(|e| entry_size(&e))
        .sum()
}

/// Collect files at least `min_size` bytes large
#[must_use]
pub fn filter_by_min_size(dir: &Path, min_size: u64) -> Vec<PathBuf> {
    readable_entries(dir)
        .filter(|e| e.file_type().is_file() && entry_size(e) >= min_size)
        .map(DirEntry::into_path)
        .collect()
}

/// Collect all files sorted by size, largest first
///
/// Ties keep discovery order (the sort is stable).
#[must_use]
pub fn files_sorted_by_size(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<(u64, PathBuf)> = readable_entries(dir)
        .filter(|e| e.file_type().is_file())
        .map(|e| (entry_size(&e), e.into_path()))
        .collect();
    files.sort_by(|a, b| b.0.cmp(&a.0));
    files.into_iter().map(|(_, path)| path).collect()
}

/// List the immediate entries of `dir`, non-recursively
///
/// An unreadable or non-directory `dir` yields an empty list, like
/// every other query here.
#[must_use]
pub fn list_entries(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .map(DirEntry::into_path)
        .collect()
}

/// Walk `dir`, silently dropping every entry that errors
fn readable_entries(dir: &Path) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
}

/// Size of an entry, 0 when the metadata read fails
fn entry_size(entry: &DirEntry) -> u64 {
    entry.metadata().map_or(0, |m| m.len())
}

/// Lowercased `"." + extension` suffix used for matching
fn extension_suffix(extension: &str) -> String {
    format!(".{}", extension.to_lowercase())
}

/// Case-insensitive suffix match on the entry name
fn matches_suffix(entry: &DirEntry, suffix: &str) -> bool {
    entry
        .file_name()
        .to_string_lossy()
        .to_lowercase()
        .ends_with(suffix)
}
