//! Bounded-depth recursive tree construction
//!
//! Builds a [`FileNode`] graph from a root path using one
//! `read_dir` call per directory level. Each listing handle is
//! released as soon as the level has been enumerated; nothing is held
//! across the recursive descent.
//!
//! # Partial failures
//!
//! Only the root is load-bearing: a missing or non-directory root
//! aborts the scan. Everything below it degrades - an unreadable
//! directory keeps its node with an empty child list, a single entry
//! that vanishes mid-scan is dropped - and each such case is appended
//! to the report's skip list and announced through the observer.

use crate::error::{Result, ScanError};
use crate::metadata::{entry_name, owner_of};
use crate::node::{FileNode, ScanReport, SkippedEntry};
use crate::observer::{ScanObserver, TracingObserver};
use std::fs;
use std::path::Path;

/// Maximum recursion depth below the scan root
///
/// Bounds stack usage and terminates symlink cycles without explicit
/// cycle detection. A node at this depth is still constructed; its
/// children are not enumerated, so deeper entries never appear in the
/// tree.
pub const MAX_DEPTH: usize = 100;

/// Build a node tree from `root`, logging through [`TracingObserver`]
///
/// # Errors
///
/// Returns `ScanError::InvalidPath` if `root` does not exist and
/// `ScanError::NotADirectory` if it exists but is not a directory.
/// Failures below the root never abort the scan; see the module docs.
pub fn build_tree(root: &Path) -> Result<ScanReport> {
    build_tree_with_observer(root, &TracingObserver)
}

/// Build a node tree from `root`, reporting progress to `observer`
///
/// # Errors
///
/// Same contract as [`build_tree`].
pub fn build_tree_with_observer(root: &Path, observer: &dyn ScanObserver) -> Result<ScanReport> {
    observer.scan_started(root);

    if !root.exists() {
        return Err(ScanError::InvalidPath(root.to_path_buf()));
    }
    let metadata =
        fs::metadata(root).map_err(|e| ScanError::FileSystem(format!("{}: {e}", root.display())))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let absolute = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    let mut root_node = FileNode::new(entry_name(root), absolute, true, 0, owner_of(&metadata));

    let mut skipped = Vec::new();
    build_children(&mut root_node, 0, &mut skipped, observer);

    observer.scan_finished(root, root_node.node_count(), skipped.len());
    Ok(ScanReport::new(root_node, skipped))
}

/// Enumerate `parent`'s immediate children and recurse into
/// subdirectories
///
/// `depth` is the depth of `parent` itself (root = 0). Children are
/// appended in whatever order the platform listing returns them.
fn build_children(
    parent: &mut FileNode,
    depth: usize,
    skipped: &mut Vec<SkippedEntry>,
    observer: &dyn ScanObserver,
) {
    // Depth cap: stop this branch without error, leaving the child
    // list empty even though the real subtree may not be
    if depth >= MAX_DEPTH {
        return;
    }

    let entries = match fs::read_dir(parent.path()) {
        Ok(entries) => entries,
        Err(e) => {
            // Unreadable listing: the node stays, with zero children
            record_skip(parent.path(), &e.to_string(), skipped, observer);
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                record_skip(parent.path(), &e.to_string(), skipped, observer);
                continue;
            }
        };

        let path = entry.path();
        // Follows symlinks, like the listing the display is built
        // from; cycles are bounded by MAX_DEPTH
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                // Entry vanished mid-scan or is a dangling link
                record_skip(&path, &e.to_string(), skipped, observer);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let mut child = FileNode::new(
            name,
            path,
            metadata.is_dir(),
            metadata.len(),
            owner_of(&metadata),
        );

        if child.is_directory() {
            build_children(&mut child, depth + 1, skipped, observer);
        }
        parent.push_child(child);
    }
}

fn record_skip(
    path: &Path,
    reason: &str,
    skipped: &mut Vec<SkippedEntry>,
    observer: &dyn ScanObserver,
) {
    observer.entry_skipped(path, reason);
    skipped.push(SkippedEntry {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    });
}
