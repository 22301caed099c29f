//! Integration tests for bounded-depth tree construction

mod common;

use dirscout::node::FileNode;
use dirscout::tree::{build_tree, MAX_DEPTH};
use dirscout::ScanError;
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_root_fails_with_invalid_path() {
    let temp_dir = TempDir::new().unwrap();
    let result = build_tree(&temp_dir.path().join("no-such-dir"));
    assert!(matches!(result, Err(ScanError::InvalidPath(_))));
}

#[test]
fn file_root_fails_with_not_a_directory() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("root.txt");
    fs::write(&file_path, b"not a dir").unwrap();

    let result = build_tree(&file_path);
    assert!(matches!(result, Err(ScanError::NotADirectory(_))));
}

#[test]
fn sample_layout_builds_expected_tree() {
    let temp_dir = common::sample_tree();
    let report = build_tree(temp_dir.path()).unwrap();
    let root = report.root();

    assert!(root.is_directory());
    assert_eq!(root.size(), 0);
    assert_eq!(root.children().len(), 2);

    let file = root.children().iter().find(|n| n.name() == "a.txt").unwrap();
    assert_eq!(file.size(), 10);
    assert!(!file.is_directory());

    let dir = root.children().iter().find(|n| n.name() == "b").unwrap();
    assert!(dir.is_directory());
    assert_eq!(dir.size(), 0, "directory size is never a recursive sum");
    assert_eq!(dir.children().len(), 1);
    assert_eq!(dir.children()[0].size(), 20);
}

/// Two scans without intervening changes agree on every node
/// (child ordering is allowed to differ, so compare sorted)
#[test]
fn rescan_is_idempotent() {
    fn collect(node: &FileNode, out: &mut Vec<(String, bool, u64)>) {
        out.push((node.name().to_string(), node.is_directory(), node.size()));
        for child in node.children() {
            collect(child, out);
        }
    }

    let temp_dir = common::sample_tree();
    let first = build_tree(temp_dir.path()).unwrap();
    let second = build_tree(temp_dir.path()).unwrap();

    let mut first_nodes = Vec::new();
    let mut second_nodes = Vec::new();
    collect(first.root(), &mut first_nodes);
    collect(second.root(), &mut second_nodes);
    first_nodes.sort();
    second_nodes.sort();
    assert_eq!(first_nodes, second_nodes);
}

/// A directory at depth 100 is included (with empty children); one at
/// depth 101 is not
#[test]
fn depth_cap_bounds_the_tree() {
    let temp_dir = TempDir::new().unwrap();
    common::nested_chain(temp_dir.path(), MAX_DEPTH + 1);

    let report = build_tree(temp_dir.path()).unwrap();

    let mut node = report.root();
    let mut depth = 0;
    while let Some(child) = node.children().first() {
        node = child;
        depth += 1;
    }

    assert_eq!(depth, MAX_DEPTH, "deepest constructed node");
    assert_eq!(node.name(), format!("d{MAX_DEPTH}"));
    assert!(
        node.children().is_empty(),
        "the real d{} subtree exists on disk but must not be enumerated",
        MAX_DEPTH + 1
    );
    // No skip record either - the cap is silent, not an error
    assert!(report.skipped().is_empty());
}

/// An unreadable subdirectory keeps its node, loses its children, and
/// shows up in the skip list; the scan still succeeds
#[cfg(unix)]
#[test]
fn unreadable_subtree_is_skipped_not_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = common::sample_tree();
    let locked = temp_dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("invisible.txt"), b"x").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root can read anything regardless of mode bits; nothing to test then
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let report = build_tree(temp_dir.path()).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let locked_node = report
        .root()
        .children()
        .iter()
        .find(|n| n.name() == "locked")
        .expect("unreadable directory still gets a node");
    assert!(locked_node.is_directory());
    assert!(locked_node.children().is_empty());

    assert_eq!(report.skipped().len(), 1);
    assert!(report.skipped()[0].path.ends_with("locked"));
}

/// Dangling symlinks cannot be stat'ed and are skipped like vanished
/// entries
#[cfg(unix)]
#[test]
fn dangling_symlink_is_skipped() {
    let temp_dir = common::sample_tree();
    std::os::unix::fs::symlink(
        temp_dir.path().join("not-there"),
        temp_dir.path().join("dangling"),
    )
    .unwrap();

    let report = build_tree(temp_dir.path()).unwrap();
    assert_eq!(report.root().children().len(), 2);
    assert_eq!(report.skipped().len(), 1);
    assert!(report.skipped()[0].path.ends_with("dangling"));
}

/// Events arrive at a custom observer in the documented order
#[test]
fn observer_sees_scan_lifecycle() {
    use dirscout::observer::ScanObserver;
    use std::path::Path;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Events(Mutex<Vec<String>>);

    impl ScanObserver for Events {
        fn scan_started(&self, _root: &Path) {
            self.0.lock().unwrap().push("started".to_string());
        }
        fn scan_finished(&self, _root: &Path, nodes: usize, skipped: usize) {
            self.0
                .lock()
                .unwrap()
                .push(format!("finished {nodes} {skipped}"));
        }
    }

    let temp_dir = common::sample_tree();
    let events = Events::default();
    dirscout::build_tree_with_observer(temp_dir.path(), &events).unwrap();

    let events = events.0.into_inner().unwrap();
    // root + a.txt + b + c.txt
    assert_eq!(events, vec!["started".to_string(), "finished 4 0".to_string()]);
}
