//! Shared fixtures for integration tests

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Standard sample layout used across the suites:
///
/// ```text
/// <root>/
///   a.txt      10 bytes
///   b/
///     c.txt    20 bytes
/// ```
#[allow(dead_code)]
pub fn sample_tree() -> TempDir {
    let temp_dir = TempDir::new().expect("failed to create temp directory");
    fs::write(temp_dir.path().join("a.txt"), vec![b'a'; 10]).expect("failed to write a.txt");
    fs::create_dir(temp_dir.path().join("b")).expect("failed to create b");
    fs::write(temp_dir.path().join("b/c.txt"), vec![b'c'; 20]).expect("failed to write c.txt");
    temp_dir
}

/// Create a chain of nested directories `d1/d2/.../d<levels>` under
/// `root` and return the deepest path
#[allow(dead_code)]
pub fn nested_chain(root: &Path, levels: usize) -> std::path::PathBuf {
    let mut path = root.to_path_buf();
    for level in 1..=levels {
        path.push(format!("d{level}"));
    }
    fs::create_dir_all(&path).expect("failed to create nested chain");
    path
}
