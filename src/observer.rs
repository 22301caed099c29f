//! Event sink for scan and mutation progress
//!
//! The tree builder and the mutator report what they are doing through
//! this interface instead of logging directly, so embedders can route
//! events wherever they like (a UI status line, a test collector).
//! [`TracingObserver`] is the default and logs through `tracing` the
//! same way the rest of the crate does.

use std::path::Path;

/// Mutation kinds reported through [`ScanObserver::mutation_performed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// An empty regular file was created
    Create,
    /// A file or directory tree was deleted
    Delete,
    /// A regular file was renamed within its directory
    Rename,
}

/// Observer invoked at defined points of a scan or mutation
///
/// All methods have empty default bodies; implementors override only
/// what they care about. Callbacks must be cheap - they run inline on
/// the (blocking) traversal path.
pub trait ScanObserver {
    /// A traversal is starting at `root`
    fn scan_started(&self, root: &Path) {
        let _ = root;
    }

    /// A traversal finished; `nodes` is the number of constructed
    /// nodes, `skipped` the number of entries it could not read
    fn scan_finished(&self, root: &Path, nodes: usize, skipped: usize) {
        let _ = (root, nodes, skipped);
    }

    /// An entry or subtree was skipped during traversal
    fn entry_skipped(&self, path: &Path, reason: &str) {
        let _ = (path, reason);
    }

    /// A mutation completed successfully against `path`
    fn mutation_performed(&self, mutation: Mutation, path: &Path) {
        let _ = (mutation, path);
    }
}

/// Default observer: structured logging via `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ScanObserver for TracingObserver {
    fn scan_started(&self, root: &Path) {
        tracing::info!("Starting scan of {}", root.display());
    }

    fn scan_finished(&self, root: &Path, nodes: usize, skipped: usize) {
        tracing::info!(
            "Scan of {} finished: {nodes} nodes, {skipped} skipped",
            root.display()
        );
    }

    fn entry_skipped(&self, path: &Path, reason: &str) {
        tracing::warn!("Skipping {}: {reason}", path.display());
    }

    fn mutation_performed(&self, mutation: Mutation, path: &Path) {
        tracing::info!("{mutation:?} completed: {}", path.display());
    }
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl ScanObserver for NullObserver {}
