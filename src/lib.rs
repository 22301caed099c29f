//! dirscout - directory tree analyzer
//!
//! Scans a directory subtree into an immutable in-memory node graph,
//! answers aggregate statistics queries by re-walking the live
//! filesystem on demand, and performs best-effort create/rename/
//! delete mutations.
//!
//! # Architecture
//!
//! - [`tree`]: bounded-depth recursive tree construction with
//!   partial-failure tolerance
//! - [`stats`]: per-query full re-traversal aggregation (counts,
//!   sizes, extension and size filters)
//! - [`mutate`]: create/delete/rename against the live filesystem
//! - [`metadata`]: per-entry attribute extraction and owner lookup
//! - [`format`]: human-readable size and timestamp rendering
//! - [`observer`]: event sink the tree builder and mutator report to
//!
//! Reads flow one way: root path -> tree builder -> node graph ->
//! stats/format -> display data. Mutations flow the other way and are
//! followed by a fresh scan; nothing patches an existing tree.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! fn main() -> dirscout::Result<()> {
//!     let report = dirscout::build_tree(Path::new("/tmp"))?;
//!     println!("{} entries", report.root().node_count());
//!     println!("{} bytes", dirscout::stats::total_size(Path::new("/tmp")));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod format;
pub mod metadata;
pub mod mutate;
pub mod node;
pub mod observer;
pub mod stats;
pub mod tree;

pub use error::{Result, ScanError};
pub use metadata::{read_details, EntryDetails};
pub use mutate::{create_file, delete, rename_file};
pub use node::{FileNode, ScanReport, SkippedEntry};
pub use observer::{Mutation, NullObserver, ScanObserver, TracingObserver};
pub use stats::StatsSnapshot;
pub use tree::{build_tree, build_tree_with_observer, MAX_DEPTH};
