//! Command-line interface definitions
//!
//! One subcommand per core operation, plus an `OutputConfig` group
//! shared by all of them for logging verbosity.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Directory tree analyzer: scan, aggregate statistics, mutate
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,

    /// Output and logging configuration
    #[command(flatten)]
    pub output: OutputConfig,
}

/// Core operations exposed by the binary
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Scan a directory and print its tree
    Scan {
        /// Root directory to scan
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Print aggregate statistics after the tree
        #[arg(long)]
        stats: bool,

        /// List the entries the scan had to skip
        #[arg(long)]
        show_skipped: bool,
    },

    /// Print aggregate statistics for a directory
    Stats {
        /// Directory to aggregate over
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Restrict file count and total size to one extension
        /// (without the dot, case-insensitive)
        #[arg(long, value_name = "EXT")]
        extension: Option<String>,

        /// Also list files at least this many bytes large
        #[arg(long, value_name = "BYTES")]
        min_size: Option<u64>,

        /// Also list the N largest files
        #[arg(long, value_name = "N")]
        largest: Option<usize>,
    },

    /// Show the metadata details of a single entry
    Info {
        /// File or directory to inspect
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Create an empty file inside a directory
    Create {
        /// Directory the file is created in (must already exist)
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Name of the new file
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Delete a file or a whole directory tree
    Delete {
        /// Entry to delete
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Rename a file within its directory (files only)
    Rename {
        /// File to rename
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// New file name, including any extension
        #[arg(value_name = "NEW_NAME")]
        new_name: String,
    },
}

/// Output and logging configuration
///
/// Used by: `main()`, logging initialization
#[derive(clap::Args, Debug, Clone)]
#[command(next_help_heading = "Output Options")]
pub struct OutputConfig {
    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress all output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl OutputConfig {
    /// Maximum tracing level implied by the flags
    ///
    /// `None` means logging stays disabled entirely.
    #[must_use]
    pub const fn log_level(&self) -> Option<tracing::Level> {
        if self.quiet {
            return None;
        }
        Some(match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        })
    }
}

impl Args {
    /// Validate command-line arguments
    ///
    /// # Errors
    ///
    /// This function will return an error if both `--quiet` and
    /// `--verbose` options are used.
    pub fn validate(&self) -> Result<()> {
        if self.output.quiet && self.output.verbose > 0 {
            anyhow::bail!("Cannot use both --quiet and --verbose options");
        }
        Ok(())
    }
}
