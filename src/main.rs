//! dirscout binary entry point
//!
//! Thin presentation layer over the library core: parses arguments,
//! initializes logging, runs the requested operation, and renders the
//! results. Scans run on a background thread behind a spinner so the
//! terminal stays responsive; every successful mutation is followed
//! by a fresh scan of the enclosing directory to resynchronize the
//! displayed view.

use anyhow::{anyhow, Context};
use clap::Parser;
use dirscout::cli::{Args, Command};
use dirscout::format::{format_date, format_size};
use dirscout::node::{FileNode, ScanReport};
use dirscout::{metadata, mutate, stats, tree};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::level_filters::LevelFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.validate()?;

    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_max_level(args.output.log_level().map_or(LevelFilter::OFF, Into::into))
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Scan {
            path,
            stats: with_stats,
            show_skipped,
        } => run_scan(&path, with_stats, show_skipped),
        Command::Stats {
            path,
            extension,
            min_size,
            largest,
        } => run_stats(&path, extension.as_deref(), min_size, largest),
        Command::Info { path } => run_info(&path),
        Command::Create { dir, name } => {
            let created = mutate::create_file(&dir, &name)?;
            println!("Created {}", created.display());
            refresh(&dir)
        }
        Command::Delete { path } => {
            mutate::delete(&path)?;
            println!("Deleted {}", path.display());
            match path.parent() {
                Some(parent) => refresh(parent),
                None => Ok(()),
            }
        }
        Command::Rename { path, new_name } => {
            let renamed = mutate::rename_file(&path, &new_name)?;
            println!("Renamed {} -> {}", path.display(), renamed.display());
            match renamed.parent() {
                Some(parent) => refresh(parent),
                None => Ok(()),
            }
        }
    }
}

/// Scan on a background thread, then render the tree
fn run_scan(path: &Path, with_stats: bool, show_skipped: bool) -> anyhow::Result<()> {
    let report = scan_in_background(path)?;

    print_tree(report.root(), 0);

    if show_skipped && !report.skipped().is_empty() {
        println!();
        println!("Skipped entries:");
        for skip in report.skipped() {
            println!("  {}: {}", skip.path.display(), skip.reason);
        }
    }

    if with_stats {
        println!();
        print_snapshot(&stats::snapshot(path, None));
    }

    Ok(())
}

/// Run the blocking traversal off the main thread, ticking a spinner
fn scan_in_background(path: &Path) -> anyhow::Result<ScanReport> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!("Scanning {}", path.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let root = path.to_path_buf();
    let handle = std::thread::spawn(move || tree::build_tree(&root));
    let result = handle.join().map_err(|_| anyhow!("scan thread panicked"));

    spinner.finish_and_clear();
    Ok(result??)
}

/// Aggregate statistics for one directory
fn run_stats(
    path: &Path,
    extension: Option<&str>,
    min_size: Option<u64>,
    largest: Option<usize>,
) -> anyhow::Result<()> {
    print_snapshot(&stats::snapshot(path, extension));

    if let Some(min) = min_size {
        let matches = stats::filter_by_min_size(path, min);
        println!();
        println!("Files of at least {}:", format_size(min));
        print_file_list(&matches);
    }

    if let Some(count) = largest {
        let sorted = stats::files_sorted_by_size(path);
        println!();
        println!("Largest files:");
        print_file_list(&sorted[..sorted.len().min(count)]);
    }

    Ok(())
}

/// Details record for a single entry
fn run_info(path: &Path) -> anyhow::Result<()> {
    let details = metadata::read_details(path)
        .with_context(|| format!("cannot inspect {}", path.display()))?;

    println!("Name:       {}", details.name);
    println!("Path:       {}", details.path.display());
    match &details.parent {
        Some(parent) => println!("Parent:     {}", parent.display()),
        None => println!("Parent:     (none)"),
    }
    match &details.canonical_path {
        Some(canonical) => println!("Canonical:  {}", canonical.display()),
        None => println!("Canonical:  (unresolved)"),
    }
    println!(
        "Type:       {}",
        if details.is_directory {
            "directory"
        } else {
            "file"
        }
    );
    println!("Size:       {}", format_size(details.size));
    println!("Disk size:  {}", format_size(details.disk_size));
    println!("Created:    {}", format_date(details.created));
    println!("Modified:   {}", format_date(details.modified));
    println!("Owner:      {}", details.owner);
    println!("Read-only:  {}", if details.readonly { "yes" } else { "no" });
    println!("Hidden:     {}", if details.hidden { "yes" } else { "no" });

    if details.is_directory {
        println!();
        print_snapshot(&stats::snapshot(path, None));
    }

    Ok(())
}

/// Rebuild the enclosing directory's tree after a mutation and report
/// the refreshed view
fn refresh(root: &Path) -> anyhow::Result<()> {
    let report = scan_in_background(root)?;
    println!(
        "{}: {} entries{}",
        root.display(),
        report.root().node_count(),
        if report.skipped().is_empty() {
            String::new()
        } else {
            format!(" ({} skipped)", report.skipped().len())
        }
    );
    Ok(())
}

fn print_tree(node: &FileNode, depth: usize) {
    let indent = "  ".repeat(depth);
    if node.is_directory() {
        println!("{indent}{}/", node.name());
    } else {
        println!(
            "{indent}{} ({}, {})",
            node.name(),
            format_size(node.size()),
            node.owner()
        );
    }
    for child in node.children() {
        print_tree(child, depth + 1);
    }
}

fn print_snapshot(snapshot: &stats::StatsSnapshot) {
    match &snapshot.extension {
        Some(ext) => println!(
            "Statistics (*.{ext}): {} files, {} directories, {}",
            snapshot.files,
            snapshot.directories,
            format_size(snapshot.total_bytes)
        ),
        None => println!(
            "Statistics: {} files, {} directories, {}",
            snapshot.files,
            snapshot.directories,
            format_size(snapshot.total_bytes)
        ),
    }
}

fn print_file_list(files: &[PathBuf]) {
    if files.is_empty() {
        println!("  (none)");
        return;
    }
    for file in files {
        let size = std::fs::metadata(file).map_or(0, |m| m.len());
        println!("  {} ({})", file.display(), format_size(size));
    }
}
