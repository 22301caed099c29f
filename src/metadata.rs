//! Per-entry metadata extraction
//!
//! Reads the descriptive attributes of a single filesystem entry.
//! Only the initial stat can fail the whole read; every attribute
//! derived after that degrades individually (owner to `"unknown"`,
//! timestamps to `None`) so one unreadable field never hides the rest.

use crate::error::{Result, ScanError};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Owner string used when the uid cannot be resolved to an account
pub const UNKNOWN_OWNER: &str = "unknown";

/// Block granularity used for the on-disk size estimate
const DISK_BLOCK: u64 = 4096;

/// Descriptive attributes of one filesystem entry
///
/// Everything the display layer shows for a selected node, fetched in
/// a single pass. `canonical_path` is `None` when resolution fails
/// (dangling symlink, permission), `created`/`modified` are `None`
/// where the platform or filesystem does not report them.
#[derive(Debug, Clone)]
pub struct EntryDetails {
    /// Entry name (last path segment)
    pub name: String,
    /// Path as given
    pub path: PathBuf,
    /// Parent directory, `None` for a filesystem root
    pub parent: Option<PathBuf>,
    /// Fully resolved path, `None` if resolution failed
    pub canonical_path: Option<PathBuf>,
    /// Whether the entry is a directory
    pub is_directory: bool,
    /// Logical size in bytes
    pub size: u64,
    /// Size rounded up to whole 4096-byte blocks
    pub disk_size: u64,
    /// Creation time, where the filesystem reports one
    pub created: Option<SystemTime>,
    /// Last modification time
    pub modified: Option<SystemTime>,
    /// Owning account name, `"unknown"` when unresolvable
    pub owner: String,
    /// Whether the entry is read-only for the current user
    pub readonly: bool,
    /// Whether the entry is hidden (dot-prefixed name)
    pub hidden: bool,
}

/// Read the details record for a single entry
///
/// # Errors
///
/// Returns `ScanError::NotFound` if the entry does not exist and
/// `ScanError::FileSystem` if the initial stat fails for any other
/// reason. Attribute-level failures after that do not propagate.
pub fn read_details(path: &Path) -> Result<EntryDetails> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ScanError::from_io(path, &e))?;

    let name = entry_name(path);
    let size = metadata.len();

    Ok(EntryDetails {
        hidden: name.starts_with('.'),
        parent: path.parent().map(Path::to_path_buf),
        canonical_path: fs::canonicalize(path).ok(),
        is_directory: metadata.is_dir(),
        disk_size: size.div_ceil(DISK_BLOCK) * DISK_BLOCK,
        created: metadata.created().ok(),
        modified: metadata.modified().ok(),
        owner: owner_of(&metadata),
        readonly: metadata.permissions().readonly(),
        path: path.to_path_buf(),
        name,
        size,
    })
}

/// Last path segment of `path`, or its full rendering when there is
/// none (e.g. `/`)
#[must_use]
pub fn entry_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    )
}

/// Resolve the owning account name from already-fetched metadata
///
/// Falls back to `"unknown"` when the uid has no account entry or the
/// platform has no notion of file ownership.
#[must_use]
pub fn owner_of(metadata: &fs::Metadata) -> String {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        resolve_owner(metadata.uid())
    }
    #[cfg(not(unix))]
    {
        let _ = metadata;
        UNKNOWN_OWNER.to_string()
    }
}

/// uid -> account name with a process-wide cache
///
/// Scans resolve the same handful of uids for every node, so the
/// passwd lookup is cached behind an `RwLock`.
#[cfg(unix)]
fn resolve_owner(uid: u32) -> String {
    use std::collections::HashMap;
    use std::sync::{OnceLock, RwLock};

    static CACHE: OnceLock<RwLock<HashMap<u32, String>>> = OnceLock::new();
    let cache = CACHE.get_or_init(|| RwLock::new(HashMap::new()));

    if let Ok(map) = cache.read() {
        if let Some(name) = map.get(&uid) {
            return name.clone();
        }
    }

    let name = uzers::get_user_by_uid(uid).map_or_else(
        || UNKNOWN_OWNER.to_string(),
        |u| u.name().to_string_lossy().into_owned(),
    );
    if let Ok(mut map) = cache.write() {
        map.insert(uid, name.clone());
    }
    name
}
