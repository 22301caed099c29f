//! Human-readable rendering of byte counts and timestamps
//!
//! Pure, stateless transformations with no filesystem access. The
//! display layer calls these on demand for whichever node is selected.

use chrono::{DateTime, Local, TimeZone};
use std::time::SystemTime;

/// Size units on a base-1024 scale
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Output pattern for timestamps, local time
const DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Sentinel rendered when a timestamp is missing or unrepresentable
pub const DATE_SENTINEL: &str = "\u{2014}";

/// Format a byte count as a human-readable size string
///
/// Selects the largest unit in {B, KB, MB, GB, TB} such that the
/// scaled value is at least 1, and formats it with two decimal
/// places. Zero renders as `"0 B"`. Values beyond the TB range stay
/// in TB.
///
/// # Examples
///
/// ```
/// use dirscout::format::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// ```
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut group = 0;
    let mut scale = 1u64;
    while group < UNITS.len() - 1 && bytes >= scale * 1024 {
        scale *= 1024;
        group += 1;
    }

    #[allow(clippy::cast_precision_loss)] // display only, 2 decimal places
    let scaled = bytes as f64 / scale as f64;
    format!("{scaled:.2} {}", UNITS[group])
}

/// Format a filesystem timestamp as `dd.MM.yyyy HH:mm:ss` local time
///
/// `None` (attribute unavailable on this platform or unreadable)
/// renders the sentinel `"\u{2014}"` rather than failing.
#[must_use]
pub fn format_date(time: Option<SystemTime>) -> String {
    time.map_or_else(
        || DATE_SENTINEL.to_string(),
        |t| DateTime::<Local>::from(t).format(DATE_FORMAT).to_string(),
    )
}

/// Format an epoch-millisecond value as `dd.MM.yyyy HH:mm:ss` local time
///
/// Out-of-range inputs render the sentinel `"\u{2014}"`.
#[must_use]
pub fn format_epoch_millis(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(dt) => dt.format(DATE_FORMAT).to_string(),
        _ => DATE_SENTINEL.to_string(),
    }
}
