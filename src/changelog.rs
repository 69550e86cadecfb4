//! One-time changelog prompt shown after the launcher version changes.
//!
//! The caching collaborator reports the running version; when it differs
//! from the last-seen marker in storage the state raises a prompt, and
//! dismissing it stores the new marker.

use std::cmp::Ordering;

use crate::errors::StorageError;
use crate::storage::{KeyValueStore, VERSION_STORAGE_KEY, read_json, write_json};

/// Version of this build.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// What: Release notes embedded for a specific version.
///
/// Details:
/// - Listed newest first; only versions newer than the last-seen marker are shown.
pub struct ChangelogEntry {
    /// Version string this entry describes (e.g., "0.3.0").
    pub version: &'static str,
    /// Short headline.
    pub title: &'static str,
    /// Bullet points.
    pub highlights: &'static [&'static str],
}

/// Embedded release notes, newest first.
pub const CHANGELOG: &[ChangelogEntry] = &[
    ChangelogEntry {
        version: "0.3.0",
        title: "Adjustable pages and hidden apps",
        highlights: &[
            "Choose how many apps fit on a page (14 to 56).",
            "Hidden apps collect in a single tile at the end of the grid.",
            "Right-click or long-press any app for quick actions.",
        ],
    },
    ChangelogEntry {
        version: "0.2.0",
        title: "Your own shortcuts",
        highlights: &[
            "Add, edit, and delete custom apps with tags and icons.",
            "Glass tint and blur controls in settings.",
        ],
    },
];

/// What: Compare version strings numerically.
///
/// Inputs:
/// - `a`: Left-hand version string.
/// - `b`: Right-hand version string.
///
/// Output:
/// - `Ordering` indicating which version is greater.
///
/// Details:
/// - Splits on `.` and `-`, comparing numeric segments numerically and others lexically.
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a_parts: Vec<&str> = a.split(['.', '-']).collect();
    let b_parts: Vec<&str> = b.split(['.', '-']).collect();
    let len = a_parts.len().max(b_parts.len());

    for idx in 0..len {
        let a_seg = a_parts.get(idx).copied().unwrap_or("0");
        let b_seg = b_parts.get(idx).copied().unwrap_or("0");
        let ord = match (a_seg.parse::<u64>(), b_seg.parse::<u64>()) {
            (Ok(a_num), Ok(b_num)) => a_num.cmp(&b_num),
            _ => a_seg.cmp(b_seg),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Whether a version notification should raise the prompt.
#[must_use]
pub fn should_prompt(notified: &str, last_seen: Option<&str>) -> bool {
    !notified.trim().is_empty() && last_seen != Some(notified)
}

/// What: Release notes the user has not seen yet.
///
/// Inputs:
/// - `current`: Running version.
/// - `last_seen`: Stored marker, if any.
///
/// Output:
/// - Entries newer than `last_seen` and not newer than `current`, newest first.
///   Without a marker only the current version's entry is returned.
#[must_use]
pub fn notes_since(current: &str, last_seen: Option<&str>) -> Vec<&'static ChangelogEntry> {
    CHANGELOG
        .iter()
        .filter(|entry| compare_versions(entry.version, current) != Ordering::Greater)
        .filter(|entry| match last_seen {
            Some(seen) => compare_versions(entry.version, seen) == Ordering::Greater,
            None => entry.version == current,
        })
        .collect()
}

/// What: Read the last-seen version marker.
///
/// Output:
/// - The stored version, or `None` when missing or unreadable.
pub fn load_last_seen_version(store: &dyn KeyValueStore) -> Option<String> {
    read_json(store, VERSION_STORAGE_KEY).and_then(|value| value.as_str().map(ToString::to_string))
}

/// What: Store the last-seen version marker.
///
/// # Errors
/// - `StorageError` when the write fails.
pub fn save_last_seen_version(
    store: &mut dyn KeyValueStore,
    version: &str,
) -> Result<(), StorageError> {
    write_json(store, VERSION_STORAGE_KEY, version)
}
