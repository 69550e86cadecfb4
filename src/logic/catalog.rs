//! Catalog assembly: remote records plus user-defined entries, with
//! catalog-wide unique ids.

use std::collections::HashSet;

use serde_json::Value;

use super::sanitize::{DEFAULT_ICON, RawAppRecord, create_slug_id, sanitize_app_record};
use crate::state::types::{AppEntry, AppOrigin, HIDDEN_GROUP_ID};

/// Preset icons offered by the entry editor, in display order.
pub const BASE_ICON_LIBRARY: &[&str] = &[
    "https://img.icons8.com/ios-filled/100/ffffff/mac-os.png",
    "https://img.icons8.com/ios-filled/100/ffffff/calendar.png",
    "https://img.icons8.com/ios-filled/100/ffffff/apple-mail.png",
    "https://img.icons8.com/ios-filled/100/ffffff/compass.png",
    "https://img.icons8.com/ios-filled/100/ffffff/note.png",
    "https://img.icons8.com/ios-filled/100/ffffff/reminders.png",
    "https://img.icons8.com/ios-filled/100/ffffff/imessage.png",
    "https://img.icons8.com/ios-filled/100/ffffff/facetime.png",
    "https://img.icons8.com/ios-filled/100/ffffff/picture.png",
    "https://img.icons8.com/ios-filled/100/ffffff/apple-music.png",
    "https://img.icons8.com/ios-filled/100/ffffff/podcast.png",
    "https://img.icons8.com/ios-filled/100/ffffff/tv.png",
    "https://img.icons8.com/ios-filled/100/ffffff/apple-maps.png",
    "https://img.icons8.com/ios-filled/100/ffffff/partly-cloudy-day.png",
    "https://img.icons8.com/ios-filled/100/ffffff/news.png",
    "https://img.icons8.com/ios-filled/100/ffffff/opened-folder.png",
    "https://img.icons8.com/ios-filled/100/ffffff/contacts.png",
    "https://img.icons8.com/ios-filled/100/ffffff/calculator.png",
    "https://img.icons8.com/ios-filled/100/ffffff/console.png",
    "https://img.icons8.com/ios-filled/100/ffffff/settings.png",
    "https://img.icons8.com/ios-filled/100/ffffff/xcode.png",
    "https://img.icons8.com/ios-filled/100/ffffff/numbers.png",
    "https://img.icons8.com/ios-filled/100/ffffff/pages.png",
    "https://img.icons8.com/ios-filled/100/ffffff/keynote.png",
    "https://img.icons8.com/ios-filled/100/ffffff/shortcut.png",
    "https://img.icons8.com/ios-filled/100/ffffff/home-automation.png",
    "https://img.icons8.com/ios-filled/100/ffffff/real-time-traffic.png",
    "https://img.icons8.com/ios-filled/100/ffffff/microphone.png",
    "https://img.icons8.com/ios-filled/100/ffffff/apple-books.png",
    "https://img.icons8.com/ios-filled/100/ffffff/joystick.png",
    DEFAULT_ICON,
];

/// What: Probe `base`, `base-2`, `base-3`, … until one is not in `taken`.
///
/// Inputs:
/// - `base`: Preferred id.
/// - `taken`: Ids already claimed.
///
/// Output:
/// - First free candidate.
#[must_use]
pub fn next_free_id(base: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }
    let mut counter = 2usize;
    loop {
        let candidate = format!("{base}-{counter}");
        if !taken.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// What: Give every entry a catalog-wide unique id.
///
/// Inputs:
/// - `entries`: Entries in priority order (remote first, then custom).
///
/// Output:
/// - Same entries, same order, with pairwise-distinct ids.
///
/// Details:
/// - Blank ids and the reserved hidden-group id are replaced by an
///   origin-prefixed slug of the name.
/// - Collisions keep the first claimant; later ones get `-2`, `-3`, ….
#[must_use]
pub fn ensure_unique_app_ids(entries: Vec<AppEntry>) -> Vec<AppEntry> {
    let mut seen: HashSet<String> = HashSet::from([HIDDEN_GROUP_ID.to_string()]);
    entries
        .into_iter()
        .map(|mut entry| {
            let declared = entry.id.trim();
            let base = if declared.is_empty() || declared == HIDDEN_GROUP_ID {
                create_slug_id(entry.origin.slug_prefix(), &entry.name)
            } else {
                declared.to_string()
            };
            let unique = next_free_id(&base, &seen);
            if unique != entry.id {
                tracing::trace!(from = %entry.id, to = %unique, "[Catalog] Reassigned entry id");
            }
            seen.insert(unique.clone());
            entry.id = unique;
            entry
        })
        .collect()
}

/// What: Parse a remote catalog payload into sanitized catalog entries.
///
/// Inputs:
/// - `payload`: Decoded JSON body of the catalog endpoint.
///
/// Output:
/// - Sanitized entries with unique ids; a non-array payload yields none.
#[must_use]
pub fn map_catalog_apps(payload: &Value) -> Vec<AppEntry> {
    let Some(items) = payload.as_array() else {
        tracing::warn!("[Catalog] Payload is not an array; treating as empty");
        return Vec::new();
    };
    let entries = items
        .iter()
        .filter_map(RawAppRecord::from_value)
        .filter_map(|raw| sanitize_app_record(&raw, AppOrigin::Catalog))
        .collect();
    ensure_unique_app_ids(entries)
}

/// What: Merge remote and custom entries into the combined catalog.
///
/// Inputs:
/// - `remote`: Catalog-origin entries from the last successful fetch.
/// - `custom`: User-defined entries.
///
/// Output:
/// - Remote entries first, then custom, with unique ids (catalog wins).
#[must_use]
pub fn assemble_catalog(remote: Vec<AppEntry>, custom: Vec<AppEntry>) -> Vec<AppEntry> {
    let mut combined = remote;
    combined.extend(custom);
    ensure_unique_app_ids(combined)
}

/// Custom entries of `catalog` in their storage shape (origin stripped).
#[must_use]
pub fn custom_records(catalog: &[AppEntry]) -> Vec<RawAppRecord> {
    catalog
        .iter()
        .filter(|entry| entry.origin == AppOrigin::Custom)
        .map(RawAppRecord::from_entry)
        .collect()
}

/// What: Icons offered by the editor's preset picker.
///
/// Inputs:
/// - `catalog`: Combined catalog.
///
/// Output:
/// - [`BASE_ICON_LIBRARY`] followed by every other icon used in the catalog,
///   each listed once.
#[must_use]
pub fn icon_library(catalog: &[AppEntry]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    BASE_ICON_LIBRARY
        .iter()
        .copied()
        .chain(catalog.iter().map(|entry| entry.icon.as_str()))
        .filter(|icon| seen.insert(icon))
        .map(ToString::to_string)
        .collect()
}
