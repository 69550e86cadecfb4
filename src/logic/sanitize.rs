//! Pure validators for untrusted entry records.
//!
//! Everything read from the remote catalog or from storage passes through
//! here before it becomes an [`AppEntry`].

use serde::Serialize;
use serde_json::Value;

use crate::state::types::{AppEntry, AppOrigin, EntryKind};

/// Icon used whenever a record's icon is missing or unsafe.
pub const DEFAULT_ICON: &str = "/default-icon.svg";

/// Name given to catalog/system records that arrive without one.
pub const UNTITLED_APP_NAME: &str = "Untitled app";

/// What: Case-insensitive ASCII prefix test.
///
/// Inputs:
/// - `value`: Haystack.
/// - `prefix`: ASCII prefix to look for.
///
/// Output:
/// - `true` when `value` starts with `prefix`, ignoring ASCII case.
fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// What: Accept only http(s) URLs.
///
/// Inputs:
/// - `value`: Raw URL text.
///
/// Output:
/// - `Some(trimmed)` for `http://` or `https://` URLs; `None` otherwise.
///
/// Details:
/// - Scheme matching is case-insensitive; `javascript:` is always rejected.
#[must_use]
pub fn sanitize_http_url(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || starts_with_ignore_case(trimmed, "javascript:") {
        return None;
    }
    if starts_with_ignore_case(trimmed, "http://") || starts_with_ignore_case(trimmed, "https://")
    {
        return Some(trimmed.to_string());
    }
    None
}

/// What: Resolve an icon source, replacing anything unsafe with [`DEFAULT_ICON`].
///
/// Inputs:
/// - `value`: Raw icon text.
///
/// Output:
/// - The trimmed value when it is an http(s) URL, a `data:image/` URI, or a
///   relative path (`/…` or `./…`); [`DEFAULT_ICON`] otherwise.
#[must_use]
pub fn sanitize_icon_source(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || starts_with_ignore_case(trimmed, "javascript:") {
        return DEFAULT_ICON.to_string();
    }
    if starts_with_ignore_case(trimmed, "http://")
        || starts_with_ignore_case(trimmed, "https://")
        || starts_with_ignore_case(trimmed, "data:image/")
        || trimmed.starts_with("./")
        || trimmed.starts_with('/')
    {
        return trimmed.to_string();
    }
    DEFAULT_ICON.to_string()
}

/// What: Normalize an untrusted tag list.
///
/// Inputs:
/// - `value`: JSON value found in a record's `tags` field.
///
/// Output:
/// - Trimmed, non-empty tags in input order. Non-array input yields none.
///
/// Details:
/// - Numbers and booleans are stringified; nulls, objects, and nested arrays
///   are dropped.
#[must_use]
pub fn sanitize_tag_list(value: &Value) -> Vec<String> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|tag| match tag {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Split a comma-separated tag field from the entry form.
#[must_use]
pub fn parse_custom_tag_string(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// What: Kebab-case a display name for use in slug ids.
///
/// Inputs:
/// - `name`: Display name.
///
/// Output:
/// - Lowercase ASCII alphanumerics joined by single dashes, no leading or
///   trailing dash. May be empty when the name has no alphanumerics.
#[must_use]
pub fn kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars().map(|c| c.to_ascii_lowercase()) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch);
        } else {
            pending_dash = true;
        }
    }
    out
}

/// What: Build a slug id from a prefix and a display name.
///
/// Inputs:
/// - `prefix`: Origin prefix (`custom`, `app`).
/// - `name`: Display name.
///
/// Output:
/// - `"{prefix}-{kebab(name)}"`, or `"{prefix}-entry"` when the name has no
///   usable characters.
#[must_use]
pub fn create_slug_id(prefix: &str, name: &str) -> String {
    let base = kebab(name);
    if base.is_empty() {
        format!("{prefix}-entry")
    } else {
        format!("{prefix}-{base}")
    }
}

/// Loosely-typed entry record as found in the catalog payload or storage.
///
/// Every field is optional; wrong-typed fields read as absent. Serializes to
/// the storage shape (no origin).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawAppRecord {
    /// Declared id, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Declared display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Declared description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared target URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Declared icon source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Tags, already stringified.
    pub tags: Vec<String>,
}

impl RawAppRecord {
    /// What: Extract a record from an arbitrary JSON value.
    ///
    /// Inputs:
    /// - `value`: Untrusted JSON.
    ///
    /// Output:
    /// - `None` when `value` is not an object; otherwise the string fields that
    ///   are actually strings plus the sanitized tag list.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(ToString::to_string);
        Some(Self {
            id: text("id"),
            name: text("name"),
            description: text("description"),
            url: text("url"),
            icon: text("icon"),
            tags: obj.get("tags").map(sanitize_tag_list).unwrap_or_default(),
        })
    }

    /// Lossless view of a sanitized entry, used for storage and re-sanitizing.
    #[must_use]
    pub fn from_entry(entry: &AppEntry) -> Self {
        Self {
            id: Some(entry.id.clone()),
            name: Some(entry.name.clone()),
            description: entry.description.clone(),
            url: entry.url.clone(),
            icon: Some(entry.icon.clone()),
            tags: entry.tags.clone(),
        }
    }
}

/// What: Turn a raw record into a sanitized [`AppEntry`].
///
/// Inputs:
/// - `raw`: Untrusted record.
/// - `origin`: Origin to stamp on the entry.
///
/// Output:
/// - `None` for custom-origin records without a name or an http(s) URL.
/// - Otherwise an entry with trimmed fields; the id may be empty and is
///   filled in later by `ensure_unique_app_ids`.
///
/// Details:
/// - Catalog/system records without a name are called [`UNTITLED_APP_NAME`].
/// - Re-sanitizing the output (via [`RawAppRecord::from_entry`]) yields the
///   same fields.
#[must_use]
pub fn sanitize_app_record(raw: &RawAppRecord, origin: AppOrigin) -> Option<AppEntry> {
    let name = raw.name.as_deref().map(str::trim).unwrap_or_default();
    let url = raw.url.as_deref().and_then(sanitize_http_url);
    if origin == AppOrigin::Custom && (name.is_empty() || url.is_none()) {
        return None;
    }
    let description = raw
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(ToString::to_string);
    let tags = raw
        .tags
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect();
    Some(AppEntry {
        id: raw.id.as_deref().map(str::trim).unwrap_or_default().to_string(),
        name: if name.is_empty() {
            UNTITLED_APP_NAME.to_string()
        } else {
            name.to_string()
        },
        description,
        url,
        icon: sanitize_icon_source(raw.icon.as_deref().unwrap_or_default()),
        tags,
        origin,
        kind: EntryKind::Launchable,
    })
}
