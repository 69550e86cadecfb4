//! User data record: hidden ids, custom entries, and the page size.

use serde::Serialize;
use serde_json::Value;

use super::{KeyValueStore, USER_DATA_STORAGE_KEY, read_json, write_json};
use crate::errors::StorageError;
use crate::logic::pagination::{DEFAULT_PAGE_SIZE, normalize_page_size};
use crate::logic::sanitize::{RawAppRecord, sanitize_app_record};
use crate::state::types::{AppEntry, AppOrigin};
use crate::theme::resolve::number_from_value;

/// Per-user launcher data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    /// Ids the user hid from the grid.
    pub hidden_app_ids: Vec<String>,
    /// User-defined entries (custom origin).
    pub custom_apps: Vec<AppEntry>,
    /// Normalized paged-mode page size.
    pub page_size: usize,
}

impl Default for UserData {
    fn default() -> Self {
        Self {
            hidden_app_ids: Vec::new(),
            custom_apps: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// On-disk shape of [`UserData`].
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredUserData<'a> {
    /// Hidden ids as stored.
    hidden_app_ids: &'a [String],
    /// Custom entries without their origin.
    custom_apps: Vec<RawAppRecord>,
    /// Page size.
    page_size: usize,
}

impl UserData {
    /// What: Decode user data from an untrusted JSON value.
    ///
    /// Inputs:
    /// - `value`: Parsed record.
    ///
    /// Output:
    /// - User data with each field defaulted independently when missing or
    ///   malformed. Custom entries are re-sanitized; invalid ones are dropped.
    /// - Hidden ids are trimmed and blank ones dropped.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let hidden_app_ids = value
            .get("hiddenAppIds")
            .and_then(Value::as_array)
            .map(|ids| {
                ids.iter()
                    .filter_map(Value::as_str)
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let custom_apps: Vec<AppEntry> = value
            .get("customApps")
            .and_then(Value::as_array)
            .map(|apps| {
                apps.iter()
                    .filter_map(RawAppRecord::from_value)
                    .filter_map(|raw| sanitize_app_record(&raw, AppOrigin::Custom))
                    .collect()
            })
            .unwrap_or_default();
        let page_size = normalize_page_size(value.get("pageSize").and_then(number_from_value));
        Self {
            hidden_app_ids,
            custom_apps,
            page_size,
        }
    }

    /// Storage representation (custom entries without origin).
    #[must_use]
    pub fn to_value(&self) -> Value {
        let stored = StoredUserData {
            hidden_app_ids: &self.hidden_app_ids,
            custom_apps: self.custom_apps.iter().map(RawAppRecord::from_entry).collect(),
            page_size: self.page_size,
        };
        serde_json::to_value(stored).unwrap_or(Value::Null)
    }
}

/// What: Load user data from the store, defaulting on any problem.
///
/// Output:
/// - Stored user data, or [`UserData::default`] when missing or unreadable.
pub fn load_user_data(store: &dyn KeyValueStore) -> UserData {
    let data = read_json(store, USER_DATA_STORAGE_KEY)
        .map(|value| UserData::from_value(&value))
        .unwrap_or_default();
    tracing::debug!(
        hidden = data.hidden_app_ids.len(),
        custom = data.custom_apps.len(),
        page_size = data.page_size,
        "[Persist] Loaded user data"
    );
    data
}

/// What: Persist user data.
///
/// # Errors
/// - `StorageError` from encoding or the store.
pub fn save_user_data(store: &mut dyn KeyValueStore, data: &UserData) -> Result<(), StorageError> {
    write_json(store, USER_DATA_STORAGE_KEY, &data.to_value())
}
