use super::resolve::settings_from_value;
use super::types::Settings;
use crate::errors::StorageError;
use crate::storage::{KeyValueStore, SETTINGS_STORAGE_KEY, read_json, write_json};

/// What: Load appearance settings from the store.
///
/// Inputs:
/// - `store`: Backing key-value store.
///
/// Output:
/// - Validated settings; defaults when the record is missing or unreadable.
///
/// Details:
/// - Every field is validated independently, so a partially-shaped record
///   keeps its good fields.
pub fn load_settings(store: &dyn KeyValueStore) -> Settings {
    let settings = read_json(store, SETTINGS_STORAGE_KEY)
        .map(|value| settings_from_value(&value))
        .unwrap_or_default();
    tracing::debug!(
        background = ?settings.background_type,
        setup_done = settings.has_completed_setup,
        "[Settings] Loaded appearance settings"
    );
    settings
}

/// What: Persist appearance settings.
///
/// # Errors
/// - `StorageError` when encoding or the store write fails.
pub fn save_settings(store: &mut dyn KeyValueStore, settings: &Settings) -> Result<(), StorageError> {
    write_json(store, SETTINGS_STORAGE_KEY, settings)
}
