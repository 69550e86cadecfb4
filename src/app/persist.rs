use crate::changelog::save_last_seen_version;
use crate::state::LauncherState;
use crate::storage::{KeyValueStore, save_user_data};
use crate::theme::save_settings;

/// What: Persist settings if marked dirty.
///
/// Inputs:
/// - `state`: Launcher state whose `settings` are written
/// - `store`: Destination store
///
/// Output:
/// - Writes the settings record and clears `settings_dirty`.
///
/// Details:
/// - The flag is cleared even when the write fails; in-memory settings stay
///   authoritative for the session.
pub fn maybe_flush_settings(state: &mut LauncherState, store: &mut dyn KeyValueStore) {
    if !state.settings_dirty {
        return;
    }
    match save_settings(store, &state.settings) {
        Ok(()) => tracing::debug!("[Persist] Settings persisted"),
        Err(e) => tracing::warn!(error = %e, "[Persist] Failed to write settings"),
    }
    state.settings_dirty = false;
}

/// What: Persist hidden ids, custom entries, and page size if marked dirty.
///
/// Inputs:
/// - `state`: Launcher state whose `user_data` is written
/// - `store`: Destination store
///
/// Output:
/// - Writes the user data record and clears `user_data_dirty`.
pub fn maybe_flush_user_data(state: &mut LauncherState, store: &mut dyn KeyValueStore) {
    if !state.user_data_dirty {
        return;
    }
    match save_user_data(store, &state.user_data) {
        Ok(()) => tracing::debug!(
            hidden = state.user_data.hidden_app_ids.len(),
            custom = state.user_data.custom_apps.len(),
            "[Persist] User data persisted"
        ),
        Err(e) => tracing::warn!(error = %e, "[Persist] Failed to write user data"),
    }
    state.user_data_dirty = false;
}

/// What: Persist the last-seen version marker if marked dirty.
pub fn maybe_flush_version(state: &mut LauncherState, store: &mut dyn KeyValueStore) {
    if !state.version_dirty {
        return;
    }
    if let Some(version) = state.last_seen_version.as_deref() {
        match save_last_seen_version(store, version) {
            Ok(()) => tracing::debug!(version, "[Persist] Version marker persisted"),
            Err(e) => tracing::warn!(error = %e, "[Persist] Failed to write version marker"),
        }
    }
    state.version_dirty = false;
}

/// Flush every dirty record.
pub fn flush_all(state: &mut LauncherState, store: &mut dyn KeyValueStore) {
    maybe_flush_settings(state, store);
    maybe_flush_user_data(state, store);
    maybe_flush_version(state, store);
}
