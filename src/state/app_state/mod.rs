//! Central `LauncherState` container.

use crate::errors::{RemoteLoadError, ValidationError};
use crate::events::GestureState;
use crate::logic::context_menu::ContextMenuState;
use crate::logic::{assemble_catalog, build_filtered_list, split_apps};
use crate::state::modal::Surfaces;
use crate::state::types::{AppEntry, LayoutMode, Surface};
use crate::storage::{KeyValueStore, UserData, load_user_data};
use crate::theme::{Settings, load_settings};

mod methods;
#[cfg(test)]
mod tests;

/// Launcher state shared by the router, the workers, and the host renderer.
///
/// Every mutation goes through [`LauncherState::apply`] or one of the reload
/// hooks; derived collections (`catalog`, `visible`, `hidden`, `filtered`)
/// are recomputed by `refresh_view` after each change. Persisted subsets are
/// tracked with dirty flags and flushed by `app::persist`.
#[derive(Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct LauncherState {
    /// Validated appearance settings.
    pub settings: Settings,
    /// Hidden ids, custom entries, and page size.
    pub user_data: UserData,
    /// Entries from the last successful catalog fetch.
    pub remote_catalog: Vec<AppEntry>,
    /// Remote plus custom entries with unique ids.
    pub catalog: Vec<AppEntry>,
    /// Catalog entries not hidden, in catalog order.
    pub visible: Vec<AppEntry>,
    /// Hidden catalog entries, in catalog order.
    pub hidden: Vec<AppEntry>,
    /// Visible entries matching the search, plus the hidden group when idle.
    pub filtered: Vec<AppEntry>,

    // View
    /// Current search input text.
    pub search_term: String,
    /// Whether the search field has focus.
    pub search_focused: bool,
    /// Zero-based page in paged mode; always 0 in compact mode.
    pub current_page: usize,
    /// Index into `filtered` of the highlighted entry.
    pub active_index: Option<usize>,
    /// Compact or paged layout.
    pub layout: LayoutMode,
    /// Open modal surfaces.
    pub surfaces: Surfaces,
    /// Custom entry being edited on the add-entry surface.
    pub editing_id: Option<String>,

    // Input
    /// Per-entry action menu.
    pub context_menu: ContextMenuState,
    /// Drag, long-press, and wheel trackers.
    pub gestures: GestureState,

    // Loading
    /// Whether a catalog reload is in flight.
    pub is_loading: bool,
    /// Last catalog load failure, shown as a dismissible banner.
    pub error: Option<RemoteLoadError>,
    /// Last rejected form submission.
    pub form_error: Option<ValidationError>,

    // Changelog
    /// Version whose changelog prompt is showing.
    pub changelog: Option<String>,
    /// Last version whose changelog was dismissed.
    pub last_seen_version: Option<String>,

    /// Id of the most recent reload; older results are discarded.
    latest_reload_id: u64,

    // Persistence
    /// `settings` needs to be saved.
    pub settings_dirty: bool,
    /// `user_data` needs to be saved.
    pub user_data_dirty: bool,
    /// `last_seen_version` needs to be saved.
    pub version_dirty: bool,
}

impl LauncherState {
    /// What: Build a state from already-loaded settings and user data.
    ///
    /// Inputs:
    /// - `settings`: Validated settings.
    /// - `user_data`: Validated user data.
    ///
    /// Output:
    /// - State with a custom-only catalog and `is_loading` set until the first
    ///   reload commits.
    ///
    /// Details:
    /// - Opens the settings surface when first-run setup has not been completed.
    #[must_use]
    pub fn new(settings: Settings, user_data: UserData) -> Self {
        let catalog = assemble_catalog(Vec::new(), user_data.custom_apps.clone());
        let split = split_apps(&catalog, &user_data.hidden_app_ids);
        let filtered = build_filtered_list(&split.visible, split.hidden.len(), "");
        let mut surfaces = Surfaces::default();
        if !settings.has_completed_setup {
            surfaces.open(Surface::Settings);
        }
        Self {
            settings,
            user_data,
            remote_catalog: Vec::new(),
            catalog,
            visible: split.visible,
            hidden: split.hidden,
            filtered,
            search_term: String::new(),
            search_focused: false,
            current_page: 0,
            active_index: None,
            layout: LayoutMode::default(),
            surfaces,
            editing_id: None,
            context_menu: ContextMenuState::default(),
            gestures: GestureState::default(),
            is_loading: true,
            error: None,
            form_error: None,
            changelog: None,
            last_seen_version: None,
            latest_reload_id: 0,
            settings_dirty: false,
            user_data_dirty: false,
            version_dirty: false,
        }
    }

    /// What: Hydrate a state from durable storage.
    ///
    /// Inputs:
    /// - `store`: Key-value store holding settings, user data, and the version marker.
    ///
    /// Output:
    /// - State built from whatever could be read; unreadable records fall back to defaults.
    pub fn from_store(store: &dyn KeyValueStore) -> Self {
        let mut state = Self::new(load_settings(store), load_user_data(store));
        state.last_seen_version = crate::changelog::load_last_seen_version(store);
        tracing::debug!(
            custom = state.user_data.custom_apps.len(),
            hidden = state.user_data.hidden_app_ids.len(),
            page_size = state.user_data.page_size,
            "[Persist] Hydrated launcher state"
        );
        state
    }
}
