use crate::changelog::should_prompt;
use crate::errors::{RemoteLoadError, ValidationError};
use crate::logic::context_menu::{
    ContextMenuState, MenuAction, MenuCloseReason, clamp_menu_position, menu_actions,
};
use crate::logic::editor::{
    CustomAppInput, apply_prepared_entry, find_custom, prepare_custom_app, remove_custom_app,
};
use crate::logic::pagination::normalize_page_size;
use crate::logic::selection::{
    advance, after_search_change, clamp_index, clamp_to_len, page_for_index,
};
use crate::logic::{
    assemble_catalog, build_filtered_list, build_pages, clamp_page, dedupe_hidden_ids,
    effective_page_size, icon_library, paginate, split_apps, total_pages,
};
use crate::state::intent::{Effect, Intent, Navigation};
use crate::state::types::{
    AppEntry, AppOrigin, ContextMenuSource, LayoutMode, Position, Surface,
};
use crate::theme::{DerivedStyle, SettingsForm, derive_style, settings_from_form};

use super::LauncherState;

impl LauncherState {
    /// What: Apply one user intent.
    ///
    /// Inputs:
    /// - `intent`: Requested transition.
    ///
    /// Output:
    /// - Effects for the host to perform (navigation, focus, feedback, form errors).
    ///
    /// Details:
    /// - Derived collections are recomputed before returning, so callers always
    ///   observe a consistent view.
    pub fn apply(&mut self, intent: Intent) -> Vec<Effect> {
        tracing::trace!(?intent, "[Router] apply");
        let mut effects = Vec::new();
        match intent {
            Intent::FocusSearch { select_all } => {
                self.search_focused = true;
                effects.push(Effect::FocusSearch { select_all });
            }
            Intent::SearchFocusChanged(focused) => self.search_focused = focused,
            Intent::SetSearchTerm(term) => self.set_search_term(term),
            Intent::ClearSearch => self.set_search_term(String::new()),
            Intent::SetActiveIndex(index) => self.set_active_index(index),
            Intent::AdvanceActiveIndex(delta) => self.advance_active_index(delta),
            Intent::ResetActiveIndex => self.active_index = None,
            Intent::OpenActive => {
                if let Some(entry) = self.active_entry().cloned() {
                    effects.extend(self.open_entry(&entry));
                }
            }
            Intent::OpenEntry(id) => {
                if let Some(entry) = self.find_openable(&id).cloned() {
                    effects.extend(self.open_entry(&entry));
                } else {
                    tracing::debug!(id = %id, "[Router] Open ignored for unknown entry");
                }
            }
            Intent::SetPage(page) => self.set_page(page),
            Intent::NextPage => self.set_page(self.current_page.saturating_add(1)),
            Intent::PrevPage => self.set_page(self.current_page.saturating_sub(1)),
            Intent::OpenContextMenu {
                entry_id,
                source,
                position,
            } => self.open_context_menu(entry_id, source, position),
            Intent::PlaceContextMenu { menu, viewport } => {
                if let ContextMenuState::Open { position, .. } = &mut self.context_menu {
                    *position = clamp_menu_position(*position, menu, viewport);
                }
            }
            Intent::CloseContextMenu(reason) => self.close_context_menu(reason),
            Intent::ContextAction(action) => effects.extend(self.run_menu_action(action)),
            Intent::OpenSurface(Surface::AddEntry) => self.open_editor(None, &mut effects),
            Intent::OpenSurface(surface) => self.surfaces.open(surface),
            Intent::CloseSurface(Surface::Settings) => self.close_settings(false),
            Intent::CloseSurface(Surface::AddEntry) => self.close_editor(),
            Intent::CloseSurface(Surface::HiddenList) => self.surfaces.close(Surface::HiddenList),
            Intent::OpenEditor(id) => self.open_editor(id, &mut effects),
            Intent::HideEntry(id) => self.hide_entry(&id),
            Intent::ShowEntry(id) => self.show_entry(&id),
            Intent::DeleteEntry(id) => {
                if let Err(err) = self.delete_entry(&id) {
                    effects.push(Effect::ValidationFailed(err));
                }
            }
            Intent::SubmitCustomApp(input) => effects.push(self.submit_custom_app(&input)),
            Intent::SubmitSettings(form) => self.submit_settings(&form),
            Intent::CloseSettings { mark_completed } => self.close_settings(mark_completed),
            Intent::SetLayout(mode) => self.set_layout(mode),
            Intent::VersionNotified(version) => self.version_notified(version),
            Intent::DismissChangelog => self.dismiss_changelog(),
            Intent::DismissError => self.error = None,
        }
        effects
    }

    // ---- Reload ----

    /// What: Start a catalog reload.
    ///
    /// Output:
    /// - Monotonic id the fetch result must be committed with.
    ///
    /// Details:
    /// - Any reload still in flight becomes stale; its result will be discarded.
    pub fn begin_reload(&mut self) -> u64 {
        self.latest_reload_id = self.latest_reload_id.wrapping_add(1);
        self.is_loading = true;
        self.error = None;
        tracing::debug!(id = self.latest_reload_id, "[Catalog] Reload started");
        self.latest_reload_id
    }

    /// What: Commit the result of a catalog fetch.
    ///
    /// Inputs:
    /// - `id`: Id returned by [`Self::begin_reload`].
    /// - `result`: Sanitized remote entries or the load error.
    ///
    /// Output:
    /// - `true` when committed; `false` when `id` is stale and the result was dropped.
    ///
    /// Details:
    /// - On error the catalog falls back to custom entries only and the error is
    ///   kept for the banner. Hidden ids are pruned only on success.
    pub fn commit_reload(
        &mut self,
        id: u64,
        result: Result<Vec<AppEntry>, RemoteLoadError>,
    ) -> bool {
        if id != self.latest_reload_id {
            tracing::debug!(
                id,
                latest = self.latest_reload_id,
                "[Catalog] Dropping stale reload result"
            );
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(remote) => {
                tracing::info!(count = remote.len(), "[Catalog] Reload committed");
                self.error = None;
                self.set_catalog(remote);
            }
            Err(err) => {
                tracing::warn!(error = %err, "[Catalog] Reload failed; showing custom apps only");
                self.error = Some(err);
                self.remote_catalog.clear();
                self.rebuild_catalog(false);
            }
        }
        true
    }

    /// What: Replace the remote catalog and reconcile user data with it.
    ///
    /// Inputs:
    /// - `remote`: Sanitized remote entries.
    ///
    /// Details:
    /// - Custom entries are rewritten with their final unique ids and hidden ids
    ///   not present in the new catalog are pruned; user data is marked dirty
    ///   when either changes.
    pub fn set_catalog(&mut self, remote: Vec<AppEntry>) {
        self.remote_catalog = remote;
        self.rebuild_catalog(true);
    }

    /// Reassemble the catalog from the remote entries and user data.
    fn rebuild_catalog(&mut self, prune_hidden: bool) {
        let catalog = assemble_catalog(
            self.remote_catalog.clone(),
            self.user_data.custom_apps.clone(),
        );
        let custom: Vec<AppEntry> = catalog
            .iter()
            .filter(|entry| entry.origin == AppOrigin::Custom)
            .cloned()
            .collect();
        if custom != self.user_data.custom_apps {
            self.user_data.custom_apps = custom;
            self.user_data_dirty = true;
        }
        if prune_hidden {
            let hidden = dedupe_hidden_ids(&self.user_data.hidden_app_ids, &catalog);
            if hidden != self.user_data.hidden_app_ids {
                tracing::debug!(
                    before = self.user_data.hidden_app_ids.len(),
                    after = hidden.len(),
                    "[Catalog] Pruned hidden ids"
                );
                self.user_data.hidden_app_ids = hidden;
                self.user_data_dirty = true;
            }
        }
        self.catalog = catalog;
        self.refresh_view();
    }

    /// What: Recompute visible, hidden, and filtered lists and re-clamp the cursor.
    ///
    /// Details:
    /// - A list that shrank under the selection clamps it to the new last index
    ///   (none when empty); in paged mode the page then follows the selection.
    /// - Closes the context menu and the editor target if their entry vanished.
    pub fn refresh_view(&mut self) {
        let split = split_apps(&self.catalog, &self.user_data.hidden_app_ids);
        let previous_len = self.filtered.len();
        self.filtered = build_filtered_list(&split.visible, split.hidden.len(), &self.search_term);
        self.visible = split.visible;
        self.hidden = split.hidden;

        let len = self.filtered.len();
        self.current_page = clamp_page(self.current_page, len, self.layout, self.user_data.page_size);
        let clamped = clamp_to_len(self.active_index, len);
        if clamped != self.active_index {
            tracing::trace!(
                from = ?self.active_index,
                to = ?clamped,
                previous_len,
                len,
                "[Router] Active index clamped to shrunken list"
            );
            self.active_index = clamped;
            self.sync_page_to_active();
        }

        if let Some(target) = self.context_menu.target_id()
            && !self.entry_exists(target)
        {
            self.close_context_menu(MenuCloseReason::TargetVanished);
        }
        if let Some(editing) = self.editing_id.as_deref()
            && !self.entry_exists(editing)
        {
            self.editing_id = None;
        }
    }

    /// Whether `id` is in the catalog or the hidden collection.
    fn entry_exists(&self, id: &str) -> bool {
        self.catalog.iter().any(|entry| entry.id == id)
            || self.hidden.iter().any(|entry| entry.id == id)
    }

    // ---- Derived views ----

    /// Entries per page for the current layout.
    #[must_use]
    pub fn effective_page_size(&self) -> usize {
        effective_page_size(self.layout, self.filtered.len(), self.user_data.page_size)
    }

    /// Number of pages (at least 1).
    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.layout, self.user_data.page_size)
    }

    /// Entries on the current page.
    #[must_use]
    pub fn current_page_entries(&self) -> &[AppEntry] {
        paginate(&self.filtered, self.current_page, self.effective_page_size())
    }

    /// Every page slice, in order.
    #[must_use]
    pub fn pages(&self) -> Vec<&[AppEntry]> {
        build_pages(&self.filtered, self.layout, self.user_data.page_size)
    }

    /// Filtered entry under the active index.
    #[must_use]
    pub fn active_entry(&self) -> Option<&AppEntry> {
        self.active_index.and_then(|index| self.filtered.get(index))
    }

    /// Custom entry being edited, if any.
    #[must_use]
    pub fn editing_entry(&self) -> Option<&AppEntry> {
        let id = self.editing_id.as_deref()?;
        self.catalog.iter().find(|entry| entry.id == id)
    }

    /// Prefilled add-entry form: the edited entry, or blank.
    #[must_use]
    pub fn editor_input(&self) -> CustomAppInput {
        self.editing_entry().map_or_else(CustomAppInput::default, |entry| {
            CustomAppInput::from_entry(entry, &self.icon_library())
        })
    }

    /// Prefilled settings form.
    #[must_use]
    pub fn settings_form(&self) -> SettingsForm {
        SettingsForm::from_settings(&self.settings, self.user_data.page_size)
    }

    /// Preset icons plus icons used by the catalog.
    #[must_use]
    pub fn icon_library(&self) -> Vec<String> {
        icon_library(&self.catalog)
    }

    /// Overlay, tint, and background values for the renderer.
    #[must_use]
    pub fn derived_style(&self) -> DerivedStyle {
        derive_style(&self.settings)
    }

    /// Entry the open context menu targets.
    #[must_use]
    pub fn context_menu_entry(&self) -> Option<&AppEntry> {
        let id = self.context_menu.target_id()?;
        self.catalog.iter().find(|entry| entry.id == id)
    }

    /// Actions the open context menu offers; empty when closed.
    #[must_use]
    pub fn context_menu_actions(&self) -> Vec<MenuAction> {
        match (&self.context_menu, self.context_menu_entry()) {
            (ContextMenuState::Open { source, .. }, Some(entry)) => menu_actions(entry, *source),
            _ => Vec::new(),
        }
    }

    /// Whether the paging gestures apply (paged layout with more than one page).
    #[must_use]
    pub fn can_page(&self) -> bool {
        self.layout == LayoutMode::Paged && self.total_pages() > 1
    }

    /// Id of the most recent reload.
    #[must_use]
    pub const fn latest_reload_id(&self) -> u64 {
        self.latest_reload_id
    }

    // ---- Search and cursor ----

    /// Replace the search term, jump to the first page, and reset the cursor.
    fn set_search_term(&mut self, term: String) {
        self.search_term = term;
        self.current_page = 0;
        self.refresh_view();
        self.active_index = after_search_change(&self.search_term, self.filtered.len());
    }

    /// Clamp and set the active index; paged mode follows it to its page.
    fn set_active_index(&mut self, index: usize) {
        self.active_index = clamp_index(index, self.filtered.len());
        self.sync_page_to_active();
    }

    /// In paged mode, show the page holding the active index.
    fn sync_page_to_active(&mut self) {
        if let Some(active) = self.active_index
            && self.layout == LayoutMode::Paged
        {
            self.current_page = page_for_index(active, self.effective_page_size());
        }
    }

    /// Move the cursor by `delta`, wrapping.
    fn advance_active_index(&mut self, delta: isize) {
        if let Some(next) = advance(self.active_index, delta, self.filtered.len()) {
            self.set_active_index(next);
        }
    }

    /// Go to `page`, clamped to the valid range.
    fn set_page(&mut self, page: usize) {
        self.current_page = clamp_page(page, self.filtered.len(), self.layout, self.user_data.page_size);
    }

    /// Switch layouts; compact mode drops any drag or wheel progress.
    fn set_layout(&mut self, mode: LayoutMode) {
        if self.layout == mode {
            return;
        }
        tracing::debug!(?mode, "[Router] Layout changed");
        self.layout = mode;
        if mode == LayoutMode::Compact {
            self.gestures.drag.cancel();
            self.gestures.wheel.reset();
        }
        self.set_page(self.current_page);
    }

    // ---- Opening ----

    /// Entry `id` in the filtered list or the catalog (hidden entries included).
    fn find_openable(&self, id: &str) -> Option<&AppEntry> {
        self.filtered
            .iter()
            .chain(self.catalog.iter())
            .find(|entry| entry.id == id)
    }

    /// What: Open an entry.
    ///
    /// Output:
    /// - A new-tab navigation for launchable entries; the hidden group opens the
    ///   hidden-list surface instead and yields nothing.
    fn open_entry(&mut self, entry: &AppEntry) -> Option<Effect> {
        if entry.is_hidden_group() {
            self.surfaces.open(Surface::HiddenList);
            return None;
        }
        let url = entry.url.as_deref()?;
        tracing::info!(id = %entry.id, url = %url, "[Router] Opening entry");
        Some(Effect::Navigate(Navigation::new_tab(url)))
    }

    // ---- Context menu ----

    /// Open the menu for a targetable catalog entry; others are ignored.
    fn open_context_menu(&mut self, entry_id: String, source: ContextMenuSource, position: Position) {
        self.gestures.long_press.clear();
        let targetable = self
            .catalog
            .iter()
            .any(|entry| entry.id == entry_id && entry.is_targetable());
        if !targetable {
            tracing::debug!(id = %entry_id, "[Router] Context menu ignored for non-targetable entry");
            return;
        }
        self.context_menu = ContextMenuState::Open {
            target_id: entry_id,
            source,
            position,
        };
    }

    /// Close the menu if open.
    fn close_context_menu(&mut self, reason: MenuCloseReason) {
        if self.context_menu.is_open() {
            tracing::trace!(?reason, "[Router] Context menu closed");
            self.context_menu = ContextMenuState::Closed;
        }
    }

    /// Run an offered action on the menu target and close the menu.
    fn run_menu_action(&mut self, action: MenuAction) -> Vec<Effect> {
        let Some(entry) = self.context_menu_entry().cloned() else {
            return Vec::new();
        };
        let allowed = self.context_menu_actions().contains(&action);
        self.close_context_menu(MenuCloseReason::Explicit);
        if !allowed {
            tracing::debug!(?action, id = %entry.id, "[Router] Menu action not offered");
            return Vec::new();
        }
        let mut effects = Vec::new();
        match action {
            MenuAction::Open => effects.extend(self.open_entry(&entry)),
            MenuAction::Hide => self.hide_entry(&entry.id),
            MenuAction::Show => self.show_entry(&entry.id),
            MenuAction::Edit => self.open_editor(Some(entry.id), &mut effects),
            MenuAction::Delete => {
                if let Err(err) = self.delete_entry(&entry.id) {
                    effects.push(Effect::ValidationFailed(err));
                }
            }
        }
        effects
    }

    // ---- Hidden set ----

    /// Hide a catalog entry; no-op for unknown, reserved, or already hidden ids.
    fn hide_entry(&mut self, id: &str) {
        let id = id.trim();
        let known = self
            .catalog
            .iter()
            .any(|entry| entry.id == id && !entry.is_hidden_group());
        if !known || self.user_data.hidden_app_ids.iter().any(|hidden| hidden.trim() == id) {
            return;
        }
        self.user_data.hidden_app_ids.push(id.to_string());
        self.user_data_dirty = true;
        self.refresh_view();
    }

    /// Remove an id from the hidden set.
    fn show_entry(&mut self, id: &str) {
        let id = id.trim();
        let before = self.user_data.hidden_app_ids.len();
        self.user_data.hidden_app_ids.retain(|hidden| hidden.trim() != id);
        if self.user_data.hidden_app_ids.len() != before {
            self.user_data_dirty = true;
            self.refresh_view();
        }
    }

    // ---- Custom entries ----

    /// Open the add-entry surface for a new entry or for editing a custom one.
    fn open_editor(&mut self, id: Option<String>, effects: &mut Vec<Effect>) {
        self.form_error = None;
        match id {
            Some(id) => match find_custom(&self.catalog, &id) {
                Ok(entry) => self.editing_id = Some(entry.id.clone()),
                Err(err) => {
                    effects.push(Effect::ValidationFailed(err));
                    return;
                }
            },
            None => self.editing_id = None,
        }
        self.surfaces.open(Surface::AddEntry);
    }

    /// Close the add-entry surface and forget the edit target.
    fn close_editor(&mut self) {
        self.surfaces.close(Surface::AddEntry);
        self.editing_id = None;
        self.form_error = None;
    }

    /// What: Validate and store a custom entry.
    ///
    /// Output:
    /// - `Feedback` with the saved/updated message, or `ValidationFailed` with
    ///   no state change beyond `form_error`.
    fn submit_custom_app(&mut self, input: &CustomAppInput) -> Effect {
        match prepare_custom_app(input, &self.catalog) {
            Ok(prepared) => {
                tracing::info!(
                    id = %prepared.entry.id,
                    updated = prepared.previous_id.is_some(),
                    "[Persist] Custom app saved"
                );
                apply_prepared_entry(&mut self.user_data, &prepared);
                self.user_data_dirty = true;
                self.close_editor();
                self.rebuild_catalog(false);
                Effect::Feedback(prepared.feedback().to_string())
            }
            Err(err) => {
                tracing::debug!(error = %err, "[Persist] Custom app rejected");
                self.form_error = Some(err.clone());
                Effect::ValidationFailed(err)
            }
        }
    }

    /// Delete a custom entry by id.
    fn delete_entry(&mut self, id: &str) -> Result<(), ValidationError> {
        remove_custom_app(&mut self.user_data, &self.catalog, id)?;
        tracing::info!(id = %id, "[Persist] Custom app deleted");
        self.user_data_dirty = true;
        if self.editing_id.as_deref() == Some(id) {
            self.close_editor();
        }
        self.rebuild_catalog(false);
        Ok(())
    }

    // ---- Settings ----

    /// Save the settings form, apply its page size, and finish setup.
    fn submit_settings(&mut self, form: &SettingsForm) {
        self.settings = settings_from_form(form);
        self.settings_dirty = true;
        let page_size = normalize_page_size(form.page_size_value());
        if page_size != self.user_data.page_size {
            self.user_data.page_size = page_size;
            self.user_data_dirty = true;
        }
        tracing::info!(page_size, "[Settings] Settings saved");
        self.current_page = 0;
        self.close_settings(true);
        self.refresh_view();
    }

    /// Close the settings surface, optionally recording first-run completion.
    fn close_settings(&mut self, mark_completed: bool) {
        self.surfaces.close(Surface::Settings);
        if mark_completed && !self.settings.has_completed_setup {
            self.settings.has_completed_setup = true;
            self.settings_dirty = true;
        }
    }

    // ---- Changelog ----

    /// Raise the changelog prompt when `version` differs from the last seen one.
    fn version_notified(&mut self, version: String) {
        if should_prompt(&version, self.last_seen_version.as_deref()) {
            tracing::info!(
                version = %version,
                last_seen = ?self.last_seen_version,
                "[Settings] New version; showing changelog"
            );
            self.changelog = Some(version);
        }
    }

    /// Close the changelog prompt and remember its version.
    fn dismiss_changelog(&mut self) {
        if let Some(version) = self.changelog.take() {
            self.last_seen_version = Some(version);
            self.version_dirty = true;
        }
    }
}
