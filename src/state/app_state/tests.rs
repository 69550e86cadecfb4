//! Tests for `LauncherState`.

use crate::errors::{RemoteLoadError, ValidationError};
use crate::logic::context_menu::{ContextMenuState, MenuAction};
use crate::logic::editor::{CustomAppInput, SAVED_MESSAGE, UPDATED_MESSAGE};
use crate::state::app_state::LauncherState;
use crate::state::intent::{Effect, Intent, Navigation};
use crate::state::types::{
    AppEntry, AppOrigin, ContextMenuSource, EntryKind, HIDDEN_GROUP_ID, LayoutMode, Position,
    Size, Surface,
};
use crate::storage::UserData;
use crate::theme::{Settings, SettingsForm};

fn app(id: &str, name: &str) -> AppEntry {
    AppEntry {
        id: id.into(),
        name: name.into(),
        description: None,
        url: Some(format!("https://{id}.example")),
        icon: "/default-icon.svg".into(),
        tags: Vec::new(),
        origin: AppOrigin::Catalog,
        kind: EntryKind::Launchable,
    }
}

fn ready_state(remote: Vec<AppEntry>) -> LauncherState {
    let settings = Settings {
        has_completed_setup: true,
        ..Settings::default()
    };
    let mut state = LauncherState::new(settings, UserData::default());
    let id = state.begin_reload();
    assert!(state.commit_reload(id, Ok(remote)));
    state
}

fn trio() -> Vec<AppEntry> {
    vec![
        app("mail", "Mail"),
        app("calendar", "Calendar"),
        app("notes", "Notes"),
    ]
}

fn numbered(count: usize) -> Vec<AppEntry> {
    (0..count)
        .map(|i| app(&format!("app-{i}"), &format!("App {i}")))
        .collect()
}

#[test]
/// What: Searching narrows the filtered list and puts the cursor on the first match.
///
/// Inputs:
/// - Catalog `[Mail, Calendar, Notes]`, search "ma".
///
/// Output:
/// - Filtered is `[Mail]`, active index 0; clearing resets the cursor.
fn search_filters_and_activates_first_match() {
    let mut state = ready_state(trio());
    state.apply(Intent::SetSearchTerm("ma".into()));
    let names: Vec<&str> = state.filtered.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Mail"]);
    assert_eq!(state.active_index, Some(0));

    state.apply(Intent::SetSearchTerm("zzz".into()));
    assert!(state.filtered.is_empty());
    assert_eq!(state.active_index, None);

    state.apply(Intent::ClearSearch);
    assert_eq!(state.filtered.len(), 3);
    assert_eq!(state.active_index, None);
}

#[test]
/// What: Paged layout slices the filtered list by the stored page size.
///
/// Inputs:
/// - 30 visible entries, page size 14, paged layout.
///
/// Output:
/// - 3 pages; page 2 holds indices 28 and 29; paging past the end saturates.
fn paged_layout_slices_by_page_size() {
    let mut state = ready_state(numbered(30));
    state.user_data.page_size = 14;
    state.refresh_view();
    assert_eq!(state.total_pages(), 3);

    state.apply(Intent::SetPage(2));
    let ids: Vec<&str> = state.current_page_entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["app-28", "app-29"]);

    state.apply(Intent::NextPage);
    assert_eq!(state.current_page, 2);
    state.apply(Intent::SetPage(99));
    assert_eq!(state.current_page, 2);

    state.apply(Intent::SetLayout(LayoutMode::Compact));
    assert_eq!(state.current_page, 0);
    assert_eq!(state.total_pages(), 1);
    assert_eq!(state.current_page_entries().len(), 30);
}

#[test]
/// What: Moving the cursor in paged mode follows it to its page.
///
/// Inputs:
/// - 20 entries, page size 7, set active index 13, then wrap backwards from 0.
///
/// Output:
/// - Page 1 for index 13; retreat from 0 wraps to the last entry on the last page.
fn active_index_drives_page() {
    let mut state = ready_state(numbered(20));
    state.user_data.page_size = 7;
    state.refresh_view();

    state.apply(Intent::SetActiveIndex(13));
    assert_eq!(state.active_index, Some(13));
    assert_eq!(state.current_page, 1);

    state.apply(Intent::SetActiveIndex(0));
    state.apply(Intent::AdvanceActiveIndex(-1));
    assert_eq!(state.active_index, Some(19));
    assert_eq!(state.current_page, 2);

    state.apply(Intent::SetActiveIndex(500));
    assert_eq!(state.active_index, Some(19));
}

#[test]
/// What: Hidden ids that vanish from a later catalog are pruned.
///
/// Inputs:
/// - Hide "notes", then reload with a catalog that omits it.
///
/// Output:
/// - "notes" leaves the hidden-id set and appears in neither list.
fn reload_prunes_vanished_hidden_ids() {
    let mut state = ready_state(trio());
    state.apply(Intent::HideEntry("notes".into()));
    assert_eq!(state.user_data.hidden_app_ids, vec!["notes".to_string()]);
    assert_eq!(state.hidden.len(), 1);
    assert!(state.filtered.last().is_some_and(AppEntry::is_hidden_group));

    state.user_data_dirty = false;
    let id = state.begin_reload();
    state.commit_reload(id, Ok(vec![app("mail", "Mail"), app("calendar", "Calendar")]));
    assert!(state.user_data.hidden_app_ids.is_empty());
    assert!(state.user_data_dirty);
    assert!(state.visible.iter().all(|e| e.id != "notes"));
    assert!(state.hidden.is_empty());
    assert!(!state.filtered.iter().any(AppEntry::is_hidden_group));
}

#[test]
/// What: Hiding entries while the selection sits on a later page keeps it in view.
///
/// Inputs:
/// - 60 entries, page size 28, search "app", select index 59 (page 2).
/// - Hide `app-0` through `app-3` one by one, then show `app-0` again.
///
/// Output:
/// - Each shrink clamps the selection to the new last index and the page
///   follows it (page 1 once the list is 56 long); growing keeps the selection.
fn shrinking_list_clamps_selection_and_follows_page() {
    let mut state = ready_state(numbered(60));
    state.apply(Intent::SetSearchTerm("app".into()));
    assert_eq!(state.filtered.len(), 60);
    state.apply(Intent::SetActiveIndex(59));
    assert_eq!(state.current_page, 2);

    state.apply(Intent::HideEntry("app-0".into()));
    assert_eq!(state.filtered.len(), 59);
    assert_eq!(state.active_index, Some(58));
    assert_eq!(state.current_page, 2);

    for id in ["app-1", "app-2", "app-3"] {
        state.apply(Intent::HideEntry(id.into()));
    }
    assert_eq!(state.filtered.len(), 56);
    assert_eq!(state.active_index, Some(55));
    assert_eq!(state.current_page, 1);
    assert_eq!(state.active_entry().map(|e| e.id.as_str()), Some("app-59"));

    state.apply(Intent::ShowEntry("app-0".into()));
    assert_eq!(state.filtered.len(), 57);
    assert_eq!(state.active_index, Some(55));
    assert_eq!(state.current_page, 1);
}

#[test]
/// What: Hidden ids stored with surrounding whitespace can still be shown again.
///
/// Inputs:
/// - User data hiding `" custom-tool "` with that custom entry present.
///
/// Output:
/// - The entry starts hidden; `ShowEntry("custom-tool")` un-hides it, and a
///   later hide does not add a duplicate id.
fn padded_hidden_id_can_be_shown() {
    let settings = Settings {
        has_completed_setup: true,
        ..Settings::default()
    };
    let tool = AppEntry {
        origin: AppOrigin::Custom,
        ..app("custom-tool", "Tool")
    };
    let user_data = UserData {
        hidden_app_ids: vec![" custom-tool ".into()],
        custom_apps: vec![tool],
        ..UserData::default()
    };
    let mut state = LauncherState::new(settings, user_data);
    assert_eq!(state.hidden.len(), 1);

    state.apply(Intent::ShowEntry("custom-tool".into()));
    assert!(state.user_data.hidden_app_ids.is_empty());
    assert!(state.hidden.is_empty());
    assert!(state.user_data_dirty);

    state.user_data.hidden_app_ids = vec![" custom-tool ".into()];
    state.refresh_view();
    state.apply(Intent::HideEntry("custom-tool".into()));
    assert_eq!(state.user_data.hidden_app_ids.len(), 1);
}

#[test]
/// What: A stale reload result is discarded.
///
/// Inputs:
/// - Two reloads started; the first one's result arrives last.
///
/// Output:
/// - Only the latest result is committed.
fn stale_reload_is_discarded() {
    let mut state = ready_state(Vec::new());
    let first = state.begin_reload();
    let second = state.begin_reload();
    assert!(state.commit_reload(second, Ok(trio())));
    assert!(!state.commit_reload(first, Ok(numbered(5))));
    assert_eq!(state.catalog.len(), 3);
    assert!(!state.is_loading);
}

#[test]
/// What: A failed reload falls back to custom entries and keeps hidden ids.
///
/// Inputs:
/// - One custom entry, a hidden catalog id, and a network error on reload.
///
/// Output:
/// - Catalog holds only the custom entry, the error is set, and the hidden id survives.
fn failed_reload_keeps_custom_only() {
    let mut state = ready_state(trio());
    state.apply(Intent::HideEntry("mail".into()));
    state.apply(Intent::SubmitCustomApp(CustomAppInput {
        name: "Tool".into(),
        url: "https://tool.example".into(),
        ..CustomAppInput::default()
    }));

    let id = state.begin_reload();
    state.commit_reload(id, Err(RemoteLoadError::Status(503)));
    assert_eq!(state.error, Some(RemoteLoadError::Status(503)));
    assert_eq!(state.catalog.len(), 1);
    assert_eq!(state.catalog[0].origin, AppOrigin::Custom);
    assert_eq!(state.user_data.hidden_app_ids, vec!["mail".to_string()]);

    state.apply(Intent::DismissError);
    assert_eq!(state.error, None);
}

#[test]
/// What: An invalid custom entry is rejected without changing the catalog.
///
/// Inputs:
/// - `{name: "Tool", url: "ftp://x"}`.
///
/// Output:
/// - `ValidationFailed(InvalidUrl)`, form error set, catalog and user data unchanged.
fn invalid_custom_app_is_rejected() {
    let mut state = ready_state(trio());
    let before = state.catalog.clone();
    let effects = state.apply(Intent::SubmitCustomApp(CustomAppInput {
        name: "Tool".into(),
        url: "ftp://x".into(),
        ..CustomAppInput::default()
    }));
    assert_eq!(effects, vec![Effect::ValidationFailed(ValidationError::InvalidUrl)]);
    assert_eq!(state.form_error, Some(ValidationError::InvalidUrl));
    assert_eq!(state.catalog, before);
    assert!(state.user_data.custom_apps.is_empty());
    assert!(!state.user_data_dirty);
}

#[test]
/// What: Creating then editing a custom entry keeps its id and reports the right message.
fn custom_app_create_then_edit() {
    let mut state = ready_state(trio());
    state.apply(Intent::OpenSurface(Surface::AddEntry));
    assert!(state.surfaces.add_entry);
    let effects = state.apply(Intent::SubmitCustomApp(CustomAppInput {
        name: "Mail".into(),
        url: "https://my-mail.example".into(),
        tags_input: "work, inbox".into(),
        ..CustomAppInput::default()
    }));
    assert_eq!(effects, vec![Effect::Feedback(SAVED_MESSAGE.into())]);
    assert!(!state.surfaces.add_entry);
    let custom = state.user_data.custom_apps[0].clone();
    assert_eq!(custom.id, "custom-mail");
    assert_eq!(custom.tags, vec!["work".to_string(), "inbox".to_string()]);

    state.apply(Intent::OpenEditor(Some(custom.id.clone())));
    assert_eq!(state.editing_id.as_deref(), Some("custom-mail"));
    let mut input = state.editor_input();
    input.name = "Webmail".into();
    let effects = state.apply(Intent::SubmitCustomApp(input));
    assert_eq!(effects, vec![Effect::Feedback(UPDATED_MESSAGE.into())]);
    assert_eq!(state.user_data.custom_apps.len(), 1);
    assert_eq!(state.user_data.custom_apps[0].id, "custom-mail");
    assert_eq!(state.user_data.custom_apps[0].name, "Webmail");
    assert_eq!(state.editing_id, None);
}

#[test]
/// What: Catalog entries cannot be edited or deleted.
fn catalog_entries_are_not_editable() {
    let mut state = ready_state(trio());
    let effects = state.apply(Intent::OpenEditor(Some("mail".into())));
    assert_eq!(
        effects,
        vec![Effect::ValidationFailed(ValidationError::NotCustom("mail".into()))]
    );
    assert!(!state.surfaces.add_entry);
    let effects = state.apply(Intent::DeleteEntry("nope".into()));
    assert_eq!(
        effects,
        vec![Effect::ValidationFailed(ValidationError::UnknownEntry("nope".into()))]
    );
}

#[test]
/// What: Opening entries navigates in a new tab; the hidden group opens the hidden list.
fn open_entry_and_hidden_group() {
    let mut state = ready_state(trio());
    state.apply(Intent::SetSearchTerm("cal".into()));
    let effects = state.apply(Intent::OpenActive);
    assert_eq!(
        effects,
        vec![Effect::Navigate(Navigation::new_tab("https://calendar.example"))]
    );

    state.apply(Intent::ClearSearch);
    state.apply(Intent::HideEntry("notes".into()));
    let effects = state.apply(Intent::OpenEntry(HIDDEN_GROUP_ID.into()));
    assert!(effects.is_empty());
    assert!(state.surfaces.hidden_list);
}

#[test]
/// What: The context menu targets only real entries, clamps, and closes when its target vanishes.
fn context_menu_lifecycle() {
    let mut state = ready_state(trio());
    state.apply(Intent::HideEntry("notes".into()));
    state.apply(Intent::OpenContextMenu {
        entry_id: HIDDEN_GROUP_ID.into(),
        source: ContextMenuSource::Grid,
        position: Position::new(1.0, 1.0),
    });
    assert!(!state.context_menu.is_open());

    state.apply(Intent::OpenContextMenu {
        entry_id: "notes".into(),
        source: ContextMenuSource::Hidden,
        position: Position::new(790.0, 10.0),
    });
    assert_eq!(
        state.context_menu_actions(),
        vec![MenuAction::Open, MenuAction::Show]
    );
    state.apply(Intent::PlaceContextMenu {
        menu: Size::new(200.0, 100.0),
        viewport: Size::new(800.0, 600.0),
    });
    assert!(matches!(
        state.context_menu,
        ContextMenuState::Open { position, .. } if position == Position::new(588.0, 12.0)
    ));

    state.apply(Intent::ContextAction(MenuAction::Show));
    assert!(!state.context_menu.is_open());
    assert!(state.user_data.hidden_app_ids.is_empty());

    state.apply(Intent::OpenContextMenu {
        entry_id: "mail".into(),
        source: ContextMenuSource::Grid,
        position: Position::default(),
    });
    let id = state.begin_reload();
    state.commit_reload(id, Ok(vec![app("notes", "Notes")]));
    assert_eq!(state.context_menu, ContextMenuState::Closed);
}

#[test]
/// What: First run opens settings; submitting the form completes setup and applies the page size.
fn first_run_settings_flow() {
    let mut state = LauncherState::new(Settings::default(), UserData::default());
    assert!(state.surfaces.settings);
    let mut form: SettingsForm = state.settings_form();
    form.page_size = "30".into();
    form.overlay_opacity = "5".into();
    state.apply(Intent::SubmitSettings(form));
    assert!(!state.surfaces.settings);
    assert!(state.settings.has_completed_setup);
    assert!((state.settings.overlay_opacity - 0.6).abs() < f64::EPSILON);
    assert_eq!(state.user_data.page_size, 28);
    assert!(state.settings_dirty);
    assert_eq!(state.current_page, 0);
}

#[test]
/// What: Closing settings with completion marks setup done; without it leaves it pending.
fn close_settings_mark_completed() {
    let mut state = LauncherState::new(Settings::default(), UserData::default());
    state.apply(Intent::CloseSurface(Surface::Settings));
    assert!(!state.settings.has_completed_setup);
    state.apply(Intent::OpenSurface(Surface::Settings));
    state.apply(Intent::CloseSettings {
        mark_completed: true,
    });
    assert!(state.settings.has_completed_setup);
    assert!(!state.surfaces.settings);
}

#[test]
/// What: The changelog prompt shows once per version and records dismissal.
fn changelog_prompt_once() {
    let mut state = ready_state(Vec::new());
    state.last_seen_version = Some("0.2.0".into());
    state.apply(Intent::VersionNotified("0.3.0".into()));
    assert_eq!(state.changelog.as_deref(), Some("0.3.0"));
    state.apply(Intent::DismissChangelog);
    assert_eq!(state.changelog, None);
    assert_eq!(state.last_seen_version.as_deref(), Some("0.3.0"));
    assert!(state.version_dirty);
    state.apply(Intent::VersionNotified("0.3.0".into()));
    assert_eq!(state.changelog, None);
}
