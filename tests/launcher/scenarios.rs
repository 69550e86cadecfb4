//! End-to-end flows through intents and routed input events.

use launchgrid::errors::{RemoteLoadError, ValidationError};
use launchgrid::events::{InputEvent, Key, KeyInput, Modifiers, handle_input};
use launchgrid::logic::editor::CustomAppInput;
use launchgrid::state::{Effect, HIDDEN_GROUP_ID, Intent, Navigation};

use crate::common::{catalog_app, loaded_state};

#[test]
/// What: Searching narrows the list and selects the first match.
///
/// Inputs:
/// - Catalog `[Mail, Calendar, Notes]`, search "ma".
///
/// Output:
/// - Filtered list `[Mail]`, active index 0, Enter opens it in a new tab.
fn search_selects_first_match() {
    let mut state = loaded_state(vec![
        catalog_app("mail", "Mail"),
        catalog_app("calendar", "Calendar"),
        catalog_app("notes", "Notes"),
    ]);
    state.apply(Intent::SetSearchTerm("ma".into()));
    let names: Vec<&str> = state.filtered.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Mail"]);
    assert_eq!(state.active_index, Some(0));

    let outcome = handle_input(&InputEvent::Key(KeyInput::plain(Key::Enter)), &mut state);
    let nav = Navigation::new_tab("https://mail.example");
    assert!(nav.new_tab && nav.no_opener && nav.no_referrer);
    assert_eq!(outcome.effects, vec![Effect::Navigate(nav)]);
}

#[test]
/// What: Thirty entries at page size fourteen make three pages.
fn thirty_entries_page_into_three() {
    let remote = (0..30)
        .map(|i| catalog_app(&format!("app{i}"), &format!("App {i}")))
        .collect();
    let mut state = loaded_state(remote);
    state.user_data.page_size = 14;
    state.refresh_view();
    assert_eq!(state.total_pages(), 3);
    state.apply(Intent::SetPage(2));
    let ids: Vec<&str> = state.current_page_entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["app28", "app29"]);

    state.user_data.page_size = 7;
    state.refresh_view();
    state.apply(Intent::SetActiveIndex(13));
    assert_eq!(state.current_page, 1);
}

#[test]
/// What: A hidden entry that a reload no longer returns is pruned everywhere.
///
/// Inputs:
/// - Hide Notes, then reload without it.
///
/// Output:
/// - Hidden-id set empty, Notes in neither list, no hidden group.
fn reload_prunes_missing_hidden_entry() {
    let mut state = loaded_state(vec![catalog_app("mail", "Mail"), catalog_app("notes", "Notes")]);
    state.apply(Intent::HideEntry("notes".into()));
    assert_eq!(state.user_data.hidden_app_ids, vec!["notes".to_string()]);
    assert!(state.filtered.iter().any(|e| e.id == HIDDEN_GROUP_ID));

    let id = state.begin_reload();
    assert!(state.commit_reload(id, Ok(vec![catalog_app("mail", "Mail")])));
    assert!(state.user_data.hidden_app_ids.is_empty());
    assert!(state.visible.iter().all(|e| e.id != "notes"));
    assert!(state.hidden.is_empty());
    assert!(state.filtered.iter().all(|e| e.id != HIDDEN_GROUP_ID));
    assert!(state.user_data_dirty);
}

#[test]
/// What: A failed reload keeps custom apps, the hidden set, and shows a banner.
fn failed_reload_degrades_to_custom_apps() {
    let mut state = loaded_state(vec![catalog_app("mail", "Mail")]);
    state.apply(Intent::HideEntry("mail".into()));
    let created = state.apply(Intent::SubmitCustomApp(CustomAppInput {
        name: "Tool".into(),
        url: "https://tool.example".into(),
        ..CustomAppInput::default()
    }));
    assert!(matches!(created.as_slice(), [Effect::Feedback(_)]));

    let id = state.begin_reload();
    state.commit_reload(id, Err(RemoteLoadError::Status(502)));
    assert_eq!(state.error, Some(RemoteLoadError::Status(502)));
    assert!(!state.is_loading);
    let ids: Vec<&str> = state.catalog.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["custom-tool"]);
    assert_eq!(state.user_data.hidden_app_ids, vec!["mail".to_string()]);

    state.apply(Intent::DismissError);
    assert_eq!(state.error, None);
}

#[test]
/// What: An ftp link is rejected and the catalog is left alone.
fn invalid_custom_url_is_rejected() {
    let mut state = loaded_state(vec![catalog_app("mail", "Mail")]);
    let before = state.catalog.clone();
    let effects = state.apply(Intent::SubmitCustomApp(CustomAppInput {
        name: "Tool".into(),
        url: "ftp://x".into(),
        ..CustomAppInput::default()
    }));
    assert_eq!(effects, vec![Effect::ValidationFailed(ValidationError::InvalidUrl)]);
    assert_eq!(state.catalog, before);
    assert!(state.user_data.custom_apps.is_empty());
}

#[test]
/// What: Cmd+K focuses search with full selection and types nothing.
fn command_k_focuses_search() {
    let mut state = loaded_state(vec![catalog_app("mail", "Mail")]);
    let event = InputEvent::Key(KeyInput::with(
        Key::Char('k'),
        Modifiers {
            meta: true,
            ..Modifiers::default()
        },
    ));
    let outcome = handle_input(&event, &mut state);
    assert!(outcome.prevent_default);
    assert_eq!(outcome.effects, vec![Effect::FocusSearch { select_all: true }]);
    assert!(state.search_term.is_empty());
}
