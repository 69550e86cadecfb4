//! File-backed storage round-trips across sessions.

use launchgrid::app::persist::flush_all;
use launchgrid::logic::editor::CustomAppInput;
use launchgrid::state::{Intent, LauncherState};
use launchgrid::storage::{FileStore, KeyValueStore, USER_DATA_STORAGE_KEY, load_user_data};

use crate::common::catalog_app;

#[test]
/// What: Hidden ids, custom entries, page size, and setup completion survive a restart.
///
/// Inputs:
/// - First session: complete setup, add a custom app, hide a catalog app, flush.
/// - Second session from the same directory.
///
/// Output:
/// - The second session starts with the same user data and no settings surface.
fn session_state_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = FileStore::new(dir.path());

    let mut first = LauncherState::from_store(&store);
    assert!(first.surfaces.settings);
    first.apply(Intent::CloseSettings {
        mark_completed: true,
    });
    first.apply(Intent::SubmitCustomApp(CustomAppInput {
        name: "Wiki".into(),
        url: "https://wiki.example".into(),
        tags_input: "docs, team".into(),
        ..CustomAppInput::default()
    }));
    let id = first.begin_reload();
    first.commit_reload(id, Ok(vec![catalog_app("mail", "Mail")]));
    first.apply(Intent::HideEntry("mail".into()));
    flush_all(&mut first, &mut store);
    assert!(store.path_for(USER_DATA_STORAGE_KEY).is_file());

    let second = LauncherState::from_store(&store);
    assert!(!second.surfaces.settings);
    assert_eq!(second.user_data, first.user_data);
    let custom = &second.user_data.custom_apps[0];
    assert_eq!(custom.id, "custom-wiki");
    assert_eq!(custom.tags, vec!["docs".to_string(), "team".to_string()]);
}

#[test]
/// What: Corrupt records load as defaults instead of failing the session.
fn corrupt_user_data_loads_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = FileStore::new(dir.path());
    store
        .write(USER_DATA_STORAGE_KEY, "{ not json")
        .expect("write");
    let data = load_user_data(&store);
    assert!(data.hidden_app_ids.is_empty());
    assert_eq!(data.page_size, 28);
    let state = LauncherState::from_store(&store);
    assert!(state.catalog.is_empty());
}
