//! Shared helpers for launcher integration tests.

use launchgrid::state::{AppEntry, AppOrigin, EntryKind, LauncherState};
use launchgrid::storage::UserData;
use launchgrid::theme::Settings;

/// What: Build a catalog-origin entry named after its id.
pub fn catalog_app(id: &str, name: &str) -> AppEntry {
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

/// What: State with setup completed and `remote` committed as the catalog.
pub fn loaded_state(remote: Vec<AppEntry>) -> LauncherState {
    let settings = Settings {
        has_completed_setup: true,
        ..Settings::default()
    };
    let mut state = LauncherState::new(settings, UserData::default());
    let id = state.begin_reload();
    assert!(state.commit_reload(id, Ok(remote)));
    state
}
