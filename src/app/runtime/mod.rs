use std::time::Duration;

use tokio::sync::mpsc;

use crate::args::Args;
use crate::changelog::APP_VERSION;
use crate::state::{Effect, Intent, LauncherState, LayoutMode, Surface};
use crate::storage::FileStore;
use crate::theme::{AppConfig, data_dir, load_config};
use crate::util::open_url;

use super::persist::flush_all;

mod render;
pub mod workers;

pub use render::{render_changelog, render_hidden, render_page};
use workers::catalog::{CatalogRequest, spawn_catalog_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run one launcher session end-to-end: load persisted state, reload
/// the catalog, apply the command-line intents, print the grid, and persist.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `Ok(())` when the session completes; `Err` when the catalog worker
///   disappears before answering.
///
/// Details:
/// - Config: `launchgrid.conf` supplies the catalog URL, timeout, and layout
///   breakpoint; `--catalog-url` overrides the URL.
/// - Reload: fetched on a background worker; `--offline` skips it and keeps
///   the custom-only catalog without pruning hidden ids.
/// - Persistence: dirty records are flushed once before returning.
pub async fn run(args: &Args) -> Result<()> {
    let mut config = load_config();
    if let Some(url) = &args.catalog_url {
        config.catalog_url.clone_from(url);
    }
    let dir = args.data_dir.clone().unwrap_or_else(data_dir);
    let mut store = FileStore::new(dir);
    let mut app = LauncherState::from_store(&store);
    tracing::info!(
        hidden = app.user_data.hidden_app_ids.len(),
        custom = app.user_data.custom_apps.len(),
        "[Router] Session state loaded"
    );

    app.apply(Intent::SetLayout(layout_for(args, &config)));
    app.apply(Intent::VersionNotified(APP_VERSION.to_string()));

    if args.offline {
        tracing::info!("[Router] Offline; skipping catalog reload");
        app.is_loading = false;
    } else {
        reload_catalog(&mut app, &config).await?;
    }

    let effects = apply_cli_intents(&mut app, args);
    for effect in &effects {
        report_effect(effect);
    }

    if let Some(notes) = render_changelog(&app) {
        println!("{notes}");
        app.apply(Intent::DismissChangelog);
    }
    if args.list_hidden || app.surfaces.hidden_list {
        print!("{}", render_hidden(&app));
    } else {
        print!("{}", render_page(&app));
    }

    flush_all(&mut app, &mut store);
    Ok(())
}

/// What: Choose the layout mode for this session.
///
/// Output:
/// - Compact when forced by `--compact`, otherwise derived from the viewport
///   width (`--viewport-width` or the configured default).
fn layout_for(args: &Args, config: &AppConfig) -> LayoutMode {
    if args.compact {
        return LayoutMode::Compact;
    }
    let width = args.viewport_width.unwrap_or(config.viewport_width);
    LayoutMode::for_width(width, config.compact_breakpoint)
}

/// What: Fetch the catalog on the worker and commit the result.
///
/// Details:
/// - The result is committed under the id returned by `begin_reload`; load
///   failures become the state's error banner rather than a run error.
async fn reload_catalog(app: &mut LauncherState, config: &AppConfig) -> Result<()> {
    let (req_tx, req_rx) = mpsc::unbounded_channel();
    let (res_tx, mut res_rx) = mpsc::unbounded_channel();
    spawn_catalog_worker(req_rx, res_tx);

    let id = app.begin_reload();
    req_tx.send(CatalogRequest {
        id,
        url: config.catalog_url.clone(),
        timeout: Duration::from_secs(config.request_timeout_secs),
    })?;
    drop(req_tx);

    let outcome = res_rx
        .recv()
        .await
        .ok_or("catalog worker stopped before answering")?;
    if let Err(e) = &outcome.result {
        tracing::warn!(error = %e, "[Catalog] Reload failed; showing custom apps only");
    }
    let applied = app.commit_reload(outcome.id, outcome.result);
    tracing::debug!(id = outcome.id, applied, "[Catalog] Reload committed");
    Ok(())
}

/// What: Translate the command-line actions into intents, in a fixed order.
///
/// Inputs:
/// - `app`: Launcher state after the reload.
/// - `args`: Parsed arguments.
///
/// Output:
/// - Every effect produced along the way.
///
/// Details:
/// - Order: show, hide, search, page (1-based), open. Unknown ids are
///   ignored by the state like any other stale action.
pub fn apply_cli_intents(app: &mut LauncherState, args: &Args) -> Vec<Effect> {
    let mut effects = Vec::new();
    for id in &args.show {
        effects.extend(app.apply(Intent::ShowEntry(id.clone())));
    }
    for id in &args.hide {
        effects.extend(app.apply(Intent::HideEntry(id.clone())));
    }
    if let Some(term) = &args.search {
        effects.extend(app.apply(Intent::SetSearchTerm(term.clone())));
    }
    if let Some(page) = args.page {
        effects.extend(app.apply(Intent::SetPage(page.saturating_sub(1))));
    }
    if let Some(id) = &args.open {
        effects.extend(app.apply(Intent::OpenEntry(id.clone())));
    }
    if args.list_hidden && !app.surfaces.is_open(Surface::HiddenList) {
        effects.extend(app.apply(Intent::OpenSurface(Surface::HiddenList)));
    }
    effects
}

/// What: Carry out one effect for the headless session.
fn report_effect(effect: &Effect) {
    match effect {
        Effect::Navigate(navigation) => {
            open_url(navigation);
            println!("Opening {}", navigation.url);
        }
        Effect::Feedback(message) => println!("{message}"),
        Effect::ValidationFailed(err) => eprintln!("{err}"),
        Effect::FocusSearch { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppEntry, AppOrigin, EntryKind, Navigation};
    use crate::storage::UserData;
    use crate::theme::Settings;
    use clap::Parser;

    fn loaded() -> LauncherState {
        let settings = Settings {
            has_completed_setup: true,
            ..Settings::default()
        };
        let mut app = LauncherState::new(settings, UserData::default());
        let remote = (0..20)
            .map(|i| AppEntry {
                id: format!("app{i}"),
                name: format!("App {i}"),
                description: None,
                url: Some(format!("https://app{i}.example")),
                icon: "/default-icon.svg".into(),
                tags: Vec::new(),
                origin: AppOrigin::Catalog,
                kind: EntryKind::Launchable,
            })
            .collect();
        let id = app.begin_reload();
        app.commit_reload(id, Ok(remote));
        app
    }

    #[test]
    /// What: Layout follows `--compact`, then the viewport width against the breakpoint.
    fn layout_from_args() {
        let config = AppConfig::default();
        let compact = Args::parse_from(["launchgrid", "--compact"]);
        assert_eq!(layout_for(&compact, &config), LayoutMode::Compact);
        let narrow = Args::parse_from(["launchgrid", "--viewport-width", "500"]);
        assert_eq!(layout_for(&narrow, &config), LayoutMode::Compact);
        let wide = Args::parse_from(["launchgrid"]);
        assert_eq!(layout_for(&wide, &config), LayoutMode::Paged);
    }

    #[test]
    /// What: Hide, search, and open run in order and surface their effects.
    ///
    /// Inputs:
    /// - `--hide app3 --search "app 1" --open app1`.
    ///
    /// Output:
    /// - app3 hidden, the search applied, and one navigation to app1.
    fn cli_intents_apply_in_order() {
        let mut app = loaded();
        let args = Args::parse_from([
            "launchgrid",
            "--hide",
            "app3",
            "--search",
            "app 1",
            "--open",
            "app1",
        ]);
        let effects = apply_cli_intents(&mut app, &args);
        assert_eq!(app.user_data.hidden_app_ids, vec!["app3".to_string()]);
        assert_eq!(app.search_term, "app 1");
        assert_eq!(
            effects,
            vec![Effect::Navigate(Navigation::new_tab("https://app1.example"))]
        );
    }

    #[test]
    /// What: `--page` is 1-based and `--list-hidden` opens the hidden list.
    fn page_and_hidden_list() {
        let mut app = loaded();
        app.user_data.page_size = 14;
        app.refresh_view();
        let args = Args::parse_from(["launchgrid", "--page", "2", "--list-hidden"]);
        apply_cli_intents(&mut app, &args);
        assert_eq!(app.current_page, 1);
        assert!(app.surfaces.hidden_list);
    }
}
