//! Launcher session runtime: catalog reload, command-line intents, output,
//! and persistence of dirty records.

/// Persistence of dirty settings, user data, and the version marker.
pub mod persist;
/// Session driver and background workers.
mod runtime;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::{apply_cli_intents, render_changelog, render_hidden, render_page, run, workers};
