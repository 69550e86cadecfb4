//! Plain-text rendering of the launcher state for the headless binary.

use std::fmt::Write;

use crate::changelog::notes_since;
use crate::state::{EntryKind, LauncherState};
use crate::util::truncate_chars;

/// Widest name column before truncation.
const NAME_WIDTH: usize = 28;

/// What: Render the current page.
///
/// Inputs:
/// - `state`: Launcher state after reload and CLI intents.
///
/// Output:
/// - Banner (if any), a page header, and one line per entry; the active entry
///   is marked with `>`.
#[must_use]
pub fn render_page(state: &LauncherState) -> String {
    let mut out = String::new();
    if let Some(err) = &state.error {
        let _ = writeln!(out, "! {err} (showing your own apps only)");
    }
    let page_size = state.effective_page_size();
    let offset = state.current_page * page_size;
    let _ = writeln!(
        out,
        "Page {}/{}  ({} apps{})",
        state.current_page + 1,
        state.total_pages(),
        state.visible.len(),
        if state.search_term.trim().is_empty() {
            String::new()
        } else {
            format!(", search \"{}\"", state.search_term.trim())
        }
    );
    let entries = state.current_page_entries();
    if entries.is_empty() {
        let _ = writeln!(out, "  (no matches)");
    }
    for (i, entry) in entries.iter().enumerate() {
        let marker = if state.active_index == Some(offset + i) {
            '>'
        } else {
            ' '
        };
        let name = truncate_chars(&entry.name, NAME_WIDTH);
        match entry.kind {
            EntryKind::HiddenGroup { hidden_count } => {
                let _ = writeln!(out, "{marker} {name:<NAME_WIDTH$}  [{hidden_count} hidden]");
            }
            EntryKind::Launchable => {
                let url = entry.url.as_deref().unwrap_or("-");
                let _ = write!(out, "{marker} {name:<NAME_WIDTH$}  {url}");
                if !entry.tags.is_empty() {
                    let _ = write!(out, "  #{}", entry.tags.join(" #"));
                }
                out.push('\n');
            }
        }
    }
    out
}

/// What: Render the hidden entries with their ids.
#[must_use]
pub fn render_hidden(state: &LauncherState) -> String {
    let mut out = String::new();
    if state.hidden.is_empty() {
        let _ = writeln!(out, "No hidden apps.");
        return out;
    }
    let _ = writeln!(out, "Hidden apps ({}):", state.hidden.len());
    for entry in &state.hidden {
        let _ = writeln!(out, "  {:<NAME_WIDTH$}  id={}", truncate_chars(&entry.name, NAME_WIDTH), entry.id);
    }
    out
}

/// What: Render the changelog prompt, if one is showing.
///
/// Output:
/// - Release notes newer than the last-seen marker; `None` without a prompt.
#[must_use]
pub fn render_changelog(state: &LauncherState) -> Option<String> {
    let version = state.changelog.as_deref()?;
    let mut out = String::new();
    let _ = writeln!(out, "What's new in launchgrid {version}");
    for entry in notes_since(version, state.last_seen_version.as_deref()) {
        let _ = writeln!(out, "  {} - {}", entry.version, entry.title);
        for line in entry.highlights {
            let _ = writeln!(out, "    * {line}");
        }
    }
    Some(out)
}
