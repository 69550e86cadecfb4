//! Global keyboard routing.

use super::HandleOutcome;
use super::input::{Key, KeyInput};
use crate::logic::context_menu::MenuCloseReason;
use crate::state::types::Surface;
use crate::state::{Intent, LauncherState};

/// What: Route a key press captured at the window level.
///
/// Inputs:
/// - `key`: Key press with modifiers.
/// - `state`: Mutable launcher state.
///
/// Output:
/// - Effects from the applied intents and whether the host should suppress the
///   key's default action.
///
/// Details:
/// - While a surface or the context menu is open only Escape is handled; it
///   closes settings, then add-entry, then the hidden list, then the menu.
/// - Otherwise rules are tried in order: Ctrl/Cmd+K, Escape, Tab, Enter,
///   arrows, then type-to-search (no Ctrl/Meta/Alt, search not focused).
pub fn handle_key(key: &KeyInput, state: &mut LauncherState) -> HandleOutcome {
    if state.surfaces.is_any_open() || state.context_menu.is_open() {
        if key.key != Key::Escape {
            return HandleOutcome::default();
        }
        let intent = match state.surfaces.top_most() {
            Some(Surface::Settings) => Intent::CloseSettings {
                mark_completed: false,
            },
            Some(surface) => Intent::CloseSurface(surface),
            None => Intent::CloseContextMenu(MenuCloseReason::Escape),
        };
        return HandleOutcome::prevented(state.apply(intent));
    }

    let mods = key.modifiers;
    if (mods.ctrl || mods.meta) && matches!(key.key, Key::Char(c) if c.eq_ignore_ascii_case(&'k')) {
        return HandleOutcome::prevented(state.apply(Intent::FocusSearch { select_all: true }));
    }

    match key.key {
        Key::Escape => {
            if state.search_term.is_empty() {
                HandleOutcome::default()
            } else {
                HandleOutcome::passed(state.apply(Intent::ClearSearch))
            }
        }
        Key::Tab => {
            let delta = if mods.shift { -1 } else { 1 };
            HandleOutcome::prevented(state.apply(Intent::AdvanceActiveIndex(delta)))
        }
        Key::Enter if !state.search_focused => HandleOutcome::passed(state.apply(Intent::OpenActive)),
        Key::ArrowRight => HandleOutcome::prevented(state.apply(Intent::NextPage)),
        Key::ArrowLeft => HandleOutcome::prevented(state.apply(Intent::PrevPage)),
        _ if mods.has_command() || state.search_focused => HandleOutcome::default(),
        Key::Backspace | Key::Delete => {
            let mut chars = state.search_term.chars();
            let trimmed = if key.key == Key::Backspace {
                chars.next_back().map(|_| chars.as_str().to_string())
            } else {
                chars.next().map(|_| chars.as_str().to_string())
            };
            let Some(next) = trimmed else {
                return HandleOutcome::prevented(Vec::new());
            };
            type_into_search(state, next)
        }
        Key::Char(c) if !key.is_composing && !c.is_control() => {
            let mut next = state.search_term.clone();
            next.push(c);
            type_into_search(state, next)
        }
        _ => HandleOutcome::default(),
    }
}

/// Replace the search term and hand focus back to the search field.
fn type_into_search(state: &mut LauncherState, term: String) -> HandleOutcome {
    let mut effects = state.apply(Intent::SetSearchTerm(term));
    effects.extend(state.apply(Intent::FocusSearch { select_all: false }));
    HandleOutcome::prevented(effects)
}
