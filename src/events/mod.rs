//! Input routing for the launcher.
//!
//! `handle_input` turns device-agnostic input events into intents on the
//! [`LauncherState`]; keyboard rules live in `keyboard`, gesture trackers in
//! `pointer` and `wheel`, and the crossterm adapter in `terminal`.

pub mod input;
mod keyboard;
pub mod pointer;
pub mod terminal;
pub mod wheel;

pub use input::{
    InputEvent, Key, KeyInput, Modifiers, PointerInput, PointerKind, PointerPhase, WheelInput,
};
pub use keyboard::handle_key;

use crate::logic::context_menu::MenuCloseReason;
use crate::state::types::LayoutMode;
use crate::state::{Effect, Intent, LauncherState};
use pointer::{DragTracker, LongPressTarget, LongPressTimer, PageStep};
use wheel::{WheelAccumulator, WheelOutcome};

/// Gesture trackers owned by the state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureState {
    /// Horizontal drag in the paging viewport.
    pub drag: DragTracker,
    /// Long-press on a card.
    pub long_press: LongPressTimer,
    /// Wheel/trackpad accumulation.
    pub wheel: WheelAccumulator,
}

/// What the host should do after an input was routed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandleOutcome {
    /// Effects produced by the applied intents.
    pub effects: Vec<Effect>,
    /// Suppress the native default action (scroll, tab focus, typing).
    pub prevent_default: bool,
}

impl HandleOutcome {
    /// Outcome that suppresses the default action.
    #[must_use]
    pub const fn prevented(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            prevent_default: true,
        }
    }

    /// Outcome that lets the default action run.
    #[must_use]
    pub const fn passed(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            prevent_default: false,
        }
    }
}

/// What: Route one input event.
///
/// Inputs:
/// - `event`: Input from the host.
/// - `state`: Mutable launcher state.
///
/// Output:
/// - Effects to perform and whether to suppress the default action.
pub fn handle_input(event: &InputEvent, state: &mut LauncherState) -> HandleOutcome {
    match event {
        InputEvent::Key(key) => handle_key(key, state),
        InputEvent::Pointer(pointer) => handle_pointer(pointer, state),
        InputEvent::Wheel(wheel) => handle_wheel(*wheel, state),
        InputEvent::ContextMenu {
            entry_id,
            source,
            position,
        } => HandleOutcome::prevented(state.apply(Intent::OpenContextMenu {
            entry_id: entry_id.clone(),
            source: *source,
            position: *position,
        })),
        InputEvent::WindowBlur => {
            state.gestures.long_press.clear();
            HandleOutcome::passed(state.apply(Intent::CloseContextMenu(MenuCloseReason::WindowBlur)))
        }
        InputEvent::WindowScroll => HandleOutcome::passed(
            state.apply(Intent::CloseContextMenu(MenuCloseReason::WindowScroll)),
        ),
        InputEvent::Tick(now) => match state.gestures.long_press.poll(*now) {
            Some(LongPressTarget {
                entry_id,
                source,
                position,
            }) => {
                tracing::debug!(id = %entry_id, "[Router] Long-press fired");
                HandleOutcome::passed(state.apply(Intent::OpenContextMenu {
                    entry_id,
                    source,
                    position,
                }))
            }
            None => HandleOutcome::default(),
        },
        InputEvent::SearchFocusChanged(focused) => {
            HandleOutcome::passed(state.apply(Intent::SearchFocusChanged(*focused)))
        }
    }
}

/// Pointer lifecycle: outside-click closing, drag paging, and long-press arming.
fn handle_pointer(pointer: &PointerInput, state: &mut LauncherState) -> HandleOutcome {
    let mut effects = Vec::new();
    match pointer.phase {
        PointerPhase::Down => {
            if state.context_menu.is_open() && !pointer.in_context_menu {
                effects.extend(state.apply(Intent::CloseContextMenu(
                    MenuCloseReason::OutsidePointer,
                )));
            }
            if pointer.in_paging_viewport && state.layout == LayoutMode::Paged {
                state.gestures.drag.begin(pointer.pointer_id, pointer.position.x);
            }
            state.gestures.long_press.clear();
            if pointer.kind != PointerKind::Mouse
                && let Some((entry_id, source)) = &pointer.card
            {
                state.gestures.long_press.arm(
                    LongPressTarget {
                        entry_id: entry_id.clone(),
                        source: *source,
                        position: pointer.position,
                    },
                    pointer.at,
                );
            }
        }
        PointerPhase::Up => {
            state.gestures.long_press.clear();
            if let Some(step) = state
                .gestures
                .drag
                .finish(pointer.pointer_id, pointer.position.x)
                && state.layout == LayoutMode::Paged
            {
                effects.extend(step_page(state, step));
            }
        }
        PointerPhase::Leave => state.gestures.long_press.clear(),
        PointerPhase::Cancel => {
            state.gestures.long_press.clear();
            state.gestures.drag.cancel();
        }
    }
    HandleOutcome::passed(effects)
}

/// Wheel paging inside the viewport when more than one page exists.
fn handle_wheel(wheel: WheelInput, state: &mut LauncherState) -> HandleOutcome {
    if !wheel.in_viewport || !state.can_page() {
        return HandleOutcome::default();
    }
    let WheelOutcome {
        step,
        prevent_default,
    } = state.gestures.wheel.feed(wheel.dx, wheel.dy);
    let effects = step.map(|step| step_page(state, step)).unwrap_or_default();
    HandleOutcome {
        effects,
        prevent_default,
    }
}

/// Apply a single page turn.
fn step_page(state: &mut LauncherState, step: PageStep) -> Vec<Effect> {
    match step {
        PageStep::Next => state.apply(Intent::NextPage),
        PageStep::Prev => state.apply(Intent::PrevPage),
    }
}
