//! Adapter from crossterm terminal events to router input events.

use std::time::Instant;

use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::input::{
    InputEvent, Key, KeyInput, Modifiers, PointerInput, PointerKind, PointerPhase, WheelInput,
};
use crate::state::types::{ContextMenuSource, Position};

/// Approximate pixel width of one terminal cell.
pub const CELL_WIDTH_PX: f64 = 8.0;
/// Approximate pixel height of one terminal cell.
pub const CELL_HEIGHT_PX: f64 = 16.0;
/// Wheel delta reported per scroll notch; three notches turn a page.
pub const WHEEL_NOTCH: f64 = 40.0;

/// Hit-test result for a mouse event, supplied by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalHit {
    /// The cell lies inside the paging viewport.
    pub in_paging_viewport: bool,
    /// The cell lies inside the open context menu.
    pub in_context_menu: bool,
    /// Entry card under the cell.
    pub card: Option<(String, ContextMenuSource)>,
}

/// What: Convert a crossterm key event.
///
/// Output:
/// - `None` for release/repeat events; otherwise a key input. Shift+Tab
///   (`BackTab`) maps to `Tab` with shift held.
#[must_use]
pub fn key_event_to_input(event: &KeyEvent) -> Option<InputEvent> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    let mut modifiers = Modifiers {
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        meta: event.modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::META),
        alt: event.modifiers.contains(KeyModifiers::ALT),
        shift: event.modifiers.contains(KeyModifiers::SHIFT),
    };
    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => {
            modifiers.shift = true;
            Key::Tab
        }
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        _ => Key::Other,
    };
    Some(InputEvent::Key(KeyInput::with(key, modifiers)))
}

/// What: Convert a crossterm mouse event.
///
/// Inputs:
/// - `event`: Mouse event in cell coordinates.
/// - `hit`: Renderer hit-test for the event's cell.
/// - `now`: Event time.
///
/// Output:
/// - Left button down/up as pointer events, right-click on a card as a
///   context-menu gesture, scroll as wheel deltas; `None` for moves and drags.
#[must_use]
pub fn mouse_event_to_input(event: &MouseEvent, hit: &TerminalHit, now: Instant) -> Option<InputEvent> {
    let position = Position::new(
        f64::from(event.column) * CELL_WIDTH_PX,
        f64::from(event.row) * CELL_HEIGHT_PX,
    );
    let pointer = |phase| {
        InputEvent::Pointer(PointerInput {
            phase,
            pointer_id: 0,
            kind: PointerKind::Mouse,
            position,
            in_paging_viewport: hit.in_paging_viewport,
            in_context_menu: hit.in_context_menu,
            card: hit.card.clone(),
            at: now,
        })
    };
    let wheel = |dx, dy| {
        InputEvent::Wheel(WheelInput {
            dx,
            dy,
            in_viewport: hit.in_paging_viewport,
        })
    };
    match event.kind {
        MouseEventKind::Down(MouseButton::Right) => {
            let (entry_id, source) = hit.card.clone()?;
            Some(InputEvent::ContextMenu {
                entry_id,
                source,
                position,
            })
        }
        MouseEventKind::Down(MouseButton::Left) => Some(pointer(PointerPhase::Down)),
        MouseEventKind::Up(MouseButton::Left) => Some(pointer(PointerPhase::Up)),
        MouseEventKind::ScrollDown => Some(wheel(0.0, WHEEL_NOTCH)),
        MouseEventKind::ScrollUp => Some(wheel(0.0, -WHEEL_NOTCH)),
        MouseEventKind::ScrollRight => Some(wheel(WHEEL_NOTCH, 0.0)),
        MouseEventKind::ScrollLeft => Some(wheel(-WHEEL_NOTCH, 0.0)),
        _ => None,
    }
}

/// What: Convert any crossterm event.
///
/// Details:
/// - Focus loss becomes a window blur; resize and paste are left to the host.
#[must_use]
pub fn to_input(event: &CEvent, hit: &TerminalHit, now: Instant) -> Option<InputEvent> {
    match event {
        CEvent::Key(key) => key_event_to_input(key),
        CEvent::Mouse(mouse) => mouse_event_to_input(mouse, hit, now),
        CEvent::FocusLost => Some(InputEvent::WindowBlur),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 10,
            row: 2,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    /// What: Key codes and modifiers map onto router keys.
    ///
    /// Inputs:
    /// - Ctrl+k, `BackTab`, and a key release.
    ///
    /// Output:
    /// - Ctrl flag set, `BackTab` becomes shifted Tab, releases are dropped.
    fn maps_keys_and_modifiers() {
        let ctrl_k = key_event_to_input(&key(KeyCode::Char('k'), KeyModifiers::CONTROL));
        assert!(matches!(
            ctrl_k,
            Some(InputEvent::Key(KeyInput { key: Key::Char('k'), modifiers, .. })) if modifiers.ctrl
        ));
        let back = key_event_to_input(&key(KeyCode::BackTab, KeyModifiers::NONE));
        assert!(matches!(
            back,
            Some(InputEvent::Key(KeyInput { key: Key::Tab, modifiers, .. })) if modifiers.shift
        ));
        let mut release = key(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(key_event_to_input(&release), None);
    }

    #[test]
    /// What: Mouse buttons and scrolling map to pointer, menu, and wheel events.
    fn maps_mouse_events() {
        let now = Instant::now();
        let card = TerminalHit {
            in_paging_viewport: true,
            in_context_menu: false,
            card: Some(("mail".into(), ContextMenuSource::Grid)),
        };
        assert!(matches!(
            mouse_event_to_input(&mouse(MouseEventKind::Down(MouseButton::Right)), &card, now),
            Some(InputEvent::ContextMenu { ref entry_id, .. }) if entry_id == "mail"
        ));
        assert_eq!(
            mouse_event_to_input(
                &mouse(MouseEventKind::Down(MouseButton::Right)),
                &TerminalHit::default(),
                now
            ),
            None
        );
        match mouse_event_to_input(&mouse(MouseEventKind::Down(MouseButton::Left)), &card, now) {
            Some(InputEvent::Pointer(p)) => {
                assert_eq!(p.phase, PointerPhase::Down);
                assert_eq!(p.kind, PointerKind::Mouse);
                assert_eq!(p.position, Position::new(80.0, 32.0));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(
            mouse_event_to_input(&mouse(MouseEventKind::ScrollDown), &card, now),
            Some(InputEvent::Wheel(WheelInput {
                dx: 0.0,
                dy: WHEEL_NOTCH,
                in_viewport: true
            }))
        );
        assert_eq!(to_input(&CEvent::FocusLost, &card, now), Some(InputEvent::WindowBlur));
    }
}
