//! Device-agnostic input events consumed by the router.
//!
//! Hosts translate their native events into these types (see
//! [`crate::events::terminal`] for the crossterm adapter).

use std::time::Instant;

use crate::state::types::{ContextMenuSource, Position};

/// Logical key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Escape.
    Escape,
    /// Tab (Shift+Tab is `Tab` with `shift`).
    Tab,
    /// Enter/Return.
    Enter,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Any key the router does not act on.
    Other,
}

/// Modifier state at the time of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    /// Control.
    pub ctrl: bool,
    /// Command/Super.
    pub meta: bool,
    /// Alt/Option.
    pub alt: bool,
    /// Shift.
    pub shift: bool,
}

impl Modifiers {
    /// Whether Ctrl, Meta, or Alt is held.
    #[must_use]
    pub const fn has_command(self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}

/// A key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    /// Key pressed.
    pub key: Key,
    /// Held modifiers.
    pub modifiers: Modifiers,
    /// Whether an IME composition is in progress.
    pub is_composing: bool,
}

impl KeyInput {
    /// Key press without modifiers.
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                ctrl: false,
                meta: false,
                alt: false,
                shift: false,
            },
            is_composing: false,
        }
    }

    /// Key press with the given modifiers.
    #[must_use]
    pub const fn with(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            is_composing: false,
        }
    }
}

/// Pointer lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Button/contact pressed.
    Down,
    /// Button/contact released.
    Up,
    /// Pointer left the element.
    Leave,
    /// Gesture cancelled by the platform.
    Cancel,
}

/// Pointer device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse or trackpad cursor.
    Mouse,
    /// Finger.
    Touch,
    /// Stylus.
    Pen,
}

/// A pointer event with its hit-test results.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerInput {
    /// Lifecycle phase.
    pub phase: PointerPhase,
    /// Platform pointer id; drag tracking matches on it.
    pub pointer_id: u32,
    /// Device class.
    pub kind: PointerKind,
    /// Viewport position.
    pub position: Position,
    /// Whether the event hit the paging viewport.
    pub in_paging_viewport: bool,
    /// Whether the event hit the open context menu.
    pub in_context_menu: bool,
    /// Entry card under the pointer, if any.
    pub card: Option<(String, ContextMenuSource)>,
    /// Event time; long-press deadlines are measured from it.
    pub at: Instant,
}

/// A wheel/trackpad scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    /// Horizontal delta.
    pub dx: f64,
    /// Vertical delta.
    pub dy: f64,
    /// Whether the event hit the paging viewport.
    pub in_viewport: bool,
}

/// Every raw event the router understands.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key press (global capture).
    Key(KeyInput),
    /// Pointer event.
    Pointer(PointerInput),
    /// Wheel/trackpad scroll.
    Wheel(WheelInput),
    /// Native context-menu gesture (right-click) on a card.
    ContextMenu {
        /// Card entry id.
        entry_id: String,
        /// Collection the card belongs to.
        source: ContextMenuSource,
        /// Gesture position.
        position: Position,
    },
    /// Window lost focus.
    WindowBlur,
    /// Window scrolled.
    WindowScroll,
    /// Timer tick; fires expired long-presses.
    Tick(Instant),
    /// Search field gained or lost focus.
    SearchFocusChanged(bool),
}
