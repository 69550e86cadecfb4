//! Per-entry action menu: state, positioning, and offered actions.

use crate::state::types::{AppEntry, AppOrigin, ContextMenuSource, Position, Size};

/// Distance the menu keeps from every viewport edge.
pub const CONTEXT_MENU_MARGIN: f64 = 12.0;
/// Touch/pen hold duration that opens the menu.
pub const LONG_PRESS_DURATION_MS: u64 = 500;

/// Context menu state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContextMenuState {
    /// No menu shown.
    #[default]
    Closed,
    /// Menu shown for one entry.
    Open {
        /// Targeted entry id.
        target_id: String,
        /// Collection the menu was opened from.
        source: ContextMenuSource,
        /// Anchor position (already clamped when a size was known).
        position: Position,
    },
}

impl ContextMenuState {
    /// Whether a menu is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Targeted entry id when open.
    #[must_use]
    pub fn target_id(&self) -> Option<&str> {
        match self {
            Self::Open { target_id, .. } => Some(target_id),
            Self::Closed => None,
        }
    }
}

/// Why a menu closed; logged for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCloseReason {
    /// Explicit close or an action was taken.
    Explicit,
    /// Escape key.
    Escape,
    /// Pointer-down outside the menu.
    OutsidePointer,
    /// Window lost focus.
    WindowBlur,
    /// Window scrolled.
    WindowScroll,
    /// Target is no longer in the catalog.
    TargetVanished,
}

/// Actions offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Navigate to the entry.
    Open,
    /// Add to the hidden set.
    Hide,
    /// Remove from the hidden set.
    Show,
    /// Open the entry editor.
    Edit,
    /// Delete the entry.
    Delete,
}

/// What: Clamp a menu anchor so the menu stays inside the viewport.
///
/// Inputs:
/// - `anchor`: Requested top-left position.
/// - `menu`: Measured menu size.
/// - `viewport`: Viewport size.
///
/// Output:
/// - Position with each axis in `[margin, viewport - menu - margin]`; when
///   the menu is larger than the viewport the margin wins.
#[must_use]
pub fn clamp_menu_position(anchor: Position, menu: Size, viewport: Size) -> Position {
    let clamp_axis = |value: f64, extent: f64, limit: f64| {
        let max = limit - extent - CONTEXT_MENU_MARGIN;
        value.min(max).max(CONTEXT_MENU_MARGIN)
    };
    Position {
        x: clamp_axis(anchor.x, menu.width, viewport.width),
        y: clamp_axis(anchor.y, menu.height, viewport.height),
    }
}

/// What: Actions the menu offers for an entry.
///
/// Inputs:
/// - `entry`: Target entry.
/// - `source`: Where the menu was opened.
///
/// Output:
/// - Open, then Hide (grid) or Show (hidden), then Edit and Delete for custom
///   entries only.
#[must_use]
pub fn menu_actions(entry: &AppEntry, source: ContextMenuSource) -> Vec<MenuAction> {
    let mut actions = vec![MenuAction::Open];
    actions.push(match source {
        ContextMenuSource::Grid => MenuAction::Hide,
        ContextMenuSource::Hidden => MenuAction::Show,
    });
    if entry.origin == AppOrigin::Custom {
        actions.extend([MenuAction::Edit, MenuAction::Delete]);
    }
    actions
}
