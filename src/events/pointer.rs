//! Pointer gestures: horizontal drag paging and long-press detection.

use std::time::{Duration, Instant};

use crate::logic::context_menu::LONG_PRESS_DURATION_MS;
use crate::state::types::{ContextMenuSource, Position};

/// Minimum horizontal drag distance that turns a page.
pub const SCROLL_PAGE_THRESHOLD: f64 = 60.0;

/// Direction of a single page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    /// Forward one page.
    Next,
    /// Back one page.
    Prev,
}

/// Start of an in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragStart {
    /// Pointer that started the drag.
    pointer_id: u32,
    /// Horizontal origin.
    start_x: f64,
}

/// Tracks one horizontal drag inside the paging viewport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragTracker {
    /// Active drag, if any.
    active: Option<DragStart>,
}

impl DragTracker {
    /// Record a pointer-down; replaces any drag already in progress.
    pub fn begin(&mut self, pointer_id: u32, x: f64) {
        self.active = Some(DragStart {
            pointer_id,
            start_x: x,
        });
    }

    /// What: Finish a drag on pointer-up.
    ///
    /// Inputs:
    /// - `pointer_id`: Pointer being released.
    /// - `x`: Release position.
    ///
    /// Output:
    /// - `Next` for a leftward drag beyond the threshold, `Prev` for a
    ///   rightward one, `None` otherwise. A different pointer id is ignored and
    ///   keeps the drag alive.
    pub fn finish(&mut self, pointer_id: u32, x: f64) -> Option<PageStep> {
        let start = self.active?;
        if start.pointer_id != pointer_id {
            return None;
        }
        self.active = None;
        let delta = x - start.start_x;
        if delta.abs() <= SCROLL_PAGE_THRESHOLD {
            None
        } else if delta < 0.0 {
            Some(PageStep::Next)
        } else {
            Some(PageStep::Prev)
        }
    }

    /// Forget the drag (pointer cancel, layout switch).
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Whether a drag is being tracked.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

/// Card a long-press would open the menu for.
#[derive(Debug, Clone, PartialEq)]
pub struct LongPressTarget {
    /// Entry id.
    pub entry_id: String,
    /// Collection of the card.
    pub source: ContextMenuSource,
    /// Press position.
    pub position: Position,
}

/// Single-shot long-press deadline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LongPressTimer {
    /// Armed target and its deadline.
    armed: Option<(LongPressTarget, Instant)>,
}

impl LongPressTimer {
    /// Arm (or re-arm) the timer for `target`, expiring after the hold duration.
    pub fn arm(&mut self, target: LongPressTarget, now: Instant) {
        let deadline = now + Duration::from_millis(LONG_PRESS_DURATION_MS);
        self.armed = Some((target, deadline));
    }

    /// Disarm without firing.
    pub fn clear(&mut self) {
        self.armed = None;
    }

    /// Whether the timer is armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// What: Fire the timer if its deadline has passed.
    ///
    /// Output:
    /// - The target once, when `now` is at or past the deadline; `None` otherwise.
    pub fn poll(&mut self, now: Instant) -> Option<LongPressTarget> {
        match &self.armed {
            Some((_, deadline)) if now >= *deadline => self.armed.take().map(|(target, _)| target),
            _ => None,
        }
    }
}
