//! Wheel and trackpad paging.

use super::pointer::{PageStep, SCROLL_PAGE_THRESHOLD};

/// Accumulated delta needed for one page turn.
pub const WHEEL_STEP_THRESHOLD: f64 = SCROLL_PAGE_THRESHOLD * 2.0;

/// Result of feeding one wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WheelOutcome {
    /// Page turn to perform, if the accumulator crossed the threshold.
    pub step: Option<PageStep>,
    /// Whether the host should suppress native scrolling.
    pub prevent_default: bool,
}

/// Sums wheel deltas along the dominant axis until a page turn fires.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelAccumulator {
    /// Running total since the last page turn.
    accumulated: f64,
}

impl WheelAccumulator {
    /// What: Feed one wheel event.
    ///
    /// Inputs:
    /// - `dx`, `dy`: Raw deltas; the axis with the larger magnitude wins (ties go to `dx`).
    ///
    /// Output:
    /// - `WheelOutcome` with a step when `|accumulated| >= 120`, after which the
    ///   accumulator resets. A zero dominant delta does nothing.
    pub fn feed(&mut self, dx: f64, dy: f64) -> WheelOutcome {
        let delta = if dx.abs() >= dy.abs() { dx } else { dy };
        if delta == 0.0 || !delta.is_finite() {
            return WheelOutcome::default();
        }
        self.accumulated += delta;
        let step = if self.accumulated.abs() >= WHEEL_STEP_THRESHOLD {
            let step = if self.accumulated > 0.0 {
                PageStep::Next
            } else {
                PageStep::Prev
            };
            self.accumulated = 0.0;
            Some(step)
        } else {
            None
        };
        WheelOutcome {
            step,
            prevent_default: true,
        }
    }

    /// Drop any partial accumulation.
    pub const fn reset(&mut self) {
        self.accumulated = 0.0;
    }

    /// Current accumulated delta.
    #[must_use]
    pub const fn accumulated(&self) -> f64 {
        self.accumulated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Small deltas accumulate into a single step, then reset.
    ///
    /// Inputs:
    /// - Three vertical deltas of 50 and a horizontal burst of -130.
    ///
    /// Output:
    /// - Step fires on the third event; the burst fires `Prev` immediately.
    fn accumulates_then_fires() {
        let mut wheel = WheelAccumulator::default();
        assert_eq!(wheel.feed(0.0, 50.0).step, None);
        assert_eq!(wheel.feed(0.0, 50.0).step, None);
        let third = wheel.feed(0.0, 50.0);
        assert_eq!(third.step, Some(PageStep::Next));
        assert!(third.prevent_default);
        assert!(wheel.accumulated().abs() < f64::EPSILON);
        assert_eq!(wheel.feed(-130.0, 20.0).step, Some(PageStep::Prev));
    }

    #[test]
    /// What: Zero dominant delta is ignored and does not suppress scrolling.
    fn zero_delta_ignored() {
        let mut wheel = WheelAccumulator::default();
        let outcome = wheel.feed(0.0, 0.0);
        assert_eq!(outcome, WheelOutcome::default());
    }
}
