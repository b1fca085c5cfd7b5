#![forbid(unsafe_code)]

//! Gesture state: tells a quick click from a press-and-hold.
//!
//! [`GestureTracker`] consumes the two abstract signals produced by the input
//! adapter (`start` and `stop`) and reports what the caller should animate.
//! It owns no animation state itself; the caller reports animation
//! completions back through [`finish_increment`](GestureTracker::finish_increment)
//! and [`finish_reset`](GestureTracker::finish_reset).
//!
//! # State Machine
//!
//! ```text
//!            start                      stop (click)
//!   Idle ───────────▶ Holding ─────────────────────▶ Incrementing
//!    ▲                 │  ▲                             │   │
//!    │  stop (release) │  │ start (stray)               │   │ start
//!    └─────────────────┘  └─────                        │   ▼
//!    ▲                                                  │ (reset, stays
//!    └──────────── finish_increment / finish_reset ─────┘  Incrementing)
//! ```
//!
//! # Invariants
//!
//! 1. Exactly one phase holds at a time; the hold start time exists only in
//!    `Holding`.
//! 2. A stop caused by the pointer leaving is never a click.
//! 3. A click requires `elapsed < click_threshold` (strict).
//! 4. A `start` while `Incrementing` never begins a new hold.
//!
//! # Quirk
//!
//! Reaching the empty bound during a hold does not leave `Holding`; only an
//! explicit stop does. The tracker is never told about that completion.

use std::time::Duration;

use crate::input::StopCause;

/// Default click threshold.
pub const DEFAULT_CLICK_THRESHOLD: Duration = Duration::from_millis(200);

/// Thresholds for gesture classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureConfig {
    /// A lift sooner than this after the press is a click (default: 200ms).
    pub click_threshold: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            click_threshold: DEFAULT_CLICK_THRESHOLD,
        }
    }
}

/// Current gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Pointer is down; `since` is the monotonic press time.
    Holding { since: Duration },
    /// A click was recognized and the level is rising (or resetting after it).
    Incrementing,
}

impl GesturePhase {
    /// Whether the phase is `Idle`.
    #[inline]
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether the phase is `Holding`.
    #[inline]
    #[must_use]
    pub const fn is_holding(self) -> bool {
        matches!(self, Self::Holding { .. })
    }

    /// Whether the phase is `Incrementing`.
    #[inline]
    #[must_use]
    pub const fn is_incrementing(self) -> bool {
        matches!(self, Self::Incrementing)
    }
}

/// What a `start` signal asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// An increment was running: return to the default level at slow speed,
    /// then call [`GestureTracker::finish_reset`].
    CancelIncrement,
    /// A hold began: move toward the empty bound at slow speed.
    BeginHold,
}

/// What a `stop` signal asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// Not holding; nothing to do.
    Ignored,
    /// Quick click: move toward the full bound at fast speed, then call
    /// [`GestureTracker::finish_increment`].
    Click,
    /// Hold released (or pointer left): return to the default level at fast
    /// speed. The tracker is already idle.
    Release(StopCause),
}

/// Click/hold state machine.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    config: GestureConfig,
    phase: GesturePhase,
}

impl GestureTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: GesturePhase::Idle,
        }
    }

    /// Current phase.
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Active configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Handle a `start` signal at `now`.
    pub fn start(&mut self, now: Duration) -> StartOutcome {
        if self.phase.is_incrementing() {
            return StartOutcome::CancelIncrement;
        }
        // Idle, or a stray second press while holding: restart the hold.
        self.phase = GesturePhase::Holding { since: now };
        StartOutcome::BeginHold
    }

    /// Handle a `stop` signal at `now`.
    pub fn stop(&mut self, cause: StopCause, now: Duration) -> StopOutcome {
        let GesturePhase::Holding { since } = self.phase else {
            return StopOutcome::Ignored;
        };

        if self.is_click(cause, now.saturating_sub(since)) {
            self.phase = GesturePhase::Incrementing;
            StopOutcome::Click
        } else {
            self.phase = GesturePhase::Idle;
            StopOutcome::Release(cause)
        }
    }

    /// The increment animation finished; back to `Idle`.
    pub fn finish_increment(&mut self) {
        if self.phase.is_incrementing() {
            self.phase = GesturePhase::Idle;
        }
    }

    /// The post-increment reset finished; back to `Idle`.
    pub fn finish_reset(&mut self) {
        if self.phase.is_incrementing() {
            self.phase = GesturePhase::Idle;
        }
    }

    /// Time held so far, if holding.
    #[must_use]
    pub fn held_for(&self, now: Duration) -> Option<Duration> {
        match self.phase {
            GesturePhase::Holding { since } => Some(now.saturating_sub(since)),
            _ => None,
        }
    }

    fn is_click(&self, cause: StopCause, elapsed: Duration) -> bool {
        !cause.is_leave() && elapsed < self.config.click_threshold
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const MS_50: Duration = Duration::from_millis(50);
    const MS_150: Duration = Duration::from_millis(150);
    const MS_199: Duration = Duration::from_millis(199);
    const MS_200: Duration = Duration::from_millis(200);
    const MS_500: Duration = Duration::from_millis(500);

    fn tracker() -> GestureTracker {
        GestureTracker::new(GestureConfig::default())
    }

    #[test]
    fn start_from_idle_begins_hold() {
        let mut gt = tracker();
        assert_eq!(gt.start(MS_50), StartOutcome::BeginHold);
        assert_eq!(gt.phase(), GesturePhase::Holding { since: MS_50 });
    }

    #[test]
    fn quick_lift_is_click() {
        let mut gt = tracker();
        gt.start(Duration::ZERO);
        assert_eq!(gt.stop(StopCause::Lift, MS_150), StopOutcome::Click);
        assert!(gt.phase().is_incrementing());
    }

    #[test]
    fn threshold_is_strict() {
        let mut gt = tracker();
        gt.start(Duration::ZERO);
        assert_eq!(gt.stop(StopCause::Lift, MS_199), StopOutcome::Click);

        let mut gt = tracker();
        gt.start(Duration::ZERO);
        assert_eq!(
            gt.stop(StopCause::Lift, MS_200),
            StopOutcome::Release(StopCause::Lift)
        );
    }

    #[test]
    fn long_lift_is_release() {
        let mut gt = tracker();
        gt.start(Duration::ZERO);
        assert_eq!(
            gt.stop(StopCause::Lift, MS_500),
            StopOutcome::Release(StopCause::Lift)
        );
        assert!(gt.phase().is_idle());
    }

    #[test]
    fn leave_is_never_click() {
        let mut gt = tracker();
        gt.start(Duration::ZERO);
        assert_eq!(
            gt.stop(StopCause::Leave, MS_50),
            StopOutcome::Release(StopCause::Leave)
        );
        assert!(gt.phase().is_idle());
    }

    #[test]
    fn stop_when_not_holding_is_ignored() {
        let mut gt = tracker();
        assert_eq!(gt.stop(StopCause::Lift, MS_50), StopOutcome::Ignored);

        gt.start(Duration::ZERO);
        gt.stop(StopCause::Lift, MS_50);
        // Incrementing: a second lift does nothing.
        assert_eq!(gt.stop(StopCause::Lift, MS_150), StopOutcome::Ignored);
        assert!(gt.phase().is_incrementing());
    }

    #[test]
    fn start_while_incrementing_cancels_without_new_hold() {
        let mut gt = tracker();
        gt.start(Duration::ZERO);
        gt.stop(StopCause::Lift, MS_50);

        assert_eq!(gt.start(MS_150), StartOutcome::CancelIncrement);
        assert!(gt.phase().is_incrementing(), "stays incrementing until reset finishes");
        gt.finish_reset();
        assert!(gt.phase().is_idle());
    }

    #[test]
    fn stray_start_while_holding_restarts_hold() {
        let mut gt = tracker();
        gt.start(Duration::ZERO);
        assert_eq!(gt.start(MS_500), StartOutcome::BeginHold);
        assert_eq!(gt.held_for(MS_500 + MS_50), Some(MS_50));
        // Timed from the second press, so this is a click.
        assert_eq!(gt.stop(StopCause::Lift, MS_500 + MS_150), StopOutcome::Click);
    }

    #[test]
    fn finish_increment_only_from_incrementing() {
        let mut gt = tracker();
        gt.start(Duration::ZERO);
        gt.finish_increment();
        assert!(gt.phase().is_holding(), "finish_increment must not end a hold");

        gt.stop(StopCause::Lift, MS_50);
        gt.finish_increment();
        assert!(gt.phase().is_idle());
    }

    #[test]
    fn custom_threshold() {
        let mut gt = GestureTracker::new(GestureConfig {
            click_threshold: MS_500,
        });
        gt.start(Duration::ZERO);
        assert_eq!(gt.stop(StopCause::Lift, Duration::from_millis(400)), StopOutcome::Click);
    }

    #[test]
    fn held_for_none_when_idle() {
        assert_eq!(tracker().held_for(MS_500), None);
    }
}
