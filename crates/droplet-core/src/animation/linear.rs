#![forbid(unsafe_code)]

//! Linear, rate-based level animator with a single current run.
//!
//! [`LevelAnimator`] owns the level value and at most one in-flight run.
//! Starting a new run supersedes the previous one: its completion payload is
//! dropped and any tick still addressed to it becomes a no-op
//! ([`Tick::Stale`]). The caller is responsible for scheduling frames; the
//! animator only tells it which run wants one.
//!
//! # Invariants
//!
//! 1. At most one run is active; `animate_to` always invalidates the previous one.
//! 2. A completion payload is returned at most once per `animate_to` call, and
//!    never after that run was superseded.
//! 3. Within a run, successive levels move monotonically toward the target and
//!    never pass it: the terminal tick writes exactly `target`.
//! 4. A run's direction and start value are captured once, at creation.
//!
//! # Failure Modes
//!
//! - Frame timestamp earlier than the run start: elapsed saturates at zero.
//! - Frame timestamps that go backwards within a run: elapsed is held at its
//!   previous maximum, so the level never reverses.

use std::time::Duration;

use super::{Direction, RunId, Speed};

/// Result of [`LevelAnimator::animate_to`].
#[derive(Debug, Clone, PartialEq)]
pub enum Animate<C> {
    /// The level was set synchronously (instant speed or already at target).
    /// The caller writes `level` and runs `on_complete` immediately.
    Settled {
        level: f64,
        on_complete: Option<C>,
        superseded: Option<RunId>,
    },
    /// A run was created; the caller schedules a frame for `run`.
    Scheduled {
        run: RunId,
        superseded: Option<RunId>,
    },
}

impl<C> Animate<C> {
    /// Run that was cancelled by this call, if any.
    #[must_use]
    pub const fn superseded(&self) -> Option<RunId> {
        match self {
            Self::Settled { superseded, .. } | Self::Scheduled { superseded, .. } => *superseded,
        }
    }
}

/// Result of [`LevelAnimator::tick`].
#[derive(Debug, Clone, PartialEq)]
pub enum Tick<C> {
    /// The tick addressed a run that is no longer current. Nothing changed.
    Stale,
    /// The level advanced; the run wants another frame.
    Moved { level: f64 },
    /// The run reached its target. `level` equals the target exactly.
    Finished { level: f64, on_complete: Option<C> },
}

#[derive(Debug, Clone)]
struct ActiveRun<C> {
    id: RunId,
    start: f64,
    target: f64,
    speed: Speed,
    direction: Direction,
    started_at: Duration,
    last_elapsed_ms: f64,
    on_complete: Option<C>,
}

/// Level value plus its single animation slot.
///
/// `C` is the completion payload handed back when a run finishes; callers
/// typically use an enum naming the follow-up to perform.
#[derive(Debug, Clone)]
pub struct LevelAnimator<C> {
    level: f64,
    run: Option<ActiveRun<C>>,
    last_id: RunId,
}

impl<C> LevelAnimator<C> {
    /// Create an idle animator resting at `level`.
    #[must_use]
    pub const fn new(level: f64) -> Self {
        Self {
            level,
            run: None,
            last_id: RunId::from_raw(0),
        }
    }

    /// Current level.
    #[inline]
    #[must_use]
    pub const fn level(&self) -> f64 {
        self.level
    }

    /// Current run, if one is in flight.
    #[inline]
    #[must_use]
    pub fn current_run(&self) -> Option<RunId> {
        self.run.as_ref().map(|r| r.id)
    }

    /// Whether a run is in flight.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Target of the in-flight run.
    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.run.as_ref().map(|r| r.target)
    }

    /// Direction of the in-flight run.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.run.as_ref().map(|r| r.direction)
    }

    /// Move toward `target` at `speed`, superseding any in-flight run.
    ///
    /// `now` is the monotonic timestamp the run starts from.
    pub fn animate_to(
        &mut self,
        target: f64,
        speed: Speed,
        on_complete: Option<C>,
        now: Duration,
    ) -> Animate<C> {
        // Dropping the old run discards its payload without reporting it.
        let superseded = self.run.take().map(|r| r.id);

        if speed.is_instant() || target == self.level {
            self.level = target;
            return Animate::Settled {
                level: target,
                on_complete,
                superseded,
            };
        }

        self.last_id = self.last_id.next();
        let id = self.last_id;
        self.run = Some(ActiveRun {
            id,
            start: self.level,
            target,
            speed,
            direction: Direction::between(self.level, target),
            started_at: now,
            last_elapsed_ms: 0.0,
            on_complete,
        });
        Animate::Scheduled {
            run: id,
            superseded,
        }
    }

    /// Advance `run` to the frame at `timestamp`.
    pub fn tick(&mut self, run: RunId, timestamp: Duration) -> Tick<C> {
        let Some(active) = self.run.as_mut().filter(|r| r.id == run) else {
            return Tick::Stale;
        };

        let elapsed_ms = (timestamp.saturating_sub(active.started_at).as_secs_f64() * 1000.0)
            .max(active.last_elapsed_ms);
        active.last_elapsed_ms = elapsed_ms;

        let next = active.start
            + active.direction.sign() * active.speed.units_per_ms() * elapsed_ms;

        if active.direction.reached(next, active.target) {
            let target = active.target;
            let on_complete = self.run.take().and_then(|r| r.on_complete);
            self.level = target;
            return Tick::Finished {
                level: target,
                on_complete,
            };
        }

        self.level = next;
        Tick::Moved { level: next }
    }
}
