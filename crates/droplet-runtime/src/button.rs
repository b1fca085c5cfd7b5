#![forbid(unsafe_code)]

//! Gesture-animation controller for one water button.
//!
//! [`WaterButton`] owns the level animator and the gesture tracker for a
//! single button and drives them against a [`Backend`]. Signals arrive through
//! [`handle_input`](WaterButton::handle_input) (or the explicit
//! `start_at`/`stop_at` pair); display-refresh ticks arrive through
//! [`on_frame`](WaterButton::on_frame).
//!
//! # Gestures
//!
//! | Gesture | Animation | On completion |
//! |---------|-----------|---------------|
//! | press | toward MIN, slow | decrement, snap to DEFAULT |
//! | lift under threshold | toward MAX, fast | increment, snap to DEFAULT, idle |
//! | lift or leave otherwise | toward DEFAULT, fast | nothing |
//! | press while incrementing | toward DEFAULT, slow | idle |
//!
//! # Invariants
//!
//! 1. Every level change is written to the surface, including the terminal
//!    tick of a run and instant settles.
//! 2. A superseded run's pending frame is revoked before the new run starts.
//! 3. A follow-up runs at most once, and only for the run that created it.
//! 4. Notifications are issued only when enabled at construction.
//!
//! # Failure Modes
//!
//! - Surface write fails: logged at `warn`, the animation continues.
//! - Notifier fails: logged at `warn`, never retried.
//! - Frame for a superseded run: ignored ([`FrameOutcome::Stale`]).

use std::time::Duration;

use droplet_backend::{Backend, BackendClock, CounterNotifier, FrameScheduler, LevelSurface};
use droplet_core::{
    Animate, CounterAction, GesturePhase, GestureSignal, GestureTracker, LevelAnimator,
    Notifications, PointerInput, RunId, Speed, StartOutcome, StopCause, StopOutcome, Tick,
};
use tracing::{debug, info, warn};

use crate::config::{ButtonConfig, ConfigError};

/// What to do when a run reaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Followup {
    /// Hold reached MIN.
    Decrement,
    /// Click reached MAX.
    Increment,
    /// Post-click reset reached DEFAULT.
    ResetDone,
}

/// How the host should treat the raw event it just forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputDisposition {
    /// Signal the event was mapped to.
    pub signal: GestureSignal,
    /// The host must cancel the browser's default action (synthetic mouse
    /// events after a touch).
    pub suppress_default: bool,
}

/// Result of [`WaterButton::on_frame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// The frame belonged to a superseded run.
    Stale,
    /// The level moved and another frame was requested.
    Moved { level: f64 },
    /// The run reached `level`; its follow-up has already run.
    Finished { level: f64 },
}

/// The water button controller.
pub struct WaterButton<B: Backend> {
    backend: B,
    config: ButtonConfig,
    fast: Speed,
    slow: Speed,
    notifications: Notifications,
    animator: LevelAnimator<Followup>,
    gesture: GestureTracker,
}

impl<B: Backend> WaterButton<B> {
    /// Create a controller resting at DEFAULT and write that level once.
    pub fn new(
        backend: B,
        config: ButtonConfig,
        notifications: Notifications,
    ) -> Result<Self, ConfigError> {
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(ConfigError::Validation(errors));
        }

        let default = config.levels.default;
        let mut button = Self {
            backend,
            fast: config.fast.speed(),
            slow: config.slow.speed(),
            notifications,
            animator: LevelAnimator::new(default),
            gesture: GestureTracker::new(config.gesture()),
            config,
        };
        debug!(
            target: "droplet.button",
            level = default,
            notify = button.notifications.is_enabled(),
            "water button initialized"
        );
        button.write_level(default);
        Ok(button)
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Forward a raw pointer event, timestamped with the backend clock.
    pub fn handle_input(&mut self, input: PointerInput) -> InputDisposition {
        let now = self.backend.clock().now_mono();
        self.handle_input_at(input, now)
    }

    /// Forward a raw pointer event that happened at `now`.
    pub fn handle_input_at(&mut self, input: PointerInput, now: Duration) -> InputDisposition {
        let signal = input.signal();
        match signal {
            GestureSignal::Start => {
                self.start_at(now);
            }
            GestureSignal::Stop(cause) => {
                self.stop_at(cause, now);
            }
        }
        InputDisposition {
            signal,
            suppress_default: input.suppresses_default(),
        }
    }

    /// `start` signal at the backend clock's current time.
    pub fn start(&mut self) -> StartOutcome {
        let now = self.backend.clock().now_mono();
        self.start_at(now)
    }

    /// `stop` signal at the backend clock's current time.
    pub fn stop(&mut self, cause: StopCause) -> StopOutcome {
        let now = self.backend.clock().now_mono();
        self.stop_at(cause, now)
    }

    /// `start` signal at `now`.
    pub fn start_at(&mut self, now: Duration) -> StartOutcome {
        let outcome = self.gesture.start(now);
        debug!(target: "droplet.gesture", ?outcome, level = self.level(), "start");

        let levels = self.config.levels;
        match outcome {
            StartOutcome::CancelIncrement => {
                self.animate_to(levels.default, self.slow, Some(Followup::ResetDone), now);
            }
            StartOutcome::BeginHold => {
                self.animate_to(levels.min, self.slow, Some(Followup::Decrement), now);
            }
        }
        outcome
    }

    /// `stop` signal at `now`.
    pub fn stop_at(&mut self, cause: StopCause, now: Duration) -> StopOutcome {
        let held = self.gesture.held_for(now);
        let outcome = self.gesture.stop(cause, now);
        debug!(
            target: "droplet.gesture",
            ?cause,
            ?outcome,
            ?held,
            "stop"
        );

        let levels = self.config.levels;
        match outcome {
            StopOutcome::Ignored => {}
            StopOutcome::Click => {
                self.animate_to(levels.max, self.fast, Some(Followup::Increment), now);
            }
            StopOutcome::Release(_) => {
                self.animate_to(levels.default, self.fast, None, now);
            }
        }
        outcome
    }

    // -----------------------------------------------------------------------
    // Frames
    // -----------------------------------------------------------------------

    /// Service a display-refresh tick for `run` at `timestamp`.
    pub fn on_frame(&mut self, run: RunId, timestamp: Duration) -> FrameOutcome {
        match self.animator.tick(run, timestamp) {
            Tick::Stale => {
                debug!(target: "droplet.animation", %run, "stale frame ignored");
                FrameOutcome::Stale
            }
            Tick::Moved { level } => {
                self.write_level(level);
                self.backend.frames().request_frame(run);
                FrameOutcome::Moved { level }
            }
            Tick::Finished { level, on_complete } => {
                debug!(
                    target: "droplet.animation",
                    %run,
                    level,
                    rest = ?self.config.levels.rest_level(level),
                    "run finished"
                );
                self.write_level(level);
                if let Some(followup) = on_complete {
                    self.complete(followup, timestamp);
                }
                FrameOutcome::Finished { level }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Current level.
    #[inline]
    #[must_use]
    pub fn level(&self) -> f64 {
        self.animator.level()
    }

    /// Current gesture phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// Whether a run is in flight.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Run currently in flight.
    #[must_use]
    pub fn current_run(&self) -> Option<RunId> {
        self.animator.current_run()
    }

    #[must_use]
    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    #[must_use]
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn animate_to(&mut self, target: f64, speed: Speed, followup: Option<Followup>, now: Duration) {
        let result = self.animator.animate_to(target, speed, followup, now);
        if let Some(old) = result.superseded() {
            self.backend.frames().cancel_frame(old);
        }

        match result {
            Animate::Settled {
                level, on_complete, ..
            } => {
                debug!(
                    target: "droplet.animation",
                    level,
                    rest = ?self.config.levels.rest_level(level),
                    "settled"
                );
                self.write_level(level);
                if let Some(followup) = on_complete {
                    self.complete(followup, now);
                }
            }
            Animate::Scheduled { run, .. } => {
                debug!(
                    target: "droplet.animation",
                    %run,
                    target_level = target,
                    speed = speed.units_per_ms(),
                    "run scheduled"
                );
                self.backend.frames().request_frame(run);
            }
        }
    }

    fn complete(&mut self, followup: Followup, now: Duration) {
        let default = self.config.levels.default;
        match followup {
            Followup::Decrement => {
                self.notify(CounterAction::Decrement);
                // Phase stays Holding until an explicit stop.
                self.animate_to(default, Speed::INSTANT, None, now);
            }
            Followup::Increment => {
                self.notify(CounterAction::Increment);
                self.gesture.finish_increment();
                self.animate_to(default, Speed::INSTANT, None, now);
            }
            Followup::ResetDone => {
                self.gesture.finish_reset();
            }
        }
    }

    fn notify(&mut self, action: CounterAction) {
        info!(target: "droplet.notify", action = action.label(), "{}", action.label());

        let Some(request) = self.notifications.request(action) else {
            return;
        };
        let path = request.path();
        if let Err(err) = self.backend.notifier().notify(request) {
            warn!(target: "droplet.notify", path, error = %err, "notification failed");
        }
    }

    fn write_level(&mut self, level: f64) {
        if let Err(err) = self.backend.surface().set_level(level) {
            warn!(target: "droplet.surface", level, error = %err, "level write failed");
        }
    }
}

impl<B: Backend + std::fmt::Debug> std::fmt::Debug for WaterButton<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaterButton")
            .field("backend", &self.backend)
            .field("level", &self.level())
            .field("phase", &self.phase())
            .field("run", &self.current_run())
            .finish_non_exhaustive()
    }
}
