#![forbid(unsafe_code)]

//! `droplet-web` provides a WASM-friendly backend for the droplet water button.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding page (JS) forwards pointer events and
//!   `requestAnimationFrame` callbacks, and performs the notification calls.
//! - **Deterministic time**: the host advances a monotonic clock explicitly.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! This crate does not bind to `wasm-bindgen`. The page glue owns the real DOM
//! and reads back level writes, frame requests, and queued notifications.

pub mod dom;
#[cfg(feature = "json")]
pub mod input_parser;
#[cfg(feature = "json")]
pub mod outbound;
pub mod web_button;

use core::time::Duration;
use std::collections::VecDeque;

use droplet_backend::{Backend, BackendClock, CounterNotifier, FrameScheduler, LevelSurface};
use droplet_core::{CounterRequest, RunId};

pub use dom::{DomLookup, MountError, StaticDom, mount};
pub use web_button::WebButton;

/// Web backend error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebBackendError {
    /// The level element was removed from the page.
    SurfaceDetached,
}

impl core::fmt::Display for WebBackendError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SurfaceDetached => write!(f, "level element is detached"),
        }
    }
}

impl std::error::Error for WebBackendError {}

/// Deterministic monotonic clock controlled by the host.
#[derive(Debug, Default, Clone)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Set current monotonic time.
    pub fn set(&mut self, now: Duration) {
        self.now = now;
    }

    /// Advance monotonic time by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }

    /// Move to `now` unless that would go backwards.
    pub fn advance_to(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl BackendClock for DeterministicClock {
    fn now_mono(&self) -> Duration {
        self.now
    }
}

/// Most writes a [`WebSurface`] retains between drains.
///
/// Reaching it drops the oldest half of the log.
pub const WRITE_LOG_CAPACITY: usize = 1024;

/// The level element's `y` attribute, as last written by the runtime.
///
/// [`value`](Self::value) is what the host mirrors. The write log is a
/// bounded trace of recent writes for hosts and tests that want the path.
#[derive(Debug, Clone)]
pub struct WebSurface {
    value: Option<f64>,
    writes: Vec<f64>,
    attached: bool,
}

impl WebSurface {
    /// Create an attached surface with no value yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: None,
            writes: Vec::new(),
            attached: true,
        }
    }

    /// Attribute value the host should mirror onto the element.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    /// Writes since the last [`take_writes`](Self::take_writes), at most
    /// [`WRITE_LOG_CAPACITY`] of the most recent.
    #[must_use]
    pub fn writes(&self) -> &[f64] {
        &self.writes
    }

    /// Take the write log, leaving it empty.
    pub fn take_writes(&mut self) -> Vec<f64> {
        std::mem::take(&mut self.writes)
    }

    /// Mark the element as removed; later writes fail.
    pub fn detach(&mut self) {
        self.attached = false;
    }
}

impl Default for WebSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelSurface for WebSurface {
    type Error = WebBackendError;

    fn set_level(&mut self, level: f64) -> Result<(), Self::Error> {
        if !self.attached {
            return Err(WebBackendError::SurfaceDetached);
        }
        self.value = Some(level);
        if self.writes.len() >= WRITE_LOG_CAPACITY {
            self.writes.drain(..WRITE_LOG_CAPACITY / 2);
        }
        self.writes.push(level);
        Ok(())
    }
}

/// Outstanding `requestAnimationFrame` request.
///
/// One button has at most one run in flight, so at most one frame is pending.
#[derive(Debug, Default, Clone)]
pub struct WebFrames {
    pending: Option<RunId>,
}

impl WebFrames {
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Run waiting for the next display refresh, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<RunId> {
        self.pending
    }

    /// Take the pending request; the host services it with the frame timestamp.
    pub fn take_frame_request(&mut self) -> Option<RunId> {
        self.pending.take()
    }
}

impl FrameScheduler for WebFrames {
    fn request_frame(&mut self, run: RunId) {
        self.pending = Some(run);
    }

    fn cancel_frame(&mut self, run: RunId) {
        if self.pending == Some(run) {
            self.pending = None;
        }
    }
}

/// Queue of notification calls for the host to issue.
#[derive(Debug, Default, Clone)]
pub struct WebNotifier {
    queue: VecDeque<CounterRequest>,
}

impl WebNotifier {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Number of queued calls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drain all queued calls in issue order.
    pub fn drain_requests(&mut self) -> impl Iterator<Item = CounterRequest> + '_ {
        self.queue.drain(..)
    }
}

impl CounterNotifier for WebNotifier {
    type Error = WebBackendError;

    fn notify(&mut self, request: CounterRequest) -> Result<(), Self::Error> {
        self.queue.push_back(request);
        Ok(())
    }
}

/// A minimal, host-driven WASM backend.
///
/// This backend is intended to be driven by a JS host:
/// - advance time via [`Self::clock_mut`]
/// - service frames via [`Self::frames_mut`]
/// - read level writes via [`Self::surface_mut`]
/// - issue queued calls via [`Self::notifier_mut`]
#[derive(Debug, Clone, Default)]
pub struct WebBackend {
    clock: DeterministicClock,
    surface: WebSurface,
    frames: WebFrames,
    notifier: WebNotifier,
}

impl WebBackend {
    /// Create a backend with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(DeterministicClock::new())
    }

    /// Create a backend around an existing clock.
    #[must_use]
    pub fn with_clock(clock: DeterministicClock) -> Self {
        Self {
            clock,
            surface: WebSurface::new(),
            frames: WebFrames::new(),
            notifier: WebNotifier::new(),
        }
    }

    /// Mutably access the clock.
    pub fn clock_mut(&mut self) -> &mut DeterministicClock {
        &mut self.clock
    }

    /// Mutably access the level surface.
    pub fn surface_mut(&mut self) -> &mut WebSurface {
        &mut self.surface
    }

    /// Mutably access the frame requests.
    pub fn frames_mut(&mut self) -> &mut WebFrames {
        &mut self.frames
    }

    /// Mutably access the notification queue.
    pub fn notifier_mut(&mut self) -> &mut WebNotifier {
        &mut self.notifier
    }

    /// Read the level surface.
    #[must_use]
    pub const fn surface_ref(&self) -> &WebSurface {
        &self.surface
    }

    /// Read the frame requests.
    #[must_use]
    pub const fn frames_ref(&self) -> &WebFrames {
        &self.frames
    }
}

impl Backend for WebBackend {
    type Error = WebBackendError;

    type Clock = DeterministicClock;
    type Surface = WebSurface;
    type Frames = WebFrames;
    type Notifier = WebNotifier;

    fn clock(&self) -> &Self::Clock {
        &self.clock
    }

    fn surface(&mut self) -> &mut Self::Surface {
        &mut self.surface
    }

    fn frames(&mut self) -> &mut Self::Frames {
        &mut self.frames
    }

    fn notifier(&mut self) -> &mut Self::Notifier {
        &mut self.notifier
    }
}
