#![forbid(unsafe_code)]
#![doc = "Backend traits for droplet: platform abstraction for time, rendering, frames, and notifications."]
#![doc = ""]
#![doc = "This crate defines the boundary between the droplet runtime and the page it"]
#![doc = "lives in (a WASM host via `droplet-web`, or a test double)."]

use core::time::Duration;

use droplet_core::{CounterRequest, RunId};

/// Monotonic clock abstraction.
///
/// Browser hosts use `performance.now()`; native code uses `Instant`.
/// The runtime never reads a clock directly. All time flows through this trait.
pub trait BackendClock {
    /// Returns elapsed time since an unspecified epoch, monotonically increasing.
    fn now_mono(&self) -> Duration;
}

/// The settable numeric attribute that paints the level.
pub trait LevelSurface {
    /// Platform-specific error type.
    type Error: core::fmt::Debug + core::fmt::Display;

    /// Write the level. Called on every level change, including the
    /// terminal tick of a run.
    fn set_level(&mut self, level: f64) -> Result<(), Self::Error>;
}

/// Per-display-refresh tick scheduling (`requestAnimationFrame` in browsers).
///
/// A frame is requested on behalf of one animation run. When the frame fires,
/// the host hands the same [`RunId`] back to the runtime.
pub trait FrameScheduler {
    /// Ask for one tick for `run` at the next display refresh.
    fn request_frame(&mut self, run: RunId);

    /// Revoke a previously requested tick for `run`. Unknown runs are ignored.
    fn cancel_frame(&mut self, run: RunId);
}

/// Fire-and-forget increment/decrement call.
pub trait CounterNotifier {
    /// Platform-specific error type.
    type Error: core::fmt::Debug + core::fmt::Display;

    /// Issue the call. The runtime never awaits or retries it.
    fn notify(&mut self, request: CounterRequest) -> Result<(), Self::Error>;
}

/// Unified backend combining clock, surface, frame scheduler, and notifier.
///
/// The `WaterButton` runtime is generic over this trait. Concrete implementations:
/// - `droplet-web`: host-driven, deterministic WASM backend.
pub trait Backend {
    /// Platform-specific error type shared across sub-traits.
    type Error: core::fmt::Debug + core::fmt::Display;

    /// Clock implementation.
    type Clock: BackendClock;

    /// Rendering surface implementation.
    type Surface: LevelSurface<Error = Self::Error>;

    /// Frame scheduler implementation.
    type Frames: FrameScheduler;

    /// Notifier implementation.
    type Notifier: CounterNotifier<Error = Self::Error>;

    /// Access the monotonic clock.
    fn clock(&self) -> &Self::Clock;

    /// Access the level surface.
    fn surface(&mut self) -> &mut Self::Surface;

    /// Access the frame scheduler.
    fn frames(&mut self) -> &mut Self::Frames;

    /// Access the notifier.
    fn notifier(&mut self) -> &mut Self::Notifier;
}
