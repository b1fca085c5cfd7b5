#![forbid(unsafe_code)]

//! Host-facing driver for a mounted water button.
//!
//! [`WebButton`] is what the page glue holds. Each browser callback maps to
//! one method:
//!
//! | Browser callback | Method |
//! |------------------|--------|
//! | pointer/touch listener | [`dispatch`](WebButton::dispatch) |
//! | `requestAnimationFrame` | [`frame`](WebButton::frame) |
//!
//! After each call the host mirrors [`level`](WebButton::level) onto the
//! level element, schedules a frame if [`wants_frame`](WebButton::wants_frame),
//! and issues [`drain_requests`](WebButton::drain_requests).
//!
//! Timestamps are the event's or frame's own `timeStamp`; the clock never
//! moves backwards.

use core::time::Duration;

use droplet_backend::{Backend, BackendClock};
use droplet_core::{CounterRequest, GesturePhase, PointerInput};
use droplet_runtime::{FrameOutcome, InputDisposition, WaterButton};

use crate::{WebBackend, WebSurface};

/// A mounted button plus its host-driven backend.
#[derive(Debug)]
pub struct WebButton {
    button: WaterButton<WebBackend>,
}

impl WebButton {
    /// Wrap an already-constructed controller.
    #[must_use]
    pub fn from_button(button: WaterButton<WebBackend>) -> Self {
        Self { button }
    }

    /// Forward a pointer event that fired at `timestamp`.
    pub fn dispatch(&mut self, input: PointerInput, timestamp: Duration) -> InputDisposition {
        self.button.backend_mut().clock_mut().advance_to(timestamp);
        self.button.handle_input(input)
    }

    /// Forward a JSON-encoded DOM event. Unrelated event types return `Ok(None)`.
    #[cfg(feature = "json")]
    pub fn dispatch_json(
        &mut self,
        json: &str,
    ) -> Result<Option<InputDisposition>, crate::input_parser::InputParseError> {
        let parsed = crate::input_parser::parse_input_event(json)?;
        Ok(parsed.map(|(input, timestamp)| self.dispatch(input, timestamp)))
    }

    /// Service the pending animation frame at `timestamp`.
    ///
    /// Returns `None` when no frame was requested.
    pub fn frame(&mut self, timestamp: Duration) -> Option<FrameOutcome> {
        self.button.backend_mut().clock_mut().advance_to(timestamp);
        let run = self.button.backend_mut().frames_mut().take_frame_request()?;
        let now = self.button.backend().clock().now_mono();
        Some(self.button.on_frame(run, now))
    }

    /// Whether the host should call `requestAnimationFrame`.
    #[must_use]
    pub fn wants_frame(&self) -> bool {
        self.button.backend().frames_ref().pending().is_some()
    }

    /// Notification calls queued since the last drain, in issue order.
    pub fn drain_requests(&mut self) -> Vec<CounterRequest> {
        self.button
            .backend_mut()
            .notifier_mut()
            .drain_requests()
            .collect()
    }

    /// Queued calls encoded for the host's fetch helper.
    #[cfg(feature = "json")]
    pub fn drain_requests_json(&mut self) -> Result<Vec<String>, serde_json::Error> {
        self.drain_requests()
            .iter()
            .map(crate::outbound::encode_request)
            .collect()
    }

    /// The level element's attribute state.
    #[must_use]
    pub fn surface(&self) -> &WebSurface {
        self.button.backend().surface_ref()
    }

    /// Mutable attribute state (take writes, detach).
    pub fn surface_mut(&mut self) -> &mut WebSurface {
        self.button.backend_mut().surface_mut()
    }

    #[must_use]
    pub fn level(&self) -> f64 {
        self.button.level()
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.button.phase()
    }

    /// The wrapped controller.
    #[must_use]
    pub fn button(&self) -> &WaterButton<WebBackend> {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut WaterButton<WebBackend> {
        &mut self.button
    }
}
