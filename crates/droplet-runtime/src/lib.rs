#![forbid(unsafe_code)]

//! Droplet Runtime
//!
//! This crate wires the pure state in `droplet-core` to a backend, producing
//! the gesture-animation controller behind the water button.
//!
//! # Key Components
//!
//! - [`WaterButton`] - Controller: input in, level writes and notifications out
//! - [`ButtonConfig`] - Level bounds, speeds, and click threshold
//! - [`SystemClock`] - Monotonic clock for native hosts
//!
//! # Role in droplet
//! `droplet-runtime` is the orchestrator. It turns `start`/`stop` signals into
//! animation runs, services display-refresh ticks, performs the follow-up of a
//! finished run, and reports increments and decrements through the backend's
//! notifier.
//!
//! # How it fits in the system
//! Hosts construct a backend (`droplet-web` for browsers, a mock in tests),
//! hand it to [`WaterButton::new`], then forward pointer events and frame
//! callbacks.

pub mod button;
pub mod clock;
pub mod config;

pub use button::{FrameOutcome, InputDisposition, WaterButton};
pub use clock::SystemClock;
pub use config::{ButtonConfig, ConfigError, SpeedSpec};
