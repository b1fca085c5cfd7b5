#![forbid(unsafe_code)]

//! Core: level bounds, rate-based level animation, gesture state, and input
//! normalization for the droplet counter button.
//!
//! # Role in droplet
//! `droplet-core` is the deterministic heart of the widget. It never reads a
//! clock and never performs I/O: every time-dependent operation takes an
//! explicit monotonic timestamp, and every side effect is returned to the
//! caller as a value.
//!
//! # Primary responsibilities
//! - **LevelBounds**: the inverted MAX/DEFAULT/MIN level range.
//! - **LevelAnimator**: linear, rate-based animation with a single current run.
//! - **GestureTracker**: click vs hold classification (idle/holding/incrementing).
//! - **PointerInput**: raw pointer/touch events mapped to `start`/`stop` signals.
//! - **RequestDescriptor**: increment/decrement notification payloads.
//!
//! # How it fits in the system
//! The runtime (`droplet-runtime`) owns one `LevelAnimator` and one
//! `GestureTracker` per button and drives them from a backend
//! (`droplet-backend`), which supplies the clock, the rendering surface, the
//! frame scheduler, and the notifier.

pub mod animation;
pub mod gesture;
pub mod input;
pub mod level;
pub mod request;

pub use animation::{Animate, Direction, LevelAnimator, RunId, Speed, Tick};
pub use gesture::{GestureConfig, GesturePhase, GestureTracker, StartOutcome, StopOutcome};
pub use input::{GestureSignal, PointerInput, StopCause};
pub use level::{LevelBounds, RestLevel};
pub use request::{CounterAction, CounterRequest, Notifications, RequestDescriptor, RequestPayload};
