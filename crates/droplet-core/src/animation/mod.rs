#![forbid(unsafe_code)]

//! Rate-based level animation.
//!
//! Motion is expressed as a speed in level units per millisecond rather than
//! a fixed duration: the time a run takes is `|target - start| / speed`.
//!
//! The engine itself lives in [`linear`]; this module holds the small value
//! types it shares with callers.

pub mod linear;

use std::time::Duration;

pub use linear::{Animate, LevelAnimator, Tick};

/// Speed in level units per millisecond.
///
/// Always non-negative. Zero means "instantaneous": a run at this speed
/// settles synchronously without scheduling a frame.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Speed(f64);

impl Speed {
    /// Instantaneous motion.
    pub const INSTANT: Self = Self(0.0);

    /// Speed from units per millisecond. Negative values are taken by
    /// magnitude; non-finite values collapse to [`Speed::INSTANT`].
    #[must_use]
    pub fn per_ms(units: f64) -> Self {
        if units.is_finite() {
            Self(units.abs())
        } else {
            Self::INSTANT
        }
    }

    /// Speed that covers `distance` units in `duration`.
    ///
    /// A zero duration yields [`Speed::INSTANT`].
    #[must_use]
    pub fn over(distance: f64, duration: Duration) -> Self {
        let ms = duration.as_secs_f64() * 1000.0;
        if ms == 0.0 {
            return Self::INSTANT;
        }
        Self::per_ms(distance / ms)
    }

    /// Units per millisecond.
    #[inline]
    #[must_use]
    pub const fn units_per_ms(self) -> f64 {
        self.0
    }

    /// Whether this speed settles without animating.
    #[inline]
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0.0
    }
}

/// Direction of travel in raw numeric terms, captured once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Level grows numerically (toward MIN, "emptier").
    Increasing,
    /// Level shrinks numerically (toward MAX, "fuller").
    Decreasing,
}

impl Direction {
    /// Direction from `from` toward `to`. Equal values resolve to `Decreasing`.
    #[must_use]
    pub fn between(from: f64, to: f64) -> Self {
        if to > from {
            Self::Increasing
        } else {
            Self::Decreasing
        }
    }

    /// `+1.0` or `-1.0`.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Increasing => 1.0,
            Self::Decreasing => -1.0,
        }
    }

    /// Whether `level` has reached or passed `target` in this direction.
    #[inline]
    #[must_use]
    pub fn reached(self, level: f64, target: f64) -> bool {
        match self {
            Self::Increasing => level >= target,
            Self::Decreasing => level <= target,
        }
    }
}

/// Generation token identifying one animation run.
///
/// Tokens increase monotonically per animator; a tick carrying any token
/// other than the current run's is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunId(u64);

impl RunId {
    /// Raw generation number (for host round-trips).
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Rebuild a token from [`get`](Self::get).
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl core::fmt::Display for RunId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "run#{}", self.0)
    }
}
