#![forbid(unsafe_code)]

//! Level bounds for the water indicator.
//!
//! The level is a scalar drawn as a vertical offset, so the range is inverted
//! relative to magnitude: [`LevelBounds::max`] ("full") is numerically the
//! smallest value and [`LevelBounds::min`] ("empty") the largest.
//!
//! # Invariants
//!
//! 1. For bounds that pass [`LevelBounds::is_ordered`], `max < default < min`.
//! 2. At rest the level equals exactly one of `max`, `min`, `default`
//!    (see [`LevelBounds::rest_level`]).

/// Default "full" level (numerically smallest).
pub const DEFAULT_MAX_LEVEL: f64 = 3.0;
/// Default "empty" level (numerically largest).
pub const DEFAULT_MIN_LEVEL: f64 = 92.0;
/// Default resting level.
pub const DEFAULT_REST_LEVEL: f64 = 65.0;

/// The three resting positions of the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestLevel {
    /// Most-incremented position.
    Max,
    /// Resting position between the bounds.
    Default,
    /// Most-decremented position.
    Min,
}

/// Inverted level range with a default resting point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LevelBounds {
    /// Most-incremented level ("full"). Numerically the smallest.
    pub max: f64,
    /// Most-decremented level ("empty"). Numerically the largest.
    pub min: f64,
    /// Resting level, strictly between `max` and `min`.
    pub default: f64,
}

impl Default for LevelBounds {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX_LEVEL,
            min: DEFAULT_MIN_LEVEL,
            default: DEFAULT_REST_LEVEL,
        }
    }
}

impl LevelBounds {
    /// Create bounds from raw values. Use [`is_ordered`](Self::is_ordered) to validate.
    #[must_use]
    pub const fn new(max: f64, min: f64, default: f64) -> Self {
        Self { max, min, default }
    }

    /// Whether all values are finite and `max < default < min`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.max.is_finite()
            && self.min.is_finite()
            && self.default.is_finite()
            && self.max < self.default
            && self.default < self.min
    }

    /// Classify `level` as one of the resting positions, if it is exactly one.
    #[must_use]
    pub fn rest_level(&self, level: f64) -> Option<RestLevel> {
        if level == self.default {
            Some(RestLevel::Default)
        } else if level == self.max {
            Some(RestLevel::Max)
        } else if level == self.min {
            Some(RestLevel::Min)
        } else {
            None
        }
    }
}
