#![forbid(unsafe_code)]

//! Tunable constants for the water button.
//!
//! [`ButtonConfig`] groups the level bounds, the two animation speeds, and
//! the click threshold. `ButtonConfig::default()` reproduces the stock
//! widget; with the `config` feature the same struct loads from TOML or JSON,
//! every field optional.
//!
//! ```toml
//! click_threshold_ms = 200
//!
//! [levels]
//! max = 3.0
//! min = 92.0
//! default = 65.0
//!
//! [fast]
//! distance = 60.0
//! duration_ms = 1000
//! ```

#[cfg(feature = "config")]
use std::path::Path;
use std::time::Duration;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use droplet_core::{GestureConfig, LevelBounds, Speed};

/// Speed expressed as distance over time, e.g. 60 units per 1000ms.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
pub struct SpeedSpec {
    /// Level units covered.
    pub distance: f64,
    /// Time to cover `distance`, in milliseconds.
    pub duration_ms: u64,
}

impl SpeedSpec {
    /// Click rise and release return: 60 units per second.
    pub const FAST: Self = Self {
        distance: 60.0,
        duration_ms: 1000,
    };

    /// Hold descent and post-click reset: 40 units per two seconds.
    pub const SLOW: Self = Self {
        distance: 40.0,
        duration_ms: 2000,
    };

    /// Rate in units per millisecond.
    #[must_use]
    pub fn speed(&self) -> Speed {
        Speed::over(self.distance, Duration::from_millis(self.duration_ms))
    }

    fn problems(&self, name: &str, errors: &mut Vec<String>) {
        if !self.distance.is_finite() || self.distance < 0.0 {
            errors.push(format!(
                "{name}.distance must be finite and >= 0, got {}",
                self.distance
            ));
        }
        if self.duration_ms == 0 {
            errors.push(format!("{name}.duration_ms must be > 0"));
        }
    }
}

/// Level bounds, speeds, and click threshold for one button.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct ButtonConfig {
    /// MAX / MIN / DEFAULT levels.
    pub levels: LevelBounds,
    /// Speed of the click rise and of the release return.
    pub fast: SpeedSpec,
    /// Speed of the hold descent and of the post-click reset.
    pub slow: SpeedSpec,
    /// A lift sooner than this after the press is a click.
    pub click_threshold_ms: u64,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            levels: LevelBounds::default(),
            fast: SpeedSpec::FAST,
            slow: SpeedSpec::SLOW,
            click_threshold_ms: 200,
        }
    }
}

impl ButtonConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.levels.is_ordered() {
            errors.push(format!(
                "levels must be finite with max < default < min, got max={} default={} min={}",
                self.levels.max, self.levels.default, self.levels.min
            ));
        }

        self.fast.problems("fast", &mut errors);
        self.slow.problems("slow", &mut errors);

        errors
    }

    /// Gesture thresholds derived from this config.
    #[must_use]
    pub fn gesture(&self) -> GestureConfig {
        GestureConfig {
            click_threshold: Duration::from_millis(self.click_threshold_ms),
        }
    }
}

/// Errors from loading or validating a [`ButtonConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
