#![forbid(unsafe_code)]

//! JSON input parser for DOM pointer and touch events forwarded by the page.
//!
//! [`parse_input_event`] accepts the subset of a DOM `Event` the page glue
//! serializes (`type` and `timeStamp`) and returns the matching
//! [`PointerInput`] with its timestamp. Event types the button does not listen
//! to return `Ok(None)`.
//!
//! ```json
//! {"type": "touchstart", "timeStamp": 1532.4}
//! ```
//!
//! `timeStamp` is milliseconds on the page's monotonic clock
//! (`performance.now()` origin), possibly fractional.

use core::time::Duration;

use droplet_core::PointerInput;
use serde::Deserialize;

/// Errors from parsing an encoded DOM event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputParseError {
    /// Malformed JSON.
    Json(String),
    /// Missing required field.
    MissingField(&'static str),
    /// `timeStamp` is negative or out of range.
    InvalidTimestamp(String),
}

impl core::fmt::Display for InputParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "JSON parse error: {msg}"),
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
            Self::InvalidTimestamp(ts) => write!(f, "invalid timestamp: {ts}"),
        }
    }
}

impl std::error::Error for InputParseError {}

/// Internal deserialization target; extra DOM fields are ignored.
#[derive(Debug, Deserialize)]
struct RawDomEvent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, rename = "timeStamp")]
    time_stamp: Option<f64>,
}

/// Parse a JSON-encoded DOM event into a pointer input and its timestamp.
///
/// Returns `Err` for malformed JSON, a missing `timeStamp` on a recognized
/// event, or a timestamp that is negative or too large.
pub fn parse_input_event(json: &str) -> Result<Option<(PointerInput, Duration)>, InputParseError> {
    let raw: RawDomEvent =
        serde_json::from_str(json).map_err(|e| InputParseError::Json(e.to_string()))?;

    let Some(input) = PointerInput::from_dom_name(&raw.kind) else {
        return Ok(None);
    };
    let ms = raw
        .time_stamp
        .ok_or(InputParseError::MissingField("timeStamp"))?;
    Ok(Some((input, timestamp_from_ms(ms)?)))
}

fn timestamp_from_ms(ms: f64) -> Result<Duration, InputParseError> {
    if ms < 0.0 {
        return Err(InputParseError::InvalidTimestamp(ms.to_string()));
    }
    Duration::try_from_secs_f64(ms / 1000.0)
        .map_err(|_| InputParseError::InvalidTimestamp(ms.to_string()))
}
