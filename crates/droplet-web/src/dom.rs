#![forbid(unsafe_code)]

//! Page elements the button is wired to, and mounting.
//!
//! The host exposes the page through [`DomLookup`]. [`mount`] reads the
//! request attributes once, verifies both elements exist, and returns a
//! [`WebButton`] whose first level write (DEFAULT) is already recorded.
//!
//! # Failure Modes
//!
//! - Button or level element missing: [`MountError::MissingElement`]. There
//!   is no degraded mode.
//! - `data-amount` missing or empty: not an error. Notifications are disabled
//!   for the button's lifetime.

use std::collections::BTreeMap;

use droplet_core::{Notifications, RequestDescriptor};
use droplet_runtime::{ButtonConfig, ConfigError, WaterButton};

use crate::{DeterministicClock, WebBackend, WebButton};

/// Id of the button element.
pub const BUTTON_ID: &str = "waterDropBtn";
/// Id of the element whose attribute paints the level.
pub const LEVEL_ID: &str = "waterLevel";
/// Button attribute naming where the response goes.
pub const TARGET_ATTRIBUTE: &str = "hx-target";
/// Button attribute naming how the response is merged.
pub const SWAP_ATTRIBUTE: &str = "hx-swap";
/// Button attribute carrying the amount sent with each call.
pub const AMOUNT_ATTRIBUTE: &str = "data-amount";

/// Read-only view of the page.
pub trait DomLookup {
    /// Whether an element with `id` exists.
    fn has_element(&self, id: &str) -> bool;

    /// Value of attribute `name` on element `id`.
    fn attribute(&self, id: &str, name: &str) -> Option<String>;
}

/// In-memory page snapshot, filled in by the host (or a test).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticDom {
    elements: BTreeMap<String, BTreeMap<String, String>>,
}

impl StaticDom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock page: button and level element, no request attributes.
    #[must_use]
    pub fn water_button() -> Self {
        Self::new().with_element(BUTTON_ID).with_element(LEVEL_ID)
    }

    /// Add an element without attributes.
    #[must_use]
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.entry(id.to_owned()).or_default();
        self
    }

    /// Set an attribute, creating the element if needed.
    #[must_use]
    pub fn with_attribute(mut self, id: &str, name: &str, value: &str) -> Self {
        self.elements
            .entry(id.to_owned())
            .or_default()
            .insert(name.to_owned(), value.to_owned());
        self
    }
}

impl DomLookup for StaticDom {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.elements.get(id)?.get(name).cloned()
    }
}

/// Request descriptor declared on the button, if it carries an amount.
#[must_use]
pub fn read_request_descriptor(dom: &impl DomLookup) -> Option<RequestDescriptor> {
    let target = dom.attribute(BUTTON_ID, TARGET_ATTRIBUTE);
    let swap = dom.attribute(BUTTON_ID, SWAP_ATTRIBUTE);
    let amount = dom.attribute(BUTTON_ID, AMOUNT_ATTRIBUTE);
    RequestDescriptor::from_attributes(target.as_deref(), swap.as_deref(), amount.as_deref())
}

/// Errors from [`mount`].
#[derive(Debug)]
pub enum MountError {
    /// A required element is not on the page.
    MissingElement(&'static str),
    /// The button configuration is invalid.
    Config(ConfigError),
}

impl core::fmt::Display for MountError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingElement(id) => write!(f, "missing element: #{id}"),
            Self::Config(e) => write!(f, "invalid button config: {e}"),
        }
    }
}

impl std::error::Error for MountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingElement(_) => None,
            Self::Config(e) => Some(e),
        }
    }
}

impl From<ConfigError> for MountError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Wire a button to the page.
pub fn mount(
    dom: &impl DomLookup,
    clock: DeterministicClock,
    config: ButtonConfig,
) -> Result<WebButton, MountError> {
    for id in [BUTTON_ID, LEVEL_ID] {
        if !dom.has_element(id) {
            return Err(MountError::MissingElement(id));
        }
    }

    let notifications = Notifications::from_descriptor(read_request_descriptor(dom));
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "droplet.web",
        notify = notifications.is_enabled(),
        "mounting water button"
    );

    let button = WaterButton::new(WebBackend::with_clock(clock), config, notifications)?;
    Ok(WebButton::from_button(button))
}
