#![forbid(unsafe_code)]

//! Increment/decrement notifications.
//!
//! A [`RequestDescriptor`] is read once from the button's declared attributes.
//! Without an amount there is no descriptor, and the button holds
//! [`Notifications::Disabled`] for its whole lifetime.

/// Counter change reported when a gesture completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CounterAction {
    Increment,
    Decrement,
}

impl CounterAction {
    /// HTTP method of the notification call.
    pub const METHOD: &'static str = "POST";

    /// Request path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Increment => "/increment",
            Self::Decrement => "/decrement",
        }
    }

    /// Upper-case label used in logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Increment => "INCREMENT",
            Self::Decrement => "DECREMENT",
        }
    }
}

/// Destination, merge mode, and amount for notification calls.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestDescriptor {
    /// Where the response is placed (`hx-target`).
    pub target: Option<String>,
    /// How the response is merged (`hx-swap`).
    pub swap: Option<String>,
    /// Amount sent with every call (`data-amount`).
    pub amount: String,
}

impl RequestDescriptor {
    /// Build from raw attribute values. Returns `None` when the amount is
    /// missing or empty. Any other amount is sent exactly as written.
    #[must_use]
    pub fn from_attributes(
        target: Option<&str>,
        swap: Option<&str>,
        amount: Option<&str>,
    ) -> Option<Self> {
        let amount = amount.filter(|a| !a.is_empty())?;
        Some(Self {
            target: target.map(str::to_owned),
            swap: swap.map(str::to_owned),
            amount: amount.to_owned(),
        })
    }

    /// Request for `action` using this descriptor.
    #[must_use]
    pub fn request(&self, action: CounterAction) -> CounterRequest {
        CounterRequest {
            action,
            target: self.target.clone(),
            swap: self.swap.clone(),
            amount: self.amount.clone(),
        }
    }
}

/// Whether notification calls are issued.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Notifications {
    /// No amount configured: never notify.
    #[default]
    Disabled,
    /// Notify with this descriptor.
    Enabled(RequestDescriptor),
}

impl Notifications {
    /// Enabled iff a descriptor exists.
    #[must_use]
    pub fn from_descriptor(descriptor: Option<RequestDescriptor>) -> Self {
        descriptor.map_or(Self::Disabled, Self::Enabled)
    }

    /// Whether calls are issued.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// Request for `action`, or `None` when disabled.
    #[must_use]
    pub fn request(&self, action: CounterAction) -> Option<CounterRequest> {
        match self {
            Self::Disabled => None,
            Self::Enabled(descriptor) => Some(descriptor.request(action)),
        }
    }
}

/// One fire-and-forget notification call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CounterRequest {
    pub action: CounterAction,
    pub target: Option<String>,
    pub swap: Option<String>,
    pub amount: String,
}

impl CounterRequest {
    /// Request path.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.action.path()
    }

    /// Payload values sent with the call.
    #[must_use]
    pub fn payload(&self) -> RequestPayload<'_> {
        RequestPayload {
            amount: &self.amount,
        }
    }
}

/// Body values of a notification call: `{amount}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RequestPayload<'a> {
    pub amount: &'a str,
}
