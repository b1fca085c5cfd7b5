#![forbid(unsafe_code)]

//! JSON encoding of notification calls for the page's fetch helper.
//!
//! ```json
//! {"method":"POST","path":"/decrement","target":"#count","swap":"innerHTML","values":{"amount":"250"}}
//! ```
//!
//! `target` and `swap` are omitted when the button does not declare them.

use droplet_core::{CounterAction, CounterRequest, RequestPayload};
use serde::Serialize;

/// Wire shape of one notification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundRequest<'a> {
    pub method: &'static str,
    pub path: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap: Option<&'a str>,
    pub values: RequestPayload<'a>,
}

impl<'a> From<&'a CounterRequest> for OutboundRequest<'a> {
    fn from(request: &'a CounterRequest) -> Self {
        Self {
            method: CounterAction::METHOD,
            path: request.path(),
            target: request.target.as_deref(),
            swap: request.swap.as_deref(),
            values: request.payload(),
        }
    }
}

/// Encode `request` as a single JSON object.
pub fn encode_request(request: &CounterRequest) -> Result<String, serde_json::Error> {
    serde_json::to_string(&OutboundRequest::from(request))
}
