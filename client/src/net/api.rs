//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! HTTP outcomes are folded into `ContactError` kinds so the submit flow can
//! pick the right visitor-facing notice without inspecting status codes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ContactMessage;
use crate::state::contact::{ContactError, ContactTransport};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Map a non-success status from the contact endpoint to an error kind.
#[cfg(any(test, feature = "hydrate"))]
fn contact_error_for_status(status: u16, detail: Option<String>) -> ContactError {
    let detail = detail.map_or_else(|| format!("status {status}"), |d| format!("status {status}: {d}"));
    match status {
        400 | 413 | 415 | 422 => ContactError::Invalid(detail),
        429 => ContactError::RateLimited(detail),
        503 => ContactError::Configuration(detail),
        _ => ContactError::Delivery(detail),
    }
}

/// Delivers contact messages by posting them to the server's relay endpoint.
#[derive(Clone, Debug)]
pub struct HttpContactTransport {
    endpoint: String,
}

impl HttpContactTransport {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpContactTransport {
    fn default() -> Self {
        Self::new(CONTACT_ENDPOINT)
    }
}

impl ContactTransport for HttpContactTransport {
    /// `POST` the message as JSON.
    ///
    /// # Errors
    ///
    /// `Configuration` when the server reports the relay is not configured,
    /// `Invalid` when it refuses the content, `RateLimited` on `429`, and
    /// `Delivery` for network failures and every other non-OK status.
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(message)
                .map_err(|e| ContactError::Delivery(e.to_string()))?
                .send()
                .await
                .map_err(|e| ContactError::Delivery(e.to_string()))?;
            if !resp.ok() {
                let detail = resp
                    .json::<super::types::ContactResponse>()
                    .await
                    .ok()
                    .and_then(|body| body.error);
                return Err(contact_error_for_status(resp.status(), detail));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
            Err(ContactError::Delivery("not available on server".to_owned()))
        }
    }
}
