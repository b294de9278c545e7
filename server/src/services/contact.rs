//! Contact message delivery.
//!
//! DESIGN
//! ======
//! `ContactService` is built once at startup with whatever relay credentials
//! the environment provided. Missing credentials do not stop the server; each
//! delivery attempt reports `ContactError::Configuration` without touching the
//! relay, so the visitor gets a "service unavailable" answer.

use std::sync::Arc;

use client::net::types::{MAX_EMAIL_CHARS, MAX_MESSAGE_CHARS, MAX_NAME_CHARS};
use serde::Deserialize;

use crate::config::ConfigError;
use crate::relay::{ContactEnvelope, MessageRelay, Recipient, RelayCredentials, RelayError};

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("invalid contact message: {0}")]
    Invalid(&'static str),
    #[error("contact relay not configured: {0}")]
    Configuration(ConfigError),
    #[error("message delivery failed: {0}")]
    Delivery(#[from] RelayError),
}

/// Contact message as submitted by the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Trimmed and checked message, ready to address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Trim every field and check presence, email shape, and length caps.
///
/// # Errors
///
/// Returns `ContactError::Invalid` naming the first failing check.
pub fn validate(request: &ContactRequest) -> Result<ValidatedMessage, ContactError> {
    let name = request.name.trim();
    let email = request.email.trim();
    let message = request.message.trim();

    if name.is_empty() {
        return Err(ContactError::Invalid("name is required"));
    }
    if email.is_empty() {
        return Err(ContactError::Invalid("email is required"));
    }
    if message.is_empty() {
        return Err(ContactError::Invalid("message is required"));
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(ContactError::Invalid("name is too long"));
    }
    if email.chars().count() > MAX_EMAIL_CHARS {
        return Err(ContactError::Invalid("email is too long"));
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ContactError::Invalid("message is too long"));
    }
    if !looks_like_email(email) {
        return Err(ContactError::Invalid("email is malformed"));
    }

    Ok(ValidatedMessage { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
}

/// Same shape check a browser's `type="email"` input applies: one `@` with
/// non-empty sides and no whitespace.
fn looks_like_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

#[derive(Clone)]
pub struct ContactService {
    credentials: Arc<Result<RelayCredentials, ConfigError>>,
    recipient: Arc<Recipient>,
    relay: Arc<dyn MessageRelay>,
}

impl ContactService {
    #[must_use]
    pub fn new(
        credentials: Result<RelayCredentials, ConfigError>,
        recipient: Recipient,
        relay: Arc<dyn MessageRelay>,
    ) -> Self {
        Self { credentials: Arc::new(credentials), recipient: Arc::new(recipient), relay }
    }

    #[must_use]
    pub fn envelope(&self, message: ValidatedMessage) -> ContactEnvelope {
        ContactEnvelope {
            from_name: message.name,
            from_email: message.email,
            to_name: self.recipient.name.clone(),
            to_email: self.recipient.email.clone(),
            message: message.message,
        }
    }

    /// Validate, address, and hand the message to the relay.
    ///
    /// # Errors
    ///
    /// `Invalid` for a malformed request, `Configuration` when relay
    /// credentials are missing (the relay is not called), `Delivery` when the
    /// relay fails.
    pub async fn deliver(&self, request: &ContactRequest) -> Result<(), ContactError> {
        let message = validate(request)?;
        let credentials = match self.credentials.as_ref() {
            Ok(credentials) => credentials,
            Err(e) => return Err(ContactError::Configuration(e.clone())),
        };

        let envelope = self.envelope(message);
        self.relay.send(credentials, &envelope).await?;
        tracing::info!(to = %envelope.to_email, "contact message relayed");
        Ok(())
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
