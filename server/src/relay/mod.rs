//! Outbound message relay.
//!
//! DESIGN
//! ======
//! `MessageRelay` is the seam between the contact service and the external
//! transactional-email provider. The production implementation is
//! [`emailjs::EmailJsRelay`]; tests substitute in-memory relays.

pub mod emailjs;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::{ConfigError, non_blank};

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
pub const PRIVATE_KEY_VAR: &str = "EMAILJS_PRIVATE_KEY";

pub const DEFAULT_RECIPIENT_NAME: &str = "Vasini Singh";
pub const DEFAULT_RECIPIENT_EMAIL: &str = "tovasinisingh@gmail.com";

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The HTTP request never produced a response.
    #[error("relay request failed: {0}")]
    Request(String),

    /// The relay answered with a non-success status.
    #[error("relay rejected message: status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// CREDENTIALS
// =============================================================================

/// Identifiers and keys the relay needs to accept a message.
#[derive(Clone, PartialEq, Eq)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Optional private key for accounts that require server-side auth.
    pub private_key: Option<String>,
}

impl std::fmt::Debug for RelayCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayCredentials")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &"<redacted>")
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl RelayCredentials {
    /// Read credentials from `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`,
    /// `EMAILJS_PUBLIC_KEY` and optional `EMAILJS_PRIVATE_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVars` naming every required variable that
    /// is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let service_id = non_blank(&lookup, SERVICE_ID_VAR);
        let template_id = non_blank(&lookup, TEMPLATE_ID_VAR);
        let public_key = non_blank(&lookup, PUBLIC_KEY_VAR);

        match (service_id, template_id, public_key) {
            (Some(service_id), Some(template_id), Some(public_key)) => Ok(Self {
                service_id,
                template_id,
                public_key,
                private_key: non_blank(&lookup, PRIVATE_KEY_VAR),
            }),
            (service_id, template_id, public_key) => {
                let missing = [
                    (SERVICE_ID_VAR, service_id.is_none()),
                    (TEMPLATE_ID_VAR, template_id.is_none()),
                    (PUBLIC_KEY_VAR, public_key.is_none()),
                ]
                .into_iter()
                .filter_map(|(var, absent)| absent.then_some(var))
                .collect();
                Err(ConfigError::MissingVars(missing))
            }
        }
    }
}

// =============================================================================
// ENVELOPE
// =============================================================================

/// Fixed identity every contact message is addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub name: String,
    pub email: String,
}

impl Recipient {
    /// `CONTACT_RECIPIENT_NAME` / `CONTACT_RECIPIENT_EMAIL`, defaulting to the
    /// site owner.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            name: non_blank(&lookup, "CONTACT_RECIPIENT_NAME").unwrap_or_else(|| DEFAULT_RECIPIENT_NAME.to_owned()),
            email: non_blank(&lookup, "CONTACT_RECIPIENT_EMAIL").unwrap_or_else(|| DEFAULT_RECIPIENT_EMAIL.to_owned()),
        }
    }
}

/// Template parameters handed to the relay. Field names match the email
/// template's placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactEnvelope {
    pub from_name: String,
    pub from_email: String,
    pub to_name: String,
    pub to_email: String,
    pub message: String,
}

// =============================================================================
// RELAY TRAIT
// =============================================================================

/// Delivers a contact envelope through an external provider.
#[async_trait]
pub trait MessageRelay: Send + Sync {
    async fn send(&self, credentials: &RelayCredentials, envelope: &ContactEnvelope) -> Result<(), RelayError>;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
