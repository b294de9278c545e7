//! EmailJS REST relay.
//!
//! Posts template parameters to `{api_url}/api/v1.0/email/send`. EmailJS
//! answers `200 OK` on acceptance and a plain-text reason otherwise.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::{ContactEnvelope, MessageRelay, RelayCredentials, RelayError};

pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com";
pub const SEND_PATH: &str = "/api/v1.0/email/send";
const REQUEST_TIMEOUT_SECS: u64 = 15;
const CONNECT_TIMEOUT_SECS: u64 = 5;
/// Longest rejection body kept for logs.
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a ContactEnvelope,
}

impl<'a> SendRequest<'a> {
    fn new(credentials: &'a RelayCredentials, envelope: &'a ContactEnvelope) -> Self {
        Self {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            access_token: credentials.private_key.as_deref(),
            template_params: envelope,
        }
    }
}

pub struct EmailJsRelay {
    http: reqwest::Client,
    send_url: String,
}

impl EmailJsRelay {
    /// Build a relay against `api_url` (scheme + host, no trailing path).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_url: &str) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| RelayError::HttpClientBuild(e.to_string()))?;
        let send_url = format!("{}{SEND_PATH}", api_url.trim_end_matches('/'));
        Ok(Self { http, send_url })
    }

    /// `EMAILJS_API_URL`, or the public EmailJS endpoint.
    #[must_use]
    pub fn api_url_from_env() -> String {
        std::env::var("EMAILJS_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EMAILJS_API_URL.to_owned())
    }

    #[must_use]
    pub fn send_url(&self) -> &str {
        &self.send_url
    }
}

#[async_trait]
impl MessageRelay for EmailJsRelay {
    async fn send(&self, credentials: &RelayCredentials, envelope: &ContactEnvelope) -> Result<(), RelayError> {
        let body = SendRequest::new(credentials, envelope);
        let resp = self
            .http
            .post(&self.send_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Request(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let text = resp.text().await.unwrap_or_default();
        Err(RelayError::Rejected { status: status.as_u16(), body: text.chars().take(MAX_ERROR_BODY_CHARS).collect() })
    }
}

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod tests;
