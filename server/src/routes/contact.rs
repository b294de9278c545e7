//! Contact route: accepts a visitor's message and hands it to the relay.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is answered with a `ContactResponse` body. Error bodies carry
//! a short generic text; the underlying detail goes to the log only.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, FromRef, FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use client::net::types::ContactResponse;

use crate::services::contact::{ContactError, ContactRequest};
use crate::state::AppState;

pub const INVALID_TEXT: &str = "Please provide your name, a valid email address, and a message.";
pub const RATE_LIMITED_TEXT: &str = "Too many messages. Please try again later.";
pub const UNAVAILABLE_TEXT: &str = "Service is not properly configured.";
pub const DELIVERY_TEXT: &str = "Couldn't send message. Please try again.";

const FORWARDED_FOR: &str = "x-forwarded-for";

// =============================================================================
// CLIENT ADDRESS EXTRACTOR
// =============================================================================

/// Address used as the rate-limit key.
///
/// `X-Forwarded-For` is honored only when `AppState::trust_proxy_headers` is
/// set. Otherwise the peer address from `ConnectInfo` is used, falling back to
/// the unspecified address when the router was served without connect info.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientAddr(pub IpAddr);

impl<S> FromRequestParts<S> for ClientAddr
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        if app_state.trust_proxy_headers
            && let Some(ip) = forwarded_client(&parts.headers)
        {
            return Ok(Self(ip));
        }

        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED), |ConnectInfo(addr)| addr.ip());
        Ok(Self(peer))
    }
}

/// First hop of `X-Forwarded-For`, the address the proxy saw.
pub(crate) fn forwarded_client(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get(FORWARDED_FOR)?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .and_then(|first| first.trim().parse().ok())
}

// =============================================================================
// HANDLER
// =============================================================================

/// `POST /api/contact`: rate limit, validate, relay.
pub async fn submit(
    State(state): State<AppState>,
    ClientAddr(client): ClientAddr,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    if let Err(e) = state.rate_limiter.check_and_record(client) {
        tracing::warn!(%client, error = %e, "contact submission rate limited");
        return failure(StatusCode::TOO_MANY_REQUESTS, RATE_LIMITED_TEXT);
    }

    let Json(request) = match payload {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(%client, error = %e, "contact submission rejected: unreadable body");
            return failure(StatusCode::UNPROCESSABLE_ENTITY, INVALID_TEXT);
        }
    };

    match state.contact.deliver(&request).await {
        Ok(()) => (StatusCode::OK, Json(ContactResponse { ok: true, error: None })),
        Err(e) => {
            let (status, text) = status_for(&e);
            if status == StatusCode::UNPROCESSABLE_ENTITY {
                tracing::warn!(%client, error = %e, "contact submission rejected");
            } else {
                tracing::error!(%client, error = %e, "failed to send contact message");
            }
            failure(status, text)
        }
    }
}

pub(crate) fn status_for(error: &ContactError) -> (StatusCode, &'static str) {
    match error {
        ContactError::Invalid(_) => (StatusCode::UNPROCESSABLE_ENTITY, INVALID_TEXT),
        ContactError::Configuration(_) => (StatusCode::SERVICE_UNAVAILABLE, UNAVAILABLE_TEXT),
        ContactError::Delivery(_) => (StatusCode::BAD_GATEWAY, DELIVERY_TEXT),
    }
}

fn failure(status: StatusCode, text: &str) -> (StatusCode, Json<ContactResponse>) {
    (status, Json(ContactResponse { ok: false, error: Some(text.to_owned()) }))
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
