//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the contact service and the submission rate limiter. Clone is
//! required by Axum; both fields share their internals behind `Arc`.

use crate::rate_limit::RateLimiter;
use crate::services::contact::ContactService;

#[derive(Clone)]
pub struct AppState {
    pub contact: ContactService,
    pub rate_limiter: RateLimiter,
    /// Resolve client addresses from `X-Forwarded-For`.
    pub trust_proxy_headers: bool,
}

impl AppState {
    #[must_use]
    pub fn new(contact: ContactService, rate_limiter: RateLimiter, trust_proxy_headers: bool) -> Self {
        Self { contact, rate_limiter, trust_proxy_headers }
    }
}
