mod config;
mod rate_limit;
mod relay;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::rate_limit::RateLimiter;
use crate::relay::emailjs::EmailJsRelay;
use crate::relay::{Recipient, RelayCredentials};
use crate::services::contact::ContactService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv
        && !e.not_found()
    {
        tracing::warn!(error = %e, "failed to load .env");
    }

    let config = ServerConfig::from_env()?;

    // Missing relay credentials are non-fatal: the contact endpoint answers 503.
    let credentials = RelayCredentials::from_env();
    match &credentials {
        Ok(_) => tracing::info!("contact relay configured"),
        Err(e) => tracing::warn!(error = %e, "contact relay not configured; messages will be refused"),
    }

    let relay = EmailJsRelay::new(&EmailJsRelay::api_url_from_env())?;
    tracing::debug!(url = relay.send_url(), "contact relay endpoint");
    let recipient = Recipient::from_env();
    let contact = ContactService::new(credentials, recipient, Arc::new(relay));
    let rate_limiter = RateLimiter::new();
    let limits = rate_limiter.config();
    tracing::info!(
        per_client = limits.per_client_limit,
        per_client_window_secs = limits.per_client_window.as_secs(),
        global = limits.global_limit,
        global_window_secs = limits.global_window.as_secs(),
        "contact rate limits"
    );

    let state = state::AppState::new(contact, rate_limiter, config.trust_proxy_headers);
    let app = routes::leptos_app(state, &config)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "portfolio listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}
