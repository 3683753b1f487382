//! Organi.Live Storefront - public catalog, cart, and account API.
//!
//! # Architecture
//!
//! - Axum JSON API consumed by the storefront frontend
//! - Product catalog loaded from a Google Sheets gviz endpoint
//! - Contact messages appended to the sheet via an Apps Script web app
//! - Cart and mock user registry held in process memory
//!
//! There is no database and no real identity backend; state beyond the
//! catalog sheet does not survive a restart.

#![cfg_attr(not(test), forbid(unsafe_code))]

use organi_live_storefront::config::StorefrontConfig;
use organi_live_storefront::routes;
use organi_live_storefront::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "organi_live_storefront=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let addr = config.socket_addr();
    let state = AppState::new(config);

    // Warm the catalog; a failure here is recoverable (the user can reload)
    if let Err(e) = state.catalog().load().await {
        tracing::warn!(error = %e, "Initial catalog load failed, starting with empty catalog");
    }

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Storefront listening on {addr}");

    axum::serve(listener, app).await.expect("Server error");
}
