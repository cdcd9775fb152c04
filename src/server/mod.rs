//! HTTP surface: a single `POST /get_stock` route, open to any origin.

pub mod handlers;

use anyhow::{Context, Result};
use axum::{Router, routing::post};
use log::info;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::services::QuoteService;

pub fn router(service: QuoteService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/get_stock", post(handlers::get_stock))
        .layer(cors)
        .with_state(service)
}

/// Serves until Ctrl-C is received.
pub async fn serve(listener: TcpListener, service: QuoteService) -> Result<()> {
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server stopped unexpectedly")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => log::error!("Failed to listen for shutdown signal: {}", e),
    }
}
