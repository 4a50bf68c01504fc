//! HTTP server exposing tagline generation and history.

mod error;
mod routes;

pub use error::{ApiError, GENERATION_FAILED, HISTORY_FAILED, ServerError};

use axum::Router;
use axum::routing::{get, post};
use log::info;
use tagline_rs_config::ServerConfig;
use tagline_rs_core::TaglineService;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build the application router around a service.
pub fn router(service: TaglineService) -> Router {
    Router::new()
        .route("/generate", post(routes::generate))
        .route("/tagline", post(routes::generate))
        .route("/history", get(routes::history))
        .route("/health", get(routes::health))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, service: TaglineService) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind.clone(),
            source,
        })?;
    let local_addr = listener.local_addr()?;
    info!("tagline server listening (addr={local_addr})");
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("tagline server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler, run until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
