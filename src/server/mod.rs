//! HTTP server for notegen
//!
//! Exposes the note service as a single POST endpoint plus a health probe.

pub mod error;
pub mod handlers;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{ServerSettings, Settings};
use crate::note::NoteService;

pub use error::ApiError;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<NoteService>,
}

impl AppState {
    pub fn new(service: NoteService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// CORS headers for browser forms served from another origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::POST, Method::OPTIONS])
}

/// Build the application router.
///
/// CORS handling is attached to the note route only. `CorsLayer` answers
/// every OPTIONS request it sees, so `/health` and unknown paths keep their
/// plain 405/404 answers.
pub fn router(state: AppState, settings: &ServerSettings) -> Router {
    let mut note_route = post(handlers::generate_note).fallback(handlers::method_not_allowed);
    if settings.cors {
        note_route = note_route
            .layer::<_, Infallible>(cors_layer())
            .layer::<_, Infallible>(SetResponseHeaderLayer::if_not_present(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("content-type"),
            ))
            .layer::<_, Infallible>(SetResponseHeaderLayer::if_not_present(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("POST,OPTIONS"),
            ));
    }

    Router::new()
        .route(&settings.route, note_route)
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(settings: &Settings, service: NoteService) -> Result<()> {
    settings.validate()?;
    let addr = settings.bind_addr()?;

    let provider = service.provider_name();
    let app = router(AppState::new(service), &settings.server);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        provider,
        cors = settings.server.cors,
        "Listening on http://{}{}",
        listener.local_addr()?,
        settings.server.route
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
