//! TrustLoop install guide service.
//!
//! Serves per-widget installation pages and a JSON API over a widget
//! catalog loaded at startup. Every snippet is produced on request by
//! [`trustloop_embed::WidgetCodeGenerator`]; nothing is cached or persisted.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, GuideConfig};
pub use error::AppError;
pub use state::{AppState, CatalogLoadError, load_catalog};

/// Build the application router.
///
/// Sentry layers are added by the binary so tests can drive the router
/// without a client.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
