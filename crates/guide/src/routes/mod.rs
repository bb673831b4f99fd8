//! HTTP route handlers for the installation guide.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Health check
//!
//! # Pages
//! GET  /                                - Widget list with catalog totals
//! GET  /widgets/{id}                    - Install page: placement, steps, snippet tabs
//!
//! # JSON API
//! GET  /api/widgets                     - Widgets with performance figures
//! GET  /api/widgets/{id}/guide          - Full install guide bundle
//! GET  /api/widgets/{id}/artifact       - Snippet, steps and stylesheet
//!                                         (?format=liquid|html|react)
//! ```

pub mod api;
pub mod widgets;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the page and API routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(widgets::index))
        .route("/widgets/{id}", get(widgets::show))
        .nest("/api", api_routes())
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/widgets", get(api::list))
        .route("/widgets/{id}/guide", get(api::guide))
        .route("/widgets/{id}/artifact", get(api::artifact))
}
