//! Router Configuration

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::{handlers, state::AppState};

/// Creates the router: the slug page, its form target and a health check.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/health", get(handlers::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
