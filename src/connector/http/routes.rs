//! Router configuration for the web server.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check for container orchestration
        .route("/health", get(handlers::health))
        // Browser UI
        .route("/", get(handlers::index))
        .route("/api/verify-news", post(handlers::verify_news))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
