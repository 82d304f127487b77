//! HTTP API
//!
//! Per-resource routers merged into one application router; each resource
//! directory owns its `router()` and handlers.

pub mod health;
pub mod orders;
pub mod restaurants;
pub mod sessions;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(sessions::router())
        .merge(restaurants::router())
        .merge(orders::router())
        .merge(health::router())
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // CORS - guest devices load the menu page from anywhere
        .layer(CorsLayer::permissive())
        // Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
