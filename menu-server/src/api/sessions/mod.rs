//! Guest session API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Session router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/sessions", post(handler::create))
}
