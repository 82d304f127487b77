//! Restaurant menu API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Restaurant router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/restaurants/{slug}/menu", get(handler::menu))
}
