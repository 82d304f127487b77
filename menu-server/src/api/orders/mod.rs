//! Order API module
//!
//! Guest-facing create/append plus the admin-gated review endpoints. All
//! mutations go through the OrderManager.

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/orders", get(handler::list).post(handler::create))
        .route("/api/orders/{id}", get(handler::get_by_id).patch(handler::append))
        .route("/api/orders/{id}/status", put(handler::set_status))
}
