//! Order API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared::error::ApiError;
use shared::models::{Order, OrderStatus};
use shared::request::{OrderAppend, OrderCreate, StatusUpdate};
use shared::response::{OrderDetailResponse, OrderResponse, OrderTotalsResponse};
use validator::Validate;

use crate::common::AppResult;
use crate::core::ServerState;

/// Query params for the admin endpoints
#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    pub admin_key: Option<String>,
    /// Optional status filter for listing: pending | completed | cancelled
    pub status: Option<String>,
}

/// Gate for admin endpoints, compared against the key injected into the
/// config at startup
fn require_admin(state: &ServerState, supplied: Option<&str>) -> Result<(), ApiError> {
    match supplied {
        Some(key) if key == state.config.admin_key => Ok(()),
        _ => {
            tracing::warn!("Rejected admin request with missing or invalid key");
            Err(ApiError::Unauthorized)
        }
    }
}

fn parse_status(raw: &str) -> Result<OrderStatus, ApiError> {
    raw.parse().map_err(ApiError::validation)
}

fn to_detail(order: Order) -> OrderDetailResponse {
    OrderDetailResponse {
        order_id: order.id,
        status: order.status,
        restaurant_slug: order.restaurant_slug,
        table_id: order.table_id,
        subtotal: order.subtotal,
        tax: order.tax,
        total_amount: order.total_amount,
        payment_method: order.payment_method,
        created_at: order.created_at,
        items: order.items,
    }
}

/// POST /api/orders - create a pending order from a valid session
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<OrderResponse>)> {
    payload.validate()?;

    let order = state.orders.create_order(&payload)?;
    Ok((
        StatusCode::CREATED,
        Json(OrderResponse {
            order_id: order.id,
            status: order.status,
            total_amount: order.total_amount,
        }),
    ))
}

/// PATCH /api/orders/{id} - append items to a pending order
pub async fn append(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(payload): Json<OrderAppend>,
) -> AppResult<Json<OrderTotalsResponse>> {
    payload.validate()?;

    let order = state.orders.append_items(id, &payload.items)?;
    Ok(Json(OrderTotalsResponse {
        order_id: order.id,
        status: order.status,
        subtotal: order.subtotal,
        tax: order.tax,
        total_amount: order.total_amount,
    }))
}

/// GET /api/orders - list all orders (admin only, optional status filter)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<AdminQuery>,
) -> AppResult<Json<Vec<OrderDetailResponse>>> {
    require_admin(&state, query.admin_key.as_deref())?;

    let filter = query.status.as_deref().map(parse_status).transpose()?;
    let orders = state.orders.list(filter);
    Ok(Json(orders.into_iter().map(to_detail).collect()))
}

/// GET /api/orders/{id} - order detail (admin only)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Query(query): Query<AdminQuery>,
) -> AppResult<Json<OrderDetailResponse>> {
    require_admin(&state, query.admin_key.as_deref())?;

    let order = state
        .orders
        .get(id)
        .ok_or_else(|| ApiError::not_found(format!("Order {id} not found")))?;
    Ok(Json(to_detail(order)))
}

/// PUT /api/orders/{id}/status - complete or cancel a pending order (admin only)
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Query(query): Query<AdminQuery>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<OrderResponse>> {
    require_admin(&state, query.admin_key.as_deref())?;

    let order = state.orders.set_status(id, payload.status)?;
    Ok(Json(OrderResponse {
        order_id: order.id,
        status: order.status,
        total_amount: order.total_amount,
    }))
}
