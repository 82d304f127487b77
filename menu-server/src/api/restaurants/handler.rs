//! Restaurant menu API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::ApiError;
use shared::response::MenuResponse;

use crate::common::AppResult;
use crate::core::ServerState;

/// GET /api/restaurants/{slug}/menu - full menu with modifier lists
pub async fn menu(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<MenuResponse>> {
    let menu = state
        .catalog
        .menu(&slug)
        .ok_or_else(|| ApiError::not_found(format!("Restaurant '{slug}' not found")))?;
    Ok(Json(menu))
}
