//! Guest session API handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::error::ApiError;
use shared::request::SessionCreate;
use shared::response::SessionResponse;
use validator::Validate;

use crate::common::AppResult;
use crate::core::ServerState;

/// POST /api/sessions - open (or resume) a session for a restaurant table
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SessionCreate>,
) -> AppResult<(StatusCode, Json<SessionResponse>)> {
    payload.validate()?;

    if state.catalog.restaurant(&payload.restaurant_slug).is_none() {
        return Err(ApiError::not_found(format!(
            "Restaurant '{}' not found",
            payload.restaurant_slug
        )));
    }

    let session = state
        .sessions
        .create(&payload.restaurant_slug, &payload.table_id);

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id: session.session_id,
            expires_at: session.expires_at,
        }),
    ))
}
