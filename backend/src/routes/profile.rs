//! Health profile API routes

use crate::error::ApiError;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use everliv_shared::types::{ProfileResponse, UpdateProfileRequest};
use uuid::Uuid;

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/:user_id", get(get_profile).put(update_profile))
}

/// GET /api/v1/profile/:user_id - Get a user's health profile
async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = ProfileService::get_profile(state.db(), user_id).await?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile/:user_id - Create or update a health profile
async fn update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = ProfileService::update_profile(state.db(), user_id, req).await?;
    Ok(Json(profile))
}
