//! Health analytics API routes

use crate::error::ApiError;
use crate::services::AnalyticsService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use everliv_shared::types::{RecommendationsQuery, RecommendationsResponse};
use everliv_shared::EnhancedHealthScore;
use uuid::Uuid;

/// Create analytics routes
pub fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/:user_id/score", get(health_score))
        .route("/:user_id/recommendations", get(recommendations))
}

/// GET /api/v1/analytics/:user_id/score - Composite health score
///
/// Computed fresh on every call from the stored profile and recent lab
/// analyses; nothing is cached server-side.
async fn health_score(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<EnhancedHealthScore>, ApiError> {
    let score = AnalyticsService::health_score(state.db(), user_id).await?;
    Ok(Json(score))
}

/// GET /api/v1/analytics/:user_id/recommendations - Ranked recommendations
async fn recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<RecommendationsQuery>,
) -> Result<Json<RecommendationsResponse>, ApiError> {
    let response = AnalyticsService::recommendations(state.db(), user_id, query.limit).await?;
    Ok(Json(response))
}
