//! Lab analysis API routes

use crate::error::ApiError;
use crate::services::LabService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use everliv_shared::types::{LabAnalysisResponse, MarkerTrendResponse, SubmitLabRequest};
use serde::Deserialize;
use uuid::Uuid;

/// Query parameters for listing analyses
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    20
}

/// Create lab routes
pub fn lab_routes() -> Router<AppState> {
    Router::new()
        .route("/:user_id", get(list_analyses).post(submit_analysis))
        .route("/:user_id/markers/:name/trend", get(marker_trend))
}

/// POST /api/v1/labs/:user_id - Submit one lab analysis
async fn submit_analysis(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<SubmitLabRequest>,
) -> Result<Json<LabAnalysisResponse>, ApiError> {
    let analysis = LabService::submit(state.db(), user_id, req).await?;
    Ok(Json(analysis))
}

/// GET /api/v1/labs/:user_id - List a user's analyses
async fn list_analyses(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<LabAnalysisResponse>>, ApiError> {
    let limit = query.limit.clamp(1, 100);
    let analyses = LabService::list(state.db(), user_id, limit).await?;
    Ok(Json(analyses))
}

/// GET /api/v1/labs/:user_id/markers/:name/trend - Trend for one biomarker
async fn marker_trend(
    State(state): State<AppState>,
    Path((user_id, name)): Path<(Uuid, String)>,
) -> Result<Json<MarkerTrendResponse>, ApiError> {
    let trend = LabService::marker_trend(state.db(), user_id, &name).await?;
    Ok(Json(trend))
}
