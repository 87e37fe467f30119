//! Analytics service - runs the scoring pipeline over stored data
//!
//! The pipeline itself lives in `everliv-shared` and is pure; this
//! service is the caller from the core's contract: it resolves the
//! inputs (profile + lab history, fetched concurrently) and hands back
//! the result. Nothing is cached: the computation is cheap and is
//! recomputed from scratch on every call.

use crate::error::ApiError;
use crate::services::{LabService, ProfileService};
use everliv_shared::recommend::MAX_RECOMMENDATIONS;
use everliv_shared::scoring::compute_health_score;
use everliv_shared::types::RecommendationsResponse;
use everliv_shared::EnhancedHealthScore;
use metrics::counter;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

/// Analytics service
pub struct AnalyticsService;

impl AnalyticsService {
    /// Compute the composite health score for a user
    ///
    /// Requires a stored profile; lab history is optional.
    pub async fn health_score(db: &PgPool, user_id: Uuid) -> Result<EnhancedHealthScore, ApiError> {
        let (profile, analyses) = tokio::try_join!(
            ProfileService::get_core_profile(db, user_id),
            LabService::analyses_for_scoring(db, user_id),
        )?;

        let profile =
            profile.ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

        let score = compute_health_score(&profile, &analyses);

        counter!("everliv_health_scores_computed_total").increment(1);
        debug!(
            user_id = %user_id,
            score = score.total_score,
            risk_level = score.risk_level.as_str(),
            analyses = analyses.len(),
            "health score computed"
        );

        Ok(score)
    }

    /// Ranked recommendations for a user
    ///
    /// `limit` trims the list further but never exceeds the ranker's own
    /// maximum.
    pub async fn recommendations(
        db: &PgPool,
        user_id: Uuid,
        limit: Option<usize>,
    ) -> Result<RecommendationsResponse, ApiError> {
        let score = Self::health_score(db, user_id).await?;

        let limit = limit.unwrap_or(MAX_RECOMMENDATIONS).min(MAX_RECOMMENDATIONS);
        let mut recommendations = score.recommendations;
        recommendations.truncate(limit);

        counter!("everliv_recommendations_served_total").increment(1);

        Ok(RecommendationsResponse {
            risk_level: score.risk_level,
            recommendations,
        })
    }
}
