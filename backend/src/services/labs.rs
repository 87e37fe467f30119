//! Lab analysis service - ingestion, listing and biomarker trends

use crate::error::ApiError;
use crate::repositories::{CreateLabMarker, LabRepository, UserMarkerRow};
use everliv_shared::labs::{build_histories, parse_marker_value, LabAnalysis, LabMarker};
use everliv_shared::types::{
    LabAnalysisResponse, LabMarkerResponse, MarkerTrendResponse, ObservationPoint,
    SubmitLabRequest,
};
use everliv_shared::validation::validate_marker_name;
use everliv_shared::weights::match_marker;
use rust_decimal::prelude::ToPrimitive;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

/// Default number of recent analyses fed into scoring
pub const SCORING_ANALYSES_LIMIT: i64 = 10;

/// Lab analysis service
pub struct LabService;

impl LabService {
    /// Store one lab analysis
    ///
    /// Marker names are validated; values are kept as raw text. Values
    /// that do not parse as numbers are stored anyway (the report may
    /// contain qualitative results) but logged, since they will be
    /// invisible to scoring.
    pub async fn submit(
        db: &PgPool,
        user_id: Uuid,
        req: SubmitLabRequest,
    ) -> Result<LabAnalysisResponse, ApiError> {
        if req.markers.is_empty() {
            return Err(ApiError::Validation(
                "Analysis must contain at least one marker".to_string(),
            ));
        }

        let mut markers = Vec::with_capacity(req.markers.len());
        for marker in req.markers {
            validate_marker_name(&marker.name).map_err(ApiError::Validation)?;

            let numeric_value = parse_marker_value(&marker.value);
            if numeric_value.is_none() {
                warn!(
                    marker = %marker.name,
                    value = %marker.value,
                    "non-numeric marker value; excluded from scoring"
                );
            }

            markers.push(CreateLabMarker {
                name: marker.name,
                value: marker.value,
                numeric_value,
                unit: marker.unit,
                status: marker.status,
            });
        }

        let (analysis, stored) = LabRepository::create_analysis(db, user_id, req.performed_at, markers)
            .await
            .map_err(ApiError::Internal)?;

        Ok(LabAnalysisResponse {
            id: analysis.id.to_string(),
            performed_at: analysis.performed_at,
            markers: stored.into_iter().map(Self::marker_to_response).collect(),
        })
    }

    /// List a user's analyses with markers, most recent first
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<LabAnalysisResponse>, ApiError> {
        let analyses = LabRepository::list_by_user(db, user_id, limit)
            .await
            .map_err(ApiError::Internal)?;

        let mut responses = Vec::with_capacity(analyses.len());
        for analysis in analyses {
            let markers = LabRepository::markers_for_analysis(db, analysis.id)
                .await
                .map_err(ApiError::Internal)?;
            responses.push(LabAnalysisResponse {
                id: analysis.id.to_string(),
                performed_at: analysis.performed_at,
                markers: markers.into_iter().map(Self::marker_to_response).collect(),
            });
        }

        Ok(responses)
    }

    /// Fetch a user's recent analyses as the scoring core's input type
    pub async fn analyses_for_scoring(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<LabAnalysis>, ApiError> {
        let rows = LabRepository::markers_for_user(db, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Self::group_rows(rows, SCORING_ANALYSES_LIMIT as usize))
    }

    /// Trend for one biomarker across a user's analyses
    ///
    /// The marker name goes through the same fuzzy matching as scoring,
    /// so "холестерин" and "Общий холестерин" resolve to the same series.
    pub async fn marker_trend(
        db: &PgPool,
        user_id: Uuid,
        marker_name: &str,
    ) -> Result<MarkerTrendResponse, ApiError> {
        let spec = match_marker(marker_name).ok_or_else(|| {
            ApiError::NotFound(format!("Marker '{}' is not tracked", marker_name))
        })?;

        let rows = LabRepository::markers_for_user(db, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let analyses = Self::group_rows(rows, usize::MAX);

        let histories = build_histories(&analyses);
        let history = histories.iter().find(|h| h.spec.key == spec.key);

        let (trend, observations) = match history {
            Some(history) => (
                history.trend(),
                history
                    .observations()
                    .iter()
                    .map(|o| ObservationPoint {
                        value: o.value,
                        observed_at: o.observed_at,
                    })
                    .collect(),
            ),
            None => (None, Vec::new()),
        };

        Ok(MarkerTrendResponse {
            marker: spec.key.to_string(),
            label: spec.label.to_string(),
            trend,
            observations,
        })
    }

    /// Group joined marker rows back into per-analysis core inputs
    ///
    /// Rows arrive ordered by `performed_at` descending; grouping keeps
    /// that order and stops after `limit` distinct analyses.
    fn group_rows(rows: Vec<UserMarkerRow>, limit: usize) -> Vec<LabAnalysis> {
        let mut analyses: Vec<(Uuid, LabAnalysis)> = Vec::new();

        for row in rows {
            let marker = LabMarker {
                name: row.name,
                value: row.value,
                unit: row.unit,
                status: row.status,
            };
            match analyses.iter_mut().find(|(id, _)| *id == row.analysis_id) {
                Some((_, analysis)) => analysis.markers.push(marker),
                None => {
                    if analyses.len() >= limit {
                        continue;
                    }
                    analyses.push((
                        row.analysis_id,
                        LabAnalysis {
                            performed_at: row.performed_at,
                            markers: vec![marker],
                        },
                    ));
                }
            }
        }

        analyses.into_iter().map(|(_, a)| a).collect()
    }

    fn marker_to_response(record: crate::repositories::LabMarkerRecord) -> LabMarkerResponse {
        LabMarkerResponse {
            name: record.name,
            value: record.value,
            numeric_value: record.numeric_value.and_then(|d| d.to_f64()),
            unit: record.unit,
            status: record.status,
        }
    }
}
