//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::labs::TrendDirection;
use crate::recommend::Recommendation;
use crate::scoring::RiskLevel;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Profile Types
// ============================================================================

/// Profile update request
///
/// Enum-typed fields arrive as strings and are parsed leniently on the
/// server: an unrecognized value is stored as-is and simply has no
/// scoring effect.
#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 130))]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 50.0, max = 300.0))]
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 20.0, max = 500.0))]
    pub weight_kg: Option<f64>,
    /// Smoking status (never, occasional, regular)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking: Option<String>,
    /// Activity level (sedentary, moderate, active, very_active)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_activity: Option<String>,
    /// Alcohol use (none, moderate, heavy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alcohol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 24.0))]
    pub sleep_hours: Option<f64>,
    /// Stress level, 0-10
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 10))]
    pub stress_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_conditions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_history: Option<Vec<String>>,
    /// Mental wellbeing score, 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 100))]
    pub mental_health_score: Option<i32>,
}

/// Profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Derived from height and weight when both are present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alcohol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<i32>,
    pub medical_conditions: Vec<String>,
    pub family_history: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mental_health_score: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Lab Analysis Types
// ============================================================================

/// One marker line in a lab submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabMarkerInput {
    pub name: String,
    /// Raw value as printed on the report
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Lab analysis submission request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitLabRequest {
    #[serde(default = "Utc::now")]
    pub performed_at: DateTime<Utc>,
    #[validate(length(min = 1, message = "analysis must contain at least one marker"))]
    pub markers: Vec<LabMarkerInput>,
}

/// Lab analysis response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabAnalysisResponse {
    pub id: String,
    pub performed_at: DateTime<Utc>,
    pub markers: Vec<LabMarkerResponse>,
}

/// One stored marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabMarkerResponse {
    pub name: String,
    pub value: String,
    /// Parsed numeric value; absent when the raw value was non-numeric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// One dated observation in a trend response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationPoint {
    pub value: f64,
    pub observed_at: DateTime<Utc>,
}

/// Biomarker trend response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerTrendResponse {
    /// Canonical marker key, e.g. "glucose"
    pub marker: String,
    /// Display label, e.g. "Глюкоза"
    pub label: String,
    /// Absent when fewer than two observations exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendDirection>,
    /// Observations, most recent first
    pub observations: Vec<ObservationPoint>,
}

// ============================================================================
// Analytics Types
// ============================================================================

/// Query parameter for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecommendationsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// Ranked recommendations response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub risk_level: RiskLevel,
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::Priority;

    #[test]
    fn test_risk_level_serializes_to_russian_label() {
        assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"низкий\"");
        assert_eq!(
            serde_json::to_string(&RiskLevel::Critical).unwrap(),
            "\"критический\""
        );
        let parsed: RiskLevel = serde_json::from_str("\"высокий\"").unwrap();
        assert_eq!(parsed, RiskLevel::High);
    }

    #[test]
    fn test_priority_serializes_to_russian_label() {
        assert_eq!(
            serde_json::to_string(&Priority::High).unwrap(),
            "\"высокий\""
        );
    }

    #[test]
    fn test_update_profile_request_validation() {
        let ok = UpdateProfileRequest {
            age: Some(30),
            sleep_hours: Some(7.5),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let bad = UpdateProfileRequest {
            age: Some(200),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_submit_lab_request_defaults_timestamp() {
        let req: SubmitLabRequest =
            serde_json::from_str(r#"{"markers":[{"name":"Глюкоза","value":"5,2"}]}"#).unwrap();
        assert_eq!(req.markers.len(), 1);
        assert_eq!(req.markers[0].value, "5,2");
    }
}
