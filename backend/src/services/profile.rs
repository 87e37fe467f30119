//! Profile service - health profile CRUD and conversion to core types

use crate::error::ApiError;
use crate::repositories::{HealthProfileRecord, ProfileRepository, UpsertHealthProfile};
use everliv_shared::profile::HealthProfile;
use everliv_shared::types::{ProfileResponse, UpdateProfileRequest};
use everliv_shared::validation::{
    validate_age, validate_height_cm, validate_mental_health_score, validate_sleep_hours,
    validate_stress_level, validate_weight_kg,
};
use rust_decimal::prelude::ToPrimitive;
use sqlx::PgPool;
use uuid::Uuid;

/// Profile service
pub struct ProfileService;

impl ProfileService {
    /// Get a user's profile
    pub async fn get_profile(db: &PgPool, user_id: Uuid) -> Result<ProfileResponse, ApiError> {
        let record = ProfileRepository::get(db, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

        Ok(Self::record_to_response(record))
    }

    /// Create or partially update a user's profile
    pub async fn update_profile(
        db: &PgPool,
        user_id: Uuid,
        req: UpdateProfileRequest,
    ) -> Result<ProfileResponse, ApiError> {
        Self::validate_request(&req).map_err(ApiError::Validation)?;

        let input = UpsertHealthProfile {
            age: req.age,
            gender: req.gender,
            height_cm: req.height_cm,
            weight_kg: req.weight_kg,
            smoking: req.smoking,
            physical_activity: req.physical_activity,
            alcohol: req.alcohol,
            sleep_hours: req.sleep_hours,
            stress_level: req.stress_level,
            medical_conditions: req.medical_conditions,
            family_history: req.family_history,
            mental_health_score: req.mental_health_score,
        };

        let record = ProfileRepository::upsert(db, user_id, input)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Self::record_to_response(record))
    }

    /// Fetch a user's profile as the scoring core's input type
    ///
    /// Enum strings are parsed leniently: unrecognized values become
    /// `None` and contribute nothing to the score.
    pub async fn get_core_profile(db: &PgPool, user_id: Uuid) -> Result<Option<HealthProfile>, ApiError> {
        let record = ProfileRepository::get(db, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(record.map(Self::record_to_core))
    }

    fn validate_request(req: &UpdateProfileRequest) -> Result<(), String> {
        if let Some(age) = req.age {
            validate_age(age)?;
        }
        if let Some(height) = req.height_cm {
            validate_height_cm(height)?;
        }
        if let Some(weight) = req.weight_kg {
            validate_weight_kg(weight)?;
        }
        if let Some(sleep) = req.sleep_hours {
            validate_sleep_hours(sleep)?;
        }
        if let Some(stress) = req.stress_level {
            validate_stress_level(stress)?;
        }
        if let Some(mental) = req.mental_health_score {
            validate_mental_health_score(mental)?;
        }
        Ok(())
    }

    pub(crate) fn record_to_core(record: HealthProfileRecord) -> HealthProfile {
        HealthProfile {
            age: record.age,
            gender: record.gender.as_deref().and_then(|s| s.parse().ok()),
            height_cm: record.height_cm.and_then(|d| d.to_f64()),
            weight_kg: record.weight_kg.and_then(|d| d.to_f64()),
            smoking: record.smoking.as_deref().and_then(|s| s.parse().ok()),
            physical_activity: record
                .physical_activity
                .as_deref()
                .and_then(|s| s.parse().ok()),
            alcohol: record.alcohol.as_deref().and_then(|s| s.parse().ok()),
            sleep_hours: record.sleep_hours.and_then(|d| d.to_f64()),
            stress_level: record.stress_level,
            medical_conditions: record.medical_conditions,
            family_history: record.family_history,
            mental_health_score: record.mental_health_score,
        }
    }

    fn record_to_response(record: HealthProfileRecord) -> ProfileResponse {
        let core = Self::record_to_core(record.clone());
        let bmi = core.bmi().map(|b| (b * 10.0).round() / 10.0);

        ProfileResponse {
            user_id: record.user_id.to_string(),
            age: record.age,
            gender: record.gender,
            height_cm: record.height_cm.and_then(|d| d.to_f64()),
            weight_kg: record.weight_kg.and_then(|d| d.to_f64()),
            bmi,
            smoking: record.smoking,
            physical_activity: record.physical_activity,
            alcohol: record.alcohol,
            sleep_hours: record.sleep_hours.and_then(|d| d.to_f64()),
            stress_level: record.stress_level,
            medical_conditions: record.medical_conditions,
            family_history: record.family_history,
            mental_health_score: record.mental_health_score,
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use everliv_shared::profile::{PhysicalActivity, SmokingStatus};
    use rust_decimal::Decimal;

    fn record() -> HealthProfileRecord {
        HealthProfileRecord {
            user_id: Uuid::new_v4(),
            age: Some(42),
            gender: Some("male".to_string()),
            height_cm: Some(Decimal::new(1800, 1)),
            weight_kg: Some(Decimal::new(810, 1)),
            smoking: Some("never".to_string()),
            physical_activity: Some("active".to_string()),
            alcohol: Some("что-то странное".to_string()),
            sleep_hours: Some(Decimal::new(75, 1)),
            stress_level: Some(4),
            medical_conditions: vec!["гипертония".to_string()],
            family_history: vec![],
            mental_health_score: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_record_to_core_parses_enums_leniently() {
        let core = ProfileService::record_to_core(record());
        assert_eq!(core.smoking, Some(SmokingStatus::Never));
        assert_eq!(core.physical_activity, Some(PhysicalActivity::Active));
        // Unrecognized stored value degrades to None, not an error
        assert_eq!(core.alcohol, None);
        assert_eq!(core.height_cm, Some(180.0));
        assert_eq!(core.sleep_hours, Some(7.5));
    }

    #[test]
    fn test_validate_request_rejects_out_of_range() {
        let req = UpdateProfileRequest {
            age: Some(300),
            ..Default::default()
        };
        assert!(ProfileService::validate_request(&req).is_err());

        let ok = UpdateProfileRequest {
            age: Some(30),
            sleep_hours: Some(8.0),
            ..Default::default()
        };
        assert!(ProfileService::validate_request(&ok).is_ok());
    }
}
