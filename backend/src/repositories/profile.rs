//! Health profile repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Health profile record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HealthProfileRecord {
    pub user_id: Uuid,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub height_cm: Option<Decimal>,
    pub weight_kg: Option<Decimal>,
    pub smoking: Option<String>,
    pub physical_activity: Option<String>,
    pub alcohol: Option<String>,
    pub sleep_hours: Option<Decimal>,
    pub stress_level: Option<i32>,
    pub medical_conditions: Vec<String>,
    pub family_history: Vec<String>,
    pub mental_health_score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating or updating a health profile
///
/// `None` fields are left untouched on update.
#[derive(Debug, Clone, Default)]
pub struct UpsertHealthProfile {
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub smoking: Option<String>,
    pub physical_activity: Option<String>,
    pub alcohol: Option<String>,
    pub sleep_hours: Option<f64>,
    pub stress_level: Option<i32>,
    pub medical_conditions: Option<Vec<String>>,
    pub family_history: Option<Vec<String>>,
    pub mental_health_score: Option<i32>,
}

/// Health profile repository for database operations
pub struct ProfileRepository;

impl ProfileRepository {
    /// Get a user's health profile
    pub async fn get(pool: &PgPool, user_id: Uuid) -> Result<Option<HealthProfileRecord>> {
        let record = sqlx::query_as::<_, HealthProfileRecord>(
            r#"
            SELECT user_id, age, gender, height_cm, weight_kg, smoking,
                   physical_activity, alcohol, sleep_hours, stress_level,
                   medical_conditions, family_history, mental_health_score,
                   created_at, updated_at
            FROM health_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Create or partially update a user's health profile
    pub async fn upsert(
        pool: &PgPool,
        user_id: Uuid,
        input: UpsertHealthProfile,
    ) -> Result<HealthProfileRecord> {
        let record = sqlx::query_as::<_, HealthProfileRecord>(
            r#"
            INSERT INTO health_profiles (
                user_id, age, gender, height_cm, weight_kg, smoking,
                physical_activity, alcohol, sleep_hours, stress_level,
                medical_conditions, family_history, mental_health_score
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    COALESCE($11, '{}'), COALESCE($12, '{}'), $13)
            ON CONFLICT (user_id) DO UPDATE SET
                age = COALESCE($2, health_profiles.age),
                gender = COALESCE($3, health_profiles.gender),
                height_cm = COALESCE($4, health_profiles.height_cm),
                weight_kg = COALESCE($5, health_profiles.weight_kg),
                smoking = COALESCE($6, health_profiles.smoking),
                physical_activity = COALESCE($7, health_profiles.physical_activity),
                alcohol = COALESCE($8, health_profiles.alcohol),
                sleep_hours = COALESCE($9, health_profiles.sleep_hours),
                stress_level = COALESCE($10, health_profiles.stress_level),
                medical_conditions = COALESCE($11, health_profiles.medical_conditions),
                family_history = COALESCE($12, health_profiles.family_history),
                mental_health_score = COALESCE($13, health_profiles.mental_health_score),
                updated_at = NOW()
            RETURNING user_id, age, gender, height_cm, weight_kg, smoking,
                      physical_activity, alcohol, sleep_hours, stress_level,
                      medical_conditions, family_history, mental_health_score,
                      created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(input.age)
        .bind(input.gender)
        .bind(input.height_cm.map(Decimal::try_from).transpose()?)
        .bind(input.weight_kg.map(Decimal::try_from).transpose()?)
        .bind(input.smoking)
        .bind(input.physical_activity)
        .bind(input.alcohol)
        .bind(input.sleep_hours.map(Decimal::try_from).transpose()?)
        .bind(input.stress_level)
        .bind(input.medical_conditions)
        .bind(input.family_history)
        .bind(input.mental_health_score)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }
}
