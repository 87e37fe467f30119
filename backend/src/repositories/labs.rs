//! Lab analysis repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Lab analysis record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LabAnalysisRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub performed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Lab marker record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LabMarkerRecord {
    pub id: Uuid,
    pub analysis_id: Uuid,
    pub name: String,
    pub value: String,
    pub numeric_value: Option<Decimal>,
    pub unit: Option<String>,
    pub status: Option<String>,
}

/// Input for storing one marker line
#[derive(Debug, Clone)]
pub struct CreateLabMarker {
    pub name: String,
    pub value: String,
    pub numeric_value: Option<f64>,
    pub unit: Option<String>,
    pub status: Option<String>,
}

/// Lab analysis repository for database operations
pub struct LabRepository;

impl LabRepository {
    /// Store one analysis with its markers in a single transaction
    pub async fn create_analysis(
        pool: &PgPool,
        user_id: Uuid,
        performed_at: DateTime<Utc>,
        markers: Vec<CreateLabMarker>,
    ) -> Result<(LabAnalysisRecord, Vec<LabMarkerRecord>)> {
        let mut tx = pool.begin().await?;

        let analysis = sqlx::query_as::<_, LabAnalysisRecord>(
            r#"
            INSERT INTO lab_analyses (user_id, performed_at)
            VALUES ($1, $2)
            RETURNING id, user_id, performed_at, created_at
            "#,
        )
        .bind(user_id)
        .bind(performed_at)
        .fetch_one(&mut *tx)
        .await?;

        let mut stored = Vec::with_capacity(markers.len());
        for marker in markers {
            let record = sqlx::query_as::<_, LabMarkerRecord>(
                r#"
                INSERT INTO lab_markers (analysis_id, name, value, numeric_value, unit, status)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, analysis_id, name, value, numeric_value, unit, status
                "#,
            )
            .bind(analysis.id)
            .bind(marker.name)
            .bind(marker.value)
            .bind(marker.numeric_value.map(Decimal::try_from).transpose()?)
            .bind(marker.unit)
            .bind(marker.status)
            .fetch_one(&mut *tx)
            .await?;
            stored.push(record);
        }

        tx.commit().await?;

        Ok((analysis, stored))
    }

    /// List a user's analyses, most recent first
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<LabAnalysisRecord>> {
        let records = sqlx::query_as::<_, LabAnalysisRecord>(
            r#"
            SELECT id, user_id, performed_at, created_at
            FROM lab_analyses
            WHERE user_id = $1
            ORDER BY performed_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Markers for one analysis
    pub async fn markers_for_analysis(
        pool: &PgPool,
        analysis_id: Uuid,
    ) -> Result<Vec<LabMarkerRecord>> {
        let records = sqlx::query_as::<_, LabMarkerRecord>(
            r#"
            SELECT id, analysis_id, name, value, numeric_value, unit, status
            FROM lab_markers
            WHERE analysis_id = $1
            ORDER BY name
            "#,
        )
        .bind(analysis_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// All markers across a user's analyses, newest analysis first
    ///
    /// Used for scoring and trend computation; the join keeps marker rows
    /// paired with their analysis timestamp.
    pub async fn markers_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<UserMarkerRow>> {
        let records = sqlx::query_as::<_, UserMarkerRow>(
            r#"
            SELECT m.analysis_id, m.name, m.value, m.unit, m.status, a.performed_at
            FROM lab_markers m
            JOIN lab_analyses a ON a.id = m.analysis_id
            WHERE a.user_id = $1
            ORDER BY a.performed_at DESC, m.name
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

/// One marker row joined with its analysis timestamp
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserMarkerRow {
    pub analysis_id: Uuid,
    pub name: String,
    pub value: String,
    pub unit: Option<String>,
    pub status: Option<String>,
    pub performed_at: DateTime<Utc>,
}
