//! Prediction record persistence
//!
//! The core talks to the record store through the `PredictionStore`
//! contract: records are inserted whole, retrieved most-recent-first,
//! and never updated. Store failures propagate to the caller; the core
//! performs no retries.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::{NewPredictionRecord, PredictionRecord};

use crate::error::{AppError, AppResult};

/// Record store contract required by the prediction pipeline
pub trait PredictionStore: Send + Sync {
    /// Persist a new record; must not silently drop fields
    fn insert(
        &self,
        record: NewPredictionRecord,
    ) -> impl std::future::Future<Output = AppResult<PredictionRecord>> + Send;

    /// Most recent records first
    fn list_recent(
        &self,
        limit: i64,
    ) -> impl std::future::Future<Output = AppResult<Vec<PredictionRecord>>> + Send;

    /// Fetch one record by its opaque identifier
    fn get_by_id(
        &self,
        id: Uuid,
    ) -> impl std::future::Future<Output = AppResult<PredictionRecord>> + Send;
}

/// Postgres-backed prediction store
#[derive(Clone)]
pub struct PgPredictionStore {
    db: PgPool,
}

/// Database row; structured payloads live in JSONB columns
#[derive(Debug, FromRow)]
struct PredictionRow {
    id: Uuid,
    crop: String,
    location: String,
    soil_data: serde_json::Value,
    estimate: serde_json::Value,
    estimate_source: String,
    schedule: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl TryFrom<PredictionRow> for PredictionRecord {
    type Error = AppError;

    fn try_from(row: PredictionRow) -> Result<Self, Self::Error> {
        let decode = |what: &str, e: serde_json::Error| {
            AppError::Internal(format!("corrupt {what} in prediction {}: {e}", row.id))
        };

        Ok(PredictionRecord {
            id: row.id,
            crop: row.crop,
            location: row.location,
            soil_data: serde_json::from_value(row.soil_data)
                .map_err(|e| decode("soil data", e))?,
            estimate: serde_json::from_value(row.estimate).map_err(|e| decode("estimate", e))?,
            estimate_source: row
                .estimate_source
                .parse()
                .map_err(AppError::Internal)?,
            schedule: serde_json::from_value(row.schedule).map_err(|e| decode("schedule", e))?,
            created_at: row.created_at,
        })
    }
}

impl PgPredictionStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

impl PredictionStore for PgPredictionStore {
    async fn insert(&self, record: NewPredictionRecord) -> AppResult<PredictionRecord> {
        let soil_data = serde_json::to_value(&record.soil_data)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let estimate = serde_json::to_value(&record.estimate)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let schedule = serde_json::to_value(&record.schedule)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let row = sqlx::query_as::<_, PredictionRow>(
            r#"
            INSERT INTO predictions (crop, location, soil_data, estimate, estimate_source, schedule)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, crop, location, soil_data, estimate, estimate_source, schedule, created_at
            "#,
        )
        .bind(&record.crop)
        .bind(&record.location)
        .bind(&soil_data)
        .bind(&estimate)
        .bind(record.estimate_source.as_str())
        .bind(&schedule)
        .fetch_one(&self.db)
        .await?;

        row.try_into()
    }

    async fn list_recent(&self, limit: i64) -> AppResult<Vec<PredictionRecord>> {
        let rows = sqlx::query_as::<_, PredictionRow>(
            r#"
            SELECT id, crop, location, soil_data, estimate, estimate_source, schedule, created_at
            FROM predictions
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(PredictionRecord::try_from).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<PredictionRecord> {
        let row = sqlx::query_as::<_, PredictionRow>(
            r#"
            SELECT id, crop, location, soil_data, estimate, estimate_source, schedule, created_at
            FROM predictions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Prediction record".to_string()))?;

        row.try_into()
    }
}
