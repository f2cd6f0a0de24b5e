//! HTTP handlers for crop prediction endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use shared::{
    EnvironmentEstimate, EstimateSource, ListQuery, PredictionRecord, SchedulePhase, SoilSample,
};

use crate::error::AppResult;
use crate::external::WeatherClient;
use crate::ml::PredictionEngine;
use crate::services::prediction::{PredictionRequest, PredictionService};
use crate::services::record::PgPredictionStore;
use crate::AppState;

/// Response body for a completed prediction
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub status: &'static str,
    pub id: Uuid,
    pub crop: String,
    pub location: String,
    pub soil_data: SoilSample,
    pub estimate: EnvironmentEstimate,
    pub estimate_source: EstimateSource,
    pub schedule: Vec<SchedulePhase>,
    pub timestamp: DateTime<Utc>,
}

impl From<PredictionRecord> for PredictionResponse {
    fn from(record: PredictionRecord) -> Self {
        Self {
            status: "success",
            id: record.id,
            crop: record.crop,
            location: record.location,
            soil_data: record.soil_data,
            estimate: record.estimate,
            estimate_source: record.estimate_source,
            schedule: record.schedule,
            timestamp: record.created_at,
        }
    }
}

/// Build the prediction service from shared application state
fn prediction_service(state: &AppState) -> PredictionService<PgPredictionStore> {
    let engine = state.model.clone().map(PredictionEngine::new);
    let weather = weather_client(state);
    PredictionService::new(PgPredictionStore::new(state.db.clone()), engine, weather)
}

/// Weather client, if an API key is configured
fn weather_client(state: &AppState) -> Option<WeatherClient> {
    let cfg = &state.config.weather;
    if cfg.api_key.is_empty() {
        return None;
    }
    Some(WeatherClient::new(
        cfg.api_key.clone(),
        cfg.api_endpoint.clone(),
    ))
}

/// Run the prediction pipeline and persist the outcome
pub async fn predict_crop(
    State(state): State<AppState>,
    Json(input): Json<PredictionRequest>,
) -> AppResult<Json<PredictionResponse>> {
    let service = prediction_service(&state);
    let record = service.predict(input).await?;
    Ok(Json(record.into()))
}

/// List recent prediction records, most recent first
pub async fn list_predictions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<PredictionResponse>>> {
    let service = prediction_service(&state);
    let records = service.recent(query.limit_or_default()).await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Get a single prediction record by ID
pub async fn get_prediction(
    State(state): State<AppState>,
    Path(prediction_id): Path<Uuid>,
) -> AppResult<Json<PredictionResponse>> {
    let service = prediction_service(&state);
    let record = service.get(prediction_id).await?;
    Ok(Json(record.into()))
}
