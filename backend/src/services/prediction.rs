//! Prediction pipeline orchestration
//!
//! One request flows through: soil validation → estimate resolution
//! (model, caller-provided, or observed weather) → suitability
//! evaluation → schedule generation → record insertion. Validation and
//! model-availability failures abort immediately; weather gaps degrade
//! to the documented fallback estimate and never abort.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;

use shared::{
    build_feature_vector, evaluate, generate, EnvironmentEstimate, EstimateSource,
    NewPredictionRecord, PredictionRecord, SoilInput, SoilSample,
};

use crate::error::{AppError, AppResult};
use crate::external::WeatherClient;
use crate::ml::PredictionEngine;
use crate::services::record::PredictionStore;

/// How the caller wants the environment estimate produced
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestedSource {
    /// Predict from soil and crop features (requires a loaded model)
    #[default]
    Model,
    /// Look up current conditions from the weather collaborator
    Observed,
}

/// Input for running the prediction pipeline
#[derive(Debug, Deserialize)]
pub struct PredictionRequest {
    pub crop: String,
    pub location: String,
    #[serde(default)]
    pub soil_data: SoilInput,
    /// Optional indicator overrides for the feature vector
    pub indicators: Option<HashMap<String, Value>>,
    /// Known-conditions flow: skip estimation entirely
    pub conditions: Option<EnvironmentEstimate>,
    #[serde(default)]
    pub source: RequestedSource,
    /// Schedule anchor; defaults to today (UTC)
    pub anchor_date: Option<NaiveDate>,
}

/// Orchestrates the prediction pipeline over a record store
pub struct PredictionService<S> {
    store: S,
    engine: Option<PredictionEngine>,
    weather: Option<WeatherClient>,
}

impl<S: PredictionStore> PredictionService<S> {
    pub fn new(store: S, engine: Option<PredictionEngine>, weather: Option<WeatherClient>) -> Self {
        Self {
            store,
            engine,
            weather,
        }
    }

    /// Run the full pipeline and persist the outcome
    pub async fn predict(&self, request: PredictionRequest) -> AppResult<PredictionRecord> {
        let crop = request.crop.trim().to_lowercase();

        // Required inputs fail hard before anything else runs
        let sample = request.soil_data.validate()?;

        let (estimate, estimate_source) = self
            .resolve_estimate(&request, &crop, &sample)
            .await?;

        let suitability = evaluate(&crop, &estimate);
        let anchor = request
            .anchor_date
            .unwrap_or_else(|| Utc::now().date_naive());
        let schedule = generate(&suitability, anchor);

        tracing::info!(
            crop = %crop,
            location = %request.location,
            source = estimate_source.as_str(),
            suitable = suitability.overall_ok,
            "generated farming schedule"
        );

        self.store
            .insert(NewPredictionRecord {
                crop,
                location: request.location.clone(),
                soil_data: sample,
                estimate,
                estimate_source,
                schedule,
            })
            .await
    }

    /// Resolve the environment estimate for a request
    async fn resolve_estimate(
        &self,
        request: &PredictionRequest,
        crop: &str,
        sample: &SoilSample,
    ) -> AppResult<(EnvironmentEstimate, EstimateSource)> {
        if let Some(conditions) = request.conditions {
            return Ok((conditions, EstimateSource::Provided));
        }

        match request.source {
            RequestedSource::Observed => Ok(self.observed_estimate(&request.location).await),
            RequestedSource::Model => {
                let engine = self.engine.as_ref().ok_or(AppError::ModelUnavailable)?;
                let vector = build_feature_vector(sample, crop, request.indicators.as_ref());
                let estimate = engine.predict(&vector)?;
                Ok((estimate, EstimateSource::Model))
            }
        }
    }

    /// Current conditions from the weather collaborator, degrading to the
    /// documented fallback when the client is missing or fails
    async fn observed_estimate(&self, location: &str) -> (EnvironmentEstimate, EstimateSource) {
        let Some(client) = &self.weather else {
            tracing::warn!(%location, "weather client not configured, using fallback estimate");
            return (EnvironmentEstimate::fallback(), EstimateSource::Fallback);
        };

        match client.get_current_conditions(location).await {
            Ok(estimate) => (estimate, EstimateSource::Observed),
            Err(e) => {
                tracing::warn!(%location, error = %e, "weather lookup failed, using fallback estimate");
                (EnvironmentEstimate::fallback(), EstimateSource::Fallback)
            }
        }
    }

    /// Recent prediction records, most recent first
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<PredictionRecord>> {
        self.store.list_recent(limit).await
    }

    /// One prediction record by id
    pub async fn get(&self, id: uuid::Uuid) -> AppResult<PredictionRecord> {
        self.store.get_by_id(id).await
    }
}
