//! HTTP handlers for weather lookup endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use shared::{EnvironmentEstimate, EstimateSource};

use crate::external::WeatherClient;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub location: String,
    pub estimate: EnvironmentEstimate,
    pub source: EstimateSource,
}

/// Current conditions for a location
///
/// This endpoint never fails: when the weather collaborator is missing
/// or errors, the documented fallback estimate is returned instead.
pub async fn current_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Json<WeatherResponse> {
    let cfg = &state.config.weather;

    let (estimate, source) = if cfg.api_key.is_empty() {
        tracing::warn!(location = %query.location, "weather client not configured, using fallback estimate");
        (EnvironmentEstimate::fallback(), EstimateSource::Fallback)
    } else {
        let client = WeatherClient::new(cfg.api_key.clone(), cfg.api_endpoint.clone());
        match client.get_current_conditions(&query.location).await {
            Ok(estimate) => (estimate, EstimateSource::Observed),
            Err(e) => {
                tracing::warn!(location = %query.location, error = %e, "weather lookup failed, using fallback estimate");
                (EnvironmentEstimate::fallback(), EstimateSource::Fallback)
            }
        }
    };

    Json(WeatherResponse {
        location: query.location,
        estimate,
        source,
    })
}
