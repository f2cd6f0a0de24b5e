//! Weather API client for fetching current conditions
//!
//! Integrates with WeatherAPI for current conditions keyed by an opaque
//! location string (postal code, city name, or "lat,lon"). The client
//! itself reports failures; absorbing them into the documented fallback
//! estimate is the caller's job.

use reqwest::Client;
use serde::Deserialize;
use shared::EnvironmentEstimate;

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// WeatherAPI response for current conditions
#[derive(Debug, Deserialize)]
struct WapiCurrentResponse {
    current: WapiCurrent,
}

#[derive(Debug, Deserialize)]
struct WapiCurrent {
    temp_c: f64,
    humidity: f64,
    precip_mm: f64,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current conditions for a location
    pub async fn get_current_conditions(&self, location: &str) -> AppResult<EnvironmentEstimate> {
        let url = format!("{}/current.json", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", location)])
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Internal(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: WapiCurrentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse weather response: {}", e)))?;

        Ok(EnvironmentEstimate::new(
            data.current.temp_c,
            data.current.humidity,
            data.current.precip_mm,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_response_parses() {
        let raw = r#"{
            "location": { "name": "Amherst", "region": "Massachusetts" },
            "current": { "temp_c": 24.0, "humidity": 65, "precip_mm": 0.3 }
        }"#;

        let data: WapiCurrentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(data.current.temp_c, 24.0);
        assert_eq!(data.current.humidity, 65.0);
        assert_eq!(data.current.precip_mm, 0.3);
    }
}
