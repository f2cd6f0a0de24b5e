//! Environmental condition models

use serde::{Deserialize, Serialize};

/// Estimated environmental conditions for a location
///
/// Produced by the prediction engine, supplied directly by the caller, or
/// fetched from the external weather collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnvironmentEstimate {
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in %
    pub humidity: f64,
    /// Rainfall in mm
    pub rainfall: f64,
}

impl EnvironmentEstimate {
    pub fn new(temperature: f64, humidity: f64, rainfall: f64) -> Self {
        Self {
            temperature,
            humidity,
            rainfall,
        }
    }

    /// Documented fallback used when the weather collaborator is unavailable
    pub fn fallback() -> Self {
        Self {
            temperature: 25.0,
            humidity: 65.0,
            rainfall: 150.0,
        }
    }
}
