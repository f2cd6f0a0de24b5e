//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Where an environment estimate came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EstimateSource {
    /// Predicted by the regression model from soil and crop features
    Model,
    /// Supplied directly by the caller
    Provided,
    /// Fetched from the external weather collaborator
    Observed,
    /// Documented default used when the weather collaborator is unavailable
    Fallback,
}

impl EstimateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstimateSource::Model => "model",
            EstimateSource::Provided => "provided",
            EstimateSource::Observed => "observed",
            EstimateSource::Fallback => "fallback",
        }
    }
}

impl std::str::FromStr for EstimateSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "model" => Ok(EstimateSource::Model),
            "provided" => Ok(EstimateSource::Provided),
            "observed" => Ok(EstimateSource::Observed),
            "fallback" => Ok(EstimateSource::Fallback),
            other => Err(format!("unknown estimate source: {other}")),
        }
    }
}

/// Pagination parameters for list queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

impl ListQuery {
    /// Effective limit, clamped to a sane window
    pub fn limit_or_default(&self) -> i64 {
        self.limit.unwrap_or(10).clamp(1, 100)
    }
}
