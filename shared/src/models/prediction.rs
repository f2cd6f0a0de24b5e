//! Prediction record models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{EnvironmentEstimate, SchedulePhase, SoilSample};
use crate::types::EstimateSource;

/// A persisted prediction together with the inputs that produced it
///
/// Owned by the record store; immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRecord {
    pub id: Uuid,
    pub crop: String,
    pub location: String,
    pub soil_data: SoilSample,
    pub estimate: EnvironmentEstimate,
    pub estimate_source: EstimateSource,
    pub schedule: Vec<SchedulePhase>,
    pub created_at: DateTime<Utc>,
}

/// A prediction record before the store assigns identity and timestamp
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPredictionRecord {
    pub crop: String,
    pub location: String,
    pub soil_data: SoilSample,
    pub estimate: EnvironmentEstimate,
    pub estimate_source: EstimateSource,
    pub schedule: Vec<SchedulePhase>,
}
