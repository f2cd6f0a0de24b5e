//! Soil sample models and validation

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Validated soil nutrient measurements
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SoilSample {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
}

/// Raw soil input as received from the request layer
///
/// Values are kept as raw JSON so callers may send numbers or numeric
/// strings; [`SoilInput::validate`] performs the conversion. All four
/// fields are required — there is no defaulting for soil measurements.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SoilInput {
    #[serde(alias = "N")]
    pub nitrogen: Option<Value>,
    #[serde(alias = "P")]
    pub phosphorus: Option<Value>,
    #[serde(alias = "K")]
    pub potassium: Option<Value>,
    #[serde(alias = "pH")]
    pub ph: Option<Value>,
}

/// Validation failure for a required soil field
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SoilValidationError {
    #[error("missing required soil field: {0}")]
    MissingField(&'static str),

    #[error("soil field {0} is not a finite number")]
    NotFinite(&'static str),
}

impl SoilValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            SoilValidationError::MissingField(f) => f,
            SoilValidationError::NotFinite(f) => f,
        }
    }
}

impl SoilInput {
    /// Validate and convert the raw input into a [`SoilSample`]
    pub fn validate(&self) -> Result<SoilSample, SoilValidationError> {
        Ok(SoilSample {
            nitrogen: require_number("nitrogen", self.nitrogen.as_ref())?,
            phosphorus: require_number("phosphorus", self.phosphorus.as_ref())?,
            potassium: require_number("potassium", self.potassium.as_ref())?,
            ph: require_number("ph", self.ph.as_ref())?,
        })
    }
}

impl From<SoilSample> for SoilInput {
    fn from(sample: SoilSample) -> Self {
        let num = |v: f64| Value::from(v);
        Self {
            nitrogen: Some(num(sample.nitrogen)),
            phosphorus: Some(num(sample.phosphorus)),
            potassium: Some(num(sample.potassium)),
            ph: Some(num(sample.ph)),
        }
    }
}

/// Convert a raw JSON value into a finite f64, naming the field on failure
fn require_number(field: &'static str, value: Option<&Value>) -> Result<f64, SoilValidationError> {
    let value = match value {
        None | Some(Value::Null) => return Err(SoilValidationError::MissingField(field)),
        Some(v) => v,
    };

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(SoilValidationError::NotFinite(field)),
    }
}
