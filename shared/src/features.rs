//! Feature vector assembly for the prediction engine
//!
//! The builder owns the column contract: four continuous soil fields
//! followed by one indicator per catalog crop, in catalog order. The same
//! order was used at training time, so the model's inputs align
//! positionally with what is assembled here.

use std::collections::HashMap;

use serde_json::Value;

use crate::models::{SoilSample, CROP_LABELS};

/// Continuous features, in order, ahead of the indicator block
pub const CONTINUOUS_FEATURES: &[&str] = &["nitrogen", "phosphorus", "potassium", "ph"];

/// A fixed-order numeric vector ready for the regression model
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Total number of features the model expects
pub fn feature_count() -> usize {
    CONTINUOUS_FEATURES.len() + CROP_LABELS.len()
}

/// Canonical column names, identical across every invocation
pub fn feature_names() -> Vec<String> {
    CONTINUOUS_FEATURES
        .iter()
        .map(|f| f.to_string())
        .chain(CROP_LABELS.iter().map(|c| format!("label_{c}")))
        .collect()
}

/// Assemble the feature vector for a soil sample and crop
///
/// The requested crop sets its own indicator when it appears in the
/// catalog; unknown crops contribute nothing (this is not an error).
/// Indicator overrides accept either the bare crop name or the full
/// `label_` column name, with truthy/falsy coercion of the value; every
/// indicator not mentioned defaults to 0.
pub fn build_feature_vector(
    sample: &SoilSample,
    crop: &str,
    overrides: Option<&HashMap<String, Value>>,
) -> FeatureVector {
    let mut values = Vec::with_capacity(feature_count());
    values.extend([sample.nitrogen, sample.phosphorus, sample.potassium, sample.ph]);

    let crop_key = crop.trim().to_lowercase();
    for label in CROP_LABELS {
        let mut on = *label == crop_key;

        if let Some(overrides) = overrides {
            let full = format!("label_{label}");
            if let Some(value) = overrides.get(*label).or_else(|| overrides.get(&full)) {
                on = is_truthy(value);
            }
        }

        values.push(if on { 1.0 } else { 0.0 });
    }

    FeatureVector { values }
}

/// Truthy/falsy coercion for indicator override values
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
