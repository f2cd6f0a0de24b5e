//! Standard (z-score) scaling for model inputs and outputs

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Per-feature standardization: `(x - mean) / scale`
///
/// The mean and scale vectors are produced at training time and shipped
/// inside the model artifact; this type only applies them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> AppResult<Self> {
        if mean.len() != scale.len() {
            return Err(AppError::Model(format!(
                "scaler mean/scale length mismatch: {} vs {}",
                mean.len(),
                scale.len()
            )));
        }
        if scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err(AppError::Model(
                "scaler scale entries must be finite and non-zero".to_string(),
            ));
        }
        Ok(Self { mean, scale })
    }

    /// Number of features this scaler was fitted for
    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    /// Map real-world values into the model's normalized space
    pub fn transform(&self, values: &[f64]) -> AppResult<Vec<f64>> {
        self.check_dim(values)?;
        Ok(values
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(v, (m, s))| (v - m) / s)
            .collect())
    }

    /// Map normalized model output back to real-world units
    pub fn inverse_transform(&self, values: &[f64]) -> AppResult<Vec<f64>> {
        self.check_dim(values)?;
        Ok(values
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(v, (m, s))| v * s + m)
            .collect())
    }

    fn check_dim(&self, values: &[f64]) -> AppResult<()> {
        if values.len() != self.dim() {
            return Err(AppError::Model(format!(
                "scaler expects {} values, got {}",
                self.dim(),
                values.len()
            )));
        }
        Ok(())
    }
}
