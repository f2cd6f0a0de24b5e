//! Regression model abstraction and artifact loading
//!
//! The pipeline treats the model as an opaque capability with a fixed
//! contract: a feature vector in, three correlated outputs out
//! (temperature, humidity, rainfall, in that order). The concrete
//! implementation is interchangeable; the bundle is loaded once at
//! start-up and never mutated while requests are served.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shared::features;

use crate::error::{AppError, AppResult};
use crate::ml::scaler::StandardScaler;

/// Number of model outputs: temperature, humidity, rainfall
pub const TARGET_COUNT: usize = 3;

/// An opaque regression capability
pub trait RegressionModel: Send + Sync {
    /// Predict the three environment targets for one feature vector
    fn predict(&self, features: &[f64]) -> AppResult<[f64; TARGET_COUNT]>;
}

/// Multi-output linear regression: one coefficient row per target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegressor {
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl LinearRegressor {
    pub fn new(coefficients: Vec<Vec<f64>>, intercepts: Vec<f64>) -> AppResult<Self> {
        let model = Self {
            coefficients,
            intercepts,
        };
        model.check_shape()?;
        Ok(model)
    }

    fn check_shape(&self) -> AppResult<()> {
        if self.coefficients.len() != TARGET_COUNT || self.intercepts.len() != TARGET_COUNT {
            return Err(AppError::Model(format!(
                "linear model must have {} coefficient rows and intercepts",
                TARGET_COUNT
            )));
        }
        let width = self.coefficients[0].len();
        if self.coefficients.iter().any(|row| row.len() != width) {
            return Err(AppError::Model(
                "linear model coefficient rows have uneven length".to_string(),
            ));
        }
        Ok(())
    }

    fn input_dim(&self) -> usize {
        self.coefficients[0].len()
    }
}

impl RegressionModel for LinearRegressor {
    fn predict(&self, features: &[f64]) -> AppResult<[f64; TARGET_COUNT]> {
        if features.len() != self.input_dim() {
            return Err(AppError::Model(format!(
                "model expects {} features, got {}",
                self.input_dim(),
                features.len()
            )));
        }

        let mut out = [0.0; TARGET_COUNT];
        for (target, (row, intercept)) in out
            .iter_mut()
            .zip(self.coefficients.iter().zip(&self.intercepts))
        {
            *target = row
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>()
                + intercept;
        }
        Ok(out)
    }
}

/// On-disk model artifact (JSON)
///
/// Carries the column names the model was trained with so loading can
/// verify positional alignment with the feature builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub catalog_version: u32,
    pub feature_names: Vec<String>,
    pub model: LinearRegressor,
    pub feature_scaler: Option<StandardScaler>,
    pub target_scaler: Option<StandardScaler>,
}

/// The loaded model plus its optional scaling transforms
///
/// Shared process-wide behind an `Arc`; read-only after start-up.
pub struct ModelBundle {
    pub model: Box<dyn RegressionModel>,
    pub feature_scaler: Option<StandardScaler>,
    pub target_scaler: Option<StandardScaler>,
}

impl ModelBundle {
    /// Load and validate a model artifact from disk
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read model artifact at {path}"))?;
        let artifact: ModelArtifact =
            serde_json::from_str(&raw).context("failed to parse model artifact")?;
        Self::from_artifact(artifact)
    }

    /// Validate an artifact against the feature builder's column contract
    pub fn from_artifact(artifact: ModelArtifact) -> anyhow::Result<Self> {
        anyhow::ensure!(
            artifact.catalog_version == shared::models::CROP_CATALOG_VERSION,
            "model artifact was trained against crop catalog version {} but this build carries {}",
            artifact.catalog_version,
            shared::models::CROP_CATALOG_VERSION
        );

        let expected = features::feature_names();
        anyhow::ensure!(
            artifact.feature_names == expected,
            "model artifact columns do not match the feature builder (artifact has {}, builder has {})",
            artifact.feature_names.len(),
            expected.len()
        );

        artifact.model.check_shape().map_err(|e| anyhow::anyhow!(e))?;
        anyhow::ensure!(
            artifact.model.input_dim() == features::feature_count(),
            "model expects {} features but the builder produces {}",
            artifact.model.input_dim(),
            features::feature_count()
        );

        if let Some(scaler) = &artifact.feature_scaler {
            anyhow::ensure!(
                scaler.dim() == features::feature_count(),
                "feature scaler dimension {} does not match feature count {}",
                scaler.dim(),
                features::feature_count()
            );
        }
        if let Some(scaler) = &artifact.target_scaler {
            anyhow::ensure!(
                scaler.dim() == TARGET_COUNT,
                "target scaler dimension {} does not match target count {}",
                scaler.dim(),
                TARGET_COUNT
            );
        }

        Ok(Self {
            model: Box::new(artifact.model),
            feature_scaler: artifact.feature_scaler,
            target_scaler: artifact.target_scaler,
        })
    }
}
