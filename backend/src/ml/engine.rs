//! Prediction engine wrapping the loaded model bundle

use std::sync::Arc;

use shared::{EnvironmentEstimate, FeatureVector};

use crate::error::AppResult;
use crate::ml::model::ModelBundle;

/// Runs feature vectors through the loaded regression capability
///
/// Stateless per call; the bundle it borrows is an immutable
/// process-wide resource, so engines are cheap to construct and safe to
/// use from concurrent requests without coordination.
#[derive(Clone)]
pub struct PredictionEngine {
    bundle: Arc<ModelBundle>,
}

impl PredictionEngine {
    pub fn new(bundle: Arc<ModelBundle>) -> Self {
        Self { bundle }
    }

    /// Predict environmental conditions for an assembled feature vector
    ///
    /// Applies the feature scaler before the model and the target
    /// inverse scaler after it, when each is configured; otherwise the
    /// raw values pass through unchanged. Output order is fixed:
    /// temperature, humidity, rainfall.
    pub fn predict(&self, vector: &FeatureVector) -> AppResult<EnvironmentEstimate> {
        let input = match &self.bundle.feature_scaler {
            Some(scaler) => scaler.transform(vector.values())?,
            None => vector.values().to_vec(),
        };

        let raw = self.bundle.model.predict(&input)?;

        let output = match &self.bundle.target_scaler {
            Some(scaler) => scaler.inverse_transform(&raw)?,
            None => raw.to_vec(),
        };

        Ok(EnvironmentEstimate::new(output[0], output[1], output[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppResult;
    use crate::ml::model::{RegressionModel, TARGET_COUNT};
    use crate::ml::scaler::StandardScaler;
    use shared::{build_feature_vector, SoilSample};

    /// Deterministic stand-in for a trained model
    struct StubModel {
        output: [f64; TARGET_COUNT],
    }

    impl RegressionModel for StubModel {
        fn predict(&self, _features: &[f64]) -> AppResult<[f64; TARGET_COUNT]> {
            Ok(self.output)
        }
    }

    fn sample() -> SoilSample {
        SoilSample {
            nitrogen: 90.0,
            phosphorus: 40.0,
            potassium: 35.0,
            ph: 6.5,
        }
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let bundle = Arc::new(ModelBundle {
            model: Box::new(StubModel {
                output: [27.0, 70.0, 150.0],
            }),
            feature_scaler: None,
            target_scaler: None,
        });
        let engine = PredictionEngine::new(bundle);
        let vector = build_feature_vector(&sample(), "rice", None);

        let first = engine.predict(&vector).unwrap();
        let second = engine.predict(&vector).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, EnvironmentEstimate::new(27.0, 70.0, 150.0));
    }

    #[test]
    fn test_target_inverse_scaling_applied() {
        // Model emits normalized targets; the inverse scaler maps them
        // back to real-world units.
        let bundle = Arc::new(ModelBundle {
            model: Box::new(StubModel {
                output: [0.0, 1.0, -1.0],
            }),
            feature_scaler: None,
            target_scaler: Some(
                StandardScaler::new(vec![25.0, 65.0, 150.0], vec![5.0, 10.0, 50.0]).unwrap(),
            ),
        });
        let engine = PredictionEngine::new(bundle);
        let vector = build_feature_vector(&sample(), "rice", None);

        let estimate = engine.predict(&vector).unwrap();
        assert_eq!(estimate, EnvironmentEstimate::new(25.0, 75.0, 100.0));
    }

    #[test]
    fn test_missing_scalers_pass_raw_values_through() {
        let bundle = Arc::new(ModelBundle {
            model: Box::new(StubModel {
                output: [30.0, 55.0, 120.0],
            }),
            feature_scaler: None,
            target_scaler: None,
        });
        let engine = PredictionEngine::new(bundle);
        let vector = build_feature_vector(&sample(), "maize", None);

        let estimate = engine.predict(&vector).unwrap();
        assert_eq!(estimate, EnvironmentEstimate::new(30.0, 55.0, 120.0));
    }
}
