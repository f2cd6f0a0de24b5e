//! Prediction engine: the opaque regression capability and its scalers

pub mod engine;
pub mod model;
pub mod scaler;

pub use engine::PredictionEngine;
pub use model::{LinearRegressor, ModelArtifact, ModelBundle, RegressionModel};
pub use scaler::StandardScaler;
