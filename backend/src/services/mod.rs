//! Business logic services for the FarmNest Crop Advisory Platform

pub mod prediction;
pub mod record;
pub mod user;

pub use prediction::PredictionService;
pub use record::{PgPredictionStore, PredictionStore};
pub use user::UserService;
