//! HTTP request handlers

pub mod health;
pub mod prediction;
pub mod user;
pub mod weather;

pub use health::health_check;
pub use prediction::{get_prediction, list_predictions, predict_crop};
pub use user::{create_user, delete_user, list_users, update_soil_data};
pub use weather::current_weather;
