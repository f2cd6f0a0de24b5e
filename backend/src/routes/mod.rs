//! Route definitions for the FarmNest Crop Advisory Platform

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Prediction pipeline
        .nest("/predictions", prediction_routes())
        // User management
        .nest("/users", user_routes())
        // Weather lookups
        .nest("/weather", weather_routes())
}

/// Prediction pipeline routes
fn prediction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_predictions).post(handlers::predict_crop),
        )
        .route("/:prediction_id", get(handlers::get_prediction))
}

/// User management routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route("/:user_id", delete(handlers::delete_user))
        .route("/:user_id/soil", put(handlers::update_soil_data))
}

/// Weather lookup routes
fn weather_routes() -> Router<AppState> {
    Router::new().route("/current", get(handlers::current_weather))
}
