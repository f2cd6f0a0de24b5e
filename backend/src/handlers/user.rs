//! HTTP handlers for user management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use shared::{CreateUserInput, SoilInput, UserRecord};

use crate::error::AppResult;
use crate::services::UserService;
use crate::AppState;

/// Register a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUserInput>,
) -> AppResult<(StatusCode, Json<UserRecord>)> {
    let service = UserService::new(state.db);
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List all registered users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserRecord>>> {
    let service = UserService::new(state.db);
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Delete a user by ID
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = UserService::new(state.db);
    service.delete_user(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Update a user's stored soil measurements
pub async fn update_soil_data(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(input): Json<SoilInput>,
) -> AppResult<Json<UserRecord>> {
    let service = UserService::new(state.db);
    let user = service.update_soil_data(user_id, input).await?;
    Ok(Json(user))
}
