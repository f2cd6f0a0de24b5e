//! User record management

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::{CreateUserInput, SoilInput, UserRecord};

use crate::error::{AppError, AppResult};

/// Service for user CRUD operations
#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    location: Option<String>,
    soil_data: Option<serde_json::Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let soil_data = row
            .soil_data
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| AppError::Internal(format!("corrupt soil data for user {}: {e}", row.id)))?;

        Ok(UserRecord {
            id: row.id,
            name: row.name,
            email: row.email,
            location: row.location,
            soil_data,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl UserService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Register a new user
    pub async fn create_user(&self, input: CreateUserInput) -> AppResult<UserRecord> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "name is required".to_string(),
            });
        }

        let email = input.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::Validation {
                field: "email".to_string(),
                message: "a valid email address is required".to_string(),
            });
        }

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email, location)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, location, soil_data, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(&input.location)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(user_id = %row.id, "registered user");
        row.try_into()
    }

    /// All registered users, newest first
    pub async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, location, soil_data, created_at, updated_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(UserRecord::try_from).collect()
    }

    /// Remove a user by id
    pub async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User".to_string()));
        }

        tracing::info!(user_id = %id, "deleted user");
        Ok(())
    }

    /// Replace a user's stored soil measurements
    pub async fn update_soil_data(&self, id: Uuid, soil: SoilInput) -> AppResult<UserRecord> {
        let sample = soil.validate()?;
        let soil_data = serde_json::to_value(sample)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET soil_data = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, location, soil_data, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&soil_data)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

        row.try_into()
    }
}
