use anyhow::anyhow;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::{HistoryEntry, UserRow};

/// Inserts a new user with an empty history array.
/// A lost race on the email unique constraint surfaces as Conflict.
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<Uuid, AppError> {
    let id = Uuid::new_v4();

    sqlx::query("INSERT INTO users (id, username, email, password_hash) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .execute(pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Email already registered".to_string())
            }
            _ => AppError::Database(e),
        })?;

    info!("Created user {id}");
    Ok(id)
}

pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRow>, AppError> {
    Ok(
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?,
    )
}

pub async fn get_user(pool: &PgPool, id: Uuid) -> Result<Option<UserRow>, AppError> {
    Ok(
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?,
    )
}

/// Appends one entry to the user's embedded search history.
pub async fn append_search_history(
    pool: &PgPool,
    user_id: Uuid,
    entry: &HistoryEntry,
) -> Result<(), AppError> {
    let entry_json = serde_json::to_value(entry)
        .map_err(|e| AppError::Internal(anyhow!("Failed to serialize history entry: {e}")))?;

    sqlx::query("UPDATE users SET history = history || $2 WHERE id = $1")
        .bind(user_id)
        .bind(entry_json)
        .execute(pool)
        .await?;

    Ok(())
}
