use anyhow::anyhow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::chat::{ChatDocumentRow, ChatEntry};

/// Appends an entry to the user's chat document, creating the document with a
/// fresh identifier on first use. The upsert keeps concurrent appends atomic.
pub async fn append_chat_entry(
    pool: &PgPool,
    user_id: Uuid,
    entry: &ChatEntry,
) -> Result<(), AppError> {
    let entry_json = serde_json::to_value(entry)
        .map_err(|e| AppError::Internal(anyhow!("Failed to serialize chat entry: {e}")))?;

    sqlx::query(
        r#"
        INSERT INTO chat_histories (id, user_id, chat_history)
        VALUES ($1, $2, jsonb_build_array($3))
        ON CONFLICT (user_id)
        DO UPDATE SET chat_history = chat_histories.chat_history || excluded.chat_history
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(entry_json)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get_chat_document(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<ChatDocumentRow>, AppError> {
    Ok(
        sqlx::query_as::<_, ChatDocumentRow>("SELECT * FROM chat_histories WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?,
    )
}
