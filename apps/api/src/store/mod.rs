//! Persistence gateway — all database reads and writes live here.
//!
//! Embedded history arrays are JSONB columns; appends are single atomic
//! `col = col || $n` statements, never read-modify-write.

pub mod chats;
pub mod users;

use sqlx::PgPool;

/// Liveness check for the health endpoint.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
