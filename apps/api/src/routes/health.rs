use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;
use crate::store;

/// GET /health
///
/// Pings the database; an unreachable database is 503.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    store::ping(&state.db)
        .await
        .map_err(|e| AppError::ServiceUnavailable(format!("Database connection failed: {e}")))?;

    Ok(Json(json!({
        "status": "healthy",
        "database": "connected",
        "timestamp": Utc::now(),
    })))
}
