use axum::{extract::State, Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::features::ImageFeatures;
use crate::auth::middleware::CurrentUser;
use crate::chat::run_chat;
use crate::errors::AppError;
use crate::models::chat::{ChatEntry, ChatMetadata};
use crate::state::AppState;
use crate::store;
use crate::weather::{self, LocationContext};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_message: String,
    pub soil_image: Option<String>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub status: String,
    pub user_id: Uuid,
    pub ai_response: String,
    pub metadata: ChatMetadata,
    pub image_analysis: Option<ImageFeatures>,
    pub location_context: Option<LocationContext>,
    pub timestamp: DateTime<Utc>,
}

/// POST /chat
///
/// General chat with the model about soil, optionally enriched with image
/// features and location context. Persists the full exchange.
pub async fn handle_chat(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.user_message.trim().is_empty() {
        return Err(AppError::Validation(
            "user_message cannot be empty".to_string(),
        ));
    }
    if !weather::coordinates_in_range(request.lat, request.long) {
        return Err(AppError::Validation(
            "coordinates out of range".to_string(),
        ));
    }

    let outcome = run_chat(
        &state,
        &request.user_message,
        request.soil_image.as_deref(),
        request.lat,
        request.long,
    )
    .await?;

    let chat_entry = ChatEntry {
        user_message: request.user_message,
        ai_response: outcome.ai_response.clone(),
        metadata: Some(outcome.metadata.clone()),
        image_features: outcome.image_features.clone(),
        location_context: outcome.location_context.clone(),
        timestamp: Utc::now(),
    };
    store::chats::append_chat_entry(&state.db, user.id, &chat_entry).await?;

    Ok(Json(ChatResponse {
        status: "success".to_string(),
        user_id: user.id,
        ai_response: outcome.ai_response,
        metadata: outcome.metadata,
        image_analysis: outcome.image_features,
        location_context: outcome.location_context,
        timestamp: Utc::now(),
    }))
}
