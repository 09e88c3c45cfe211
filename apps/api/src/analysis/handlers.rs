use axum::{extract::State, Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{analyze_soil, AnalysisData, Recommendations};
use crate::auth::middleware::CurrentUser;
use crate::errors::AppError;
use crate::models::chat::ChatEntry;
use crate::models::user::HistoryEntry;
use crate::state::AppState;
use crate::store;
use crate::weather;

#[derive(Debug, Deserialize)]
pub struct SoilAnalysisRequest {
    pub soil_image: String,
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct SoilAnalysisResponse {
    pub status: String,
    pub user_id: Uuid,
    pub analysis: AnalysisData,
    pub ai_response: String,
    pub recommendations: Recommendations,
    pub timestamp: DateTime<Utc>,
}

/// POST /ask/ai
///
/// Analyzes a soil image with optional location data, then appends a
/// truncated search-history entry and a bare chat entry for the user.
pub async fn handle_ask_ai(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(request): Json<SoilAnalysisRequest>,
) -> Result<Json<SoilAnalysisResponse>, AppError> {
    if !weather::coordinates_in_range(request.lat, request.long) {
        return Err(AppError::Validation(
            "coordinates out of range".to_string(),
        ));
    }

    let outcome = analyze_soil(&state, &request.soil_image, request.lat, request.long).await?;

    let history_entry = HistoryEntry::new(
        &request.soil_image,
        request.lat,
        request.long,
        &outcome.ai_response,
    );
    store::users::append_search_history(&state.db, user.id, &history_entry).await?;

    let chat_message = format!(
        "Soil analysis request with image and location: lat={}, long={}",
        coord(request.lat),
        coord(request.long)
    );
    let chat_entry = ChatEntry::bare(chat_message, outcome.ai_response.clone());
    store::chats::append_chat_entry(&state.db, user.id, &chat_entry).await?;

    Ok(Json(SoilAnalysisResponse {
        status: "success".to_string(),
        user_id: user.id,
        analysis: outcome.analysis,
        ai_response: outcome.ai_response,
        recommendations: outcome.recommendations,
        timestamp: Utc::now(),
    }))
}

fn coord(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "none".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_formats_present_and_absent() {
        assert_eq!(coord(Some(28.67)), "28.67");
        assert_eq!(coord(None), "none");
    }
}
