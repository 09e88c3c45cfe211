//! Chat Composer — conversational soil advice with optional image-feature and
//! location-context enrichment. Enrichment failures are swallowed; the chat
//! proceeds with whatever context could be gathered.

pub mod classify;
pub mod handlers;
pub mod prompts;

use tracing::warn;

use crate::analysis::features::{self, ImageFeatures};
use crate::errors::AppError;
use crate::models::chat::ChatMetadata;
use crate::state::AppState;
use crate::weather::LocationContext;

pub struct ChatOutcome {
    pub ai_response: String,
    pub metadata: ChatMetadata,
    pub image_features: Option<ImageFeatures>,
    pub location_context: Option<LocationContext>,
}

/// Runs the chat pipeline: optional feature extraction, optional location
/// context (only attempted when features were extracted), LLM call, query
/// classification.
pub async fn run_chat(
    state: &AppState,
    user_message: &str,
    soil_image: Option<&str>,
    lat: Option<f64>,
    long: Option<f64>,
) -> Result<ChatOutcome, AppError> {
    let mut image_features = None;

    if let Some(encoded) = soil_image {
        match features::decode_image(encoded) {
            Ok(bytes) => match state.extractor.extract(&bytes).await {
                Ok(features) => image_features = Some(features),
                Err(e) => warn!("Feature extraction failed, continuing without features: {e}"),
            },
            Err(e) => warn!("Image decode failed in chat, continuing without features: {e}"),
        }
    }

    let mut location_context = None;
    if image_features.is_some() {
        if let Some((lat, long)) = lat.zip(long) {
            match state.weather.current(lat, long).await {
                Ok(data) => location_context = Some(LocationContext::new(lat, long, &data)),
                Err(e) => warn!("Location context lookup failed: {e}"),
            }
        }
    }

    let prompt = prompts::build_chat_prompt(
        user_message,
        image_features.as_ref(),
        location_context.as_ref(),
    );
    let ai_response = state
        .llm
        .complete(
            &prompt,
            prompts::CHAT_SYSTEM,
            prompts::CHAT_TEMPERATURE,
            prompts::CHAT_MAX_TOKENS,
        )
        .await
        .map_err(|e| AppError::Llm(format!("Chat failed: {e}")))?;

    let metadata = ChatMetadata {
        has_image_analysis: image_features.is_some(),
        image_hash: image_features.as_ref().map(|f| f.image_hash.clone()),
        has_location: location_context.is_some(),
        query_type: classify::classify_query(user_message).to_string(),
    };

    Ok(ChatOutcome {
        ai_response,
        metadata,
        image_features,
        location_context,
    })
}
