//! Soil Analysis Composer — placeholder image analysis, optional weather
//! enrichment, and LLM narration. Persistence is the caller's responsibility.

pub mod features;
pub mod handlers;
pub mod prompts;

use serde::Serialize;
use tracing::warn;

use crate::analysis::features::ImageAnalysis;
use crate::errors::AppError;
use crate::state::AppState;
use crate::weather::LocationData;

#[derive(Debug, Serialize)]
pub struct AnalysisData {
    pub image_analysis: ImageAnalysis,
    pub location_data: Option<LocationData>,
}

/// Hardcoded crop/fertilizer/watering suggestions returned with every
/// analysis, independent of the computed result.
#[derive(Debug, Serialize)]
pub struct Recommendations {
    pub suitable_crops: Vec<&'static str>,
    pub fertilizer_suggestions: Vec<&'static str>,
    pub watering_schedule: &'static str,
}

impl Recommendations {
    pub fn standard() -> Self {
        Self {
            suitable_crops: vec!["Wheat", "Corn", "Soybeans"],
            fertilizer_suggestions: vec!["NPK 10-10-10", "Compost"],
            watering_schedule: "Every 3 days",
        }
    }
}

pub struct AnalysisOutcome {
    pub analysis: AnalysisData,
    pub ai_response: String,
    pub recommendations: Recommendations,
}

/// Runs the analysis pipeline: validate image, placeholder analysis, optional
/// weather enrichment (failures swallowed), LLM narration.
pub async fn analyze_soil(
    state: &AppState,
    image_base64: &str,
    lat: Option<f64>,
    long: Option<f64>,
) -> Result<AnalysisOutcome, AppError> {
    features::decode_image(image_base64)?;

    // Placeholder profile regardless of image content; see features module.
    let image_analysis = ImageAnalysis::placeholder();

    let location_data = match lat.zip(long) {
        Some((lat, long)) => match state.weather.current(lat, long).await {
            Ok(data) => Some(data),
            Err(e) => {
                warn!("Weather lookup failed, continuing without location data: {e}");
                None
            }
        },
        None => None,
    };

    let prompt = prompts::build_analysis_prompt(&image_analysis, location_data.as_ref());
    let ai_response = state
        .llm
        .complete(
            &prompt,
            prompts::ANALYSIS_SYSTEM,
            prompts::ANALYSIS_TEMPERATURE,
            prompts::ANALYSIS_MAX_TOKENS,
        )
        .await
        .map_err(|e| AppError::Llm(format!("Error analyzing soil: {e}")))?;

    Ok(AnalysisOutcome {
        analysis: AnalysisData {
            image_analysis,
            location_data,
        },
        ai_response,
        recommendations: Recommendations::standard(),
    })
}
