// Prompt constants and builders for the soil-analysis composer.

use crate::analysis::features::ImageAnalysis;
use crate::weather::LocationData;

/// System persona for analysis narration.
pub const ANALYSIS_SYSTEM: &str = "You are an expert soil scientist and agronomist. \
    Provide detailed, practical advice for soil management and crop selection.";

pub const ANALYSIS_TEMPERATURE: f32 = 0.7;
pub const ANALYSIS_MAX_TOKENS: u32 = 1000;

/// Builds the analysis prompt embedding the placeholder analysis and any
/// location data ("Not available" when the weather lookup was skipped or failed).
pub fn build_analysis_prompt(
    image_analysis: &ImageAnalysis,
    location_data: Option<&LocationData>,
) -> String {
    let analysis_json = serde_json::to_string(image_analysis).unwrap_or_default();
    let location = match location_data {
        Some(data) => serde_json::to_string(data).unwrap_or_default(),
        None => "Not available".to_string(),
    };

    format!(
        "Analyze this soil data and provide recommendations:\n\
         \n\
         Image Analysis: {analysis_json}\n\
         Location Data: {location}\n\
         \n\
         Provide:\n\
         1. Soil type assessment\n\
         2. Nutrient content estimate\n\
         3. Suitable crops\n\
         4. Improvement recommendations\n\
         5. Water requirements"
    )
}
