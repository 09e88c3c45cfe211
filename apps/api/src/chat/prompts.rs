// Prompt constants and builders for the chat composer.

use crate::analysis::features::ImageFeatures;
use crate::weather::LocationContext;

/// System persona for conversational advice.
pub const CHAT_SYSTEM: &str = "You are an expert soil scientist with 20+ years of field experience. \
    You provide practical, actionable advice to farmers and agricultural professionals. \
    You explain complex concepts in simple terms. \
    You always consider the specific context provided (soil type, location, etc.). \
    You are helpful, patient, and thorough in your explanations.";

pub const CHAT_TEMPERATURE: f32 = 0.7;
pub const CHAT_MAX_TOKENS: u32 = 1500;

/// Assembles the chat prompt: optional image-analysis block, optional
/// location block, the user question, then response-structure guidance.
pub fn build_chat_prompt(
    user_message: &str,
    image_features: Option<&ImageFeatures>,
    location_context: Option<&LocationContext>,
) -> String {
    let mut parts = Vec::new();

    if let Some(features) = image_features {
        parts.push(format!(
            "SOIL IMAGE ANALYSIS CONTEXT:\n\
             - Soil Color: {}\n\
             - Texture: {}\n\
             - Moisture Level: {}\n\
             - Organic Matter: {}\n\
             - Image Hash: {}",
            features.color_name,
            features.texture_estimate,
            features.moisture_estimate,
            features.organic_matter_estimate,
            features.image_hash,
        ));
    }

    if let Some(context) = location_context {
        parts.push(format!(
            "LOCATION CONTEXT:\n\
             - Coordinates: {}\n\
             - Weather: Temperature: {}, Humidity: {}",
            context.coordinates,
            format_reading(context.weather.temperature),
            format_reading(context.weather.humidity),
        ));
    }

    parts.push(format!("USER QUESTION: {user_message}"));

    parts.push(format!(
        "The user has provided the above information.\n\
         \n\
         Please provide a comprehensive, practical response that:\n\
         1. Addresses the user's specific question: \"{user_message}\"\n\
         2. References the soil image analysis data if provided\n\
         3. Provides actionable recommendations\n\
         4. Considers location context if available\n\
         5. Uses clear, understandable language for farmers\n\
         \n\
         Structure your response with:\n\
         - Brief summary of the analysis\n\
         - Direct answer to the question\n\
         - Specific recommendations\n\
         - Additional considerations\n\
         \n\
         Be detailed but practical. Avoid overly technical jargon unless necessary."
    ));

    parts.join("\n\n")
}

fn format_reading(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::WeatherSummary;

    fn sample_features() -> ImageFeatures {
        ImageFeatures {
            color_name: "brown_dark".to_string(),
            texture_estimate: "clay_loam".to_string(),
            moisture_estimate: "moderate".to_string(),
            organic_matter_estimate: "medium".to_string(),
            image_hash: "ab12cd34ef56ab78".to_string(),
        }
    }

    #[test]
    fn test_bare_prompt_has_question_only() {
        let prompt = build_chat_prompt("Will wheat grow here?", None, None);
        assert!(prompt.contains("USER QUESTION: Will wheat grow here?"));
        assert!(!prompt.contains("SOIL IMAGE ANALYSIS CONTEXT"));
        assert!(!prompt.contains("LOCATION CONTEXT"));
    }

    #[test]
    fn test_image_block_present_with_features() {
        let prompt = build_chat_prompt("Is this loam?", Some(&sample_features()), None);
        assert!(prompt.contains("SOIL IMAGE ANALYSIS CONTEXT"));
        assert!(prompt.contains("clay_loam"));
        assert!(prompt.contains("ab12cd34ef56ab78"));
    }

    #[test]
    fn test_location_block_present_with_context() {
        let context = LocationContext {
            coordinates: "28.67, 77.21".to_string(),
            weather: WeatherSummary {
                temperature: Some(301.15),
                humidity: Some(64.0),
            },
        };
        let prompt = build_chat_prompt("Too humid?", Some(&sample_features()), Some(&context));
        assert!(prompt.contains("LOCATION CONTEXT"));
        assert!(prompt.contains("28.67, 77.21"));
        assert!(prompt.contains("301.15"));
    }
}
