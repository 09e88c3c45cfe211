//! Image decoding and feature extraction.
//!
//! Real image analysis is not implemented. Extraction sits behind the
//! `FeatureExtractor` trait so a real backend can be swapped into `AppState`
//! without touching composer or handler code; the default backend returns a
//! fixed soil profile plus a content hash.

use async_trait::async_trait;
use base64::prelude::{Engine, BASE64_STANDARD};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::AppError;

/// The fixed analysis object returned by the analyze endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub color_profile: String,
    pub texture_estimate: String,
    pub moisture_level: String,
}

impl ImageAnalysis {
    pub fn placeholder() -> Self {
        Self {
            color_profile: "brown_dark".to_string(),
            texture_estimate: "clay_loam".to_string(),
            moisture_level: "moderate".to_string(),
        }
    }
}

/// Feature snapshot attached to enriched chat entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageFeatures {
    pub color_name: String,
    pub texture_estimate: String,
    pub moisture_estimate: String,
    pub organic_matter_estimate: String,
    pub image_hash: String,
}

/// Pluggable feature backend, carried in `AppState` as `Arc<dyn FeatureExtractor>`.
#[async_trait]
pub trait FeatureExtractor: Send + Sync {
    async fn extract(&self, image_bytes: &[u8]) -> Result<ImageFeatures, AppError>;
}

/// Default backend: fixed profile plus a content hash so repeated uploads of
/// the same image are identifiable.
pub struct PlaceholderExtractor;

#[async_trait]
impl FeatureExtractor for PlaceholderExtractor {
    async fn extract(&self, image_bytes: &[u8]) -> Result<ImageFeatures, AppError> {
        Ok(ImageFeatures {
            color_name: "brown_dark".to_string(),
            texture_estimate: "clay_loam".to_string(),
            moisture_estimate: "moderate".to_string(),
            organic_matter_estimate: "medium".to_string(),
            image_hash: content_hash(image_bytes),
        })
    }
}

/// Decodes the base64 payload and verifies it parses as an image.
/// Both failure modes map to `AppError::Analysis` (HTTP 500, not 400).
pub fn decode_image(image_base64: &str) -> Result<Vec<u8>, AppError> {
    let bytes = BASE64_STANDARD
        .decode(image_base64)
        .map_err(|e| AppError::Analysis(format!("invalid base64 image payload: {e}")))?;

    image::load_from_memory(&bytes)
        .map_err(|e| AppError::Analysis(format!("unreadable image payload: {e}")))?;

    Ok(bytes)
}

fn content_hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest
        .iter()
        .take(8)
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 PNG
    const TINY_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

    #[test]
    fn test_decode_image_accepts_valid_png() {
        let bytes = decode_image(TINY_PNG_BASE64).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_decode_image_rejects_bad_base64() {
        let result = decode_image("not base64!!!");
        assert!(matches!(result, Err(AppError::Analysis(_))));
    }

    #[test]
    fn test_decode_image_rejects_non_image_bytes() {
        let encoded = BASE64_STANDARD.encode(b"plain text, not an image");
        let result = decode_image(&encoded);
        assert!(matches!(result, Err(AppError::Analysis(_))));
    }

    #[test]
    fn test_content_hash_is_stable() {
        assert_eq!(content_hash(b"soil"), content_hash(b"soil"));
        assert_ne!(content_hash(b"soil"), content_hash(b"sand"));
        assert_eq!(content_hash(b"soil").len(), 16);
    }

    #[tokio::test]
    async fn test_placeholder_extractor_hashes_content() {
        let extractor = PlaceholderExtractor;
        let features = extractor.extract(b"image bytes").await.unwrap();
        assert_eq!(features.color_name, "brown_dark");
        assert_eq!(features.image_hash, content_hash(b"image bytes"));
    }
}
