use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::analysis::features::ImageFeatures;
use crate::weather::LocationContext;

/// One chat document per user; `chat_history` is the embedded entry array (JSONB).
#[derive(Debug, Clone, FromRow)]
pub struct ChatDocumentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub chat_history: serde_json::Value,
}

/// Classification and enrichment flags attached to an enriched chat entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMetadata {
    pub has_image_analysis: bool,
    pub image_hash: Option<String>,
    pub has_location: bool,
    pub query_type: String,
}

/// One persisted conversational exchange.
/// Metadata and snapshots are only present for enriched chat-endpoint entries;
/// entries appended by the analysis endpoint carry message/response/timestamp only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEntry {
    pub user_message: String,
    pub ai_response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ChatMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_features: Option<ImageFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_context: Option<LocationContext>,
    pub timestamp: DateTime<Utc>,
}

impl ChatEntry {
    /// A bare exchange with no enrichment, as appended by the analysis endpoint.
    pub fn bare(user_message: String, ai_response: String) -> Self {
        Self {
            user_message,
            ai_response,
            metadata: None,
            image_features: None,
            location_context: None,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_entry_omits_enrichment_fields() {
        let entry = ChatEntry::bare("hello".to_string(), "hi".to_string());
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("metadata").is_none());
        assert!(json.get("image_features").is_none());
        assert!(json.get("location_context").is_none());
        assert_eq!(json["user_message"], "hello");
    }

    #[test]
    fn test_enriched_entry_round_trips() {
        let entry = ChatEntry {
            user_message: "What crop should I plant?".to_string(),
            ai_response: "Wheat suits clay loam.".to_string(),
            metadata: Some(ChatMetadata {
                has_image_analysis: true,
                image_hash: Some("ab12cd34".to_string()),
                has_location: false,
                query_type: "crop_selection".to_string(),
            }),
            image_features: None,
            location_context: None,
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: ChatEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.metadata.unwrap().query_type, "crop_selection");
    }
}
