#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored user. `history` holds the embedded search-history array (JSONB).
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub history: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// One persisted record of a soil-analysis request, embedded in the user's
/// history array. Image payload and AI response are truncated before storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "searchedImg")]
    pub searched_img: String,
    pub lat: Option<String>,
    pub long: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub ai_response: String,
}

impl HistoryEntry {
    pub fn new(
        soil_image: &str,
        lat: Option<f64>,
        long: Option<f64>,
        ai_response: &str,
    ) -> Self {
        Self {
            searched_img: truncate_with_ellipsis(soil_image, 100),
            lat: lat.map(|v| v.to_string()),
            long: long.map(|v| v.to_string()),
            timestamp: Utc::now(),
            ai_response: truncate_with_ellipsis(ai_response, 500),
        }
    }
}

/// Returns the first `max_chars` characters followed by `...` when the input
/// is longer; the input unchanged otherwise.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_input_gets_ellipsis() {
        let input = "x".repeat(150);
        let truncated = truncate_with_ellipsis(&input, 100);
        assert_eq!(truncated.len(), 103);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_short_input_unchanged() {
        assert_eq!(truncate_with_ellipsis("short", 100), "short");
    }

    #[test]
    fn test_truncate_exact_length_unchanged() {
        let input = "y".repeat(100);
        assert_eq!(truncate_with_ellipsis(&input, 100), input);
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let input = "é".repeat(120);
        let truncated = truncate_with_ellipsis(&input, 100);
        assert_eq!(truncated.chars().count(), 103);
    }

    #[test]
    fn test_history_entry_truncates_image_and_response() {
        let image = "a".repeat(400);
        let response = "b".repeat(600);
        let entry = HistoryEntry::new(&image, Some(28.67), None, &response);
        assert_eq!(entry.searched_img.len(), 103);
        assert_eq!(entry.ai_response.len(), 503);
        assert_eq!(entry.lat.as_deref(), Some("28.67"));
        assert_eq!(entry.long, None);
    }

    #[test]
    fn test_history_entry_serializes_searched_img_key() {
        let entry = HistoryEntry::new("img", None, None, "ok");
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("searchedImg").is_some());
        assert!(json.get("searched_img").is_none());
    }
}
