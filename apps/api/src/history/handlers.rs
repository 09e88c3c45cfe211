use axum::{extract::State, Extension, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::middleware::CurrentUser;
use crate::errors::AppError;
use crate::state::AppState;
use crate::store;

#[derive(Debug, Serialize)]
pub struct UserHistoryResponse {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub history: serde_json::Value,
    pub total_searches: usize,
}

#[derive(Debug, Serialize)]
pub struct ChatHistoryResponse {
    pub user_id: Uuid,
    #[serde(rename = "chatHistory")]
    pub chat_history: serde_json::Value,
    pub total_chats: usize,
}

/// GET /user/history
///
/// Returns the user's search history from the row the auth middleware loaded.
pub async fn handle_user_history(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<UserHistoryResponse> {
    let total_searches = user.history.as_array().map(Vec::len).unwrap_or(0);

    Json(UserHistoryResponse {
        user_id: user.id,
        username: user.username,
        email: user.email,
        history: user.history,
        total_searches,
    })
}

/// GET /user/chat-history
///
/// Returns the user's chat document, or an empty history if none exists yet.
pub async fn handle_chat_history(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ChatHistoryResponse>, AppError> {
    let document = store::chats::get_chat_document(&state.db, user.id).await?;

    let chat_history = document
        .map(|doc| doc.chat_history)
        .unwrap_or_else(|| serde_json::Value::Array(Vec::new()));
    let total_chats = chat_history.as_array().map(Vec::len).unwrap_or(0);

    Ok(Json(ChatHistoryResponse {
        user_id: user.id,
        chat_history,
        total_chats,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_history_response_uses_camel_case_key() {
        let response = ChatHistoryResponse {
            user_id: Uuid::new_v4(),
            chat_history: serde_json::Value::Array(Vec::new()),
            total_chats: 0,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("chatHistory").is_some());
        assert!(json.get("chat_history").is_none());
    }
}
