pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::analysis;
use crate::auth;
use crate::chat;
use crate::history;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/ask/ai", post(analysis::handlers::handle_ask_ai))
        .route("/chat", post(chat::handlers::handle_chat))
        .route("/user/history", get(history::handlers::handle_user_history))
        .route(
            "/user/chat-history",
            get(history::handlers::handle_chat_history),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/register", post(auth::handlers::handle_register))
        .route("/login", post(auth::handlers::handle_login))
        .merge(protected)
        .with_state(state)
}
