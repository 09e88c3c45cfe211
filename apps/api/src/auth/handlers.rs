use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::issue_token;
use crate::errors::AppError;
use crate::state::AppState;
use crate::store;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// POST /register
///
/// Creates a user with an empty history. Duplicate email is Conflict, both
/// from the up-front check and from the unique constraint under a race.
pub async fn handle_register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    let username = request.username.trim();
    if username.len() < 3 || username.len() > 50 {
        return Err(AppError::Validation(
            "username must be between 3 and 50 characters".to_string(),
        ));
    }
    if !request.email.contains('@') {
        return Err(AppError::Validation("email is not valid".to_string()));
    }
    if request.password.len() < 8 {
        return Err(AppError::Validation(
            "password must be at least 8 characters".to_string(),
        ));
    }

    if store::users::find_user_by_email(&state.db, &request.email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let password_hash = hash_password(&request.password)?;
    let user_id =
        store::users::create_user(&state.db, username, &request.email, &password_hash).await?;

    Ok(Json(RegisterResponse {
        user_id,
        message: "User created successfully".to_string(),
    }))
}

/// POST /login
///
/// Verifies the password against the stored hash and returns a bearer JWT.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = store::users::find_user_by_email(&state.db, &request.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(&request.password, &user.password_hash) {
        return Err(AppError::Unauthorized);
    }

    let access_token = issue_token(&state.config.jwt_secret, user.id)?;

    Ok(Json(LoginResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
