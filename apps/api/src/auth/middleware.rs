use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::auth::token::decode_token;
use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;
use crate::store;

/// The resolved user for the current request, inserted into request extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserRow);

/// Extracts the bearer token, validates it, and loads the user it names.
/// Missing header, bad token, or unknown user all resolve to Unauthorized.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    let claims = decode_token(&state.config.jwt_secret, token)?;

    let user = store::users::get_user(&state.db, claims.sub)
        .await?
        .ok_or(AppError::Unauthorized)?;

    req.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(req).await)
}
