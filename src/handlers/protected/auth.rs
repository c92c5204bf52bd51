// handlers/protected/auth.rs - POST /logout and GET /protected

use axum::{extract::State, response::Json, Extension};
use serde_json::{json, Value};

use crate::database::models::{RevokedToken, User};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// POST /logout - Revoke the presented token
///
/// Blocklists the token's jti, so this exact token is refused from the
/// next request on. Other live tokens for the same user keep working.
pub async fn logout(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<Value>, ApiError> {
    let user = User::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    RevokedToken::insert(&state.pool, &auth_user.jti, &user.email).await?;

    tracing::info!("Revoked session token for user {}", user.id);

    Ok(Json(json!({"message": "logout successful"})))
}

/// GET /protected - Session probe
///
/// Returns the caller's account; the interesting part is reaching the
/// handler at all, which proves the token is valid and not revoked.
pub async fn whoami(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<Value>, ApiError> {
    let user = User::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    Ok(Json(json!({"message": "access granted", "user": user})))
}
