use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth;
use crate::database::models::RevokedToken;
use crate::error::ApiError;
use crate::state::AppState;

/// Identity attached to the request after the bearer token checks out.
/// Handlers behind the middleware read it back with `Extension<AuthUser>`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
    pub jti: String,
}

/// Gate for protected routes: requires a Bearer JWT with a valid signature
/// whose jti has not been blocklisted by a logout.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers)?;

    let claims = auth::decode_token(&state.config, &token)
        .map_err(|_| ApiError::unauthorized("invalid or expired token"))?;

    // A good signature is not enough: logout blocklists the jti and a
    // blocklisted token must be refused on every later request.
    if RevokedToken::is_revoked(&state.pool, &claims.jti).await? {
        return Err(ApiError::unauthorized("token has been revoked"));
    }

    request.extensions_mut().insert(AuthUser {
        user_id: claims.sub,
        jti: claims.jti,
    });

    Ok(next.run(request).await)
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("missing Authorization header"))?;

    let value = header
        .to_str()
        .map_err(|_| ApiError::unauthorized("invalid Authorization header"))?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized("Authorization must use Bearer token format"))?
        .trim();

    if token.is_empty() {
        return Err(ApiError::unauthorized("missing bearer token"));
    }

    Ok(token.to_string())
}
