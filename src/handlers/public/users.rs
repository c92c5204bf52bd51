// handlers/public/users.rs - /user account management
//
// These endpoints sit outside the JWT gate while catalog writes sit behind
// it. The asymmetry is part of the API surface, not an oversight.

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::auth;
use crate::database::models::{NewUser, User};
use crate::error::{self, ApiError};
use crate::handlers::utils::{optional_i64, optional_str, require_i64, require_str};
use crate::state::AppState;

/// GET /user - List every account
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = User::list(&state.pool).await?;
    Ok(Json(users))
}

/// GET /user/:id - Fetch one account by id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = User::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;
    Ok(Json(user))
}

/// POST /user - Fetch one account by id carried in the body
pub async fn lookup(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<User>, ApiError> {
    let id = require_i64(&body, "id")?;
    let user = User::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;
    Ok(Json(user))
}

/// PUT /user/update - Full-profile update, id carried in the body
///
/// email, first_name and password must be resupplied and the password is
/// re-hashed. The active flag and subscription date carry over from the
/// stored row.
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<User>, ApiError> {
    let id = require_i64(&body, "id")?;
    let email = require_str(&body, "email")?;
    let first_name = require_str(&body, "first_name")?;
    let password = require_str(&body, "password")?;

    let existing = User::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    let fields = NewUser {
        email,
        password: auth::hash_password(&password)?,
        is_active: existing.is_active,
        first_name,
        last_name: optional_str(&body, "last_name").unwrap_or(existing.last_name),
        subscription_date: existing.subscription_date,
        birth_date: optional_i64(&body, "birth_date").or(existing.birth_date),
        country: optional_str(&body, "country").or(existing.country),
    };

    let updated = match User::update(&state.pool, id, &fields).await {
        Ok(Some(user)) => user,
        Ok(None) => return Err(ApiError::not_found("user not found")),
        Err(e) if error::is_unique_violation(&e) => {
            return Err(ApiError::conflict("email is already registered"));
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Json(updated))
}

/// DELETE /user/delete - Remove an account, id carried in the body
///
/// Favorites referencing the account go with it via ON DELETE CASCADE.
pub async fn remove(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let id = require_i64(&body, "id")?;

    let deleted = User::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("user not found"));
    }

    tracing::info!("Deleted user {}", id);

    Ok(Json(json!({"message": "user deleted"})))
}
