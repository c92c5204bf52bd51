// handlers/public/auth.rs - POST /register and POST /login

use axum::{extract::State, http::StatusCode, response::Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::auth;
use crate::database::models::{NewUser, User};
use crate::error::{self, ApiError};
use crate::handlers::utils::{optional_bool, optional_i64, optional_str, require_str};
use crate::state::AppState;

/// POST /register - Create a user account
///
/// email, first_name and password are required; the remaining profile
/// fields are optional and fall back to defaults.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let email = require_str(&body, "email")?;
    let first_name = require_str(&body, "first_name")?;
    let password = require_str(&body, "password")?;

    let new_user = NewUser {
        email,
        password: auth::hash_password(&password)?,
        is_active: optional_bool(&body, "is_active").unwrap_or(true),
        first_name,
        last_name: optional_str(&body, "last_name").unwrap_or_default(),
        subscription_date: optional_str(&body, "subscription_date")
            .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string()),
        birth_date: optional_i64(&body, "birth_date"),
        country: optional_str(&body, "country"),
    };

    let user = match User::insert(&state.pool, &new_user).await {
        Ok(user) => user,
        Err(e) if error::is_unique_violation(&e) => {
            return Err(ApiError::conflict("email is already registered"));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("Registered user {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "user created", "user": user})),
    ))
}

/// POST /login - Exchange credentials for a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let email = require_str(&body, "email")?;
    let password = require_str(&body, "password")?;

    let Some(user) = User::find_by_email(&state.pool, &email).await? else {
        return Ok(Json(login_rejected()));
    };

    if !auth::verify_password(&password, &user.password)? {
        return Ok(Json(login_rejected()));
    }

    let token = auth::issue_token(&state.config, user.id)?;

    tracing::info!("Issued session token for user {}", user.id);

    Ok(Json(json!({"token": token})))
}

// Unknown email and wrong password must not be distinguishable by the caller.
fn login_rejected() -> Value {
    json!({"message": "invalid email or password"})
}
