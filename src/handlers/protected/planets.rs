// handlers/protected/planets.rs - Catalog writes for planets

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::database::models::{NewPlanet, Planet};
use crate::error::ApiError;
use crate::handlers::utils::{require_f64, require_i64, require_str};
use crate::state::AppState;

/// POST /add/planet - Create a planet
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let new_planet = parse_planet(&body)?;
    let planet = Planet::insert(&state.pool, &new_planet).await?;

    tracing::info!("Created planet {} ({})", planet.uid, planet.name);

    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "planet created", "planet": planet})),
    ))
}

/// PUT /update/planet - Full-row update, uid carried in the body
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let uid = require_i64(&body, "uid")?;
    let fields = parse_planet(&body)?;

    let planet = Planet::update(&state.pool, uid, &fields)
        .await?
        .ok_or_else(|| ApiError::not_found("planet not found"))?;

    // Updates answer with the create shape, status 201 included.
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "planet updated", "planet": planet})),
    ))
}

/// DELETE /delete/planet - Remove a planet, uid carried in the body
pub async fn remove(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let uid = require_i64(&body, "uid")?;

    let deleted = Planet::delete(&state.pool, uid).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("planet not found"));
    }

    Ok(Json(json!({"message": "planet deleted"})))
}

fn parse_planet(body: &Value) -> Result<NewPlanet, ApiError> {
    Ok(NewPlanet {
        name: require_str(body, "name")?,
        url: require_str(body, "url")?,
        diameter: require_f64(body, "diameter")?,
        rotation_period: require_f64(body, "rotation_period")?,
        orbital_period: require_i64(body, "orbital_period")?,
        gravity: require_f64(body, "gravity")?,
        population: require_f64(body, "population")?,
        climate: require_str(body, "climate")?,
    })
}
