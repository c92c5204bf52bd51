// handlers/protected/vehicles.rs - Catalog writes for vehicles

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::database::models::{NewVehicle, Vehicle};
use crate::error::ApiError;
use crate::handlers::utils::{require_f64, require_i64, require_str};
use crate::state::AppState;

/// POST /add/vehicle - Create a vehicle
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let new_vehicle = parse_vehicle(&body)?;
    let vehicle = Vehicle::insert(&state.pool, &new_vehicle).await?;

    tracing::info!("Created vehicle {} ({})", vehicle.uid, vehicle.name);

    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "vehicle created", "vehicle": vehicle})),
    ))
}

/// PUT /update/vehicle - Full-row update, uid carried in the body
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let uid = require_i64(&body, "uid")?;
    let fields = parse_vehicle(&body)?;

    let vehicle = Vehicle::update(&state.pool, uid, &fields)
        .await?
        .ok_or_else(|| ApiError::not_found("vehicle not found"))?;

    // Updates answer with the create shape, status 201 included.
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "vehicle updated", "vehicle": vehicle})),
    ))
}

/// DELETE /delete/vehicle - Remove a vehicle, uid carried in the body
pub async fn remove(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let uid = require_i64(&body, "uid")?;

    let deleted = Vehicle::delete(&state.pool, uid).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("vehicle not found"));
    }

    Ok(Json(json!({"message": "vehicle deleted"})))
}

fn parse_vehicle(body: &Value) -> Result<NewVehicle, ApiError> {
    Ok(NewVehicle {
        name: require_str(body, "name")?,
        url: require_str(body, "url")?,
        model: require_str(body, "model")?,
        vehicle_class: require_str(body, "vehicle_class")?,
        manufacturer: require_str(body, "manufacturer")?,
        cost_in_credits: require_f64(body, "cost_in_credits")?,
        passengers: require_i64(body, "passengers")?,
        cargo_capacity: require_f64(body, "cargo_capacity")?,
    })
}
