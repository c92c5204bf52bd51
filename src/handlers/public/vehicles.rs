// handlers/public/vehicles.rs - Catalog reads for vehicles

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::database::models::Vehicle;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /vehicles - List every vehicle in the catalog
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Vehicle>>, ApiError> {
    let vehicles = Vehicle::list(&state.pool).await?;
    Ok(Json(vehicles))
}

/// GET /vehicles/:uid - Fetch one vehicle by uid
pub async fn get(
    State(state): State<AppState>,
    Path(uid): Path<i64>,
) -> Result<Json<Vehicle>, ApiError> {
    let vehicle = Vehicle::find_by_uid(&state.pool, uid)
        .await?
        .ok_or_else(|| ApiError::not_found("vehicle not found"))?;
    Ok(Json(vehicle))
}
