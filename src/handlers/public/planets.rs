// handlers/public/planets.rs - Catalog reads for planets

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::database::models::Planet;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /planets - List every planet in the catalog
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Planet>>, ApiError> {
    let planets = Planet::list(&state.pool).await?;
    Ok(Json(planets))
}

/// GET /planets/:uid - Fetch one planet by uid
pub async fn get(
    State(state): State<AppState>,
    Path(uid): Path<i64>,
) -> Result<Json<Planet>, ApiError> {
    let planet = Planet::find_by_uid(&state.pool, uid)
        .await?
        .ok_or_else(|| ApiError::not_found("planet not found"))?;
    Ok(Json(planet))
}
