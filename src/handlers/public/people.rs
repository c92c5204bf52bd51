// handlers/public/people.rs - Catalog reads for people

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::database::models::Person;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /people - List every person in the catalog
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Person>>, ApiError> {
    let people = Person::list(&state.pool).await?;
    Ok(Json(people))
}

/// GET /people/:uid - Fetch one person by uid
pub async fn get(
    State(state): State<AppState>,
    Path(uid): Path<i64>,
) -> Result<Json<Person>, ApiError> {
    let person = Person::find_by_uid(&state.pool, uid)
        .await?
        .ok_or_else(|| ApiError::not_found("person not found"))?;
    Ok(Json(person))
}
