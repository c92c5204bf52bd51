// handlers/public/favorites.rs - Favorite management
//
// POST/DELETE /favorite/{people,planet,vehicle}/:uid plus the combined
// POST /favorites listing. Adds check the target first, then the user,
// then the pair; success responses embed the join row with its target and
// owning user one level deep.

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::database::models::{
    FavoritePerson, FavoritePersonRecord, FavoritePlanet, FavoritePlanetRecord, FavoriteRecord,
    FavoriteVehicle, FavoriteVehicleRecord, Person, Planet, User, Vehicle,
};
use crate::error::ApiError;
use crate::handlers::utils::require_i64;
use crate::state::AppState;

/// POST /favorite/people/:uid - Mark a person as a user's favorite
pub async fn add_person(
    State(state): State<AppState>,
    Path(uid): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<FavoritePersonRecord>, ApiError> {
    let user_id = require_i64(&body, "user_id")?;

    let person = Person::find_by_uid(&state.pool, uid)
        .await?
        .ok_or_else(|| ApiError::not_found("person not found"))?;
    let user = User::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    if FavoritePerson::find_pair(&state.pool, user_id, uid).await?.is_some() {
        return Err(ApiError::conflict("favorite already exists"));
    }

    let favorite = FavoritePerson::insert(&state.pool, user_id, uid).await?;
    Ok(Json(favorite.into_record(person, user)))
}

/// DELETE /favorite/people/:uid - Remove a person favorite
pub async fn remove_person(
    State(state): State<AppState>,
    Path(uid): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let user_id = require_i64(&body, "user_id")?;

    Person::find_by_uid(&state.pool, uid)
        .await?
        .ok_or_else(|| ApiError::not_found("person not found"))?;
    User::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    let deleted = FavoritePerson::delete(&state.pool, user_id, uid).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("favorite not found"));
    }

    Ok(Json(json!({"message": "favorite removed"})))
}

/// POST /favorite/planet/:uid - Mark a planet as a user's favorite
pub async fn add_planet(
    State(state): State<AppState>,
    Path(uid): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<FavoritePlanetRecord>, ApiError> {
    let user_id = require_i64(&body, "user_id")?;

    let planet = Planet::find_by_uid(&state.pool, uid)
        .await?
        .ok_or_else(|| ApiError::not_found("planet not found"))?;
    let user = User::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    if FavoritePlanet::find_pair(&state.pool, user_id, uid).await?.is_some() {
        return Err(ApiError::conflict("favorite already exists"));
    }

    let favorite = FavoritePlanet::insert(&state.pool, user_id, uid).await?;
    Ok(Json(favorite.into_record(planet, user)))
}

/// DELETE /favorite/planet/:uid - Remove a planet favorite
pub async fn remove_planet(
    State(state): State<AppState>,
    Path(uid): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let user_id = require_i64(&body, "user_id")?;

    Planet::find_by_uid(&state.pool, uid)
        .await?
        .ok_or_else(|| ApiError::not_found("planet not found"))?;
    User::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    let deleted = FavoritePlanet::delete(&state.pool, user_id, uid).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("favorite not found"));
    }

    Ok(Json(json!({"message": "favorite removed"})))
}

/// POST /favorite/vehicle/:uid - Mark a vehicle as a user's favorite
pub async fn add_vehicle(
    State(state): State<AppState>,
    Path(uid): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<FavoriteVehicleRecord>, ApiError> {
    let user_id = require_i64(&body, "user_id")?;

    let vehicle = Vehicle::find_by_uid(&state.pool, uid)
        .await?
        .ok_or_else(|| ApiError::not_found("vehicle not found"))?;
    let user = User::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    if FavoriteVehicle::find_pair(&state.pool, user_id, uid).await?.is_some() {
        return Err(ApiError::conflict("favorite already exists"));
    }

    let favorite = FavoriteVehicle::insert(&state.pool, user_id, uid).await?;
    Ok(Json(favorite.into_record(vehicle, user)))
}

/// DELETE /favorite/vehicle/:uid - Remove a vehicle favorite
pub async fn remove_vehicle(
    State(state): State<AppState>,
    Path(uid): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let user_id = require_i64(&body, "user_id")?;

    Vehicle::find_by_uid(&state.pool, uid)
        .await?
        .ok_or_else(|| ApiError::not_found("vehicle not found"))?;
    User::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    let deleted = FavoriteVehicle::delete(&state.pool, user_id, uid).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("favorite not found"));
    }

    Ok(Json(json!({"message": "favorite removed"})))
}

/// POST /favorites - Combined favorites listing for one user
///
/// Entries come back grouped people, then vehicles, then planets, each
/// group ordered by favorite id.
pub async fn list(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Vec<FavoriteRecord>>, ApiError> {
    // A body without user_id names no account, so it fails the same way
    // an unknown id does.
    let user_id = body
        .get("user_id")
        .and_then(Value::as_i64)
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    let user = User::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    let mut records = Vec::new();

    for favorite in FavoritePerson::list_for_user(&state.pool, user_id).await? {
        let person = Person::find_by_uid(&state.pool, favorite.person_uid)
            .await?
            .ok_or_else(|| ApiError::internal("favorite references a missing person"))?;
        records.push(FavoriteRecord::Person(favorite.into_record(person, user.clone())));
    }

    for favorite in FavoriteVehicle::list_for_user(&state.pool, user_id).await? {
        let vehicle = Vehicle::find_by_uid(&state.pool, favorite.vehicle_uid)
            .await?
            .ok_or_else(|| ApiError::internal("favorite references a missing vehicle"))?;
        records.push(FavoriteRecord::Vehicle(favorite.into_record(vehicle, user.clone())));
    }

    for favorite in FavoritePlanet::list_for_user(&state.pool, user_id).await? {
        let planet = Planet::find_by_uid(&state.pool, favorite.planet_uid)
            .await?
            .ok_or_else(|| ApiError::internal("favorite references a missing planet"))?;
        records.push(FavoriteRecord::Planet(favorite.into_record(planet, user.clone())));
    }

    Ok(Json(records))
}
