// handlers/protected/people.rs - Catalog writes for people

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::database::models::{NewPerson, Person};
use crate::error::ApiError;
use crate::handlers::utils::{require_f64, require_i64, require_str};
use crate::state::AppState;

/// POST /add/people - Create a person
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let new_person = parse_person(&body)?;
    let person = Person::insert(&state.pool, &new_person).await?;

    tracing::info!("Created person {} ({})", person.uid, person.name);

    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "person created", "person": person})),
    ))
}

/// PUT /update/people - Full-row update, uid carried in the body
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let uid = require_i64(&body, "uid")?;
    let fields = parse_person(&body)?;

    let person = Person::update(&state.pool, uid, &fields)
        .await?
        .ok_or_else(|| ApiError::not_found("person not found"))?;

    // Updates answer with the create shape, status 201 included.
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "person updated", "person": person})),
    ))
}

/// DELETE /delete/people - Remove a person, uid carried in the body
pub async fn remove(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let uid = require_i64(&body, "uid")?;

    let deleted = Person::delete(&state.pool, uid).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("person not found"));
    }

    Ok(Json(json!({"message": "person deleted"})))
}

fn parse_person(body: &Value) -> Result<NewPerson, ApiError> {
    Ok(NewPerson {
        name: require_str(body, "name")?,
        url: require_str(body, "url")?,
        height: require_f64(body, "height")?,
        mass: require_f64(body, "mass")?,
        hair_color: require_str(body, "hair_color")?,
        skin_color: require_str(body, "skin_color")?,
        eye_color: require_str(body, "eye_color")?,
        birth_year: require_f64(body, "birth_year")?,
        gender: require_str(body, "gender")?,
    })
}
