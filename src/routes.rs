// routes.rs - Router assembly
//
// Two tiers: public groups merge straight in, gated groups carry a
// route_layer that runs jwt_auth_middleware before their handlers.

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::database;
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Service
        .route("/", get(root))
        .route("/health", get(health))
        // Accounts and sessions
        .merge(account_routes())
        .merge(session_routes(state.clone()))
        // Catalog
        .merge(catalog_read_routes())
        .merge(catalog_write_routes(state.clone()))
        // Users and favorites
        .merge(user_routes())
        .merge(favorite_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn account_routes() -> Router<AppState> {
    use axum::routing::post;
    use crate::handlers::public::auth;

    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

fn session_routes(state: AppState) -> Router<AppState> {
    use axum::routing::post;
    use crate::handlers::protected::auth;

    Router::new()
        .route("/logout", post(auth::logout))
        .route("/protected", get(auth::whoami))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

fn catalog_read_routes() -> Router<AppState> {
    use crate::handlers::public::{people, planets, vehicles};

    Router::new()
        .route("/people", get(people::list))
        .route("/people/:uid", get(people::get))
        .route("/planets", get(planets::list))
        .route("/planets/:uid", get(planets::get))
        .route("/vehicles", get(vehicles::list))
        .route("/vehicles/:uid", get(vehicles::get))
}

fn catalog_write_routes(state: AppState) -> Router<AppState> {
    use axum::routing::{delete, post, put};
    use crate::handlers::protected::{people, planets, vehicles};

    Router::new()
        .route("/add/people", post(people::create))
        .route("/add/planet", post(planets::create))
        .route("/add/vehicle", post(vehicles::create))
        .route("/update/people", put(people::update))
        .route("/update/planet", put(planets::update))
        .route("/update/vehicle", put(vehicles::update))
        .route("/delete/people", delete(people::remove))
        .route("/delete/planet", delete(planets::remove))
        .route("/delete/vehicle", delete(vehicles::remove))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

fn user_routes() -> Router<AppState> {
    use axum::routing::{delete, put};
    use crate::handlers::public::users;

    Router::new()
        .route("/user", get(users::list).post(users::lookup))
        .route("/user/:id", get(users::get))
        .route("/user/update", put(users::update))
        .route("/user/delete", delete(users::remove))
}

fn favorite_routes() -> Router<AppState> {
    use axum::routing::post;
    use crate::handlers::public::favorites;

    Router::new()
        .route(
            "/favorite/people/:uid",
            post(favorites::add_person).delete(favorites::remove_person),
        )
        .route(
            "/favorite/planet/:uid",
            post(favorites::add_planet).delete(favorites::remove_planet),
        )
        .route(
            "/favorite/vehicle/:uid",
            post(favorites::add_vehicle).delete(favorites::remove_vehicle),
        )
        .route("/favorites", post(favorites::list))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Holocron API",
        "version": version,
        "description": "Star Wars catalog backend with JWT sessions and per-user favorites",
        "endpoints": {
            "auth": "/register, /login (public), /logout, /protected (token required)",
            "people": "/people[/:uid] (public reads)",
            "planets": "/planets[/:uid] (public reads)",
            "vehicles": "/vehicles[/:uid] (public reads)",
            "users": "/user[/:id], /user/update, /user/delete (public)",
            "favorites": "/favorite/{people,planet,vehicle}/:uid, /favorites (public)",
            "catalog_writes": "/add/*, /update/*, /delete/* (token required)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
