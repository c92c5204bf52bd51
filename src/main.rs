use holocron_api::config::AppConfig;
use holocron_api::database;
use holocron_api::routes;
use holocron_api::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up PORT, DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    if config.jwt_secret.is_empty() {
        tracing::warn!("JWT_SECRET is empty; login and protected routes will refuse tokens");
    }

    let pool = database::connect(&config)
        .await
        .unwrap_or_else(|e| panic!("failed to open database {}: {}", config.database_url, e));
    database::migrate(&pool)
        .await
        .unwrap_or_else(|e| panic!("failed to run migrations: {}", e));
    tracing::info!("Database ready at {}", config.database_url);

    let port = config.port;
    let state = AppState { pool, config };
    let app = routes::app(state);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Holocron API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
