use std::env;

/// Runtime configuration assembled from the environment.
///
/// Constructed once in `main` and carried inside `AppState`, so tests can
/// build their own instance instead of sharing process-global settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub token_expiry_hours: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        // Falls back to a local file so the server runs with zero setup
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://holocron.db".to_string());

        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_default();

        let token_expiry_hours = env::var("TOKEN_EXPIRY_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);

        Self {
            port,
            database_url,
            database_max_connections,
            jwt_secret,
            token_expiry_hours,
        }
    }
}
