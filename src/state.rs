use sqlx::SqlitePool;

use crate::config::AppConfig;

/// Shared application state handed to every handler through the `State`
/// extractor. Cloning is cheap; the pool is reference counted internally.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: AppConfig,
}
