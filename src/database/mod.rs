use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::AppConfig;

pub mod models;

/// Table definitions, applied in order at startup. `IF NOT EXISTS` keeps the
/// pass idempotent across restarts against the same database file.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        is_active INTEGER NOT NULL DEFAULT 1,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL DEFAULT '',
        subscription_date TEXT NOT NULL,
        birth_date INTEGER,
        country TEXT
    )",
    "CREATE TABLE IF NOT EXISTS people (
        uid INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        url TEXT NOT NULL,
        height REAL NOT NULL,
        mass REAL NOT NULL,
        hair_color TEXT NOT NULL,
        skin_color TEXT NOT NULL,
        eye_color TEXT NOT NULL,
        birth_year REAL NOT NULL,
        gender TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS planets (
        uid INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        url TEXT NOT NULL,
        diameter REAL NOT NULL,
        rotation_period REAL NOT NULL,
        orbital_period INTEGER NOT NULL,
        gravity REAL NOT NULL,
        population REAL NOT NULL,
        climate TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS vehicles (
        uid INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        url TEXT NOT NULL,
        model TEXT NOT NULL,
        vehicle_class TEXT NOT NULL,
        manufacturer TEXT NOT NULL,
        cost_in_credits REAL NOT NULL,
        passengers INTEGER NOT NULL,
        cargo_capacity REAL NOT NULL
    )",
    // Favorite pairs are deliberately not UNIQUE at the schema level; the
    // handlers check-then-insert, and the concurrent-duplicate window is a
    // known gap of that approach.
    "CREATE TABLE IF NOT EXISTS favorite_people (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        person_uid INTEGER NOT NULL REFERENCES people(uid) ON DELETE CASCADE
    )",
    "CREATE TABLE IF NOT EXISTS favorite_planets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        planet_uid INTEGER NOT NULL REFERENCES planets(uid) ON DELETE CASCADE
    )",
    "CREATE TABLE IF NOT EXISTS favorite_vehicles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        vehicle_uid INTEGER NOT NULL REFERENCES vehicles(uid) ON DELETE CASCADE
    )",
    // Rows are written once at logout and never pruned. `token` holds the
    // jti claim, not the full JWT.
    "CREATE TABLE IF NOT EXISTS revoked_tokens (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        token TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL,
        create_at TEXT NOT NULL,
        is_blocked INTEGER NOT NULL DEFAULT 1
    )",
];

/// Open the pool described by the configuration, creating the database file
/// on first run.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_with(options)
        .await?;

    info!("Opened database pool for {}", config.database_url);
    Ok(pool)
}

/// Bring the schema up to date.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Ping the database to confirm connectivity.
pub async fn health_check(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> AppConfig {
        AppConfig {
            port: 0,
            database_url: "sqlite::memory:".to_string(),
            database_max_connections: 1,
            jwt_secret: String::new(),
            token_expiry_hours: 24,
        }
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = connect(&memory_config()).await.unwrap();
        migrate(&pool).await.unwrap();
        migrate(&pool).await.unwrap();
        health_check(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let pool = connect(&memory_config()).await.unwrap();
        migrate(&pool).await.unwrap();

        let result = sqlx::query("INSERT INTO favorite_people (user_id, person_uid) VALUES (999, 999)")
            .execute(&pool)
            .await;
        assert!(result.is_err());
    }
}
