use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

/// Row in the token blocklist. `token` holds the jti claim of a revoked
/// JWT, not the JWT itself, so one row stays small no matter the token size.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RevokedToken {
    pub id: i64,
    pub token: String,
    pub email: String,
    pub create_at: DateTime<Utc>,
    pub is_blocked: bool,
}

impl RevokedToken {
    pub async fn insert(pool: &SqlitePool, jti: &str, email: &str) -> Result<RevokedToken, sqlx::Error> {
        sqlx::query_as::<_, RevokedToken>(
            "INSERT INTO revoked_tokens (token, email, create_at, is_blocked) VALUES (?, ?, ?, 1) RETURNING *",
        )
        .bind(jti)
        .bind(email)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
    }

    /// True when the jti has an active blocklist entry. Rows are never
    /// pruned or unblocked, so revocation is permanent for a token's life.
    pub async fn is_revoked(pool: &SqlitePool, jti: &str) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM revoked_tokens WHERE token = ? AND is_blocked = 1")
                .bind(jti)
                .fetch_optional(pool)
                .await?;
        Ok(row.is_some())
    }
}
