use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

/// User account row.
///
/// The password digest and the active flag are stored but never serialized;
/// every API response that embeds a user goes through this struct.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub is_active: bool,
    pub first_name: String,
    pub last_name: String,
    pub subscription_date: String,
    pub birth_date: Option<i64>,
    pub country: Option<String>,
}

/// Column values for an insert or full-row update. `password` must already
/// be a bcrypt digest by the time it reaches this struct.
#[derive(Debug)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub is_active: bool,
    pub first_name: String,
    pub last_name: String,
    pub subscription_date: String,
    pub birth_date: Option<i64>,
    pub country: Option<String>,
}

impl User {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn insert(pool: &SqlitePool, new: &NewUser) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password, is_active, first_name, last_name, subscription_date, birth_date, country) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&new.email)
        .bind(&new.password)
        .bind(new.is_active)
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.subscription_date)
        .bind(new.birth_date)
        .bind(&new.country)
        .fetch_one(pool)
        .await
    }

    /// Full-row replace. Returns `None` when no row has that id.
    pub async fn update(pool: &SqlitePool, id: i64, fields: &NewUser) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET email = ?, password = ?, is_active = ?, first_name = ?, last_name = ?, \
             subscription_date = ?, birth_date = ?, country = ? WHERE id = ? RETURNING *",
        )
        .bind(&fields.email)
        .bind(&fields.password)
        .bind(fields.is_active)
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.subscription_date)
        .bind(fields.birth_date)
        .bind(&fields.country)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::database;
    use crate::error::is_unique_violation;

    async fn pool() -> SqlitePool {
        let config = AppConfig {
            port: 0,
            database_url: "sqlite::memory:".to_string(),
            database_max_connections: 1,
            jwt_secret: String::new(),
            token_expiry_hours: 24,
        };
        let pool = database::connect(&config).await.unwrap();
        database::migrate(&pool).await.unwrap();
        pool
    }

    fn sample(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password: "digest".to_string(),
            is_active: true,
            first_name: "Leia".to_string(),
            last_name: "Organa".to_string(),
            subscription_date: "2026-08-25".to_string(),
            birth_date: None,
            country: Some("Alderaan".to_string()),
        }
    }

    #[tokio::test]
    async fn insert_assigns_ids_and_lookup_finds_them() {
        let pool = pool().await;
        let user = User::insert(&pool, &sample("leia@rebellion.org")).await.unwrap();
        assert!(user.id > 0);

        let by_email = User::find_by_email(&pool, "leia@rebellion.org").await.unwrap();
        assert_eq!(by_email.map(|u| u.id), Some(user.id));
    }

    #[tokio::test]
    async fn duplicate_email_is_a_unique_violation() {
        let pool = pool().await;
        User::insert(&pool, &sample("dup@rebellion.org")).await.unwrap();

        let err = User::insert(&pool, &sample("dup@rebellion.org")).await.unwrap_err();
        assert!(is_unique_violation(&err));
    }

    #[tokio::test]
    async fn serialized_user_has_no_password_or_active_flag() {
        let pool = pool().await;
        let user = User::insert(&pool, &sample("han@rebellion.org")).await.unwrap();

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert!(value.get("is_active").is_none());
        assert_eq!(value["email"], "han@rebellion.org");
    }
}
