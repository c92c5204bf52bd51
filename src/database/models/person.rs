use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Catalog character row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Person {
    pub uid: i64,
    pub name: String,
    pub url: String,
    pub height: f64,
    pub mass: f64,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: f64,
    pub gender: String,
}

#[derive(Debug)]
pub struct NewPerson {
    pub name: String,
    pub url: String,
    pub height: f64,
    pub mass: f64,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: f64,
    pub gender: String,
}

impl Person {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Person>, sqlx::Error> {
        sqlx::query_as::<_, Person>("SELECT * FROM people ORDER BY uid")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_uid(pool: &SqlitePool, uid: i64) -> Result<Option<Person>, sqlx::Error> {
        sqlx::query_as::<_, Person>("SELECT * FROM people WHERE uid = ?")
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    pub async fn insert(pool: &SqlitePool, new: &NewPerson) -> Result<Person, sqlx::Error> {
        sqlx::query_as::<_, Person>(
            "INSERT INTO people (name, url, height, mass, hair_color, skin_color, eye_color, birth_year, gender) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&new.name)
        .bind(&new.url)
        .bind(new.height)
        .bind(new.mass)
        .bind(&new.hair_color)
        .bind(&new.skin_color)
        .bind(&new.eye_color)
        .bind(new.birth_year)
        .bind(&new.gender)
        .fetch_one(pool)
        .await
    }

    /// Full-row replace. Returns `None` when no row has that uid.
    pub async fn update(pool: &SqlitePool, uid: i64, fields: &NewPerson) -> Result<Option<Person>, sqlx::Error> {
        sqlx::query_as::<_, Person>(
            "UPDATE people SET name = ?, url = ?, height = ?, mass = ?, hair_color = ?, \
             skin_color = ?, eye_color = ?, birth_year = ?, gender = ? WHERE uid = ? RETURNING *",
        )
        .bind(&fields.name)
        .bind(&fields.url)
        .bind(fields.height)
        .bind(fields.mass)
        .bind(&fields.hair_color)
        .bind(&fields.skin_color)
        .bind(&fields.eye_color)
        .bind(fields.birth_year)
        .bind(&fields.gender)
        .bind(uid)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, uid: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM people WHERE uid = ?")
            .bind(uid)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
