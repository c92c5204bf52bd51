use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Catalog planet row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Planet {
    pub uid: i64,
    pub name: String,
    pub url: String,
    pub diameter: f64,
    pub rotation_period: f64,
    pub orbital_period: i64,
    pub gravity: f64,
    pub population: f64,
    pub climate: String,
}

#[derive(Debug)]
pub struct NewPlanet {
    pub name: String,
    pub url: String,
    pub diameter: f64,
    pub rotation_period: f64,
    pub orbital_period: i64,
    pub gravity: f64,
    pub population: f64,
    pub climate: String,
}

impl Planet {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Planet>, sqlx::Error> {
        sqlx::query_as::<_, Planet>("SELECT * FROM planets ORDER BY uid")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_uid(pool: &SqlitePool, uid: i64) -> Result<Option<Planet>, sqlx::Error> {
        sqlx::query_as::<_, Planet>("SELECT * FROM planets WHERE uid = ?")
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    pub async fn insert(pool: &SqlitePool, new: &NewPlanet) -> Result<Planet, sqlx::Error> {
        sqlx::query_as::<_, Planet>(
            "INSERT INTO planets (name, url, diameter, rotation_period, orbital_period, gravity, population, climate) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&new.name)
        .bind(&new.url)
        .bind(new.diameter)
        .bind(new.rotation_period)
        .bind(new.orbital_period)
        .bind(new.gravity)
        .bind(new.population)
        .bind(&new.climate)
        .fetch_one(pool)
        .await
    }

    /// Full-row replace. Returns `None` when no row has that uid.
    pub async fn update(pool: &SqlitePool, uid: i64, fields: &NewPlanet) -> Result<Option<Planet>, sqlx::Error> {
        sqlx::query_as::<_, Planet>(
            "UPDATE planets SET name = ?, url = ?, diameter = ?, rotation_period = ?, \
             orbital_period = ?, gravity = ?, population = ?, climate = ? WHERE uid = ? RETURNING *",
        )
        .bind(&fields.name)
        .bind(&fields.url)
        .bind(fields.diameter)
        .bind(fields.rotation_period)
        .bind(fields.orbital_period)
        .bind(fields.gravity)
        .bind(fields.population)
        .bind(&fields.climate)
        .bind(uid)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, uid: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM planets WHERE uid = ?")
            .bind(uid)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
