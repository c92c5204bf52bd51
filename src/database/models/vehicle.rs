use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Catalog vehicle row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub uid: i64,
    pub name: String,
    pub url: String,
    pub model: String,
    pub vehicle_class: String,
    pub manufacturer: String,
    pub cost_in_credits: f64,
    pub passengers: i64,
    pub cargo_capacity: f64,
}

#[derive(Debug)]
pub struct NewVehicle {
    pub name: String,
    pub url: String,
    pub model: String,
    pub vehicle_class: String,
    pub manufacturer: String,
    pub cost_in_credits: f64,
    pub passengers: i64,
    pub cargo_capacity: f64,
}

impl Vehicle {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Vehicle>, sqlx::Error> {
        sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY uid")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_uid(pool: &SqlitePool, uid: i64) -> Result<Option<Vehicle>, sqlx::Error> {
        sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE uid = ?")
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    pub async fn insert(pool: &SqlitePool, new: &NewVehicle) -> Result<Vehicle, sqlx::Error> {
        sqlx::query_as::<_, Vehicle>(
            "INSERT INTO vehicles (name, url, model, vehicle_class, manufacturer, cost_in_credits, passengers, cargo_capacity) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&new.name)
        .bind(&new.url)
        .bind(&new.model)
        .bind(&new.vehicle_class)
        .bind(&new.manufacturer)
        .bind(new.cost_in_credits)
        .bind(new.passengers)
        .bind(new.cargo_capacity)
        .fetch_one(pool)
        .await
    }

    /// Full-row replace. Returns `None` when no row has that uid.
    pub async fn update(pool: &SqlitePool, uid: i64, fields: &NewVehicle) -> Result<Option<Vehicle>, sqlx::Error> {
        sqlx::query_as::<_, Vehicle>(
            "UPDATE vehicles SET name = ?, url = ?, model = ?, vehicle_class = ?, manufacturer = ?, \
             cost_in_credits = ?, passengers = ?, cargo_capacity = ? WHERE uid = ? RETURNING *",
        )
        .bind(&fields.name)
        .bind(&fields.url)
        .bind(&fields.model)
        .bind(&fields.vehicle_class)
        .bind(&fields.manufacturer)
        .bind(fields.cost_in_credits)
        .bind(fields.passengers)
        .bind(fields.cargo_capacity)
        .bind(uid)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, uid: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vehicles WHERE uid = ?")
            .bind(uid)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
