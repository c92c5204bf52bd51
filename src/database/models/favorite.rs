use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::{Person, Planet, User, Vehicle};

// Three structurally identical join tables, one per catalog entity. Pair
// uniqueness is enforced by the handlers (check-then-insert), not the schema.

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FavoritePerson {
    pub id: i64,
    pub user_id: i64,
    pub person_uid: i64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FavoritePlanet {
    pub id: i64,
    pub user_id: i64,
    pub planet_uid: i64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FavoriteVehicle {
    pub id: i64,
    pub user_id: i64,
    pub vehicle_uid: i64,
}

/// Favorite serialized for API responses: the join row with its target and
/// owning user embedded exactly one level deep. The shape is identical
/// across the three kinds apart from the target key names.
#[derive(Debug, Serialize)]
pub struct FavoritePersonRecord {
    pub id: i64,
    pub user_id: i64,
    pub person_uid: i64,
    pub person: Person,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct FavoritePlanetRecord {
    pub id: i64,
    pub user_id: i64,
    pub planet_uid: i64,
    pub planet: Planet,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct FavoriteVehicleRecord {
    pub id: i64,
    pub user_id: i64,
    pub vehicle_uid: i64,
    pub vehicle: Vehicle,
    pub user: User,
}

/// One entry of the combined favorites listing. Untagged so each entry
/// serializes as its inner record, giving a flat heterogeneous array.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FavoriteRecord {
    Person(FavoritePersonRecord),
    Vehicle(FavoriteVehicleRecord),
    Planet(FavoritePlanetRecord),
}

impl FavoritePerson {
    pub fn into_record(self, person: Person, user: User) -> FavoritePersonRecord {
        FavoritePersonRecord {
            id: self.id,
            user_id: self.user_id,
            person_uid: self.person_uid,
            person,
            user,
        }
    }

    pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<FavoritePerson>, sqlx::Error> {
        sqlx::query_as::<_, FavoritePerson>(
            "SELECT * FROM favorite_people WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn find_pair(
        pool: &SqlitePool,
        user_id: i64,
        person_uid: i64,
    ) -> Result<Option<FavoritePerson>, sqlx::Error> {
        sqlx::query_as::<_, FavoritePerson>(
            "SELECT * FROM favorite_people WHERE user_id = ? AND person_uid = ?",
        )
        .bind(user_id)
        .bind(person_uid)
        .fetch_optional(pool)
        .await
    }

    pub async fn insert(pool: &SqlitePool, user_id: i64, person_uid: i64) -> Result<FavoritePerson, sqlx::Error> {
        sqlx::query_as::<_, FavoritePerson>(
            "INSERT INTO favorite_people (user_id, person_uid) VALUES (?, ?) RETURNING *",
        )
        .bind(user_id)
        .bind(person_uid)
        .fetch_one(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, user_id: i64, person_uid: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorite_people WHERE user_id = ? AND person_uid = ?")
            .bind(user_id)
            .bind(person_uid)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

impl FavoritePlanet {
    pub fn into_record(self, planet: Planet, user: User) -> FavoritePlanetRecord {
        FavoritePlanetRecord {
            id: self.id,
            user_id: self.user_id,
            planet_uid: self.planet_uid,
            planet,
            user,
        }
    }

    pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<FavoritePlanet>, sqlx::Error> {
        sqlx::query_as::<_, FavoritePlanet>(
            "SELECT * FROM favorite_planets WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn find_pair(
        pool: &SqlitePool,
        user_id: i64,
        planet_uid: i64,
    ) -> Result<Option<FavoritePlanet>, sqlx::Error> {
        sqlx::query_as::<_, FavoritePlanet>(
            "SELECT * FROM favorite_planets WHERE user_id = ? AND planet_uid = ?",
        )
        .bind(user_id)
        .bind(planet_uid)
        .fetch_optional(pool)
        .await
    }

    pub async fn insert(pool: &SqlitePool, user_id: i64, planet_uid: i64) -> Result<FavoritePlanet, sqlx::Error> {
        sqlx::query_as::<_, FavoritePlanet>(
            "INSERT INTO favorite_planets (user_id, planet_uid) VALUES (?, ?) RETURNING *",
        )
        .bind(user_id)
        .bind(planet_uid)
        .fetch_one(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, user_id: i64, planet_uid: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorite_planets WHERE user_id = ? AND planet_uid = ?")
            .bind(user_id)
            .bind(planet_uid)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

impl FavoriteVehicle {
    pub fn into_record(self, vehicle: Vehicle, user: User) -> FavoriteVehicleRecord {
        FavoriteVehicleRecord {
            id: self.id,
            user_id: self.user_id,
            vehicle_uid: self.vehicle_uid,
            vehicle,
            user,
        }
    }

    pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<FavoriteVehicle>, sqlx::Error> {
        sqlx::query_as::<_, FavoriteVehicle>(
            "SELECT * FROM favorite_vehicles WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn find_pair(
        pool: &SqlitePool,
        user_id: i64,
        vehicle_uid: i64,
    ) -> Result<Option<FavoriteVehicle>, sqlx::Error> {
        sqlx::query_as::<_, FavoriteVehicle>(
            "SELECT * FROM favorite_vehicles WHERE user_id = ? AND vehicle_uid = ?",
        )
        .bind(user_id)
        .bind(vehicle_uid)
        .fetch_optional(pool)
        .await
    }

    pub async fn insert(pool: &SqlitePool, user_id: i64, vehicle_uid: i64) -> Result<FavoriteVehicle, sqlx::Error> {
        sqlx::query_as::<_, FavoriteVehicle>(
            "INSERT INTO favorite_vehicles (user_id, vehicle_uid) VALUES (?, ?) RETURNING *",
        )
        .bind(user_id)
        .bind(vehicle_uid)
        .fetch_one(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, user_id: i64, vehicle_uid: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorite_vehicles WHERE user_id = ? AND vehicle_uid = ?")
            .bind(user_id)
            .bind(vehicle_uid)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            email: "luke@rebellion.org".to_string(),
            password: "digest".to_string(),
            is_active: true,
            first_name: "Luke".to_string(),
            last_name: "Skywalker".to_string(),
            subscription_date: "2026-08-25".to_string(),
            birth_date: None,
            country: None,
        }
    }

    fn sample_planet() -> Planet {
        Planet {
            uid: 3,
            name: "Dagobah".to_string(),
            url: "https://swapi.dev/api/planets/5/".to_string(),
            diameter: 8900.0,
            rotation_period: 23.0,
            orbital_period: 341,
            gravity: 0.9,
            population: 0.0,
            climate: "murky".to_string(),
        }
    }

    #[test]
    fn record_embeds_target_and_user_one_level_deep() {
        let favorite = FavoritePlanet { id: 9, user_id: 1, planet_uid: 3 };
        let record = favorite.into_record(sample_planet(), sample_user());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 9);
        assert_eq!(value["user_id"], 1);
        assert_eq!(value["planet_uid"], 3);
        assert_eq!(value["planet"]["name"], "Dagobah");
        assert_eq!(value["user"]["first_name"], "Luke");
        assert!(value["user"].get("password").is_none());
    }

    #[test]
    fn combined_entries_serialize_flat() {
        let favorite = FavoritePlanet { id: 9, user_id: 1, planet_uid: 3 };
        let entry = FavoriteRecord::Planet(favorite.into_record(sample_planet(), sample_user()));

        // Untagged: no enum wrapper key in the output.
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value.get("Planet").is_none());
        assert_eq!(value["planet_uid"], 3);
    }
}
