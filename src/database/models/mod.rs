// One file per record type; each model owns its queries.
pub mod favorite;
pub mod person;
pub mod planet;
pub mod revoked_token;
pub mod user;
pub mod vehicle;

pub use favorite::{
    FavoritePerson, FavoritePersonRecord, FavoritePlanet, FavoritePlanetRecord, FavoriteRecord,
    FavoriteVehicle, FavoriteVehicleRecord,
};
pub use person::{NewPerson, Person};
pub use planet::{NewPlanet, Planet};
pub use revoked_token::RevokedToken;
pub use user::{NewUser, User};
pub use vehicle::{NewVehicle, Vehicle};
