// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Requests reach these only after jwt_auth_middleware has verified the
// bearer token's signature and checked its jti against the revocation
// blocklist. Handlers read the caller back via `Extension<AuthUser>`.

pub mod auth; // POST /logout, GET /protected
pub mod people; // Catalog writes
pub mod planets;
pub mod vehicles;
