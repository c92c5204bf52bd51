// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Besides register/login, the public tier carries catalog reads, user
// account management, and favorites. Only catalog writes and session
// endpoints sit behind the JWT gate.

pub mod auth; // POST /register, POST /login
pub mod favorites; // /favorite/* and POST /favorites
pub mod people; // Catalog reads
pub mod planets;
pub mod users; // /user/* account management
pub mod vehicles;
