// handlers/mod.rs - Two-tier handler architecture
//
// Public (no auth) → Protected (JWT auth)

pub mod public; // Tier 1: No authentication required
pub mod protected; // Tier 2: Valid, non-revoked bearer token required

pub mod utils; // Shared JSON body field helpers
