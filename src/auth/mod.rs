use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::AppConfig;

/// Claims carried by every issued access token.
///
/// `jti` is a fresh UUID per token and doubles as the revocation key: logout
/// stores it in the blocklist, and the auth middleware rejects any later
/// request presenting the same identifier.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token was issued to
    pub sub: i64,
    /// Unique token identifier, the revocation key
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT secret is not configured")]
    MissingSecret,
    #[error("token generation failed: {0}")]
    TokenGeneration(jsonwebtoken::errors::Error),
    #[error("invalid token: {0}")]
    InvalidToken(jsonwebtoken::errors::Error),
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Issue a signed token for the given user.
pub fn issue_token(config: &AppConfig, user_id: i64) -> Result<String, AuthError> {
    if config.jwt_secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        jti: Uuid::new_v4().to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(config.token_expiry_hours as i64)).timestamp(),
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
    encode(&Header::default(), &claims, &encoding_key).map_err(AuthError::TokenGeneration)
}

/// Verify signature and expiry, returning the claims.
pub fn decode_token(config: &AppConfig, token: &str) -> Result<Claims, AuthError> {
    if config.jwt_secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
    decode::<Claims>(token, &decoding_key, &Validation::default())
        .map(|data| data.claims)
        .map_err(AuthError::InvalidToken)
}

/// One-way digest for stored passwords.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

pub fn verify_password(password: &str, digest: &str) -> Result<bool, AuthError> {
    Ok(bcrypt::verify(password, digest)?)
}
