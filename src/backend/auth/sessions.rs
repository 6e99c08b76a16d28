/**
 * Session Token Verification
 *
 * This module verifies the HS256 session tokens minted by the identity
 * provider and exposes the claims the handlers care about: the subject id
 * and the denormalized display fields (`name`, `email`, `picture`).
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Email
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar URL (providers use either claim name)
    #[serde(default, alias = "image")]
    pub picture: Option<String>,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    #[serde(default)]
    pub iat: u64,
}

/// Session verification errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// The verification secret is not configured
    #[error("SUPABASE_JWT_SECRET not set")]
    MissingSecret,
    /// The token failed signature or claim validation
    #[error("invalid session token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),
}

fn get_jwt_secret() -> Result<String, SessionError> {
    std::env::var("SUPABASE_JWT_SECRET").map_err(|_| SessionError::MissingSecret)
}

/// Verify and decode a session token
pub fn verify_token(token: &str) -> Result<Claims, SessionError> {
    let secret = get_jwt_secret()?;
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

/// Create a session token with the provider's claim shape
///
/// The identity provider normally mints these; this mirror exists for
/// local development and the test suites.
pub fn create_token(
    user_id: uuid::Uuid,
    name: Option<String>,
    email: Option<String>,
    image: Option<String>,
) -> Result<String, SessionError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_secs();

    let claims = Claims {
        sub: user_id.to_string(),
        name,
        email,
        picture: image,
        exp: now + 60 * 60,
        iat: now,
    };

    let secret = get_jwt_secret()?;
    let key = EncodingKey::from_secret(secret.as_ref());

    Ok(encode(&Header::default(), &claims, &key)?)
}
