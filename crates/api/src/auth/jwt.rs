use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use lexora_core::error::CoreError;
use lexora_core::types::DbId;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// JWT configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC secret used to sign access tokens.
    pub secret: String,
    /// Access token lifetime in seconds (default: 900 = 15 minutes).
    pub access_token_expiry_secs: i64,
    /// Refresh token lifetime in seconds (default: 604800 = 7 days).
    pub refresh_token_expiry_secs: i64,
}

impl JwtConfig {
    /// Load JWT settings from `JWT_SECRET`, `ACCESS_TOKEN_EXPIRY_SECS` and
    /// `REFRESH_TOKEN_EXPIRY_SECS`. `JWT_SECRET` is required.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        let access_token_expiry_secs: i64 = std::env::var("ACCESS_TOKEN_EXPIRY_SECS")
            .unwrap_or_else(|_| "900".into())
            .parse()
            .expect("ACCESS_TOKEN_EXPIRY_SECS must be a valid i64");

        let refresh_token_expiry_secs: i64 = std::env::var("REFRESH_TOKEN_EXPIRY_SECS")
            .unwrap_or_else(|_| "604800".into())
            .parse()
            .expect("REFRESH_TOKEN_EXPIRY_SECS must be a valid i64");

        Self {
            secret,
            access_token_expiry_secs,
            refresh_token_expiry_secs,
        }
    }
}

/// Claims embedded in access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: DbId,
    /// User role (`admin`, `staff` or `client`).
    pub role: String,
    /// Expiry, seconds since epoch.
    pub exp: i64,
    /// Issued at, seconds since epoch.
    pub iat: i64,
    /// Token id, unique per issued token.
    pub jti: String,
}

/// Generate a signed HS256 access token for the given user.
pub fn generate_token(config: &JwtConfig, user_id: DbId, role: &str) -> Result<String, CoreError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        exp: now + config.access_token_expiry_secs,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| CoreError::Internal(format!("Failed to generate token: {e}")))
}

/// Validate a token signature and expiry, returning the claims.
pub fn validate_token(config: &JwtConfig, token: &str) -> Result<Claims, CoreError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| CoreError::Unauthorized("Invalid or expired token".into()))
}

/// Generate an opaque refresh token (random UUID pair, hex-ish).
///
/// Only the SHA-256 hash of this value is stored server-side.
pub fn generate_refresh_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// Hash a refresh token for storage and lookup.
pub fn hash_refresh_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
