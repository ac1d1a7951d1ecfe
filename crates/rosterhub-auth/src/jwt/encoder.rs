//! JWT token creation with configurable signing secret and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use rosterhub_core::config::auth::AuthConfig;
use rosterhub_core::error::AppError;

use super::claims::Claims;

/// Creates signed JWT access tokens.
///
/// Tokens are signed with HMAC-SHA256 under the secret provisioned in
/// [`AuthConfig`]; the expiry is issuance time plus the configured TTL.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in seconds.
    ttl_seconds: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

/// A freshly issued token together with its expiry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// The signed compact token string.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_seconds: config.token_ttl_seconds as i64,
        }
    }

    /// Issues a signed access token for the given user.
    pub fn issue(&self, user_id: Uuid, username: &str) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::seconds(self.ttl_seconds);

        let claims = Claims {
            sub: user_id,
            username: username.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
