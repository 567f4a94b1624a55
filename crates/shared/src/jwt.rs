//! JWT issuing and validation.
//!
//! Access tokens are short-lived and carry only the user id; the tenant
//! (business profile) is resolved from the database on every request.
//! Refresh tokens are long-lived and tracked server-side in the sessions
//! table, so they can be revoked.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::Claims;

/// JWT configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Access token lifetime in minutes.
    pub access_token_minutes: i64,
    /// Refresh token lifetime in days.
    pub refresh_token_days: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            access_token_minutes: 15,
            refresh_token_days: 7,
        }
    }
}

/// Errors that can occur during JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Token encoding failed.
    #[error("failed to encode token: {0}")]
    Encoding(String),

    /// Token has expired.
    #[error("token has expired")]
    Expired,

    /// Token is invalid or malformed.
    #[error("invalid token")]
    Invalid,
}

/// JWT service for token operations.
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("config", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl JwtService {
    /// Creates a new JWT service with the given configuration.
    #[must_use]
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generates a short-lived access token for a user.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Encoding` if token generation fails.
    pub fn generate_access_token(&self, user_id: Uuid) -> Result<String, JwtError> {
        let expires_at = Utc::now() + Duration::minutes(self.config.access_token_minutes);
        let claims = Claims::new(user_id, expires_at);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::Encoding(e.to_string()))
    }

    /// Generates a long-lived refresh token for a user.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Encoding` if token generation fails.
    pub fn generate_refresh_token(&self, user_id: Uuid) -> Result<String, JwtError> {
        let expires_at = Utc::now() + Duration::days(self.config.refresh_token_days);
        let claims = Claims::new(user_id, expires_at);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::Encoding(e.to_string()))
    }

    /// Validates a token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Expired` for expired tokens and
    /// `JwtError::Invalid` for anything else that fails validation.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::Invalid,
            })
    }

    /// Access token lifetime in seconds, for the `expires_in` response field.
    #[must_use]
    pub const fn access_token_lifetime_secs(&self) -> i64 {
        self.config.access_token_minutes * 60
    }

    /// Refresh token lifetime in days.
    #[must_use]
    pub const fn refresh_token_days(&self) -> i64 {
        self.config.refresh_token_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret".to_string(),
            ..JwtConfig::default()
        })
    }

    #[test]
    fn round_trip_access_token() {
        let svc = service();
        let user_id = Uuid::new_v4();

        let token = svc.generate_access_token(user_id).unwrap();
        let claims = svc.validate_token(&token).unwrap();

        assert_eq!(claims.user_id(), user_id);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = service().generate_access_token(Uuid::new_v4()).unwrap();

        let other = JwtService::new(JwtConfig {
            secret: "different-secret".to_string(),
            ..JwtConfig::default()
        });

        assert!(matches!(other.validate_token(&token), Err(JwtError::Invalid)));
    }

    #[test]
    fn rejects_garbage_token() {
        assert!(matches!(
            service().validate_token("not.a.token"),
            Err(JwtError::Invalid)
        ));
    }

    #[test]
    fn lifetime_in_seconds() {
        assert_eq!(service().access_token_lifetime_secs(), 15 * 60);
    }
}
