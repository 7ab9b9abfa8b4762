//! JWT token issuance and verification
//!
//! Tokens are self-contained HS256-signed credentials carrying a username
//! claim. The server keeps no per-token state; validity is a function of the
//! token, the current time, and the signing secret.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued for
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Why a token failed verification.
///
/// Collapsed to a single status at the HTTP boundary; the variant is kept
/// for server-side logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("signature mismatch")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// Pre-computed JWT keys for efficient token operations
///
/// These are expensive to create, so they are derived once at startup and
/// shared via AppState.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// JWT service for token operations
///
/// Call `new` once at application startup and store in AppState; cloning is
/// cheap because the keys are wrapped in Arc.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    expiry_secs: i64,
}

impl JwtService {
    pub fn new(secret: &str, expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            expiry_secs,
        }
    }

    /// Issue a token for a username, expiring `expiry_secs` from now
    #[inline]
    pub fn issue(&self, username: &str) -> Result<String> {
        self.issue_at(username, Utc::now())
    }

    fn issue_at(&self, username: &str, issued_at: DateTime<Utc>) -> Result<String> {
        let claims = Claims {
            username: username.to_string(),
            exp: (issued_at + Duration::seconds(self.expiry_secs)).timestamp(),
            iat: issued_at.timestamp(),
        };

        encode(&Header::default(), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))
    }

    /// Verify signature and expiry, returning the decoded claims.
    ///
    /// Zero clock leeway: a token whose `exp` has passed is expired, full
    /// stop.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, self.keys.decoding(), &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret", 3600)
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = create_test_service();

        let token = service.issue("ann").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.username, "ann");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token_rejected_as_expired() {
        let service = create_test_service();

        // Issued two hours ago with a one-hour expiry.
        let issued_at = Utc::now() - Duration::hours(2);
        let token = service.issue_at("ann", issued_at).unwrap();

        assert_eq!(service.verify(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_foreign_secret_rejected_as_invalid_signature() {
        let service = create_test_service();
        let other = JwtService::new("a-different-secret", 3600);

        let token = other.issue("ann").unwrap();

        assert_eq!(
            service.verify(&token).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn test_garbage_rejected_as_malformed() {
        let service = create_test_service();

        assert_eq!(service.verify("garbage").unwrap_err(), TokenError::Malformed);
        assert_eq!(service.verify("").unwrap_err(), TokenError::Malformed);
        assert_eq!(
            service.verify("not.a.token").unwrap_err(),
            TokenError::Malformed
        );
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let cloned = service.clone();

        let token = service.issue("ann").unwrap();
        assert_eq!(cloned.verify(&token).unwrap().username, "ann");
    }
}
