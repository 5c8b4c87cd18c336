//! Token entities for the access/refresh token lifecycle.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by a signed access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (username)
    pub sub: String,

    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,

    /// Granted authorities for the subject
    pub roles: Vec<String>,
}

impl AccessClaims {
    /// Creates claims for a new access token
    ///
    /// # Arguments
    ///
    /// * `username` - The subject the token is issued for
    /// * `roles` - The subject's authorities
    /// * `ttl_seconds` - Access token lifetime in seconds
    pub fn new(username: &str, roles: Vec<String>, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            roles,
        }
    }

    /// Checks whether the claims have expired, allowing `skew_seconds` of drift
    pub fn is_expired(&self, skew_seconds: i64) -> bool {
        Utc::now().timestamp() >= self.exp + skew_seconds
    }
}

/// Refresh token record as held by the persistence collaborator
///
/// Only the SHA-256 digest of the raw secret is ever stored; the raw value
/// exists solely in the response to the caller that created the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Digest of the raw token value
    pub token_hash: String,

    /// Username of the owning principal
    pub username: String,

    /// Timestamp when the token was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been revoked
    pub revoked: bool,

    /// Free-text description of the issuing device
    pub device_info: String,
}

impl RefreshTokenRecord {
    /// Creates a new refresh token record
    ///
    /// # Arguments
    ///
    /// * `username` - The owning principal's username
    /// * `token_hash` - Digest of the raw token value
    /// * `ttl_ms` - Refresh token lifetime in milliseconds
    /// * `device_info` - Free-text device description
    pub fn new(username: &str, token_hash: String, ttl_ms: i64, device_info: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            token_hash,
            username: username.to_string(),
            issued_at: now,
            expires_at: now + Duration::milliseconds(ttl_ms),
            revoked: false,
            device_info: device_info.to_string(),
        }
    }

    /// Checks if the record has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Checks if the record is usable: not revoked and not expired
    pub fn is_usable(&self) -> bool {
        !self.revoked && !self.is_expired()
    }

    /// Marks the record as revoked
    pub fn revoke(&mut self) {
        self.revoked = true;
    }
}

/// A freshly issued access/refresh token pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Raw refresh token; the only place it exists in cleartext
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
        }
    }
}
