//! Refresh token issuance, validation, single-use rotation, and revocation.

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use tracing::{debug, info};

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::{DomainResult, TokenError};
use crate::repositories::RefreshTokenStore;

use super::config::RefreshTokenConfig;
use super::hashing::TokenHashingService;

/// Bytes of entropy in a raw refresh token
const RAW_TOKEN_BYTES: usize = 32;

/// Outcome of a successful rotation
#[derive(Debug, Clone)]
pub struct RotatedToken {
    /// The replacement raw token, handed to the client once
    pub raw_token: String,

    /// The now-revoked record the old token resolved to
    pub record: RefreshTokenRecord,
}

/// Service owning the refresh-token protocol over an external store
///
/// Raw token values exist in cleartext only in the return values of
/// [`create`](Self::create) and [`rotate`](Self::rotate); everything else
/// operates on SHA-256 digests.
pub struct RefreshTokenService<R: RefreshTokenStore> {
    store: Arc<R>,
    hashing: TokenHashingService,
    config: RefreshTokenConfig,
}

impl<R: RefreshTokenStore> RefreshTokenService<R> {
    /// Creates a new refresh token service
    pub fn new(store: Arc<R>, config: RefreshTokenConfig) -> Self {
        Self {
            store,
            hashing: TokenHashingService::new(),
            config,
        }
    }

    /// Issues a new refresh token for a user and device
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The raw token; the only time it is available in cleartext
    /// * `Err(DomainError::Storage)` - Persisting the record failed
    pub async fn create(&self, username: &str, device_info: &str) -> DomainResult<String> {
        let raw_token = generate_raw_token();
        let token_hash = self.hashing.hash(&raw_token);
        let record =
            RefreshTokenRecord::new(username, token_hash, self.config.ttl_ms, device_info);

        let saved = self.store.save(record).await?;
        debug!(record_id = %saved.id, username, "refresh token created");
        Ok(raw_token)
    }

    /// Resolves a raw token to its record if it is still usable
    ///
    /// Missing, revoked, and expired all collapse to `Ok(None)` so a caller
    /// cannot tell which condition applied. Storage failures propagate.
    pub async fn validate(&self, raw_token: &str) -> DomainResult<Option<RefreshTokenRecord>> {
        let token_hash = self.hashing.hash(raw_token);
        let record = self.store.find_by_hash(&token_hash).await?;
        Ok(record.filter(|r| r.is_usable()))
    }

    /// Rotates a refresh token: revoke the old record, issue a replacement
    ///
    /// Effectively atomic per token: the revocation is a conditional update
    /// in the store, so of two concurrent rotations of the same raw token
    /// exactly one succeeds. A replayed, already-rotated token always fails.
    ///
    /// # Returns
    ///
    /// * `Ok(RotatedToken)` - New raw token plus the retired record
    /// * `Err(TokenError::InvalidRefreshToken)` - Unknown, expired, revoked,
    ///   or lost a concurrent rotation race
    pub async fn rotate(&self, raw_token: &str) -> DomainResult<RotatedToken> {
        let mut record = self
            .validate(raw_token)
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;

        if !self.store.mark_revoked(&record.token_hash).await? {
            return Err(TokenError::InvalidRefreshToken.into());
        }
        record.revoke();

        let new_raw = self.create(&record.username, &record.device_info).await?;
        info!(record_id = %record.id, username = record.username.as_str(), "refresh token rotated");

        Ok(RotatedToken {
            raw_token: new_raw,
            record,
        })
    }

    /// Revokes a refresh token; idempotent
    ///
    /// Invalid or already-revoked input is a no-op, not an error.
    pub async fn revoke(&self, raw_token: &str) -> DomainResult<()> {
        if let Some(record) = self.validate(raw_token).await? {
            self.store.mark_revoked(&record.token_hash).await?;
            info!(record_id = %record.id, "refresh token revoked");
        }
        Ok(())
    }

    /// Removes every refresh token belonging to a user
    ///
    /// Used on password change and account removal.
    pub async fn revoke_all_for_user(&self, username: &str) -> DomainResult<usize> {
        self.store.delete_by_user(username).await
    }

    /// Deletes expired records from the store (retention cleanup)
    pub async fn purge_expired(&self) -> DomainResult<usize> {
        self.store.delete_expired().await
    }
}

/// Generates a high-entropy opaque raw token
///
/// 32 bytes from the thread-local CSPRNG, base64url encoded; verifiers rely
/// on no embedded structure.
fn generate_raw_token() -> String {
    let mut bytes = [0u8; RAW_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
