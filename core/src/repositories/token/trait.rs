//! Refresh token store trait defining the persistence interface.

use async_trait::async_trait;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

/// Persistence interface for refresh token records
///
/// The core never stores raw token values: every lookup goes through the
/// SHA-256 digest. Implementations must provide atomic
/// "read-then-conditionally-set revoked" semantics for [`mark_revoked`]
/// (e.g. via a transaction or a conditional UPDATE) so that two concurrent
/// rotations of the same token cannot both succeed.
///
/// [`mark_revoked`]: RefreshTokenStore::mark_revoked
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Persist a new refresh token record
    ///
    /// # Returns
    /// * `Ok(RefreshTokenRecord)` - The saved record
    /// * `Err(DomainError::Storage)` - Save failed (e.g. duplicate hash)
    async fn save(&self, record: RefreshTokenRecord) -> Result<RefreshTokenRecord, DomainError>;

    /// Find a record by the digest of its raw token value
    ///
    /// # Returns
    /// * `Ok(Some(RefreshTokenRecord))` - Record found (may be revoked or expired)
    /// * `Ok(None)` - No record with the given hash
    /// * `Err(DomainError::Storage)` - Lookup failed
    async fn find_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshTokenRecord>, DomainError>;

    /// Atomically set `revoked = true` on a currently unrevoked record
    ///
    /// # Returns
    /// * `Ok(true)` - This call performed the revocation
    /// * `Ok(false)` - Record missing or already revoked
    /// * `Err(DomainError::Storage)` - Update failed
    async fn mark_revoked(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Delete every record belonging to a user (password change, account removal)
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records deleted
    async fn delete_by_user(&self, username: &str) -> Result<usize, DomainError>;

    /// Delete expired records; retention cleanup, called periodically
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records deleted
    async fn delete_expired(&self) -> Result<usize, DomainError>;
}
