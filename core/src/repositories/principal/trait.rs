//! Principal lookup trait for resolving usernames to identities.

use async_trait::async_trait;

use crate::domain::entities::user::UserIdentity;
use crate::errors::DomainError;

/// Lookup collaborator resolving a username to its principal identity
///
/// User, role, and permission persistence is out of scope for the token
/// core; this trait is the only view it gets of the user store.
#[async_trait]
pub trait PrincipalRepository: Send + Sync {
    /// Find a principal by username
    ///
    /// # Returns
    /// * `Ok(Some(UserIdentity))` - Principal found
    /// * `Ok(None)` - No principal with that username
    /// * `Err(DomainError::Storage)` - Lookup failed
    async fn find_by_username(&self, username: &str) -> Result<Option<UserIdentity>, DomainError>;
}
