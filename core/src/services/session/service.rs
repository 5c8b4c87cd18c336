//! Session orchestration over the token services.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::UserIdentity;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{PrincipalRepository, RefreshTokenStore};
use crate::services::token::{AccessTokenService, RefreshTokenService};

/// Ties the token services together for login, refresh, and logout flows
///
/// Credential verification happens before this service is called; it
/// receives an already-authenticated [`UserIdentity`].
pub struct SessionService<P, R>
where
    P: PrincipalRepository,
    R: RefreshTokenStore,
{
    /// Principal lookup for the refresh path
    principals: Arc<P>,
    /// Access token minting and verification
    access_tokens: Arc<AccessTokenService>,
    /// Refresh token protocol over the external store
    refresh_tokens: Arc<RefreshTokenService<R>>,
}

impl<P, R> SessionService<P, R>
where
    P: PrincipalRepository,
    R: RefreshTokenStore,
{
    /// Creates a new session service
    pub fn new(
        principals: Arc<P>,
        access_tokens: Arc<AccessTokenService>,
        refresh_tokens: Arc<RefreshTokenService<R>>,
    ) -> Self {
        Self {
            principals,
            access_tokens,
            refresh_tokens,
        }
    }

    /// Establishes a session for an authenticated principal
    ///
    /// Mints an access token under the active signing key and issues a new
    /// refresh token bound to the device.
    pub async fn login(
        &self,
        identity: &UserIdentity,
        device_info: &str,
    ) -> DomainResult<TokenPair> {
        let access_token = self.access_tokens.issue(identity)?;
        let refresh_token = self
            .refresh_tokens
            .create(&identity.username, device_info)
            .await?;

        info!(username = identity.username.as_str(), "session established");
        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.access_tokens.ttl_seconds(),
        ))
    }

    /// Exchanges a refresh token for a new token pair
    ///
    /// Rotates the refresh token (single use), resolves the principal from
    /// the rotated record, and mints a fresh access token. Any token
    /// failure surfaces as the collapsed unauthorized outcome.
    pub async fn refresh(&self, raw_token: &str) -> DomainResult<(TokenPair, UserIdentity)> {
        let rotated = self.refresh_tokens.rotate(raw_token).await?;

        let identity = self
            .principals
            .find_by_username(&rotated.record.username)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        let access_token = self.access_tokens.issue(&identity)?;
        let pair = TokenPair::new(
            access_token,
            rotated.raw_token,
            self.access_tokens.ttl_seconds(),
        );
        Ok((pair, identity))
    }

    /// Ends a session by revoking its refresh token; idempotent
    pub async fn logout(&self, raw_token: &str) -> DomainResult<()> {
        self.refresh_tokens.revoke(raw_token).await
    }

    /// Clears all of a user's refresh tokens and issues a fresh one
    ///
    /// Called after a password change so stolen tokens stop working.
    pub async fn reissue_after_password_change(
        &self,
        identity: &UserIdentity,
        device_info: &str,
    ) -> DomainResult<String> {
        let removed = self
            .refresh_tokens
            .revoke_all_for_user(&identity.username)
            .await?;
        debug!(
            username = identity.username.as_str(),
            removed, "cleared refresh tokens after password change"
        );

        self.refresh_tokens
            .create(&identity.username, device_info)
            .await
    }
}
