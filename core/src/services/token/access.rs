//! Access token issuance and verification keyed by the header key id.

use std::sync::Arc;

use jsonwebtoken::{decode, decode_header, encode, Algorithm, DecodingKey, Header, Validation};
use tracing::warn;

use crate::domain::entities::token::AccessClaims;
use crate::domain::entities::user::UserIdentity;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::AccessTokenConfig;
use super::key_registry::SigningKeyRegistry;

/// Stateless service minting and verifying signed bearer tokens
pub struct AccessTokenService {
    registry: Arc<SigningKeyRegistry>,
    config: AccessTokenConfig,
}

impl AccessTokenService {
    /// Creates a new access token service
    ///
    /// # Arguments
    ///
    /// * `registry` - Shared signing key registry
    /// * `config` - Token ttl and clock skew settings
    pub fn new(registry: Arc<SigningKeyRegistry>, config: AccessTokenConfig) -> Self {
        Self { registry, config }
    }

    /// Access token lifetime in seconds
    pub fn ttl_seconds(&self) -> i64 {
        self.config.ttl_seconds
    }

    /// Issues a signed access token for the given principal
    ///
    /// Claims carry the principal's username as subject and its authorities
    /// as roles; the header carries the active key's id so verifiers can
    /// find the matching public key after a rotation.
    pub fn issue(&self, identity: &UserIdentity) -> DomainResult<String> {
        let key = self.registry.active_key()?;
        let claims = AccessClaims::new(
            &identity.username,
            identity.authorities.clone(),
            self.config.ttl_seconds,
        );

        let mut header = Header::new(key.algorithm());
        header.kid = Some(key.kid().to_string());

        encode(&header, &claims, key.encoding_key()).map_err(|e| DomainError::Internal {
            message: format!("access token signing failed: {e}"),
        })
    }

    /// Verifies a token's signature, expiry, and subject
    ///
    /// # Arguments
    ///
    /// * `token` - The compact JWS string presented by the client
    /// * `expected_subject` - Username the token must be bound to
    ///
    /// # Returns
    ///
    /// * `Ok(AccessClaims)` - Token is valid for the expected subject
    /// * `Err(TokenError)` - `MalformedToken`, `UnknownKey`, `SignatureInvalid`,
    ///   `Expired`, or `SubjectMismatch`
    pub fn verify(&self, token: &str, expected_subject: &str) -> DomainResult<AccessClaims> {
        let header = decode_header(token).map_err(|_| TokenError::MalformedToken)?;
        let kid = header.kid.ok_or(TokenError::MalformedToken)?;

        let verifier = self.registry.find_verifier(&kid).ok_or_else(|| {
            warn!(kid = kid.as_str(), "no verification key for token kid");
            TokenError::UnknownKey { kid: kid.clone() }
        })?;

        let claims = self.decode_claims(token, &verifier)?;

        // Expiry uses the issuing clock source; skew defaults to 0 so a
        // token fails exactly at expires_at.
        if claims.is_expired(self.config.clock_skew_seconds) {
            return Err(TokenError::Expired.into());
        }

        if claims.sub != expected_subject {
            return Err(TokenError::SubjectMismatch.into());
        }

        Ok(claims)
    }

    /// Reads the subject claim without verifying the signature
    ///
    /// For diagnostics only; never trust the result for authorization.
    pub fn extract_subject(&self, token: &str) -> DomainResult<String> {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;

        let data = decode::<AccessClaims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map_err(|_| TokenError::MalformedToken)?;
        Ok(data.claims.sub)
    }

    /// Checks the signature and parses claims; expiry is checked by the caller
    fn decode_claims(&self, token: &str, verifier: &DecodingKey) -> Result<AccessClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = false;
        validation.validate_aud = false;

        let data = decode::<AccessClaims>(token, verifier, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                _ => TokenError::MalformedToken,
            }
        })?;
        Ok(data.claims)
    }
}
