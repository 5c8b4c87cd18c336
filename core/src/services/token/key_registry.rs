//! Signing key registry with rotation and a verification grace window.

use std::sync::{PoisonError, RwLock};

use jsonwebtoken::DecodingKey;
use tracing::info;

use crate::domain::entities::key_material::{JwkSet, KeyMaterial};
use crate::errors::{DomainResult, TokenError};

use super::config::KeyRotationConfig;

/// Ordered collection of signing keys, most recent first
///
/// The first key signs new tokens; the rest remain solely to verify tokens
/// issued before a rotation until they age out. All reads take the read
/// lock and rotation takes the write lock, so verification never observes
/// a partially updated sequence.
pub struct SigningKeyRegistry {
    keys: RwLock<Vec<KeyMaterial>>,
    rotation_enabled: bool,
    keys_to_keep: usize,
}

impl std::fmt::Debug for SigningKeyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKeyRegistry")
            .field("rotation_enabled", &self.rotation_enabled)
            .field("keys_to_keep", &self.keys_to_keep)
            .field("key_count", &self.key_count())
            .finish()
    }
}

impl SigningKeyRegistry {
    /// Creates a registry and generates its initial signing key
    ///
    /// # Returns
    ///
    /// * `Ok(SigningKeyRegistry)` - Registry holding one fresh key
    /// * `Err(DomainError)` - Initial key generation failed
    pub fn new(config: &KeyRotationConfig) -> DomainResult<Self> {
        let initial = KeyMaterial::generate()?;
        let keys_to_keep = config.keys_to_keep.max(1);

        info!(
            kid = initial.kid(),
            rotation_enabled = config.enabled,
            keys_to_keep,
            "signing key registry initialized"
        );

        Ok(Self {
            keys: RwLock::new(vec![initial]),
            rotation_enabled: config.enabled,
            keys_to_keep,
        })
    }

    /// Returns the key used to sign new tokens (the most recent one)
    ///
    /// `EmptyRegistry` is an invariant violation: the constructor seeds one
    /// key and rotation only ever prepends before evicting.
    pub fn active_key(&self) -> Result<KeyMaterial, TokenError> {
        let keys = self.keys.read().unwrap_or_else(PoisonError::into_inner);
        keys.first().cloned().ok_or(TokenError::EmptyRegistry)
    }

    /// Finds the verification key for a token's `kid` header
    ///
    /// Returns `None` when the key has aged out of the grace window or
    /// never existed.
    pub fn find_verifier(&self, kid: &str) -> Option<DecodingKey> {
        let keys = self.keys.read().unwrap_or_else(PoisonError::into_inner);
        keys.iter()
            .find(|key| key.kid() == kid)
            .map(|key| key.decoding_key().clone())
    }

    /// Returns the JWKS discovery document: public parameters only
    pub fn jwk_set(&self) -> JwkSet {
        let keys = self.keys.read().unwrap_or_else(PoisonError::into_inner);
        JwkSet {
            keys: keys.iter().map(|key| key.public_jwk().clone()).collect(),
        }
    }

    /// Number of keys currently retained
    pub fn key_count(&self) -> usize {
        let keys = self.keys.read().unwrap_or_else(PoisonError::into_inner);
        keys.len()
    }

    /// Rotates the signing keys: prepend a fresh key, evict beyond `keys_to_keep`
    ///
    /// No-op when rotation is disabled. The new pair is generated before the
    /// write lock is taken, so a generation failure leaves the published
    /// sequence untouched and readers are not blocked for the keygen.
    pub fn rotate(&self) -> DomainResult<()> {
        if !self.rotation_enabled {
            info!("key rotation is disabled, skipping");
            return Ok(());
        }

        let fresh = KeyMaterial::generate()?;
        let fresh_kid = fresh.kid().to_string();

        let mut keys = self.keys.write().unwrap_or_else(PoisonError::into_inner);
        keys.insert(0, fresh);
        while keys.len() > self.keys_to_keep {
            if let Some(evicted) = keys.pop() {
                info!(kid = evicted.kid(), "evicted signing key");
            }
        }

        info!(
            active_kid = fresh_kid.as_str(),
            key_count = keys.len(),
            "key rotation complete"
        );
        Ok(())
    }
}
