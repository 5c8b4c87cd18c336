//! One-way hashing of raw refresh tokens for storage and lookup.

use sha2::{Digest, Sha256};

/// Deterministic SHA-256 digest of raw secret tokens
///
/// The same raw input always yields the same hex digest, so records can be
/// looked up by hash without the secret ever being stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenHashingService;

impl TokenHashingService {
    /// Create a new hashing service
    pub fn new() -> Self {
        Self
    }

    /// Hashes a raw token to its lowercase hex SHA-256 digest
    pub fn hash(&self, raw_token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(raw_token.as_bytes());
        hex::encode(hasher.finalize())
    }
}
