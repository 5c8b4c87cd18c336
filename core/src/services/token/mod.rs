//! Token lifecycle services
//!
//! This module handles all token-related operations including:
//! - Signing-key management with rotation and a verification grace window
//! - Access token issuance and kid-based verification
//! - Refresh token issuance, hashed storage, rotation, and revocation
//! - Background scheduling of key rotation

mod access;
mod config;
mod hashing;
mod key_registry;
mod refresh;
mod rotation;

#[cfg(test)]
mod tests;

pub use access::AccessTokenService;
pub use config::{AccessTokenConfig, KeyRotationConfig, RefreshTokenConfig, TokenServiceConfig};
pub use hashing::TokenHashingService;
pub use key_registry::SigningKeyRegistry;
pub use refresh::{RefreshTokenService, RotatedToken};
pub use rotation::KeyRotationScheduler;
