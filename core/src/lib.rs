//! # Identity Core
//!
//! Token-lifecycle and session domain layer for the identity service.
//! This crate contains the signing-key registry, access and refresh token
//! services, the persistence interfaces they depend on, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    AccessClaims, Jwk, JwkSet, KeyMaterial, RefreshTokenRecord, TokenPair, UserIdentity,
};
pub use errors::{DomainError, DomainResult, TokenError};
pub use repositories::{InMemoryRefreshTokenStore, PrincipalRepository, RefreshTokenStore};
pub use services::{
    AccessTokenConfig, AccessTokenService, KeyRotationConfig, KeyRotationScheduler,
    RefreshTokenConfig, RefreshTokenService, RotatedToken, SessionService, SigningKeyRegistry,
    TokenHashingService, TokenServiceConfig,
};
