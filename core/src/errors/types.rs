//! Token-specific error types for the token-lifecycle subsystem.
//!
//! Specific failure causes exist for logging and diagnostics; the outer
//! boundary reports any of them as a generic unauthorized outcome.

use thiserror::Error;

/// Token-related errors
///
/// Access-token verification failures carry their exact cause so callers can
/// log them. Refresh-token failures are deliberately collapsed into
/// `InvalidRefreshToken`: a caller must not be able to tell whether a
/// presented token was unknown, expired, or revoked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    MalformedToken,

    #[error("No verification key found for kid: {kid}")]
    UnknownKey { kid: String },

    #[error("Invalid signature")]
    SignatureInvalid,

    #[error("Token expired")]
    Expired,

    #[error("Subject mismatch")]
    SubjectMismatch,

    #[error("Invalid or expired refresh token")]
    InvalidRefreshToken,

    #[error("Signing key registry is empty")]
    EmptyRegistry,

    #[error("Signing key generation failed")]
    KeyGenerationFailed,
}
