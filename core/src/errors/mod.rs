//! Domain-specific error types and error handling.

mod types;

pub use types::TokenError;

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    /// Failure in the external refresh-token store; propagated, never retried
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests;
