//! Repository interfaces for external persistence collaborators.

pub mod principal;
pub mod token;

pub use principal::PrincipalRepository;
pub use token::{InMemoryRefreshTokenStore, RefreshTokenStore};

#[cfg(test)]
pub use principal::MockPrincipalRepository;
