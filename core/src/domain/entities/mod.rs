//! Domain entities representing core business objects.

pub mod key_material;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use key_material::{Jwk, JwkSet, KeyMaterial, RSA_KEY_BITS};
pub use token::{AccessClaims, RefreshTokenRecord, TokenPair};
pub use user::UserIdentity;

#[cfg(test)]
mod tests;
