//! Refresh token persistence interface and in-memory implementation.

pub mod memory;
#[path = "trait.rs"]
mod trait_;

pub use memory::InMemoryRefreshTokenStore;
pub use trait_::RefreshTokenStore;

#[cfg(test)]
mod tests;
