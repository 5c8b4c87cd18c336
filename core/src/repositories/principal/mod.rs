//! Principal lookup interface.

#[path = "trait.rs"]
mod trait_;

pub use trait_::PrincipalRepository;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockPrincipalRepository;
