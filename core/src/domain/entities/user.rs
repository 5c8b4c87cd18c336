//! Principal identity entity consumed by the token services.

use serde::{Deserialize, Serialize};

/// Fixed-shape principal passed explicitly into the token services
///
/// The persistence of users, roles, and permissions lives behind the
/// [`PrincipalRepository`](crate::repositories::PrincipalRepository)
/// collaborator; the token core only ever sees this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Unique username, used as the access-token subject
    pub username: String,

    /// Contact email address
    pub email: String,

    /// Granted authority names, e.g. "ROLE_USER"
    pub authorities: Vec<String>,
}

impl UserIdentity {
    /// Creates a new principal identity
    pub fn new(username: &str, email: &str, authorities: Vec<String>) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            authorities,
        }
    }

    /// Checks whether the principal carries the given authority
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}
