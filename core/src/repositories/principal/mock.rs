//! Mock implementation of PrincipalRepository for testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::user::UserIdentity;
use crate::errors::DomainError;

use super::trait_::PrincipalRepository;

/// Mock principal repository backed by a map of usernames
#[derive(Default)]
pub struct MockPrincipalRepository {
    principals: Arc<RwLock<HashMap<String, UserIdentity>>>,
}

impl MockPrincipalRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            principals: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a principal for lookup
    pub async fn insert(&self, identity: UserIdentity) {
        let mut principals = self.principals.write().await;
        principals.insert(identity.username.clone(), identity);
    }
}

#[async_trait]
impl PrincipalRepository for MockPrincipalRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserIdentity>, DomainError> {
        let principals = self.principals.read().await;
        Ok(principals.get(username).cloned())
    }
}
