//! In-memory refresh token store.
//!
//! Backs single-process deployments and tests; a database-backed store
//! implements the same trait behind the service boundary.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

use super::trait_::RefreshTokenStore;

/// Refresh token store keyed by token hash, held in process memory
#[derive(Default)]
pub struct InMemoryRefreshTokenStore {
    records: Arc<RwLock<HashMap<String, RefreshTokenRecord>>>,
}

impl InMemoryRefreshTokenStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of records currently held, including revoked and expired ones
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RefreshTokenStore for InMemoryRefreshTokenStore {
    async fn save(&self, record: RefreshTokenRecord) -> Result<RefreshTokenRecord, DomainError> {
        let mut records = self.records.write().await;

        // token_hash is unique; a collision means the caller reused a raw token
        if records.contains_key(&record.token_hash) {
            return Err(DomainError::Storage {
                message: "duplicate token hash".to_string(),
            });
        }

        records.insert(record.token_hash.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshTokenRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(token_hash).cloned())
    }

    async fn mark_revoked(&self, token_hash: &str) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;

        match records.get_mut(token_hash) {
            Some(record) if !record.revoked => {
                record.revoke();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_by_user(&self, username: &str) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| record.username != username);
        Ok(before - records.len())
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| !record.is_expired());
        Ok(before - records.len())
    }
}
