//! Unit tests for the refresh token service

use std::sync::Arc;
use std::time::Duration;

use crate::errors::{DomainError, TokenError};
use crate::repositories::token::InMemoryRefreshTokenStore;
use crate::services::token::{RefreshTokenConfig, RefreshTokenService};

fn service(ttl_ms: i64) -> RefreshTokenService<InMemoryRefreshTokenStore> {
    RefreshTokenService::new(
        Arc::new(InMemoryRefreshTokenStore::new()),
        RefreshTokenConfig { ttl_ms },
    )
}

fn assert_invalid_refresh_token(err: DomainError) {
    match err {
        DomainError::Token(TokenError::InvalidRefreshToken) => {}
        other => panic!("expected InvalidRefreshToken, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_then_validate() {
    let service = service(60_000);

    let raw = service.create("alice", "browser").await.unwrap();
    let record = service.validate(&raw).await.unwrap().expect("usable record");

    assert_eq!(record.username, "alice");
    assert_eq!(record.device_info, "browser");
    assert!(!record.revoked);
    // Only the digest is stored
    assert_ne!(record.token_hash, raw);
}

#[tokio::test]
async fn test_validate_unknown_token_is_none() {
    let service = service(60_000);
    assert!(service.validate("never-issued").await.unwrap().is_none());
}

#[tokio::test]
async fn test_raw_tokens_are_unique() {
    let service = service(60_000);
    let a = service.create("alice", "browser").await.unwrap();
    let b = service.create("alice", "browser").await.unwrap();
    assert_ne!(a, b);
}

#[tokio::test]
async fn test_rotate_is_single_use() {
    let service = service(60_000);
    let raw = service.create("alice", "browser").await.unwrap();

    let rotated = service.rotate(&raw).await.unwrap();
    assert_ne!(rotated.raw_token, raw);
    assert_eq!(rotated.record.username, "alice");
    assert_eq!(rotated.record.device_info, "browser");

    // The old token never validates again
    assert!(service.validate(&raw).await.unwrap().is_none());
    // The replacement is live
    assert!(service.validate(&rotated.raw_token).await.unwrap().is_some());

    // Replaying the rotated-out token fails
    assert_invalid_refresh_token(service.rotate(&raw).await.unwrap_err());
}

#[tokio::test]
async fn test_rotate_unknown_token_fails() {
    let service = service(60_000);
    assert_invalid_refresh_token(service.rotate("never-issued").await.unwrap_err());
}

#[tokio::test]
async fn test_revoke_is_idempotent() {
    let service = service(60_000);
    let raw = service.create("alice", "browser").await.unwrap();

    service.revoke(&raw).await.unwrap();
    assert!(service.validate(&raw).await.unwrap().is_none());

    // Revoking again, or revoking garbage, is a quiet no-op
    service.revoke(&raw).await.unwrap();
    service.revoke("never-issued").await.unwrap();
}

#[tokio::test]
async fn test_revoked_token_cannot_rotate() {
    let service = service(60_000);
    let raw = service.create("alice", "browser").await.unwrap();

    service.revoke(&raw).await.unwrap();
    assert_invalid_refresh_token(service.rotate(&raw).await.unwrap_err());
}

#[tokio::test]
async fn test_short_ttl_token_expires() {
    let service = service(1_000);
    let raw = service.create("alice", "device-A").await.unwrap();

    assert!(service.validate(&raw).await.unwrap().is_some());

    tokio::time::sleep(Duration::from_millis(1_100)).await;
    assert!(service.validate(&raw).await.unwrap().is_none());
}

#[tokio::test]
async fn test_invalid_causes_are_indistinguishable() {
    let service = service(1_000);

    let revoked = service.create("alice", "browser").await.unwrap();
    service.revoke(&revoked).await.unwrap();

    let expired = service.create("alice", "browser").await.unwrap();
    tokio::time::sleep(Duration::from_millis(1_100)).await;

    // Revoked, expired, and never-issued all produce the same outcome
    assert_eq!(service.validate(&revoked).await.unwrap(), None);
    assert_eq!(service.validate(&expired).await.unwrap(), None);
    assert_eq!(service.validate("never-issued").await.unwrap(), None);
}

#[tokio::test]
async fn test_revoke_all_for_user() {
    let service = service(60_000);
    let a = service.create("alice", "browser").await.unwrap();
    let b = service.create("alice", "phone").await.unwrap();
    let c = service.create("bob", "browser").await.unwrap();

    let removed = service.revoke_all_for_user("alice").await.unwrap();
    assert_eq!(removed, 2);
    assert!(service.validate(&a).await.unwrap().is_none());
    assert!(service.validate(&b).await.unwrap().is_none());
    assert!(service.validate(&c).await.unwrap().is_some());
}

#[tokio::test]
async fn test_purge_expired_removes_only_dead_records() {
    let service = service(1_000);
    let stale = service.create("alice", "browser").await.unwrap();
    tokio::time::sleep(Duration::from_millis(1_100)).await;

    let live = service.create("alice", "browser").await.unwrap();

    let purged = service.purge_expired().await.unwrap();
    assert_eq!(purged, 1);
    assert!(service.validate(&stale).await.unwrap().is_none());
    assert!(service.validate(&live).await.unwrap().is_some());
}
