//! Unit tests for the key rotation scheduler

use std::sync::Arc;
use std::time::Duration;

use crate::services::token::{KeyRotationConfig, KeyRotationScheduler, SigningKeyRegistry};

fn config(enabled: bool, interval_seconds: u64) -> KeyRotationConfig {
    KeyRotationConfig {
        enabled,
        keys_to_keep: 3,
        interval_seconds,
    }
}

#[test]
fn test_run_once_rotates_registry() {
    let cfg = config(true, 3600);
    let registry = Arc::new(SigningKeyRegistry::new(&cfg).unwrap());
    let scheduler = KeyRotationScheduler::new(Arc::clone(&registry), cfg);

    scheduler.run_once().unwrap();
    assert_eq!(registry.key_count(), 2);
}

#[test]
fn test_run_once_with_rotation_disabled_leaves_registry_alone() {
    let cfg = config(false, 3600);
    let registry = Arc::new(SigningKeyRegistry::new(&cfg).unwrap());
    let scheduler = KeyRotationScheduler::new(Arc::clone(&registry), cfg);

    scheduler.run_once().unwrap();
    assert_eq!(registry.key_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_background_task_rotates_after_interval() {
    let cfg = config(true, 60);
    let registry = Arc::new(SigningKeyRegistry::new(&cfg).unwrap());
    let scheduler = Arc::new(KeyRotationScheduler::new(Arc::clone(&registry), cfg));

    Arc::clone(&scheduler).start_background_task();

    // No rotation before the first interval elapses
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(registry.key_count(), 1);

    tokio::time::sleep(Duration::from_secs(31)).await;
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    assert_eq!(registry.key_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_background_task_not_spawned_when_disabled() {
    let cfg = config(false, 60);
    let registry = Arc::new(SigningKeyRegistry::new(&cfg).unwrap());
    let scheduler = Arc::new(KeyRotationScheduler::new(Arc::clone(&registry), cfg));

    Arc::clone(&scheduler).start_background_task();

    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(registry.key_count(), 1);
}
