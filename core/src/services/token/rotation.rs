//! Periodic background trigger for signing-key rotation.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::errors::DomainResult;

use super::config::KeyRotationConfig;
use super::key_registry::SigningKeyRegistry;

/// Scheduler invoking registry rotation at a fixed interval
///
/// A failed cycle is logged and leaves the key sequence unchanged; the next
/// tick tries again.
pub struct KeyRotationScheduler {
    registry: Arc<SigningKeyRegistry>,
    config: KeyRotationConfig,
}

impl KeyRotationScheduler {
    /// Creates a new rotation scheduler over a shared registry
    pub fn new(registry: Arc<SigningKeyRegistry>, config: KeyRotationConfig) -> Self {
        Self { registry, config }
    }

    /// Runs a single rotation cycle
    pub fn run_once(&self) -> DomainResult<()> {
        self.registry.rotate()
    }

    /// Starts the scheduler as a background tokio task
    ///
    /// The first rotation happens one full interval after startup; the
    /// registry already holds a fresh key from construction.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("key rotation scheduler is disabled");
            return;
        }

        let interval = Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                interval_seconds = self.config.interval_seconds,
                "key rotation scheduler started"
            );

            let mut timer = tokio::time::interval(interval);
            // interval fires immediately on the first tick
            timer.tick().await;

            loop {
                timer.tick().await;
                if let Err(e) = self.run_once() {
                    error!("key rotation cycle failed: {e}");
                }
            }
        });
    }
}
