//! Configuration for the token services

use std::env;

/// Signing-key rotation configuration
#[derive(Debug, Clone)]
pub struct KeyRotationConfig {
    /// Whether periodic rotation is enabled; when false `rotate()` is a no-op
    pub enabled: bool,
    /// How many keys to retain after a rotation (>= 1); older keys stay
    /// available for verification until evicted
    pub keys_to_keep: usize,
    /// Rotation interval in seconds
    pub interval_seconds: u64,
}

impl Default for KeyRotationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            keys_to_keep: 3,
            interval_seconds: 86_400, // rotate daily
        }
    }
}

impl KeyRotationConfig {
    /// Creates config from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env::var("JWK_ROTATION_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enabled),
            keys_to_keep: env::var("JWK_ROTATION_KEYS_TO_KEEP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.keys_to_keep),
            interval_seconds: env::var("JWK_ROTATION_INTERVAL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.interval_seconds),
        }
    }
}

/// Access token configuration
#[derive(Debug, Clone)]
pub struct AccessTokenConfig {
    /// Access token lifetime in seconds
    pub ttl_seconds: i64,
    /// Accepted clock drift when checking expiry; 0 means expiry is exact
    pub clock_skew_seconds: i64,
}

impl Default for AccessTokenConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 900, // 15 minutes
            clock_skew_seconds: 0,
        }
    }
}

impl AccessTokenConfig {
    /// Creates config from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_seconds: env::var("ACCESS_TOKEN_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ttl_seconds),
            clock_skew_seconds: env::var("TOKEN_CLOCK_SKEW_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.clock_skew_seconds),
        }
    }
}

/// Refresh token configuration
#[derive(Debug, Clone)]
pub struct RefreshTokenConfig {
    /// Refresh token lifetime in milliseconds
    pub ttl_ms: i64,
}

impl Default for RefreshTokenConfig {
    fn default() -> Self {
        Self {
            ttl_ms: 7 * 24 * 60 * 60 * 1000, // 7 days
        }
    }
}

impl RefreshTokenConfig {
    /// Creates config from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_ms: env::var("REFRESH_TOKEN_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ttl_ms),
        }
    }
}

/// Aggregate configuration for the token subsystem
///
/// `keys_to_keep * rotation interval` should not be shorter than the access
/// token ttl, otherwise a live token could outlast its verification key.
#[derive(Debug, Clone, Default)]
pub struct TokenServiceConfig {
    pub access: AccessTokenConfig,
    pub refresh: RefreshTokenConfig,
    pub rotation: KeyRotationConfig,
}

impl TokenServiceConfig {
    /// Creates config from environment variables
    pub fn from_env() -> Self {
        Self {
            access: AccessTokenConfig::from_env(),
            refresh: RefreshTokenConfig::from_env(),
            rotation: KeyRotationConfig::from_env(),
        }
    }
}
