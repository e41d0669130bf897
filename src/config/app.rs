//! Main application configuration
//!
//! This module defines the primary configuration structures for the
//! courtside tournament service, including environment variable loading,
//! TOML file loading, and validation.

use crate::types::MatchPolicy;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub matchmaking: MatchmakingSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging and metrics
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Interface the HTTP server binds to
    pub http_host: String,
    /// Port for the HTTP API
    pub http_port: u16,
    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout_seconds: u64,
}

/// Matchmaking-specific settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchmakingSettings {
    /// Policy used when a match request does not name one
    pub default_policy: MatchPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service: ServiceSettings::default(),
            matchmaking: MatchmakingSettings::default(),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "courtside".to_string(),
            log_level: "info".to_string(),
            http_host: "0.0.0.0".to_string(),
            http_port: 8080,
            shutdown_timeout_seconds: 30,
        }
    }
}

impl Default for MatchmakingSettings {
    fn default() -> Self {
        Self {
            default_policy: MatchPolicy::ClosestRating,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }
        if let Ok(host) = env::var("HTTP_HOST") {
            config.service.http_host = host;
        }
        if let Ok(port) = env::var("HTTP_PORT") {
            config.service.http_port = port
                .parse()
                .map_err(|_| anyhow!("Invalid HTTP_PORT value: {}", port))?;
        }
        if let Ok(timeout) = env::var("SHUTDOWN_TIMEOUT_SECONDS") {
            config.service.shutdown_timeout_seconds = timeout
                .parse()
                .map_err(|_| anyhow!("Invalid SHUTDOWN_TIMEOUT_SECONDS value: {}", timeout))?;
        }

        // Matchmaking settings
        if let Ok(policy) = env::var("DEFAULT_MATCH_POLICY") {
            config.matchmaking.default_policy = policy
                .parse()
                .map_err(|_| anyhow!("Invalid DEFAULT_MATCH_POLICY value: {}", policy))?;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parse configuration from a TOML string; missing keys fall back to
    /// their defaults
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(raw)?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Get shutdown timeout as Duration
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.service.shutdown_timeout_seconds)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate service identity and bind address
    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }
    if config.service.http_host.is_empty() {
        return Err(anyhow!("HTTP host cannot be empty"));
    }
    if config.service.http_port == 0 {
        return Err(anyhow!("HTTP port cannot be 0"));
    }

    // Validate timeouts
    if config.service.shutdown_timeout_seconds == 0 {
        return Err(anyhow!("Shutdown timeout must be greater than 0"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.service.name, "courtside");
        assert_eq!(config.service.http_port, 8080);
        assert_eq!(
            config.matchmaking.default_policy,
            MatchPolicy::ClosestRating
        );
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [service]
            http_port = 9090
            "#,
        )
        .unwrap();

        assert_eq!(config.service.http_port, 9090);
        assert_eq!(config.service.name, "courtside");
        assert_eq!(
            config.matchmaking.default_policy,
            MatchPolicy::ClosestRating
        );
    }

    #[test]
    fn test_toml_policy_uses_kebab_case() {
        let config = AppConfig::from_toml_str(
            r#"
            [matchmaking]
            default_policy = "random"
            "#,
        )
        .unwrap();
        assert_eq!(config.matchmaking.default_policy, MatchPolicy::Random);

        let error = AppConfig::from_toml_str(
            r#"
            [matchmaking]
            default_policy = "closest"
            "#,
        );
        assert!(error.is_err());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let config = AppConfig::from_toml_str(
            r#"
            [service]
            log_level = "verbose"
            "#,
        );
        assert!(config.is_err());

        let config = AppConfig::from_toml_str(
            r#"
            [service]
            http_port = 0
            "#,
        );
        assert!(config.is_err());

        let config = AppConfig::from_toml_str(
            r#"
            [service]
            shutdown_timeout_seconds = 0
            "#,
        );
        assert!(config.is_err());
    }

    #[test]
    fn test_shutdown_timeout_duration() {
        let mut config = AppConfig::default();
        config.service.shutdown_timeout_seconds = 45;
        assert_eq!(config.shutdown_timeout(), Duration::from_secs(45));
    }
}
