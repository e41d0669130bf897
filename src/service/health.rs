//! Health reporting for the tournament service

use crate::service::app::AppState;
use crate::utils::current_timestamp;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Overall health status of the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "✅ healthy"),
            HealthStatus::Unhealthy => write!(f, "❌ unhealthy"),
        }
    }
}

/// Snapshot returned by the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Overall service status
    pub status: HealthStatus,
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// Number of players currently on the roster
    pub roster_size: usize,
    /// Seconds since the service started
    pub uptime_seconds: u64,
    /// Current timestamp
    pub timestamp: DateTime<Utc>,
}

impl HealthCheck {
    /// Build a health snapshot from the current service state. The roster
    /// is the only stateful component, so a poisoned roster lock is the
    /// one condition that marks the service unhealthy.
    pub fn snapshot(state: &AppState) -> Self {
        let (status, roster_size) = match state.roster().count() {
            Ok(count) => (HealthStatus::Healthy, count),
            Err(_) => (HealthStatus::Unhealthy, 0),
        };

        Self {
            status,
            service: state.config().service.name.clone(),
            version: crate::VERSION.to_string(),
            roster_size,
            uptime_seconds: state.uptime().as_secs(),
            timestamp: current_timestamp(),
        }
    }

    /// Whether the snapshot reports a healthy service
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }

    /// Convert the health check to a pretty JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize health check: {}", e))
    }
}
