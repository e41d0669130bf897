//! Main application state and service coordination
//!
//! This module contains the AppState shared by every request handler: the
//! configuration, the player roster, and the metrics collector.

use crate::config::AppConfig;
use crate::metrics::MetricsCollector;
use crate::roster::{InMemoryRoster, RosterStore};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Shared application state containing all service components
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<AppConfig>,

    /// Player registry
    roster: Arc<dyn RosterStore>,

    /// Metrics collector
    metrics: Arc<MetricsCollector>,

    /// Service start time, for uptime reporting
    started_at: Instant,
}

impl AppState {
    /// Initialize the application state with an empty roster
    pub fn new(config: AppConfig) -> Result<Self> {
        Self::with_roster(config, Arc::new(InMemoryRoster::new()))
    }

    /// Initialize the application state with a custom roster store
    pub fn with_roster(config: AppConfig, roster: Arc<dyn RosterStore>) -> Result<Self> {
        let metrics =
            Arc::new(MetricsCollector::new().context("Failed to create metrics collector")?);
        metrics.update_health_status(2); // 2 = healthy

        Ok(Self {
            config: Arc::new(config),
            roster,
            metrics,
            started_at: Instant::now(),
        })
    }

    /// Get service configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the player roster
    pub fn roster(&self) -> &dyn RosterStore {
        self.roster.as_ref()
    }

    /// Get the metrics collector
    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }

    /// Time elapsed since the service started
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Spawn the background task that refreshes the uptime and roster
    /// gauges every 30 seconds. The caller owns the handle and aborts it
    /// on shutdown.
    pub fn spawn_metrics_refresh(&self) -> JoinHandle<()> {
        let state = self.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(30));
            debug!("Metrics refresh task started");

            loop {
                interval.tick().await;

                let uptime_seconds = state.uptime().as_secs() as i64;
                state.metrics.service().uptime_seconds.set(uptime_seconds);
                state.metrics.update_health_status(2);

                match state.roster.count() {
                    Ok(count) => state.metrics.set_roster_size(count),
                    Err(e) => warn!("Failed to read roster size for metrics: {}", e),
                }

                debug!("Updated service metrics - uptime: {}s", uptime_seconds);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlayerStats;

    #[test]
    fn test_app_state_starts_with_empty_roster() {
        let state = AppState::new(AppConfig::default()).unwrap();
        assert_eq!(state.roster().count().unwrap(), 0);
    }

    #[test]
    fn test_app_state_accepts_custom_roster() {
        let roster = Arc::new(InMemoryRoster::new());
        roster
            .register(
                "Ava",
                PlayerStats {
                    shooting: 5.0,
                    ..PlayerStats::default()
                },
            )
            .unwrap();

        let state = AppState::with_roster(AppConfig::default(), roster).unwrap();
        assert_eq!(state.roster().count().unwrap(), 1);
    }

    #[test]
    fn test_uptime_is_monotonic() {
        let state = AppState::new(AppConfig::default()).unwrap();
        let first = state.uptime();
        std::thread::sleep(Duration::from_millis(5));
        assert!(state.uptime() > first);
    }
}
