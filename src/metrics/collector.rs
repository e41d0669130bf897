//! Metrics collection using Prometheus
//!
//! This module provides metrics collection for the courtside tournament
//! service using Prometheus metrics.

use crate::types::MatchPolicy;
use anyhow::Result;
use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main metrics collector for the tournament service
#[derive(Clone)]
pub struct MetricsCollector {
    /// Prometheus registry
    registry: Arc<Registry>,

    /// Service-level metrics
    service_metrics: ServiceMetrics,

    /// Roster and rating metrics
    roster_metrics: RosterMetrics,

    /// Matchmaking metrics
    match_metrics: MatchMetrics,
}

/// Service-level metrics
#[derive(Clone)]
pub struct ServiceMetrics {
    /// Service uptime in seconds
    pub uptime_seconds: IntGauge,

    /// Health check status (0=unhealthy, 1=degraded, 2=healthy)
    pub health_status: IntGauge,
}

/// Roster and rating metrics
#[derive(Clone)]
pub struct RosterMetrics {
    /// Total successful signups
    pub signups_total: IntCounter,

    /// Rejected signups by reason
    pub signup_rejections_total: IntCounterVec,

    /// Total rating predictions served
    pub predictions_total: IntCounter,

    /// Current number of registered players
    pub roster_size: IntGauge,

    /// Distribution of computed ratings
    pub rating_distribution: Histogram,
}

/// Matchmaking metrics
#[derive(Clone)]
pub struct MatchMetrics {
    /// Matches made by policy
    pub matches_total: IntCounterVec,

    /// Match requests rejected for lack of players
    pub match_failures_total: IntCounter,

    /// Rating gap of the matches made
    pub rating_difference: Histogram,

    /// Time spent picking a pair
    pub pairing_duration_seconds: Histogram,
}

impl MetricsCollector {
    /// Create a new metrics collector with default registry
    pub fn new() -> Result<Self> {
        let registry = Arc::new(Registry::new());
        Self::with_registry(registry)
    }

    /// Create a new metrics collector with custom registry
    pub fn with_registry(registry: Arc<Registry>) -> Result<Self> {
        let service_metrics = ServiceMetrics::new(&registry)?;
        let roster_metrics = RosterMetrics::new(&registry)?;
        let match_metrics = MatchMetrics::new(&registry)?;

        Ok(Self {
            registry,
            service_metrics,
            roster_metrics,
            match_metrics,
        })
    }

    /// Get the Prometheus registry
    pub fn registry(&self) -> Arc<Registry> {
        self.registry.clone()
    }

    /// Get service metrics
    pub fn service(&self) -> &ServiceMetrics {
        &self.service_metrics
    }

    /// Get roster metrics
    pub fn roster(&self) -> &RosterMetrics {
        &self.roster_metrics
    }

    /// Get matchmaking metrics
    pub fn matches(&self) -> &MatchMetrics {
        &self.match_metrics
    }

    /// Record a successful signup and its computed rating
    pub fn record_signup(&self, rating: f64) {
        self.roster_metrics.signups_total.inc();
        self.roster_metrics.rating_distribution.observe(rating);
    }

    /// Record a rejected signup by reason label
    pub fn record_signup_rejected(&self, reason: &str) {
        self.roster_metrics
            .signup_rejections_total
            .with_label_values(&[reason])
            .inc();
    }

    /// Record a rating prediction
    pub fn record_prediction(&self, rating: f64) {
        self.roster_metrics.predictions_total.inc();
        self.roster_metrics.rating_distribution.observe(rating);
    }

    /// Update the roster size gauge
    pub fn set_roster_size(&self, count: usize) {
        self.roster_metrics.roster_size.set(count as i64);
    }

    /// Record a match being made
    pub fn record_match(&self, policy: MatchPolicy, rating_difference: f64, duration: Duration) {
        self.match_metrics
            .matches_total
            .with_label_values(&[policy.as_str()])
            .inc();

        self.match_metrics
            .rating_difference
            .observe(rating_difference);

        self.match_metrics
            .pairing_duration_seconds
            .observe(duration.as_secs_f64());
    }

    /// Record a match request that failed for lack of players
    pub fn record_match_failure(&self) {
        self.match_metrics.match_failures_total.inc();
    }

    /// Update health status
    pub fn update_health_status(&self, status: u8) {
        self.service_metrics.health_status.set(status as i64);
    }

    /// Create a timer for measuring operation duration
    pub fn start_timer(&self) -> MetricsTimer {
        MetricsTimer::new()
    }
}

/// Timer for measuring operation durations
pub struct MetricsTimer {
    start: Instant,
}

impl MetricsTimer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get the elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and return the duration
    pub fn stop(self) -> Duration {
        self.elapsed()
    }
}

impl ServiceMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let uptime_seconds = IntGauge::new("courtside_uptime_seconds", "Service uptime in seconds")?;
        registry.register(Box::new(uptime_seconds.clone()))?;

        let health_status = IntGauge::new(
            "courtside_health_status",
            "Health status (0=unhealthy, 1=degraded, 2=healthy)",
        )?;
        registry.register(Box::new(health_status.clone()))?;

        Ok(Self {
            uptime_seconds,
            health_status,
        })
    }
}

impl RosterMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let signups_total =
            IntCounter::new("courtside_signups_total", "Total successful signups")?;
        registry.register(Box::new(signups_total.clone()))?;

        let signup_rejections_total = IntCounterVec::new(
            Opts::new(
                "courtside_signup_rejections_total",
                "Rejected signups by reason",
            ),
            &["reason"],
        )?;
        registry.register(Box::new(signup_rejections_total.clone()))?;

        let predictions_total = IntCounter::new(
            "courtside_predictions_total",
            "Total rating predictions served",
        )?;
        registry.register(Box::new(predictions_total.clone()))?;

        let roster_size =
            IntGauge::new("courtside_roster_size", "Number of registered players")?;
        registry.register(Box::new(roster_size.clone()))?;

        let rating_distribution = Histogram::with_opts(
            HistogramOpts::new(
                "courtside_rating_distribution",
                "Distribution of computed ratings",
            )
            .buckets(vec![
                2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0,
            ]),
        )?;
        registry.register(Box::new(rating_distribution.clone()))?;

        Ok(Self {
            signups_total,
            signup_rejections_total,
            predictions_total,
            roster_size,
            rating_distribution,
        })
    }
}

impl MatchMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let matches_total = IntCounterVec::new(
            Opts::new("courtside_matches_total", "Matches made by policy"),
            &["policy"],
        )?;
        registry.register(Box::new(matches_total.clone()))?;

        let match_failures_total = IntCounter::new(
            "courtside_match_failures_total",
            "Match requests rejected for lack of players",
        )?;
        registry.register(Box::new(match_failures_total.clone()))?;

        let rating_difference = Histogram::with_opts(
            HistogramOpts::new(
                "courtside_match_rating_difference",
                "Rating gap of the matches made",
            )
            .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0]),
        )?;
        registry.register(Box::new(rating_difference.clone()))?;

        let pairing_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "courtside_pairing_duration_seconds",
                "Time spent picking a pair",
            )
            .buckets(vec![0.0001, 0.001, 0.005, 0.01, 0.05, 0.1]),
        )?;
        registry.register(Box::new(pairing_duration_seconds.clone()))?;

        Ok(Self {
            matches_total,
            match_failures_total,
            rating_difference,
            pairing_duration_seconds,
        })
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new().expect("Failed to create default metrics collector")
    }
}
