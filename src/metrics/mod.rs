//! Metrics and monitoring for the courtside tournament service
//!
//! This module provides Prometheus metrics collection for signups,
//! predictions, and matchmaking. The metrics are exposed through the API
//! server's /metrics endpoint.

pub mod collector;

pub use collector::{
    MatchMetrics, MetricsCollector, MetricsTimer, RosterMetrics, ServiceMetrics,
};
