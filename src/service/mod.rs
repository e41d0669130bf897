//! Service layer for the tournament service
//!
//! This module contains the main application state, the HTTP API server,
//! and health reporting for the running service.

pub mod app;
pub mod health;
pub mod http;

pub use app::AppState;
pub use health::{HealthCheck, HealthStatus};
pub use http::{build_router, ApiServer, ApiServerConfig};
