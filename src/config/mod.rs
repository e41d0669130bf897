//! Configuration management for the courtside service
//!
//! This module handles configuration loading from environment variables
//! and TOML files, validation, and default values for the tournament
//! service.

pub mod app;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, MatchmakingSettings, ServiceSettings};
