//! Courtside - 1v1 basketball tournament web service
//!
//! This crate provides player signup with weighted stat ratings,
//! matchmaking by random draw or closest rating, and tournament
//! matchup announcements over an HTTP API.

pub mod config;
pub mod error;
pub mod matchmaker;
pub mod metrics;
pub mod rating;
pub mod roster;
pub mod service;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Result, TournamentError};
pub use types::*;

// Re-export key components
pub use matchmaker::{pick_match, REQUIRED_PLAYERS};
pub use rating::{calculate_rating, MAX_RATING};
pub use roster::{InMemoryRoster, RosterStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
