//! Roster management for registered players
//!
//! This module holds the in-memory player registry: signup validation,
//! sequential id assignment, and snapshot access for matchmaking.

pub mod store;

// Re-export commonly used types
pub use store::{InMemoryRoster, RosterStore};
