//! Rating computation for tournament players
//!
//! This module provides the weighted-average rating used to rank players
//! at signup time and to drive closest-rating matchmaking.

pub mod calculator;

// Re-export commonly used items
pub use calculator::{calculate_rating, MAX_RATING};
