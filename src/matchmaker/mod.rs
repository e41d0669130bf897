//! Matchmaking policies for pairing registered players
//!
//! This module selects two distinct players from a roster snapshot under
//! either the random or the closest-rating policy.

pub mod policy;

// Re-export commonly used types
pub use policy::{
    pick_match, ClosestRatingPairing, PairingPolicy, RandomPairing, REQUIRED_PLAYERS,
};
