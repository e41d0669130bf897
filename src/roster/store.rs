//! Roster storage interface and in-memory implementation
//!
//! The roster is the append-only registry of signed-up players. All
//! registration checks (name validity, uniqueness, stat ranges) and id
//! assignment happen under a single write lock, so concurrent signups can
//! never produce duplicate names or duplicate ids.

use crate::error::TournamentError;
use crate::rating::calculate_rating;
use crate::types::{Player, PlayerId, PlayerStats};
use std::sync::RwLock;

/// Trait for roster storage operations
pub trait RosterStore: Send + Sync {
    /// Validate and register a new player, assigning the next id
    fn register(&self, name: &str, stats: PlayerStats) -> Result<Player, TournamentError>;

    /// Snapshot of all registered players in signup order
    fn list(&self) -> Result<Vec<Player>, TournamentError>;

    /// Number of registered players
    fn count(&self) -> Result<usize, TournamentError>;
}

/// Interior state guarded by the roster lock
#[derive(Debug)]
struct RosterState {
    players: Vec<Player>,
    /// Next id to hand out. Ids start at 1 and are never reused.
    next_id: PlayerId,
}

/// In-memory roster implementation
#[derive(Debug)]
pub struct InMemoryRoster {
    state: RwLock<RosterState>,
}

impl InMemoryRoster {
    /// Create a new empty roster
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RosterState {
                players: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterStore for InMemoryRoster {
    fn register(&self, name: &str, stats: PlayerStats) -> Result<Player, TournamentError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TournamentError::InvalidName);
        }
        stats.validate_ranges()?;

        let mut state = self
            .state
            .write()
            .map_err(|_| TournamentError::InternalError {
                message: "Failed to acquire roster write lock".to_string(),
            })?;

        // Uniqueness is case-insensitive against the trimmed stored names
        let lowered = trimmed.to_lowercase();
        if state
            .players
            .iter()
            .any(|player| player.name.to_lowercase() == lowered)
        {
            return Err(TournamentError::DuplicateName {
                name: trimmed.to_string(),
            });
        }

        let player = Player {
            id: state.next_id,
            name: trimmed.to_string(),
            rating: calculate_rating(&stats),
            stats,
        };
        state.next_id += 1;
        state.players.push(player.clone());

        Ok(player)
    }

    fn list(&self) -> Result<Vec<Player>, TournamentError> {
        let state = self
            .state
            .read()
            .map_err(|_| TournamentError::InternalError {
                message: "Failed to acquire roster read lock".to_string(),
            })?;

        Ok(state.players.clone())
    }

    fn count(&self) -> Result<usize, TournamentError> {
        let state = self
            .state
            .read()
            .map_err(|_| TournamentError::InternalError {
                message: "Failed to acquire roster read lock".to_string(),
            })?;

        Ok(state.players.len())
    }
}
