//! Error types for the tournament service
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific tournament scenarios
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("Missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("Stat '{field}' must be a number")]
    NonNumericStat { field: String },

    #[error("Stat '{field}' must be between 0 and 10, got {value}")]
    StatOutOfRange { field: String, value: f64 },

    #[error("Player name must be a non-empty string")]
    InvalidName,

    #[error("Player name '{name}' is already taken")]
    DuplicateName { name: String },

    #[error("Not enough players for matchmaking: have {current}, need {required}")]
    NotEnoughPlayers { required: usize, current: usize },

    #[error("Unknown match policy: '{policy}'")]
    UnknownPolicy { policy: String },

    #[error("Internal service error: {message}")]
    InternalError { message: String },
}

impl TournamentError {
    /// Stable label for this error kind, used in logs and metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            TournamentError::MissingFields { .. } => "missing_fields",
            TournamentError::NonNumericStat { .. } => "non_numeric_stat",
            TournamentError::StatOutOfRange { .. } => "stat_out_of_range",
            TournamentError::InvalidName => "invalid_name",
            TournamentError::DuplicateName { .. } => "duplicate_name",
            TournamentError::NotEnoughPlayers { .. } => "not_enough_players",
            TournamentError::UnknownPolicy { .. } => "unknown_policy",
            TournamentError::InternalError { .. } => "internal_error",
        }
    }
}
