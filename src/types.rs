//! Common types used throughout the tournament service

use crate::error::TournamentError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Unique identifier for registered players
pub type PlayerId = u64;

/// Lowest stat value accepted at signup
pub const STAT_MIN: f64 = 0.0;

/// Highest stat value accepted at signup
pub const STAT_MAX: f64 = 10.0;

/// The nine recognized stat fields, in canonical order
pub const STAT_FIELDS: [&str; 9] = [
    "experience",
    "competition_level",
    "height",
    "weight",
    "wingspan",
    "shooting",
    "dribbling",
    "speed",
    "agility",
];

/// The nine stats every player reports, each expected in the 0-10 range
///
/// The record has a fixed shape: a stat missing from a raw payload
/// deserializes to 0, and unrecognized keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub experience: f64,
    pub competition_level: f64,
    pub height: f64,
    pub weight: f64,
    pub wingspan: f64,
    pub shooting: f64,
    pub dribbling: f64,
    pub speed: f64,
    pub agility: f64,
}

impl PlayerStats {
    /// Build a stats record from a raw JSON object, requiring all nine
    /// fields to be present and numeric.
    ///
    /// Every absent field is reported in a single `MissingFields` error
    /// rather than failing on the first one.
    pub fn from_value(value: &Value) -> Result<Self, TournamentError> {
        let object = match value.as_object() {
            Some(object) => object,
            None => {
                return Err(TournamentError::MissingFields {
                    fields: STAT_FIELDS.iter().map(|f| f.to_string()).collect(),
                })
            }
        };

        let missing: Vec<String> = STAT_FIELDS
            .iter()
            .filter(|field| !object.contains_key(**field))
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(TournamentError::MissingFields { fields: missing });
        }

        Ok(Self {
            experience: stat_value(object, "experience")?,
            competition_level: stat_value(object, "competition_level")?,
            height: stat_value(object, "height")?,
            weight: stat_value(object, "weight")?,
            wingspan: stat_value(object, "wingspan")?,
            shooting: stat_value(object, "shooting")?,
            dribbling: stat_value(object, "dribbling")?,
            speed: stat_value(object, "speed")?,
            agility: stat_value(object, "agility")?,
        })
    }

    /// Visit each stat as a (field, value) pair in canonical order
    pub fn fields(&self) -> [(&'static str, f64); 9] {
        [
            ("experience", self.experience),
            ("competition_level", self.competition_level),
            ("height", self.height),
            ("weight", self.weight),
            ("wingspan", self.wingspan),
            ("shooting", self.shooting),
            ("dribbling", self.dribbling),
            ("speed", self.speed),
            ("agility", self.agility),
        ]
    }

    /// Check that every stat sits inside the accepted range.
    ///
    /// NaN and infinities fail the check like any other out-of-range value.
    pub fn validate_ranges(&self) -> Result<(), TournamentError> {
        for (field, value) in self.fields() {
            if !(STAT_MIN..=STAT_MAX).contains(&value) {
                return Err(TournamentError::StatOutOfRange {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

fn stat_value(
    object: &serde_json::Map<String, Value>,
    field: &str,
) -> Result<f64, TournamentError> {
    object
        .get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| TournamentError::NonNumericStat {
            field: field.to_string(),
        })
}

/// A registered tournament player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub rating: f64,
    pub stats: PlayerStats,
}

/// Payload accepted by the signup endpoint: a display name plus stats
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub name: String,
    pub stats: PlayerStats,
}

impl SignupRequest {
    /// Parse a signup payload, reporting `name` and absent stats together
    /// in one missing-fields error.
    pub fn from_value(value: &Value) -> Result<Self, TournamentError> {
        let object = match value.as_object() {
            Some(object) => object,
            None => {
                let mut fields = vec!["name".to_string()];
                fields.extend(STAT_FIELDS.iter().map(|f| f.to_string()));
                return Err(TournamentError::MissingFields { fields });
            }
        };

        let mut missing = Vec::new();
        if !object.contains_key("name") {
            missing.push("name".to_string());
        }
        missing.extend(
            STAT_FIELDS
                .iter()
                .filter(|field| !object.contains_key(**field))
                .map(|field| field.to_string()),
        );
        if !missing.is_empty() {
            return Err(TournamentError::MissingFields { fields: missing });
        }

        let name = object
            .get("name")
            .and_then(Value::as_str)
            .ok_or(TournamentError::InvalidName)?;

        let stats = PlayerStats::from_value(value)?;
        Ok(Self {
            name: name.to_string(),
            stats,
        })
    }
}

/// Policy used to pick an opponent for a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    Random,
    ClosestRating,
}

impl MatchPolicy {
    /// Wire name of this policy
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPolicy::Random => "random",
            MatchPolicy::ClosestRating => "closest-rating",
        }
    }
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatchPolicy {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(MatchPolicy::Random),
            "closest-rating" => Ok(MatchPolicy::ClosestRating),
            other => Err(TournamentError::UnknownPolicy {
                policy: other.to_string(),
            }),
        }
    }
}

/// A pair of distinct players selected for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchPair {
    pub player1: Player,
    pub player2: Player,
}
