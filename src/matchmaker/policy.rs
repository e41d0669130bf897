//! Opponent selection policies
//!
//! Pairing operates on an immutable roster snapshot and never mutates it.
//! Both policies draw the first player uniformly at random; they differ in
//! how the opponent is chosen. Self-pairing is excluded by player id, so
//! two players with identical stats and ratings are still distinct draws.

use crate::error::TournamentError;
use crate::types::{MatchPair, MatchPolicy, Player};
use rand::seq::SliceRandom;
use rand::RngCore;

/// Number of players a pairing needs
pub const REQUIRED_PLAYERS: usize = 2;

/// Trait for pairing policies
pub trait PairingPolicy: Send + Sync {
    /// Select two distinct players from the snapshot
    fn pick_pair(
        &self,
        players: &[Player],
        rng: &mut dyn RngCore,
    ) -> Result<MatchPair, TournamentError>;
}

/// Uniform random pairing: the opponent is re-drawn until it lands on a
/// different id than the first player
#[derive(Debug, Default)]
pub struct RandomPairing;

impl PairingPolicy for RandomPairing {
    fn pick_pair(
        &self,
        players: &[Player],
        rng: &mut dyn RngCore,
    ) -> Result<MatchPair, TournamentError> {
        ensure_enough_players(players)?;

        let first = draw(players, rng)?;
        let second = loop {
            let candidate = draw(players, rng)?;
            if candidate.id != first.id {
                break candidate;
            }
        };

        Ok(MatchPair {
            player1: first.clone(),
            player2: second.clone(),
        })
    }
}

/// Skill-based pairing: the opponent minimizes the absolute rating
/// difference to the first player, ties going to the lowest id
#[derive(Debug, Default)]
pub struct ClosestRatingPairing;

impl PairingPolicy for ClosestRatingPairing {
    fn pick_pair(
        &self,
        players: &[Player],
        rng: &mut dyn RngCore,
    ) -> Result<MatchPair, TournamentError> {
        ensure_enough_players(players)?;

        let first = draw(players, rng)?;
        let second =
            closest_opponent(players, first).ok_or_else(|| TournamentError::InternalError {
                message: "No opponent candidates after roster size check".to_string(),
            })?;

        Ok(MatchPair {
            player1: first.clone(),
            player2: second.clone(),
        })
    }
}

/// Find the opponent with the smallest |rating difference| to `first`,
/// breaking ties by lowest id so the result does not depend on snapshot
/// ordering.
fn closest_opponent<'a>(players: &'a [Player], first: &Player) -> Option<&'a Player> {
    let mut best: Option<&Player> = None;
    let mut best_difference = f64::INFINITY;

    for candidate in players {
        if candidate.id == first.id {
            continue;
        }

        let difference = (candidate.rating - first.rating).abs();
        let better = match best {
            None => true,
            Some(current) => {
                difference < best_difference
                    || (difference == best_difference && candidate.id < current.id)
            }
        };
        if better {
            best = Some(candidate);
            best_difference = difference;
        }
    }

    best
}

fn ensure_enough_players(players: &[Player]) -> Result<(), TournamentError> {
    if players.len() < REQUIRED_PLAYERS {
        return Err(TournamentError::NotEnoughPlayers {
            required: REQUIRED_PLAYERS,
            current: players.len(),
        });
    }
    Ok(())
}

fn draw<'a>(players: &'a [Player], rng: &mut dyn RngCore) -> Result<&'a Player, TournamentError> {
    players
        .choose(rng)
        .ok_or_else(|| TournamentError::InternalError {
            message: "Draw from empty roster snapshot".to_string(),
        })
}

impl MatchPolicy {
    /// The pairing implementation behind this policy
    pub fn pairing(&self) -> &'static dyn PairingPolicy {
        match self {
            MatchPolicy::Random => &RandomPairing,
            MatchPolicy::ClosestRating => &ClosestRatingPairing,
        }
    }
}

/// Select two distinct players from the snapshot under the given policy
pub fn pick_match(
    players: &[Player],
    policy: MatchPolicy,
    rng: &mut dyn RngCore,
) -> Result<MatchPair, TournamentError> {
    policy.pairing().pick_pair(players, rng)
}
