//! Weighted-average rating calculator
//!
//! Computes a player's scalar rating from the nine signup stats. The
//! weights are fixed, so the rating of a given stats record never changes
//! between calls or releases.

use crate::types::PlayerStats;
use crate::utils::round2;

/// Number of recognized stats; the weighted sum is averaged over this
/// count, not over the weight total.
const STAT_COUNT: f64 = 9.0;

/// Highest rating reachable, produced by an all-10 stats record
pub const MAX_RATING: f64 = 19.67;

/// Compute the rating for a stats record.
///
/// Deterministic and side-effect free. The result is rounded to two
/// decimal places; the all-zero record rates 0.0.
pub fn calculate_rating(stats: &PlayerStats) -> f64 {
    let weighted_sum = stats.experience * 2.0
        + stats.competition_level * 3.0
        + stats.height * 1.5
        + stats.weight * 1.0
        + stats.wingspan * 1.2
        + stats.shooting * 3.0
        + stats.dribbling * 2.0
        + stats.speed * 2.0
        + stats.agility * 2.0;

    round2(weighted_sum / STAT_COUNT)
}
