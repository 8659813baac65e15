use crate::config::SchedulerConfig;

use super::history::MatchHistory;
use super::pool::PlayerPool;
use super::types::Split;

/// Surcharge when the pool's two best players share a team
pub const BALANCE_PENALTY: f64 = 1000.0;

/// Credit per opponent pairing not seen earlier in the session
pub const NEW_OPPONENT_BONUS: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostWeights {
    pub partner: f64,
    pub rating: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            partner: 10.0,
            rating: 1.0,
        }
    }
}

impl From<&SchedulerConfig> for CostWeights {
    fn from(config: &SchedulerConfig) -> Self {
        Self {
            partner: config.partner_weight,
            rating: config.rating_weight,
        }
    }
}

/// Players (out of four) whose partner in `split` is a repeat partner
pub fn repeat_partner_count(split: &Split, pool: &PlayerPool) -> usize {
    [split.team_a, split.team_b]
        .iter()
        .flat_map(|&[x, y]| [(x, y), (y, x)])
        .filter(|&(player, partner)| pool.player(player).has_partnered(partner))
        .count()
}

/// Cross-team opponent pairs that have never faced each other
pub fn new_opponent_count(split: &Split, history: &MatchHistory) -> usize {
    let mut count = 0;
    for &x in &split.team_a {
        for &y in &split.team_b {
            if !history.have_opposed(x, y) {
                count += 1;
            }
        }
    }
    count
}

fn average_rating(pool: &PlayerPool, team: [usize; 2]) -> f64 {
    (pool.player(team[0]).rating() + pool.player(team[1]).rating()) / 2.0
}

/// Scores a split; lower is better and the value may be negative.
pub fn split_cost(split: &Split, pool: &PlayerPool, history: &MatchHistory, weights: &CostWeights) -> f64 {
    let partner_term = weights.partner * repeat_partner_count(split, pool) as f64;

    let rating_gap = (average_rating(pool, split.team_a) - average_rating(pool, split.team_b)).abs();
    let rating_term = weights.rating * rating_gap;

    let (best, second) = pool.top_two();
    let penalty = if split.same_team(best, second) {
        BALANCE_PENALTY
    } else {
        0.0
    };

    let bonus = NEW_OPPONENT_BONUS * new_opponent_count(split, history) as f64;

    partner_term + rating_term + penalty - bonus
}
