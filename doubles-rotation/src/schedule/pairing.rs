use tracing::{debug, warn};

use super::cost::{repeat_partner_count, split_cost, CostWeights};
use super::history::MatchHistory;
use super::phase::FixedSplit;
use super::pool::PlayerPool;
use super::types::{PlayerIndex, Split};

/// How far the selector had to fall back
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SelectionTier {
    /// No repeated partnership on either side
    Fresh,
    /// A partnership repeats, but the matchup as a whole is new
    RepeatPartner,
    /// Every option replays an earlier matchup
    RepeatMatchup,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub split: Split,
    /// Lower is the preferred balance shape
    pub priority: u8,
    pub cost: f64,
    pub repeat_partner: bool,
    pub repeat_matchup: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairingChoice {
    pub split: Split,
    pub cost: f64,
    pub tier: SelectionTier,
}

/// The two candidate splits for a group in local rank order
pub fn candidate_splits(group: &[PlayerIndex; 4]) -> [(u8, Split); 2] {
    [
        (0, FixedSplit::OuterVsInner.apply(group)),
        (1, FixedSplit::OddVsEven.apply(group)),
    ]
}

pub fn evaluate_candidates(
    group: &[PlayerIndex; 4],
    pool: &PlayerPool,
    history: &MatchHistory,
    weights: &CostWeights,
) -> Vec<Candidate> {
    candidate_splits(group)
        .into_iter()
        .map(|(priority, split)| Candidate {
            split,
            priority,
            cost: split_cost(&split, pool, history, weights),
            repeat_partner: repeat_partner_count(&split, pool) > 0,
            repeat_matchup: history.is_repeat_matchup(&split),
        })
        .collect()
}

fn best_of<'a>(candidates: impl Iterator<Item = &'a Candidate>) -> Option<&'a Candidate> {
    candidates.min_by(|a, b| a.cost.total_cmp(&b.cost).then(a.priority.cmp(&b.priority)))
}

/// Picks the split for a group of four, given in local rank order.
///
/// Tiers are strict: any split without a repeat partnership beats any split
/// with one, and a replayed matchup is only taken when nothing else exists.
/// Within a tier the lowest cost wins, then the lower priority.
pub fn select_pairing(
    group: &[PlayerIndex; 4],
    pool: &PlayerPool,
    history: &MatchHistory,
    weights: &CostWeights,
) -> PairingChoice {
    let candidates = evaluate_candidates(group, pool, history, weights);

    let (chosen, tier) = if let Some(c) = best_of(candidates.iter().filter(|c| !c.repeat_partner)) {
        (c, SelectionTier::Fresh)
    } else if let Some(c) = best_of(candidates.iter().filter(|c| !c.repeat_matchup)) {
        (c, SelectionTier::RepeatPartner)
    } else {
        // Two candidates always exist
        let c = best_of(candidates.iter()).unwrap_or(&candidates[0]);
        warn!(
            "Degenerate split for group {:?}: every option repeats an earlier matchup",
            group
        );
        (c, SelectionTier::RepeatMatchup)
    };

    debug!(
        "Group {:?} -> {:?} vs {:?} (cost {:.2}, {:?})",
        group, chosen.split.team_a, chosen.split.team_b, chosen.cost, tier
    );

    let (best, second) = pool.top_two();
    if chosen.split.same_team(best, second) {
        warn!(
            "Top-rated players {} and {} placed on the same team",
            pool.player(best).player_id(),
            pool.player(second).player_id()
        );
    }

    PairingChoice {
        split: chosen.split,
        cost: chosen.cost,
        tier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::RosterEntry;
    use crate::schedule::types::Match;

    fn pool(ratings: &[f64]) -> PlayerPool {
        let roster: Vec<RosterEntry> = ratings
            .iter()
            .enumerate()
            .map(|(i, &r)| RosterEntry::new(format!("p{}", i), format!("Player {}", i), r, 1000.0))
            .collect();
        PlayerPool::from_roster(&roster).unwrap()
    }

    fn play(pool: &mut PlayerPool, history: &mut MatchHistory, split: Split) {
        let m = Match::new(1, 1, split);
        pool.apply_match(&m);
        history.record(&m);
    }

    #[test]
    fn fresh_group_takes_outer_vs_inner() {
        let pool = pool(&[8.0, 6.0, 4.0, 2.0]);
        let choice = select_pairing(&[0, 1, 2, 3], &pool, &MatchHistory::new(), &CostWeights::default());
        assert_eq!(choice.split, Split::new([0, 3], [1, 2]));
        assert_eq!(choice.tier, SelectionTier::Fresh);
    }

    #[test]
    fn fresh_beats_cheaper_repeat_partner() {
        let mut pool = pool(&[8.0, 6.0, 4.0, 2.0]);
        let mut history = MatchHistory::new();
        play(&mut pool, &mut history, Split::new([0, 3], [1, 2]));

        // Zero weight on partners makes the repeat the cheaper option
        let weights = CostWeights { partner: 0.0, rating: 100.0 };
        let choice = select_pairing(&[0, 1, 2, 3], &pool, &history, &weights);
        assert_eq!(choice.split, Split::new([0, 2], [1, 3]));
        assert_eq!(choice.tier, SelectionTier::Fresh);
    }

    #[test]
    fn repeat_partner_preferred_over_replayed_matchup() {
        let mut pool = pool(&[8.0, 6.0, 4.0, 2.0, 1.0]);
        let mut history = MatchHistory::new();
        // 0+3 vs 1+2 already played; 0+2 partnered in another match
        play(&mut pool, &mut history, Split::new([0, 3], [1, 2]));
        play(&mut pool, &mut history, Split::new([0, 2], [1, 4]));

        let choice = select_pairing(&[0, 1, 2, 3], &pool, &history, &CostWeights::default());
        assert_eq!(choice.split, Split::new([0, 2], [1, 3]));
        assert_eq!(choice.tier, SelectionTier::RepeatPartner);
    }

    #[test]
    fn all_replayed_still_returns_a_split() {
        let mut pool = pool(&[8.0, 6.0, 4.0, 2.0]);
        let mut history = MatchHistory::new();
        play(&mut pool, &mut history, Split::new([0, 3], [1, 2]));
        play(&mut pool, &mut history, Split::new([0, 2], [1, 3]));

        let choice = select_pairing(&[0, 1, 2, 3], &pool, &history, &CostWeights::default());
        assert_eq!(choice.tier, SelectionTier::RepeatMatchup);
        // Equal partner and opponent terms, so the smaller rating gap wins
        assert_eq!(choice.split, Split::new([0, 3], [1, 2]));
    }

    #[test]
    fn candidates_never_pair_the_two_best_of_a_group() {
        for (_, split) in candidate_splits(&[4, 7, 1, 9]) {
            assert!(!split.same_team(4, 7));
        }
    }
}
