use super::cost::CostWeights;
use super::courts::allocate_courts;
use super::history::MatchHistory;
use super::phase::RoundPlan;
use super::pool::PlayerPool;
use super::types::{Match, PlayerIndex, Split};

/// Read-only view handed to a round strategy
#[derive(Debug, Clone, Copy)]
pub struct RoundContext<'a> {
    pub plan: &'a RoundPlan,
    pub pool: &'a PlayerPool,
    pub history: &'a MatchHistory,
    pub weights: CostWeights,
    pub court_count: usize,
}

/// Generic round builder: courts from the plan's pattern, one split per court.
///
/// `choose_split` receives each court's group in rank order together with a
/// history that already contains the earlier courts of this round.
pub fn schedule_round_generic<F>(ctx: &RoundContext, selected: &[PlayerIndex], mut choose_split: F) -> Vec<Match>
where
    F: FnMut(&[PlayerIndex; 4], &MatchHistory) -> Split,
{
    let mut seen = ctx.history.clone();
    let mut matches = Vec::with_capacity(ctx.court_count);

    for (court, group) in allocate_courts(selected, ctx.plan.pattern, ctx.court_count) {
        let split = choose_split(&group, &seen);
        let scheduled = Match::new(ctx.plan.round, court, split);
        seen.record(&scheduled);
        matches.push(scheduled);
    }

    matches
}
