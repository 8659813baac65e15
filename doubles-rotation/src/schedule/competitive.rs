use super::generic::{schedule_round_generic, RoundContext};
use super::phase::FixedSplit;
use super::selection::select_top_rated;
use super::types::Match;

/// Competitive round: the top-rated players fill the courts in rating
/// blocks and everyone else sits out.
pub fn schedule_competitive_round(ctx: &RoundContext) -> Vec<Match> {
    let selected = select_top_rated(ctx.pool, ctx.court_count * 4);
    let split = ctx.plan.fixed_split.unwrap_or(FixedSplit::OuterVsInner);
    schedule_round_generic(ctx, &selected, |group, _| split.apply(group))
}
