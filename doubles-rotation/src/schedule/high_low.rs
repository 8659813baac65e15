use rand::Rng;

use super::generic::{schedule_round_generic, RoundContext};
use super::phase::FixedSplit;
use super::selection::select_least_played;
use super::types::Match;

/// High/low round: least-played players, interleaved courts and a fixed
/// positional split. History is not consulted for the split.
pub fn schedule_high_low_round<R: Rng + ?Sized>(ctx: &RoundContext, rng: &mut R) -> Vec<Match> {
    let selected = select_least_played(ctx.pool, ctx.court_count * 4, rng);
    let split = ctx.plan.fixed_split.unwrap_or(FixedSplit::OuterVsInner);
    schedule_round_generic(ctx, &selected, |group, _| split.apply(group))
}
