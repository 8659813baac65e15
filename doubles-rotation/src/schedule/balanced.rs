use rand::Rng;

use super::generic::{schedule_round_generic, RoundContext};
use super::pairing::select_pairing;
use super::selection::select_least_played;
use super::types::Match;

/// Balanced round: least-played players, and every court's split goes
/// through the pairing selector.
pub fn schedule_balanced_round<R: Rng + ?Sized>(ctx: &RoundContext, rng: &mut R) -> Vec<Match> {
    let selected = select_least_played(ctx.pool, ctx.court_count * 4, rng);
    schedule_round_generic(ctx, &selected, |group, seen| {
        select_pairing(group, ctx.pool, seen, &ctx.weights).split
    })
}
