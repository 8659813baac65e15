use rand::seq::SliceRandom;
use rand::Rng;

use super::pool::PlayerPool;
use super::types::PlayerIndex;

/// The `count` highest-rated players, in rating order
pub fn select_top_rated(pool: &PlayerPool, count: usize) -> Vec<PlayerIndex> {
    pool.by_rating().iter().take(count).copied().collect()
}

/// Picks `count` players, fewest games played first.
///
/// Ties on play count go to the higher rating; exact ties on both are broken
/// by `rng`. The result is returned in global rating order.
pub fn select_least_played<R: Rng + ?Sized>(pool: &PlayerPool, count: usize, rng: &mut R) -> Vec<PlayerIndex> {
    let mut candidates: Vec<PlayerIndex> = (0..pool.len()).collect();
    candidates.shuffle(rng);

    // Stable sort so the shuffle decides among exact ties
    candidates.sort_by(|&a, &b| {
        let pa = pool.player(a);
        let pb = pool.player(b);
        pa.play_count
            .cmp(&pb.play_count)
            .then_with(|| pb.rating().total_cmp(&pa.rating()))
    });
    candidates.truncate(count);

    pool.sort_by_rank(&mut candidates);
    candidates
}
