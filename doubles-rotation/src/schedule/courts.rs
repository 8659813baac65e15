use tracing::debug;

use super::phase::CourtPattern;
use super::types::PlayerIndex;

/// Courts that can run with `player_count` players, capped by `max_courts`
pub fn usable_courts(player_count: usize, max_courts: Option<usize>) -> usize {
    let by_players = player_count / 4;
    match max_courts {
        Some(max) => by_players.min(max),
        None => by_players,
    }
}

/// Rank positions (0-based) a court draws from for the given pattern.
/// `court` is 1-based.
pub fn court_positions(pattern: CourtPattern, court: usize, court_count: usize) -> [usize; 4] {
    let contiguous = |start: usize| [start, start + 1, start + 2, start + 3];
    match pattern {
        CourtPattern::Contiguous => contiguous((court - 1) * 4),
        CourtPattern::Interleave(halves) => {
            // Courts 1-2 share ranks 0..8, court 3 takes 8..12, then pairs
            // of courts share 8-rank blocks from 12 on.
            let (block, slot) = match court {
                1 | 2 => (0, court - 1),
                3 => return contiguous(8),
                _ => (12 + ((court - 4) / 2) * 8, (court - 4) % 2),
            };
            if slot == 0 && court == court_count {
                // Unpaired last court
                contiguous(block)
            } else {
                halves[slot].map(|offset| block + offset)
            }
        }
    }
}

/// Groups rating-ordered players into courts.
///
/// Returns `(court, group)` pairs where each group is in global rank order.
/// Pattern positions that are out of range or already taken are replaced by
/// the lowest unused positions; a court that still cannot reach four players
/// is left out.
pub fn allocate_courts(
    ranked: &[PlayerIndex],
    pattern: CourtPattern,
    court_count: usize,
) -> Vec<(usize, [PlayerIndex; 4])> {
    let mut used = vec![false; ranked.len()];
    let mut groups = Vec::new();

    for court in 1..=court_count {
        let mut positions: Vec<usize> = court_positions(pattern, court, court_count)
            .into_iter()
            .filter(|&pos| pos < ranked.len() && !used[pos])
            .collect();

        if positions.len() < 4 {
            let fill: Vec<usize> = (0..ranked.len())
                .filter(|pos| !used[*pos] && !positions.contains(pos))
                .take(4 - positions.len())
                .collect();
            positions.extend(fill);
        }

        if positions.len() < 4 {
            debug!("Court {} underfilled ({} players), skipping", court, positions.len());
            continue;
        }

        positions.sort_unstable();
        for &pos in &positions {
            used[pos] = true;
        }
        groups.push((
            court,
            [
                ranked[positions[0]],
                ranked[positions[1]],
                ranked[positions[2]],
                ranked[positions[3]],
            ],
        ));
    }

    groups
}
