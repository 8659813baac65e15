use std::collections::HashSet;

use crate::error::{SchedResult, SchedulerError};
use crate::parser::RosterEntry;

use super::types::{Match, PlayerIndex, PlayerRecord};

/// Exclusively owned player state for one scheduling run.
///
/// Strategies only ever see `&PlayerPool`; the assembler is the single
/// writer through [`PlayerPool::apply_match`].
#[derive(Debug, Clone)]
pub struct PlayerPool {
    players: Vec<PlayerRecord>,
    /// Player indices by descending rating, ties in roster order
    by_rating: Vec<PlayerIndex>,
    /// Global rating rank (0 = best) of each player
    rank: Vec<usize>,
}

impl PlayerPool {
    pub fn from_roster(roster: &[RosterEntry]) -> SchedResult<Self> {
        if roster.len() < 4 {
            return Err(SchedulerError::InsufficientPlayers {
                found: roster.len(),
            });
        }

        let mut seen = HashSet::new();
        for entry in roster {
            if !seen.insert(entry.player_id.as_str()) {
                return Err(SchedulerError::InvalidRoster(format!(
                    "duplicate player id '{}'",
                    entry.player_id
                )));
            }
            if !entry.rating_a.is_finite() || !entry.rating_b.is_finite() || !entry.aux_score.is_finite() {
                return Err(SchedulerError::InvalidRoster(format!(
                    "player '{}' has a non-finite rating",
                    entry.player_id
                )));
            }
        }

        let players: Vec<PlayerRecord> = roster.iter().cloned().map(PlayerRecord::new).collect();

        // Stable sort keeps roster order among equal ratings
        let mut by_rating: Vec<PlayerIndex> = (0..players.len()).collect();
        by_rating.sort_by(|&a, &b| players[b].rating().total_cmp(&players[a].rating()));

        let mut rank = vec![0; players.len()];
        for (position, &index) in by_rating.iter().enumerate() {
            rank[index] = position;
        }

        Ok(Self {
            players,
            by_rating,
            rank,
        })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn player(&self, index: PlayerIndex) -> &PlayerRecord {
        &self.players[index]
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn by_rating(&self) -> &[PlayerIndex] {
        &self.by_rating
    }

    pub fn rank(&self, index: PlayerIndex) -> usize {
        self.rank[index]
    }

    /// The two highest-rated players in the whole pool
    pub fn top_two(&self) -> (PlayerIndex, PlayerIndex) {
        (self.by_rating[0], self.by_rating[1])
    }

    /// Sorts indices into global rating order in place
    pub fn sort_by_rank(&self, indices: &mut [PlayerIndex]) {
        indices.sort_by_key(|&index| self.rank[index]);
    }

    /// Counts the match and records both partnerships.
    pub fn apply_match(&mut self, m: &Match) {
        for team in [m.team_a, m.team_b] {
            let [x, y] = team;
            self.players[x].play_count += 1;
            self.players[y].play_count += 1;
            self.players[x].partner_history.insert(y);
            self.players[y].partner_history.insert(x);
        }
    }

    pub fn into_players(self) -> Vec<PlayerRecord> {
        self.players
    }
}
