use std::collections::HashSet;

use super::types::{Match, PlayerIndex, Split, Team};

fn normalize_team(team: Team) -> Team {
    let [x, y] = team;
    if x <= y {
        [x, y]
    } else {
        [y, x]
    }
}

fn normalize_pair(x: PlayerIndex, y: PlayerIndex) -> (PlayerIndex, PlayerIndex) {
    if x <= y {
        (x, y)
    } else {
        (y, x)
    }
}

/// Matchups and opponent pairs seen so far in this session
#[derive(Debug, Clone, Default)]
pub struct MatchHistory {
    matchups: HashSet<[Team; 2]>,
    opponents: HashSet<(PlayerIndex, PlayerIndex)>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn matchup_key(split: &Split) -> [Team; 2] {
        let a = normalize_team(split.team_a);
        let b = normalize_team(split.team_b);
        if a <= b {
            [a, b]
        } else {
            [b, a]
        }
    }

    pub fn record(&mut self, m: &Match) {
        let split = m.split();
        self.matchups.insert(Self::matchup_key(&split));
        for &x in &split.team_a {
            for &y in &split.team_b {
                self.opponents.insert(normalize_pair(x, y));
            }
        }
    }

    /// Same two teams already met, in either orientation
    pub fn is_repeat_matchup(&self, split: &Split) -> bool {
        self.matchups.contains(&Self::matchup_key(split))
    }

    pub fn have_opposed(&self, x: PlayerIndex, y: PlayerIndex) -> bool {
        self.opponents.contains(&normalize_pair(x, y))
    }
}
