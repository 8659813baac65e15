use std::collections::HashSet;

use crate::parser::RosterEntry;

/// Position of a player in the session's roster. All per-session state is
/// keyed by this rather than by the player ID string.
pub type PlayerIndex = usize;

/// Two partners on one side of the net
pub type Team = [PlayerIndex; 2];

/// A player plus the state accumulated during this scheduling run
#[derive(Debug, Clone)]
pub struct PlayerRecord {
    pub entry: RosterEntry,
    pub play_count: u32,
    pub partner_history: HashSet<PlayerIndex>,
}

impl PlayerRecord {
    pub fn new(entry: RosterEntry) -> Self {
        Self {
            entry,
            play_count: 0,
            partner_history: HashSet::new(),
        }
    }

    pub fn player_id(&self) -> &str {
        &self.entry.player_id
    }

    pub fn rating(&self) -> f64 {
        self.entry.rating_a
    }

    pub fn has_partnered(&self, other: PlayerIndex) -> bool {
        self.partner_history.contains(&other)
    }
}

/// A proposed 2v2 split of four players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub team_a: Team,
    pub team_b: Team,
}

impl Split {
    pub fn new(team_a: Team, team_b: Team) -> Self {
        Self { team_a, team_b }
    }

    pub fn players(&self) -> [PlayerIndex; 4] {
        [self.team_a[0], self.team_a[1], self.team_b[0], self.team_b[1]]
    }

    /// True when both players are on the same side
    pub fn same_team(&self, x: PlayerIndex, y: PlayerIndex) -> bool {
        [self.team_a, self.team_b]
            .iter()
            .any(|team| team.contains(&x) && team.contains(&y))
    }
}

/// A scheduled match on one court in one round
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub round: u8,
    pub court: usize,
    pub team_a: Team,
    pub team_b: Team,
    /// Only filled on the first court of a round
    pub sitting_out: Vec<PlayerIndex>,
}

impl Match {
    pub fn new(round: u8, court: usize, split: Split) -> Self {
        Self {
            round,
            court,
            team_a: split.team_a,
            team_b: split.team_b,
            sitting_out: Vec::new(),
        }
    }

    pub fn split(&self) -> Split {
        Split::new(self.team_a, self.team_b)
    }

    pub fn players(&self) -> [PlayerIndex; 4] {
        self.split().players()
    }

    pub fn involves(&self, player: PlayerIndex) -> bool {
        self.players().contains(&player)
    }
}

/// Result of a full scheduling run
#[derive(Debug, Clone)]
pub struct Schedule {
    pub matches: Vec<Match>,
    /// Everyone who sat out at least one round, in order of first sit-out
    pub sitting_out: Vec<PlayerIndex>,
    /// Final per-player state after all rounds
    pub players: Vec<PlayerRecord>,
    pub court_count: usize,
}

impl Schedule {
    pub fn player(&self, index: PlayerIndex) -> &PlayerRecord {
        &self.players[index]
    }

    pub fn round_matches(&self, round: u8) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.round == round)
    }

    pub fn appearances(&self, player: PlayerIndex) -> usize {
        self.matches.iter().filter(|m| m.involves(player)).count()
    }
}
