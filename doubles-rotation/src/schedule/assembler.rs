use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::SchedulerConfig;
use crate::error::SchedResult;
use crate::parser::RosterEntry;

use super::balanced::schedule_balanced_round;
use super::competitive::schedule_competitive_round;
use super::cost::CostWeights;
use super::generic::RoundContext;
use super::high_low::schedule_high_low_round;
use super::history::MatchHistory;
use super::phase::{plan_for, Phase, ROUNDS};
use super::pool::PlayerPool;
use super::types::{Match, PlayerIndex, Schedule};

/// Progress through the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Round(u8),
    Done,
}

impl RoundState {
    pub fn next(self) -> Self {
        match self {
            RoundState::Round(n) if n < ROUNDS => RoundState::Round(n + 1),
            _ => RoundState::Done,
        }
    }
}

/// Generates the full 8-round schedule.
///
/// Tie-breaking randomness comes from `config.seed` when set, from entropy
/// otherwise.
pub fn generate_schedule(roster: &[RosterEntry], config: &SchedulerConfig) -> SchedResult<Schedule> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_schedule_with_rng(roster, config, &mut rng)
}

/// Generates the full schedule drawing tie-breaks from `rng`.
pub fn generate_schedule_with_rng<R: Rng + ?Sized>(
    roster: &[RosterEntry],
    config: &SchedulerConfig,
    rng: &mut R,
) -> SchedResult<Schedule> {
    config.validate()?;
    let mut pool = PlayerPool::from_roster(roster)?;
    let court_count = config.court_count(pool.len());
    let weights = CostWeights::from(config);

    info!(
        "Scheduling {} players on {} court(s) over {} rounds",
        pool.len(),
        court_count,
        ROUNDS
    );

    let mut history = MatchHistory::new();
    let mut matches: Vec<Match> = Vec::new();
    let mut sitting_out: Vec<PlayerIndex> = Vec::new();
    let mut state = RoundState::Round(1);

    while let RoundState::Round(round) = state {
        let Some(plan) = plan_for(round) else {
            break;
        };

        let ctx = RoundContext {
            plan,
            pool: &pool,
            history: &history,
            weights,
            court_count,
        };
        let mut round_matches = match plan.phase {
            Phase::Competitive => schedule_competitive_round(&ctx),
            Phase::HighLowSplit => schedule_high_low_round(&ctx, rng),
            Phase::Balanced => schedule_balanced_round(&ctx, rng),
        };

        let benched: Vec<PlayerIndex> = (0..pool.len())
            .filter(|&player| !round_matches.iter().any(|m| m.involves(player)))
            .collect();
        debug!(
            "Round {} ({:?}): {} match(es), {} sitting out",
            round,
            plan.phase,
            round_matches.len(),
            benched.len()
        );

        for &player in &benched {
            if !sitting_out.contains(&player) {
                sitting_out.push(player);
            }
        }
        if let Some(first) = round_matches.first_mut() {
            first.sitting_out = benched;
        }

        for m in &round_matches {
            pool.apply_match(m);
            history.record(m);
        }
        matches.extend(round_matches);

        state = state.next();
    }

    info!(
        "Generated {} matches, {} player(s) sat out at least once",
        matches.len(),
        sitting_out.len()
    );

    Ok(Schedule {
        matches,
        sitting_out,
        players: pool.into_players(),
        court_count,
    })
}
