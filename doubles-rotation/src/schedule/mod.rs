pub mod types;
pub mod pool;
pub mod history;
pub mod phase;
pub mod courts;
pub mod selection;
pub mod cost;
pub mod pairing;
pub mod generic;
pub mod competitive;
pub mod high_low;
pub mod balanced;
pub mod assembler;

pub use types::{Match, PlayerIndex, PlayerRecord, Schedule, Split, Team};
pub use phase::{plan_for, Phase, RoundPlan, ROUNDS, ROUND_PLANS};
pub use cost::{split_cost, CostWeights, BALANCE_PENALTY};
pub use pairing::{select_pairing, PairingChoice, SelectionTier};
pub use assembler::{generate_schedule, generate_schedule_with_rng, RoundState};
