use std::path::Path;

use clap::Args;
use serde::{Deserialize, Serialize};

use crate::error::{SchedResult, SchedulerError};
use crate::schedule::courts::usable_courts;

/// Tunable parameters for one scheduling run.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchedulerConfig {
    /// Cost per player whose partner this round is a repeat partner.
    #[arg(long, default_value_t = 10.0)]
    pub partner_weight: f64,

    /// Cost per point of average rating difference between the two teams.
    #[arg(long, default_value_t = 1.0)]
    pub rating_weight: f64,

    /// Upper bound on courts in use; otherwise players / 4.
    #[arg(long)]
    pub max_courts: Option<usize>,

    /// Seed for tie-breaking. Entropy-seeded when absent.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            partner_weight: 10.0,
            rating_weight: 1.0,
            max_courts: None,
            seed: None,
        }
    }
}

impl SchedulerConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SchedResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SchedulerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SchedResult<()> {
        if self.max_courts == Some(0) {
            return Err(SchedulerError::Config(
                "max courts must be at least 1".to_string(),
            ));
        }
        for (name, weight) in [
            ("partner weight", self.partner_weight),
            ("rating weight", self.rating_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(SchedulerError::Config(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, weight
                )));
            }
        }
        Ok(())
    }

    /// Courts usable for `player_count` eligible players.
    pub fn court_count(&self, player_count: usize) -> usize {
        usable_courts(player_count, self.max_courts)
    }
}
