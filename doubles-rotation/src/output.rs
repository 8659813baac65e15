use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::SchedResult;
use crate::parser::RosterEntry;
use crate::schedule::{Match, PlayerIndex, Schedule};

/// One match in the external schedule shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutput {
    pub round: u8,
    pub court: usize,
    pub team_a: [RosterEntry; 2],
    pub team_b: [RosterEntry; 2],
    /// Present on the first court of a round when someone sits out
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sitting_out: Vec<RosterEntry>,
}

/// Stable, serializable form of a [`Schedule`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOutput {
    pub matches: Vec<MatchOutput>,
    pub sitting_out: Vec<RosterEntry>,
}

impl ScheduleOutput {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let entry = |index: PlayerIndex| schedule.player(index).entry.clone();
        let convert = |m: &Match| MatchOutput {
            round: m.round,
            court: m.court,
            team_a: m.team_a.map(entry),
            team_b: m.team_b.map(entry),
            sitting_out: m.sitting_out.iter().map(|&p| entry(p)).collect(),
        };

        Self {
            matches: schedule.matches.iter().map(convert).collect(),
            sitting_out: schedule.sitting_out.iter().map(|&p| entry(p)).collect(),
        }
    }

    /// True when nothing could be scheduled; treat as "no valid roster".
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn to_json(&self) -> SchedResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> SchedResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        info!("Wrote schedule JSON to {}", path.display());
        Ok(())
    }
}

impl From<&Schedule> for ScheduleOutput {
    fn from(schedule: &Schedule) -> Self {
        Self::from_schedule(schedule)
    }
}
