use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::path::PathBuf;

use chrono::NaiveDate;
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{SchedResult, SchedulerError};
use crate::output::{MatchOutput, ScheduleOutput};
use crate::parser::{load_roster, RosterEntry};

/// Identifies one play session: a date and a time slot label such as "18:00"
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionKey {
    pub date: NaiveDate,
    pub time_slot: String,
}

impl SessionKey {
    pub fn new(date: NaiveDate, time_slot: impl Into<String>) -> Self {
        Self {
            date,
            time_slot: time_slot.into(),
        }
    }
}

/// Supplies the confirmed players for a session
pub trait RosterSource {
    fn eligible_players(&self, key: &SessionKey) -> SchedResult<Vec<RosterEntry>>;
}

/// Roster files laid out as `<root>/<YYYY-MM-DD>_<slot>.csv`
#[derive(Debug, Clone)]
pub struct RosterDirectory {
    root: PathBuf,
}

impl RosterDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, key: &SessionKey) -> PathBuf {
        // ':' is not allowed in file names everywhere
        let slot = key.time_slot.replace(':', "");
        self.root.join(format!("{}_{}.csv", key.date.format("%Y-%m-%d"), slot))
    }
}

impl RosterSource for RosterDirectory {
    fn eligible_players(&self, key: &SessionKey) -> SchedResult<Vec<RosterEntry>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Err(SchedulerError::InvalidRoster(format!(
                "no roster for {} {} (expected {})",
                key.date,
                key.time_slot,
                path.display()
            )));
        }
        load_roster(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Completed,
}

/// What the store keeps per (session, round, court)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub round: u8,
    pub court: usize,
    pub team_a: [String; 2],
    pub team_b: [String; 2],
    pub status: MatchStatus,
    pub score: Option<(u32, u32)>,
}

impl MatchRecord {
    pub fn from_output(m: &MatchOutput) -> Self {
        Self {
            round: m.round,
            court: m.court,
            team_a: [m.team_a[0].player_id.clone(), m.team_a[1].player_id.clone()],
            team_b: [m.team_b[0].player_id.clone(), m.team_b[1].player_id.clone()],
            status: MatchStatus::Pending,
            score: None,
        }
    }

    /// Records the final score and marks the match completed
    pub fn record_score(&mut self, team_a: u32, team_b: u32) {
        self.score = Some((team_a, team_b));
        self.status = MatchStatus::Completed;
    }
}

/// Persistence sink keyed by session, round and court
pub trait MatchSink {
    fn store(&mut self, key: &SessionKey, record: &MatchRecord) -> SchedResult<()>;
}

/// Map-backed sink; storing the same round and court again replaces it
#[derive(Debug, Clone, Default)]
pub struct MemoryMatchSink {
    records: BTreeMap<(SessionKey, u8, usize), MatchRecord>,
}

impl MemoryMatchSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &SessionKey, round: u8, court: usize) -> Option<&MatchRecord> {
        self.records.get(&(key.clone(), round, court))
    }

    pub fn get_mut(&mut self, key: &SessionKey, round: u8, court: usize) -> Option<&mut MatchRecord> {
        self.records.get_mut(&(key.clone(), round, court))
    }

    pub fn session_records<'a>(&'a self, key: &'a SessionKey) -> impl Iterator<Item = &'a MatchRecord> + 'a {
        self.records
            .iter()
            .filter(move |((k, _, _), _)| k == key)
            .map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MatchSink for MemoryMatchSink {
    fn store(&mut self, key: &SessionKey, record: &MatchRecord) -> SchedResult<()> {
        self.records
            .insert((key.clone(), record.round, record.court), record.clone());
        Ok(())
    }
}

const CSV_HEADER: [&str; 11] = [
    "date", "time_slot", "round", "court", "team_a_1", "team_a_2", "team_b_1", "team_b_2", "status",
    "score_a", "score_b",
];

/// Append-only CSV sink. The header is written when the file is created.
#[derive(Debug, Clone)]
pub struct CsvMatchSink {
    path: PathBuf,
}

impl CsvMatchSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MatchSink for CsvMatchSink {
    fn store(&mut self, key: &SessionKey, record: &MatchRecord) -> SchedResult<()> {
        let file_exists = self.path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

        if !file_exists {
            wtr.write_record(CSV_HEADER)?;
        }

        let status = match record.status {
            MatchStatus::Pending => "pending",
            MatchStatus::Completed => "completed",
        };
        let (score_a, score_b) = match record.score {
            Some((a, b)) => (a.to_string(), b.to_string()),
            None => (String::new(), String::new()),
        };

        wtr.write_record([
            key.date.format("%Y-%m-%d").to_string(),
            key.time_slot.clone(),
            record.round.to_string(),
            record.court.to_string(),
            record.team_a[0].clone(),
            record.team_a[1].clone(),
            record.team_b[0].clone(),
            record.team_b[1].clone(),
            status.to_string(),
            score_a,
            score_b,
        ])?;
        wtr.flush()?;
        Ok(())
    }
}

/// Stores every match of a schedule as pending. Returns how many were stored.
pub fn persist_schedule<S: MatchSink + ?Sized>(
    output: &ScheduleOutput,
    key: &SessionKey,
    sink: &mut S,
) -> SchedResult<usize> {
    for m in &output.matches {
        sink.store(key, &MatchRecord::from_output(m))?;
    }
    info!(
        "Stored {} matches for {} {}",
        output.matches.len(),
        key.date,
        key.time_slot
    );
    Ok(output.matches.len())
}
