//! Rotating doubles scheduler for court sessions.
//!
//! Takes a roster of rated players and produces an 8-round, multi-court plan
//! that spreads games evenly, avoids repeat partners and keeps teams close
//! in strength. See [`schedule::generate_schedule`] for the entry point.

pub mod config;
pub mod display;
pub mod error;
pub mod output;
pub mod parser;
pub mod schedule;
pub mod session;

pub use config::SchedulerConfig;
pub use error::{SchedResult, SchedulerError};
pub use output::{MatchOutput, ScheduleOutput};
pub use parser::{load_roster, load_roster_json, RosterEntry};
pub use schedule::{generate_schedule, generate_schedule_with_rng, Match, Schedule};
pub use session::{
    persist_schedule, CsvMatchSink, MatchRecord, MatchSink, MatchStatus, MemoryMatchSink, RosterDirectory,
    RosterSource, SessionKey,
};
