use csv::Reader;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SchedResult;

/// One confirmed player as supplied by the reservation system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub player_id: String,
    pub display_name: String,
    /// External rating (DUPR-like, roughly 2.0 - 8.0).
    pub rating_a: f64,
    /// Internal rating (Elo-like, roughly 500 - 2000).
    pub rating_b: f64,
    #[serde(default)]
    pub aux_score: f64,
}

impl RosterEntry {
    pub fn new(player_id: impl Into<String>, display_name: impl Into<String>, rating_a: f64, rating_b: f64) -> Self {
        Self {
            player_id: player_id.into(),
            display_name: display_name.into(),
            rating_a,
            rating_b,
            aux_score: 0.0,
        }
    }

    pub fn with_aux_score(mut self, aux_score: f64) -> Self {
        self.aux_score = aux_score;
        self
    }
}

/// Parses a rating, returning 0 if empty or invalid
fn parse_rating(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

/// Reservation statuses that do not make a player eligible
fn is_ineligible_status(value: &str) -> bool {
    let lower = value.trim().to_lowercase();
    lower == "cancelled" || lower == "canceled" || lower == "waitlist" || lower == "waitlisted"
}

fn find_column(headers: &[String], pred: impl Fn(&str) -> bool) -> Option<usize> {
    headers.iter().position(|h| pred(h))
}

/// Position of the first header equal to one of `names`
fn find_named(headers: &[String], names: &[&str]) -> Option<usize> {
    find_column(headers, |h| names.contains(&h))
}

/// Loads a roster from a CSV file
pub fn load_roster<P: AsRef<Path>>(csv_path: P) -> SchedResult<Vec<RosterEntry>> {
    let path = csv_path.as_ref();
    info!("Loading roster from {}", path.display());
    read_roster(std::fs::File::open(path)?)
}

/// Reads a roster from any CSV source.
///
/// Columns are located by header name, falling back to the positional layout
/// `id, name, rating_a, rating_b, aux_score, status`. A player ID seen twice
/// keeps its first position but takes the later row's values.
pub fn read_roster<R: Read>(source: R) -> SchedResult<Vec<RosterEntry>> {
    let mut reader = Reader::from_reader(source);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let id_col = find_named(&headers, &["id", "player_id", "player id", "playerid"]).unwrap_or(0);
    let name_col = find_named(
        &headers,
        &["name", "display_name", "display name", "displayname", "player name", "player_name"],
    )
    .unwrap_or(1);
    let rating_a_col = find_column(&headers, |h| {
        h.contains("dupr") || h.contains("rating_a") || h.contains("rating a")
    })
    .unwrap_or(2);
    let rating_b_col = find_column(&headers, |h| {
        h.contains("elo") || h.contains("rating_b") || h.contains("rating b")
    })
    .unwrap_or(3);
    let aux_col = find_named(&headers, &["aux", "aux_score", "aux score", "auxscore"]);
    let status_col = find_column(&headers, |h| h.contains("status"));

    let mut entries: Vec<RosterEntry> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for result in reader.records() {
        let record = result?;

        let player_id = record.get(id_col).unwrap_or("").trim().to_string();
        let display_name = record.get(name_col).unwrap_or("").trim().to_string();

        // Skip if essential fields are missing
        if player_id.is_empty() || display_name.is_empty() {
            debug!("Skipping roster row without id or name");
            continue;
        }

        if let Some(col) = status_col {
            if is_ineligible_status(record.get(col).unwrap_or("")) {
                debug!("Skipping {} (not confirmed)", player_id);
                continue;
            }
        }

        let entry = RosterEntry {
            player_id: player_id.clone(),
            display_name,
            rating_a: parse_rating(record.get(rating_a_col).unwrap_or("")),
            rating_b: parse_rating(record.get(rating_b_col).unwrap_or("")),
            aux_score: aux_col
                .map(|col| parse_rating(record.get(col).unwrap_or("")))
                .unwrap_or(0.0),
        };

        // Resubmission: update in place so roster order is stable
        if let Some(&pos) = positions.get(&player_id) {
            debug!("Resubmission from {}, replacing earlier row", player_id);
            entries[pos] = entry;
        } else {
            positions.insert(player_id, entries.len());
            entries.push(entry);
        }
    }

    info!("Loaded {} eligible players", entries.len());
    Ok(entries)
}

/// Loads a roster from a JSON array of entries
pub fn load_roster_json<P: AsRef<Path>>(json_path: P) -> SchedResult<Vec<RosterEntry>> {
    let content = std::fs::read_to_string(json_path)?;
    let entries: Vec<RosterEntry> = serde_json::from_str(&content)?;
    Ok(entries)
}
