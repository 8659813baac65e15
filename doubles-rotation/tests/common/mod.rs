#![allow(dead_code)]

use doubles_rotation::{RosterEntry, SchedulerConfig};

/// Roster with one entry per rating, ids `p0..`, in the given order
pub fn roster_from_ratings(ratings: &[f64]) -> Vec<RosterEntry> {
    ratings
        .iter()
        .enumerate()
        .map(|(i, &rating)| {
            RosterEntry::new(format!("p{}", i), format!("Player {}", i), rating, 1000.0 + rating * 100.0)
        })
        .collect()
}

/// `n` players with strictly descending ratings, so index == rank
pub fn ranked_roster(n: usize) -> Vec<RosterEntry> {
    let ratings: Vec<f64> = (0..n).map(|i| 8.0 - i as f64 * 0.25).collect();
    roster_from_ratings(&ratings)
}

pub fn seeded(seed: u64) -> SchedulerConfig {
    SchedulerConfig {
        seed: Some(seed),
        ..Default::default()
    }
}
