use std::fs::File;
use std::io::{self, Write};

use crate::error::SchedResult;
use crate::schedule::{PlayerIndex, Schedule, Team, ROUNDS};

/// Formats a player name with rating
pub fn format_player_name(name: &str, rating: f64) -> String {
    format!("{} ({:.2})", name, rating)
}

fn format_team(schedule: &Schedule, team: &Team) -> String {
    team.iter()
        .map(|&p| {
            let entry = &schedule.player(p).entry;
            format_player_name(&entry.display_name, entry.rating_a)
        })
        .collect::<Vec<_>>()
        .join(" & ")
}

fn format_names(schedule: &Schedule, players: &[PlayerIndex]) -> String {
    players
        .iter()
        .map(|&p| schedule.player(p).entry.display_name.clone())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the schedule as text, one line per court, grouped by round
pub fn render_schedule<W: Write>(out: &mut W, title: &str, schedule: &Schedule) -> io::Result<()> {
    writeln!(out, "** {} **", title)?;

    for round in 1..=ROUNDS {
        writeln!(out)?;
        writeln!(out, "Round {}", round)?;
        let mut any = false;
        for m in schedule.round_matches(round) {
            any = true;
            writeln!(
                out,
                "  Court {}: {} vs {}",
                m.court,
                format_team(schedule, &m.team_a),
                format_team(schedule, &m.team_b)
            )?;
            if !m.sitting_out.is_empty() {
                writeln!(out, "  Sitting out: {}", format_names(schedule, &m.sitting_out))?;
            }
        }
        if !any {
            writeln!(out, "  [NO MATCHES]")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Games played:")?;
    for record in &schedule.players {
        writeln!(out, "  {} - {}", record.entry.display_name, record.play_count)?;
    }

    Ok(())
}

/// Writes the schedule to a text file
pub fn write_schedule_to_file(title: &str, schedule: &Schedule, filename: &str) -> SchedResult<()> {
    let mut file = File::create(filename)?;
    render_schedule(&mut file, title, schedule)?;
    Ok(())
}

/// Prints the schedule with a short summary
pub fn print_schedule(title: &str, schedule: &Schedule) -> SchedResult<()> {
    println!("\n=== {} ===", title);
    println!(
        "Total matches scheduled: {} on {} court(s)",
        schedule.matches.len(),
        schedule.court_count
    );

    if !schedule.sitting_out.is_empty() {
        println!("Players sitting out at least once ({}):", schedule.sitting_out.len());
        for &player in &schedule.sitting_out {
            let record = schedule.player(player);
            println!(
                "  - {} (ID: {}, Games: {})",
                record.entry.display_name,
                record.player_id(),
                record.play_count
            );
        }
    }

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    render_schedule(&mut lock, title, schedule)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedulerConfig;
    use crate::parser::RosterEntry;
    use crate::schedule::generate_schedule;

    #[test]
    fn renders_every_round_and_totals() {
        let roster: Vec<RosterEntry> = ["Ann", "Ben", "Cat", "Dan"]
            .iter()
            .enumerate()
            .map(|(i, name)| RosterEntry::new(format!("p{}", i), *name, 8.0 - 2.0 * i as f64, 1000.0))
            .collect();
        let config = SchedulerConfig {
            seed: Some(1),
            ..Default::default()
        };
        let schedule = generate_schedule(&roster, &config).unwrap();

        let mut buffer = Vec::new();
        render_schedule(&mut buffer, "Tuesday Ladder", &schedule).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("** Tuesday Ladder **"));
        assert!(text.contains("Round 1\n  Court 1: Ann (8.00) & Dan (2.00) vs Ben (6.00) & Cat (4.00)"));
        assert!(text.contains("Round 8"));
        assert!(text.contains("  Ann - 8"));
        assert!(!text.contains("Sitting out"));
    }
}
