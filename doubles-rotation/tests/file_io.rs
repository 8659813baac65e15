mod common;

use std::fs;

use chrono::NaiveDate;
use common::{ranked_roster, seeded};
use doubles_rotation::display::write_schedule_to_file;
use doubles_rotation::{
    generate_schedule, load_roster, load_roster_json, persist_schedule, CsvMatchSink, MatchRecord, MatchSink,
    RosterDirectory, RosterEntry, RosterSource, ScheduleOutput, SchedulerConfig, SchedulerError, SessionKey,
};
use tempfile::tempdir;

fn key() -> SessionKey {
    SessionKey::new(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(), "18:00")
}

#[test]
fn csv_roster_round_trips_through_the_scheduler() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.csv");
    fs::write(
        &path,
        "player_id,display_name,rating_a,rating_b,aux_score,status\n\
         a1,Alex,5.1,1400,1.5,confirmed\n\
         b2,Blair,4.4,1250,0,confirmed\n\
         c3,Casey,3.9,1100,,confirmed\n\
         d4,Drew,3.2,980,0.5,confirmed\n\
         e5,Emery,2.8,900,0,cancelled\n",
    )
    .unwrap();

    let roster = load_roster(&path).unwrap();
    assert_eq!(roster.len(), 4);
    assert_eq!(roster[0].aux_score, 1.5);
    assert_eq!(roster[2].aux_score, 0.0);

    let schedule = generate_schedule(&roster, &seeded(1)).unwrap();
    assert_eq!(schedule.matches.len(), 8);
    assert!(schedule.sitting_out.is_empty());
}

#[test]
fn json_roster_accepts_missing_aux_score() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(
        &path,
        r#"[
            {"playerId": "a1", "displayName": "Alex", "ratingA": 5.1, "ratingB": 1400},
            {"playerId": "b2", "displayName": "Blair", "ratingA": 4.4, "ratingB": 1250, "auxScore": 2.0}
        ]"#,
    )
    .unwrap();

    let roster = load_roster_json(&path).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0], RosterEntry::new("a1", "Alex", 5.1, 1400.0));
    assert_eq!(roster[1], RosterEntry::new("b2", "Blair", 4.4, 1250.0).with_aux_score(2.0));

    assert!(matches!(
        generate_schedule(&roster, &SchedulerConfig::default()),
        Err(SchedulerError::InsufficientPlayers { found: 2 })
    ));
}

#[test]
fn missing_roster_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        load_roster(dir.path().join("nope.csv")),
        Err(SchedulerError::Io(_))
    ));
}

#[test]
fn roster_directory_reads_session_file() {
    let dir = tempdir().unwrap();
    let rosters = RosterDirectory::new(dir.path());
    fs::write(
        rosters.path_for(&key()),
        "id,name,rating_a,rating_b\np1,Ann,4.0,1000\np2,Ben,3.5,950\np3,Cat,3.0,900\np4,Dan,2.5,850\n",
    )
    .unwrap();

    let roster = rosters.eligible_players(&key()).unwrap();
    assert_eq!(roster.len(), 4);

    let other = SessionKey::new(key().date, "20:00");
    assert!(matches!(
        rosters.eligible_players(&other),
        Err(SchedulerError::InvalidRoster(_))
    ));
}

#[test]
fn csv_sink_writes_header_once_and_appends() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("matches.csv");
    let output = ScheduleOutput::from(&generate_schedule(&ranked_roster(4), &seeded(3)).unwrap());

    let mut sink = CsvMatchSink::new(&path);
    assert_eq!(persist_schedule(&output, &key(), &mut sink).unwrap(), 8);

    let mut scored = MatchRecord::from_output(&output.matches[0]);
    scored.record_score(11, 9);
    sink.store(&key(), &scored).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 10);
    assert!(lines[0].starts_with("date,time_slot,round,court"));
    assert_eq!(lines[1], "2026-10-18,18:00,1,1,p0,p3,p1,p2,pending,,");
    assert_eq!(lines[9], "2026-10-18,18:00,1,1,p0,p3,p1,p2,completed,11,9");
}

#[test]
fn config_file_is_validated() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.json");
    fs::write(&good, r#"{"partnerWeight": 25.0, "seed": 42}"#).unwrap();
    let config = SchedulerConfig::load_from_file(&good).unwrap();
    assert_eq!(config.partner_weight, 25.0);
    assert_eq!(config.rating_weight, 1.0);
    assert_eq!(config.seed, Some(42));

    let bad = dir.path().join("bad.json");
    fs::write(&bad, r#"{"ratingWeight": -1.0}"#).unwrap();
    assert!(matches!(
        SchedulerConfig::load_from_file(&bad),
        Err(SchedulerError::Config(_))
    ));
}

#[test]
fn text_schedule_file_lists_rounds() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.txt");
    let schedule = generate_schedule(&ranked_roster(5), &seeded(8)).unwrap();

    write_schedule_to_file("Thursday", &schedule, path.to_str().unwrap()).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("** Thursday **"));
    assert_eq!(content.matches("Court 1:").count(), 8);
    assert!(content.contains("Sitting out: Player 4"));
}
