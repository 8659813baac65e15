use std::path::{Path, PathBuf};
use std::process;

use chrono::NaiveDate;
use clap::Parser;
use tracing::{warn, Level};

use doubles_rotation::display::{print_schedule, write_schedule_to_file};
use doubles_rotation::{
    generate_schedule, load_roster, load_roster_json, persist_schedule, CsvMatchSink, RosterDirectory, RosterEntry,
    RosterSource, SchedResult, ScheduleOutput, SchedulerConfig, SchedulerError, SessionKey,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Builds an 8-round doubles rotation from a roster", long_about = None)]
struct Cli {
    /// Roster file (.csv, or .json for an array of entries)
    #[arg(short, long, conflicts_with = "roster_dir")]
    roster: Option<PathBuf>,

    /// Directory of <YYYY-MM-DD>_<slot>.csv rosters, used with --date and --slot
    #[arg(long, requires_all = ["date", "slot"])]
    roster_dir: Option<PathBuf>,

    #[arg(long)]
    date: Option<NaiveDate>,

    #[arg(long)]
    slot: Option<String>,

    /// JSON settings file; replaces the weight/court/seed flags
    #[arg(long = "config")]
    config_file: Option<PathBuf>,

    #[command(flatten)]
    settings: SchedulerConfig,

    /// Text schedule output file
    #[arg(short, long)]
    out: Option<String>,

    /// JSON schedule output file
    #[arg(long)]
    json: Option<PathBuf>,

    /// CSV file receiving one pending row per match, used with --date and --slot
    #[arg(long, requires_all = ["date", "slot"])]
    matches_csv: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

impl Cli {
    fn session_key(&self) -> Option<SessionKey> {
        match (self.date, &self.slot) {
            (Some(date), Some(slot)) => Some(SessionKey::new(date, slot.clone())),
            _ => None,
        }
    }

    fn title(&self) -> String {
        match self.session_key() {
            Some(key) => format!("Doubles Rotation {} {}", key.date, key.time_slot),
            None => "Doubles Rotation".to_string(),
        }
    }
}

fn load_roster_file(path: &Path) -> SchedResult<Vec<RosterEntry>> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        load_roster_json(path)
    } else {
        load_roster(path)
    }
}

fn run(cli: &Cli) -> SchedResult<()> {
    println!("Loading roster...");
    let roster = match (&cli.roster, &cli.roster_dir, cli.session_key()) {
        (Some(path), _, _) => load_roster_file(path)?,
        (None, Some(dir), Some(key)) => RosterDirectory::new(dir).eligible_players(&key)?,
        _ => {
            return Err(SchedulerError::Config(
                "either --roster or --roster-dir with --date and --slot is required".to_string(),
            ))
        }
    };
    println!("Loaded {} eligible players", roster.len());

    let config = match &cli.config_file {
        Some(path) => SchedulerConfig::load_from_file(path)?,
        None => cli.settings.clone(),
    };

    println!("\n=== Running Scheduler ===");
    let schedule = generate_schedule(&roster, &config)?;
    let title = cli.title();
    print_schedule(&title, &schedule)?;

    let output = ScheduleOutput::from(&schedule);
    if output.is_empty() {
        warn!("No matches could be scheduled for this roster");
    }

    if let Some(out) = &cli.out {
        write_schedule_to_file(&title, &schedule, out)?;
        println!("Schedule saved to {}", out);
    }
    if let Some(json) = &cli.json {
        output.write_json(json)?;
        println!("Schedule JSON saved to {}", json.display());
    }
    if let (Some(path), Some(key)) = (&cli.matches_csv, cli.session_key()) {
        let mut sink = CsvMatchSink::new(path);
        let stored = persist_schedule(&output, &key, &mut sink)?;
        println!("Stored {} matches in {}", stored, path.display());
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
