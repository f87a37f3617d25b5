pub mod care;
pub mod new;
pub mod restart;
pub mod run;
pub mod status;
pub mod tick;

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tracing::debug;

use hatch_core::{Character, MAX_CARE_STAT};
use hatch_sim::{
    Caretaker, CareEvent, CareEventKind, CharacterSimulator, Clock, DeathCause, JsonFileStore,
    ManualClock, SeededRandom, SimConfig, SystemClock,
};

/// The caretaker every command drives: a JSON save file, a real or pinned
/// clock, and a seeded RNG.
pub type Session = Caretaker<JsonFileStore, Box<dyn Clock>, SeededRandom>;

/// Options shared by every command.
pub struct HostOptions {
    pub file: PathBuf,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
    pub at: Option<DateTime<Utc>>,
}

/// `<data_dir>/hatchling/character.json`, or the working directory when the
/// platform has no data directory.
pub fn default_save_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hatchling")
        .join("character.json")
}

fn load_config(host: &HostOptions) -> Result<SimConfig, String> {
    let mut config = match &host.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            SimConfig::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = host.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

/// Build the session for this invocation.
fn open_session(host: &HostOptions) -> Result<Session, String> {
    let config = load_config(host)?;
    let rng = match config.seed {
        Some(seed) => SeededRandom::from_seed(seed),
        None => SeededRandom::from_entropy(),
    };
    let clock: Box<dyn Clock> = match host.at {
        Some(at) => Box::new(ManualClock::new(at)),
        None => Box::new(SystemClock),
    };
    debug!(file = %host.file.display(), seed = ?config.seed, "opening session");

    let simulator = CharacterSimulator::new(config, rng);
    Ok(Caretaker::new(
        simulator,
        JsonFileStore::new(&host.file),
        clock,
    ))
}

/// Print the stats table for `character`.
fn print_character(character: &Character, cause: Option<DeathCause>, now: DateTime<Utc>) {
    println!(
        "  {} {}",
        "Hatchling".bold(),
        format!("({})", character.id).dimmed()
    );
    println!();

    let days_left = match cause {
        Some(_) => "DEAD".red().bold().to_string(),
        None => character.remaining_days(now).to_string(),
    };
    let last_fed = character
        .last_fed_at
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "never".to_string());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Value"]);
    table.add_row(vec![
        "Stage".to_string(),
        character.growth_stage.label().to_string(),
    ]);
    table.add_row(vec![
        "Hit points".to_string(),
        format_stat_bar(character.hit_point, character.max_hit_point),
    ]);
    table.add_row(vec![
        "Environment".to_string(),
        format_stat_bar(character.living_environment, MAX_CARE_STAT),
    ]);
    table.add_row(vec![
        "Favorability".to_string(),
        format_stat_bar(character.favorability, MAX_CARE_STAT),
    ]);
    table.add_row(vec!["Last fed".to_string(), last_fed]);
    table.add_row(vec![
        "Recent feeds".to_string(),
        character.recent_feed_count.to_string(),
    ]);
    table.add_row(vec![
        "Age (days)".to_string(),
        character.age_days(now).to_string(),
    ]);
    table.add_row(vec!["Days left".to_string(), days_left]);

    println!("{table}");
    println!();

    if let Some(cause) = cause {
        print_death(cause);
    }
}

fn print_death(cause: DeathCause) {
    println!("  {} The character {cause}.", "DEAD".red().bold());
    println!(
        "  {}",
        "Run `hatch restart` to hatch a new one.".dimmed()
    );
}

fn print_event(event: &CareEvent) {
    let seq = format!("[{:>4}]", event.seq).dimmed();
    let description = match event.kind {
        CareEventKind::Died { .. } => event.description.red().bold(),
        CareEventKind::Evolved { .. } => event.description.cyan().bold(),
        CareEventKind::Decayed { .. } => event.description.yellow(),
        CareEventKind::Fed { .. } | CareEventKind::Played { .. } | CareEventKind::Cleaned => {
            event.description.green()
        }
        CareEventKind::Born { .. } => event.description.normal(),
    };
    println!("  {seq} {description}");
}

fn format_stat_bar(value: u32, max: u32) -> String {
    let (v, m) = (u64::from(value.min(max)), u64::from(max));
    let filled = if m == 0 { 0 } else { ((v * 10 + m / 2) / m) as usize };
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(10 - filled));
    let label = format!("{value:>3}/{max}");

    if v * 10 <= m * 3 {
        format!("[{}] {label}", bar.red())
    } else if v * 10 <= m * 6 {
        format!("[{}] {label}", bar.yellow())
    } else {
        format!("[{}] {label}", bar.green())
    }
}
