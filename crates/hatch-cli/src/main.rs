//! CLI host for Hatchling, a virtual pet that grows, matures and dies.

mod commands;

use std::path::PathBuf;
use std::process;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::HostOptions;

#[derive(Parser)]
#[command(
    name = "hatch",
    about = "Hatchling: raise a virtual pet from the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    host: HostArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct HostArgs {
    /// Save file holding the character
    #[arg(long, global = true, env = "HATCH_FILE")]
    file: Option<PathBuf>,

    /// RNG seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON file with simulation rule overrides
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pin the clock to an RFC 3339 timestamp instead of the system time
    #[arg(long, global = true)]
    at: Option<DateTime<Utc>>,
}

#[derive(Subcommand)]
enum Commands {
    /// Hatch a new character
    New {
        /// Replace an existing character
        #[arg(short, long)]
        force: bool,
    },

    /// Show the character's stats
    Status {
        /// Print the character as JSON
        #[arg(long)]
        json: bool,
    },

    /// Feed the character
    Feed,

    /// Play with the character to raise favorability
    Play {
        /// Favorability to add (default: random 1-10)
        #[arg(short, long)]
        amount: Option<u32>,
    },

    /// Clean the character's toilet
    Clean,

    /// Apply decay ticks immediately
    Tick {
        /// Number of ticks to apply
        #[arg(short, long, default_value = "1")]
        count: u64,
    },

    /// Keep the character alive in the foreground, ticking on an interval
    Run {
        /// Milliseconds between ticks
        #[arg(long, default_value = "5000")]
        interval_ms: u64,

        /// Stop after this many ticks
        #[arg(short, long)]
        ticks: Option<u64>,

        /// Print every event as it happens
        #[arg(short, long)]
        verbose: bool,
    },

    /// Acknowledge a death and hatch a new character
    Restart {
        /// Replace the character even if it is still alive
        #[arg(short, long)]
        force: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let host = HostOptions {
        file: cli.host.file.unwrap_or_else(commands::default_save_file),
        seed: cli.host.seed,
        config: cli.host.config,
        at: cli.host.at,
    };

    let result = match cli.command {
        Commands::New { force } => commands::new::run(&host, force),
        Commands::Status { json } => commands::status::run(&host, json),
        Commands::Feed => commands::care::feed(&host),
        Commands::Play { amount } => commands::care::play(&host, amount),
        Commands::Clean => commands::care::clean(&host),
        Commands::Tick { count } => commands::tick::run(&host, count),
        Commands::Run {
            interval_ms,
            ticks,
            verbose,
        } => commands::run::run(&host, interval_ms, ticks, verbose),
        Commands::Restart { force } => commands::restart::run(&host, force),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
