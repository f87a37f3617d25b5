use std::time::Duration;

use colored::Colorize;
use tokio::time::MissedTickBehavior;
use tracing::info;

use hatch_sim::{Clock, TickOutcome};

use super::{HostOptions, Session};

pub fn run(
    host: &HostOptions,
    interval_ms: u64,
    ticks: Option<u64>,
    verbose: bool,
) -> Result<(), String> {
    let mut session = super::open_session(host)?;
    let character = session.open().map_err(|e| e.to_string())?;
    if let (_, Some(cause)) = session.status().map_err(|e| e.to_string())? {
        super::print_death(cause);
        return Ok(());
    }

    println!(
        "  {} {} {}",
        "Caring for".bold(),
        character.id,
        format!("(every {interval_ms} ms, Ctrl-C to stop)").dimmed()
    );
    println!();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start scheduler: {e}"))?;
    runtime.block_on(schedule(
        &mut session,
        Duration::from_millis(interval_ms.max(1)),
        ticks,
        verbose,
    ))
}

/// Tick until the character dies, the tick budget runs out, or Ctrl-C.
async fn schedule(
    session: &mut Session,
    period: Duration,
    limit: Option<u64>,
    verbose: bool,
) -> Result<(), String> {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick fires immediately; decay starts one period in.
    interval.tick().await;

    let mut seen = session
        .simulator()
        .events()
        .latest()
        .map_or(0, |event| event.seq);
    let mut count: u64 = 0;
    // Armed once; a Ctrl-C that lands mid-tick is seen on the next select.
    let interrupted = tokio::signal::ctrl_c();
    tokio::pin!(interrupted);

    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = &mut interrupted => {
                info!(ticks = count, "interrupted");
                println!("  Stopped after {count} tick(s).");
                return Ok(());
            }
        }

        let outcome = session.tick().map_err(|e| e.to_string())?;
        count += 1;

        if verbose {
            for event in session.simulator().events().events_since(seen) {
                super::print_event(event);
            }
        }
        seen = session
            .simulator()
            .events()
            .latest()
            .map_or(seen, |event| event.seq);

        match outcome {
            TickOutcome::Died { character, cause } => {
                println!();
                super::print_character(&character, Some(cause), session.clock().now());
                return Ok(());
            }
            TickOutcome::Alive(character) if !verbose => {
                println!(
                    "  [tick {count:>4}] hp {}/{}  env {}/10  fav {}/10  {}",
                    character.hit_point,
                    character.max_hit_point,
                    character.living_environment,
                    character.favorability,
                    character.growth_stage
                );
            }
            TickOutcome::Alive(_) => {}
        }

        if limit.is_some_and(|limit| count >= limit) {
            println!("  Stopped after {count} tick(s).");
            return Ok(());
        }
    }
}
