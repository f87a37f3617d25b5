use colored::Colorize;

use hatch_sim::{Clock, TickOutcome};

use super::HostOptions;

pub fn run(host: &HostOptions, count: u64) -> Result<(), String> {
    let mut session = super::open_session(host)?;

    let mut applied = 0;
    let mut last = None;
    while applied < count {
        let outcome = session.tick().map_err(|e| e.to_string())?;
        applied += 1;
        let dead = outcome.is_dead();
        last = Some(outcome);
        if dead {
            break;
        }
    }

    let now = session.clock().now();
    match last {
        Some(TickOutcome::Died { character, cause }) => {
            println!(
                "  {} after {applied} tick(s).",
                "The character died".red().bold()
            );
            println!();
            super::print_character(&character, Some(cause), now);
        }
        Some(TickOutcome::Alive(character)) => {
            println!("  Applied {applied} tick(s).");
            println!();
            super::print_character(&character, None, now);
        }
        None => println!("  {}", "No ticks applied.".dimmed()),
    }
    Ok(())
}
