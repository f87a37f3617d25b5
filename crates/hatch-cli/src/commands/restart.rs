use colored::Colorize;

use hatch_sim::Clock;

use super::HostOptions;

pub fn run(host: &HostOptions, force: bool) -> Result<(), String> {
    let mut session = super::open_session(host)?;
    let character = session.restart(force).map_err(|e| e.to_string())?;
    let now = session.clock().now();

    println!(
        "  {} A new character hatched with {} days to live.",
        "Restarted.".green().bold(),
        character.remaining_days(now)
    );
    println!();
    super::print_character(&character, None, now);
    Ok(())
}
