use colored::Colorize;

use hatch_sim::Clock;

use super::HostOptions;

pub fn run(host: &HostOptions, force: bool) -> Result<(), String> {
    let mut session = super::open_session(host)?;
    let character = session.hatch(force).map_err(|e| e.to_string())?;
    let now = session.clock().now();

    println!(
        "  {} a new character with {} days to live",
        "Hatched".green().bold(),
        character.remaining_days(now)
    );
    println!("  Saved to {}", host.file.display());
    println!();
    super::print_character(&character, None, now);
    Ok(())
}
