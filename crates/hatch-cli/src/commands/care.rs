//! Care actions on the stored character.

use colored::Colorize;

use hatch_sim::CareEventKind;

use super::HostOptions;

pub fn feed(host: &HostOptions) -> Result<(), String> {
    let mut session = super::open_session(host)?;
    let character = session.feed().map_err(|e| e.to_string())?;

    let recovered = match session.simulator().events().latest().map(|e| &e.kind) {
        Some(CareEventKind::Fed { recovered, .. }) => *recovered,
        _ => 0,
    };
    println!(
        "  {} Recovered {recovered} hp ({}/{}).",
        "Fed.".green().bold(),
        character.hit_point,
        character.max_hit_point
    );
    if character.recent_feed_count > 0 {
        println!(
            "  {}",
            format!(
                "Still full from the last meal ({} extra feeds).",
                character.recent_feed_count
            )
            .yellow()
        );
    }
    Ok(())
}

pub fn play(host: &HostOptions, amount: Option<u32>) -> Result<(), String> {
    let mut session = super::open_session(host)?;
    let character = session.play(amount).map_err(|e| e.to_string())?;
    println!(
        "  {} Favorability is now {}/10.",
        "Played.".green().bold(),
        character.favorability
    );
    Ok(())
}

pub fn clean(host: &HostOptions) -> Result<(), String> {
    let mut session = super::open_session(host)?;
    let character = session.clean().map_err(|e| e.to_string())?;
    println!(
        "  {} Living environment is now {}/10.",
        "Cleaned.".green().bold(),
        character.living_environment
    );
    Ok(())
}
