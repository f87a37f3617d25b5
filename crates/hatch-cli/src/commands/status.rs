use serde_json::json;

use hatch_sim::Clock;

use super::HostOptions;

pub fn run(host: &HostOptions, as_json: bool) -> Result<(), String> {
    let session = super::open_session(host)?;
    let (character, cause) = session.status().map_err(|e| e.to_string())?;
    let now = session.clock().now();

    if as_json {
        let report = json!({
            "character": character,
            "dead": cause.is_some(),
            "death_cause": cause,
            "remaining_days": character.remaining_days(now),
        });
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("failed to encode status: {e}"))?;
        println!("{out}");
    } else {
        super::print_character(&character, cause, now);
    }
    Ok(())
}
