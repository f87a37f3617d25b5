use std::fmt;

use chrono::{DateTime, Utc};
use hatch_core::Character;
use serde::{Deserialize, Serialize};

/// Why a character is dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathCause {
    /// Hit points reached zero.
    Exhausted,
    /// The pre-committed death timestamp has passed.
    Lifespan,
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => write!(f, "ran out of hit points"),
            Self::Lifespan => write!(f, "reached the end of its lifespan"),
        }
    }
}

/// Determine whether and why `character` is dead at `now`.
///
/// Exhaustion takes precedence when both conditions hold.
pub fn death_cause(character: &Character, now: DateTime<Utc>) -> Option<DeathCause> {
    if character.hit_point == 0 {
        Some(DeathCause::Exhausted)
    } else if now >= character.death_at {
        Some(DeathCause::Lifespan)
    } else {
        None
    }
}

/// True iff `hit_point == 0` or `now` is at or past the death timestamp.
pub fn is_dead(character: &Character, now: DateTime<Utc>) -> bool {
    death_cause(character, now).is_some()
}
