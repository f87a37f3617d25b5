use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

/// Ceiling shared by the living-environment and favorability stats.
pub const MAX_CARE_STAT: u32 = 10;

/// Hit points (current and maximum) a freshly hatched character starts with.
pub const STARTING_HIT_POINT: u32 = 10;

/// Unique identifier for one life of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Developmental phase of a character.
///
/// The derived ordering follows the only legal direction of travel:
/// `Childhood < GrowthPeriod < Maturity`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    /// The stage every character hatches into.
    #[default]
    Childhood,
    /// Reached from childhood through good care.
    GrowthPeriod,
    /// Final stage, entered as the end of life approaches.
    Maturity,
}

impl GrowthStage {
    /// Human-readable name of the stage.
    pub fn label(self) -> &'static str {
        match self {
            Self::Childhood => "childhood",
            Self::GrowthPeriod => "growth period",
            Self::Maturity => "maturity",
        }
    }
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The virtual pet.
///
/// Every operation in `hatch-sim` consumes a `Character` and hands back the
/// updated record; the host keeps the single stored copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Identifies this life. A restart produces a new id.
    pub id: CharacterId,
    /// Current developmental phase.
    pub growth_stage: GrowthStage,
    /// Current vitality, `0..=max_hit_point`.
    pub hit_point: u32,
    /// Vitality ceiling, at least 1.
    pub max_hit_point: u32,
    /// Cleanliness score, `0..=10`.
    pub living_environment: u32,
    /// Affection score, `0..=10`.
    pub favorability: u32,
    /// Last successful feeding, `None` if never fed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_fed_at: Option<DateTime<Utc>>,
    /// Feeds performed inside the current cooldown window.
    #[serde(default)]
    pub recent_feed_count: u32,
    /// The instant at or after which the character is dead.
    pub death_at: DateTime<Utc>,
    /// When the character hatched.
    pub born_at: DateTime<Utc>,
}

impl Character {
    /// Build a freshly hatched character with default stats.
    pub fn hatch(born_at: DateTime<Utc>, death_at: DateTime<Utc>) -> Self {
        Self {
            id: CharacterId::new(),
            growth_stage: GrowthStage::Childhood,
            hit_point: STARTING_HIT_POINT,
            max_hit_point: STARTING_HIT_POINT,
            living_environment: MAX_CARE_STAT,
            favorability: MAX_CARE_STAT,
            last_fed_at: None,
            recent_feed_count: 0,
            death_at,
            born_at,
        }
    }

    /// Multiplier applied to hit points when leaving childhood.
    pub fn growth_factor(&self) -> u32 {
        self.favorability.max(1)
    }

    /// Whole days from `now` until `death_at`, truncated toward zero.
    /// Negative once the death timestamp has passed.
    pub fn remaining_days(&self, now: DateTime<Utc>) -> i64 {
        (self.death_at - now).num_days()
    }

    /// Whole days since hatching.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.born_at).num_days()
    }

    /// Check every stat bound. Returns the first violation found.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_hit_point == 0 {
            return Err(CoreError::InvalidMaxHitPoint(self.max_hit_point));
        }
        if self.hit_point > self.max_hit_point {
            return Err(CoreError::StatOutOfRange {
                stat: "hit_point",
                value: self.hit_point,
                max: self.max_hit_point,
            });
        }
        if self.living_environment > MAX_CARE_STAT {
            return Err(CoreError::StatOutOfRange {
                stat: "living_environment",
                value: self.living_environment,
                max: MAX_CARE_STAT,
            });
        }
        if self.favorability > MAX_CARE_STAT {
            return Err(CoreError::StatOutOfRange {
                stat: "favorability",
                value: self.favorability,
                max: MAX_CARE_STAT,
            });
        }
        if self.death_at < self.born_at {
            return Err(CoreError::Validation(format!(
                "death timestamp {} precedes birth {}",
                self.death_at, self.born_at
            )));
        }
        Ok(())
    }
}
