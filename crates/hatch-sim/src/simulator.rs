use chrono::{DateTime, Duration, Utc};
use hatch_core::{Character, GrowthStage, MAX_CARE_STAT};
use tracing::{debug, info};

use crate::config::SimConfig;
use crate::death::{self, DeathCause};
use crate::event::{CareEventKind, EventLog};
use crate::random::RandomSource;

const SECONDS_PER_HOUR: i64 = 3600;
const HOURS_PER_DAY: i64 = 24;

/// The character state-transition engine.
///
/// Operations consume a [`Character`] and return the updated record. The
/// simulator owns the rule constants, the random source, and a log of every
/// care event it has applied; it never touches storage or the wall clock.
#[derive(Debug)]
pub struct CharacterSimulator<R> {
    config: SimConfig,
    rng: R,
    events: EventLog,
}

impl<R: RandomSource> CharacterSimulator<R> {
    /// Create a simulator with the given rules and random source.
    pub fn new(config: SimConfig, rng: R) -> Self {
        let events = EventLog::new(config.max_events);
        Self {
            config,
            rng,
            events,
        }
    }

    /// The rule constants in use.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Every care event applied so far.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Mutable access to the random source, e.g. to extend a script.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Hatch a new character whose death timestamp lies a random number of
    /// whole days after `now`.
    pub fn create_character(&mut self, now: DateTime<Utc>) -> Character {
        let lifespan_days = self.draw(self.config.lifespan_days);
        let death_at = now
            .checked_add_signed(Duration::days(i64::from(lifespan_days)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        let character = Character::hatch(now, death_at);
        info!(character = %character.id, lifespan_days, "character hatched");
        self.events.push(
            character.id,
            CareEventKind::Born { lifespan_days },
            format!("{} hatched with {lifespan_days} days to live", character.id),
        );
        character
    }

    /// True iff the character has no hit points left or `now` has reached its
    /// death timestamp.
    pub fn is_dead(&self, character: &Character, now: DateTime<Utc>) -> bool {
        death::is_dead(character, now)
    }

    /// Why the character is dead at `now`, if it is.
    pub fn death_cause(&self, character: &Character, now: DateTime<Utc>) -> Option<DeathCause> {
        death::death_cause(character, now)
    }

    /// Record that a host observed the character's death.
    pub fn record_death(&mut self, character: &Character, cause: DeathCause) {
        info!(character = %character.id, %cause, "character died");
        self.events.push(
            character.id,
            CareEventKind::Died { cause },
            format!("{} {cause}", character.id),
        );
    }

    /// Feed the character.
    ///
    /// A meal outside the cooldown window resets the recent-feed counter and
    /// restores a random amount; inside the window it restores exactly one
    /// hit point and bumps the counter.
    pub fn feed(&mut self, mut character: Character, now: DateTime<Utc>) -> Character {
        let fresh_meal = self.feed_window_elapsed(&character, now);
        let recovery = if fresh_meal {
            character.recent_feed_count = 0;
            self.draw(self.config.feed_recovery)
        } else {
            character.recent_feed_count = character.recent_feed_count.saturating_add(1);
            1
        };

        character.last_fed_at = Some(now);
        let before = character.hit_point;
        character.hit_point = character
            .hit_point
            .saturating_add(recovery)
            .min(character.max_hit_point);
        let recovered = character.hit_point - before;

        debug!(
            character = %character.id,
            fresh_meal,
            recovery,
            hit_point = character.hit_point,
            "fed"
        );
        self.events.push(
            character.id,
            CareEventKind::Fed {
                recovered,
                within_cooldown: !fresh_meal,
            },
            format!("{} ate and recovered {recovered} hp", character.id),
        );
        character
    }

    /// Reset the living environment to its maximum.
    pub fn clean_toilet(&mut self, mut character: Character) -> Character {
        character.living_environment = MAX_CARE_STAT;
        debug!(character = %character.id, "toilet cleaned");
        self.events.push(
            character.id,
            CareEventKind::Cleaned,
            format!("{}'s toilet was cleaned", character.id),
        );
        character
    }

    /// Raise favorability by `amount`, capped at the care-stat maximum.
    pub fn increase_favorability(&mut self, mut character: Character, amount: u32) -> Character {
        character.favorability = character
            .favorability
            .saturating_add(amount)
            .min(MAX_CARE_STAT);
        debug!(
            character = %character.id,
            amount,
            favorability = character.favorability,
            "favorability raised"
        );
        self.events.push(
            character.id,
            CareEventKind::Played { amount },
            format!("{} played (+{amount} favorability)", character.id),
        );
        character
    }

    /// Play with the character. Without an explicit amount, the gain is drawn
    /// from the configured play range.
    pub fn play(&mut self, character: Character, amount: Option<u32>) -> Character {
        let amount = match amount {
            Some(amount) => amount,
            None => self.draw(self.config.play_amount),
        };
        self.increase_favorability(character, amount)
    }

    /// Check for and apply a growth-stage transition.
    ///
    /// Childhood with more than the window's lower bound of days left may grow
    /// into the growth period. Every other case, including a childhood that is
    /// already too close to death, falls through to the maturity check, which
    /// also re-runs for a character that is already mature.
    pub fn challenge_evolution(&mut self, character: Character, now: DateTime<Utc>) -> Character {
        let remaining_days = character.remaining_days(now);
        let (window_low, window_high) = self.config.childhood_window_days;

        if character.growth_stage == GrowthStage::Childhood && remaining_days > window_low {
            if remaining_days >= window_high {
                return character;
            }
            return self.try_grow(character);
        }

        let growth_factor = i64::from(character.growth_factor());
        if remaining_days - growth_factor < self.config.maturity_margin_days {
            return self.mature(character);
        }
        character
    }

    /// Apply one decay tick: a single random decrement comes off hit points,
    /// living environment, and favorability alike, then evolution is checked.
    ///
    /// `last_update` only feeds the log. The decrement does not depend on how
    /// long the interval was.
    pub fn apply_elapsed_decay(
        &mut self,
        mut character: Character,
        now: DateTime<Utc>,
        last_update: DateTime<Utc>,
    ) -> Character {
        let decrement = self.draw(self.config.decay);
        character.hit_point = character.hit_point.saturating_sub(decrement);
        character.living_environment = character.living_environment.saturating_sub(decrement);
        character.favorability = character.favorability.saturating_sub(decrement);

        debug!(
            character = %character.id,
            decrement,
            elapsed_secs = (now - last_update).num_seconds(),
            hit_point = character.hit_point,
            "decay tick"
        );
        self.events.push(
            character.id,
            CareEventKind::Decayed { amount: decrement },
            format!("{} lost {decrement} from every stat", character.id),
        );

        self.challenge_evolution(character, now)
    }

    fn try_grow(&mut self, mut character: Character) -> Character {
        let thresholds = self.config.growth_thresholds;
        let ready = character.living_environment > thresholds.living_environment
            && character.favorability > thresholds.favorability
            && character.hit_point > thresholds.hit_point;
        if !ready {
            return character;
        }

        let growth_factor = character.growth_factor();
        let draw = self.draw((character.hit_point, character.max_hit_point));
        let grown = draw.saturating_mul(growth_factor);

        character.growth_stage = GrowthStage::GrowthPeriod;
        character.hit_point = grown;
        // The grown value becomes the new ceiling when it overshoots the old one.
        character.max_hit_point = character.max_hit_point.max(grown);

        info!(
            character = %character.id,
            growth_factor,
            hit_point = grown,
            "entered growth period"
        );
        self.events.push(
            character.id,
            CareEventKind::Evolved {
                from: GrowthStage::Childhood,
                to: GrowthStage::GrowthPeriod,
            },
            format!("{} entered the growth period", character.id),
        );
        character
    }

    fn mature(&mut self, mut character: Character) -> Character {
        let from = character.growth_stage;
        let shrink = self.draw(self.config.maturity_shrink);
        let ceiling = character
            .hit_point
            .min(character.max_hit_point.saturating_sub(shrink))
            .max(self.config.min_max_hit_point);

        character.growth_stage = GrowthStage::Maturity;
        character.max_hit_point = ceiling;
        character.hit_point = character.hit_point.min(ceiling);

        let description = if from == GrowthStage::Maturity {
            format!("{} weakened further (max hp {ceiling})", character.id)
        } else {
            format!("{} reached maturity (max hp {ceiling})", character.id)
        };
        info!(character = %character.id, %from, max_hit_point = ceiling, "maturity applied");
        self.events.push(
            character.id,
            CareEventKind::Evolved {
                from,
                to: GrowthStage::Maturity,
            },
            description,
        );
        character
    }

    /// Whether enough time has passed since the last meal for a full recovery.
    ///
    /// Elapsed hours are reduced modulo 24 before the comparison, so the
    /// window reopens and closes again every day.
    fn feed_window_elapsed(&self, character: &Character, now: DateTime<Utc>) -> bool {
        match character.last_fed_at {
            None => true,
            Some(last) => {
                let hours = (now - last).num_seconds() / SECONDS_PER_HOUR % HOURS_PER_DAY;
                hours > self.config.feed_cooldown_hours
            }
        }
    }

    fn draw(&mut self, (low, high): (u32, u32)) -> u32 {
        self.rng.uniform_int(low, high)
    }
}
