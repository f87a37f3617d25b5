use chrono::{DateTime, Utc};
use hatch_core::Character;
use tracing::debug;

use crate::clock::Clock;
use crate::death::DeathCause;
use crate::error::{SimError, SimResult};
use crate::random::RandomSource;
use crate::simulator::CharacterSimulator;
use crate::store::Store;

/// Result of one decay tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The character survived the tick.
    Alive(Character),
    /// The character is dead; the scheduler should stop re-arming.
    Died {
        /// The final state of the character.
        character: Character,
        /// Why it died.
        cause: DeathCause,
    },
}

impl TickOutcome {
    /// The character after the tick, dead or alive.
    pub fn character(&self) -> &Character {
        match self {
            Self::Alive(character) | Self::Died { character, .. } => character,
        }
    }

    /// Whether the character died on or before this tick.
    pub fn is_dead(&self) -> bool {
        matches!(self, Self::Died { .. })
    }
}

/// Host session over the single stored character.
///
/// Every mutation loads the stored record, runs one simulator operation, and
/// saves the result. Mutations take `&mut self`, so a caretaker never has
/// two read-modify-write cycles in flight against the same slot.
#[derive(Debug)]
pub struct Caretaker<S, C, R> {
    simulator: CharacterSimulator<R>,
    store: S,
    clock: C,
    last_update: DateTime<Utc>,
}

impl<S: Store, C: Clock, R: RandomSource> Caretaker<S, C, R> {
    /// Create a session. The decay interval is measured from now.
    pub fn new(simulator: CharacterSimulator<R>, store: S, clock: C) -> Self {
        let last_update = clock.now();
        Self {
            simulator,
            store,
            clock,
            last_update,
        }
    }

    /// The simulator, including its event log.
    pub fn simulator(&self) -> &CharacterSimulator<R> {
        &self.simulator
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The clock in use.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable access to the clock, e.g. to advance a manual clock.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Load the stored character, hatching and saving a new one on first run.
    pub fn open(&mut self) -> SimResult<Character> {
        match self.store.load()? {
            Some(character) => Ok(character),
            None => self.hatch_and_save(),
        }
    }

    /// Hatch a new character. Fails when one is already stored unless `force`.
    pub fn hatch(&mut self, force: bool) -> SimResult<Character> {
        if !force && self.store.load()?.is_some() {
            return Err(SimError::AlreadyExists);
        }
        self.hatch_and_save()
    }

    /// Acknowledge a death and hatch a replacement. A living character is only
    /// replaced when `force` is set.
    pub fn restart(&mut self, force: bool) -> SimResult<Character> {
        if !force {
            let (_, cause) = self.status()?;
            if cause.is_none() {
                return Err(SimError::StillAlive);
            }
        }
        self.hatch_and_save()
    }

    /// The stored character and, if it is dead, why.
    pub fn status(&self) -> SimResult<(Character, Option<DeathCause>)> {
        let character = self.current()?;
        let cause = self.simulator.death_cause(&character, self.clock.now());
        Ok((character, cause))
    }

    /// Feed the stored character.
    pub fn feed(&mut self) -> SimResult<Character> {
        let now = self.clock.now();
        let character = self.living(now)?;
        let character = self.simulator.feed(character, now);
        self.commit(character)
    }

    /// Play with the stored character.
    pub fn play(&mut self, amount: Option<u32>) -> SimResult<Character> {
        let character = self.living(self.clock.now())?;
        let character = self.simulator.play(character, amount);
        self.commit(character)
    }

    /// Clean the stored character's toilet.
    pub fn clean(&mut self) -> SimResult<Character> {
        let character = self.living(self.clock.now())?;
        let character = self.simulator.clean_toilet(character);
        self.commit(character)
    }

    /// Apply one decay tick. A character that is already dead is returned
    /// unchanged.
    pub fn tick(&mut self) -> SimResult<TickOutcome> {
        let now = self.clock.now();
        let character = self.current()?;
        if let Some(cause) = self.simulator.death_cause(&character, now) {
            return Ok(TickOutcome::Died { character, cause });
        }

        let character = self
            .simulator
            .apply_elapsed_decay(character, now, self.last_update);
        self.last_update = now;
        let character = self.commit(character)?;

        match self.simulator.death_cause(&character, now) {
            Some(cause) => {
                self.simulator.record_death(&character, cause);
                Ok(TickOutcome::Died { character, cause })
            }
            None => Ok(TickOutcome::Alive(character)),
        }
    }

    fn current(&self) -> SimResult<Character> {
        self.store.load()?.ok_or(SimError::NoCharacter)
    }

    fn living(&self, now: DateTime<Utc>) -> SimResult<Character> {
        let character = self.current()?;
        match self.simulator.death_cause(&character, now) {
            Some(cause) => Err(SimError::CharacterDead(cause)),
            None => Ok(character),
        }
    }

    fn hatch_and_save(&mut self) -> SimResult<Character> {
        let now = self.clock.now();
        let character = self.simulator.create_character(now);
        self.last_update = now;
        self.commit(character)
    }

    fn commit(&mut self, character: Character) -> SimResult<Character> {
        character.validate()?;
        self.store.save(&character)?;
        debug!(character = %character.id, hit_point = character.hit_point, "committed");
        Ok(character)
    }
}
