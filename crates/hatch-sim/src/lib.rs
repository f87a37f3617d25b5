//! Character lifecycle simulation for Hatchling.
//!
//! [`CharacterSimulator`] is a value-in/value-out engine over a
//! [`hatch_core::Character`]: every operation consumes the record and returns
//! the updated one. Randomness and time come from injected collaborators
//! ([`RandomSource`], [`Clock`]) so outcomes are reproducible in tests.
//! [`Caretaker`] is a thin host session that pairs the simulator with a
//! [`Store`] and serializes actions against the single stored record.

/// Host session tying the simulator to a store and a clock.
pub mod caretaker;
/// Time sources: the system clock and a manually driven clock.
pub mod clock;
/// Rule constants for a simulation run.
pub mod config;
/// Death determination.
pub mod death;
/// Error types for the simulation crate.
pub mod error;
/// Care event types and the event log.
pub mod event;
/// Injectable random number sources.
pub mod random;
/// The state-transition engine.
pub mod simulator;
/// Single-slot character persistence.
pub mod store;

/// Re-exports of [`caretaker::Caretaker`] and [`caretaker::TickOutcome`].
pub use caretaker::{Caretaker, TickOutcome};
/// Re-exports of [`clock::Clock`], [`clock::ManualClock`], and [`clock::SystemClock`].
pub use clock::{Clock, ManualClock, SystemClock};
/// Re-exports of [`config::SimConfig`] and [`config::GrowthThresholds`].
pub use config::{GrowthThresholds, SimConfig};
/// Re-exports of [`death::DeathCause`], [`death::death_cause`], and [`death::is_dead`].
pub use death::{DeathCause, death_cause, is_dead};
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of [`event::CareEvent`], [`event::CareEventKind`], and [`event::EventLog`].
pub use event::{CareEvent, CareEventKind, EventLog};
/// Re-exports of the random sources.
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
/// Re-export of [`simulator::CharacterSimulator`].
pub use simulator::CharacterSimulator;
/// Re-exports of the store trait and its implementations.
pub use store::{JsonFileStore, MemoryStore, Store};
