//! Core types for Hatchling: the virtual pet record and its invariants.
//!
//! This crate defines the data the simulator operates on. It holds no rules
//! about time, randomness, or care actions; those live in `hatch-sim`. A
//! [`Character`] can be built programmatically or deserialized from JSON.

/// The character record, growth stages, and stat bounds.
pub mod character;
/// Error types used throughout the crate.
pub mod error;

/// Re-export character types.
pub use character::{Character, CharacterId, GrowthStage, MAX_CARE_STAT, STARTING_HIT_POINT};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
