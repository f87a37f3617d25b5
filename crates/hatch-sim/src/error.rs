use hatch_core::CoreError;

use crate::death::DeathCause;

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised by the simulation hosts and stores.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A loaded or constructed character broke an invariant.
    #[error("invalid character: {0}")]
    Core(#[from] CoreError),

    /// Reading or writing the save slot failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The save slot could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A rule constant is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A care action was attempted on a dead character.
    #[error("the character has died ({0}); restart to hatch a new one")]
    CharacterDead(DeathCause),

    /// A restart was requested while the character is still alive.
    #[error("the character is still alive; use --force to replace it")]
    StillAlive,

    /// The store holds no character yet.
    #[error("no character found; create one first")]
    NoCharacter,

    /// A character already occupies the store.
    #[error("a character already exists; use --force to replace it")]
    AlreadyExists,
}
