/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when a character record breaks one of its invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A stat is larger than its ceiling.
    #[error("{stat} out of range: {value} exceeds {max}")]
    StatOutOfRange {
        /// Name of the offending stat.
        stat: &'static str,
        /// The stored value.
        value: u32,
        /// The ceiling the value must not exceed.
        max: u32,
    },

    /// The vitality ceiling must be at least 1.
    #[error("invalid max hit point: {0} (must be at least 1)")]
    InvalidMaxHitPoint(u32),

    /// A generic validation error with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
