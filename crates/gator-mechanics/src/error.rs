//! Error types for the resolution engine.
//!
//! Only caller-side validation failures are represented here. A die or
//! table key outside its closed domain is a programming error and panics
//! instead of producing a `MechError`.

/// Errors that can occur while building inputs or resolving outcomes.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A cluster weapon size has no row in the cluster hits table.
    #[error("unsupported cluster weapon size: {0} (expected one of 2, 4, 5, 6, 10, 15, 20)")]
    UnsupportedClusterSize(u32),

    /// A numeric input fell outside its legal range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Name of the offending input.
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// Smallest legal value.
        min: i64,
        /// Largest legal value.
        max: i64,
    },

    /// A dice expression could not be parsed.
    #[error("invalid dice expression: {0}")]
    InvalidDiceExpression(String),

    /// The engine configuration is malformed.
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for engine operations.
pub type MechResult<T> = Result<T, MechError>;
