//! Canonical roll results.

use serde::{Deserialize, Serialize};

/// The result of one of the ruleset's canonical rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RollResult {
    /// A single d6 (1-6).
    OneD6 {
        /// The face rolled.
        die: u8,
    },
    /// Two d6 summed (2-12).
    TwoD6 {
        /// Both faces, in draw order.
        dice: [u8; 2],
    },
}

impl RollResult {
    /// The individual die faces.
    pub fn die_values(&self) -> &[u8] {
        match self {
            Self::OneD6 { die } => std::slice::from_ref(die),
            Self::TwoD6 { dice } => dice,
        }
    }

    /// Sum of all faces.
    pub fn total(&self) -> u8 {
        self.die_values().iter().sum()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OneD6 { die } => write!(f, "1d6 [{die}] = {die}"),
            Self::TwoD6 { dice: [a, b] } => write!(f, "2d6 [{a}, {b}] = {}", a + b),
        }
    }
}
