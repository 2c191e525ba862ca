//! Hit location rolls.

use serde::{Deserialize, Serialize};

use crate::dice::DiceSource;
use crate::tables::{self, Facing, Location};

/// Where an attack struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitLocation {
    /// The arc the attack came from.
    pub facing: Facing,
    /// The 2d6 total rolled.
    pub roll: u8,
    /// The location struck.
    pub location: Location,
}

impl HitLocation {
    /// Look up the location for an already-rolled 2d6 total.
    pub fn from_roll(facing: Facing, roll: u8) -> Self {
        Self {
            facing,
            roll,
            location: tables::hit_location(roll),
        }
    }

    /// Whether the damage goes to rear armor. The head has none.
    pub fn is_rear(&self) -> bool {
        self.facing == Facing::Rear && self.location.has_rear()
    }

    /// Record-sheet label such as `LT (Rear)` or `HEAD`.
    pub fn label(&self) -> String {
        if self.is_rear() {
            format!("{} (Rear)", self.location.abbrev())
        } else {
            self.location.abbrev().to_string()
        }
    }
}

impl std::fmt::Display for HitLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {} (2d6={})", self.facing, self.label(), self.roll)
    }
}

/// Roll 2d6 and look up the location struck from `facing`.
pub fn resolve_hit_location<D: DiceSource + ?Sized>(facing: Facing, dice: &mut D) -> HitLocation {
    HitLocation::from_roll(facing, dice.roll_two_d6().total())
}
