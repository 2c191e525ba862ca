//! Resolution of attacks and their follow-up rolls.
//!
//! - **To-hit**: 2d6 against the target number
//! - **Hit location**: 2d6 on the location table for the struck arc
//! - **Critical check**: 2d6 on the critical count table
//! - **Cluster hits**: modified 2d6 on the row for the weapon's size
//!
//! Each follow-up draws its own dice; none depends on another.

pub mod cluster;
pub mod critical;
pub mod location;

pub use cluster::{ClusterHits, ClusterModifiers, MissileType, resolve_cluster};
pub use critical::{CriticalCheck, resolve_critical};
pub use location::{HitLocation, resolve_hit_location};

use serde::{Deserialize, Serialize};

use crate::dice::{DiceSource, RollResult};
use crate::modifiers::TargetNumber;

/// Whether a roll meets the target number.
pub fn evaluate_attack(target: &TargetNumber, roll: &RollResult) -> bool {
    i32::from(roll.total()) >= target.floored
}

/// A resolved to-hit roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRoll {
    /// The 2d6 rolled.
    pub roll: RollResult,
    /// The target number rolled against.
    pub target_number: TargetNumber,
    /// Whether the attack hit.
    pub hit: bool,
    /// Roll total minus target number; negative on a miss.
    pub margin: i32,
}

/// Roll 2d6 against a target number.
pub fn roll_attack<D: DiceSource + ?Sized>(target: &TargetNumber, dice: &mut D) -> AttackRoll {
    let roll = dice.roll_two_d6();
    AttackRoll {
        roll,
        target_number: *target,
        hit: evaluate_attack(target, &roll),
        margin: i32::from(roll.total()) - target.floored,
    }
}

impl std::fmt::Display for AttackRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.hit { "HIT" } else { "MISS" };
        write!(f, "{} vs TN {} => {verdict}", self.roll, self.target_number.floored)
    }
}

/// Any outcome produced after a successful attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// Where the attack struck.
    HitLocation(HitLocation),
    /// How many critical slots were triggered.
    CriticalCheck(CriticalCheck),
    /// How many submunitions connected.
    ClusterHits(ClusterHits),
}

impl From<HitLocation> for ResolutionOutcome {
    fn from(outcome: HitLocation) -> Self {
        Self::HitLocation(outcome)
    }
}

impl From<CriticalCheck> for ResolutionOutcome {
    fn from(outcome: CriticalCheck) -> Self {
        Self::CriticalCheck(outcome)
    }
}

impl From<ClusterHits> for ResolutionOutcome {
    fn from(outcome: ClusterHits) -> Self {
        Self::ClusterHits(outcome)
    }
}

impl std::fmt::Display for ResolutionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HitLocation(o) => write!(f, "{o}"),
            Self::CriticalCheck(o) => write!(f, "{o}"),
            Self::ClusterHits(o) => write!(f, "{o}"),
        }
    }
}
