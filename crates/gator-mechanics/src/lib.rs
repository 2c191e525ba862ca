//! GATOR combat resolution engine.
//!
//! Turns the situational facts of a mech attack into a 2d6 target number,
//! then resolves what follows a hit: the location struck, critical slots
//! triggered and, for cluster weapons, how many submunitions connect.
//! The engine is a pure calculation core; a caller supplies an
//! [`AttackContext`] and a [`DiceSource`].

pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod modifiers;
pub mod resolution;
pub mod tables;

pub use config::EngineConfig;
pub use dice::{DiceExpr, DiceSource, ExprRoll, RngDice, RollResult, ScriptedDice, SharedDice};
pub use engine::Engine;
pub use error::{MechError, MechResult};
pub use modifiers::{
    AttackContext, AttackerMovement, Gunnery, MinimumRange, Posture, RangeBracket,
    TargetMovementBand, TargetNumber, TerrainModifiers, Tier, TierThresholds,
    compute_target_number,
};
pub use resolution::{
    AttackRoll, ClusterHits, ClusterModifiers, CriticalCheck, HitLocation, MissileType,
    ResolutionOutcome, evaluate_attack,
};
pub use tables::{ClusterSize, Facing, Location};
