//! The engine facade called by presentation layers.
//!
//! `Engine` owns a dice source and the tier thresholds. It holds no other
//! state: every operation is a fresh calculation over its arguments.

use tracing::debug;

use crate::config::EngineConfig;
use crate::dice::{DiceExpr, DiceSource, ExprRoll, RngDice};
use crate::error::MechResult;
use crate::modifiers::{self, AttackContext, TargetNumber, TierThresholds};
use crate::resolution::{self, AttackRoll, ClusterHits, CriticalCheck, HitLocation};
use crate::tables::{ClusterSize, Facing};

/// Combat resolution engine.
#[derive(Debug, Clone)]
pub struct Engine<S = RngDice> {
    dice: S,
    tiers: TierThresholds,
}

impl Engine<RngDice> {
    /// Create an engine with `rand` dice, seeded from the config if set.
    pub fn new(config: &EngineConfig) -> Self {
        let dice = match config.seed {
            Some(seed) => RngDice::seeded(seed),
            None => RngDice::from_os(),
        };
        Self::with_dice(dice, config)
    }
}

impl<S: DiceSource> Engine<S> {
    /// Create an engine around an explicit dice source. The config seed is ignored.
    pub fn with_dice(dice: S, config: &EngineConfig) -> Self {
        Self {
            dice,
            tiers: config.tiers,
        }
    }

    /// The dice source.
    pub fn dice(&self) -> &S {
        &self.dice
    }

    /// Consume the engine and return its dice source.
    pub fn into_dice(self) -> S {
        self.dice
    }

    /// Tier thresholds in use.
    pub fn tiers(&self) -> &TierThresholds {
        &self.tiers
    }

    /// Aggregate a context into a target number.
    pub fn compute_target_number(&self, context: &AttackContext) -> TargetNumber {
        let tn = modifiers::compute_target_number_with(context, &self.tiers);
        debug!(
            raw_sum = tn.raw_sum,
            floored = tn.floored,
            tier = %tn.tier,
            "target number computed"
        );
        tn
    }

    /// Roll 2d6 to hit.
    pub fn roll_attack(&mut self, target: &TargetNumber) -> AttackRoll {
        let attack = resolution::roll_attack(target, &mut self.dice);
        debug!(
            roll = attack.roll.total(),
            target = target.floored,
            hit = attack.hit,
            "attack rolled"
        );
        attack
    }

    /// Roll hit location for an attack from `facing`.
    pub fn resolve_hit_location(&mut self, facing: Facing) -> HitLocation {
        let hit = resolution::resolve_hit_location(facing, &mut self.dice);
        debug!(%facing, roll = hit.roll, location = %hit.label(), "hit location resolved");
        hit
    }

    /// Roll a critical check.
    pub fn resolve_critical(&mut self) -> CriticalCheck {
        let check = resolution::resolve_critical(&mut self.dice);
        debug!(
            roll = check.roll,
            criticals = check.critical_count,
            "critical check resolved"
        );
        check
    }

    /// Roll cluster hits for a weapon firing `weapon_size` submunitions.
    ///
    /// Fails if the size has no row in the cluster table.
    pub fn resolve_cluster(
        &mut self,
        weapon_size: u32,
        modifier_sum: i32,
        is_streak: bool,
    ) -> MechResult<ClusterHits> {
        let size = ClusterSize::try_from(weapon_size)?;
        let hits = resolution::resolve_cluster(size, modifier_sum, is_streak, &mut self.dice);
        debug!(
            size = weapon_size,
            modifier_sum,
            streak = is_streak,
            roll = ?hits.roll,
            adjusted = ?hits.adjusted_roll,
            hits = hits.hits,
            "cluster resolved"
        );
        Ok(hits)
    }

    /// Roll a free-form dice expression.
    pub fn roll_expression(&mut self, expr: &DiceExpr) -> ExprRoll {
        let roll = expr.roll(&mut self.dice);
        debug!(expr = %expr, total = roll.total, "expression rolled");
        roll
    }
}
