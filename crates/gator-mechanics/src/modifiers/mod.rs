//! GATOR modifier aggregation.
//!
//! An [`AttackContext`] carries the situational facts of one shot:
//! **G**unnery, **A**ttacker movement, **T**arget movement, **O**ther
//! (terrain and situational) and **R**ange. [`compute_target_number`]
//! folds them into a single [`TargetNumber`].
//!
//! Every field is an enum or a validated newtype, so a context that
//! exists is always legal and aggregation cannot fail.

pub mod target;
pub mod terrain;

pub use target::{Breakdown, MIN_TARGET_NUMBER, TargetNumber, Tier, TierThresholds};
pub use terrain::{HeatPenalty, OtherTerrain, SecondaryTarget, TerrainModifiers, Woods};

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Target movement modifier by band index. An identity mapping.
const TARGET_BAND_MODIFIERS: [i32; 7] = [0, 1, 2, 3, 4, 5, 6];

/// Bonus when the target jumped this turn.
const TARGET_JUMPED_BONUS: i32 = 1;

/// Pilot gunnery skill, 1 (elite) to 6 (green).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Gunnery(u8);

impl Gunnery {
    /// Best possible skill.
    pub const MIN: u8 = 1;
    /// Worst possible skill.
    pub const MAX: u8 = 6;

    /// Validate a gunnery skill.
    pub fn new(skill: u8) -> MechResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&skill) {
            Ok(Self(skill))
        } else {
            Err(MechError::OutOfRange {
                field: "gunnery",
                value: i64::from(skill),
                min: i64::from(Self::MIN),
                max: i64::from(Self::MAX),
            })
        }
    }

    /// The skill value, which is also its modifier.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Gunnery {
    fn default() -> Self {
        Self(4)
    }
}

impl TryFrom<u8> for Gunnery {
    type Error = MechError;

    fn try_from(skill: u8) -> MechResult<Self> {
        Self::new(skill)
    }
}

impl From<Gunnery> for u8 {
    fn from(gunnery: Gunnery) -> Self {
        gunnery.0
    }
}

/// How the attacker moved this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackerMovement {
    /// Did not move (+0).
    #[default]
    Stationary,
    /// Walked (+1).
    Walked,
    /// Ran (+2).
    Ran,
    /// Jumped (+3).
    Jumped,
    /// Firing while prone (+2).
    Prone,
}

impl AttackerMovement {
    /// To-hit modifier, never negative.
    pub fn modifier(self) -> i32 {
        match self {
            Self::Stationary => 0,
            Self::Walked => 1,
            Self::Ran | Self::Prone => 2,
            Self::Jumped => 3,
        }
    }

    /// Parse from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "stationary" | "none" | "stood" => Some(Self::Stationary),
            "walk" | "walked" => Some(Self::Walked),
            "run" | "ran" => Some(Self::Ran),
            "jump" | "jumped" => Some(Self::Jumped),
            "prone" => Some(Self::Prone),
            _ => None,
        }
    }
}

/// Target movement band, 0 to 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TargetMovementBand(u8);

impl TargetMovementBand {
    /// Highest band.
    pub const MAX: u8 = 6;

    /// Validate a band index.
    pub fn new(band: u8) -> MechResult<Self> {
        if band <= Self::MAX {
            Ok(Self(band))
        } else {
            Err(MechError::OutOfRange {
                field: "target movement band",
                value: i64::from(band),
                min: 0,
                max: i64::from(Self::MAX),
            })
        }
    }

    /// The band index.
    pub fn value(self) -> u8 {
        self.0
    }

    /// To-hit modifier from the band table.
    pub fn modifier(self) -> i32 {
        TARGET_BAND_MODIFIERS[usize::from(self.0)]
    }
}

impl TryFrom<u8> for TargetMovementBand {
    type Error = MechError;

    fn try_from(band: u8) -> MechResult<Self> {
        Self::new(band)
    }
}

impl From<TargetMovementBand> for u8 {
    fn from(band: TargetMovementBand) -> Self {
        band.0
    }
}

/// Target posture. Anything but `Normal` replaces the movement term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Posture {
    /// Standing; movement band and jump apply.
    #[default]
    Normal,
    /// Prone, attacked from an adjacent hex (-2).
    ProneAdjacent,
    /// Prone, attacked from range (+1).
    Prone,
    /// Immobile (-4).
    Immobile,
}

impl Posture {
    /// The fixed term this posture substitutes for target movement.
    pub fn override_modifier(self) -> Option<i32> {
        match self {
            Self::Normal => None,
            Self::ProneAdjacent => Some(-2),
            Self::Prone => Some(1),
            Self::Immobile => Some(-4),
        }
    }

    /// Parse from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "normal" | "none" | "standing" => Some(Self::Normal),
            "prone-adjacent" | "padj" | "adjacent" => Some(Self::ProneAdjacent),
            "prone" => Some(Self::Prone),
            "immobile" | "imm" => Some(Self::Immobile),
            _ => None,
        }
    }
}

/// How far inside the weapon's minimum range the target is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinimumRange {
    /// At or beyond minimum range (+0).
    #[default]
    Equal,
    /// One bracket short (+2).
    OneShort,
    /// Two brackets short (+3).
    TwoShort,
    /// Three brackets short (+4).
    ThreeShort,
    /// Four brackets short (+5).
    FourShort,
    /// Five brackets short (+6).
    FiveShort,
}

impl MinimumRange {
    /// Most brackets short a weapon can be.
    pub const MAX_SHORT: u8 = 5;

    /// Build from the number of brackets short of minimum range.
    pub fn from_brackets_short(short: u8) -> MechResult<Self> {
        match short {
            0 => Ok(Self::Equal),
            1 => Ok(Self::OneShort),
            2 => Ok(Self::TwoShort),
            3 => Ok(Self::ThreeShort),
            4 => Ok(Self::FourShort),
            5 => Ok(Self::FiveShort),
            other => Err(MechError::OutOfRange {
                field: "brackets short of minimum range",
                value: i64::from(other),
                min: 0,
                max: i64::from(Self::MAX_SHORT),
            }),
        }
    }

    /// Number of brackets short.
    pub fn brackets_short(self) -> u8 {
        match self {
            Self::Equal => 0,
            Self::OneShort => 1,
            Self::TwoShort => 2,
            Self::ThreeShort => 3,
            Self::FourShort => 4,
            Self::FiveShort => 5,
        }
    }

    /// To-hit penalty: zero at minimum range, otherwise brackets short + 1.
    pub fn penalty(self) -> i32 {
        match self.brackets_short() {
            0 => 0,
            short => i32::from(short) + 1,
        }
    }

    /// Parse `eq`/`equal` or a bracket offset such as `-2` or `2`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s == "eq" || s == "equal" {
            return Some(Self::Equal);
        }
        let digits = s.strip_prefix('-').unwrap_or(&s);
        if !digits.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        let short = digits.parse::<u8>().ok()?;
        Self::from_brackets_short(short).ok()
    }
}

/// Range bracket to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeBracket {
    /// Short range (+0).
    #[default]
    Short,
    /// Medium range (+2).
    Medium,
    /// Long range (+4).
    Long,
}

impl RangeBracket {
    /// To-hit modifier.
    pub fn modifier(self) -> i32 {
        match self {
            Self::Short => 0,
            Self::Medium => 2,
            Self::Long => 4,
        }
    }

    /// Parse from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "short" | "s" => Some(Self::Short),
            "medium" | "m" => Some(Self::Medium),
            "long" | "l" => Some(Self::Long),
            _ => None,
        }
    }
}

/// The situational facts of one attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackContext {
    /// Attacker gunnery skill.
    pub gunnery: Gunnery,
    /// Attacker movement this turn.
    pub attacker_movement: AttackerMovement,
    /// Target movement band.
    pub target_band: TargetMovementBand,
    /// Whether the target jumped.
    pub target_jumped: bool,
    /// Target posture.
    pub posture: Posture,
    /// Terrain and situational modifiers.
    pub terrain: TerrainModifiers,
    /// Minimum-range shortfall.
    pub minimum_range: MinimumRange,
    /// Range bracket.
    pub range: RangeBracket,
}

impl AttackContext {
    /// The target movement term after posture overrides.
    pub fn target_movement_term(&self) -> i32 {
        self.posture.override_modifier().unwrap_or_else(|| {
            let jumped = if self.target_jumped {
                TARGET_JUMPED_BONUS
            } else {
                0
            };
            self.target_band.modifier() + jumped
        })
    }

    /// Per-category contributions for this context.
    pub fn breakdown(&self) -> Breakdown {
        Breakdown {
            gunnery: i32::from(self.gunnery.value()),
            attacker: self.attacker_movement.modifier(),
            target: self.target_movement_term(),
            other: self.terrain.total(),
            minimum_range: self.minimum_range.penalty(),
            range: self.range.modifier(),
        }
    }
}

/// Compute the target number for a context using the default tiers.
pub fn compute_target_number(context: &AttackContext) -> TargetNumber {
    compute_target_number_with(context, &TierThresholds::default())
}

/// Compute the target number for a context with custom tier thresholds.
pub fn compute_target_number_with(
    context: &AttackContext,
    thresholds: &TierThresholds,
) -> TargetNumber {
    TargetNumber::from_breakdown(context.breakdown(), thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gunnery_validation() {
        assert!(Gunnery::new(0).is_err());
        assert!(Gunnery::new(7).is_err());
        assert_eq!(Gunnery::new(1).unwrap().value(), 1);
        assert_eq!(Gunnery::default().value(), 4);
    }

    #[test]
    fn band_validation_and_identity_mapping() {
        for band in 0..=6 {
            assert_eq!(TargetMovementBand::new(band).unwrap().modifier(), i32::from(band));
        }
        assert!(matches!(
            TargetMovementBand::new(7),
            Err(MechError::OutOfRange { field: "target movement band", .. })
        ));
    }

    #[test]
    fn jump_adds_one() {
        let context = AttackContext {
            target_band: TargetMovementBand::new(3).unwrap(),
            target_jumped: true,
            ..AttackContext::default()
        };
        assert_eq!(context.target_movement_term(), 4);
    }

    #[test]
    fn posture_overrides_band_and_jump() {
        for band in 0..=6 {
            for jumped in [false, true] {
                let mut context = AttackContext {
                    target_band: TargetMovementBand::new(band).unwrap(),
                    target_jumped: jumped,
                    posture: Posture::Immobile,
                    ..AttackContext::default()
                };
                assert_eq!(context.target_movement_term(), -4);
                context.posture = Posture::ProneAdjacent;
                assert_eq!(context.target_movement_term(), -2);
                context.posture = Posture::Prone;
                assert_eq!(context.target_movement_term(), 1);
            }
        }
    }

    #[test]
    fn minimum_range_penalty_is_monotonic() {
        let penalties: Vec<i32> = (0..=MinimumRange::MAX_SHORT)
            .map(|short| MinimumRange::from_brackets_short(short).unwrap().penalty())
            .collect();
        assert_eq!(penalties, vec![0, 2, 3, 4, 5, 6]);
        assert!(penalties.windows(2).all(|w| w[0] < w[1]));
        assert!(MinimumRange::from_brackets_short(6).is_err());
    }

    #[test]
    fn minimum_range_parse() {
        assert_eq!(MinimumRange::parse("eq"), Some(MinimumRange::Equal));
        assert_eq!(MinimumRange::parse("-3"), Some(MinimumRange::ThreeShort));
        assert_eq!(MinimumRange::parse("5"), Some(MinimumRange::FiveShort));
        assert_eq!(MinimumRange::parse("-6"), None);
        assert_eq!(MinimumRange::parse("+3"), None);
        assert_eq!(MinimumRange::parse("-+3"), None);
    }

    #[test]
    fn end_to_end_medium_range_walk() {
        let context = AttackContext {
            gunnery: Gunnery::new(4).unwrap(),
            attacker_movement: AttackerMovement::Walked,
            target_band: TargetMovementBand::new(2).unwrap(),
            range: RangeBracket::Medium,
            ..AttackContext::default()
        };
        let tn = compute_target_number(&context);
        assert_eq!(tn.raw_sum, 9);
        assert_eq!(tn.floored, 9);
        assert_eq!(tn.tier, Tier::Standard);
    }

    #[test]
    fn every_term_contributes() {
        let context = AttackContext {
            gunnery: Gunnery::new(3).unwrap(),
            attacker_movement: AttackerMovement::Jumped,
            target_band: TargetMovementBand::new(1).unwrap(),
            target_jumped: true,
            posture: Posture::Normal,
            terrain: TerrainModifiers {
                woods_between: Woods::Light,
                ..TerrainModifiers::default()
            },
            minimum_range: MinimumRange::OneShort,
            range: RangeBracket::Long,
        };
        let tn = compute_target_number(&context);
        assert_eq!(tn.raw_sum, 3 + 3 + 2 + 1 + 2 + 4);
        assert_eq!(tn.tier, Tier::Hard);
    }

    #[test]
    fn elite_vs_immobile_floors() {
        let context = AttackContext {
            gunnery: Gunnery::new(1).unwrap(),
            posture: Posture::Immobile,
            ..AttackContext::default()
        };
        let tn = compute_target_number(&context);
        assert_eq!(tn.raw_sum, -3);
        assert_eq!(tn.floored, MIN_TARGET_NUMBER);
        assert_eq!(tn.tier, Tier::Automatic);
    }

    #[test]
    fn compute_is_idempotent() {
        let context = AttackContext {
            attacker_movement: AttackerMovement::Ran,
            range: RangeBracket::Long,
            ..AttackContext::default()
        };
        assert_eq!(compute_target_number(&context), compute_target_number(&context));
    }

    #[test]
    fn parse_helpers() {
        assert_eq!(AttackerMovement::parse("Walk"), Some(AttackerMovement::Walked));
        assert_eq!(Posture::parse("prone adjacent"), Some(Posture::ProneAdjacent));
        assert_eq!(Posture::parse("imm"), Some(Posture::Immobile));
        assert_eq!(RangeBracket::parse("M"), Some(RangeBracket::Medium));
        assert_eq!(RangeBracket::parse("extreme"), None);
    }

    #[test]
    fn context_deserializes_with_defaults() {
        let context: AttackContext =
            serde_json::from_str(r#"{"gunnery":3,"range":"long","posture":"prone"}"#).unwrap();
        assert_eq!(context.gunnery.value(), 3);
        assert_eq!(context.range, RangeBracket::Long);
        assert_eq!(context.target_movement_term(), 1);
        assert!(serde_json::from_str::<AttackContext>(r#"{"gunnery":9}"#).is_err());
    }
}
