//! The aggregated target number and its presentation tier.

use serde::{Deserialize, Serialize};

use crate::dice::two_d6_at_least;
use crate::error::{MechError, MechResult};

/// No target number is ever lower than this.
pub const MIN_TARGET_NUMBER: i32 = 2;

/// Display tier of a target number.
///
/// Derived from the numeric value only; it never changes whether a roll hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Display label for the easiest targets. With the default bounds any 2d6 roll hits.
    Automatic,
    /// An ordinary shot.
    Standard,
    /// A long shot.
    Hard,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Automatic => write!(f, "automatic"),
            Self::Standard => write!(f, "standard"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// Upper bounds used to classify a target number into a [`Tier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct TierThresholds {
    automatic_max: i32,
    standard_max: i32,
}

#[derive(Deserialize)]
struct RawThresholds {
    automatic_max: i32,
    standard_max: i32,
}

impl TryFrom<RawThresholds> for TierThresholds {
    type Error = MechError;

    fn try_from(raw: RawThresholds) -> MechResult<Self> {
        Self::new(raw.automatic_max, raw.standard_max)
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            automatic_max: 2,
            standard_max: 9,
        }
    }
}

impl TierThresholds {
    /// Build thresholds; `automatic_max` must be below `standard_max`.
    pub fn new(automatic_max: i32, standard_max: i32) -> MechResult<Self> {
        if automatic_max >= standard_max {
            return Err(MechError::InvalidConfig(format!(
                "automatic tier bound {automatic_max} must be below standard tier bound {standard_max}"
            )));
        }
        Ok(Self {
            automatic_max,
            standard_max,
        })
    }

    /// Highest target number shown as automatic.
    pub fn automatic_max(&self) -> i32 {
        self.automatic_max
    }

    /// Highest target number shown as standard.
    pub fn standard_max(&self) -> i32 {
        self.standard_max
    }

    /// Classify a target number. The tier is a presentation label only.
    pub fn classify(&self, target: i32) -> Tier {
        if target <= self.automatic_max {
            Tier::Automatic
        } else if target <= self.standard_max {
            Tier::Standard
        } else {
            Tier::Hard
        }
    }
}

/// Per-category contributions to a target number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Breakdown {
    /// Gunnery skill.
    pub gunnery: i32,
    /// Attacker movement.
    pub attacker: i32,
    /// Target movement or posture.
    pub target: i32,
    /// Terrain and situational modifiers.
    pub other: i32,
    /// Minimum-range penalty.
    pub minimum_range: i32,
    /// Range bracket.
    pub range: i32,
}

impl Breakdown {
    /// Sum of every category.
    pub fn sum(&self) -> i32 {
        self.gunnery + self.attacker + self.target + self.other + self.minimum_range + self.range
    }

    /// Labelled contributions in GATOR order.
    pub fn terms(&self) -> [(&'static str, i32); 6] {
        [
            ("Gunnery", self.gunnery),
            ("Attacker", self.attacker),
            ("Target", self.target),
            ("Other", self.other),
            ("Min Range", self.minimum_range),
            ("Range", self.range),
        ]
    }
}

/// The number a 2d6 to-hit roll must meet or exceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetNumber {
    /// Unfloored sum of every modifier.
    pub raw_sum: i32,
    /// The effective target number, never below [`MIN_TARGET_NUMBER`].
    pub floored: i32,
    /// Display tier.
    pub tier: Tier,
    /// Where the sum came from.
    pub breakdown: Breakdown,
}

impl TargetNumber {
    /// Build a target number from its breakdown.
    pub fn from_breakdown(breakdown: Breakdown, thresholds: &TierThresholds) -> Self {
        let raw_sum = breakdown.sum();
        let floored = raw_sum.max(MIN_TARGET_NUMBER);
        Self {
            raw_sum,
            floored,
            tier: thresholds.classify(floored),
            breakdown,
        }
    }

    /// Whether a 2d6 roll can reach this number at all.
    pub fn is_possible(&self) -> bool {
        self.floored <= 12
    }

    /// Chance that a single 2d6 roll hits.
    pub fn hit_probability(&self) -> f64 {
        two_d6_at_least(self.floored)
    }

    /// Human-readable sum, e.g. `Gunnery +4 + ... = 9 → TN 9`.
    pub fn explain(&self) -> String {
        let terms: Vec<String> = self
            .breakdown
            .terms()
            .iter()
            .map(|(label, value)| format!("{label} {value:+}"))
            .collect();
        format!(
            "{} = {} → TN {}",
            terms.join(" + "),
            self.raw_sum,
            self.floored
        )
    }
}

impl std::fmt::Display for TargetNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+", self.floored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(gunnery: i32, range: i32) -> Breakdown {
        Breakdown {
            gunnery,
            range,
            ..Breakdown::default()
        }
    }

    #[test]
    fn floors_at_two() {
        let tn = TargetNumber::from_breakdown(
            Breakdown {
                gunnery: 1,
                target: -4,
                ..Breakdown::default()
            },
            &TierThresholds::default(),
        );
        assert_eq!(tn.raw_sum, -3);
        assert_eq!(tn.floored, 2);
        assert_eq!(tn.tier, Tier::Automatic);
    }

    #[test]
    fn default_tiers() {
        let thresholds = TierThresholds::default();
        assert_eq!(thresholds.classify(2), Tier::Automatic);
        assert_eq!(thresholds.classify(3), Tier::Standard);
        assert_eq!(thresholds.classify(9), Tier::Standard);
        assert_eq!(thresholds.classify(10), Tier::Hard);
    }

    #[test]
    fn custom_tiers() {
        let thresholds = TierThresholds::new(4, 7).unwrap();
        assert_eq!(thresholds.classify(4), Tier::Automatic);
        assert_eq!(thresholds.classify(8), Tier::Hard);
        assert!(TierThresholds::new(9, 9).is_err());
    }

    #[test]
    fn thresholds_deserialize_validated() {
        let ok: TierThresholds =
            serde_json::from_str(r#"{"automatic_max":3,"standard_max":8}"#).unwrap();
        assert_eq!(ok.standard_max(), 8);
        assert!(
            serde_json::from_str::<TierThresholds>(r#"{"automatic_max":8,"standard_max":3}"#)
                .is_err()
        );
    }

    #[test]
    fn impossible_target() {
        let tn = TargetNumber::from_breakdown(breakdown(6, 8), &TierThresholds::default());
        assert_eq!(tn.floored, 14);
        assert!(!tn.is_possible());
        assert_eq!(tn.hit_probability(), 0.0);
    }

    #[test]
    fn explain_lists_every_category() {
        let tn = TargetNumber::from_breakdown(
            Breakdown {
                gunnery: 4,
                attacker: 1,
                target: 2,
                range: 2,
                ..Breakdown::default()
            },
            &TierThresholds::default(),
        );
        assert_eq!(
            tn.explain(),
            "Gunnery +4 + Attacker +1 + Target +2 + Other +0 + Min Range +0 + Range +2 = 9 → TN 9"
        );
        assert_eq!(tn.to_string(), "9+");
    }
}
