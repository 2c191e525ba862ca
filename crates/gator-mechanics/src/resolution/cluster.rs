//! Cluster (missile) hit rolls.
//!
//! A cluster weapon that hits rolls again to see how many of its
//! submunitions connect. The roll is modified and then clamped back into
//! the 2..=12 table domain. Streak launchers skip the table: a hit means
//! every missile lands.

use serde::{Deserialize, Serialize};

use crate::dice::{DiceSource, TWO_D6_MAX, TWO_D6_MIN};
use crate::tables::{self, ClusterSize};

/// Standard cluster roll adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterModifiers {
    /// Artemis IV fire control (+2).
    pub artemis: bool,
    /// Target tagged by a NARC beacon (+2).
    pub narc: bool,
    /// Indirect fire (-1).
    pub indirect: bool,
    /// Any further manual adjustment.
    pub manual: i32,
}

impl ClusterModifiers {
    /// Net adjustment to the cluster roll.
    pub fn total(&self) -> i32 {
        let mut total = self.manual;
        if self.artemis {
            total = total.saturating_add(2);
        }
        if self.narc {
            total = total.saturating_add(2);
        }
        if self.indirect {
            total = total.saturating_sub(1);
        }
        total
    }

    /// Labels of the active adjustments, e.g. `+2 Artemis`.
    pub fn labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        if self.artemis {
            labels.push("+2 Artemis".to_string());
        }
        if self.narc {
            labels.push("+2 NARC".to_string());
        }
        if self.indirect {
            labels.push("-1 Indirect".to_string());
        }
        if self.manual != 0 {
            labels.push(format!("{:+} manual", self.manual));
        }
        labels
    }
}

/// Missile family, which sets damage per missile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissileType {
    /// Long-range missiles, 1 damage each.
    #[default]
    Lrm,
    /// Short-range missiles, 2 damage each.
    Srm,
}

impl MissileType {
    /// Damage dealt by each missile that hits.
    pub fn damage_per_missile(self) -> u32 {
        match self {
            Self::Lrm => 1,
            Self::Srm => 2,
        }
    }

    /// Parse from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lrm" => Some(Self::Lrm),
            "srm" => Some(Self::Srm),
            _ => None,
        }
    }
}

impl std::fmt::Display for MissileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lrm => write!(f, "LRM"),
            Self::Srm => write!(f, "SRM"),
        }
    }
}

/// How many submunitions of a cluster attack connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterHits {
    /// Submunitions fired.
    pub weapon_size: ClusterSize,
    /// The unmodified 2d6 total, absent for Streak.
    pub roll: Option<u8>,
    /// The modified and clamped total used for lookup, absent for Streak.
    pub adjusted_roll: Option<u8>,
    /// Submunitions that hit.
    pub hits: u32,
    /// Whether the table was skipped because the weapon is a Streak.
    pub streak_override: bool,
}

impl ClusterHits {
    /// Every submunition hits, no roll made.
    pub fn streak(weapon_size: ClusterSize) -> Self {
        Self {
            weapon_size,
            roll: None,
            adjusted_roll: None,
            hits: weapon_size.count(),
            streak_override: true,
        }
    }

    /// Apply `modifier` to an already-rolled 2d6 total and look up hits.
    pub fn from_roll(weapon_size: ClusterSize, roll: u8, modifier: i32) -> Self {
        let adjusted = clamp_to_table(i32::from(roll).saturating_add(modifier));
        Self {
            weapon_size,
            roll: Some(roll),
            adjusted_roll: Some(adjusted),
            hits: tables::cluster_hits(weapon_size, adjusted),
            streak_override: false,
        }
    }

    /// Total damage for the missile family.
    pub fn damage(&self, missile: MissileType) -> u32 {
        self.hits * missile.damage_per_missile()
    }
}

impl std::fmt::Display for ClusterHits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} hit", self.hits, self.weapon_size)?;
        match (self.roll, self.adjusted_roll) {
            (Some(roll), Some(adjusted)) if roll != adjusted => {
                write!(f, " (roll {roll}, adj {adjusted})")
            }
            (Some(roll), _) => write!(f, " (roll {roll})"),
            _ => write!(f, " (streak)"),
        }
    }
}

fn clamp_to_table(value: i32) -> u8 {
    value.clamp(i32::from(TWO_D6_MIN), i32::from(TWO_D6_MAX)) as u8
}

/// Resolve how many submunitions of a hitting cluster attack connect.
///
/// Streak attacks draw no dice.
pub fn resolve_cluster<D: DiceSource + ?Sized>(
    weapon_size: ClusterSize,
    modifier: i32,
    is_streak: bool,
    dice: &mut D,
) -> ClusterHits {
    if is_streak {
        return ClusterHits::streak(weapon_size);
    }
    ClusterHits::from_roll(weapon_size, dice.roll_two_d6().total(), modifier)
}
