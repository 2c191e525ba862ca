//! Terrain and situational ("Other") modifiers.

use serde::{Deserialize, Serialize};

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['_', ' '], "-")
}

/// Woods density, either between the units or around the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Woods {
    /// No woods.
    #[default]
    None,
    /// Light woods (+1).
    Light,
    /// Heavy woods (+2).
    Heavy,
}

impl Woods {
    /// To-hit modifier.
    pub fn modifier(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Light => 1,
            Self::Heavy => 2,
        }
    }

    /// Parse from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "none" | "0" => Some(Self::None),
            "light" | "1" => Some(Self::Light),
            "heavy" | "2" => Some(Self::Heavy),
            _ => None,
        }
    }
}

/// Other terrain affecting the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtherTerrain {
    /// Open ground.
    #[default]
    None,
    /// Target in partial cover (+1).
    PartialCover,
    /// Target standing in depth-1 water (+1).
    Water,
}

impl OtherTerrain {
    /// To-hit modifier.
    pub fn modifier(self) -> i32 {
        match self {
            Self::None => 0,
            Self::PartialCover | Self::Water => 1,
        }
    }

    /// Parse from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "none" | "open" => Some(Self::None),
            "partial" | "partial-cover" | "cover" => Some(Self::PartialCover),
            "water" => Some(Self::Water),
            _ => None,
        }
    }
}

/// Penalty for engaging a secondary target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryTarget {
    /// Primary target.
    #[default]
    None,
    /// Secondary target in the front arc (+1).
    FrontArc,
    /// Secondary target in a side or rear arc (+2).
    OtherArc,
}

impl SecondaryTarget {
    /// To-hit modifier.
    pub fn modifier(self) -> i32 {
        match self {
            Self::None => 0,
            Self::FrontArc => 1,
            Self::OtherArc => 2,
        }
    }

    /// Parse from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "none" | "primary" => Some(Self::None),
            "front" | "front-arc" => Some(Self::FrontArc),
            "other" | "other-arc" | "side" | "rear" => Some(Self::OtherArc),
            _ => None,
        }
    }
}

/// Attacker heat penalty band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatPenalty {
    /// Below 8 heat.
    #[default]
    None,
    /// 8-12 heat (+1).
    Minor,
    /// 13-16 heat (+2).
    Moderate,
    /// 17-23 heat (+3).
    Severe,
    /// 24 heat or more (+4).
    Critical,
}

impl HeatPenalty {
    /// Band for a current heat level.
    pub fn for_heat_level(heat: u32) -> Self {
        match heat {
            0..=7 => Self::None,
            8..=12 => Self::Minor,
            13..=16 => Self::Moderate,
            17..=23 => Self::Severe,
            _ => Self::Critical,
        }
    }

    /// To-hit modifier.
    pub fn modifier(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Minor => 1,
            Self::Moderate => 2,
            Self::Severe => 3,
            Self::Critical => 4,
        }
    }

    /// Parse from a band name or its modifier value.
    pub fn parse(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "none" | "0" => Some(Self::None),
            "minor" | "1" | "+1" => Some(Self::Minor),
            "moderate" | "2" | "+2" => Some(Self::Moderate),
            "severe" | "3" | "+3" => Some(Self::Severe),
            "critical" | "4" | "+4" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// The independent "Other" modifiers, summed into one term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainModifiers {
    /// Woods along the line of fire.
    pub woods_between: Woods,
    /// Woods in the target's hex.
    pub woods_among: Woods,
    /// Partial cover or water at the target.
    pub other_terrain: OtherTerrain,
    /// Secondary-target penalty.
    pub secondary_target: SecondaryTarget,
    /// Attacker heat penalty.
    pub heat: HeatPenalty,
}

impl TerrainModifiers {
    /// Sum of all terrain and situational modifiers.
    pub fn total(&self) -> i32 {
        self.woods_between.modifier()
            + self.woods_among.modifier()
            + self.other_terrain.modifier()
            + self.secondary_target.modifier()
            + self.heat.modifier()
    }
}
