//! Static resolution tables keyed by a 2d6 total.
//!
//! Every table covers the full 2..=12 domain. Looking up a key outside
//! that domain is a dice-source bug and panics.

use serde::{Deserialize, Serialize};

use crate::dice::{TWO_D6_MAX, TWO_D6_MIN};
use crate::error::{MechError, MechResult};

/// Version of the table data below.
pub const TABLES_VERSION: &str = "1.1.0";

/// Which arc of the target an attack strikes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    /// Front or side arc.
    #[default]
    Front,
    /// Rear arc.
    Rear,
}

impl Facing {
    /// Parse a facing from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "front" | "f" => Some(Self::Front),
            "rear" | "r" | "back" => Some(Self::Rear),
            _ => None,
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Front => write!(f, "Front"),
            Self::Rear => write!(f, "Rear"),
        }
    }
}

/// A body location on a mech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Head.
    Head,
    /// Center torso.
    CenterTorso,
    /// Right torso.
    RightTorso,
    /// Left torso.
    LeftTorso,
    /// Right arm.
    RightArm,
    /// Left arm.
    LeftArm,
    /// Right leg.
    RightLeg,
    /// Left leg.
    LeftLeg,
}

impl Location {
    /// Record-sheet abbreviation.
    pub fn abbrev(self) -> &'static str {
        match self {
            Self::Head => "HEAD",
            Self::CenterTorso => "CT",
            Self::RightTorso => "RT",
            Self::LeftTorso => "LT",
            Self::RightArm => "RA",
            Self::LeftArm => "LA",
            Self::RightLeg => "RL",
            Self::LeftLeg => "LL",
        }
    }

    /// Whether this location carries separate rear armor.
    pub fn has_rear(self) -> bool {
        !matches!(self, Self::Head)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Head => write!(f, "Head"),
            Self::CenterTorso => write!(f, "Center Torso"),
            Self::RightTorso => write!(f, "Right Torso"),
            Self::LeftTorso => write!(f, "Left Torso"),
            Self::RightArm => write!(f, "Right Arm"),
            Self::LeftArm => write!(f, "Left Arm"),
            Self::RightLeg => write!(f, "Right Leg"),
            Self::LeftLeg => write!(f, "Left Leg"),
        }
    }
}

use Location::{CenterTorso, Head, LeftArm, LeftLeg, LeftTorso, RightArm, RightLeg, RightTorso};

/// Hit location by 2d6 total, index 0 is a roll of 2.
///
/// Front and rear attacks share this mapping; rear hits land on rear
/// armor except for the head, which has none.
const HIT_LOCATION: [Location; 11] = [
    CenterTorso, // 2
    RightTorso,  // 3
    RightArm,    // 4
    RightLeg,    // 5
    RightTorso,  // 6
    CenterTorso, // 7
    LeftTorso,   // 8
    LeftLeg,     // 9
    LeftArm,     // 10
    LeftArm,     // 11
    Head,        // 12
];

/// Critical slots triggered by 2d6 total, index 0 is a roll of 2.
const CRITICAL_COUNT: [u8; 11] = [0, 0, 0, 0, 0, 0, 1, 1, 2, 2, 3];

/// Supported cluster weapon sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ClusterSize {
    /// Two submunitions.
    Two,
    /// Four submunitions.
    Four,
    /// Five submunitions.
    Five,
    /// Six submunitions.
    Six,
    /// Ten submunitions.
    Ten,
    /// Fifteen submunitions.
    Fifteen,
    /// Twenty submunitions.
    Twenty,
}

impl ClusterSize {
    /// Every supported size, smallest first.
    pub fn all() -> &'static [Self] {
        &[
            Self::Two,
            Self::Four,
            Self::Five,
            Self::Six,
            Self::Ten,
            Self::Fifteen,
            Self::Twenty,
        ]
    }

    /// Number of submunitions fired.
    pub fn count(self) -> u32 {
        match self {
            Self::Two => 2,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::Twenty => 20,
        }
    }

    fn row(self) -> &'static [u32; 11] {
        match self {
            Self::Two => &[1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2],
            Self::Four => &[2, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4],
            Self::Five => &[2, 2, 3, 3, 3, 3, 3, 4, 4, 5, 5],
            Self::Six => &[2, 3, 3, 4, 4, 4, 4, 5, 5, 6, 6],
            Self::Ten => &[3, 4, 6, 6, 6, 6, 6, 8, 8, 10, 10],
            Self::Fifteen => &[5, 6, 9, 9, 9, 9, 9, 12, 12, 15, 15],
            Self::Twenty => &[6, 9, 12, 12, 12, 12, 12, 16, 16, 20, 20],
        }
    }
}

impl TryFrom<u32> for ClusterSize {
    type Error = MechError;

    fn try_from(value: u32) -> MechResult<Self> {
        match value {
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            10 => Ok(Self::Ten),
            15 => Ok(Self::Fifteen),
            20 => Ok(Self::Twenty),
            other => Err(MechError::UnsupportedClusterSize(other)),
        }
    }
}

impl From<ClusterSize> for u32 {
    fn from(size: ClusterSize) -> Self {
        size.count()
    }
}

impl std::fmt::Display for ClusterSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.count())
    }
}

fn index(roll: u8) -> usize {
    assert!(
        (TWO_D6_MIN..=TWO_D6_MAX).contains(&roll),
        "2d6 table key out of range: {roll}"
    );
    usize::from(roll - TWO_D6_MIN)
}

/// Location struck for a 2d6 total. The facing only matters for whether
/// the hit lands on rear armor, see [`Location::has_rear`].
pub fn hit_location(roll: u8) -> Location {
    HIT_LOCATION[index(roll)]
}

/// Critical slots triggered for a 2d6 total.
pub fn critical_count(roll: u8) -> u8 {
    CRITICAL_COUNT[index(roll)]
}

/// Submunitions that connect for a weapon size and adjusted 2d6 total.
pub fn cluster_hits(size: ClusterSize, roll: u8) -> u32 {
    size.row()[index(roll)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_location_front_table() {
        let expected = [
            "CT", "RT", "RA", "RL", "RT", "CT", "LT", "LL", "LA", "LA", "HEAD",
        ];
        for (roll, abbrev) in (2..=12).zip(expected) {
            assert_eq!(hit_location(roll).abbrev(), abbrev, "roll {roll}");
        }
    }

    #[test]
    fn head_has_no_rear() {
        assert_eq!(hit_location(12), Location::Head);
        assert!(!Location::Head.has_rear());
        assert!(Location::CenterTorso.has_rear());
    }

    #[test]
    fn critical_counts() {
        let expected = [0, 0, 0, 0, 0, 0, 1, 1, 2, 2, 3];
        for (roll, count) in (2..=12).zip(expected) {
            assert_eq!(critical_count(roll), count, "roll {roll}");
        }
    }

    #[test]
    fn cluster_spot_checks() {
        assert_eq!(cluster_hits(ClusterSize::Ten, 7), 6);
        assert_eq!(cluster_hits(ClusterSize::Six, 2), 2);
        assert_eq!(cluster_hits(ClusterSize::Twenty, 12), 20);
        assert_eq!(cluster_hits(ClusterSize::Fifteen, 9), 12);
        assert_eq!(cluster_hits(ClusterSize::Two, 8), 2);
    }

    #[test]
    fn cluster_rows_are_monotonic_and_capped() {
        for &size in ClusterSize::all() {
            let row: Vec<u32> = (2..=12).map(|roll| cluster_hits(size, roll)).collect();
            assert!(row.windows(2).all(|w| w[0] <= w[1]), "{size} row decreases");
            assert_eq!(row[10], size.count(), "{size} top row is not full");
            assert!(row.iter().all(|hits| (1..=size.count()).contains(hits)));
        }
    }

    #[test]
    fn cluster_size_conversion() {
        for &size in ClusterSize::all() {
            assert_eq!(ClusterSize::try_from(size.count()).unwrap(), size);
        }
        assert!(matches!(
            ClusterSize::try_from(8),
            Err(MechError::UnsupportedClusterSize(8))
        ));
        assert!(ClusterSize::try_from(0).is_err());
    }

    #[test]
    fn cluster_size_serde_uses_count() {
        let json = serde_json::to_string(&ClusterSize::Fifteen).unwrap();
        assert_eq!(json, "15");
        let parsed: ClusterSize = serde_json::from_str("10").unwrap();
        assert_eq!(parsed, ClusterSize::Ten);
        assert!(serde_json::from_str::<ClusterSize>("3").is_err());
    }

    #[test]
    fn facing_parse() {
        assert_eq!(Facing::parse("Rear"), Some(Facing::Rear));
        assert_eq!(Facing::parse(" front "), Some(Facing::Front));
        assert_eq!(Facing::parse("left"), None);
    }

    #[test]
    #[should_panic(expected = "2d6 table key out of range: 13")]
    fn lookup_outside_domain_panics() {
        critical_count(13);
    }
}
