use clap::Args;

use gator_mechanics::modifiers::{HeatPenalty, OtherTerrain, SecondaryTarget, Woods};
use gator_mechanics::{
    AttackContext, AttackerMovement, ClusterModifiers, Facing, Gunnery, MinimumRange, MissileType,
    Posture, RangeBracket, TargetMovementBand, TerrainModifiers,
};

/// Flags describing one attack.
#[derive(Args, Debug, Clone)]
pub struct ContextArgs {
    /// Attacker gunnery skill (1-6)
    #[arg(short, long, default_value = "4", value_parser = parse_gunnery)]
    pub gunnery: Gunnery,

    /// Attacker movement (stationary, walked, ran, jumped, prone)
    #[arg(short, long, default_value = "stationary", value_parser = parse_attacker)]
    pub attacker: AttackerMovement,

    /// Target movement band (0-6)
    #[arg(short, long, default_value = "0", value_parser = parse_band)]
    pub band: TargetMovementBand,

    /// Target jumped this turn
    #[arg(long)]
    pub jumped: bool,

    /// Target posture (normal, prone-adjacent, prone, immobile)
    #[arg(short, long, default_value = "normal", value_parser = parse_posture)]
    pub posture: Posture,

    /// Woods along the line of fire (none, light, heavy)
    #[arg(long, default_value = "none", value_parser = parse_woods)]
    pub woods_between: Woods,

    /// Woods in the target hex (none, light, heavy)
    #[arg(long, default_value = "none", value_parser = parse_woods)]
    pub woods_among: Woods,

    /// Terrain at the target (none, partial, water)
    #[arg(long, default_value = "none", value_parser = parse_terrain)]
    pub terrain: OtherTerrain,

    /// Secondary target (none, front, other)
    #[arg(long, default_value = "none", value_parser = parse_secondary)]
    pub secondary: SecondaryTarget,

    /// Attacker heat level
    #[arg(long, default_value_t = 0)]
    pub heat: u32,

    /// Brackets short of minimum range (eq, -1 .. -5)
    #[arg(long, default_value = "eq", allow_hyphen_values = true, value_parser = parse_min_range)]
    pub min_range: MinimumRange,

    /// Range bracket (short, medium, long)
    #[arg(short, long, default_value = "short", value_parser = parse_range)]
    pub range: RangeBracket,
}

impl ContextArgs {
    pub fn to_context(&self) -> AttackContext {
        AttackContext {
            gunnery: self.gunnery,
            attacker_movement: self.attacker,
            target_band: self.band,
            target_jumped: self.jumped,
            posture: self.posture,
            terrain: TerrainModifiers {
                woods_between: self.woods_between,
                woods_among: self.woods_among,
                other_terrain: self.terrain,
                secondary_target: self.secondary,
                heat: HeatPenalty::for_heat_level(self.heat),
            },
            minimum_range: self.min_range,
            range: self.range,
        }
    }
}

/// Flags for a cluster roll.
#[derive(Args, Debug, Clone)]
pub struct ClusterArgs {
    /// Launcher size (2, 4, 5, 6, 10, 15, 20)
    #[arg(short, long, default_value_t = 10)]
    pub size: u32,

    /// Artemis IV fire control (+2)
    #[arg(long)]
    pub artemis: bool,

    /// Target carries a NARC beacon (+2)
    #[arg(long)]
    pub narc: bool,

    /// Indirect fire (-1)
    #[arg(long)]
    pub indirect: bool,

    /// Extra adjustment to the cluster roll
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub mods: i32,

    /// Streak launcher: every missile hits
    #[arg(long)]
    pub streak: bool,

    /// Missile type for damage (lrm, srm)
    #[arg(long, default_value = "lrm", value_parser = parse_missile)]
    pub missile: MissileType,
}

impl ClusterArgs {
    pub fn modifiers(&self) -> ClusterModifiers {
        ClusterModifiers {
            artemis: self.artemis,
            narc: self.narc,
            indirect: self.indirect,
            manual: self.mods,
        }
    }
}

fn named<T>(s: &str, parse: fn(&str) -> Option<T>, expected: &str) -> Result<T, String> {
    parse(s).ok_or_else(|| format!("unknown value '{s}', expected one of: {expected}"))
}

fn parse_gunnery(s: &str) -> Result<Gunnery, String> {
    let skill: u8 = s.parse().map_err(|_| format!("not a number: '{s}'"))?;
    Gunnery::new(skill).map_err(|e| e.to_string())
}

fn parse_band(s: &str) -> Result<TargetMovementBand, String> {
    let band: u8 = s.parse().map_err(|_| format!("not a number: '{s}'"))?;
    TargetMovementBand::new(band).map_err(|e| e.to_string())
}

fn parse_attacker(s: &str) -> Result<AttackerMovement, String> {
    named(
        s,
        AttackerMovement::parse,
        "stationary, walked, ran, jumped, prone",
    )
}

fn parse_posture(s: &str) -> Result<Posture, String> {
    named(s, Posture::parse, "normal, prone-adjacent, prone, immobile")
}

fn parse_woods(s: &str) -> Result<Woods, String> {
    named(s, Woods::parse, "none, light, heavy")
}

fn parse_terrain(s: &str) -> Result<OtherTerrain, String> {
    named(s, OtherTerrain::parse, "none, partial, water")
}

fn parse_secondary(s: &str) -> Result<SecondaryTarget, String> {
    named(s, SecondaryTarget::parse, "none, front, other")
}

fn parse_min_range(s: &str) -> Result<MinimumRange, String> {
    named(s, MinimumRange::parse, "eq, -1, -2, -3, -4, -5")
}

fn parse_range(s: &str) -> Result<RangeBracket, String> {
    named(s, RangeBracket::parse, "short, medium, long")
}

fn parse_missile(s: &str) -> Result<MissileType, String> {
    named(s, MissileType::parse, "lrm, srm")
}

pub fn parse_facing(s: &str) -> Result<Facing, String> {
    named(s, Facing::parse, "front, rear")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsers_reject_unknown_values() {
        assert!(parse_gunnery("7").is_err());
        assert!(parse_gunnery("four").is_err());
        assert!(parse_band("9").is_err());
        assert!(parse_min_range("-6").is_err());
        assert!(parse_range("extreme").is_err());
        assert!(parse_facing("side").is_err());
    }

    #[test]
    fn parsers_accept_aliases() {
        assert_eq!(parse_range("m"), Ok(RangeBracket::Medium));
        assert_eq!(parse_min_range("-3"), Ok(MinimumRange::ThreeShort));
        assert_eq!(parse_attacker("walk"), Ok(AttackerMovement::Walked));
        assert_eq!(parse_facing("Rear"), Ok(Facing::Rear));
    }
}
