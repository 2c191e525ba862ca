//! Free-form dice expressions such as `2d6`, `d20` or `3d6+2`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DiceSource;
use crate::error::{MechError, MechResult};

/// Largest number of dice a single expression may roll.
pub const MAX_DICE: u32 = 100;

/// Largest die size an expression may name.
pub const MAX_SIDES: u32 = 1000;

/// A parsed `NdS±M` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceExpr {
    /// Number of dice rolled.
    pub count: u32,
    /// Faces per die.
    pub sides: u32,
    /// Flat modifier added to the sum.
    pub modifier: i32,
}

impl DiceExpr {
    /// The canonical to-hit roll.
    pub const TWO_D6: Self = Self {
        count: 2,
        sides: 6,
        modifier: 0,
    };

    /// Build an expression, validating counts and sides.
    pub fn new(count: u32, sides: u32, modifier: i32) -> MechResult<Self> {
        if !(1..=MAX_DICE).contains(&count) {
            return Err(MechError::OutOfRange {
                field: "dice count",
                value: i64::from(count),
                min: 1,
                max: i64::from(MAX_DICE),
            });
        }
        if !(2..=MAX_SIDES).contains(&sides) {
            return Err(MechError::OutOfRange {
                field: "die sides",
                value: i64::from(sides),
                min: 2,
                max: i64::from(MAX_SIDES),
            });
        }
        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    /// Roll the expression.
    pub fn roll<D: DiceSource + ?Sized>(&self, dice: &mut D) -> ExprRoll {
        let faces: Vec<u32> = (0..self.count).map(|_| dice.roll_die(self.sides)).collect();
        let total = faces.iter().map(|&f| i64::from(f)).sum::<i64>() + i64::from(self.modifier);
        ExprRoll {
            expr: *self,
            dice: faces,
            total,
        }
    }
}

impl FromStr for DiceExpr {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        let invalid = || MechError::InvalidDiceExpression(s.trim().to_string());

        let (count_str, rest) = compact.split_once('d').ok_or_else(invalid)?;
        let count = if count_str.is_empty() {
            1
        } else {
            count_str.parse::<u32>().map_err(|_| invalid())?
        };

        let (sides_str, modifier) = match rest.find(['+', '-']) {
            Some(idx) => {
                let (sides, modifier) = rest.split_at(idx);
                let modifier = modifier.parse::<i32>().map_err(|_| invalid())?;
                (sides, modifier)
            }
            None => (rest, 0),
        };
        let sides = sides_str.parse::<u32>().map_err(|_| invalid())?;

        Self::new(count, sides, modifier)
    }
}

impl std::fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

/// The result of rolling a [`DiceExpr`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExprRoll {
    /// The expression that was rolled.
    pub expr: DiceExpr,
    /// Individual faces, in draw order.
    pub dice: Vec<u32>,
    /// Sum of the faces plus the modifier.
    pub total: i64,
}

impl std::fmt::Display for ExprRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.dice.iter().map(u32::to_string).collect();
        write!(f, "{} [{}]", self.expr, faces.join(", "))?;
        match self.expr.modifier {
            0 => {}
            m if m > 0 => write!(f, " + {m}")?,
            m => write!(f, " - {}", m.unsigned_abs())?,
        }
        write!(f, " = {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    #[test]
    fn parse_plain() {
        let expr: DiceExpr = "2d6".parse().unwrap();
        assert_eq!(expr, DiceExpr::TWO_D6);
    }

    #[test]
    fn parse_implicit_count_and_case() {
        let expr: DiceExpr = "D20".parse().unwrap();
        assert_eq!(expr, DiceExpr::new(1, 20, 0).unwrap());
    }

    #[test]
    fn parse_modifiers() {
        assert_eq!("3d6+2".parse::<DiceExpr>().unwrap().modifier, 2);
        assert_eq!("2d6 - 1".parse::<DiceExpr>().unwrap().modifier, -1);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "fireball".parse::<DiceExpr>(),
            Err(MechError::InvalidDiceExpression(_))
        ));
        assert!("2d".parse::<DiceExpr>().is_err());
        assert!("2d6+".parse::<DiceExpr>().is_err());
        assert!("xd6".parse::<DiceExpr>().is_err());
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert!(matches!(
            "0d6".parse::<DiceExpr>(),
            Err(MechError::OutOfRange { field: "dice count", .. })
        ));
        assert!(matches!(
            "2d1".parse::<DiceExpr>(),
            Err(MechError::OutOfRange { field: "die sides", .. })
        ));
    }

    #[test]
    fn display_round_trips_modifier_sign() {
        assert_eq!(DiceExpr::new(2, 6, 0).unwrap().to_string(), "2d6");
        assert_eq!(DiceExpr::new(3, 6, 2).unwrap().to_string(), "3d6+2");
        assert_eq!(DiceExpr::new(1, 20, -3).unwrap().to_string(), "1d20-3");
    }

    #[test]
    fn roll_sums_faces_and_modifier() {
        let mut dice = ScriptedDice::new([4, 5, 6]);
        let roll = DiceExpr::new(3, 6, -2).unwrap().roll(&mut dice);
        assert_eq!(roll.dice, vec![4, 5, 6]);
        assert_eq!(roll.total, 13);
        assert_eq!(roll.to_string(), "3d6-2 [4, 5, 6] - 2 = 13");
    }
}
