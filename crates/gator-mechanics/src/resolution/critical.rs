//! Critical hit checks.

use serde::{Deserialize, Serialize};

use crate::dice::DiceSource;
use crate::tables;

/// The result of a critical check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalCheck {
    /// The 2d6 total rolled.
    pub roll: u8,
    /// Critical slots triggered, 0 to 3.
    pub critical_count: u8,
}

impl CriticalCheck {
    /// Look up the count for an already-rolled 2d6 total.
    pub fn from_roll(roll: u8) -> Self {
        Self {
            roll,
            critical_count: tables::critical_count(roll),
        }
    }
}

impl std::fmt::Display for CriticalCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.critical_count {
            0 => write!(f, "No criticals (2d6={})", self.roll),
            1 => write!(f, "1 critical (2d6={})", self.roll),
            n => write!(f, "{n} criticals (2d6={})", self.roll),
        }
    }
}

/// Roll 2d6 on the critical count table.
pub fn resolve_critical<D: DiceSource + ?Sized>(dice: &mut D) -> CriticalCheck {
    CriticalCheck::from_roll(dice.roll_two_d6().total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    fn check(first: u32, second: u32) -> CriticalCheck {
        resolve_critical(&mut ScriptedDice::new([first, second]))
    }

    #[test]
    fn spot_checks() {
        assert_eq!(check(3, 4).critical_count, 0);
        assert_eq!(check(4, 4).critical_count, 1);
        assert_eq!(check(5, 5).critical_count, 2);
        assert_eq!(check(6, 6).critical_count, 3);
    }

    #[test]
    fn display() {
        assert_eq!(CriticalCheck::from_roll(2).to_string(), "No criticals (2d6=2)");
        assert_eq!(CriticalCheck::from_roll(9).to_string(), "1 critical (2d6=9)");
        assert_eq!(CriticalCheck::from_roll(12).to_string(), "3 criticals (2d6=12)");
    }
}
