//! Dice sources, canonical rolls, and free-form dice expressions.
//!
//! Every random draw in the engine goes through a [`DiceSource`]. The
//! canonical aggregates are a single d6 and the sum of two d6; the latter
//! is triangular over 2..=12, not uniform, and [`two_d6_probability`]
//! exposes the exact distribution for callers that display odds.

pub mod expr;
pub mod roll;
pub mod source;

pub use expr::{DiceExpr, ExprRoll};
pub use roll::RollResult;
pub use source::{RngDice, ScriptedDice, SharedDice};

/// Faces on the die every table in the ruleset is keyed by.
pub const D6_SIDES: u32 = 6;

/// Smallest possible 2d6 total.
pub const TWO_D6_MIN: u8 = 2;

/// Largest possible 2d6 total.
pub const TWO_D6_MAX: u8 = 12;

/// A source of individual die results.
///
/// Implementors only provide [`roll_die`](Self::roll_die); the canonical
/// aggregates are built on top of it and verify that every face is in
/// range. A face outside `1..=6` from a d6 draw means the source is broken
/// and panics rather than leaking into table lookups.
pub trait DiceSource {
    /// Roll one die with `sides` faces, returning a value in `1..=sides`.
    fn roll_die(&mut self, sides: u32) -> u32;

    /// Roll a single d6.
    fn roll_one_d6(&mut self) -> RollResult {
        let die = checked_d6(self.roll_die(D6_SIDES));
        RollResult::OneD6 { die }
    }

    /// Roll two d6 and keep both faces.
    fn roll_two_d6(&mut self) -> RollResult {
        let first = checked_d6(self.roll_die(D6_SIDES));
        let second = checked_d6(self.roll_die(D6_SIDES));
        RollResult::TwoD6 {
            dice: [first, second],
        }
    }
}

impl<S: DiceSource + ?Sized> DiceSource for &mut S {
    fn roll_die(&mut self, sides: u32) -> u32 {
        (**self).roll_die(sides)
    }
}

impl<S: DiceSource + ?Sized> DiceSource for Box<S> {
    fn roll_die(&mut self, sides: u32) -> u32 {
        (**self).roll_die(sides)
    }
}

fn checked_d6(value: u32) -> u8 {
    assert!(
        (1..=D6_SIDES).contains(&value),
        "dice source produced {value} for a d6"
    );
    value as u8
}

/// Probability that 2d6 totals exactly `total`.
///
/// Zero outside 2..=12; 1/36 at the extremes and 6/36 at 7.
pub fn two_d6_probability(total: u8) -> f64 {
    let ways = match total {
        2..=7 => total - 1,
        8..=12 => 13 - total,
        _ => 0,
    };
    f64::from(ways) / 36.0
}

/// Probability that 2d6 meets or exceeds `target`.
pub fn two_d6_at_least(target: i32) -> f64 {
    (TWO_D6_MIN..=TWO_D6_MAX)
        .filter(|total| i32::from(*total) >= target)
        .map(two_d6_probability)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_d6_distribution_sums_to_one() {
        let sum: f64 = (0..=14).map(two_d6_probability).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn two_d6_distribution_peaks_at_seven() {
        assert_eq!(two_d6_probability(7), 6.0 / 36.0);
        assert_eq!(two_d6_probability(2), 1.0 / 36.0);
        assert_eq!(two_d6_probability(12), 1.0 / 36.0);
        assert_eq!(two_d6_probability(1), 0.0);
        assert_eq!(two_d6_probability(13), 0.0);
    }

    #[test]
    fn at_least_bounds() {
        assert!((two_d6_at_least(2) - 1.0).abs() < 1e-12);
        assert!((two_d6_at_least(-3) - 1.0).abs() < 1e-12);
        assert_eq!(two_d6_at_least(13), 0.0);
        assert!((two_d6_at_least(12) - 1.0 / 36.0).abs() < 1e-12);
        assert!((two_d6_at_least(8) - 15.0 / 36.0).abs() < 1e-12);
    }

    #[test]
    fn two_d6_frequencies_are_triangular() {
        let mut dice = RngDice::seeded(7);
        let mut counts = [0u32; 13];
        for _ in 0..10_000 {
            counts[usize::from(dice.roll_two_d6().total())] += 1;
        }
        assert_eq!(counts[0] + counts[1], 0);
        assert!(counts[7] > counts[2]);
        assert!(counts[7] > counts[12]);
    }

    #[test]
    fn one_d6_stays_in_range() {
        let mut dice = RngDice::seeded(3);
        for _ in 0..1_000 {
            let total = dice.roll_one_d6().total();
            assert!((1..=6).contains(&total));
        }
    }

    #[test]
    fn forwarding_impls_reach_the_inner_source() {
        fn total<D: DiceSource>(mut dice: D) -> u8 {
            dice.roll_two_d6().total()
        }

        let mut scripted = ScriptedDice::new([3, 4, 6, 6]);
        assert_eq!(total(&mut scripted), 7);
        assert_eq!(scripted.draws(), 2);

        let source: &mut dyn DiceSource = &mut scripted;
        assert_eq!(total(source), 12);
        assert_eq!(scripted.draws(), 4);

        assert_eq!(total(Box::new(ScriptedDice::new([2, 5]))), 7);
        let boxed: Box<dyn DiceSource> = Box::new(ScriptedDice::new([1, 1]));
        assert_eq!(total(boxed), 2);
    }

    #[test]
    #[should_panic(expected = "dice source produced 7 for a d6")]
    fn out_of_range_face_panics() {
        let mut dice = ScriptedDice::new([7]);
        dice.roll_one_d6();
    }
}
