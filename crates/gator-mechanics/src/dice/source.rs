//! Concrete dice sources.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::DiceSource;

/// Dice backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngDice<R = StdRng> {
    rng: R,
}

impl RngDice<StdRng> {
    /// Deterministic dice: the same seed replays the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Dice seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> RngDice<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DiceSource for RngDice<R> {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides.max(1))
    }
}

/// Dice that replay a fixed list of faces, cycling when exhausted.
///
/// Faces are returned as given, whatever the die size, so a script can
/// also feed deliberately broken values.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: Vec<u32>,
    next: usize,
    draws: usize,
}

impl ScriptedDice {
    /// Create a script from a non-empty list of faces.
    ///
    /// # Panics
    ///
    /// Panics if `faces` is empty.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        let faces: Vec<u32> = faces.into_iter().collect();
        assert!(!faces.is_empty(), "scripted dice need at least one face");
        Self {
            faces,
            next: 0,
            draws: 0,
        }
    }

    /// How many dice have been drawn so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self, _sides: u32) -> u32 {
        let face = self.faces[self.next];
        self.next = (self.next + 1) % self.faces.len();
        self.draws += 1;
        face
    }
}

/// A dice source that can be drawn from through a shared reference.
///
/// Each draw locks the inner source, so concurrent callers see one
/// serialized sequence.
#[derive(Debug, Default)]
pub struct SharedDice<S> {
    inner: Mutex<S>,
}

impl<S: DiceSource> SharedDice<S> {
    /// Wrap a source for shared use.
    pub fn new(source: S) -> Self {
        Self {
            inner: Mutex::new(source),
        }
    }

    /// Unwrap the inner source.
    pub fn into_inner(self) -> S {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn draw(&self, sides: u32) -> u32 {
        // A draw cannot leave the source half-updated, so a poisoned lock is still usable.
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .roll_die(sides)
    }
}

impl<S: DiceSource> DiceSource for SharedDice<S> {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.draw(sides)
    }
}

impl<S: DiceSource> DiceSource for &SharedDice<S> {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.draw(sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_is_deterministic() {
        let mut a = RngDice::seeded(99);
        let mut b = RngDice::seeded(99);
        for _ in 0..50 {
            assert_eq!(a.roll_two_d6(), b.roll_two_d6());
        }
    }

    #[test]
    fn rng_dice_respects_sides() {
        let mut dice = RngDice::seeded(1);
        for _ in 0..500 {
            let value = dice.roll_die(20);
            assert!((1..=20).contains(&value));
        }
    }

    #[test]
    fn scripted_cycles_and_counts() {
        let mut dice = ScriptedDice::new([1, 2, 3]);
        let faces: Vec<u32> = (0..5).map(|_| dice.roll_die(6)).collect();
        assert_eq!(faces, vec![1, 2, 3, 1, 2]);
        assert_eq!(dice.draws(), 5);
    }

    #[test]
    #[should_panic(expected = "at least one face")]
    fn scripted_rejects_empty() {
        ScriptedDice::new(Vec::new());
    }

    #[test]
    fn shared_dice_across_threads() {
        let shared = SharedDice::new(RngDice::seeded(5));
        std::thread::scope(|scope| {
            for _ in 0..4 {
                let handle = &shared;
                scope.spawn(move || {
                    let mut dice = handle;
                    for _ in 0..100 {
                        let total = dice.roll_two_d6().total();
                        assert!((2..=12).contains(&total));
                    }
                });
            }
        });
    }

    #[test]
    fn shared_dice_serializes_script() {
        let shared = SharedDice::new(ScriptedDice::new([1, 2, 3, 4, 5, 6]));
        let mut first = &shared;
        let mut second = &shared;
        assert_eq!(first.roll_die(6), 1);
        assert_eq!(second.roll_die(6), 2);
        assert_eq!(first.roll_die(6), 3);
        assert_eq!(shared.into_inner().draws(), 3);
    }
}
