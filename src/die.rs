use std::fmt::Display;

use rand::{thread_rng, Rng};

use crate::error::{Reason, Result};

/// A die with a fixed number of sides, each side equally likely to land up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die {
    sides: u32,
    up_side: u32,
}

impl Die {
    /// Creates a die with a random side facing up.
    pub fn new(sides: u32) -> Result<Self> {
        Self::new_with(sides, &mut thread_rng())
    }

    /// Same as `new()` but allows you to choose the rng used for the first face.
    pub fn new_with(sides: u32, rng: &mut impl Rng) -> Result<Self> {
        if sides < 2 {
            return Err(Reason::TooFewSides(sides).into());
        }

        Ok(Self {
            sides,
            up_side: rng.gen_range(1..=sides),
        })
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }
    pub fn up_side(&self) -> u32 {
        self.up_side
    }

    pub fn roll(&mut self) {
        self.roll_with(&mut thread_rng())
    }

    pub fn roll_with(&mut self, rng: &mut impl Rng) {
        self.up_side = rng.gen_range(1..=self.sides);
    }
}

impl Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "has {} sides - Current up side: {}",
            self.sides, self.up_side
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn test_new_die_shows_a_valid_face() {
        let mut rng = test_rng();
        for sides in 2..50 {
            let die = Die::new_with(sides, &mut rng).unwrap();
            assert_eq!(die.sides(), sides);
            assert!((1..=sides).contains(&die.up_side()));
        }
    }

    #[test]
    fn test_roll_stays_in_range() {
        let mut rng = test_rng();
        let mut die = Die::new_with(6, &mut rng).unwrap();
        for _ in 0..10_000 {
            die.roll_with(&mut rng);
            assert!((1..=6).contains(&die.up_side()));
        }
    }

    #[test]
    fn test_roll_reaches_every_face() {
        let mut rng = test_rng();
        let mut die = Die::new_with(4, &mut rng).unwrap();
        let mut seen = [false; 4];
        for _ in 0..1000 {
            die.roll_with(&mut rng);
            seen[die.up_side() as usize - 1] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_thread_rng_roll() {
        let mut die = Die::new(2).unwrap();
        die.roll();
        assert!(die.up_side() == 1 || die.up_side() == 2);
    }

    #[test]
    fn test_too_few_sides() {
        for sides in [0, 1] {
            let err = Die::new(sides).unwrap_err();
            assert_eq!(err.reason(), Some(Reason::TooFewSides(sides)));
        }
    }

    #[test]
    fn test_display() {
        let die = Die {
            sides: 8,
            up_side: 3,
        };
        assert_eq!(die.to_string(), "has 8 sides - Current up side: 3");
    }
}
