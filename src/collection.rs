use std::fmt::Display;

use log::{debug, trace};
use rand::{thread_rng, Rng};

use crate::{
    die::Die,
    error::{Reason, Result},
    histogram::Histogram,
};

/// Largest total of sides a collection may have, which is also the length of its histogram.
pub const MAX_SUM: u32 = 1_000_000;

/// An ordered set of dice that is rolled and summed as a whole.
///
/// The amount of dice never changes once the collection is built, to use
/// different dice build a new collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceCollection {
    dice: Vec<Die>,
}

impl DiceCollection {
    /// Creates one die per entry of `face_counts`, keeping their order.
    pub fn new(face_counts: &[u32]) -> Result<Self> {
        Self::new_with(face_counts, &mut thread_rng())
    }

    /// Same as `new()` but allows you to choose the rng used for the first faces.
    pub fn new_with(face_counts: &[u32], rng: &mut impl Rng) -> Result<Self> {
        if face_counts.is_empty() {
            return Err(Reason::NoDice.into());
        }
        // Validate everything up front so a failure never leaves dice behind.
        if let Some(&sides) = face_counts.iter().find(|&&sides| sides < 2) {
            return Err(Reason::TooFewSides(sides).into());
        }
        // Every sum and histogram slot stays below this bound.
        let max_sum = face_counts
            .iter()
            .try_fold(0u32, |total, &sides| total.checked_add(sides));
        if !matches!(max_sum, Some(max_sum) if max_sum <= MAX_SUM) {
            return Err(Reason::TooManySides(MAX_SUM).into());
        }

        let dice = face_counts
            .iter()
            .map(|&sides| Die::new_with(sides, rng))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { dice })
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }
    pub fn len(&self) -> usize {
        self.dice.len()
    }
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn roll_all(&mut self) {
        self.roll_all_with(&mut thread_rng())
    }

    pub fn roll_all_with(&mut self, rng: &mut impl Rng) {
        for die in &mut self.dice {
            die.roll_with(rng);
        }
        trace!("rolled {} dice, sum = {}", self.len(), self.sum_up_sides());
    }

    pub fn sum_up_sides(&self) -> u32 {
        self.dice.iter().map(Die::up_side).sum()
    }

    /// Every die shows a 1.
    pub fn minimum_sum(&self) -> u32 {
        self.dice.len() as u32
    }

    /// Every die shows its highest side.
    pub fn maximum_sum(&self) -> u32 {
        self.dice.iter().map(Die::sides).sum()
    }

    /// A report with every die's state followed by the minimum, maximum and current sums.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Rolls the whole collection `trials` times and counts how often each sum came up.
    ///
    /// The dice are left showing the faces of the last trial.
    pub fn histogram(&mut self, trials: u32) -> Result<Histogram> {
        self.histogram_with(trials, &mut thread_rng())
    }

    /// Same as `histogram()` but allows you to choose the rng you prefer to use.
    pub fn histogram_with(&mut self, trials: u32, rng: &mut impl Rng) -> Result<Histogram> {
        if trials < 1 {
            return Err(Reason::NoTrials.into());
        }

        debug!(
            "histogram: {} trials over {} dice (sums {}..={})",
            trials,
            self.len(),
            self.minimum_sum(),
            self.maximum_sum()
        );

        let mut histogram = Histogram::zeroed(self.maximum_sum());
        for _ in 0..trials {
            self.roll_all_with(rng);
            histogram.record(self.sum_up_sides());
        }

        Ok(histogram)
    }
}

impl Display for DiceCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, die) in self.dice.iter().enumerate() {
            writeln!(f, "Die {} {}", i + 1, die)?;
        }
        writeln!(f)?;
        writeln!(f, "Min sum of roll: {}", self.minimum_sum())?;
        writeln!(f, "Max sum of roll: {}", self.maximum_sum())?;
        write!(f, "Sum of current roll: {}", self.sum_up_sides())
    }
}
