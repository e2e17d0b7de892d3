use log::{debug, info};
use rand::{rngs::ThreadRng, thread_rng, Rng};

use crate::{
    collection::DiceCollection,
    error::{Reason, Result},
    histogram::Histogram,
};

/// Trials run by a bulk roll unless configured otherwise.
pub const DEFAULT_TRIALS: u32 = 100_000;

/// The state a front end keeps around while the user plays with the dice.
///
/// Once the user asked for a bulk roll, every reconfiguration of the dice
/// reruns it right away so the histogram always matches the dice on screen.
#[derive(Debug)]
pub struct Session<R = ThreadRng> {
    rng: R,
    collection: DiceCollection,
    trials: u32,
    has_rolled_many: bool,
    histogram: Option<Histogram>,
}

impl Session<ThreadRng> {
    pub fn new(face_counts: &[u32], trials: u32) -> Result<Self> {
        Self::with_rng(face_counts, trials, thread_rng())
    }
}

impl<R: Rng> Session<R> {
    /// Same as `new()` but every roll of the session draws from `rng`.
    pub fn with_rng(face_counts: &[u32], trials: u32, mut rng: R) -> Result<Self> {
        if trials < 1 {
            return Err(Reason::NoTrials.into());
        }
        let collection = DiceCollection::new_with(face_counts, &mut rng)?;

        Ok(Self {
            rng,
            collection,
            trials,
            has_rolled_many: false,
            histogram: None,
        })
    }

    pub fn collection(&self) -> &DiceCollection {
        &self.collection
    }
    pub fn trials(&self) -> u32 {
        self.trials
    }
    /// The result of the latest bulk roll, if it still matches the dice.
    pub fn histogram(&self) -> Option<&Histogram> {
        self.histogram.as_ref()
    }
    pub fn has_rolled_many(&self) -> bool {
        self.has_rolled_many
    }

    /// Rolls every die once and returns the new sum.
    pub fn roll_once(&mut self) -> u32 {
        self.collection.roll_all_with(&mut self.rng);
        self.collection.sum_up_sides()
    }

    /// Rolls every die `trials` times and keeps the resulting histogram.
    pub fn roll_many(&mut self) -> Result<&Histogram> {
        let histogram = self
            .collection
            .histogram_with(self.trials, &mut self.rng)?;
        self.has_rolled_many = true;
        Ok(&*self.histogram.insert(histogram))
    }

    /// Replaces the dice, the current ones are kept if the new ones are invalid.
    ///
    /// Returns the new histogram when a bulk roll had already been asked for.
    pub fn reconfigure(&mut self, face_counts: &[u32]) -> Result<Option<&Histogram>> {
        let collection = DiceCollection::new_with(face_counts, &mut self.rng)?;
        info!("dice reconfigured to {:?}", face_counts);
        self.collection = collection;
        self.histogram = None;

        if !self.has_rolled_many {
            return Ok(None);
        }

        debug!("rerunning {} trials for the new dice", self.trials);
        self.roll_many().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use test_log::test;

    use super::*;

    fn session(face_counts: &[u32], trials: u32) -> Session<StdRng> {
        Session::with_rng(face_counts, trials, StdRng::seed_from_u64(1)).unwrap()
    }

    #[test]
    fn test_roll_once_returns_current_sum() {
        let mut session = session(&[6, 6], 10);
        let sum = session.roll_once();
        assert_eq!(sum, session.collection().sum_up_sides());
        assert!((2..=12).contains(&sum));
    }

    #[test]
    fn test_roll_many_keeps_histogram() {
        let mut session = session(&[4], 100);
        assert!(session.histogram().is_none());

        let total = session.roll_many().unwrap().total();
        assert_eq!(total, 100);
        assert!(session.has_rolled_many());
        assert_eq!(session.histogram().unwrap().len(), 4);
    }

    #[test]
    fn test_reconfigure_before_bulk_roll() {
        let mut session = session(&[6], 100);
        assert!(session.reconfigure(&[2, 2]).unwrap().is_none());
        assert_eq!(session.collection().maximum_sum(), 4);
        assert!(session.histogram().is_none());
    }

    #[test]
    fn test_reconfigure_after_bulk_roll_reruns() {
        let mut session = session(&[6], 100);
        session.roll_many().unwrap();

        let histogram = session.reconfigure(&[8, 8]).unwrap().unwrap();
        assert_eq!(histogram.len(), 16);
        assert_eq!(histogram.total(), 100);
        assert_eq!(session.histogram().unwrap().len(), 16);
    }

    #[test]
    fn test_invalid_reconfigure_keeps_dice() {
        let mut session = session(&[6, 4], 100);
        session.roll_many().unwrap();
        let before = session.collection().clone();

        let err = session.reconfigure(&[6, 1]).unwrap_err();
        assert_eq!(err.reason(), Some(Reason::TooFewSides(1)));
        assert_eq!(session.collection(), &before);
        assert_eq!(session.histogram().unwrap().len(), 10);
    }

    #[test]
    fn test_zero_trials() {
        let err = Session::new(&[6], 0).unwrap_err();
        assert_eq!(err.reason(), Some(Reason::NoTrials));
    }
}
