//! Roll a collection of dice and find out how their sum is distributed.
//!
//! ```rust
//! # use dice_collection::{histogram_with, DiceCollection, Histogram};
//! # use rand::rngs::StdRng;
//! # use rand::SeedableRng;
//! #
//! # fn main() -> Result<(), dice_collection::Error> {
//! // Two six sided dice and a four sided one.
//! let mut dice = DiceCollection::new(&[6, 6, 4])?;
//! assert_eq!(dice.minimum_sum(), 3);
//! assert_eq!(dice.maximum_sum(), 16);
//!
//! dice.roll_all();
//! println!("{}", dice.describe());
//!
//! // Roll everything 10,000 times, slot `i` counts the rolls that summed to `i + 1`.
//! let histogram = dice.histogram(10_000)?;
//! assert_eq!(histogram.len(), 16);
//! assert_eq!(histogram.total(), 10_000);
//!
//! // Use a custom Rng that implements the rand::Rng trait
//! let mut rng = StdRng::seed_from_u64(1);
//! let histogram: Histogram = histogram_with("2d6", 1_000, &mut rng)?;
//! print!("{}", dice_collection::chart::star_chart(&histogram, 10));
//! #
//! # Ok(())
//! # }
//! ```

pub mod chart;
mod collection;
pub mod console;
mod die;
mod error;
mod histogram;
pub mod input;
pub mod session;

pub use collection::{DiceCollection, MAX_SUM};
pub use die::Die;
pub use error::{Error, Reason, Result};
pub use histogram::Histogram;

/// Parses the face counts and rolls the resulting dice `trials` times.
pub fn histogram(face_counts: &str, trials: u32) -> Result<Histogram> {
    histogram_with(face_counts, trials, &mut rand::thread_rng())
}

/// Same as `histogram()` but allows you to choose the rng you prefer to use.
pub fn histogram_with(
    face_counts: &str,
    trials: u32,
    rng: &mut impl rand::Rng,
) -> Result<Histogram> {
    let face_counts = input::parse_face_counts(face_counts)?;
    DiceCollection::new_with(&face_counts, rng)?.histogram_with(trials, rng)
}
