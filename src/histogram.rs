use std::ops::Deref;

/// How often each possible sum came up over a number of trials.
///
/// The table is dense: slot `i` counts the trials whose sum was `i + 1`, so a
/// collection's histogram always has as many slots as its maximum sum and the
/// slots below its minimum sum stay empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Histogram {
    counts: Vec<u32>,
}

impl Histogram {
    pub(crate) fn zeroed(max_sum: u32) -> Self {
        Self {
            counts: vec![0; max_sum as usize],
        }
    }

    pub(crate) fn record(&mut self, sum: u32) {
        // Faces start at 1, so the smallest sum lands in slot 0 for a single die.
        self.counts[sum as usize - 1] += 1;
    }

    /// The sum represented by the slot at `index`.
    pub fn sum_at(index: usize) -> u32 {
        index as u32 + 1
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }
    pub fn into_counts(self) -> Vec<u32> {
        self.counts
    }

    /// Amount of trials recorded.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Iterates over every `(sum, count)` pair, including the empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| (Self::sum_at(i), count))
    }

    /// Iterates over the `(sum, count)` pairs that came up at least once.
    pub fn occupied(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.iter().filter(|&(_, count)| count > 0)
    }
}

impl Deref for Histogram {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        &self.counts
    }
}

impl From<Vec<u32>> for Histogram {
    fn from(counts: Vec<u32>) -> Self {
        Self { counts }
    }
}
