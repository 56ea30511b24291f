//! Running count, sum, mean and extremes
//!
//! Sums are compensated, so chunked accumulation merged back together
//! agrees with a single pass over the concatenated input.

use crate::math::CompensatedSum;
use crate::traits::{Operation, Reducer, StatsError};

/// Single-pass accumulator over a stream of numbers
///
/// Unlike the slice functions in [`summary`](crate::summary), the
/// accumulator never sees the whole sequence at once, so it offers no
/// median. Values are folded as given: NaN propagates into the sum and
/// mean, and is skipped by the extremes.
///
/// # Example
///
/// ```
/// use seqstats::statistics::Accumulator;
///
/// let mut acc = Accumulator::new();
///
/// for value in [1.0, 2.0, 3.0] {
///     acc.add(value);
/// }
///
/// assert_eq!(acc.sum(), 6.0);
/// assert_eq!(acc.mean(), Ok(2.0));
/// assert_eq!(acc.min(), Some(1.0));
/// assert_eq!(acc.max(), Some(3.0));
/// ```
///
/// # Distributed Usage
///
/// ```
/// use seqstats::statistics::Accumulator;
/// use seqstats::traits::Reducer;
///
/// let mut left: Accumulator = [1.0, 2.0, 3.0].into_iter().collect();
/// let right: Accumulator = [4.0, 5.0, 6.0].into_iter().collect();
///
/// left.merge(&right);
/// assert_eq!(left.len(), 6);
/// assert_eq!(left.mean(), Ok(3.5));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Accumulator {
    count: u64,
    sum: CompensatedSum,
    min: Option<f64>,
    max: Option<f64>,
}

impl Accumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: CompensatedSum::new(),
            min: None,
            max: None,
        }
    }

    /// Fold a value
    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.sum.add(value);
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    /// Number of values folded
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Sum of all values, `0.0` when empty
    pub fn sum(&self) -> f64 {
        self.sum.value()
    }

    /// Arithmetic mean
    ///
    /// # Errors
    ///
    /// [`StatsError::EmptySequence`] when nothing has been folded.
    pub fn mean(&self) -> Result<f64, StatsError> {
        if self.count == 0 {
            return Err(StatsError::empty(Operation::Mean));
        }
        Ok(self.sum() / self.count as f64)
    }

    /// Get the minimum value, `None` when empty
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Get the maximum value, `None` when empty
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Spread between the extremes
    pub fn range(&self) -> Option<f64> {
        Some(self.max? - self.min?)
    }
}

fn pick(a: Option<f64>, b: Option<f64>, f: fn(f64, f64) -> f64) -> Option<f64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(f(x, y)),
        (x, None) => x,
        (None, y) => y,
    }
}

impl Reducer for Accumulator {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    fn merge(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            left = self.count,
            right = other.count,
            "merging accumulators"
        );

        self.count += other.count;
        self.sum.merge(&other.sum);
        self.min = pick(self.min, other.min, f64::min);
        self.max = pick(self.max, other.max, f64::max);
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl Extend<f64> for Accumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a> Extend<&'a f64> for Accumulator {
    fn extend<I: IntoIterator<Item = &'a f64>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<f64> for Accumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

impl<'a> FromIterator<&'a f64> for Accumulator {
    fn from_iter<I: IntoIterator<Item = &'a f64>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}
