//! Several summaries of one sequence in a single call

use crate::traits::{Operation, StatsError};

use super::{max, median, min, sum};

/// Count, sum, mean, median and extremes of a non-empty sequence
///
/// # Example
///
/// ```
/// use seqstats::summary::Summary;
///
/// let s = Summary::of(&[1000.0, 0.0, 50.0, 40.0]).unwrap();
///
/// assert_eq!(s.count, 4);
/// assert_eq!(s.sum, 1090.0);
/// assert_eq!(s.mean, 272.5);
/// assert_eq!(s.median, 45.0);
/// assert_eq!(s.min, 0.0);
/// assert_eq!(s.max, 1000.0);
/// assert_eq!(s.range(), 1000.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Number of elements
    pub count: usize,
    /// Sum of all elements
    pub sum: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Median of the sorted elements
    pub median: f64,
    /// Smallest element
    pub min: f64,
    /// Largest element
    pub max: f64,
}

impl Summary {
    /// Summarize `seq`
    ///
    /// # Errors
    ///
    /// [`StatsError::EmptySequence`] when `seq` is empty.
    pub fn of(seq: &[f64]) -> Result<Self, StatsError> {
        let (min, max) = match (min(seq), max(seq)) {
            (Some(lo), Some(hi)) => (lo, hi),
            _ => return Err(StatsError::empty(Operation::Summary)),
        };

        let count = seq.len();
        let sum = sum(seq);

        Ok(Self {
            count,
            sum,
            mean: sum / count as f64,
            median: median(seq)?,
            min,
            max,
        })
    }

    /// Spread between the extremes
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}
