//! Sum, average and extremes

use crate::math::CompensatedSum;
use crate::traits::{Operation, StatsError};

/// Sum of all elements
///
/// Returns `0.0` for an empty sequence. Uses compensated summation, so
/// long sequences of mixed magnitude do not drift.
///
/// ```
/// use seqstats::summary::sum;
///
/// assert_eq!(sum(&[]), 0.0);
/// assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
/// ```
pub fn sum(seq: &[f64]) -> f64 {
    let mut total = CompensatedSum::new();
    total.extend(seq.iter().copied());
    total.value()
}

/// Arithmetic mean, `sum(seq) / seq.len()`
///
/// # Errors
///
/// [`StatsError::EmptySequence`] when `seq` is empty.
///
/// ```
/// use seqstats::summary::average;
///
/// assert_eq!(average(&[1.0, 2.0, 3.0]), Ok(2.0));
/// assert!(average(&[]).is_err());
/// ```
pub fn average(seq: &[f64]) -> Result<f64, StatsError> {
    if seq.is_empty() {
        return Err(StatsError::empty(Operation::Average));
    }
    Ok(sum(seq) / seq.len() as f64)
}

/// Smallest element, `None` when empty
///
/// NaN elements are skipped unless every element is NaN.
pub fn min(seq: &[f64]) -> Option<f64> {
    seq.iter().copied().reduce(f64::min)
}

/// Largest element, `None` when empty
///
/// NaN elements are skipped unless every element is NaN.
pub fn max(seq: &[f64]) -> Option<f64> {
    seq.iter().copied().reduce(f64::max)
}
