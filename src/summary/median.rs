//! Median of a sequence
//!
//! [`median`] accepts any order and sorts a private copy. [`median_sorted`]
//! skips the copy when the caller already holds an ascending sequence.

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::math;
use crate::traits::{Operation, StatsError};

/// Median of `seq` in any order
///
/// Copies and sorts the input ascending under IEEE total ordering, then takes the middle element for odd lengths or
/// the average of the two middle elements for even lengths. The caller's
/// slice is left untouched.
///
/// Every NaN is given a cleared sign bit before sorting, so NaN always
/// sorts after `+inf` whatever sign the caller's NaN carried.
///
/// # Errors
///
/// [`StatsError::EmptySequence`] when `seq` is empty.
///
/// ```
/// use seqstats::summary::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
/// assert_eq!(median(&[1000.0, 0.0, 50.0, 40.0]), Ok(45.0));
/// ```
pub fn median(seq: &[f64]) -> Result<f64, StatsError> {
    if seq.is_empty() {
        return Err(StatsError::empty(Operation::Median));
    }

    let mut sorted: Vec<f64> = seq
        .iter()
        .map(|&x| if x.is_nan() { math::abs(x) } else { x })
        .collect();
    sorted.sort_unstable_by(f64::total_cmp);
    Ok(middle(&sorted))
}

/// Median of a sequence already sorted ascending
///
/// The caller guarantees the order; an unsorted input yields the value at
/// the middle index rather than the true median. Debug builds assert the
/// precondition.
///
/// # Errors
///
/// [`StatsError::EmptySequence`] when `seq` is empty.
///
/// ```
/// use seqstats::summary::median_sorted;
///
/// assert_eq!(median_sorted(&[1.0, 2.0, 3.0]), Ok(2.0));
/// assert_eq!(median_sorted(&[0.0, 40.0, 50.0, 1000.0]), Ok(45.0));
/// ```
pub fn median_sorted(seq: &[f64]) -> Result<f64, StatsError> {
    if seq.is_empty() {
        return Err(StatsError::empty(Operation::Median));
    }
    debug_assert!(
        seq.windows(2).all(|w| w[0].total_cmp(&w[1]).is_le()),
        "median_sorted requires ascending input"
    );
    Ok(middle(seq))
}

/// Middle of a non-empty sorted slice
#[inline]
fn middle(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[(n - 1) / 2]
    } else {
        midpoint(sorted[n / 2 - 1], sorted[n / 2])
    }
}

/// Average of `a <= b` without overflowing near `f64::MAX`
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    if a == b {
        a
    } else if a >= 0.0 && b >= 0.0 {
        a + (b - a) / 2.0
    } else if a <= 0.0 && b <= 0.0 {
        b + (a - b) / 2.0
    } else {
        (a + b) / 2.0
    }
}
