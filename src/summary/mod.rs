//! Pure summaries over an in-memory sequence
//!
//! Every function here borrows the caller's slice and never mutates it.
//! Functions that are undefined on an empty sequence return
//! [`StatsError::EmptySequence`](crate::traits::StatsError::EmptySequence)
//! instead of a silent `NaN`.
//!
//! # Example
//!
//! ```
//! use seqstats::summary::{average, median, sum};
//!
//! let data = [0.0, 40.0, 50.0, 1000.0];
//!
//! assert_eq!(sum(&data), 1090.0);
//! assert_eq!(average(&data).unwrap(), 272.5);
//! assert_eq!(median(&data).unwrap(), 45.0);
//! ```

mod basic;
mod median;
mod report;

pub use basic::{average, max, min, sum};
pub use median::{median, median_sorted};
pub use report::Summary;
