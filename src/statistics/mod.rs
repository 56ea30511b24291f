//! Streaming accumulation
//!
//! [`Accumulator`] is the reduce step of an iterator pipeline: map and
//! filter the input however you like, then collect into an accumulator to
//! obtain count, sum, mean and extremes in a single pass with O(1) memory.
//!
//! # Example
//!
//! ```
//! use seqstats::statistics::Accumulator;
//!
//! let prices = [12.0, 7.5, 30.0, 2.5];
//!
//! // Total of discounted prices above 5.0
//! let acc: Accumulator = prices
//!     .iter()
//!     .filter(|&&p| p > 5.0)
//!     .map(|p| p * 0.5)
//!     .collect();
//!
//! assert_eq!(acc.len(), 3);
//! assert_eq!(acc.sum(), 24.75);
//! assert_eq!(acc.max(), Some(15.0));
//! ```

mod accumulator;

pub use accumulator::Accumulator;
