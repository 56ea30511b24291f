//! # Seqstats
//!
//! Pure numeric summaries over in-memory sequences.
//!
//! Seqstats computes the everyday statistics of an ordered list of numbers
//! (sum, average, median) as pure functions over a borrowed slice, plus a
//! mergeable single-pass accumulator for data that arrives as a stream.
//!
//! ## Features
//!
//! - **Exact-ish sums**: compensated summation, no drift on long inputs
//! - **Order-free median**: sorts a private copy, the caller's slice is untouched
//! - **No silent NaN**: summaries of an empty sequence are an error
//! - **Mergeable accumulation**: combine partial results across workers
//!
//! ## Quick Start
//!
//! ```rust
//! use seqstats::prelude::*;
//!
//! let data = [0.0, 40.0, 50.0, 1000.0];
//!
//! assert_eq!(sum(&data), 1090.0);
//! assert_eq!(average(&data), Ok(272.5));
//! assert_eq!(median(&data), Ok(45.0));
//!
//! assert!(average(&[]).is_err());
//! ```
//!
//! ## Distributed Computing
//!
//! [`Accumulator`](statistics::Accumulator) implements the
//! [`Reducer`](traits::Reducer) trait which includes a `merge` operation:
//!
//! ```rust
//! use seqstats::statistics::Accumulator;
//! use seqstats::traits::Reducer;
//!
//! let mut worker1: Accumulator = [1.0, 2.0].into_iter().collect();
//! let worker2: Accumulator = [3.0, 4.0].into_iter().collect();
//!
//! worker1.merge(&worker2);
//! assert_eq!(worker1.sum(), 10.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `libm`: Float routines for `no_std` + `alloc` builds; required when
//!   `std` is disabled
//! - `serde`: Serialization of [`Summary`](summary::Summary) and
//!   [`Accumulator`](statistics::Accumulator)
//! - `tracing`: Emit `trace` events on empty-sequence errors and merges

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("seqstats needs either the `std` or the `libm` feature");

// Core traits always available
pub mod traits;

mod math;

pub mod statistics;
pub mod summary;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::statistics::Accumulator;
    pub use crate::summary::{average, max, median, median_sorted, min, sum, Summary};
}

pub use statistics::Accumulator;
pub use summary::{average, median, sum, Summary};
pub use traits::StatsError;
