//! Core traits and error types
//!
//! Every fallible summary returns [`StatsError`]. Streaming accumulators
//! implement [`Reducer`], which adds merge semantics so partial results
//! computed over disjoint chunks can be combined.

use core::fmt::Debug;

/// The summary that was requested when an error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Arithmetic mean of a slice
    Average,
    /// Median of a slice
    Median,
    /// Combined [`Summary`](crate::summary::Summary) of a slice
    Summary,
    /// Mean of a streaming accumulator
    Mean,
}

impl Operation {
    /// Lowercase name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Average => "average",
            Operation::Median => "median",
            Operation::Summary => "summary",
            Operation::Mean => "mean",
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by a summary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// The operation is undefined over an empty sequence
    EmptySequence {
        operation: Operation,
    },
}

impl StatsError {
    /// Build an [`StatsError::EmptySequence`] for `operation`
    pub(crate) fn empty(operation: Operation) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(operation = operation.as_str(), "summary over empty sequence");

        StatsError::EmptySequence { operation }
    }

    /// The operation that failed
    pub fn operation(&self) -> Operation {
        match self {
            StatsError::EmptySequence { operation } => *operation,
        }
    }
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::EmptySequence { operation } => {
                write!(f, "invalid argument: {} of an empty sequence", operation)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

/// Core trait for streaming reducers
///
/// A reducer folds items one at a time and can absorb another reducer of
/// the same type. Merging must be associative, and a freshly created (or
/// cleared) reducer must be an identity for `merge`.
pub trait Reducer: Clone + Debug {
    /// The type of item this reducer folds
    type Item: ?Sized;

    /// Fold an item into the reducer
    fn update(&mut self, item: &Self::Item);

    /// Merge another reducer into this one
    fn merge(&mut self, other: &Self);

    /// Reset to the empty state
    fn clear(&mut self);

    /// Number of items folded
    fn count(&self) -> u64;

    /// Check if nothing has been folded yet
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
