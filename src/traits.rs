//! Core traits and error types for bounded streaming aggregators
//!
//! Every structure implements the base [`Aggregator`] trait, with specialized
//! traits for fixed-capacity windows ([`Windowed`]) and ranked frequency
//! tracking ([`RankedFrequency`]).

use core::fmt::Debug;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Error returned when an operation is called with an argument that violates
/// its precondition
///
/// These are always detectable by the caller before the call. Nothing is
/// mutated when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was out of its accepted range
    InvalidArgument {
        /// Name of the offending parameter
        parameter: &'static str,
        /// What the parameter must satisfy
        reason: &'static str,
    },
}

impl Error {
    pub(crate) fn invalid_argument(parameter: &'static str, reason: &'static str) -> Self {
        tracing::warn!(parameter, reason, "rejected invalid argument");
        Error::InvalidArgument { parameter, reason }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidArgument { parameter, reason } => {
                write!(f, "invalid argument `{}`: {}", parameter, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, Error>;

/// Core trait for all streaming aggregators
pub trait Aggregator: Clone + Debug {
    /// The type of item this aggregator consumes
    type Item: ?Sized;

    /// Feed one item
    fn update(&mut self, item: &Self::Item);

    /// Reset to the empty state, keeping configuration
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items fed since construction or the last clear
    fn items_seen(&self) -> u64;

    /// Check if nothing has been fed
    fn is_empty(&self) -> bool {
        self.items_seen() == 0
    }
}

/// Aggregators that hold at most a fixed number of recent items
pub trait Windowed {
    /// Maximum number of items held
    fn capacity(&self) -> usize;

    /// Number of items currently held
    fn len(&self) -> usize;

    /// Check if the window holds `capacity()` items
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

/// Aggregators that can combine partial results
///
/// Merging never fails: every implementor accepts any other instance of
/// its own type.
pub trait Mergeable {
    /// Merge another aggregator into this one
    fn merge(&mut self, other: &Self);
}

/// Exact per-key counting with ranked read-out
pub trait RankedFrequency: Aggregator
where
    Self::Item: Sized + Clone,
{
    /// Occurrences of an item (0 if never seen)
    fn frequency(&self, item: &Self::Item) -> u64;

    /// Up to `k` items ordered by count descending
    fn most_frequent(&self, k: usize) -> Vec<(Self::Item, u64)>;

    /// Items whose count is at least `threshold` of the total (0.0 to 1.0)
    fn heavy_hitters(&self, threshold: f64) -> Vec<(Self::Item, u64)>;

    /// Check if frequency reaches threshold
    fn exceeds_threshold(&self, item: &Self::Item, threshold: u64) -> bool {
        self.frequency(item) >= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::invalid_argument("capacity", "must be positive");
        assert_eq!(
            err,
            Error::InvalidArgument {
                parameter: "capacity",
                reason: "must be positive"
            }
        );

        let msg = format!("{}", err);
        assert!(msg.contains("capacity"));
        assert!(msg.contains("must be positive"));
    }
}
