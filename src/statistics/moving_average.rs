//! Windowed moving average
//!
//! Keeps the arithmetic mean of the most recent `window_size` samples with
//! O(1) updates, backed by a [`RingBuffer`] for eviction and a running sum.

use crate::buffer::RingBuffer;
use crate::traits::{Aggregator, Error, Result, Windowed};
use core::fmt;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Moving average over a fixed-size window
///
/// Each [`add`](MovingAverage::add) pushes the sample into the window. If a
/// sample falls out, it is subtracted from the running sum before the new
/// sample is added, so the sum always matches the window contents.
///
/// An empty window reports an average of `0.0`. Negative and non-finite
/// samples are accepted as-is and propagate through the arithmetic.
///
/// # Example
///
/// ```
/// use ringstats::statistics::MovingAverage;
///
/// let mut avg = MovingAverage::new(3).unwrap();
///
/// assert_eq!(avg.add(10.0), 10.0);
/// assert_eq!(avg.add(20.0), 15.0);
/// assert_eq!(avg.add(30.0), 20.0);
/// assert_eq!(avg.add(40.0), 30.0); // 10.0 left the window
/// assert_eq!(avg.count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct MovingAverage {
    /// Samples currently in the window
    window: RingBuffer<f64>,
    /// Sum of the samples in `window`
    running_sum: f64,
}

impl MovingAverage {
    /// Create an empty moving average over the last `window_size` samples
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `window_size` is zero.
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(Error::invalid_argument("window_size", "must be positive"));
        }
        tracing::debug!(window_size, "moving average created");

        Ok(Self {
            window: RingBuffer::new(window_size)?,
            running_sum: 0.0,
        })
    }

    /// Add a sample and return the average after the update
    pub fn add(&mut self, value: f64) -> f64 {
        if let Some(evicted) = self.window.push(value) {
            self.running_sum -= evicted;
        }
        self.running_sum += value;

        self.average()
    }

    /// Get the current average, or `0.0` if the window is empty
    pub fn average(&self) -> f64 {
        match self.window.len() {
            0 => 0.0,
            n => self.running_sum / n as f64,
        }
    }

    /// Number of samples currently in the window
    pub fn count(&self) -> usize {
        self.window.len()
    }

    /// Get the configured window size
    pub fn window_size(&self) -> usize {
        self.window.capacity()
    }

    /// Sum of the samples currently in the window
    pub fn sum(&self) -> f64 {
        self.running_sum
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Check if the window has reached `window_size` samples
    pub fn is_full(&self) -> bool {
        self.window.is_full()
    }

    /// The most recent sample
    pub fn latest(&self) -> Option<f64> {
        self.window.latest().copied()
    }

    /// Smallest sample in the window
    ///
    /// O(window_size); the window is scanned on each call.
    pub fn min(&self) -> Option<f64> {
        self.window.iter().copied().reduce(f64::min)
    }

    /// Largest sample in the window
    pub fn max(&self) -> Option<f64> {
        self.window.iter().copied().reduce(f64::max)
    }

    /// Copy the window contents, oldest first
    pub fn values(&self) -> Vec<f64> {
        self.window.to_vec()
    }

    /// Remove all samples and reset the running sum
    pub fn clear(&mut self) {
        self.window.clear();
        self.running_sum = 0.0;
    }
}

impl Extend<f64> for MovingAverage {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl fmt::Display for MovingAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MovingAverage(window_size={}, count={}, avg={:.2})",
            self.window_size(),
            self.count(),
            self.average()
        )
    }
}

impl Aggregator for MovingAverage {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    fn clear(&mut self) {
        MovingAverage::clear(self);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.window.capacity() * core::mem::size_of::<f64>()
    }

    fn items_seen(&self) -> u64 {
        self.window.items_seen()
    }
}

impl Windowed for MovingAverage {
    fn capacity(&self) -> usize {
        self.window_size()
    }

    fn len(&self) -> usize {
        self.count()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MovingAverage {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("MovingAverage", 3)?;
        state.serialize_field("window_size", &self.window_size())?;
        state.serialize_field("average", &self.average())?;
        state.serialize_field("values", &self.values())?;
        state.end()
    }
}
