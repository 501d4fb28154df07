//! Fixed-capacity circular buffer
//!
//! Stores the most recent `capacity` items. Once full, every push overwrites
//! the oldest item in place, so memory never grows past the initial
//! allocation.

use crate::traits::{Aggregator, Error, Result, Windowed};
use core::fmt;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Circular buffer with overwrite-oldest semantics
///
/// ```text
///   capacity = 3, pushes 1 2 3 4 5
///
///   slots = [4, 5, 3]
///   head  = 2         (oldest element, next slot to overwrite)
///
///   to_vec() => [3, 4, 5]
/// ```
///
/// # Example
///
/// ```
/// use ringstats::buffer::RingBuffer;
///
/// let mut ring = RingBuffer::new(3).unwrap();
/// for v in 1..=5 {
///     ring.push(v);
/// }
///
/// assert_eq!(ring.to_vec(), vec![3, 4, 5]);
/// assert_eq!(ring.latest(), Some(&5));
/// ```
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    /// Backing storage, grows up to `capacity` and is then reused
    slots: Vec<T>,
    /// Maximum number of items held
    capacity: usize,
    /// Physical index of the oldest item (always 0 until the buffer fills)
    head: usize,
    /// Pushes since construction or the last clear
    pushed: u64,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer holding at most `capacity` items
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid_argument("capacity", "must be positive"));
        }
        tracing::debug!(capacity, "ring buffer created");

        Ok(Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            head: 0,
            pushed: 0,
        })
    }

    /// Get the capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently held
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Append an item, evicting the oldest one if the buffer is full
    ///
    /// Returns the evicted item, if any.
    pub fn push(&mut self, item: T) -> Option<T> {
        self.pushed += 1;

        if self.slots.len() < self.capacity {
            self.slots.push(item);
            return None;
        }

        let evicted = core::mem::replace(&mut self.slots[self.head], item);
        self.head = (self.head + 1) % self.capacity;
        Some(evicted)
    }

    /// Get the item at logical position `index` (0 is the oldest)
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.slots.len() {
            return None;
        }
        self.slots.get((self.head + index) % self.capacity)
    }

    /// The most recently pushed item
    pub fn latest(&self) -> Option<&T> {
        match self.slots.len() {
            0 => None,
            len => self.get(len - 1),
        }
    }

    /// The item that will be evicted next once the buffer is full
    pub fn oldest(&self) -> Option<&T> {
        self.get(0)
    }

    /// Iterate over held items, oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        let (wrapped, front) = self.slots.split_at(self.head);
        front.iter().chain(wrapped.iter())
    }

    /// Remove all items; capacity is unchanged
    pub fn clear(&mut self) {
        tracing::trace!(
            capacity = self.capacity,
            dropped = self.slots.len(),
            "ring buffer cleared"
        );
        self.slots.clear();
        self.head = 0;
        self.pushed = 0;
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Copy the held items into a new vector, oldest first
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.slots.len());
        out.extend(self.iter().cloned());
        out
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> fmt::Display for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RingBuffer(capacity={}, len={})", self.capacity, self.slots.len())
    }
}

impl<T: Clone + fmt::Debug> Aggregator for RingBuffer<T> {
    type Item = T;

    fn update(&mut self, item: &T) {
        self.push(item.clone());
    }

    fn clear(&mut self) {
        RingBuffer::clear(self);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.slots.capacity() * core::mem::size_of::<T>()
    }

    fn items_seen(&self) -> u64 {
        self.pushed
    }
}

impl<T> Windowed for RingBuffer<T> {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for RingBuffer<T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let items: Vec<&T> = self.iter().collect();

        let mut state = serializer.serialize_struct("RingBuffer", 2)?;
        state.serialize_field("capacity", &self.capacity)?;
        state.serialize_field("items", &items)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_rejected() {
        let err = RingBuffer::<i32>::new(0).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                parameter: "capacity",
                reason: "must be positive"
            }
        );
    }

    #[test]
    fn test_empty() {
        let ring = RingBuffer::<i32>::new(4).unwrap();
        assert!(ring.is_empty());
        assert!(!ring.is_full());
        assert_eq!(ring.len(), 0);
        assert_eq!(ring.capacity(), 4);
        assert_eq!(ring.latest(), None);
        assert_eq!(ring.oldest(), None);
        assert!(ring.to_vec().is_empty());
    }

    #[test]
    fn test_eviction_order() {
        let mut ring = RingBuffer::new(3).unwrap();
        for v in 1..=5 {
            ring.push(v);
        }

        assert_eq!(ring.len(), 3);
        assert_eq!(ring.to_vec(), vec![3, 4, 5]);
        assert_eq!(ring.oldest(), Some(&3));
        assert_eq!(ring.latest(), Some(&5));
    }

    #[test]
    fn test_push_returns_evicted() {
        let mut ring = RingBuffer::new(2).unwrap();
        assert_eq!(ring.push("a"), None);
        assert_eq!(ring.push("b"), None);
        assert_eq!(ring.push("c"), Some("a"));
        assert_eq!(ring.push("d"), Some("b"));
        assert_eq!(ring.to_vec(), vec!["c", "d"]);
    }

    #[test]
    fn test_partial_fill() {
        let mut ring = RingBuffer::new(5).unwrap();
        ring.push(10);
        ring.push(20);

        assert_eq!(ring.to_vec(), vec![10, 20]);
        assert_eq!(ring.get(0), Some(&10));
        assert_eq!(ring.get(1), Some(&20));
        assert_eq!(ring.get(2), None);
    }

    #[test]
    fn test_get_after_wrap() {
        let mut ring = RingBuffer::new(3).unwrap();
        ring.extend([1, 2, 3, 4]);

        assert_eq!(ring.get(0), Some(&2));
        assert_eq!(ring.get(1), Some(&3));
        assert_eq!(ring.get(2), Some(&4));
        assert_eq!(ring.get(3), None);
    }

    #[test]
    fn test_iter_reverse() {
        let mut ring = RingBuffer::new(3).unwrap();
        ring.extend(1..=7);

        let newest_first: Vec<_> = ring.iter().rev().copied().collect();
        assert_eq!(newest_first, vec![7, 6, 5]);
    }

    #[test]
    fn test_single_capacity() {
        let mut ring = RingBuffer::new(1).unwrap();
        ring.push(1);
        assert_eq!(ring.push(2), Some(1));
        assert_eq!(ring.to_vec(), vec![2]);
        assert!(ring.is_full());
    }

    #[test]
    fn test_clear() {
        let mut ring = RingBuffer::new(3).unwrap();
        ring.extend([1, 2, 3, 4]);

        ring.clear();

        assert!(ring.is_empty());
        assert_eq!(ring.capacity(), 3);
        assert_eq!(ring.items_seen(), 0);

        ring.push(9);
        assert_eq!(ring.to_vec(), vec![9]);
    }

    #[test]
    fn test_to_vec_is_independent() {
        let mut ring = RingBuffer::new(2).unwrap();
        ring.push(1);
        let snapshot = ring.to_vec();
        ring.push(2);
        ring.push(3);

        assert_eq!(snapshot, vec![1]);
    }

    #[test]
    fn test_display() {
        let mut ring = RingBuffer::new(3).unwrap();
        ring.push(1.5);
        ring.push(2.5);
        assert_eq!(format!("{}", ring), "RingBuffer(capacity=3, len=2)");
    }

    #[test]
    fn test_aggregator_impl() {
        let mut ring = RingBuffer::<i32>::new(2).unwrap();
        for v in [1, 2, 3] {
            ring.update(&v);
        }

        assert_eq!(ring.items_seen(), 3);
        assert!(Windowed::is_full(&ring));
        assert!(ring.size_bytes() >= 2 * core::mem::size_of::<i32>());
    }
}
