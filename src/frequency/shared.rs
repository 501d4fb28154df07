//! Thread-safe handle around [`FrequencyCounter`]
//!
//! A single mutex guards the whole counter for the duration of each call, so
//! concurrent callers observe the same results as some serial ordering of
//! their operations.

use super::FrequencyCounter;
use crate::traits::{Mergeable, Result};
use core::fmt::Debug;
use core::hash::Hash;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::vec::Vec;

/// Cloneable, lock-protected frequency counter
///
/// Clones share the same underlying counter.
///
/// # Example
///
/// ```
/// use ringstats::frequency::SharedCounter;
/// use std::thread;
///
/// let counter = SharedCounter::new();
///
/// let workers: Vec<_> = (0..4)
///     .map(|_| {
///         let counter = counter.clone();
///         thread::spawn(move || {
///             for _ in 0..100 {
///                 counter.increment("hit");
///             }
///         })
///     })
///     .collect();
/// for w in workers {
///     w.join().unwrap();
/// }
///
/// assert_eq!(counter.count_of(&"hit"), 400);
/// ```
#[derive(Debug)]
pub struct SharedCounter<T: Hash + Eq + Clone + Debug> {
    inner: Arc<Mutex<FrequencyCounter<T>>>,
}

impl<T: Hash + Eq + Clone + Debug> Clone for SharedCounter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Hash + Eq + Clone + Debug> Default for SharedCounter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone + Debug> From<FrequencyCounter<T>> for SharedCounter<T> {
    fn from(counter: FrequencyCounter<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(counter)),
        }
    }
}

impl<T: Hash + Eq + Clone + Debug> SharedCounter<T> {
    pub fn new() -> Self {
        FrequencyCounter::new().into()
    }

    /// See [`FrequencyCounter::increment`]
    pub fn increment(&self, item: T) -> u64 {
        self.inner.lock().increment(item)
    }

    /// See [`FrequencyCounter::add_count`]
    pub fn add_count(&self, item: T, count: u64) -> u64 {
        self.inner.lock().add_count(item, count)
    }

    pub fn count_of(&self, item: &T) -> u64 {
        self.inner.lock().count_of(item)
    }

    pub fn total_count(&self) -> u64 {
        self.inner.lock().total_count()
    }

    pub fn snapshot(&self) -> HashMap<T, u64> {
        self.inner.lock().snapshot()
    }

    /// See [`FrequencyCounter::top_k`]
    pub fn top_k<K: TryInto<usize>>(&self, k: K) -> Result<Vec<(T, u64)>> {
        self.inner.lock().top_k(k)
    }

    /// Fold a locally built counter into the shared one
    ///
    /// Lets producers count privately and take the lock once per batch.
    pub fn absorb(&self, local: &FrequencyCounter<T>) {
        self.inner.lock().merge(local);
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Copy the current state into a standalone counter
    pub fn to_counter(&self) -> FrequencyCounter<T> {
        self.inner.lock().clone()
    }
}
