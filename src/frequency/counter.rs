//! Exact frequency counting with ranked top-K extraction
//!
//! Every distinct key gets its own counter, so counts are exact. Ranked
//! read-out selects the `k` largest counts with a bounded heap.

use crate::traits::{Aggregator, Error, Mergeable, RankedFrequency, Result};
use core::borrow::Borrow;
use core::cmp::{Ordering, Reverse};
use core::fmt::Debug;
use core::hash::Hash;
use std::collections::{hash_map::Entry, BinaryHeap, HashMap};
use std::vec::Vec;

const K_REASON: &str = "must be a non-negative value that fits in usize";

/// Per-key state
#[derive(Clone, Debug)]
struct Tally {
    /// Occurrences, always >= 1 once stored
    count: u64,
    /// Position of the key's first occurrence among distinct keys
    first_seen: u64,
}

/// Ranking key used by top-K selection
///
/// Greater means ranked earlier: higher count first, then the key seen
/// first. `first_seen` is unique per key, so this is a total order.
struct Ranked<'a, T> {
    count: u64,
    first_seen: u64,
    item: &'a T,
}

impl<'a, T> Ranked<'a, T> {
    fn new(item: &'a T, tally: &Tally) -> Self {
        Self {
            count: tally.count,
            first_seen: tally.first_seen,
            item,
        }
    }
}

impl<T> Ord for Ranked<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.first_seen.cmp(&self.first_seen))
    }
}

impl<T> PartialOrd for Ranked<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Ranked<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Ranked<'_, T> {}

/// Exact key frequency counter
///
/// Keys are counted exactly as given; normalize them (e.g. lowercase)
/// before calling [`increment`](FrequencyCounter::increment) if needed, or
/// use [`word_frequencies`](crate::frequency::word_frequencies).
///
/// # Ranking
///
/// [`top_k`](FrequencyCounter::top_k) orders entries by count descending.
/// Keys with equal counts are ordered by first appearance: the key whose
/// first increment came earlier ranks first. The output is therefore
/// reproducible for identical input sequences.
///
/// # Example
///
/// ```
/// use ringstats::frequency::FrequencyCounter;
///
/// let mut counter = FrequencyCounter::new();
///
/// for fruit in ["apple", "banana", "apple", "cherry", "apple", "banana"] {
///     counter.increment(fruit);
/// }
///
/// assert_eq!(counter.count_of(&"apple"), 3);
/// assert_eq!(counter.count_of(&"durian"), 0);
///
/// let top = counter.top_k(2).unwrap();
/// assert_eq!(top, vec![("apple", 3), ("banana", 2)]);
/// ```
#[derive(Clone, Debug)]
pub struct FrequencyCounter<T: Hash + Eq + Clone + Debug> {
    /// Map from key to its tally
    tallies: HashMap<T, Tally>,
    /// First-seen position handed to the next new key
    next_seen: u64,
    /// Sum of all counts
    total_count: u64,
}

impl<T: Hash + Eq + Clone + Debug> Default for FrequencyCounter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone + Debug> FrequencyCounter<T> {
    /// Create an empty counter
    pub fn new() -> Self {
        Self {
            tallies: HashMap::new(),
            next_seen: 0,
            total_count: 0,
        }
    }

    /// Count one occurrence of `item` and return its new count
    pub fn increment(&mut self, item: T) -> u64 {
        self.add_count(item, 1)
    }

    /// Count `count` occurrences of `item` and return its new count
    ///
    /// A zero `count` leaves the counter untouched. Per-key counts and the
    /// total saturate at `u64::MAX` instead of overflowing.
    pub fn add_count(&mut self, item: T, count: u64) -> u64 {
        if count == 0 {
            return self.count_of(&item);
        }
        self.total_count = self.total_count.saturating_add(count);

        match self.tallies.entry(item) {
            Entry::Occupied(mut entry) => {
                let tally = entry.get_mut();
                tally.count = tally.count.saturating_add(count);
                tally.count
            }
            Entry::Vacant(entry) => {
                let first_seen = self.next_seen;
                self.next_seen = self.next_seen.saturating_add(1);
                entry.insert(Tally { count, first_seen });
                count
            }
        }
    }

    /// Get the count of an item, or 0 if it was never seen
    pub fn count_of<Q>(&self, item: &Q) -> u64
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.tallies.get(item).map(|t| t.count).unwrap_or(0)
    }

    /// Check if an item has been counted
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.tallies.contains_key(item)
    }

    /// Number of distinct keys
    pub fn distinct(&self) -> usize {
        self.tallies.len()
    }

    /// Sum of all counts, saturating at `u64::MAX`
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Iterate over `(key, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&T, u64)> + '_ {
        self.tallies.iter().map(|(item, tally)| (item, tally.count))
    }

    /// Copy the full key to count mapping
    pub fn snapshot(&self) -> HashMap<T, u64> {
        self.tallies
            .iter()
            .map(|(item, tally)| (item.clone(), tally.count))
            .collect()
    }

    /// Get up to `k` entries ordered by count descending
    ///
    /// `k` may be any integer type. Ties are broken by first appearance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `k` is negative or does not fit
    /// in `usize`. The counter is not modified.
    pub fn top_k<K: TryInto<usize>>(&self, k: K) -> Result<Vec<(T, u64)>> {
        let k = k
            .try_into()
            .map_err(|_| Error::invalid_argument("k", K_REASON))?;
        Ok(self.ranked(k))
    }

    /// Select the `k` best-ranked entries with a min-heap of size `k`
    fn ranked(&self, k: usize) -> Vec<(T, u64)> {
        if k == 0 || self.tallies.is_empty() {
            return Vec::new();
        }

        let keep = k.min(self.tallies.len());
        let mut heap: BinaryHeap<Reverse<Ranked<'_, T>>> = BinaryHeap::with_capacity(keep + 1);

        for (item, tally) in &self.tallies {
            let candidate = Ranked::new(item, tally);
            if heap.len() < keep {
                heap.push(Reverse(candidate));
                continue;
            }

            let beats_worst = heap
                .peek()
                .map_or(false, |Reverse(worst)| candidate > *worst);
            if beats_worst {
                heap.pop();
                heap.push(Reverse(candidate));
            }
        }

        let mut top: Vec<Ranked<'_, T>> = heap.into_iter().map(|Reverse(r)| r).collect();
        top.sort_unstable_by(|a, b| b.cmp(a));
        top.into_iter().map(|r| (r.item.clone(), r.count)).collect()
    }

    /// Remove all keys
    pub fn clear(&mut self) {
        tracing::trace!(
            distinct = self.tallies.len(),
            total = self.total_count,
            "frequency counter cleared"
        );
        self.tallies.clear();
        self.next_seen = 0;
        self.total_count = 0;
    }
}

impl<T: Hash + Eq + Clone + Debug> Extend<T> for FrequencyCounter<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.increment(item);
        }
    }
}

impl<T: Hash + Eq + Clone + Debug> FromIterator<T> for FrequencyCounter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut counter = Self::new();
        counter.extend(iter);
        counter
    }
}

impl<T: Hash + Eq + Clone + Debug> Aggregator for FrequencyCounter<T> {
    type Item = T;

    fn update(&mut self, item: &T) {
        self.increment(item.clone());
    }

    fn clear(&mut self) {
        FrequencyCounter::clear(self);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
            + self.tallies.capacity() * core::mem::size_of::<(T, Tally)>()
    }

    fn items_seen(&self) -> u64 {
        self.total_count
    }
}

impl<T: Hash + Eq + Clone + Debug> Mergeable for FrequencyCounter<T> {
    /// Add every count from `other`
    ///
    /// Keys new to `self` rank after its existing keys on ties, in the order
    /// `other` first saw them.
    fn merge(&mut self, other: &Self) {
        let mut incoming: Vec<(&T, &Tally)> = other.tallies.iter().collect();
        incoming.sort_unstable_by_key(|(_, tally)| tally.first_seen);

        tracing::debug!(
            incoming = incoming.len(),
            existing = self.tallies.len(),
            "merging frequency counters"
        );
        for (item, tally) in incoming {
            self.add_count(item.clone(), tally.count);
        }
    }
}

impl<T: Hash + Eq + Clone + Debug> RankedFrequency for FrequencyCounter<T> {
    fn frequency(&self, item: &T) -> u64 {
        self.count_of(item)
    }

    fn most_frequent(&self, k: usize) -> Vec<(T, u64)> {
        self.ranked(k)
    }

    fn heavy_hitters(&self, threshold: f64) -> Vec<(T, u64)> {
        let cutoff = threshold * self.total_count as f64;

        let mut hitters: Vec<Ranked<'_, T>> = self
            .tallies
            .iter()
            .filter(|(_, tally)| tally.count as f64 >= cutoff)
            .map(|(item, tally)| Ranked::new(item, tally))
            .collect();
        hitters.sort_unstable_by(|a, b| b.cmp(a));
        hitters.into_iter().map(|r| (r.item.clone(), r.count)).collect()
    }
}

#[cfg(feature = "serde")]
impl<T: Hash + Eq + Clone + Debug + serde::Serialize> serde::Serialize for FrequencyCounter<T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let items = self.ranked(self.tallies.len());

        let mut state = serializer.serialize_struct("FrequencyCounter", 2)?;
        state.serialize_field("total_count", &self.total_count)?;
        state.serialize_field("items", &items)?;
        state.end()
    }
}

/// Count words after lowercasing them
///
/// Case folding happens here, before counting; the counter itself never
/// normalizes keys.
///
/// ```
/// use ringstats::frequency::word_frequencies;
///
/// let counter = word_frequencies(["apple", "Banana", "apple", "banana"]);
/// assert_eq!(counter.count_of("banana"), 2);
/// ```
pub fn word_frequencies<I>(words: I) -> FrequencyCounter<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| word.as_ref().to_lowercase())
        .collect()
}
