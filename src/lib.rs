//! # Ringstats
//!
//! Bounded-memory streaming primitives for Rust.
//!
//! Ringstats provides small, stateful aggregators that consume a stream one
//! item at a time, update in O(1) (amortized), and report their current
//! aggregate on demand.
//!
//! ## Features
//!
//! - **Ring Buffer**: Fixed-capacity FIFO storage that overwrites the oldest item
//! - **Moving Average**: Running mean over the last *W* samples
//! - **Frequency Counting**: Exact per-key counts with deterministic top-K
//! - **Explicit Errors**: Invalid arguments come back as [`Error`] values, never panics
//!
//! ## Quick Start
//!
//! ```rust
//! use ringstats::prelude::*;
//!
//! // Smooth a noisy signal
//! let mut avg = MovingAverage::new(3).unwrap();
//! for sample in [10.0, 20.0, 30.0, 40.0] {
//!     avg.add(sample);
//! }
//! assert_eq!(avg.average(), 30.0);
//!
//! // Find the most common words
//! let words = word_frequencies("the cat and The dog and the bird".split_whitespace());
//! assert_eq!(words.top_k(2).unwrap(), vec![("the".to_string(), 3), ("and".to_string(), 2)]);
//! ```
//!
//! ## Errors
//!
//! Constructors and [`FrequencyCounter::top_k`](frequency::FrequencyCounter::top_k)
//! validate their arguments:
//!
//! ```rust
//! use ringstats::buffer::RingBuffer;
//! use ringstats::Error;
//!
//! let err = RingBuffer::<u8>::new(0).unwrap_err();
//! assert!(matches!(err, Error::InvalidArgument { parameter: "capacity", .. }));
//! ```
//!
//! ## Feature Flags
//!
//! Algorithm families:
//! - `buffer` (default): [`RingBuffer`]
//! - `statistics` (default): [`MovingAverage`], implies `buffer`
//! - `frequency` (default): [`FrequencyCounter`], implies `std`
//! - `sync`: `SharedCounter`, a mutex-guarded counter for concurrent producers
//! - `full`: Enable everything
//!
//! Platform features:
//! - `std` (default): Standard library support; without it `buffer` and
//!   `statistics` build on `alloc`
//! - `serde`: Serialize snapshots of every structure
//!
//! ## Logging
//!
//! Structured events are emitted through [`tracing`]: construction at
//! `DEBUG`, rejected arguments at `WARN`, clears at `TRACE`. Install any
//! subscriber to see them.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

#[cfg(feature = "buffer")]
#[cfg_attr(docsrs, doc(cfg(feature = "buffer")))]
pub mod buffer;

#[cfg(feature = "statistics")]
#[cfg_attr(docsrs, doc(cfg(feature = "statistics")))]
pub mod statistics;

#[cfg(feature = "frequency")]
#[cfg_attr(docsrs, doc(cfg(feature = "frequency")))]
pub mod frequency;

pub use traits::{Error, Result};

pub mod prelude {
    pub use crate::traits::{Aggregator, Error, Mergeable, RankedFrequency, Windowed};

    #[cfg(feature = "buffer")]
    pub use crate::buffer::RingBuffer;

    #[cfg(feature = "statistics")]
    pub use crate::statistics::MovingAverage;

    #[cfg(feature = "frequency")]
    pub use crate::frequency::{word_frequencies, FrequencyCounter};

    #[cfg(feature = "sync")]
    pub use crate::frequency::SharedCounter;
}

#[cfg(feature = "buffer")]
pub use buffer::RingBuffer;

#[cfg(feature = "statistics")]
pub use statistics::MovingAverage;

#[cfg(feature = "frequency")]
pub use frequency::FrequencyCounter;
