//! Frequency counting over key streams
//!
//! This module provides exact per-key counting with ranked read-out.
//!
//! # Types
//!
//! - [`FrequencyCounter`]: key to count mapping with top-K extraction
//! - [`SharedCounter`]: lock-protected handle for concurrent producers
//!   (requires the `sync` feature)
//!
//! # Example
//!
//! ```
//! use ringstats::frequency::FrequencyCounter;
//!
//! let mut status_codes = FrequencyCounter::new();
//!
//! for code in [200, 404, 200, 500, 200, 404] {
//!     status_codes.increment(code);
//! }
//!
//! let top = status_codes.top_k(2).unwrap();
//! assert_eq!(top, vec![(200, 3), (404, 2)]);
//! ```

mod counter;
#[cfg(feature = "sync")]
mod shared;

pub use counter::{word_frequencies, FrequencyCounter};

#[cfg(feature = "sync")]
#[cfg_attr(docsrs, doc(cfg(feature = "sync")))]
pub use shared::SharedCounter;
