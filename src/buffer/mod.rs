//! Fixed-capacity buffers for streaming data
//!
//! This module provides the storage primitive the windowed aggregators are
//! built on.
//!
//! # Example
//!
//! ```
//! use ringstats::buffer::RingBuffer;
//!
//! let mut ring = RingBuffer::new(3).unwrap();
//!
//! // Old samples fall out once the buffer is full
//! for sample in [1.0, 2.0, 3.0, 4.0] {
//!     ring.push(sample);
//! }
//!
//! assert_eq!(ring.to_vec(), vec![2.0, 3.0, 4.0]);
//! ```

mod ring;

pub use ring::RingBuffer;
