//! Windowed statistics over numeric streams
//!
//! This module provides aggregates computed over the most recent samples of
//! a stream in bounded memory.
//!
//! # Example
//!
//! ```
//! use ringstats::statistics::MovingAverage;
//!
//! let mut latency = MovingAverage::new(4).unwrap();
//!
//! for ms in [12.0, 15.0, 11.0, 30.0, 14.0] {
//!     latency.add(ms);
//! }
//!
//! println!("Average: {}", latency.average());
//! println!("Window: {:?}", latency.values());
//! println!("Min: {:?}", latency.min());
//! println!("Max: {:?}", latency.max());
//! ```

mod moving_average;

pub use moving_average::MovingAverage;
