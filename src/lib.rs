#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A growable bit vector used to track slot occupancy.
///
/// This module provides the `BitSet` the bucket map consults before touching
/// any slot: bit scans find free slots and walk the occupied ones.
pub mod bitset;

/// The fixed-capacity bucket map.
///
/// This module provides `BucketMap`, its iterators, and the detached `Cursor`
/// iteration protocol.
pub mod bucket_map;

mod comparator;
mod error;

pub use bucket_map::BucketMap;
pub use bucket_map::Cursor;
#[cfg(feature = "stats")]
pub use bucket_map::SlotStats;
pub use comparator::KeyComparator;
pub use comparator::OrdComparator;
pub use error::Error;
pub use error::Result;
