#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Bucket-count and threshold arithmetic shared by every table.
pub mod capacity;

/// Construction parameters and their validation.
pub mod config;

/// Construction errors.
pub mod error;

/// Hash spreading: reducing a key's hash to the value used for bucket
/// indexing.
pub mod hash;

/// A HashMap implementation using separate chaining.
///
/// This module provides a `HashMap` that wraps the `HashTable` and provides
/// a standard key-value map interface with configurable hashers.
pub mod hash_map;

/// A hash set built on the same chained `HashTable`.
///
/// Snapshot key sets and entry sets produced by `HashMap` use this type.
pub mod hash_set;

/// The chained table engine and its growth algorithm.
pub mod hash_table;

/// Snapshot views built by scanning every chain of a map.
pub mod snapshot;

pub use config::Config;
pub use error::Error;
pub use error::Result;
pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_set::HashSet;
pub use hash_table::HashTable;
pub use snapshot::MapEntry;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher builder used when none is specified.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The hasher builder used when none is specified.
        pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
    }
}
