#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A string-keyed hash map over the chained bucket table.
///
/// This module provides a `HashMap` that wraps the `HashTable` and exposes a
/// key-value interface with iterator-based bulk accessors.
pub mod hash_map;

/// The shared bucket table: hashing, bounds checking, and the growth policy.
pub mod hash_table;

/// A string set over the chained bucket table.
///
/// This module provides a `HashSet` that wraps the `HashTable` and exposes a
/// membership interface with an iterator over its keys.
pub mod hash_set;

/// The singly linked list used as the per-bucket collision chain.
pub mod linked_list;

pub use hash_map::HashMap;
pub use hash_set::HashSet;
pub use hash_table::HashTable;
pub use hash_table::Keyed;
pub use linked_list::LinkedList;
