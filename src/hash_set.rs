use alloc::string::String;
use core::fmt::Debug;

use crate::hash_table;
use crate::hash_table::HashTable;

/// A set of strings backed by the chained [`HashTable`].
///
/// Structurally this is [`HashMap`](crate::HashMap) without the value slot:
/// the table stores bare `String` entries. Adding a key that is already
/// present overwrites the stored key with an equal one, which is an
/// observable no-op — `add` is idempotent.
///
/// The growth caveat described on [`HashTable`] applies here too.
///
/// # Examples
///
/// ```rust
/// use chain_hash::HashSet;
///
/// let mut set = HashSet::new();
/// set.add("x");
/// set.add("x");
///
/// assert!(set.has("x"));
/// assert_eq!(set.len(), 1);
/// assert!(set.remove("x"));
/// assert!(!set.has("x"));
/// ```
#[derive(Clone, Default)]
pub struct HashSet {
    table: HashTable<String>,
}

impl HashSet {
    /// Creates an empty set with the initial bucket count.
    pub fn new() -> Self {
        HashSet {
            table: HashTable::new(),
        }
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set contains no keys.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the current number of buckets.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Adds `key` to the set. Adding a present key changes nothing.
    ///
    /// May grow the table afterwards; see [`HashTable`] for the growth
    /// policy and its caveat.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let mut set = HashSet::new();
    /// set.add("a");
    /// set.add("a");
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, key: impl Into<String>) {
        self.table.insert(key.into());
    }

    /// Returns `true` if `key` is in the set.
    pub fn has(&self, key: &str) -> bool {
        self.table.contains(key)
    }

    /// Removes `key` from the set, returning `true` if it was present.
    ///
    /// The table never shrinks on removal.
    pub fn remove(&mut self, key: &str) -> bool {
        self.table.remove(key)
    }

    /// Removes every key, keeping the current bucket count.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns an iterator over the keys, in bucket order then chain order.
    /// Yields nothing for an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let mut set = HashSet::new();
    /// set.add("b");
    /// set.add("a");
    ///
    /// let keys: Vec<_> = set.keys().collect();
    /// assert_eq!(keys, ["a", "b"]);
    /// ```
    pub fn keys(&self) -> Keys<'_> {
        Keys {
            inner: self.table.iter(),
        }
    }
}

impl Debug for HashSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.keys()).finish()
    }
}

impl<K: Into<String>> Extend<K> for HashSet {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

impl<K: Into<String>> FromIterator<K> for HashSet {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = HashSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a HashSet {
    type IntoIter = Keys<'a>;
    type Item = &'a str;

    fn into_iter(self) -> Self::IntoIter {
        self.keys()
    }
}

/// An iterator over the keys of a [`HashSet`].
pub struct Keys<'a> {
    inner: hash_table::Iter<'a, String>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }
}
