use alloc::string::String;
use core::fmt::Debug;

use crate::hash_table;
use crate::hash_table::HashTable;

/// A string-keyed hash map backed by the chained [`HashTable`].
///
/// `HashMap<V>` stores `(String, V)` entries. Keys are restricted to strings
/// by the API itself; values are unconstrained. Lookups that miss return
/// `None`, and the bulk accessors ([`entries`](Self::entries),
/// [`keys`](Self::keys), [`values`](Self::values)) are iterators that simply
/// yield nothing when the map is empty.
///
/// The growth caveat described on [`HashTable`] applies: doubling the bucket
/// count does not rehash existing entries.
///
/// # Examples
///
/// ```rust
/// use chain_hash::HashMap;
///
/// let mut map = HashMap::new();
/// map.set("a", 1);
/// map.set("b", 2);
/// map.set("a", 3);
///
/// assert_eq!(map.get("a"), Some(&3));
/// assert_eq!(map.get("b"), Some(&2));
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Clone)]
pub struct HashMap<V> {
    table: HashTable<(String, V)>,
}

impl<V> HashMap<V> {
    /// Creates an empty map with the initial bucket count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let map: HashMap<i32> = HashMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        HashMap {
            table: HashTable::new(),
        }
    }

    /// Returns the number of key-value pairs in the map.
    ///
    /// Unaffected by [`get`](Self::get) and [`has`](Self::has).
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no pairs.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the current number of buckets.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Inserts `value` under `key`, updating the value in place if the key is
    /// already present.
    ///
    /// May grow the table afterwards; see [`HashTable`] for the growth
    /// policy and its caveat.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.set("answer", 41);
    /// map.set("answer", 42);
    ///
    /// assert_eq!(map.get("answer"), Some(&42));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        self.table.insert((key.into(), value));
    }

    /// Returns a reference to the value stored under `key`, or `None`.
    ///
    /// Never mutates the map and never triggers growth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.set("a", 1);
    ///
    /// assert_eq!(map.get("a"), Some(&1));
    /// assert_eq!(map.get("b"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&V> {
        self.table.find(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.set("a", 1);
    /// if let Some(v) = map.get_mut("a") {
    ///     *v += 10;
    /// }
    ///
    /// assert_eq!(map.get("a"), Some(&11));
    /// ```
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.table.find_mut(key).map(|(_, v)| v)
    }

    /// Returns `true` if `key` is present.
    pub fn has(&self, key: &str) -> bool {
        self.table.contains(key)
    }

    /// Removes `key` and its value, returning `true` if it was present.
    ///
    /// The table never shrinks on removal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.set("a", 1);
    ///
    /// assert!(map.remove("a"));
    /// assert!(!map.remove("a"));
    /// assert!(!map.has("a"));
    /// ```
    pub fn remove(&mut self, key: &str) -> bool {
        self.table.remove(key)
    }

    /// Removes every pair, keeping the current bucket count.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns an iterator over `(key, value)` pairs, in bucket order then
    /// chain order. Yields nothing for an empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    ///
    /// let pairs: Vec<_> = map.entries().collect();
    /// assert_eq!(pairs, [("a", &1), ("b", &2)]);
    /// ```
    pub fn entries(&self) -> Entries<'_, V> {
        Entries {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over the keys, in the same order as
    /// [`entries`](Self::entries).
    pub fn keys(&self) -> Keys<'_, V> {
        Keys {
            inner: self.entries(),
        }
    }

    /// Returns an iterator over the values, in the same order as
    /// [`entries`](Self::entries).
    pub fn values(&self) -> Values<'_, V> {
        Values {
            inner: self.entries(),
        }
    }
}

impl<V> Default for HashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug> Debug for HashMap<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.entries() {
            map.entry(&k, v);
        }
        map.finish()
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for HashMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for HashMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        map.extend(iter);
        map
    }
}

impl<'a, V> IntoIterator for &'a HashMap<V> {
    type IntoIter = Entries<'a, V>;
    type Item = (&'a str, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// An iterator over the `(key, value)` pairs of a [`HashMap`].
pub struct Entries<'a, V> {
    inner: hash_table::Iter<'a, (String, V)>,
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }
}

/// An iterator over the keys of a [`HashMap`].
pub struct Keys<'a, V> {
    inner: Entries<'a, V>,
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// An iterator over the values of a [`HashMap`].
pub struct Values<'a, V> {
    inner: Entries<'a, V>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}
