use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::linked_list;
use crate::linked_list::LinkedList;

/// Number of buckets a fresh table starts with.
pub const INITIAL_BUCKETS: usize = 16;

/// Maximum ratio of occupied buckets to capacity before the table doubles.
///
/// Occupancy is counted per bucket: a bucket whose chain holds many colliding
/// entries still counts once.
pub const LOAD_FACTOR: f64 = 0.75;

/// Maps `key` to a bucket index in `[0, capacity)`.
///
/// This is a polynomial rolling hash with base 31 over the key's characters
/// (by Unicode code point), reducing modulo `capacity` at every step rather
/// than once at the end. The empty key hashes to 0.
///
/// Because the modulus is the table's *current* capacity, the same key can
/// map to different buckets under different capacities. See [`HashTable`] for
/// what that implies across growth.
///
/// # Panics
///
/// Panics in debug builds if `capacity` is zero.
///
/// # Examples
///
/// ```rust
/// use chain_hash::hash_table::bucket_index;
///
/// assert_eq!(bucket_index("", 16), 0);
/// assert_eq!(bucket_index("a", 16), 1);
/// assert!(bucket_index("collision", 16) < 16);
/// ```
pub fn bucket_index(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "hashing against an empty table");

    let mut acc: u64 = 0;
    for c in key.chars() {
        acc = (31 * acc + u64::from(u32::from(c))) % capacity as u64;
    }
    acc as usize
}

/// Gives the bucket table access to an entry's key.
///
/// The table is instantiated twice in this crate: with `(String, V)` entries
/// for [`HashMap`](crate::HashMap) and with bare `String` entries for
/// [`HashSet`](crate::HashSet). Keeping the key behind a trait lets both
/// share every table operation without inspecting entry shape at runtime.
pub trait Keyed {
    /// Returns the entry's key.
    fn key(&self) -> &str;
}

impl Keyed for String {
    fn key(&self) -> &str {
        self
    }
}

impl<V> Keyed for (String, V) {
    fn key(&self) -> &str {
        &self.0
    }
}

/// A bucket table of singly linked collision chains.
///
/// The table owns `capacity` chains (`capacity == buckets.len()` always) and
/// starts at [`INITIAL_BUCKETS`]. Every operation hashes the key with
/// [`bucket_index`] under the current capacity, bounds-checks the result, and
/// delegates the per-bucket work to that bucket's [`LinkedList`]. After an
/// insert, the table doubles its capacity when more than [`LOAD_FACTOR`] of
/// the buckets are occupied, by appending empty chains.
///
/// # Growth does not rehash
///
/// Doubling appends fresh buckets and leaves every existing chain untouched.
/// An entry whose key hashes to a different index under the doubled capacity
/// becomes unreachable by [`find`](Self::find) / [`contains`](Self::contains)
/// / [`remove`](Self::remove) from that point on, while still counting toward
/// [`len`](Self::len) and still showing up in [`iter`](Self::iter). This is a
/// deliberate reproduction of the design this crate reimplements; callers
/// that need lookups to survive growth must keep key sets whose indices are
/// stable across the capacities involved.
///
/// # Examples
///
/// ```rust
/// use chain_hash::HashTable;
///
/// let mut table: HashTable<String> = HashTable::new();
/// table.insert("a".to_string());
/// table.insert("b".to_string());
///
/// assert_eq!(table.len(), 2);
/// assert!(table.contains("a"));
/// assert!(table.remove("a"));
/// assert!(!table.contains("a"));
/// ```
#[derive(Clone)]
pub struct HashTable<T> {
    buckets: Vec<LinkedList<T>>,
    capacity: usize,
}

impl<T: Keyed> HashTable<T> {
    /// Creates a table with [`INITIAL_BUCKETS`] empty chains.
    pub fn new() -> Self {
        HashTable {
            buckets: fresh_buckets(INITIAL_BUCKETS),
            capacity: INITIAL_BUCKETS,
        }
    }

    /// Returns the current number of buckets.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the total number of entries.
    ///
    /// Walks every bucket and sums the chain lengths, so this is O(buckets).
    pub fn len(&self) -> usize {
        self.buckets.iter().map(LinkedList::len).sum()
    }

    /// Returns `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(LinkedList::is_empty)
    }

    /// Inserts `entry`, replacing the first entry in the target chain with an
    /// equal key if one exists, appending otherwise.
    ///
    /// Runs the growth check afterwards either way. Replacement overwrites
    /// the whole entry; since the keys compare equal this is an in-place
    /// value update for map entries and an observable no-op for set entries.
    pub fn insert(&mut self, entry: T) {
        let index = self.index_for(entry.key());
        let chain = &mut self.buckets[index];

        if let Some(existing) = chain.iter_mut().find(|e| e.key() == entry.key()) {
            *existing = entry;
        } else {
            chain.push_back(entry);
        }

        self.maybe_grow();
    }

    /// Returns the first entry in the target chain whose key equals `key`.
    pub fn find(&self, key: &str) -> Option<&T> {
        let index = self.index_for(key);
        self.buckets[index].iter().find(|e| e.key() == key)
    }

    /// Returns a mutable reference to the first entry whose key equals `key`.
    pub fn find_mut(&mut self, key: &str) -> Option<&mut T> {
        let index = self.index_for(key);
        self.buckets[index].iter_mut().find(|e| e.key() == key)
    }

    /// Returns `true` if any entry in the target chain has a matching key.
    pub fn contains(&self, key: &str) -> bool {
        let index = self.index_for(key);
        self.buckets[index].iter().any(|e| e.key() == key)
    }

    /// Removes the first entry whose key equals `key`.
    ///
    /// Scans the target chain position by position and unlinks the first
    /// match. Returns `true` if an entry was removed. The table never gives
    /// buckets back; capacity is unchanged.
    pub fn remove(&mut self, key: &str) -> bool {
        let index = self.index_for(key);
        let chain = &mut self.buckets[index];

        match chain.position(|e| e.key() == key) {
            Some(pos) => chain.remove_at(pos).is_some(),
            None => false,
        }
    }

    /// Drops every entry, replacing all chains with fresh empty ones.
    ///
    /// Capacity is preserved: a table that grew to 64 buckets still has 64
    /// after clearing.
    pub fn clear(&mut self) {
        self.buckets = fresh_buckets(self.capacity);
    }

    /// Returns an iterator over all entries, in bucket order then chain
    /// order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buckets: self.buckets.iter(),
            chain: linked_list::Iter::default(),
        }
    }

    /// Number of buckets whose chain is non-empty.
    fn occupied_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| !chain.is_empty()).count()
    }

    /// Doubles the capacity when occupancy exceeds the load factor.
    ///
    /// Appends `capacity` empty chains; existing chains keep their position
    /// and contents. Entries are not rehashed (see the type-level docs).
    fn maybe_grow(&mut self) {
        let occupied = self.occupied_buckets();
        if occupied as f64 > self.capacity as f64 * LOAD_FACTOR {
            let doubled = self.capacity * 2;
            self.buckets.resize_with(doubled, LinkedList::new);
            self.capacity = doubled;
        }
    }

    /// Hashes `key` under the current capacity and bounds-checks the result.
    fn index_for(&self, key: &str) -> usize {
        let index = bucket_index(key, self.capacity);
        self.check_index(index);
        index
    }

    /// Asserts that `index` addresses an existing bucket.
    ///
    /// Unreachable for any index produced by [`bucket_index`] while the
    /// `capacity == buckets.len()` invariant holds; a failure here is a bug
    /// in the table, not a recoverable condition.
    fn check_index(&self, index: usize) {
        assert!(
            index < self.buckets.len(),
            "bucket index {index} out of bounds for table of {} buckets",
            self.buckets.len(),
        );
    }
}

fn fresh_buckets<T>(capacity: usize) -> Vec<LinkedList<T>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, LinkedList::new);
    buckets
}

impl<T: Keyed> Default for HashTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed + Debug> Debug for HashTable<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a HashTable<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over all entries of a [`HashTable`], bucket by bucket.
pub struct Iter<'a, T> {
    buckets: core::slice::Iter<'a, LinkedList<T>>,
    chain: linked_list::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                return Some(entry);
            }
            self.chain = self.buckets.next()?.iter();
        }
    }
}
