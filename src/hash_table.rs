use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::capacity::DEFAULT_INITIAL_CAPACITY;
use crate::capacity::DEFAULT_LOAD_FACTOR;
use crate::capacity::MAXIMUM_CAPACITY;
use crate::capacity::MAXIMUM_THRESHOLD;
use crate::capacity::presize_threshold;
use crate::capacity::table_size_for;
use crate::capacity::threshold_for;
use crate::config::Config;
use crate::error::Result;

/// One link of a bucket chain.
///
/// Nodes live in a dense arena; `next` is the arena index of the following
/// node in the same bucket. The hash is the spread hash captured at insertion.
#[derive(Clone)]
struct Node<T> {
    hash: u32,
    value: T,
    next: Option<usize>,
}

/// Outcome of walking a chain for a hash and predicate.
enum Probe {
    Found(usize),
    /// Not found; carries the tail of the walked chain, if any.
    Missing(Option<usize>),
}

/// Debug statistics for chain analysis.
///
/// Available in tests and with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of elements currently in the table
    pub populated: usize,
    /// Number of buckets allocated
    pub capacity: usize,
    /// Population at which the next insertion grows the table
    pub threshold: usize,
    /// Number of buckets with a non-empty chain
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Configured load factor
    pub load_factor: f32,
    /// Actual fill ratio (populated / capacity)
    pub fill_ratio: f64,
    /// Bucket utilization (occupied_buckets / capacity)
    pub bucket_utilization: f64,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {}/{} buckets ({:.2}% fill, load factor {:.2})",
            self.populated,
            self.capacity,
            self.fill_ratio * 100.0,
            self.load_factor
        );
        println!("Threshold: {}", self.threshold);
        println!(
            "Bucket Usage: {}/{} ({:.2}% utilization)",
            self.occupied_buckets,
            self.capacity,
            self.bucket_utilization * 100.0
        );
        println!("Longest chain: {}", self.longest_chain);
    }
}

/// A hash table using separate chaining over a power-of-two bucket array.
///
/// `HashTable<T>` stores values of type `T`. Like a raw table, it requires you
/// to provide both the (already spread) hash value and an equality predicate
/// for each operation; [`HashMap`] layers keys and a hasher on top.
///
/// Values are kept in a dense arena and chained per bucket through arena
/// indices, so a value never moves while it is in the table except when a
/// removal swaps the last value into the freed slot. New values are appended
/// at the tail of their bucket's chain and growth splits each chain into two
/// order-preserving halves.
///
/// The bucket array is not allocated until the first insertion.
///
/// ## Example
///
/// ```rust
/// use chain_hash::hash::spread;
/// use chain_hash::hash_table::Entry;
/// use chain_hash::hash_table::HashTable;
///
/// #[derive(Debug, PartialEq)]
/// struct Person {
///     id: u32,
///     name: String,
/// }
///
/// let mut table = HashTable::new();
/// let hash = spread(123);
///
/// match table.entry(hash, |p: &Person| p.id == 123) {
///     Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
///
/// assert_eq!(table.find(hash, |p| p.id == 123).map(|p| p.name.as_str()), Some("Alice"));
/// ```
///
/// [`HashMap`]: crate::HashMap
#[derive(Clone)]
pub struct HashTable<T> {
    buckets: Vec<Option<usize>>,
    nodes: Vec<Node<T>>,
    /// Before materialization: the staged bucket count, or zero for defaults.
    threshold: usize,
    load_factor: f32,
}

impl<T> Debug for HashTable<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use alloc::format;
        use alloc::string::String;

        f.debug_struct("HashTable")
            .field(
                "chains",
                &self
                    .buckets
                    .iter()
                    .map(|&head| {
                        let mut chain = String::new();
                        let mut cursor = head;
                        while let Some(index) = cursor {
                            if !chain.is_empty() {
                                chain.push_str(" -> ");
                            }
                            chain.push_str(&format!("{:08x}", self.nodes[index].hash));
                            cursor = self.nodes[index].next;
                        }
                        if chain.is_empty() {
                            chain.push_str("..");
                        }
                        chain
                    })
                    .collect::<Vec<_>>(),
            )
            .field("populated", &self.nodes.len())
            .field("capacity", &self.buckets.len())
            .field("threshold", &self.threshold)
            .field("load_factor", &self.load_factor)
            .finish()
    }
}

impl<T> Default for HashTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HashTable<T> {
    /// Creates an empty table that materializes with the default bucket count
    /// and load factor.
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// let table: HashTable<u32> = HashTable::new();
    /// assert_eq!(table.capacity(), 0);
    /// assert!(table.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            buckets: Vec::new(),
            nodes: Vec::new(),
            threshold: 0,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Creates an empty table that will start with at least `capacity`
    /// buckets, rounded up to a power of two.
    ///
    /// Nothing is allocated until the first insertion.
    ///
    /// ```rust
    /// # use chain_hash::hash::spread;
    /// # use chain_hash::hash_table::HashTable;
    /// let mut table = HashTable::with_capacity(14);
    /// table.entry(spread(7), |&v: &u32| v == 7).or_insert(7);
    /// assert_eq!(table.capacity(), 16);
    /// assert_eq!(table.threshold(), 12);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            threshold: table_size_for(capacity.min(MAXIMUM_CAPACITY)),
            ..Self::new()
        }
    }

    /// Creates an empty table from a validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured capacity is negative or the load
    /// factor is not a positive number.
    pub fn with_config(config: &Config) -> Result<Self> {
        let (threshold, load_factor) = config.resolve()?;
        Ok(Self {
            buckets: Vec::new(),
            nodes: Vec::new(),
            threshold,
            load_factor,
        })
    }

    /// Returns an iterator over the values in bucket order, and within a
    /// bucket in chain order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            table: self,
            bucket: 0,
            cursor: None,
            remaining: self.nodes.len(),
        }
    }

    /// Removes every value from the table, yielding them in arbitrary order.
    ///
    /// The bucket array is kept.
    pub fn drain(&mut self) -> Drain<'_, T> {
        self.buckets.fill(None);
        Drain {
            inner: self.nodes.drain(..),
        }
    }

    /// Returns `true` if the table contains no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of elements in the table.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of buckets, or zero if the table has not been
    /// materialized yet.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the population above which the next insertion grows the
    /// table.
    ///
    /// Before the first insertion this holds the staged bucket count instead
    /// (zero when the defaults apply).
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns the configured load factor.
    pub fn load_factor(&self) -> f32 {
        self.load_factor
    }

    /// Removes all elements from the table.
    ///
    /// The bucket array keeps its length; every slot is emptied.
    ///
    /// ```rust
    /// # use chain_hash::hash::spread;
    /// # use chain_hash::hash_table::HashTable;
    /// let mut table = HashTable::new();
    /// table.entry(spread(1), |&n: &u32| n == 1).or_insert(1);
    /// table.entry(spread(2), |&n: &u32| n == 2).or_insert(2);
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 16);
    /// ```
    pub fn clear(&mut self) {
        if self.buckets.is_empty() {
            return;
        }
        self.nodes.clear();
        self.buckets.fill(None);
    }

    /// Makes room for `additional` more elements on top of the current
    /// population.
    ///
    /// An unmaterialized table only raises its staged bucket count. A live
    /// table doubles until the combined population fits under the threshold
    /// or the maximum capacity is reached.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.nodes.len().saturating_add(additional);
        if required == 0 {
            return;
        }

        if self.buckets.is_empty() {
            let staged = presize_threshold(required, self.load_factor);
            if staged > self.threshold {
                self.threshold = staged;
            }
        } else {
            while required > self.threshold && self.buckets.len() < MAXIMUM_CAPACITY {
                self.resize();
            }
        }
    }

    /// Returns a reference to the value matching `hash` and `eq`.
    ///
    /// Chains are compared on the cached hash first, then on `eq`.
    ///
    /// ```rust
    /// # use chain_hash::hash::spread;
    /// # use chain_hash::hash_table::HashTable;
    /// let mut table = HashTable::new();
    /// table.entry(spread(42), |&n: &u32| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.find(spread(42), |&n| n == 42), Some(&42));
    /// assert_eq!(table.find(spread(99), |&n| n == 99), None);
    /// ```
    pub fn find(&self, hash: u32, eq: impl Fn(&T) -> bool) -> Option<&T> {
        match self.probe(hash, eq) {
            Probe::Found(index) => Some(&self.nodes[index].value),
            Probe::Missing(_) => None,
        }
    }

    /// Returns a mutable reference to the value matching `hash` and `eq`.
    pub fn find_mut(&mut self, hash: u32, eq: impl Fn(&T) -> bool) -> Option<&mut T> {
        match self.probe(hash, eq) {
            Probe::Found(index) => Some(&mut self.nodes[index].value),
            Probe::Missing(_) => None,
        }
    }

    /// Removes and returns the value matching `hash` and `eq`.
    ///
    /// The node is unlinked from its chain; the bucket array never shrinks.
    ///
    /// ```rust
    /// # use chain_hash::hash::spread;
    /// # use chain_hash::hash_table::HashTable;
    /// let mut table = HashTable::new();
    /// table.entry(spread(42), |&n: &u32| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.remove(spread(42), |&n| n == 42), Some(42));
    /// assert!(table.is_empty());
    /// assert_eq!(table.remove(spread(42), |&n| n == 42), None);
    /// ```
    pub fn remove(&mut self, hash: u32, eq: impl Fn(&T) -> bool) -> Option<T> {
        match self.probe(hash, eq) {
            Probe::Found(index) => Some(self.remove_index(index)),
            Probe::Missing(_) => None,
        }
    }

    /// Gets an entry for the given hash and equality predicate.
    ///
    /// ```rust
    /// # use chain_hash::hash::spread;
    /// # use chain_hash::hash_table::Entry;
    /// # use chain_hash::hash_table::HashTable;
    /// let mut table = HashTable::new();
    /// let hash = spread(0x0005_0005);
    ///
    /// match table.entry(hash, |s: &String| s == "hello") {
    ///     Entry::Vacant(entry) => {
    ///         entry.insert("hello".to_string());
    ///     }
    ///     Entry::Occupied(mut entry) => {
    ///         *entry.get_mut() = "updated".to_string();
    ///     }
    /// }
    ///
    /// table
    ///     .entry(hash, |s: &String| s == "hello")
    ///     .or_insert("ignored".to_string());
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn entry(&mut self, hash: u32, eq: impl Fn(&T) -> bool) -> Entry<'_, T> {
        match self.probe(hash, eq) {
            Probe::Found(index) => Entry::Occupied(OccupiedEntry { table: self, index }),
            Probe::Missing(tail) => Entry::Vacant(VacantEntry {
                table: self,
                hash,
                tail,
            }),
        }
    }

    #[inline(always)]
    fn bucket_index(&self, hash: u32) -> usize {
        debug_assert!(self.buckets.len().is_power_of_two());
        hash as usize & (self.buckets.len() - 1)
    }

    fn probe(&self, hash: u32, eq: impl Fn(&T) -> bool) -> Probe {
        if self.buckets.is_empty() {
            return Probe::Missing(None);
        }

        let mut tail = None;
        let mut cursor = self.buckets[self.bucket_index(hash)];
        while let Some(index) = cursor {
            let node = &self.nodes[index];
            if node.hash == hash && eq(&node.value) {
                return Probe::Found(index);
            }
            tail = Some(index);
            cursor = node.next;
        }
        Probe::Missing(tail)
    }

    /// Appends a node at the tail of its chain, growing afterwards if the
    /// population crossed the threshold. Returns the node's arena index.
    fn insert_tail(&mut self, hash: u32, value: T, tail: Option<usize>) -> usize {
        let tail = if self.buckets.is_empty() {
            self.resize();
            None
        } else {
            tail
        };

        let index = self.nodes.len();
        self.nodes.push(Node {
            hash,
            value,
            next: None,
        });
        match tail {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => {
                let bucket = self.bucket_index(hash);
                debug_assert!(self.buckets[bucket].is_none());
                self.buckets[bucket] = Some(index);
            }
        }

        if self.nodes.len() > self.threshold {
            self.resize();
        }
        index
    }

    fn remove_index(&mut self, index: usize) -> T {
        let bucket = self.bucket_index(self.nodes[index].hash);
        let next = self.nodes[index].next;
        self.relink(bucket, index, next);

        let last = self.nodes.len() - 1;
        if index != last {
            let bucket = self.bucket_index(self.nodes[last].hash);
            self.relink(bucket, last, Some(index));
        }
        self.nodes.swap_remove(index).value
    }

    /// Points whichever link in `bucket`'s chain refers to `target` at `to`.
    fn relink(&mut self, bucket: usize, target: usize, to: Option<usize>) {
        if self.buckets[bucket] == Some(target) {
            self.buckets[bucket] = to;
            return;
        }

        let mut cursor = self.buckets[bucket];
        while let Some(index) = cursor {
            if self.nodes[index].next == Some(target) {
                self.nodes[index].next = to;
                return;
            }
            cursor = self.nodes[index].next;
        }
        debug_assert!(false, "node {target} is not linked from bucket {bucket}");
    }

    /// Materializes or doubles the bucket array.
    ///
    /// The new array is built completely from the old chains before it
    /// replaces the old one. A table already at [`MAXIMUM_CAPACITY`] keeps its
    /// buckets and pins the threshold so it never tries again.
    #[cold]
    fn resize(&mut self) {
        let old_capacity = self.buckets.len();
        let old_threshold = self.threshold;

        let (new_capacity, new_threshold) = if old_capacity > 0 {
            if old_capacity >= MAXIMUM_CAPACITY {
                log::debug!(
                    "chained table at maximum capacity ({} buckets), threshold pinned",
                    old_capacity
                );
                self.threshold = MAXIMUM_THRESHOLD;
                return;
            }

            let new_capacity = old_capacity << 1;
            let doubled = if new_capacity < MAXIMUM_CAPACITY
                && old_capacity >= DEFAULT_INITIAL_CAPACITY
            {
                old_threshold.saturating_mul(2).min(MAXIMUM_THRESHOLD)
            } else {
                0
            };
            // A threshold that floored to zero cannot be doubled back up.
            if doubled > 0 {
                (new_capacity, doubled)
            } else {
                (new_capacity, threshold_for(new_capacity, self.load_factor))
            }
        } else if old_threshold > 0 {
            (old_threshold, threshold_for(old_threshold, self.load_factor))
        } else {
            (
                DEFAULT_INITIAL_CAPACITY,
                threshold_for(DEFAULT_INITIAL_CAPACITY, self.load_factor),
            )
        };

        log::trace!(
            "resizing chained table: {} -> {} buckets, threshold {} -> {}",
            old_capacity,
            new_capacity,
            old_threshold,
            new_threshold
        );

        let mask = new_capacity - 1;
        let mut buckets = vec![None; new_capacity];
        for bucket in 0..old_capacity {
            let Some(head) = self.buckets[bucket] else {
                continue;
            };

            if self.nodes[head].next.is_none() {
                buckets[self.nodes[head].hash as usize & mask] = Some(head);
                continue;
            }

            let (lo, hi) = self.split_chain(head, old_capacity);
            buckets[bucket] = lo;
            buckets[bucket + old_capacity] = hi;
        }

        self.buckets = buckets;
        self.threshold = new_threshold;
    }

    /// Splits the chain starting at `first` on `bit`, keeping relative order
    /// in both halves. Returns the heads of the clear (lo) and set (hi)
    /// chains.
    fn split_chain(&mut self, first: usize, bit: usize) -> (Option<usize>, Option<usize>) {
        let (mut lo_head, mut lo_tail): (Option<usize>, Option<usize>) = (None, None);
        let (mut hi_head, mut hi_tail): (Option<usize>, Option<usize>) = (None, None);

        let mut cursor = Some(first);
        while let Some(index) = cursor {
            cursor = self.nodes[index].next;

            let (head, tail) = if self.nodes[index].hash as usize & bit == 0 {
                (&mut lo_head, &mut lo_tail)
            } else {
                (&mut hi_head, &mut hi_tail)
            };
            match *tail {
                Some(previous) => self.nodes[previous].next = Some(index),
                None => *head = Some(index),
            }
            *tail = Some(index);
        }

        for tail in [lo_tail, hi_tail].into_iter().flatten() {
            self.nodes[tail].next = None;
        }
        (lo_head, hi_head)
    }

    #[cfg(any(test, feature = "stats"))]
    fn chain_len(&self, head: Option<usize>) -> usize {
        let mut len = 0;
        let mut cursor = head;
        while let Some(index) = cursor {
            len += 1;
            cursor = self.nodes[index].next;
        }
        len
    }

    /// Values of one bucket's chain, in chain order.
    #[cfg(test)]
    fn chain(&self, bucket: usize) -> Vec<&T> {
        let mut values = Vec::new();
        let mut cursor = self.buckets.get(bucket).copied().flatten();
        while let Some(index) = cursor {
            values.push(&self.nodes[index].value);
            cursor = self.nodes[index].next;
        }
        values
    }

    /// Computes a histogram of chain lengths.
    ///
    /// Index `n` of the result counts the buckets whose chain holds exactly
    /// `n` values. The vector is as long as the longest chain plus one; an
    /// unmaterialized table yields an empty vector.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> Vec<usize> {
        let mut hist = Vec::new();
        for &head in &self.buckets {
            let len = self.chain_len(head);
            if hist.len() <= len {
                hist.resize(len + 1, 0);
            }
            hist[len] += 1;
        }
        hist
    }

    /// Returns chain and bucket usage statistics for debugging.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let mut occupied_buckets = 0;
        let mut longest_chain = 0;
        for &head in &self.buckets {
            let len = self.chain_len(head);
            if len > 0 {
                occupied_buckets += 1;
            }
            longest_chain = longest_chain.max(len);
        }

        let capacity = self.buckets.len();
        DebugStats {
            populated: self.nodes.len(),
            capacity,
            threshold: self.threshold,
            occupied_buckets,
            longest_chain,
            load_factor: self.load_factor,
            fill_ratio: if capacity == 0 {
                0.0
            } else {
                self.nodes.len() as f64 / capacity as f64
            },
            bucket_utilization: if capacity == 0 {
                0.0
            } else {
                occupied_buckets as f64 / capacity as f64
            },
        }
    }

    /// Pretty-prints the chain-length histogram horizontally using stdout.
    ///
    /// Requires the `std` feature. Each row is a chain length, starting with
    /// the empty buckets.
    #[cfg(all(any(test, feature = "stats"), feature = "std"))]
    pub fn print_chain_histogram(&self) {
        let hist = self.chain_histogram();
        let max = *hist.iter().max().unwrap_or(&0);
        if max == 0 {
            println!("chain histogram: empty");
            return;
        }

        let max_bar = 60usize;
        let total_units = max_bar * 8;
        println!(
            "chain histogram ({} entries, {} buckets):",
            self.nodes.len(),
            self.buckets.len()
        );

        let make_bar = |count: usize| -> alloc::string::String {
            if count == 0 {
                return alloc::string::String::new();
            }
            let units = ((count as u128 * total_units as u128).div_ceil(max as u128)) as usize;
            let mut bar = "█".repeat(units / 8);
            let partial = match units % 8 {
                1 => Some('▏'),
                2 => Some('▎'),
                3 => Some('▍'),
                4 => Some('▌'),
                5 => Some('▋'),
                6 => Some('▊'),
                7 => Some('▉'),
                _ => None,
            };
            if let Some(ch) = partial {
                bar.push(ch);
            }
            bar
        };

        for (len, &count) in hist.iter().enumerate() {
            println!("{:>3} | {} ({})", len, make_bar(count), count);
        }
    }
}

/// A view into a single entry in the hash table, which may be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
pub enum Entry<'a, T> {
    /// A vacant entry - no value matched the hash and predicate
    Vacant(VacantEntry<'a, T>),
    /// An occupied entry - a matching value is present in the table
    Occupied(OccupiedEntry<'a, T>),
}

impl<'a, T> Entry<'a, T> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the value in the entry.
    pub fn or_insert(self, default: T) -> &'a mut T {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the result of `default` if the entry is vacant and returns a
    /// mutable reference to the value in the entry.
    pub fn or_insert_with(self, default: impl FnOnce() -> T) -> &'a mut T {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Applies `f` to an occupied entry's value before any potential
    /// insertion.
    pub fn and_modify(self, f: impl FnOnce(&mut T)) -> Self {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Inserts the default value if the entry is vacant.
    pub fn or_default(self) -> &'a mut T
    where
        T: Default,
    {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in a [`HashTable`].
pub struct VacantEntry<'a, T> {
    table: &'a mut HashTable<T>,
    hash: u32,
    tail: Option<usize>,
}

impl<'a, T> VacantEntry<'a, T> {
    /// Appends `value` to the end of its bucket's chain and returns a mutable
    /// reference to it.
    ///
    /// The table grows afterwards if the population now exceeds the
    /// threshold; the returned reference stays valid across that growth.
    pub fn insert(self, value: T) -> &'a mut T {
        let index = self.table.insert_tail(self.hash, value, self.tail);
        &mut self.table.nodes[index].value
    }
}

/// A view into an occupied entry in a [`HashTable`].
pub struct OccupiedEntry<'a, T> {
    table: &'a mut HashTable<T>,
    index: usize,
}

impl<'a, T> OccupiedEntry<'a, T> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &T {
        &self.table.nodes[self.index].value
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.table.nodes[self.index].value
    }

    /// Converts the entry into a mutable reference to its value.
    pub fn into_mut(self) -> &'a mut T {
        &mut self.table.nodes[self.index].value
    }

    /// Unlinks the entry from its chain and returns the value.
    pub fn remove(self) -> T {
        self.table.remove_index(self.index)
    }
}

/// An iterator over the values of a [`HashTable`] in bucket order.
pub struct Iter<'a, T> {
    table: &'a HashTable<T>,
    bucket: usize,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let table = self.table;
        loop {
            if let Some(index) = self.cursor {
                let node = &table.nodes[index];
                self.cursor = node.next;
                self.remaining -= 1;
                return Some(&node.value);
            }
            if self.bucket >= table.buckets.len() {
                return None;
            }
            self.cursor = table.buckets[self.bucket];
            self.bucket += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a HashTable<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A draining iterator over the values of a [`HashTable`].
pub struct Drain<'a, T> {
    inner: vec::Drain<'a, Node<T>>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

/// A consuming iterator over the values of a [`HashTable`].
pub struct IntoIter<T> {
    inner: vec::IntoIter<Node<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for HashTable<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.nodes.into_iter(),
        }
    }
}
