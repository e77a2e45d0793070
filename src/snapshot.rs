use alloc::vec::Vec;
use core::fmt;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::hash::Hasher;

use siphasher::sip::SipHasher;

use crate::hash::raw_hash;
use crate::hash_map::HashMap;
use crate::hash_set::HashSet;

/// Hasher builder for entry identities: SipHash with fixed zero keys, so an
/// identity depends only on the key and the value.
#[derive(Clone, Copy, Default)]
struct IdentityState;

impl BuildHasher for IdentityState {
    type Hasher = SipHasher;

    fn build_hasher(&self) -> Self::Hasher {
        SipHasher::new()
    }
}

/// An owned key-value pair taken out of a [`HashMap`] by [`entry_set`].
///
/// Two entries are equal when both their keys and their values are equal.
/// The entry's hash is the bitwise AND of its key's raw hash and its value's
/// raw hash. Both are taken with a fixed-key SipHash rather than the map's
/// hasher builder, so equal entries always hash alike no matter which map
/// or caller built them.
///
/// [`entry_set`]: HashMap::entry_set
#[derive(Clone)]
pub struct MapEntry<K, V> {
    key: K,
    value: V,
    identity: u32,
}

impl<K, V> MapEntry<K, V> {
    /// Builds an entry, hashing the key and the value independently.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::MapEntry;
    /// let a = MapEntry::new("k", 7u32);
    /// let b = MapEntry::new("k", 7u32);
    /// assert_eq!(a, b);
    /// assert_eq!(a.identity(), b.identity());
    /// ```
    pub fn new(key: K, value: V) -> Self
    where
        K: Hash,
        V: Hash,
    {
        let identity = raw_hash(&IdentityState, &key) & raw_hash(&IdentityState, &value);
        Self {
            key,
            value,
            identity,
        }
    }

    /// Returns the entry's key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the entry's value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the AND-combined hash of the key and value.
    pub fn identity(&self) -> u32 {
        self.identity
    }

    /// Splits the entry into its key and value.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for MapEntry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl<K: Eq, V: Eq> Eq for MapEntry<K, V> {}

impl<K, V> Hash for MapEntry<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.identity);
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for MapEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for MapEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Returns a snapshot of the map's keys.
    ///
    /// The set is built by scanning every chain and owns clones of the keys;
    /// later changes to the map do not show up in it, and changing it leaves
    /// the map alone. It hashes with a clone of the map's hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::DefaultHashBuilder;
    /// # use chain_hash::HashMap;
    /// let mut map: HashMap<i32, &str, DefaultHashBuilder> = HashMap::new();
    /// map.insert(1, "a");
    /// let keys = map.key_set();
    /// map.insert(2, "b");
    /// assert_eq!(keys.len(), 1);
    /// assert!(keys.contains(&1));
    /// ```
    pub fn key_set(&self) -> HashSet<K, S>
    where
        K: Clone,
        S: Clone,
    {
        let mut keys = HashSet::with_hasher(self.hash_builder.clone());
        keys.reserve(self.len());
        for (key, _) in self.table.iter() {
            keys.insert(key.clone());
        }
        keys
    }

    /// Returns a snapshot of the map's values in bucket order, duplicates
    /// included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::DefaultHashBuilder;
    /// # use chain_hash::HashMap;
    /// let mut map: HashMap<i32, i32, DefaultHashBuilder> = HashMap::new();
    /// map.insert(1, 12);
    /// map.insert(2, 12);
    /// assert_eq!(map.value_list(), vec![12, 12]);
    /// ```
    pub fn value_list(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.table.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Returns a snapshot of the map's key-value pairs as [`MapEntry`]
    /// values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::DefaultHashBuilder;
    /// # use chain_hash::HashMap;
    /// # use chain_hash::MapEntry;
    /// let mut map: HashMap<i32, i32, DefaultHashBuilder> = HashMap::new();
    /// map.insert(1, 12);
    /// let entries = map.entry_set();
    /// assert!(entries.contains(&MapEntry::new(1, 12)));
    /// assert!(!entries.contains(&MapEntry::new(1, 13)));
    /// ```
    pub fn entry_set(&self) -> HashSet<MapEntry<K, V>, S>
    where
        K: Clone,
        V: Hash + Eq + Clone,
        S: Clone,
    {
        let mut entries = HashSet::with_hasher(self.hash_builder.clone());
        entries.reserve(self.len());
        for (key, value) in self.table.iter() {
            entries.insert(MapEntry::new(key.clone(), value.clone()));
        }
        entries
    }
}
