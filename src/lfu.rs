//! Least Frequently Used Cache Implementation.
//!
//! The LFU cache evicts the entry with the lowest access frequency when a new
//! key arrives and the cache is full. Ties inside the lowest frequency are
//! broken by recency: the entry touched longest ago goes first.
//!
//! # Structure
//!
//! ```text
//!   lookup table                   frequency index
//!  ┌──────────┐          ┌─────┬──────────────────────────────┐
//!  │ key → h  │          │ f=1 │ h7 ⇄ h3 ⇄ h9      ◀── min     │
//!  │ key → h  │          │ f=2 │ h1                           │
//!  │   ...    │          │ f=5 │ h4 ⇄ h2                      │
//!  └──────────┘          └─────┴──────────────────────────────┘
//!        │                        │ (front = most recent)
//!        └──────────┬─────────────┘
//!                   ▼
//!        slab: h → { key, value, frequency, prev, next }
//! ```
//!
//! Every operation is O(1): `get` relocates one handle from bucket `f` to
//! bucket `f + 1`, and eviction pops the back of the bucket addressed by the
//! tracked minimum frequency. Entries are owned by the slab; the lookup table
//! and buckets only hold handles.
//!
//! # Example
//!
//! ```
//! use freq_cache::LfuCache;
//!
//! let mut cache = LfuCache::new(3);
//! cache.put(1, 1);
//! cache.put(2, 2);
//! cache.put(3, 3);
//!
//! assert_eq!(cache.get(&1), Some(&1));   // 1 moves to frequency 2
//! cache.put(4, 4);                       // evicts 2: frequency 1, least recent
//!
//! assert_eq!(cache.get(&2), None);
//! assert_eq!(cache.get(&3), Some(&3));
//! assert_eq!(cache.get(&4), Some(&4));
//! ```

extern crate alloc;

use crate::config::LfuCacheConfig;
use crate::entry::{CacheEntry, INITIAL_FREQUENCY};
use crate::error::ConfigError;
use crate::frequency::FrequencyIndex;
use crate::list::Node;
use crate::metrics::{CacheMetrics, LfuCacheMetrics};
use crate::slab::{Handle, Slab};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use tracing::{debug, trace};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Internal LFU segment containing the actual cache algorithm.
///
/// Shared between `LfuCache` (single-threaded) and the lock-wrapped caches in
/// `concurrent`, so the algorithm lives in exactly one place.
pub(crate) struct LfuSegment<K, V, S = DefaultHashBuilder> {
    config: LfuCacheConfig,

    /// Lookup table: key to the slab handle of its entry
    map: HashMap<K, Handle, S>,

    /// Owns every entry; buckets link entries through their handles
    slab: Slab<Node<CacheEntry<K, V>>>,

    /// Frequency to recency-ordered bucket, plus the eviction tier
    index: FrequencyIndex,

    metrics: LfuCacheMetrics,
}

impl<K: Hash + Eq, V, S: BuildHasher> LfuSegment<K, V, S> {
    pub(crate) fn init(config: LfuCacheConfig, hash_builder: S) -> Self {
        LfuSegment {
            config,
            map: HashMap::with_capacity_and_hasher(config.capacity, hash_builder),
            slab: Slab::with_capacity(config.capacity),
            index: FrequencyIndex::new(),
            metrics: LfuCacheMetrics::new(config.capacity as u64),
        }
    }

    #[inline]
    pub(crate) fn cap(&self) -> usize {
        self.config.capacity
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub(crate) fn metrics(&self) -> &LfuCacheMetrics {
        &self.metrics
    }

    #[inline]
    pub(crate) fn min_frequency(&self) -> Option<u64> {
        self.index.min_frequency()
    }

    /// Moves an entry from its bucket `f` to the front of bucket `f + 1`.
    ///
    /// Returns the new frequency.
    fn promote(&mut self, handle: Handle) -> Option<u64> {
        let old_frequency = self.slab.get(handle)?.value.frequency();

        if let Some(bucket) = self.index.bucket_mut(old_frequency) {
            bucket.remove(&mut self.slab, handle);
        }
        self.index.advance_min_if_needed(old_frequency);
        self.index.drop_if_empty(old_frequency);

        let new_frequency = self.slab.get_mut(handle)?.value.touch();
        self.index
            .bucket_for(new_frequency)
            .push_front(&mut self.slab, handle);

        self.metrics.record_frequency_increment(new_frequency);
        self.observe_levels();
        trace!(old_frequency, new_frequency, "promoted entry");

        Some(new_frequency)
    }

    fn observe_levels(&mut self) {
        self.metrics
            .observe_levels(self.index.min_frequency(), self.index.levels());
    }

    /// Looks up a key and counts the access.
    fn touch<Q>(&mut self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(&handle) = self.map.get(key) else {
            self.metrics.core.record_miss();
            return None;
        };
        self.metrics.core.record_hit();
        self.promote(handle);
        Some(handle)
    }

    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.touch(key)?;
        self.slab.get(handle).map(|node| &node.value.value)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.touch(key)?;
        self.slab.get_mut(handle).map(|node| &mut node.value.value)
    }

    pub(crate) fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = *self.map.get(key)?;
        self.slab.get(handle).map(|node| &node.value.value)
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    pub(crate) fn frequency<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = *self.map.get(key)?;
        self.slab.get(handle).map(|node| node.value.frequency())
    }

    /// Inserts or updates a key.
    ///
    /// Returns the pair that left the cache because of this call: the old
    /// value under `key` on update, or the evicted victim on insertion into
    /// a full cache.
    pub(crate) fn put(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        if self.config.capacity == 0 {
            return None;
        }

        if let Some(&handle) = self.map.get(&key) {
            let old_value = self.slab.get_mut(handle)?.value.replace_value(value);
            self.metrics.core.record_update();
            self.promote(handle);
            return Some((key, old_value));
        }

        let evicted = if self.len() >= self.config.capacity {
            self.evict()
        } else {
            None
        };

        let handle = self
            .slab
            .insert(Node::new(CacheEntry::new(key.clone(), value)));
        self.index
            .bucket_for(INITIAL_FREQUENCY)
            .push_front(&mut self.slab, handle);
        self.map.insert(key, handle);
        self.index.reset_min_to_one();

        self.metrics.core.record_insertion();
        self.observe_levels();

        evicted
    }

    /// Removes the least-recent member of the minimum-frequency bucket.
    ///
    /// Leaves `min_frequency` stale when that bucket empties; callers either
    /// insert at frequency 1 next or recompute.
    fn evict(&mut self) -> Option<(K, V)> {
        let min_frequency = self.index.min_frequency()?;
        let handle = self
            .index
            .bucket_mut(min_frequency)?
            .pop_back(&mut self.slab)?;
        self.index.drop_if_empty(min_frequency);

        let node = self.slab.remove(handle)?;
        self.map.remove(&node.value.key);
        self.metrics.core.record_eviction();
        debug!(
            victim_frequency = min_frequency,
            len = self.map.len(),
            "evicted least frequently used entry"
        );

        Some(node.value.into_pair())
    }

    pub(crate) fn pop(&mut self) -> Option<(K, V)> {
        let evicted = self.evict()?;
        self.index.recompute_min();
        self.observe_levels();
        Some(evicted)
    }

    pub(crate) fn peek_lfu(&self) -> Option<(&K, &V)> {
        let min_frequency = self.index.min_frequency()?;
        let handle = self.index.bucket(min_frequency)?.back()?;
        let entry = &self.slab.get(handle)?.value;
        Some((&entry.key, &entry.value))
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.map.remove(key)?;
        let frequency = self.slab.get(handle)?.value.frequency();

        if let Some(bucket) = self.index.bucket_mut(frequency) {
            bucket.remove(&mut self.slab, handle);
        }
        let was_min = self.index.min_frequency() == Some(frequency);
        if self.index.drop_if_empty(frequency) && was_min {
            self.index.recompute_min();
        }

        let node = self.slab.remove(handle)?;
        self.metrics.core.record_removal();
        self.observe_levels();
        Some(node.value.value)
    }

    pub(crate) fn clear(&mut self) {
        let entries = self.map.len();
        self.map.clear();
        self.slab.clear();
        self.index.clear();
        self.metrics.core.record_clear();
        self.observe_levels();
        debug!(entries, "cleared cache");
    }

    /// Walks every bucket and asserts the structural invariants.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        assert!(self.len() <= self.cap(), "size exceeds capacity");
        assert_eq!(self.slab.len(), self.map.len(), "slab and table disagree");

        let mut indexed = 0;
        let mut lowest: Option<u64> = None;
        for (frequency, bucket) in self.index.iter() {
            assert!(!bucket.is_empty(), "empty bucket at frequency {frequency}");
            let mut members = 0;
            for (handle, entry) in bucket.iter(&self.slab) {
                assert_eq!(entry.frequency(), frequency, "entry in wrong bucket");
                assert_eq!(self.map.get(&entry.key), Some(&handle), "stale handle");
                members += 1;
            }
            assert_eq!(members, bucket.len(), "bucket length drift");
            indexed += members;
            lowest = Some(lowest.map_or(frequency, |l| l.min(frequency)));
        }

        assert_eq!(indexed, self.map.len(), "entries missing from buckets");
        assert_eq!(self.index.min_frequency(), lowest, "min frequency drift");
    }
}

impl<K, V, S> LfuSegment<K, V, S> {
    /// Number of stored entries, without requiring hashing bounds.
    #[inline]
    pub(crate) fn stored(&self) -> usize {
        self.slab.len()
    }
}

impl<K, V, S> fmt::Debug for LfuSegment<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuSegment")
            .field("capacity", &self.config.capacity)
            .field("len", &self.stored())
            .field("levels", &self.index.levels())
            .field("min_frequency", &self.index.min_frequency())
            .finish()
    }
}

/// An implementation of a Least Frequently Used (LFU) cache.
///
/// The cache tracks the frequency of access for each item and evicts the least
/// frequently used item when a new key arrives at capacity. In case of a tie in
/// frequency, the least recently used item among those with the same frequency
/// is evicted.
///
/// Both `get` hits and `put` on an existing key count as an access.
///
/// # Examples
///
/// ```
/// use freq_cache::LfuCache;
///
/// let mut cache = LfuCache::new(2);
///
/// cache.put("a", 1);
/// cache.put("b", 2);
///
/// // Access "a" to increase its frequency
/// assert_eq!(cache.get(&"a"), Some(&1));
///
/// // "b" has the lowest frequency and is evicted
/// assert_eq!(cache.put("c", 3), Some(("b", 2)));
/// assert_eq!(cache.get(&"b"), None);
/// ```
pub struct LfuCache<K, V, S = DefaultHashBuilder> {
    segment: LfuSegment<K, V, S>,
}

impl<K, V, S> fmt::Debug for LfuCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCache")
            .field("segment", &self.segment)
            .finish()
    }
}

impl<K: Hash + Eq, V> LfuCache<K, V> {
    /// Creates a new LFU cache holding at most `capacity` entries.
    ///
    /// A capacity of zero produces a cache that never stores anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use freq_cache::LfuCache;
    ///
    /// let cache: LfuCache<&str, u32> = LfuCache::new(10);
    /// assert_eq!(cache.cap(), 10);
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::init(LfuCacheConfig::new(capacity))
    }

    /// Creates a cache from a configuration.
    pub fn init(config: LfuCacheConfig) -> Self {
        Self::init_with_hasher(config, DefaultHashBuilder::default())
    }

    /// Creates a cache from a signed capacity, rejecting negative values.
    ///
    /// # Examples
    ///
    /// ```
    /// use freq_cache::error::ConfigError;
    /// use freq_cache::LfuCache;
    ///
    /// assert!(LfuCache::<u32, u32>::try_new(0).is_ok());
    /// assert_eq!(
    ///     LfuCache::<u32, u32>::try_new(-2).unwrap_err(),
    ///     ConfigError::NegativeCapacity(-2)
    /// );
    /// ```
    pub fn try_new(capacity: i64) -> Result<Self, ConfigError> {
        LfuCacheConfig::try_from(capacity).map(Self::init)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LfuCache<K, V, S> {
    /// Creates a new LFU cache with the specified capacity and hash builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use freq_cache::LfuCache;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let cache: LfuCache<&str, u32, _> = LfuCache::with_hasher(10, RandomState::new());
    /// assert!(cache.is_empty());
    /// ```
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Self {
        Self::init_with_hasher(LfuCacheConfig::new(capacity), hash_builder)
    }

    /// Creates a cache from a configuration and a hash builder.
    pub fn init_with_hasher(config: LfuCacheConfig, hash_builder: S) -> Self {
        Self {
            segment: LfuSegment::init(config, hash_builder),
        }
    }

    /// Returns the maximum number of key-value pairs the cache can hold.
    #[inline]
    pub fn cap(&self) -> usize {
        self.segment.cap()
    }

    /// Returns the current number of key-value pairs in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.segment.len()
    }

    /// Returns `true` if the cache contains no key-value pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment.is_empty()
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the cache's key type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for
    /// the key type.
    ///
    /// A hit increases the entry's frequency by one and makes it the most
    /// recent entry of its new frequency. A miss changes nothing.
    #[inline]
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// Counts as an access exactly like [`get`](Self::get).
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get_mut(key)
    }

    /// Returns the value for `key` without counting an access.
    #[inline]
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.peek(key)
    }

    /// Returns `true` if the key is cached. Does not count an access.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.contains_key(key)
    }

    /// Returns the current access frequency of `key`, without counting an access.
    ///
    /// # Examples
    ///
    /// ```
    /// use freq_cache::LfuCache;
    ///
    /// let mut cache = LfuCache::new(2);
    /// cache.put("a", 1);
    /// assert_eq!(cache.frequency(&"a"), Some(1));
    /// cache.get(&"a");
    /// cache.put("a", 2);
    /// assert_eq!(cache.frequency(&"a"), Some(3));
    /// ```
    #[inline]
    pub fn frequency<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.frequency(key)
    }

    /// Returns the frequency of the current eviction tier, or `None` when empty.
    #[inline]
    pub fn min_frequency(&self) -> Option<u64> {
        self.segment.min_frequency()
    }

    /// Inserts a key-value pair into the cache.
    ///
    /// If the cache already contained this key, the value is replaced, the
    /// entry's frequency is bumped as for a `get` hit, and `(key, old_value)`
    /// is returned. Otherwise, if the cache is at capacity, the least
    /// frequently used entry (least recently used among ties) is evicted and
    /// returned.
    ///
    /// New items are inserted with a frequency of 1. With a capacity of zero
    /// this does nothing and returns `None`.
    #[inline]
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        self.segment.put(key, value)
    }

    /// Removes a key from the cache, returning the value at the key if the key was previously in the cache.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.remove(key)
    }

    /// Clears the cache, removing all key-value pairs.
    #[inline]
    pub fn clear(&mut self) {
        self.segment.clear()
    }

    /// Removes and returns the eviction candidate (least frequently used item).
    ///
    /// # Examples
    ///
    /// ```
    /// use freq_cache::LfuCache;
    ///
    /// let mut cache = LfuCache::new(2);
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    /// cache.get(&"b"); // Increase frequency of "b"
    ///
    /// assert_eq!(cache.pop(), Some(("a", 1)));
    /// assert_eq!(cache.min_frequency(), Some(2));
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<(K, V)> {
        self.segment.pop()
    }

    /// Returns the entry that the next eviction would remove, without removing it.
    #[inline]
    pub fn peek_lfu(&self) -> Option<(&K, &V)> {
        self.segment.peek_lfu()
    }

    /// Returns a snapshot of the cache's counters.
    #[inline]
    pub fn stats(&self) -> &LfuCacheMetrics {
        self.segment.metrics()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LfuCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.segment.metrics().algorithm_name()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::{String, ToString};
    use std::vec::Vec;

    #[test]
    fn test_lfu_scenario_from_capacity_three() {
        let mut cache = LfuCache::new(3);
        cache.put(1, 1);
        cache.put(2, 2);
        cache.put(3, 3);
        assert_eq!(cache.len(), 3);
        cache.segment.check_invariants();

        assert_eq!(cache.get(&1), Some(&1));
        assert_eq!(cache.frequency(&1), Some(2));
        assert_eq!(cache.peek_lfu(), Some((&2, &2)));

        assert_eq!(cache.put(4, 4), Some((2, 2)));
        cache.segment.check_invariants();

        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&3), Some(&3));
        assert_eq!(cache.get(&4), Some(&4));
        assert_eq!(cache.frequency(&3), Some(2));
        assert_eq!(cache.frequency(&4), Some(2));
        cache.segment.check_invariants();
    }

    #[test]
    fn test_lfu_basic() {
        let mut cache = LfuCache::new(3);

        assert_eq!(cache.put("a", 1), None);
        assert_eq!(cache.put("b", 2), None);
        assert_eq!(cache.put("c", 3), None);

        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"b"), Some(&2));

        // "c" is the only entry left at frequency 1
        let (evicted_key, evicted_val) = cache.put("d", 4).unwrap();
        assert_eq!(evicted_key, "c");
        assert_eq!(evicted_val, 3);

        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"d"), Some(&4));
        assert_eq!(cache.get(&"c"), None);
        cache.segment.check_invariants();
    }

    #[test]
    fn test_lfu_frequency_ordering() {
        let mut cache = LfuCache::new(2);

        cache.put("a", 1);
        cache.put("b", 2);

        cache.get(&"a");
        cache.get(&"a");
        cache.get(&"a");
        cache.get(&"b");

        let evicted = cache.put("c", 3);
        assert_eq!(evicted.unwrap().0, "b");

        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"c"), Some(&3));
        assert_eq!(cache.get(&"b"), None);
    }

    #[test]
    fn test_lfu_tie_break_is_least_recent() {
        let mut cache = LfuCache::new(3);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);

        // All at frequency 2, "b" touched first
        cache.get(&"b");
        cache.get(&"c");
        cache.get(&"a");

        assert_eq!(cache.put("d", 4), Some(("b", 2)));
        cache.segment.check_invariants();
    }

    #[test]
    fn test_lfu_update_existing() {
        let mut cache = LfuCache::new(2);

        cache.put("a", 1);
        cache.get(&"a");

        let old_value = cache.put("a", 10);
        assert_eq!(old_value, Some(("a", 1)));
        assert_eq!(cache.frequency(&"a"), Some(3));
        assert_eq!(cache.len(), 1);

        cache.put("b", 2);
        cache.put("c", 3); // evicts "b": frequency 1

        assert_eq!(cache.get(&"a"), Some(&10));
        assert_eq!(cache.get(&"c"), Some(&3));
        assert_eq!(cache.get(&"b"), None);
    }

    #[test]
    fn test_lfu_update_promotes_like_get() {
        let mut cache = LfuCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);

        // Updating "a" lifts it out of the minimum tier
        cache.put("a", 11);
        assert_eq!(cache.min_frequency(), Some(1));
        assert_eq!(cache.put("c", 3), Some(("b", 2)));
        assert_eq!(cache.peek(&"a"), Some(&11));
        cache.segment.check_invariants();
    }

    #[test]
    fn test_lfu_zero_capacity() {
        let mut cache = LfuCache::new(0);
        assert_eq!(cache.put("a", 1), None);
        assert_eq!(cache.put("a", 2), None);
        assert_eq!(cache.get(&"a"), None);
        assert!(cache.is_empty());
        assert_eq!(cache.pop(), None);
        assert_eq!(cache.min_frequency(), None);
        cache.segment.check_invariants();
    }

    #[test]
    fn test_lfu_capacity_one() {
        let mut cache = LfuCache::new(1);
        cache.put("a", 1);
        cache.get(&"a");
        cache.get(&"a");
        assert_eq!(cache.put("b", 2), Some(("a", 1)));
        assert_eq!(cache.min_frequency(), Some(1));
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(&2));
        cache.segment.check_invariants();
    }

    #[test]
    fn test_min_frequency_advances_on_promotion() {
        let mut cache = LfuCache::new(3);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.get(&"a");
        assert_eq!(cache.min_frequency(), Some(1));
        cache.get(&"b");
        assert_eq!(cache.min_frequency(), Some(2));
        cache.get(&"b");
        assert_eq!(cache.min_frequency(), Some(2));
        cache.get(&"a");
        assert_eq!(cache.min_frequency(), Some(3));
        cache.segment.check_invariants();
    }

    #[test]
    fn test_lfu_remove() {
        let mut cache = LfuCache::new(3);

        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);

        assert_eq!(cache.remove(&"b"), Some(2));
        assert_eq!(cache.remove(&"b"), None);

        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"c"), Some(&3));
        assert_eq!(cache.len(), 2);
        cache.segment.check_invariants();
    }

    #[test]
    fn test_remove_last_of_min_tier_recomputes_min() {
        let mut cache = LfuCache::new(3);
        cache.put("a", 1);
        cache.put("b", 2);
        for _ in 0..4 {
            cache.get(&"b");
        }
        assert_eq!(cache.min_frequency(), Some(1));

        cache.remove(&"a");
        assert_eq!(cache.min_frequency(), Some(5));
        cache.segment.check_invariants();

        cache.remove(&"b");
        assert_eq!(cache.min_frequency(), None);
        cache.segment.check_invariants();
    }

    #[test]
    fn test_lfu_pop_order() {
        let mut cache = LfuCache::new(4);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        cache.get(&"a");
        cache.get(&"a");
        cache.get(&"c");

        assert_eq!(cache.pop(), Some(("b", 2)));
        assert_eq!(cache.pop(), Some(("c", 3)));
        assert_eq!(cache.pop(), Some(("a", 1)));
        assert_eq!(cache.pop(), None);
        cache.segment.check_invariants();
    }

    #[test]
    fn test_lfu_clear() {
        let mut cache = LfuCache::new(3);

        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);

        assert_eq!(cache.len(), 3);
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.min_frequency(), None);

        cache.put("d", 4);
        assert_eq!(cache.get(&"d"), Some(&4));
        cache.segment.check_invariants();
    }

    #[test]
    fn test_peek_and_contains_do_not_promote() {
        let mut cache = LfuCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);

        assert_eq!(cache.peek(&"a"), Some(&1));
        assert!(cache.contains_key(&"a"));
        assert_eq!(cache.frequency(&"a"), Some(1));

        // "a" is still the least recent entry at frequency 1
        assert_eq!(cache.put("c", 3), Some(("a", 1)));
    }

    #[test]
    fn test_lfu_get_mut() {
        let mut cache = LfuCache::new(2);

        cache.put("a", 1);

        if let Some(value) = cache.get_mut(&"a") {
            *value = 10;
        }

        assert_eq!(cache.frequency(&"a"), Some(2));
        assert_eq!(cache.get(&"a"), Some(&10));
    }

    #[test]
    fn test_lfu_complex_values() {
        let mut cache = LfuCache::new(2);

        #[derive(Debug, Clone, PartialEq)]
        struct ComplexValue {
            id: usize,
            data: String,
        }

        cache.put(
            "a",
            ComplexValue {
                id: 1,
                data: "a-data".to_string(),
            },
        );

        cache.put(
            "b",
            ComplexValue {
                id: 2,
                data: "b-data".to_string(),
            },
        );

        if let Some(value) = cache.get_mut(&"a") {
            value.id = 100;
            value.data = "a-modified".to_string();
        }

        let a = cache.get(&"a").unwrap();
        assert_eq!(a.id, 100);
        assert_eq!(a.data, "a-modified");
    }

    #[test]
    fn test_borrowed_key_lookup() {
        let mut cache: LfuCache<String, i32> = LfuCache::new(2);
        cache.put("key".to_string(), 1);
        assert_eq!(cache.get("key"), Some(&1));
        assert_eq!(cache.frequency("key"), Some(2));
        assert_eq!(cache.remove("key"), Some(1));
    }

    #[test]
    fn test_slab_slots_are_reused() {
        let mut cache = LfuCache::new(2);
        for i in 0..100 {
            cache.put(i, i);
        }
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.segment.slab.len(), 2);
        cache.segment.check_invariants();
    }

    #[test]
    fn test_metrics_counts() {
        let mut cache = LfuCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.get(&"a");
        cache.get(&"missing");
        cache.put("a", 3);
        cache.put("c", 3);
        cache.remove(&"c");

        let stats = cache.stats();
        assert_eq!(stats.core.requests, 2);
        assert_eq!(stats.core.cache_hits, 1);
        assert_eq!(stats.core.insertions, 3);
        assert_eq!(stats.core.updates, 1);
        assert_eq!(stats.core.evictions, 1);
        assert_eq!(stats.core.removals, 1);
        assert_eq!(stats.core.entries, 1);
        assert_eq!(stats.frequency_increments, 2);
        assert_eq!(stats.max_frequency, 3);
        assert_eq!(stats.min_frequency, 3);
        assert_eq!(stats.active_frequency_levels, 1);

        let metrics = cache.metrics();
        assert_eq!(metrics.get("evictions"), Some(&1.0));
        assert_eq!(cache.algorithm_name(), "LFU");
    }

    #[test]
    fn test_try_new() {
        assert!(LfuCache::<u8, u8>::try_new(4).is_ok());
        assert_eq!(
            LfuCache::<u8, u8>::try_new(-1).unwrap_err(),
            ConfigError::NegativeCapacity(-1)
        );
    }

    #[test]
    fn test_invariants_under_mixed_workload() {
        let mut cache = LfuCache::new(8);
        let mut keys: Vec<u32> = Vec::new();
        for i in 0..500u32 {
            let key = (i * 7 + i / 3) % 23;
            match i % 5 {
                0 | 1 => {
                    cache.put(key, i);
                    keys.push(key);
                }
                2 | 3 => {
                    cache.get(&key);
                }
                _ => {
                    if i % 10 == 4 {
                        cache.remove(&key);
                    } else {
                        cache.pop();
                    }
                }
            }
            cache.segment.check_invariants();
        }
        assert!(!keys.is_empty());
    }

    #[test]
    fn test_lfu_concurrent_access() {
        use std::sync::{Arc, Mutex};
        use std::thread;

        let cache = Arc::new(Mutex::new(LfuCache::new(100)));
        let num_threads = 4;
        let ops_per_thread = 100;

        let mut handles: Vec<std::thread::JoinHandle<()>> = Vec::new();

        for t in 0..num_threads {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = std::format!("key_{}_{}", t, i);
                    let mut guard = cache.lock().unwrap();
                    guard.put(key.clone(), i);
                    if i % 3 == 0 {
                        let _ = guard.get(&key);
                        let _ = guard.get(&key);
                    }
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let guard = cache.lock().unwrap();
        assert!(guard.len() <= 100);
        guard.segment.check_invariants();
    }
}
